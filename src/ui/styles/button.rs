// SPDX-License-Identifier: MPL-2.0
//! Button style functions shared across screens.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::button;
use iced::{Border, Color, Theme};

/// Style for the currently selected navigation target.
pub fn selected(theme: &Theme, _status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    button::Style {
        background: Some(palette.primary.strong.color.into()),
        text_color: palette.primary.strong.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Style for a disabled action.
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    |theme: &Theme, _status| {
        let palette = theme.extended_palette();

        button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette.background.base.text
            },
            border: Border::default(),
            ..Default::default()
        }
    }
}

/// Style for destructive actions such as deleting a work or logging out.
pub fn destructive(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(palette.danger.strong.color.into())
        }
        _ => None,
    };
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette.danger.strong.text,
        _ => palette.danger.base.color,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette.danger.base.color,
        },
        ..Default::default()
    }
}

/// Transparent style for secondary navigation actions.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered => Some(palette.background.strong.color.into()),
        button::Status::Pressed => Some(palette.primary.weak.color.into()),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
