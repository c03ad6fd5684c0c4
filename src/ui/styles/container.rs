// SPDX-License-Identifier: MPL-2.0
//! Container style functions shared across screens.

use crate::ui::design_tokens::{border, radius};
use iced::widget::container;
use iced::{Border, Theme};

/// Card surface used for the profile header, the carousel, and forms.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            radius: radius::LG.into(),
            width: border::WIDTH_SM,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}

/// Top toolbar background behind the navigation bar.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.weak.color.into()),
        border: Border {
            width: border::WIDTH_SM,
            color: palette.background.strong.color,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Placeholder surface shown where an image cannot be rendered.
pub fn placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(palette.background.strong.color.into()),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}
