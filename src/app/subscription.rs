// SPDX-License-Identifier: MPL-2.0
//! Event and timer subscriptions for the application.
//!
//! All timers are declarative: they exist only while the state says they
//! should. The slideshow subscription in particular is the carousel's
//! auto-advance timer — deriving it from the carousel state means there is
//! never more than one instance, and pausing, leaving the gallery screen, or
//! shrinking the collection to a single work cancels it by construction.

use super::{Message, Screen};
use crate::config;
use crate::gallery::Carousel;
use crate::ui::gallery_page;
use iced::keyboard;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the slideshow auto-advance subscription.
///
/// Ticks every [`config::SLIDESHOW_INTERVAL_MS`] while the gallery screen is
/// active, the carousel is playing, and there is more than one work.
pub fn create_slideshow_subscription(
    screen: Screen,
    carousel: &Carousel,
    work_count: usize,
) -> Subscription<Message> {
    if screen == Screen::Gallery && carousel.should_auto_advance(work_count) {
        time::every(Duration::from_millis(config::SLIDESHOW_INTERVAL_MS))
            .map(|_| Message::Gallery(gallery_page::Message::SlideshowTick))
    } else {
        Subscription::none()
    }
}

/// Creates a periodic tick subscription for notification auto-dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the keyboard subscription for the current screen.
///
/// On the gallery screen, arrow keys step through the carousel and space
/// toggles the slideshow; events captured by widgets are left alone.
pub fn create_event_subscription(screen: Screen) -> Subscription<Message> {
    match screen {
        Screen::Gallery => event::listen_with(|event, status, _window| {
            if matches!(status, event::Status::Captured) {
                return None;
            }

            if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event {
                return match key {
                    keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                        Some(Message::Gallery(gallery_page::Message::NextWork))
                    }
                    keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                        Some(Message::Gallery(gallery_page::Message::PreviousWork))
                    }
                    keyboard::Key::Named(keyboard::key::Named::Space) => {
                        Some(Message::Gallery(gallery_page::Message::TogglePlay))
                    }
                    _ => None,
                };
            }

            None
        }),
        Screen::Admin | Screen::Settings => Subscription::none(),
    }
}
