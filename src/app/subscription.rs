// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard, mouse, window open and window resize events are forwarded to the viewer.

use super::Message;
use crate::ui::viewer::component;
use iced::{event, Subscription};

/// Routes native input events to the viewer.
///
/// Events captured by a widget are dropped, except for window open and
/// resize events which always update the page geometry.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        let forward = match &event {
            event::Event::Window(
                iced::window::Event::Opened { .. } | iced::window::Event::Resized(_),
            ) => true,
            event::Event::Window(_) => false,
            _ => matches!(status, event::Status::Ignored),
        };

        forward.then(|| Message::Viewer(component::Message::RawEvent(event)))
    })
}
