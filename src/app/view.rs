// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::ui::viewer::component;
use iced::Element;

/// Renders the viewer, the only screen.
pub fn view(viewer: &component::State) -> Element<'_, Message> {
    viewer.view().map(Message::Viewer)
}
