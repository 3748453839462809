// SPDX-License-Identifier: MPL-2.0
//! Empty state view displayed when no page is shown.
//!
//! Lists the open/exit controls, and the last open error if there was one.

use super::component::Message;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Color, Element, Length};

const HINT_COLOR: Color = Color::from_rgb(0.6, 0.6, 0.6);
const ERROR_COLOR: Color = Color::from_rgb(0.9, 0.4, 0.4);

const HINTS: [&str; 3] = [
    "Space or middle click: open a file",
    "Ctrl + Space or right button + middle click: open a folder",
    "Escape: exit",
];

pub fn view(error: Option<&str>) -> Element<'_, Message> {
    let mut content = Column::new()
        .spacing(12)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("No page open").size(28).color(HINT_COLOR));

    if let Some(error) = error {
        content = content.push(Text::new(error).size(16).color(ERROR_COLOR));
    }

    for hint in HINTS {
        content = content.push(Text::new(hint).size(14).color(HINT_COLOR));
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
