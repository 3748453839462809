// SPDX-License-Identifier: MPL-2.0
//! Canvas drawing the current page at its geometry.
//!
//! The page box may be larger than the window or start at negative
//! coordinates, so the image is painted on a full-window canvas instead of
//! being laid out as a widget.

use crate::ui::state::viewport::{PixelOffset, PixelSize};
use iced::widget::{canvas, image};
use iced::{mouse, Point, Rectangle, Size, Theme};

/// Draws one page image inside its page box, preserving aspect ratio.
#[derive(Debug, Clone)]
pub struct PageCanvas {
    handle: image::Handle,
    page_box: Rectangle,
    natural_size: Option<Size>,
}

impl PageCanvas {
    pub fn new(
        handle: image::Handle,
        offset: PixelOffset,
        size: PixelSize,
        natural_size: Option<(u32, u32)>,
    ) -> Self {
        Self {
            handle,
            page_box: Rectangle::new(
                Point::new(offset.x as f32, offset.y as f32),
                Size::new(size.width as f32, size.height as f32),
            ),
            natural_size: natural_size.map(|(w, h)| Size::new(w as f32, h as f32)),
        }
    }
}

/// Largest rectangle with the image's aspect ratio that fits in `page_box`,
/// centered in it. Without a known image size the whole box is used.
pub fn contain(page_box: Rectangle, natural_size: Option<Size>) -> Rectangle {
    let Some(natural) = natural_size.filter(|s| s.width > 0.0 && s.height > 0.0) else {
        return page_box;
    };

    let scale = (page_box.width / natural.width).min(page_box.height / natural.height);
    let size = Size::new(natural.width * scale, natural.height * scale);
    Rectangle::new(
        Point::new(
            page_box.x + (page_box.width - size.width) / 2.0,
            page_box.y + (page_box.height - size.height) / 2.0,
        ),
        size,
    )
}

impl<Message> canvas::Program<Message> for PageCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        frame.draw_image(
            contain(self.page_box, self.natural_size),
            canvas::Image::new(self.handle.clone()),
        );
        vec![frame.into_geometry()]
    }
}
