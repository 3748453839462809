// SPDX-License-Identifier: MPL-2.0
//! Viewer component: page list, page geometry and input handling.
//!
//! Raw iced events arrive through [`Message::RawEvent`], are decoded into a
//! [`Trigger`], mapped to a [`Command`] for the current [`InputMode`] and
//! executed here. Commands that need the surrounding application (dialogs,
//! exit) are returned as an [`Effect`].

use super::controls::{self, Command, InputMode, Trigger};
use super::{empty_state, page_canvas::PageCanvas};
use crate::config::{Config, ScanConfig, FALLBACK_SCREEN_HEIGHT, FALLBACK_SCREEN_WIDTH};
use crate::directory_scanner::PageList;
use crate::error::Result;
use crate::ui::state::viewport::{PageGeometry, PixelSize};
use iced::widget::{canvas, container, image};
use iced::{event, keyboard, mouse, window, Color, Element, Length, Point, Size, Theme};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Pixel scroll distance treated as one wheel notch.
const PIXELS_PER_NOTCH: f32 = 120.0;

#[derive(Debug, Clone)]
pub enum Message {
    RawEvent(event::Event),
    /// Open a file or directory chosen by the user.
    OpenPath(PathBuf),
    /// A folder dialog closed; the modifier release was swallowed by it.
    FolderDialogClosed,
}

/// Side effects the viewer asks the application to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    OpenFileDialog,
    OpenFolderDialog,
    Exit,
}

/// Page currently on screen.
#[derive(Debug, Clone)]
struct DisplayedPage {
    path: PathBuf,
    handle: image::Handle,
    natural_size: Option<(u32, u32)>,
}

#[derive(Debug, Clone)]
pub struct State {
    pages: PageList,
    geometry: PageGeometry,
    mode: InputMode,
    displayed: Option<DisplayedPage>,
    cursor_position: Option<Point>,
    last_left_press: Option<Instant>,
    scan: ScanConfig,
    wheel_factor: i32,
    double_click_interval: Duration,
    last_error: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl State {
    pub fn new(config: &Config) -> Self {
        let controls = config.controls.sanitized();
        Self {
            pages: PageList::new(),
            geometry: PageGeometry::new(
                PixelSize::new(FALLBACK_SCREEN_WIDTH, FALLBACK_SCREEN_HEIGHT),
                &controls,
                &config.display,
            ),
            mode: InputMode::Normal,
            displayed: None,
            cursor_position: None,
            last_left_press: None,
            scan: config.scan.sanitized(),
            wheel_factor: controls.wheel_factor,
            double_click_interval: controls.double_click_interval(),
            last_error: None,
        }
    }

    pub fn pages(&self) -> &PageList {
        &self.pages
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    /// Path of the page currently rendered, if any.
    pub fn displayed_page(&self) -> Option<&Path> {
        self.displayed.as_ref().map(|page| page.path.as_path())
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Replaces the page list with the pages found for `path`.
    ///
    /// On failure the current pages, geometry and rendered page are kept.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        let pages = PageList::open(path, &self.scan)?;
        log::info!(
            "opened {} ({} pages, starting at {:?})",
            path.display(),
            pages.len(),
            pages.current_index()
        );

        self.pages = pages;
        self.last_error = None;
        self.geometry.reset();
        self.displayed = None;
        self.reload_page();
        Ok(())
    }

    /// Moves `direction` pages forward (negative: backward), wrapping around.
    pub fn change_page(&mut self, direction: i32) {
        if self.pages.advance(direction).is_some() {
            self.reload_page();
        }
    }

    pub fn change_page_size(&mut self, direction: i32, factor: i32) {
        if !self.geometry.change_size(direction, factor) {
            log::debug!("page size floor reached, resize ignored");
        }
    }

    pub fn scroll_page(&mut self, direction: i32, factor: i32) {
        self.geometry.scroll(direction, factor);
    }

    fn reload_page(&mut self) {
        let Some(path) = self.pages.current() else {
            return;
        };

        let natural_size = match image_rs::image_dimensions(path) {
            Ok(size) => Some(size),
            Err(err) => {
                log::debug!("cannot read size of {}: {}", path.display(), err);
                None
            }
        };
        self.displayed = Some(DisplayedPage {
            path: path.to_path_buf(),
            handle: image::Handle::from_path(path),
            natural_size,
        });
        self.geometry.recenter();
    }

    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::RawEvent(event) => self.handle_raw_event(event),
            Message::OpenPath(path) => {
                if let Err(err) = self.open(&path) {
                    log::error!("failed to open {}: {}", path.display(), err);
                    self.last_error = Some(err.to_string());
                }
                Effect::None
            }
            Message::FolderDialogClosed => {
                self.mode.release();
                Effect::None
            }
        }
    }

    fn handle_raw_event(&mut self, event: event::Event) -> Effect {
        match event {
            event::Event::Window(
                window::Event::Opened { size, .. } | window::Event::Resized(size),
            ) => {
                self.set_screen_size(size);
                Effect::None
            }
            event::Event::Keyboard(keyboard_event) => self.handle_keyboard_event(keyboard_event),
            event::Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            _ => Effect::None,
        }
    }

    fn set_screen_size(&mut self, size: Size) {
        self.geometry.set_screen(PixelSize::new(
            size.width.round() as i32,
            size.height.round() as i32,
        ));
    }

    fn handle_keyboard_event(&mut self, event: keyboard::Event) -> Effect {
        match event {
            keyboard::Event::KeyPressed { key, .. } => self.handle_key_pressed(&key),
            keyboard::Event::KeyReleased { key, .. } => {
                self.handle_key_released(&key);
                Effect::None
            }
            _ => Effect::None,
        }
    }

    fn handle_key_pressed(&mut self, key: &keyboard::Key) -> Effect {
        use keyboard::key::Named;
        use keyboard::Key;

        let trigger = match key.as_ref() {
            Key::Named(Named::Control) => {
                self.mode.press();
                return Effect::None;
            }
            Key::Named(Named::ArrowLeft) => Trigger::PreviousPage,
            Key::Named(Named::ArrowRight) => Trigger::NextPage,
            Key::Named(Named::ArrowUp) => Trigger::ScrollUp,
            Key::Named(Named::ArrowDown) => Trigger::ScrollDown,
            Key::Named(Named::Escape) => Trigger::Exit,
            Key::Named(Named::Space) => Trigger::Open,
            Key::Character("+") => Trigger::ZoomIn,
            Key::Character("-") => Trigger::ZoomOut,
            _ => return Effect::None,
        };
        self.dispatch(trigger)
    }

    fn handle_key_released(&mut self, key: &keyboard::Key) {
        if let keyboard::Key::Named(keyboard::key::Named::Control) = key {
            self.mode.release();
        }
    }

    fn handle_mouse_event(&mut self, event: mouse::Event) -> Effect {
        match event {
            mouse::Event::CursorMoved { position } => {
                self.cursor_position = Some(position);
                Effect::None
            }
            mouse::Event::CursorLeft => {
                self.cursor_position = None;
                Effect::None
            }
            mouse::Event::WheelScrolled { delta } => self.dispatch(Trigger::Wheel(wheel_notches(delta))),
            mouse::Event::ButtonPressed(mouse::Button::Right) => {
                self.mode.press();
                Effect::None
            }
            mouse::Event::ButtonReleased(mouse::Button::Right) => {
                self.mode.release();
                Effect::None
            }
            mouse::Event::ButtonPressed(mouse::Button::Middle) => self.dispatch(Trigger::Open),
            mouse::Event::ButtonPressed(mouse::Button::Left) => self.handle_left_press(Instant::now()),
            _ => Effect::None,
        }
    }

    /// A left press pages by screen half; a second press within the double
    /// click interval additionally counts as a double click.
    fn handle_left_press(&mut self, now: Instant) -> Effect {
        let is_double_click = self
            .last_left_press
            .is_some_and(|previous| now.saturating_duration_since(previous) <= self.double_click_interval);
        self.last_left_press = if is_double_click { None } else { Some(now) };

        let half = self.geometry.screen().width as f32 / 2.0;
        let page_trigger = match self.cursor_position {
            Some(position) if position.x > half => Trigger::NextPage,
            _ => Trigger::PreviousPage,
        };
        let effect = self.dispatch(page_trigger);

        if is_double_click {
            self.dispatch(Trigger::DoubleClick)
        } else {
            effect
        }
    }

    fn dispatch(&mut self, trigger: Trigger) -> Effect {
        let Some(command) = controls::command(trigger, self.mode, self.wheel_factor) else {
            return Effect::None;
        };

        match command {
            Command::ChangePage(direction) => self.change_page(direction),
            Command::ChangePageSize { direction, factor } => {
                self.change_page_size(direction, factor)
            }
            Command::ScrollPage { direction, factor } => self.scroll_page(direction, factor),
            Command::OpenFile => return Effect::OpenFileDialog,
            Command::OpenFolder => return Effect::OpenFolderDialog,
            Command::Exit => return Effect::Exit,
        }
        Effect::None
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.displayed {
            Some(page) => canvas::Canvas::new(PageCanvas::new(
                page.handle.clone(),
                self.geometry.offset(),
                self.geometry.size(),
                page.natural_size,
            ))
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
            None => empty_state::view(self.last_error.as_deref()),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true)
            .style(|_theme: &Theme| container::Style {
                background: Some(Color::BLACK.into()),
                ..Default::default()
            })
            .into()
    }
}

/// Converts a wheel delta into whole notches, positive when scrolling up.
fn wheel_notches(delta: mouse::ScrollDelta) -> i32 {
    let y = match delta {
        mouse::ScrollDelta::Lines { y, .. } => y,
        mouse::ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_NOTCH,
    };
    if y == 0.0 {
        return 0;
    }
    let notches = y.round() as i32;
    if notches == 0 {
        y.signum() as i32
    } else {
        notches
    }
}
