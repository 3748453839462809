// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct owns the viewer, translates top-level messages into
//! viewer updates, and runs the side effects the viewer asks for (native
//! dialogs, exit).

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::ui::viewer::component;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

const APP_NAME: &str = "Manga Reader";

/// Root Iced application state.
pub struct App {
    viewer: component::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("pages", &self.viewer.pages().len())
            .field("current", &self.viewer.pages().current_index())
            .finish()
    }
}

/// Builds the window settings: full screen, without decorations.
pub fn window_settings() -> window::Settings {
    window::Settings {
        fullscreen: true,
        decorations: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed only once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads preferences from the flagged config directory (or the default
    /// one), then opens the CLI path or shows the file picker.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.as_ref().map(PathBuf::from));
        if let Some(warning) = config_warning {
            log::warn!("{warning}");
        }

        let mut app = App {
            viewer: component::State::new(&config),
        };

        let task = match flags.file_path {
            Some(path) => update::handle_viewer_message(
                &mut app.viewer,
                component::Message::OpenPath(PathBuf::from(path)),
            ),
            None => update::handle_open_file_dialog(dirs::desktop_dir()),
        };

        (app, task)
    }

    fn title(&self) -> String {
        let file_name = self
            .viewer
            .displayed_page()
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str());

        match file_name {
            Some(name) => format!("{name} - {APP_NAME}"),
            None => APP_NAME.to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut self.viewer, viewer_message)
            }
            Message::OpenFileDialogResult(path) => {
                update::handle_open_file_dialog_result(&mut self.viewer, path)
            }
            Message::OpenFolderDialogResult(path) => {
                update::handle_open_folder_dialog_result(&mut self.viewer, path)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&self.viewer)
    }
}
