// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::ui::viewer::component::{self, Effect};
use iced::Task;
use std::path::PathBuf;

/// Forwards a message to the viewer and performs the effect it requests.
pub fn handle_viewer_message(
    viewer: &mut component::State,
    message: component::Message,
) -> Task<Message> {
    let effect = viewer.handle_message(message);
    handle_effect(effect)
}

pub fn handle_effect(effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::OpenFileDialog => handle_open_file_dialog(dirs::desktop_dir()),
        Effect::OpenFolderDialog => handle_open_folder_dialog(),
        Effect::Exit => iced::exit(),
    }
}

/// Shows the native file picker, starting in `start_directory` if it exists.
pub fn handle_open_file_dialog(start_directory: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new().set_title("Open page");

            if let Some(dir) = start_directory {
                if dir.exists() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_file().await.map(|h| h.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

/// Shows the native folder picker.
pub fn handle_open_folder_dialog() -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title("Open folder")
                .pick_folder()
                .await
                .map(|h| h.path().to_path_buf())
        },
        Message::OpenFolderDialogResult,
    )
}

/// Opens the picked file; a cancelled dialog changes nothing.
pub fn handle_open_file_dialog_result(
    viewer: &mut component::State,
    path: Option<PathBuf>,
) -> Task<Message> {
    let Some(path) = path else {
        log::debug!("open file dialog cancelled");
        return Task::none();
    };

    handle_viewer_message(viewer, component::Message::OpenPath(path))
}

/// Opens the picked folder. The input mode is reset either way because the
/// dialog swallowed the modifier release.
pub fn handle_open_folder_dialog_result(
    viewer: &mut component::State,
    path: Option<PathBuf>,
) -> Task<Message> {
    viewer.handle_message(component::Message::FolderDialogClosed);

    let Some(path) = path else {
        log::debug!("open folder dialog cancelled");
        return Task::none();
    };

    handle_viewer_message(viewer, component::Message::OpenPath(path))
}
