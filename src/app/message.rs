// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::viewer::component;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    /// Result from the open file dialog (`None` when cancelled).
    OpenFileDialogResult(Option<PathBuf>),
    /// Result from the open folder dialog (`None` when cancelled).
    OpenFolderDialogResult(Option<PathBuf>),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional file or directory to open on startup.
    pub file_path: Option<String>,
    /// Optional config directory holding `settings.toml`.
    pub config_dir: Option<String>,
}
