// SPDX-License-Identifier: MPL-2.0
//! Page viewer: the controller owning the page list and page geometry, its
//! input table and its rendering.

pub mod component;
pub mod controls;
pub mod empty_state;
pub mod page_canvas;

pub use component::{Effect, Message, State};
pub use controls::{Command, InputMode, Trigger};
