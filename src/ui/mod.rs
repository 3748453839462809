// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - Full-screen page viewer with paging, scrolling and resizing
//! - [`state`] - Widget-free page geometry

pub mod state;
pub mod viewer;
