// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Geometry logic is kept free of widgets so it can be tested without a
//! window.

pub mod viewport;

pub use viewport::{clamp_vertical_offset, PageGeometry, PixelOffset, PixelSize};
