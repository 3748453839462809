// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Controls**: Resize, scroll and mouse step sizes
//! - **Display**: Page size floor and fallback screen size
//! - **Scan**: Image file discovery

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Width added or removed by one resize step (in pixels).
pub const DEFAULT_ZOOM_STEP_WIDTH: i32 = 48;

/// Height added or removed by one resize step (in pixels).
///
/// Together with [`DEFAULT_ZOOM_STEP_WIDTH`] this keeps a 16:9 step.
pub const DEFAULT_ZOOM_STEP_HEIGHT: i32 = 27;

/// Vertical distance moved by one scroll step (in pixels).
pub const DEFAULT_SCROLL_STEP: i32 = 30;

/// Multiplier applied to resize/scroll steps for each mouse wheel notch.
pub const DEFAULT_WHEEL_FACTOR: i32 = 3;

/// Maximum delay between two left clicks to form a double click.
pub const DEFAULT_DOUBLE_CLICK_MS: u64 = 500;

/// Upper bound accepted for the double click interval.
pub const MAX_DOUBLE_CLICK_MS: u64 = 5_000;

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Smallest page width a resize may produce.
pub const DEFAULT_MIN_PAGE_WIDTH: i32 = DEFAULT_ZOOM_STEP_WIDTH;

/// Smallest page height a resize may produce.
pub const DEFAULT_MIN_PAGE_HEIGHT: i32 = DEFAULT_ZOOM_STEP_HEIGHT;

/// Screen size assumed until the window reports its real size.
pub const FALLBACK_SCREEN_WIDTH: i32 = 1920;

/// Screen size assumed until the window reports its real size.
pub const FALLBACK_SCREEN_HEIGHT: i32 = 1080;

// ==========================================================================
// Scan Defaults
// ==========================================================================

/// Extension pattern for image files. `?` matches any single character.
pub const DEFAULT_EXTENSION_PATTERN: &str = "??g";
