// SPDX-License-Identifier: MPL-2.0
//! Viewer controls: input mode and the trigger → command table.
//!
//! Raw keyboard and mouse events are first reduced to a [`Trigger`]. The
//! command they run then depends only on the trigger and the current
//! [`InputMode`], via [`command`].

/// Transient input mode, held while Ctrl or the right mouse button is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Secondary,
}

impl InputMode {
    /// Modifier pressed (Ctrl key or right mouse button).
    pub fn press(&mut self) {
        *self = InputMode::Secondary;
    }

    /// Modifier released.
    pub fn release(&mut self) {
        *self = InputMode::Normal;
    }

    pub fn is_secondary(self) -> bool {
        self == InputMode::Secondary
    }
}

/// User input after decoding, independent of the input mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    PreviousPage,
    NextPage,
    ScrollUp,
    ScrollDown,
    ZoomIn,
    ZoomOut,
    /// Mouse wheel, in notches (positive = away from the user).
    Wheel(i32),
    /// Space key or middle click.
    Open,
    /// Left double click.
    DoubleClick,
    /// Escape key.
    Exit,
}

/// Operation executed on the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ChangePage(i32),
    ChangePageSize { direction: i32, factor: i32 },
    ScrollPage { direction: i32, factor: i32 },
    OpenFile,
    OpenFolder,
    Exit,
}

/// Maps a trigger to the command it runs in `mode`.
///
/// `wheel_factor` is the step multiplier applied to wheel notches.
pub fn command(trigger: Trigger, mode: InputMode, wheel_factor: i32) -> Option<Command> {
    use InputMode::{Normal, Secondary};

    let command = match (trigger, mode) {
        (Trigger::PreviousPage, _) => Command::ChangePage(-1),
        (Trigger::NextPage, _) => Command::ChangePage(1),
        (Trigger::ScrollUp, _) => Command::ScrollPage {
            direction: 1,
            factor: 1,
        },
        (Trigger::ScrollDown, _) => Command::ScrollPage {
            direction: -1,
            factor: 1,
        },
        (Trigger::ZoomIn, _) => Command::ChangePageSize {
            direction: 1,
            factor: 1,
        },
        (Trigger::ZoomOut, _) => Command::ChangePageSize {
            direction: -1,
            factor: 1,
        },
        (Trigger::Wheel(0), _) => return None,
        (Trigger::Wheel(notches), Normal) => Command::ScrollPage {
            direction: notches,
            factor: wheel_factor,
        },
        (Trigger::Wheel(notches), Secondary) => Command::ChangePageSize {
            direction: notches,
            factor: wheel_factor,
        },
        (Trigger::Open, Normal) => Command::OpenFile,
        (Trigger::Open, Secondary) => Command::OpenFolder,
        (Trigger::DoubleClick, Normal) => return None,
        (Trigger::DoubleClick, Secondary) => Command::Exit,
        (Trigger::Exit, _) => Command::Exit,
    };
    Some(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_press_and_release_toggle_mode() {
        let mut mode = InputMode::default();
        assert!(!mode.is_secondary());

        mode.press();
        assert!(mode.is_secondary());

        mode.release();
        assert_eq!(mode, InputMode::Normal);
    }

    #[test]
    fn wheel_scrolls_in_normal_mode_and_resizes_in_secondary() {
        assert_eq!(
            command(Trigger::Wheel(-2), InputMode::Normal, 3),
            Some(Command::ScrollPage {
                direction: -2,
                factor: 3
            })
        );
        assert_eq!(
            command(Trigger::Wheel(1), InputMode::Secondary, 3),
            Some(Command::ChangePageSize {
                direction: 1,
                factor: 3
            })
        );
        assert_eq!(command(Trigger::Wheel(0), InputMode::Normal, 3), None);
    }

    #[test]
    fn open_trigger_depends_on_mode() {
        assert_eq!(
            command(Trigger::Open, InputMode::Normal, 3),
            Some(Command::OpenFile)
        );
        assert_eq!(
            command(Trigger::Open, InputMode::Secondary, 3),
            Some(Command::OpenFolder)
        );
    }

    #[test]
    fn double_click_exits_only_in_secondary_mode() {
        assert_eq!(command(Trigger::DoubleClick, InputMode::Normal, 3), None);
        assert_eq!(
            command(Trigger::DoubleClick, InputMode::Secondary, 3),
            Some(Command::Exit)
        );
    }

    #[test]
    fn page_and_escape_triggers_ignore_mode() {
        for mode in [InputMode::Normal, InputMode::Secondary] {
            assert_eq!(
                command(Trigger::PreviousPage, mode, 3),
                Some(Command::ChangePage(-1))
            );
            assert_eq!(
                command(Trigger::NextPage, mode, 3),
                Some(Command::ChangePage(1))
            );
            assert_eq!(command(Trigger::Exit, mode, 3), Some(Command::Exit));
            assert_eq!(
                command(Trigger::ZoomOut, mode, 3),
                Some(Command::ChangePageSize {
                    direction: -1,
                    factor: 1
                })
            );
        }
    }
}
