//=========================================================================
// Input Event Types
//=========================================================================
//
// Portable representation of the keyboard events the host delivers.
//
// Hosts report keys either as DOM-style numeric codes (`from_code`) or
// through a platform mapper (see `platform`). Only the keys the talk
// actions react to are named; everything else is `Unidentified`.
//
// Event Flow:
// ```text
// Host (winit / browser / test)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputCollector (channel, per tick)
//         ↓
//    Active action handler
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Keyboard key identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Spacebar (32)
    Space,

    /// Page Up (33), steps backwards through the talk.
    PageUp,

    /// Page Down (34), steps forwards through the talk.
    PageDown,

    //--- Arrow Keys -------------------------------------------------------

    /// Left arrow (37)
    ArrowLeft,

    /// Up arrow (38)
    ArrowUp,

    /// Right arrow (39)
    ArrowRight,

    /// Down arrow (40)
    ArrowDown,

    //--- Other ------------------------------------------------------------

    /// Return/Enter (13)
    Enter,

    /// Escape (27)
    Escape,

    /// Any key the presentation does not use.
    Unidentified,
}

impl KeyCode {
    /// Maps a DOM-style numeric key code.
    pub const fn from_code(code: u32) -> Self {
        match code {
            13 => Self::Enter,
            27 => Self::Escape,
            32 => Self::Space,
            33 => Self::PageUp,
            34 => Self::PageDown,
            37 => Self::ArrowLeft,
            38 => Self::ArrowUp,
            39 => Self::ArrowRight,
            40 => Self::ArrowDown,
            _ => Self::Unidentified,
        }
    }

    /// Numeric code of the key, `None` for `Unidentified`.
    pub const fn code(self) -> Option<u32> {
        match self {
            Self::Enter => Some(13),
            Self::Escape => Some(27),
            Self::Space => Some(32),
            Self::PageUp => Some(33),
            Self::PageDown => Some(34),
            Self::ArrowLeft => Some(37),
            Self::ArrowUp => Some(38),
            Self::ArrowRight => Some(39),
            Self::ArrowDown => Some(40),
            Self::Unidentified => None,
        }
    }
}

//=== InputEvent ==========================================================

/// A key transition reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown { key: KeyCode },

    /// Key released.
    KeyUp { key: KeyCode },
}

impl InputEvent {
    /// Builds a key-down event from a numeric code.
    pub const fn key_down(code: u32) -> Self {
        Self::KeyDown {
            key: KeyCode::from_code(code),
        }
    }

    /// Builds a key-up event from a numeric code.
    pub const fn key_up(code: u32) -> Self {
        Self::KeyUp {
            key: KeyCode::from_code(code),
        }
    }

    /// The key involved in the event.
    pub const fn key(&self) -> KeyCode {
        match *self {
            Self::KeyDown { key } | Self::KeyUp { key } => key,
        }
    }

    /// Returns `true` for a release of `key`.
    pub fn is_release_of(&self, key: KeyCode) -> bool {
        matches!(*self, Self::KeyUp { key: k } if k == key)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
