//=========================================================================
// Key Mapper
//=========================================================================
//
// Converts Winit keyboard events into stage InputEvents and forwards
// them over the stage's input channel.
//
// Architecture:
//   Winit KeyEvent → map_key() → InputEvent → KeyForwarder → Sender
//
// Keys the talk does not use are filtered (returns None) so they never
// reach the channel.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Sender, TrySendError};
use log::{trace, warn};
use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::{InputEvent, KeyCode};

//=== Conversion ==========================================================

/// Converts a physical key transition, filtering unused keys.
pub fn map_key(physical_key: PhysicalKey, state: ElementState) -> Option<InputEvent> {
    let key = match physical_key {
        PhysicalKey::Code(code) => KeyCode::from(code),
        _ => return None,
    };

    if matches!(key, KeyCode::Unidentified) {
        return None;
    }

    Some(match state {
        ElementState::Pressed => InputEvent::KeyDown { key },
        ElementState::Released => InputEvent::KeyUp { key },
    })
}

/// Converts a Winit `KeyEvent`. Auto-repeated presses are dropped.
pub fn map_key_event(key_event: &KeyEvent) -> Option<InputEvent> {
    if key_event.repeat {
        return None;
    }
    map_key(key_event.physical_key, key_event.state)
}

/// Converts Winit physical key codes to stage key codes.
///
/// Maps the page, arrow and space keys the actions react to, plus enter
/// and escape. Everything else is `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        match code {
            //--- Navigation ---------------------------------------------------
            WinitKeyCode::PageUp => KeyCode::PageUp,
            WinitKeyCode::PageDown => KeyCode::PageDown,

            //--- Arrow keys ---------------------------------------------------
            WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
            WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
            WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
            WinitKeyCode::ArrowDown => KeyCode::ArrowDown,

            //--- Other --------------------------------------------------------
            WinitKeyCode::Space => KeyCode::Space,
            WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => KeyCode::Enter,
            WinitKeyCode::Escape => KeyCode::Escape,

            //--- Fallback -----------------------------------------------------
            _ => KeyCode::Unidentified,
        }
    }
}

//=== KeyForwarder ========================================================

/// Feeds a stage's input channel from a Winit event loop.
///
/// If the channel is full or the stage has stopped, the event is logged
/// and dropped; the window keeps running so the user can close it.
#[derive(Debug, Clone)]
pub struct KeyForwarder {
    sender: Sender<InputEvent>,
}

impl KeyForwarder {
    pub fn new(sender: Sender<InputEvent>) -> Self {
        Self { sender }
    }

    /// Maps and sends one key transition. Returns `true` if it was sent.
    pub fn forward(&self, physical_key: PhysicalKey, state: ElementState) -> bool {
        let Some(event) = map_key(physical_key, state) else {
            trace!(target: "platform::input", "Unmapped key ignored");
            return false;
        };
        self.send(event)
    }

    /// Maps and sends a Winit `KeyEvent`. Returns `true` if it was sent.
    pub fn forward_key_event(&self, key_event: &KeyEvent) -> bool {
        match map_key_event(key_event) {
            Some(event) => self.send(event),
            None => false,
        }
    }

    fn send(&self, event: InputEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(event)) => {
                warn!(target: "platform::input", "Input channel full, dropping {:?}", event);
                false
            }
            Err(TrySendError::Disconnected(event)) => {
                warn!(target: "platform::input", "Stage stopped, dropping {:?}", event);
                false
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn keycode_conversion_navigation() {
        assert_eq!(KeyCode::from(WinitKeyCode::PageUp), KeyCode::PageUp);
        assert_eq!(KeyCode::from(WinitKeyCode::PageDown), KeyCode::PageDown);
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowLeft), KeyCode::ArrowLeft);
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Space);
        assert_eq!(KeyCode::from(WinitKeyCode::NumpadEnter), KeyCode::Enter);
    }

    #[test]
    fn keycode_conversion_falls_back_to_unidentified() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyQ), KeyCode::Unidentified);
        assert_eq!(KeyCode::from(WinitKeyCode::F13), KeyCode::Unidentified);
    }

    #[test]
    fn map_key_builds_down_and_up_events() {
        let key = PhysicalKey::Code(WinitKeyCode::PageDown);

        assert_eq!(
            map_key(key, ElementState::Pressed),
            Some(InputEvent::KeyDown { key: KeyCode::PageDown })
        );
        assert_eq!(
            map_key(key, ElementState::Released),
            Some(InputEvent::KeyUp { key: KeyCode::PageDown })
        );
    }

    #[test]
    fn map_key_filters_unused_keys() {
        assert_eq!(map_key(PhysicalKey::Code(WinitKeyCode::KeyA), ElementState::Pressed), None);
        assert_eq!(
            map_key(PhysicalKey::Unidentified(NativeKeyCode::Unidentified), ElementState::Pressed),
            None
        );
    }

    #[test]
    fn forwarder_sends_mapped_keys() {
        let (tx, rx) = bounded(4);
        let forwarder = KeyForwarder::new(tx);

        assert!(forwarder.forward(PhysicalKey::Code(WinitKeyCode::PageUp), ElementState::Released));
        assert!(!forwarder.forward(PhysicalKey::Code(WinitKeyCode::KeyZ), ElementState::Released));

        assert_eq!(rx.try_recv(), Ok(InputEvent::KeyUp { key: KeyCode::PageUp }));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn forwarder_drops_when_full_or_disconnected() {
        let (tx, rx) = bounded(1);
        let forwarder = KeyForwarder::new(tx);
        let space = PhysicalKey::Code(WinitKeyCode::Space);

        assert!(forwarder.forward(space, ElementState::Pressed));
        assert!(!forwarder.forward(space, ElementState::Released));

        drop(rx);
        assert!(!forwarder.forward(space, ElementState::Pressed));
    }
}
