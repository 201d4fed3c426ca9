//=========================================================================
// Input System
//=========================================================================
//
// Keyboard input as seen by talk actions.
//
// Architecture:
//   Host ─► Sender<InputEvent> ─► InputCollector ─► Action::handle()
//                                                     ├─ TransitionMailbox
//                                                     └─ KeyTracker
//
// Handlers never render; they latch signals or flags that the next
// animate() consumes.
//
//=========================================================================

//=== Module Declarations =================================================

mod collector;
pub mod event;
mod key_tracker;
mod mailbox;

//=== Public API ==========================================================

pub use collector::InputCollector;
pub use event::{InputEvent, KeyCode};
pub use key_tracker::KeyTracker;
pub use mailbox::{page_navigation, TransitionMailbox};
