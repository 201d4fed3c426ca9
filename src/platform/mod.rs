//=========================================================================
// Platform Subsystem
//
// Bridges Winit keyboard input with the stage's input channel.
//
// Architecture:
// ```text
//  Host Thread (Winit):              Stage:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop        │    │  InputCollector      │
//  │   ↓ KeyboardInput        │    │   ↓ (per tick)       │
//  │  KeyForwarder            │    │  active handler      │
//  │   └─ map_key()           │    │                      │
//  │   ↓                      │    │                      │
//  │  crossbeam Sender ───────┼───►│  Receiver            │
//  └──────────────────────────┘    └──────────────────────┘
// ```
//
// The window, renderer and event loop belong to the host application;
// this module only converts and forwards key events.
//
//=========================================================================

//=== Submodules ==========================================================

mod key_mapper;

//=== Public API ==========================================================

pub use key_mapper::{map_key, map_key_event, KeyForwarder};
