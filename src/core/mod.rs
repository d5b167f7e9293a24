//! Core state machine types.
//!
//! This module contains the plain-data building blocks of the engine:
//! - State and event names
//! - The undo/redo history stacks
//!
//! Nothing here knows about configuration tables; the machine combines
//! the two.

mod history;
mod names;

pub use history::History;
pub use names::{EventName, StateName};
