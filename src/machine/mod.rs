//! The state machine engine.
//!
//! [`StateMachine`] owns the state table, the current state and the
//! undo/redo history. All operations are synchronous and complete before
//! returning. For sharing one machine across threads, wrap it in a
//! [`SharedStateMachine`].

pub mod error;
mod fsm;
mod shared;

pub use error::MachineError;
pub use fsm::StateMachine;
pub use shared::SharedStateMachine;
