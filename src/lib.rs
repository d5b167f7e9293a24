//! Waypoint: a declarative finite state machine with linear undo/redo
//!
//! A machine is described by a [`Configuration`]: the initial state and, for
//! each state, the events it reacts to and the state each event leads to.
//! The [`StateMachine`] tracks the current state, follows transitions when
//! events are triggered, and keeps the path it took so moves can be undone
//! and redone.
//!
//! # Core Concepts
//!
//! - **States and events**: string names ([`StateName`], [`EventName`]),
//!   looked up in the configured table when used
//! - **Transitions**: per-state mapping from event to destination state
//! - **History**: an undo stack of states left behind and a redo stack of
//!   states stepped back from; any new forward move discards the redo stack
//!
//! # Example
//!
//! ```rust
//! use waypoint::{MachineError, StateMachine};
//!
//! let mut machine = StateMachine::from_json(r#"{
//!     "initial": "idle",
//!     "states": {
//!         "idle":    { "transitions": { "run": "running" } },
//!         "running": { "transitions": { "pause": "paused", "stop": "idle" } },
//!         "paused":  { "transitions": { "run": "running" } }
//!     }
//! }"#)?;
//!
//! machine.trigger("run")?;
//! machine.trigger("pause")?;
//! assert_eq!(machine.get_state(), "paused");
//!
//! assert!(machine.undo());
//! assert_eq!(machine.get_state(), "running");
//!
//! let resumable: Vec<&str> = machine
//!     .get_states(Some("run"))
//!     .into_iter()
//!     .map(|state| state.as_str())
//!     .collect();
//! assert_eq!(resumable, ["idle", "paused"]);
//!
//! assert!(matches!(
//!     machine.trigger("explode"),
//!     Err(MachineError::UnknownTransition { .. })
//! ));
//! # Ok::<(), MachineError>(())
//! ```
//!
//! # Logging
//!
//! State changes and rejected operations are reported through `tracing`
//! at `debug` level; undo, redo and history clears at `trace` level. The
//! crate never installs a subscriber.

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, ConfigurationBuilder};
pub use crate::config::{ConfigError, Configuration, StateDefinition};
pub use crate::core::{EventName, StateName};
pub use crate::machine::{MachineError, SharedStateMachine, StateMachine};
