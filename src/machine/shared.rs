//! Lock-guarded state machine handle for multi-threaded callers.

use crate::core::StateName;
use crate::machine::error::MachineError;
use crate::machine::fsm::StateMachine;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable handle sharing one [`StateMachine`] between threads.
///
/// Each call takes the lock for its whole duration, so a transition's
/// history push, state change and redo clear are never observed halfway.
/// Queries return owned names since the lock is released on return.
///
/// # Example
///
/// ```rust
/// use waypoint::{fsm_config, SharedStateMachine, StateMachine};
///
/// let machine = StateMachine::new(fsm_config! {
///     initial: "off",
///     states: {
///         "off" => { "toggle" => "on" },
///         "on" => { "toggle" => "off" },
///     }
/// })
/// .unwrap();
///
/// let shared = SharedStateMachine::new(machine);
/// let worker = shared.clone();
/// std::thread::spawn(move || worker.trigger("toggle").unwrap())
///     .join()
///     .unwrap();
///
/// assert_eq!(shared.get_state(), "on");
/// ```
#[derive(Clone, Debug)]
pub struct SharedStateMachine {
    inner: Arc<Mutex<StateMachine>>,
}

impl SharedStateMachine {
    pub fn new(machine: StateMachine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    pub fn get_state(&self) -> StateName {
        self.inner.lock().get_state().clone()
    }

    pub fn change_state(&self, target: &str) -> Result<(), MachineError> {
        self.inner.lock().change_state(target)
    }

    pub fn trigger(&self, event: &str) -> Result<(), MachineError> {
        self.inner.lock().trigger(event)
    }

    pub fn reset(&self) -> Result<(), MachineError> {
        self.inner.lock().reset()
    }

    pub fn get_states(&self, event: Option<&str>) -> Vec<StateName> {
        self.inner
            .lock()
            .get_states(event)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn undo(&self) -> bool {
        self.inner.lock().undo()
    }

    pub fn redo(&self) -> bool {
        self.inner.lock().redo()
    }

    pub fn clear_history(&self) {
        self.inner.lock().clear_history();
    }

    /// Run `f` with exclusive access, for sequences that must not interleave
    /// with other callers.
    pub fn with<R>(&self, f: impl FnOnce(&mut StateMachine) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Recover the machine if this is the last handle.
    pub fn into_inner(self) -> Result<StateMachine, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}

impl From<StateMachine> for SharedStateMachine {
    fn from(machine: StateMachine) -> Self {
        Self::new(machine)
    }
}
