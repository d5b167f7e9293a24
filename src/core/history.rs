//! Undo/redo history tracking.
//!
//! Keeps the two stacks of previously-current states that make linear
//! backward and forward navigation possible.

use super::names::StateName;

/// Pair of LIFO stacks recording states left behind.
///
/// `undo` holds states to step back to, oldest first.
/// `redo` holds states stepped back from, with the next redo target last.
/// A redo moves its target from the redo stack onto the undo stack.
///
/// # Example
///
/// ```rust
/// use waypoint::core::{History, StateName};
///
/// let mut history = History::new();
/// history.record(StateName::from("idle"));
///
/// // Step back from "running" to "idle".
/// let previous = history.step_back(StateName::from("running"));
/// assert_eq!(previous, Some(StateName::from("idle")));
/// assert!(history.can_redo());
///
/// // And forward again; the redo target itself lands on the undo stack.
/// let next = history.step_forward();
/// assert_eq!(next, Some(StateName::from("running")));
/// assert_eq!(history.undo_entries(), &[StateName::from("running")]);
/// assert!(!history.can_redo());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    undo: Vec<StateName>,
    redo: Vec<StateName>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a forward move away from `left`.
    ///
    /// Pushes `left` onto the undo stack and drops every pending redo,
    /// since a new forward move supersedes the undone path.
    pub fn record(&mut self, left: StateName) {
        self.undo.push(left);
        self.redo.clear();
    }

    /// Step back from `current`.
    ///
    /// Returns the state to return to, or `None` (leaving both stacks
    /// untouched) when there is nothing to undo.
    pub fn step_back(&mut self, current: StateName) -> Option<StateName> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward along the undone path.
    ///
    /// Moves the most recent redo entry onto the undo stack and returns it
    /// as the state to move to, or `None` (leaving both stacks untouched)
    /// when there is nothing to redo.
    pub fn step_forward(&mut self) -> Option<StateName> {
        let next = self.redo.pop()?;
        self.undo.push(next.clone());
        Some(next)
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Undo stack, oldest entry first.
    pub fn undo_entries(&self) -> &[StateName] {
        &self.undo
    }

    /// Redo stack, next redo target last.
    pub fn redo_entries(&self) -> &[StateName] {
        &self.redo
    }
}
