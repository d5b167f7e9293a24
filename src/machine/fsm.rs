//! Event-driven state machine with linear undo/redo.

use crate::config::{ConfigFormat, Configuration, StateDefinition, StateTable, Transitions};
use crate::core::{EventName, History, StateName};
use crate::machine::error::MachineError;
use tracing::{debug, trace};

/// State machine driven by named events over a configured state table.
///
/// The machine tracks one current state. Forward moves ([`change_state`],
/// [`trigger`], [`reset`]) push the state they leave onto the undo stack and
/// discard any pending redo. [`undo`] and [`redo`] walk back and forth along
/// the recorded path without discarding anything.
///
/// Failing operations never modify the machine.
///
/// [`change_state`]: Self::change_state
/// [`trigger`]: Self::trigger
/// [`reset`]: Self::reset
/// [`undo`]: Self::undo
/// [`redo`]: Self::redo
///
/// # Example
///
/// ```rust
/// use waypoint::{fsm_config, StateMachine};
///
/// let config = fsm_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "run" => "running" },
///         "running" => { "stop" => "idle" },
///     }
/// };
///
/// let mut machine = StateMachine::new(config).unwrap();
/// machine.trigger("run").unwrap();
/// assert_eq!(machine.get_state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.get_state(), "idle");
/// assert!(machine.redo());
/// assert_eq!(machine.get_state(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    initial: StateName,
    current: StateName,
    states: StateTable,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configuration's initial state.
    ///
    /// Fails with [`MachineError::Configuration`] when given `None`. The
    /// initial state is not checked against the table; operations that need
    /// its transitions report a missing state when they run.
    pub fn new(config: impl Into<Option<Configuration>>) -> Result<Self, MachineError> {
        let Some(Configuration { initial, states }) = config.into() else {
            return Err(MachineError::Configuration);
        };

        debug!(initial = %initial, states = states.len(), "State machine created");
        Ok(Self {
            current: initial.clone(),
            initial,
            states,
            history: History::new(),
        })
    }

    /// Create a machine from a JSON configuration document.
    ///
    /// A `null` document counts as a missing configuration.
    pub fn from_json(document: &str) -> Result<Self, MachineError> {
        Self::new(ConfigFormat::Json.parse::<Option<Configuration>>(document)?)
    }

    /// Create a machine from a YAML configuration document.
    ///
    /// A `null` document counts as a missing configuration.
    pub fn from_yaml(document: &str) -> Result<Self, MachineError> {
        Self::new(ConfigFormat::Yaml.parse::<Option<Configuration>>(document)?)
    }

    /// Current state.
    pub fn get_state(&self) -> &StateName {
        &self.current
    }

    /// State the machine was constructed in and returns to on reset.
    pub fn initial_state(&self) -> &StateName {
        &self.initial
    }

    /// The configured state table.
    pub fn states(&self) -> &StateTable {
        &self.states
    }

    /// Move to `target`, recording the current state for undo.
    ///
    /// Clears the redo stack. Fails with [`MachineError::UnknownState`] when
    /// `target` is not a configured state.
    pub fn change_state(&mut self, target: &str) -> Result<(), MachineError> {
        if !self.states.contains_key(target) {
            debug!(state = %self.current, requested = target, "Rejected change to unknown state");
            return Err(MachineError::UnknownState {
                state: target.to_string(),
            });
        }

        let previous = std::mem::replace(&mut self.current, StateName::from(target));
        debug!(from = %previous, to = %self.current, "State changed");
        self.history.record(previous);
        Ok(())
    }

    /// Follow the current state's transition for `event`.
    ///
    /// Fails with [`MachineError::UnknownTransition`] when the current state
    /// does not react to `event`, and with [`MachineError::UnknownState`]
    /// when the transition leads to a state missing from the table.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let Some(target) = self.transitions().and_then(|transitions| transitions.get(event))
        else {
            debug!(state = %self.current, event, "Rejected unknown transition");
            return Err(MachineError::UnknownTransition {
                state: self.current.to_string(),
                event: event.to_string(),
            });
        };

        let target = target.clone();
        trace!(state = %self.current, event, to = %target, "Event matched transition");
        self.change_state(target.as_str())
    }

    /// Return to the initial state.
    ///
    /// Behaves as `change_state(initial)`: the current state is recorded
    /// even when it already is the initial state.
    pub fn reset(&mut self) -> Result<(), MachineError> {
        let initial = self.initial.clone();
        self.change_state(initial.as_str())
    }

    /// State names, in table order.
    ///
    /// With no event (or an empty one) every state is listed. With an event,
    /// only states that have a transition for it are listed, wherever that
    /// transition leads.
    pub fn get_states(&self, event: Option<&str>) -> Vec<&StateName> {
        match event.filter(|event| !event.is_empty()) {
            None => self.states.keys().collect(),
            Some(event) => self
                .states
                .iter()
                .filter(|(_, definition)| definition.transitions.contains_key(event))
                .map(|(name, _)| name)
                .collect(),
        }
    }

    /// Step back to the previous state.
    ///
    /// Returns `false` without changing anything when there is nothing to
    /// undo. The state left behind becomes available to [`redo`](Self::redo).
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.step_back(self.current.clone()) else {
            return false;
        };

        let left = std::mem::replace(&mut self.current, previous);
        trace!(from = %left, to = %self.current, "Undo");
        true
    }

    /// Step forward to the most recently undone state.
    ///
    /// Returns `false` without changing anything when there is nothing to
    /// redo. The state moved to is pushed onto the undo stack.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.step_forward() else {
            return false;
        };

        let left = std::mem::replace(&mut self.current, next);
        trace!(from = %left, to = %self.current, "Redo");
        true
    }

    /// Forget both undo and redo history. The current state is kept.
    pub fn clear_history(&mut self) {
        trace!(
            undo = self.history.undo_entries().len(),
            redo = self.history.redo_entries().len(),
            "History cleared"
        );
        self.history.clear();
    }

    /// Whether [`undo`](Self::undo) has a state to step back to.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`redo`](Self::redo) has a state to step forward to.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// States that [`undo`](Self::undo) would walk back through, oldest first.
    pub fn undo_history(&self) -> &[StateName] {
        self.history.undo_entries()
    }

    /// States that [`redo`](Self::redo) would walk forward through, next last.
    pub fn redo_history(&self) -> &[StateName] {
        self.history.redo_entries()
    }

    /// Both history stacks.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Events the current state reacts to, in declaration order.
    pub fn available_events(&self) -> Vec<&EventName> {
        self.transitions()
            .map(|transitions| transitions.keys().collect())
            .unwrap_or_default()
    }

    /// Whether [`trigger`](Self::trigger) would find a transition for `event`.
    pub fn can_trigger(&self, event: &str) -> bool {
        self.transitions()
            .is_some_and(|transitions| transitions.contains_key(event))
    }

    /// Whether the current state has no outgoing transitions.
    pub fn is_final(&self) -> bool {
        self.transitions()
            .map_or(true, |transitions| transitions.is_empty())
    }

    fn transitions(&self) -> Option<&Transitions> {
        self.states
            .get(self.current.as_str())
            .map(StateDefinition::transitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    fn workflow() -> Configuration {
        crate::fsm_config! {
            initial: "idle",
            states: {
                "idle" => { "run" => "running" },
                "running" => { "pause" => "paused", "stop" => "idle" },
                "paused" => { "run" => "running" },
            }
        }
    }

    fn machine() -> StateMachine {
        StateMachine::new(workflow()).unwrap()
    }

    fn names(states: Vec<&StateName>) -> Vec<&str> {
        states.into_iter().map(StateName::as_str).collect()
    }

    #[test]
    fn construction_requires_configuration() {
        let result = StateMachine::new(None);
        assert!(matches!(result, Err(MachineError::Configuration)));
    }

    #[test]
    fn new_machine_starts_in_initial_state() {
        let mut machine = machine();

        assert_eq!(machine.get_state(), "idle");
        assert_eq!(machine.initial_state(), "idle");
        assert!(!machine.undo());
        assert!(!machine.redo());
    }

    #[test]
    fn change_state_records_history() {
        let mut machine = machine();
        machine.change_state("paused").unwrap();

        assert_eq!(machine.get_state(), "paused");
        assert_eq!(machine.undo_history(), &[StateName::from("idle")]);
        assert!(machine.redo_history().is_empty());
    }

    #[test]
    fn change_state_to_unknown_state_leaves_machine_unchanged() {
        let mut machine = machine();
        machine.trigger("run").unwrap();
        machine.undo();

        let result = machine.change_state("exploded");

        assert!(matches!(
            result,
            Err(MachineError::UnknownState { ref state }) if state == "exploded"
        ));
        assert_eq!(machine.get_state(), "idle");
        assert!(machine.undo_history().is_empty());
        assert_eq!(machine.redo_history(), &[StateName::from("running")]);
    }

    #[test]
    fn trigger_follows_transition() {
        let mut machine = machine();
        machine.trigger("run").unwrap();
        machine.trigger("pause").unwrap();

        assert_eq!(machine.get_state(), "paused");
        assert_eq!(
            machine.undo_history(),
            &[StateName::from("idle"), StateName::from("running")]
        );
    }

    #[test]
    fn trigger_with_unknown_event_leaves_machine_unchanged() {
        let mut machine = machine();

        let result = machine.trigger("pause");

        assert!(matches!(
            result,
            Err(MachineError::UnknownTransition { ref state, ref event })
                if state == "idle" && event == "pause"
        ));
        assert_eq!(machine.get_state(), "idle");
        assert!(!machine.can_undo());
    }

    #[test]
    fn trigger_to_undeclared_state_fails_as_unknown_state() {
        let config = crate::fsm_config! {
            initial: "start",
            states: { "start" => { "jump" => "void" } }
        };
        let mut machine = StateMachine::new(config).unwrap();

        let result = machine.trigger("jump");

        assert!(matches!(result, Err(MachineError::UnknownState { ref state }) if state == "void"));
        assert_eq!(machine.get_state(), "start");
        assert!(!machine.can_undo());
    }

    #[test]
    fn reset_always_records_current_state() {
        let mut machine = machine();
        machine.reset().unwrap();

        assert_eq!(machine.get_state(), "idle");
        assert_eq!(machine.undo_history(), &[StateName::from("idle")]);
    }

    #[test]
    fn reset_clears_redo() {
        let mut machine = machine();
        machine.trigger("run").unwrap();
        machine.trigger("pause").unwrap();
        machine.undo();

        machine.reset().unwrap();

        assert_eq!(machine.get_state(), "idle");
        assert!(!machine.redo());
    }

    #[test]
    fn missing_initial_state_is_reported_lazily() {
        let config = crate::fsm_config! {
            initial: "ghost",
            states: { "real" => { "go" => "real" } }
        };
        let mut machine = StateMachine::new(config).unwrap();

        assert_eq!(machine.get_state(), "ghost");
        assert!(machine.is_final());
        assert!(machine.available_events().is_empty());
        assert!(matches!(
            machine.trigger("go"),
            Err(MachineError::UnknownTransition { .. })
        ));
        assert!(matches!(
            machine.reset(),
            Err(MachineError::UnknownState { ref state }) if state == "ghost"
        ));

        machine.change_state("real").unwrap();
        assert!(machine.undo());
        assert_eq!(machine.get_state(), "ghost");
    }

    #[test]
    fn get_states_lists_all_states_in_order() {
        let machine = machine();

        assert_eq!(names(machine.get_states(None)), vec!["idle", "running", "paused"]);
        assert_eq!(names(machine.get_states(Some(""))), vec!["idle", "running", "paused"]);
    }

    #[test]
    fn get_states_filters_by_event() {
        let machine = machine();

        assert_eq!(names(machine.get_states(Some("run"))), vec!["idle", "paused"]);
        assert_eq!(names(machine.get_states(Some("stop"))), vec!["running"]);
        assert!(machine.get_states(Some("fly")).is_empty());
    }

    #[test]
    fn undo_then_redo_retraces_path() {
        let mut machine = machine();
        machine.trigger("run").unwrap();
        machine.trigger("pause").unwrap();

        assert!(machine.undo());
        assert_eq!(machine.get_state(), "running");
        assert!(machine.undo());
        assert_eq!(machine.get_state(), "idle");
        assert!(!machine.undo());

        assert!(machine.redo());
        assert_eq!(machine.get_state(), "running");
        assert!(machine.redo());
        assert_eq!(machine.get_state(), "paused");
        assert!(!machine.redo());
    }

    #[test]
    fn redo_pushes_redone_state_onto_undo() {
        let mut machine = machine();
        machine.trigger("run").unwrap();
        machine.trigger("pause").unwrap();
        machine.undo();
        machine.undo();
        assert!(machine.undo_history().is_empty());
        assert_eq!(
            machine.redo_history(),
            &[StateName::from("paused"), StateName::from("running")]
        );

        assert!(machine.redo());
        assert_eq!(machine.get_state(), "running");
        assert_eq!(machine.undo_history(), &[StateName::from("running")]);
        assert_eq!(machine.redo_history(), &[StateName::from("paused")]);
    }

    #[test]
    fn undo_after_redo_stays_on_redone_state() {
        let mut machine = machine();
        machine.trigger("run").unwrap();
        machine.trigger("pause").unwrap();
        machine.undo();
        machine.undo();
        machine.redo();

        assert!(machine.undo());
        assert_eq!(machine.get_state(), "running");
        assert!(machine.undo_history().is_empty());
        assert_eq!(
            machine.redo_history(),
            &[StateName::from("paused"), StateName::from("running")]
        );
    }

    #[test]
    fn change_state_invalidates_redo() {
        let mut machine = machine();
        machine.trigger("run").unwrap();
        machine.undo();

        machine.change_state("paused").unwrap();
        assert!(!machine.redo());
        assert_eq!(machine.get_state(), "paused");
    }

    #[test]
    fn clear_history_keeps_current_state() {
        let mut machine = machine();
        machine.trigger("run").unwrap();
        machine.trigger("pause").unwrap();
        machine.undo();

        machine.clear_history();

        assert_eq!(machine.get_state(), "running");
        assert!(!machine.undo());
        assert!(!machine.redo());
    }

    #[test]
    fn available_events_follow_current_state() {
        let mut machine = machine();
        machine.trigger("run").unwrap();

        let events: Vec<&str> = machine
            .available_events()
            .into_iter()
            .map(EventName::as_str)
            .collect();
        assert_eq!(events, vec!["pause", "stop"]);
        assert!(machine.can_trigger("stop"));
        assert!(!machine.can_trigger("run"));
        assert!(!machine.is_final());
    }

    #[test]
    fn from_json_builds_machine() {
        let machine = StateMachine::from_json(
            r#"{"initial": "a", "states": {"a": {"transitions": {"go": "b"}}, "b": {}}}"#,
        )
        .unwrap();

        assert_eq!(machine.get_state(), "a");
        assert_eq!(names(machine.get_states(Some("go"))), vec!["a"]);
    }

    #[test]
    fn from_json_null_is_missing_configuration() {
        let result = StateMachine::from_json("null");
        assert!(matches!(result, Err(MachineError::Configuration)));
    }

    #[test]
    fn from_json_reports_malformed_documents() {
        let result = StateMachine::from_json("{\"states\": 3}");
        assert!(matches!(
            result,
            Err(MachineError::InvalidConfiguration(ConfigError::Json(_)))
        ));
    }

    #[test]
    fn from_yaml_builds_machine() {
        let machine = StateMachine::from_yaml(
            "initial: green\nstates:\n  green:\n    transitions:\n      timer: yellow\n  yellow: {}\n",
        )
        .unwrap();

        assert_eq!(machine.get_state(), "green");
        assert_eq!(names(machine.get_states(None)), vec!["green", "yellow"]);
    }

    #[test]
    fn from_yaml_null_is_missing_configuration() {
        let result = StateMachine::from_yaml("~");
        assert!(matches!(result, Err(MachineError::Configuration)));
    }
}
