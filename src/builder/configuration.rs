//! Builder for constructing configurations.

use crate::builder::error::BuildError;
use crate::config::{Configuration, StateDefinition, StateTable};
use crate::core::{EventName, StateName};

/// Builder for constructing configurations with a fluent API.
///
/// States keep the order in which they are first mentioned, whether by
/// [`state`](Self::state), [`terminal`](Self::terminal) or as the source of
/// [`transition`](Self::transition).
#[derive(Clone, Debug, Default)]
pub struct ConfigurationBuilder {
    initial: Option<StateName>,
    states: StateTable,
}

impl ConfigurationBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<StateName>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with its event to target pairs.
    ///
    /// Pairs are added to any transitions already declared for the state.
    pub fn state<I, E, T>(mut self, state: impl Into<StateName>, transitions: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<EventName>,
        T: Into<StateName>,
    {
        let definition = self.definition_mut(state.into());
        for (event, target) in transitions {
            definition.transitions.insert(event.into(), target.into());
        }
        self
    }

    /// Declare a state with no outgoing transitions.
    pub fn terminal(mut self, state: impl Into<StateName>) -> Self {
        self.definition_mut(state.into());
        self
    }

    /// Add a single transition, declaring `from` if needed.
    pub fn transition(
        mut self,
        from: impl Into<StateName>,
        event: impl Into<EventName>,
        to: impl Into<StateName>,
    ) -> Self {
        self.definition_mut(from.into())
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<Configuration, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(Configuration::new(initial, self.states))
    }

    fn definition_mut(&mut self, state: StateName) -> &mut StateDefinition {
        self.states.get_or_insert_with(state, StateDefinition::new)
    }
}
