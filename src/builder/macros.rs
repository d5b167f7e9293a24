//! Macros for ergonomic configuration construction.

/// Build a [`Configuration`](crate::config::Configuration) from a literal
/// state table.
///
/// States and their transitions keep the order they are written in.
///
/// # Example
///
/// ```
/// use waypoint::fsm_config;
///
/// let config = fsm_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "run" => "running" },
///         "running" => { "pause" => "paused", "stop" => "idle" },
///         "paused" => { "run" => "running" },
///         "broken" => {},
///     }
/// };
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.states.len(), 4);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr,
        states: {
            $(
                $state:expr => { $($event:expr => $target:expr),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        #[allow(unused_mut)]
        let mut states = $crate::config::StateTable::new();
        $(
            states.insert(
                $crate::core::StateName::from($state),
                $crate::config::StateDefinition::new()
                    $(.with_transition($event, $target))*,
            );
        )*
        $crate::config::Configuration::new($initial, states)
    }};
}
