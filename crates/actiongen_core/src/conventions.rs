//! Naming conventions of the action-dispatch pattern.
//!
//! The generator recognises and produces names purely by string convention: marker supertypes, the generated-code
//! prefix, and the value/builder pairing used to repair forward references. Callers should go through the constants and
//! helpers here instead of spelling these strings inline.
//!
//! ## Examples
//! ```rust
//! use actiongen_core::conventions;
//!
//! assert_eq!(conventions::names_class_name("AppActions"), "AppActionsNames");
//! assert_eq!(conventions::action_key("AppActions", "increment"), "AppActions-increment");
//! assert_eq!(conventions::builder_name_for("Counter"), "CounterBuilder");
//! ```

/// Supertype that flags a declaration as an action container needing generation.
pub const REDUX_ACTIONS: &str = "ReduxActions";

/// Wrapper type whose type argument is the payload of a dispatchable action.
pub const ACTION_DISPATCHER: &str = "ActionDispatcher";

/// Identifier type used by the names companion class.
pub const ACTION_NAME: &str = "ActionName";

/// Runtime dispatcher type forwarded through `setDispatcher`.
pub const DISPATCHER: &str = "Dispatcher";

/// Operation that hands the runtime dispatcher down the action container graph.
pub const SET_DISPATCHER_METHOD: &str = "setDispatcher";

/// Parameter name used by the generated `setDispatcher` override.
pub const DISPATCHER_PARAM: &str = "dispatcher";

/// Default prefix carried by every generated class name.
pub const GENERATED_PREFIX: &str = "_$";

/// Suffix appended to a container's name to form its names companion class.
pub const NAMES_SUFFIX: &str = "Names";

/// Separator between the container name and the field name in an action key.
pub const ACTION_KEY_SEPARATOR: &str = "-";

/// Bound-name prefix identifying the value half of a value/builder pair.
pub const VALUE_BOUND_PREFIX: &str = "Value";

/// Bound-name prefix identifying the builder half of a value/builder pair.
pub const BUILDER_BOUND_PREFIX: &str = "Builder";

/// Suffix that turns a value type name into its paired builder type name.
pub const BUILDER_SUFFIX: &str = "Builder";

/// The role a convention name plays in the action-dispatch pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerRole {
    /// Supertype flagging an action container.
    Container,
    /// Dispatchable field wrapper.
    Dispatcher,
    /// Names companion identifier.
    ActionName,
    /// Runtime dispatcher.
    RuntimeDispatcher,
}

/// Metadata for a convention name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerInfo {
    pub role: MarkerRole,
    pub spelling: &'static str,
    pub description: &'static str,
}

/// Registry of the runtime type names the generated code refers to.
pub const MARKERS: &[MarkerInfo] = &[
    MarkerInfo {
        role: MarkerRole::Container,
        spelling: REDUX_ACTIONS,
        description: "Supertype of every action container.",
    },
    MarkerInfo {
        role: MarkerRole::Dispatcher,
        spelling: ACTION_DISPATCHER,
        description: "Field wrapper dispatching a typed payload under a stable key.",
    },
    MarkerInfo {
        role: MarkerRole::ActionName,
        spelling: ACTION_NAME,
        description: "Typed identifier matching a dispatcher's key.",
    },
    MarkerInfo {
        role: MarkerRole::RuntimeDispatcher,
        spelling: DISPATCHER,
        description: "Store-side dispatcher injected into action containers.",
    },
];

/// Look up the default spelling for a marker role.
pub fn marker(role: MarkerRole) -> &'static str {
    match role {
        MarkerRole::Container => REDUX_ACTIONS,
        MarkerRole::Dispatcher => ACTION_DISPATCHER,
        MarkerRole::ActionName => ACTION_NAME,
        MarkerRole::RuntimeDispatcher => DISPATCHER,
    }
}

/// Name of the names companion class for `name`.
pub fn names_class_name(name: &str) -> String {
    format!("{name}{NAMES_SUFFIX}")
}

/// Key shared by a dispatcher instance and its name identifier.
pub fn action_key(container: &str, field: &str) -> String {
    format!("{container}{ACTION_KEY_SEPARATOR}{field}")
}

/// Whether a type-parameter bound names the value half of a value/builder pair.
pub fn is_value_bound(bound_name: &str) -> bool {
    bound_name.starts_with(VALUE_BOUND_PREFIX)
}

/// Whether a type-parameter bound names the builder half of a value/builder pair.
pub fn is_builder_bound(bound_name: &str) -> bool {
    bound_name.starts_with(BUILDER_BOUND_PREFIX)
}

/// Builder type name paired with the rendered value type `value`.
pub fn builder_name_for(value: &str) -> String {
    format!("{value}{BUILDER_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_class_name() {
        assert_eq!(names_class_name("Foo"), "FooNames");
    }

    #[test]
    fn test_action_key_joins_with_separator() {
        assert_eq!(action_key("Foo", "bar"), "Foo-bar");
    }

    #[test]
    fn test_value_and_builder_bounds_match_by_prefix() {
        assert!(is_value_bound("Value"));
        assert!(is_value_bound("ValueType"));
        assert!(!is_value_bound("Built"));
        assert!(is_builder_bound("Builder"));
        assert!(is_builder_bound("BuilderOf"));
        assert!(!is_builder_bound("ValueBuilder"));
    }

    #[test]
    fn test_marker_lookup_matches_constants() {
        assert_eq!(marker(MarkerRole::Container), REDUX_ACTIONS);
        assert_eq!(marker(MarkerRole::Dispatcher), ACTION_DISPATCHER);
        assert_eq!(marker(MarkerRole::ActionName), ACTION_NAME);
        assert_eq!(marker(MarkerRole::RuntimeDispatcher), DISPATCHER);
    }
}
