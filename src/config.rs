//! Generator configuration
//!
//! Defaults follow the runtime conventions in `actiongen_core::conventions`.

use actiongen_core::conventions::{self, MarkerRole};

/// Widest accepted indentation, in spaces per level.
pub const MAX_INDENT_WIDTH: usize = 16;

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Supertype flagging a declaration as an action container
    pub container_marker: String,
    /// Field wrapper type marking a dispatchable action
    pub dispatcher_marker: String,
    /// Identifier type used by the names companion class
    pub action_name_type: String,
    /// Prefix of generated class names; declarations already carrying it are never generated
    pub generated_prefix: String,
    /// Number of spaces per indentation level, at most [`MAX_INDENT_WIDTH`]
    pub indent_width: usize,
    /// Whether to emit the lint-suppression header
    pub emit_header: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            container_marker: conventions::marker(MarkerRole::Container).to_string(),
            dispatcher_marker: conventions::marker(MarkerRole::Dispatcher).to_string(),
            action_name_type: conventions::marker(MarkerRole::ActionName).to_string(),
            generated_prefix: conventions::GENERATED_PREFIX.to_string(),
            indent_width: 2,
            emit_header: true,
        }
    }
}

impl GeneratorConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the container marker supertype
    pub fn with_container_marker(mut self, name: impl Into<String>) -> Self {
        self.container_marker = name.into();
        self
    }

    /// Set the dispatcher wrapper type
    pub fn with_dispatcher_marker(mut self, name: impl Into<String>) -> Self {
        self.dispatcher_marker = name.into();
        self
    }

    /// Set the names identifier type
    pub fn with_action_name_type(mut self, name: impl Into<String>) -> Self {
        self.action_name_type = name.into();
        self
    }

    /// Set the generated-code prefix
    ///
    /// An empty prefix is ignored: it would mark every declaration as already generated.
    pub fn with_generated_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        if !prefix.is_empty() {
            self.generated_prefix = prefix;
        }
        self
    }

    /// Set the indentation width, capped at [`MAX_INDENT_WIDTH`]
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width.min(MAX_INDENT_WIDTH);
        self
    }

    /// Name of the generated dispatcher subclass for `name`.
    pub fn generated_name(&self, name: &str) -> String {
        format!("{}{}", self.generated_prefix, name)
    }

    /// Whether `name` already carries the generated-code prefix.
    pub fn is_generated_name(&self, name: &str) -> bool {
        name.starts_with(self.generated_prefix.as_str())
    }

    /// Enable or disable the lint-suppression header
    pub fn with_header(mut self, emit: bool) -> Self {
        self.emit_header = emit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_runtime_conventions() {
        let config = GeneratorConfig::default();
        assert_eq!(config.container_marker, conventions::REDUX_ACTIONS);
        assert_eq!(config.dispatcher_marker, conventions::ACTION_DISPATCHER);
        assert_eq!(config.action_name_type, conventions::ACTION_NAME);
        assert_eq!(config.generated_prefix, conventions::GENERATED_PREFIX);
        assert_eq!(config.indent_width, 2);
        assert!(config.emit_header);
    }

    #[test]
    fn test_builder_chain() {
        let config = GeneratorConfig::new()
            .with_container_marker("StoreActions")
            .with_dispatcher_marker("Dispatch")
            .with_action_name_type("Key")
            .with_generated_prefix("Gen")
            .with_indent_width(4)
            .with_header(false);
        assert_eq!(config.container_marker, "StoreActions");
        assert_eq!(config.dispatcher_marker, "Dispatch");
        assert_eq!(config.action_name_type, "Key");
        assert_eq!(config.generated_prefix, "Gen");
        assert_eq!(config.indent_width, 4);
        assert!(!config.emit_header);
    }

    #[test]
    fn test_indent_width_is_capped() {
        let config = GeneratorConfig::new().with_indent_width(usize::MAX);
        assert_eq!(config.indent_width, MAX_INDENT_WIDTH);
    }

    #[test]
    fn test_generated_names_follow_prefix() {
        let config = GeneratorConfig::new().with_generated_prefix("Gen");
        assert_eq!(config.generated_name("Foo"), "GenFoo");
        assert!(config.is_generated_name("GenFoo"));
        assert!(!config.is_generated_name("_$Foo"));
    }

    #[test]
    fn test_empty_generated_prefix_is_ignored() {
        let config = GeneratorConfig::new().with_generated_prefix("");
        assert_eq!(config.generated_prefix, conventions::GENERATED_PREFIX);
        assert!(!config.is_generated_name("Foo"));
    }
}
