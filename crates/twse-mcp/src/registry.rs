//! Static tool registry.
//!
//! Providers are listed at compile time. Each provider's specs are validated
//! as a group; a provider with an invalid spec is skipped as a whole.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, error, warn};
use twse_core::TwseError;

use crate::tool::ToolSpec;

/// Why a tool spec could not be registered.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// Tool name is empty.
    #[error("tool name is empty")]
    EmptyName,

    /// Tool name contains characters MCP clients reject.
    #[error("invalid tool name '{0}': use letters, digits, '_' or '-'")]
    InvalidName(String),

    /// Tool has no description.
    #[error("tool '{0}' has no description")]
    MissingDescription(String),

    /// Tool endpoint cannot be requested.
    #[error("tool '{tool}': {source}")]
    Endpoint {
        /// Tool name.
        tool: String,
        /// Endpoint validation error.
        source: TwseError,
    },

    /// A line template of the tool is malformed.
    #[error("tool '{tool}': {reason}")]
    Template {
        /// Tool name.
        tool: String,
        /// Template validation error.
        reason: String,
    },
}

impl ToolSpec {
    /// Checks name, description, endpoint and templates.
    pub fn validate(&self) -> Result<(), RegistrationError> {
        if self.name.is_empty() {
            return Err(RegistrationError::EmptyName);
        }
        if !self
            .name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(RegistrationError::InvalidName(self.name.to_string()));
        }
        if self.description.trim().is_empty() {
            return Err(RegistrationError::MissingDescription(self.name.to_string()));
        }
        self.endpoint
            .validate()
            .map_err(|source| RegistrationError::Endpoint {
                tool: self.name.to_string(),
                source,
            })?;
        for template in self.kind.templates() {
            template
                .validate()
                .map_err(|reason| RegistrationError::Template {
                    tool: self.name.to_string(),
                    reason,
                })?;
        }
        Ok(())
    }
}

/// A named group of tools registered together.
#[derive(Debug, Clone, Copy)]
pub struct ToolProvider {
    /// Provider name, used in logs.
    pub name: &'static str,
    /// Builds the provider's tool specs.
    pub tools: fn() -> Vec<ToolSpec>,
}

/// Registered tools in registration order, indexed by name.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolSpec>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every provider in order, skipping invalid ones.
    pub fn from_providers(providers: &[ToolProvider]) -> Self {
        let mut registry = Self::new();
        for provider in providers {
            match registry.register_provider(provider) {
                Ok(count) => debug!(provider = provider.name, count, "registered tools"),
                Err(e) => error!(provider = provider.name, error = %e, "skipping tool provider"),
            }
        }
        registry
    }

    /// Validates all of a provider's specs, then registers them.
    ///
    /// Nothing is registered if any spec is invalid.
    pub fn register_provider(&mut self, provider: &ToolProvider) -> Result<usize, RegistrationError> {
        let specs = (provider.tools)();
        for spec in &specs {
            spec.validate()?;
        }
        let count = specs.len();
        for spec in specs {
            self.insert(spec);
        }
        Ok(count)
    }

    /// Adds one spec. A later spec with the same name replaces the earlier one
    /// in place.
    pub fn insert(&mut self, spec: ToolSpec) {
        if let Some(&slot) = self.index.get(spec.name) {
            warn!(tool = spec.name, "tool registered twice, keeping the later one");
            self.tools[slot] = spec;
            return;
        }
        self.index.insert(spec.name, self.tools.len());
        self.tools.push(spec);
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.index.get(name).map(|&i| &self.tools[i])
    }

    /// Tools in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolSpec> {
        self.tools.iter()
    }

    /// Tool names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|t| t.name).collect()
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tool is registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tool::{Summary, ToolKind, Window};
    use twse_core::Endpoint;

    fn spec(name: &'static str, path: &'static str) -> ToolSpec {
        ToolSpec::new(name, "desc", Endpoint::new(path), ToolKind::Records(Window::All))
    }

    fn good() -> Vec<ToolSpec> {
        vec![spec("a", "/a"), spec("b", "/b")]
    }

    fn bad_path() -> Vec<ToolSpec> {
        vec![spec("c", "/c"), spec("d", "no-slash")]
    }

    fn overriding() -> Vec<ToolSpec> {
        vec![spec("a", "/a2")]
    }

    #[test]
    fn test_validate() {
        assert!(spec("get_x", "/x").validate().is_ok());
        assert_eq!(spec("", "/x").validate(), Err(RegistrationError::EmptyName));
        assert!(matches!(
            spec("get x", "/x").validate(),
            Err(RegistrationError::InvalidName(_))
        ));
        assert!(matches!(
            ToolSpec::new("x", " ", Endpoint::new("/x"), ToolKind::Lookup).validate(),
            Err(RegistrationError::MissingDescription(_))
        ));
        assert!(matches!(
            spec("x", "x").validate(),
            Err(RegistrationError::Endpoint { .. })
        ));
        let broken = ToolSpec::new(
            "x",
            "desc",
            Endpoint::new("/x"),
            ToolKind::Summary(Summary::new("s", "- {name")),
        );
        assert!(matches!(broken.validate(), Err(RegistrationError::Template { .. })));
    }

    #[test]
    fn test_invalid_provider_is_skipped_whole() {
        let registry = ToolRegistry::from_providers(&[
            ToolProvider { name: "good", tools: good },
            ToolProvider { name: "bad", tools: bad_path },
        ]);
        assert_eq!(registry.names(), vec!["a", "b"]);
        assert!(registry.get("c").is_none());
    }

    #[test]
    fn test_last_registration_wins_in_place() {
        let registry = ToolRegistry::from_providers(&[
            ToolProvider { name: "good", tools: good },
            ToolProvider { name: "override", tools: overriding },
        ]);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), vec!["a", "b"]);
        assert_eq!(registry.get("a").map(|t| t.endpoint.path), Some("/a2"));
    }

    #[test]
    fn test_empty() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("a").is_none());
    }
}
