//! Facet registry: resolving facet aliases to descriptors

use std::collections::BTreeMap;

use super::error::ConfigError;
use super::facet::FacetDescriptor;

/// Resolution of facet aliases to descriptors.
///
/// The composer depends on this seam rather than on the registry
/// directly, so tests can drive composition against a mock.
#[cfg_attr(test, mockall::automock)]
pub trait FacetResolver {
    /// Look up the descriptor registered for an alias
    fn resolve(&self, alias: &str) -> Option<FacetDescriptor>;
}

/// Registry mapping each facet alias to its descriptor.
///
/// Aliases are global to the application, the same way widget aliases
/// are in the hosting UI: registering the same alias twice is a
/// configuration error, not a silent overwrite.
#[derive(Debug, Clone, Default)]
pub struct FacetRegistry {
    facets: BTreeMap<String, FacetDescriptor>,
}

impl FacetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a facet descriptor under its alias
    pub fn register(&mut self, descriptor: FacetDescriptor) -> Result<(), ConfigError> {
        if self.facets.contains_key(&descriptor.alias) {
            return Err(ConfigError::DuplicateFacet {
                facet: descriptor.alias.clone(),
            });
        }
        tracing::debug!("registered facet '{}'", descriptor.alias);
        self.facets.insert(descriptor.alias.clone(), descriptor);
        Ok(())
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.facets.contains_key(alias)
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }

    /// Iterate descriptors in alphabetical alias order
    pub fn iter(&self) -> impl Iterator<Item = &FacetDescriptor> {
        self.facets.values()
    }
}

impl FacetResolver for FacetRegistry {
    fn resolve(&self, alias: &str) -> Option<FacetDescriptor> {
        self.facets.get(alias).cloned()
    }
}
