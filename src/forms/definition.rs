//! Form definitions: ordered facet references per repository recipe

use serde::Serialize;

/// Parameters a definition hands to one facet reference.
///
/// The only parameter any shipped definition declares is the package
/// `format` passed to the generic group facet. The shape stays this
/// narrow on purpose; nothing wider is modeled until a facet needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetParams {
    pub format: Option<String>,
}

/// A reference to a registered facet, by alias
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetRef {
    pub facet: String,
    pub params: FacetParams,
}

impl FacetRef {
    /// Reference a facet with no parameters
    pub fn new(facet: &str) -> Self {
        Self {
            facet: facet.to_string(),
            params: FacetParams::default(),
        }
    }

    /// Reference a facet specialized for a package format
    pub fn with_format(facet: &str, format: &str) -> Self {
        Self {
            facet: facet.to_string(),
            params: FacetParams {
                format: Some(format.to_string()),
            },
        }
    }

    pub fn format(&self) -> Option<&str> {
        self.params.format.as_deref()
    }
}

/// The ordered facet list making up the settings form of one recipe.
///
/// Definitions are immutable once constructed and the facet order is
/// user-facing: sections render in exactly this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormDefinition {
    recipe: String,
    title: String,
    facets: Vec<FacetRef>,
}

impl FormDefinition {
    pub fn new(recipe: &str, title: &str, facets: Vec<FacetRef>) -> Self {
        Self {
            recipe: recipe.to_string(),
            title: title.to_string(),
            facets,
        }
    }

    pub fn recipe(&self) -> &str {
        &self.recipe
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn facets(&self) -> &[FacetRef] {
        &self.facets
    }

    pub fn len(&self) -> usize {
        self.facets.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.facets.is_empty()
    }
}
