//! Stateless composition of form definitions into renderable trees

use serde::Serialize;

use super::definition::FormDefinition;
use super::error::ConfigError;
use super::facet::FieldDescriptor;
use super::registry::FacetResolver;

/// One section of a composed form, produced from one facet reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSection {
    pub alias: String,
    pub label: String,
    pub fields: Vec<FieldDescriptor>,
    /// Package format the referencing definition specialized this
    /// section with, if any
    pub format: Option<String>,
}

/// The renderable form tree handed to a rendering layer.
///
/// Sections appear in exactly the order the definition declared its
/// facet references, one section per reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedForm {
    pub recipe: String,
    pub title: String,
    pub sections: Vec<FormSection>,
}

impl ComposedForm {
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Section aliases in render order
    #[allow(dead_code)]
    pub fn aliases(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.alias.as_str()).collect()
    }

    /// Total number of fields across all sections
    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }
}

/// Stateless transform from a form definition to its renderable tree.
///
/// Holds nothing but the resolver it borrows; composing the same
/// definition twice yields the same tree.
pub struct FormComposer<'a> {
    resolver: &'a dyn FacetResolver,
}

impl<'a> FormComposer<'a> {
    pub fn new(resolver: &'a dyn FacetResolver) -> Self {
        Self { resolver }
    }

    /// Compose a definition into its form tree.
    ///
    /// Fails on the first facet reference the resolver cannot satisfy;
    /// no partial tree is returned.
    pub fn compose(&self, definition: &FormDefinition) -> Result<ComposedForm, ConfigError> {
        let mut sections = Vec::with_capacity(definition.len());
        for fref in definition.facets() {
            let descriptor =
                self.resolver
                    .resolve(&fref.facet)
                    .ok_or_else(|| ConfigError::UnknownFacet {
                        recipe: definition.recipe().to_string(),
                        facet: fref.facet.clone(),
                    })?;
            sections.push(FormSection {
                alias: descriptor.alias,
                label: descriptor.label,
                fields: descriptor.fields,
                format: fref.format().map(String::from),
            });
        }
        tracing::debug!(
            "composed form '{}' with {} sections",
            definition.recipe(),
            sections.len()
        );
        Ok(ComposedForm {
            recipe: definition.recipe().to_string(),
            title: definition.title().to_string(),
            sections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::definition::FacetRef;
    use crate::forms::facet::FacetDescriptor;
    use crate::forms::registry::{FacetRegistry, MockFacetResolver};
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn registry_with(aliases: &[&str]) -> FacetRegistry {
        let mut registry = FacetRegistry::new();
        for alias in aliases {
            let label = format!("Section {alias}");
            let fields = vec![FieldDescriptor::text("value", "Value")];
            registry
                .register(FacetDescriptor::new(alias, &label, fields))
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_sections_follow_declaration_order() {
        let registry = registry_with(&["alpha", "beta", "gamma"]);
        let definition = FormDefinition::new(
            "test-recipe",
            "Test",
            vec![
                FacetRef::new("gamma"),
                FacetRef::new("alpha"),
                FacetRef::new("beta"),
            ],
        );

        let form = FormComposer::new(&registry).compose(&definition).unwrap();
        assert_eq!(form.aliases(), vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn test_one_section_per_reference() {
        let registry = registry_with(&["alpha", "beta"]);
        let definition = FormDefinition::new(
            "test-recipe",
            "Test",
            vec![FacetRef::new("alpha"), FacetRef::new("beta")],
        );

        let form = FormComposer::new(&registry).compose(&definition).unwrap();
        assert_eq!(form.section_count(), definition.len());
        for (fref, section) in definition.facets().iter().zip(&form.sections) {
            assert_eq!(fref.facet, section.alias);
        }
    }

    #[test]
    fn test_repeated_reference_yields_repeated_section() {
        let registry = registry_with(&["alpha"]);
        let definition = FormDefinition::new(
            "test-recipe",
            "Test",
            vec![FacetRef::new("alpha"), FacetRef::new("alpha")],
        );

        let form = FormComposer::new(&registry).compose(&definition).unwrap();
        assert_eq!(form.aliases(), vec!["alpha", "alpha"]);
    }

    #[test]
    fn test_unknown_reference_fails_without_partial_form() {
        let registry = registry_with(&["alpha"]);
        let definition = FormDefinition::new(
            "test-recipe",
            "Test",
            vec![FacetRef::new("alpha"), FacetRef::new("missing")],
        );

        let err = FormComposer::new(&registry).compose(&definition).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownFacet {
                recipe: "test-recipe".to_string(),
                facet: "missing".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_definition_composes_to_empty_form() {
        let registry = registry_with(&[]);
        let definition = FormDefinition::new("bare", "Bare", Vec::new());

        let form = FormComposer::new(&registry).compose(&definition).unwrap();
        assert_eq!(form.section_count(), 0);
        assert_eq!(form.recipe, "bare");
        assert_eq!(form.title, "Bare");
    }

    #[test]
    fn test_format_param_lands_on_its_section_only() {
        let registry = registry_with(&["group", "storage"]);
        let definition = FormDefinition::new(
            "test-group",
            "Test group",
            vec![
                FacetRef::new("storage"),
                FacetRef::with_format("group", "composer"),
            ],
        );

        let form = FormComposer::new(&registry).compose(&definition).unwrap();
        assert_eq!(form.sections[0].format, None);
        assert_eq!(form.sections[1].format.as_deref(), Some("composer"));
    }

    #[test]
    fn test_composition_is_repeatable() {
        let registry = registry_with(&["alpha", "beta"]);
        let definition = FormDefinition::new(
            "test-recipe",
            "Test",
            vec![FacetRef::new("alpha"), FacetRef::new("beta")],
        );

        let composer = FormComposer::new(&registry);
        let first = composer.compose(&definition).unwrap();
        let second = composer.compose(&definition).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sections_carry_resolved_descriptor() {
        let mut resolver = MockFacetResolver::new();
        resolver
            .expect_resolve()
            .with(eq("proxy"))
            .returning(|_| {
                Some(FacetDescriptor::new(
                    "proxy",
                    "Proxy",
                    vec![FieldDescriptor::text("remote-url", "Remote storage").required()],
                ))
            });

        let definition =
            FormDefinition::new("test-proxy", "Test proxy", vec![FacetRef::new("proxy")]);
        let form = FormComposer::new(&resolver).compose(&definition).unwrap();

        assert_eq!(form.sections[0].label, "Proxy");
        assert_eq!(form.sections[0].fields.len(), 1);
        assert_eq!(form.sections[0].fields[0].name, "remote-url");
        assert!(form.sections[0].fields[0].required);
    }

    #[test]
    fn test_resolver_miss_propagates_through_mock() {
        let mut resolver = MockFacetResolver::new();
        resolver.expect_resolve().returning(|_| None);

        let definition =
            FormDefinition::new("test-proxy", "Test proxy", vec![FacetRef::new("proxy")]);
        let err = FormComposer::new(&resolver).compose(&definition).unwrap_err();

        assert_eq!(
            err,
            ConfigError::UnknownFacet {
                recipe: "test-proxy".to_string(),
                facet: "proxy".to_string(),
            }
        );
    }
}
