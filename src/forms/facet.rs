//! Facet descriptors: the UI contract each facet contributes to a form

use serde::Serialize;

/// Presentation kind of a declared field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FieldKind {
    /// Free-form text input
    Text,
    /// Numeric input
    Number,
    /// On/off toggle
    Flag,
    /// Single choice from a list of options. An empty option list means
    /// the hosting backend supplies the candidates at runtime (blob
    /// stores, routing rules).
    Select(Vec<String>),
    /// Ordered multi-selection with backend-supplied candidates
    List,
}

impl FieldKind {
    /// Short tag shown next to a field in the preview renderer
    pub fn tag(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Flag => "flag",
            FieldKind::Select(_) => "select",
            FieldKind::List => "list",
        }
    }
}

/// A single field a facet declares.
///
/// Purely presentation metadata: the composer never interprets values,
/// it only hands the declaration through to a rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub help: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            help: None,
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn number(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub fn flag(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Flag)
    }

    pub fn select(name: &str, label: &str, options: &[&str]) -> Self {
        let options = options.iter().map(|o| o.to_string()).collect();
        Self::new(name, label, FieldKind::Select(options))
    }

    pub fn list(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::List)
    }

    /// Mark the field as mandatory
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Attach a help line shown under the field
    pub fn help(mut self, help: &str) -> Self {
        self.help = Some(help.to_string());
        self
    }
}

/// A facet as it lives in the registry: alias, section label and the
/// fields its section contributes to a composed form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetDescriptor {
    pub alias: String,
    pub label: String,
    pub fields: Vec<FieldDescriptor>,
}

impl FacetDescriptor {
    pub fn new(alias: &str, label: &str, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            alias: alias.to_string(),
            label: label.to_string(),
            fields,
        }
    }

    /// Look up a declared field by name
    #[allow(dead_code)]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_defaults_to_optional_without_help() {
        let field = FieldDescriptor::text("remote-url", "Remote storage");
        assert_eq!(field.name, "remote-url");
        assert_eq!(field.label, "Remote storage");
        assert_eq!(field.kind, FieldKind::Text);
        assert!(!field.required);
        assert!(field.help.is_none());
    }

    #[test]
    fn test_field_builders_chain() {
        let field = FieldDescriptor::number("ttl", "Not found cache TTL")
            .required()
            .help("How long to remember a miss");
        assert!(field.required);
        assert_eq!(field.help.as_deref(), Some("How long to remember a miss"));
    }

    #[test]
    fn test_select_collects_options() {
        let field = FieldDescriptor::select(
            "write-policy",
            "Deployment policy",
            &["Allow redeploy", "Disable redeploy"],
        );
        match field.kind {
            FieldKind::Select(options) => {
                assert_eq!(options, vec!["Allow redeploy", "Disable redeploy"]);
            }
            other => panic!("expected a select field, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_select_means_backend_supplied() {
        let field = FieldDescriptor::select("blob-store", "Blob store", &[]);
        assert_eq!(field.kind, FieldKind::Select(Vec::new()));
        assert_eq!(field.kind.tag(), "select");
    }

    #[test]
    fn test_facet_field_lookup() {
        let facet = FacetDescriptor::new(
            "negative-cache",
            "Negative cache",
            vec![
                FieldDescriptor::flag("enabled", "Not found cache enabled"),
                FieldDescriptor::number("ttl", "Not found cache TTL"),
            ],
        );
        assert_eq!(facet.field_count(), 2);
        assert!(facet.field("ttl").is_some());
        assert!(facet.field("missing").is_none());
    }

    #[test]
    fn test_kind_tags() {
        assert_eq!(FieldKind::Text.tag(), "text");
        assert_eq!(FieldKind::Number.tag(), "number");
        assert_eq!(FieldKind::Flag.tag(), "flag");
        assert_eq!(FieldKind::List.tag(), "list");
    }
}
