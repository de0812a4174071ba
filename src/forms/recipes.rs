//! Built-in facets and the Composer repository settings forms

use super::catalog::FormCatalog;
use super::definition::{FacetRef, FormDefinition};
use super::error::ConfigError;
use super::facet::{FacetDescriptor, FieldDescriptor};

pub const REPLICATION: &str = "replication";
pub const COMPOSER: &str = "composer";
pub const PROXY: &str = "proxy";
pub const STORAGE: &str = "storage";
pub const STORAGE_WRITE_POLICY: &str = "storage-write-policy";
pub const GROUP: &str = "group";
pub const ROUTING_RULE: &str = "routing-rule";
pub const NEGATIVE_CACHE: &str = "negative-cache";
pub const CLEANUP_POLICY: &str = "cleanup-policy";
pub const HTTP_CLIENT: &str = "http-client";

pub const COMPOSER_GROUP: &str = "composer-group";
pub const COMPOSER_PROXY: &str = "composer-proxy";
pub const COMPOSER_HOSTED: &str = "composer-hosted";

/// All facets the Composer forms draw on.
///
/// Most of these are generic repository facets any format reuses; only
/// the `composer` facet is format-specific.
pub fn composer_facets() -> Vec<FacetDescriptor> {
    vec![
        FacetDescriptor::new(
            REPLICATION,
            "Replication",
            vec![
                FieldDescriptor::flag("preemptive-pull", "Pre-emptive pull")
                    .help("Fetch assets from the replication source before they are requested"),
                FieldDescriptor::text("asset-path-regex", "Asset path regex")
                    .help("Only assets with paths matching this expression are pulled"),
            ],
        ),
        FacetDescriptor::new(
            COMPOSER,
            "Composer",
            vec![
                FieldDescriptor::text("distribution", "Distribution")
                    .help("Distribution type used when serving packages"),
                FieldDescriptor::flag("flat", "Flat layout")
                    .help("Serve packages from a flat directory layout"),
            ],
        ),
        FacetDescriptor::new(
            PROXY,
            "Proxy",
            vec![
                FieldDescriptor::text("remote-url", "Remote storage")
                    .required()
                    .help("Location of the remote repository being proxied"),
                FieldDescriptor::number("content-max-age", "Maximum component age")
                    .help("Minutes to cache packages before rechecking the remote"),
                FieldDescriptor::number("metadata-max-age", "Maximum metadata age")
                    .help("Minutes to cache package metadata before rechecking the remote"),
            ],
        ),
        FacetDescriptor::new(
            STORAGE,
            "Storage",
            vec![
                FieldDescriptor::select("blob-store", "Blob store", &[])
                    .required()
                    .help("Blob store used to persist repository contents"),
                FieldDescriptor::flag("strict-content-validation", "Strict content type validation")
                    .help("Validate that uploaded content matches its declared MIME type"),
            ],
        ),
        FacetDescriptor::new(
            STORAGE_WRITE_POLICY,
            "Deployment",
            vec![FieldDescriptor::select(
                "write-policy",
                "Deployment policy",
                &["Allow redeploy", "Disable redeploy", "Read-only"],
            )
            .required()
            .help("Controls whether deployed components may be overwritten")],
        ),
        FacetDescriptor::new(
            GROUP,
            "Group",
            vec![FieldDescriptor::list("members", "Member repositories")
                .required()
                .help("Ordered repositories whose content is aggregated")],
        ),
        FacetDescriptor::new(
            ROUTING_RULE,
            "Routing rule",
            vec![FieldDescriptor::select("routing-rule", "Routing rule", &[])
                .help("Restrict which requests are forwarded to the remote")],
        ),
        FacetDescriptor::new(
            NEGATIVE_CACHE,
            "Negative cache",
            vec![
                FieldDescriptor::flag("enabled", "Not found cache enabled")
                    .help("Cache responses for content missing from the remote"),
                FieldDescriptor::number("ttl", "Not found cache TTL")
                    .help("Minutes to remember that the remote had no content"),
            ],
        ),
        FacetDescriptor::new(
            CLEANUP_POLICY,
            "Cleanup",
            vec![FieldDescriptor::list("policies", "Cleanup policies")
                .help("Components matching any applied policy become removal candidates")],
        ),
        FacetDescriptor::new(
            HTTP_CLIENT,
            "HTTP client",
            vec![
                FieldDescriptor::flag("blocked", "Block outbound connections"),
                FieldDescriptor::flag("auto-block", "Auto-block outbound connections")
                    .help("Block the remote automatically when it becomes unreachable"),
                FieldDescriptor::number("retries", "Connection retries"),
                FieldDescriptor::number("timeout", "Connection timeout")
                    .help("Seconds to wait for the remote before giving up"),
            ],
        ),
    ]
}

/// Settings form for a Composer group repository.
///
/// The group facet is the generic one, told which package format the
/// member list should be filtered to.
pub fn composer_group() -> FormDefinition {
    FormDefinition::new(
        COMPOSER_GROUP,
        "Composer (group)",
        vec![
            FacetRef::new(REPLICATION),
            FacetRef::new(COMPOSER),
            FacetRef::new(STORAGE),
            FacetRef::with_format(GROUP, "composer"),
        ],
    )
}

/// Settings form for a Composer proxy repository
pub fn composer_proxy() -> FormDefinition {
    FormDefinition::new(
        COMPOSER_PROXY,
        "Composer (proxy)",
        vec![
            FacetRef::new(REPLICATION),
            FacetRef::new(COMPOSER),
            FacetRef::new(PROXY),
            FacetRef::new(STORAGE),
            FacetRef::new(ROUTING_RULE),
            FacetRef::new(NEGATIVE_CACHE),
            FacetRef::new(CLEANUP_POLICY),
            FacetRef::new(HTTP_CLIENT),
        ],
    )
}

/// Settings form for a Composer hosted repository
pub fn composer_hosted() -> FormDefinition {
    FormDefinition::new(
        COMPOSER_HOSTED,
        "Composer (hosted)",
        vec![
            FacetRef::new(COMPOSER),
            FacetRef::new(STORAGE),
            FacetRef::new(STORAGE_WRITE_POLICY),
            FacetRef::new(CLEANUP_POLICY),
        ],
    )
}

/// Catalog holding every built-in facet and form.
///
/// Errors here mean the built-in declarations themselves are
/// inconsistent, which the tests below pin down.
pub fn builtin_catalog() -> Result<FormCatalog, ConfigError> {
    let mut catalog = FormCatalog::new();
    for facet in composer_facets() {
        catalog.register_facet(facet)?;
    }
    catalog.register_form(composer_group())?;
    catalog.register_form(composer_proxy())?;
    catalog.register_form(composer_hosted())?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::facet::FieldKind;
    use crate::forms::registry::FacetResolver;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_catalog_builds() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.registry().len(), 10);
        assert_eq!(catalog.forms().len(), 3);
    }

    #[test]
    fn test_group_form_sections_in_order() {
        let catalog = builtin_catalog().unwrap();
        let form = catalog.compose(COMPOSER_GROUP).unwrap();

        assert_eq!(form.title, "Composer (group)");
        assert_eq!(
            form.aliases(),
            vec![REPLICATION, COMPOSER, STORAGE, GROUP]
        );
    }

    #[test]
    fn test_proxy_form_sections_in_order() {
        let catalog = builtin_catalog().unwrap();
        let form = catalog.compose(COMPOSER_PROXY).unwrap();

        assert_eq!(form.title, "Composer (proxy)");
        assert_eq!(
            form.aliases(),
            vec![
                REPLICATION,
                COMPOSER,
                PROXY,
                STORAGE,
                ROUTING_RULE,
                NEGATIVE_CACHE,
                CLEANUP_POLICY,
                HTTP_CLIENT,
            ]
        );
    }

    #[test]
    fn test_hosted_form_sections_in_order() {
        let catalog = builtin_catalog().unwrap();
        let form = catalog.compose(COMPOSER_HOSTED).unwrap();

        assert_eq!(form.title, "Composer (hosted)");
        assert_eq!(
            form.aliases(),
            vec![COMPOSER, STORAGE, STORAGE_WRITE_POLICY, CLEANUP_POLICY]
        );
    }

    #[test]
    fn test_only_group_section_carries_format() {
        let catalog = builtin_catalog().unwrap();
        let form = catalog.compose(COMPOSER_GROUP).unwrap();

        for section in &form.sections {
            if section.alias == GROUP {
                assert_eq!(section.format.as_deref(), Some("composer"));
            } else {
                assert_eq!(section.format, None, "unexpected format on '{}'", section.alias);
            }
        }
    }

    #[test]
    fn test_every_form_facet_is_registered() {
        let catalog = builtin_catalog().unwrap();
        for definition in catalog.forms() {
            for fref in definition.facets() {
                assert!(
                    catalog.registry().contains(&fref.facet),
                    "form '{}' references unregistered facet '{}'",
                    definition.recipe(),
                    fref.facet
                );
            }
        }
    }

    #[test]
    fn test_proxy_remote_url_is_required() {
        let catalog = builtin_catalog().unwrap();
        let form = catalog.compose(COMPOSER_PROXY).unwrap();

        let proxy = form
            .sections
            .iter()
            .find(|s| s.alias == PROXY)
            .expect("proxy section present");
        let remote = proxy
            .fields
            .iter()
            .find(|f| f.name == "remote-url")
            .expect("remote-url field present");
        assert!(remote.required);
    }

    #[test]
    fn test_write_policy_options() {
        let catalog = builtin_catalog().unwrap();
        let facet = catalog
            .registry()
            .resolve(STORAGE_WRITE_POLICY)
            .expect("write policy facet registered");

        let field = facet.field("write-policy").expect("write-policy field");
        match &field.kind {
            FieldKind::Select(options) => {
                assert_eq!(
                    options,
                    &vec![
                        "Allow redeploy".to_string(),
                        "Disable redeploy".to_string(),
                        "Read-only".to_string(),
                    ]
                );
            }
            other => panic!("expected select, got {other:?}"),
        }
    }
}
