//! Settings-form composition domain
//!
//! Facet descriptors are registered into a registry, form definitions
//! reference them by alias, and a stateless composer resolves each
//! definition into the renderable tree the UI layer consumes. All
//! wiring mistakes surface as [`ConfigError`] at registration time.

mod catalog;
mod compose;
mod definition;
mod error;
mod facet;
pub mod recipes;
mod registry;

pub use catalog::FormCatalog;
pub use compose::{ComposedForm, FormComposer, FormSection};
pub use definition::{FacetParams, FacetRef, FormDefinition};
pub use error::ConfigError;
pub use facet::{FacetDescriptor, FieldDescriptor, FieldKind};
pub use recipes::builtin_catalog;
pub use registry::{FacetRegistry, FacetResolver};
