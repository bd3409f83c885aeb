//! Read models for CQRS-lite pattern
//!
//! Flattened, string-only views of the dependency records, shared by every
//! formatter so all outputs agree on values and order.

pub mod sbom_entry_view;
pub mod sbom_read_model;
pub mod sbom_read_model_builder;

pub use sbom_entry_view::SbomEntryView;
pub use sbom_read_model::SbomReadModel;
pub use sbom_read_model_builder::SbomReadModelBuilder;
