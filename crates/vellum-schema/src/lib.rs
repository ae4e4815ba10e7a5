//! # Vellum Schema
//!
//! Documentation-schema fragments and the conversion seam between validation
//! libraries and the Vellum documentation generator.
//!
//! Validation libraries stay external collaborators: they implement
//! [`DocumentSchema`] for their schema types, producing a [`SchemaObject`]
//! fragment (type, properties, required names, and friends) that the
//! generator assembles into Swagger 2.0 / OpenAPI 3.0 documents.
//!
//! ## Quick Start
//!
//! ```rust
//! use vellum_schema::{DocumentSchema, SchemaObject};
//!
//! let user = SchemaObject::object()
//!     .property("id", SchemaObject::string())
//!     .property("name", SchemaObject::string())
//!     .required_property("id");
//!
//! // `SchemaObject` converts to itself, so fragments can be used directly
//! // wherever a validation schema is expected.
//! let fragment = user.doc_schema().unwrap();
//! assert!(fragment.properties.contains_key("id"));
//! ```

mod error;
mod schema;

pub use error::SchemaError;
pub use schema::{DocumentSchema, SchemaObject, SchemaType};
