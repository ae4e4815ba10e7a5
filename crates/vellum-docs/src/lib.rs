//! # Vellum Docs
//!
//! Always-in-sync API documentation generated from per-route validation
//! schemas.
//!
//! Given a list of route descriptors — path, method, tags, summary, and the
//! validation schemas already written for the route's path, query, header,
//! and body inputs — this crate produces a Swagger 2.0 or OpenAPI 3.0
//! document and mounts a Swagger UI viewer onto the host application at a
//! chosen path. The validation library, the web framework, and the UI
//! renderer stay external collaborators behind small capability traits.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use vellum_docs::{generate, DocsGenerator, Route};
//! use vellum_schema::SchemaObject;
//!
//! let generator = DocsGenerator::new()
//!     .info_field("info", serde_json::json!({"title": "My API", "version": "1.0.0"}))
//!     .route(
//!         Route::new("get", "/users/:id")
//!             .tag("users")
//!             .summary("Get user")
//!             .path_schema(SchemaObject::object().property("id", SchemaObject::string()))
//!             .response_schema(user_schema),
//!     );
//!
//! // `server` implements `StaticAssets`, `app` implements `DocsApp` for
//! // your web framework.
//! let document = generate(&server, &mut app, &generator)?;
//! ```
//!
//! ## Design
//!
//! - **Pure transformation first**: [`DocsGenerator::build_document`] turns
//!   descriptors into a [`Document`] with no side effects; [`generate`]
//!   performs the two registrations afterwards.
//! - **Capability seams**: validation schemas implement
//!   [`DocumentSchema`](vellum_schema::DocumentSchema); servers implement
//!   [`StaticAssets`] and [`DocsApp`]. Everything is testable with fakes.
//! - **One generator, two formats**: [`DocFormat`] selects the Swagger 2.0 or
//!   OpenAPI 3.0 output shape from a single code path.

mod document;
mod error;
mod generate;
mod mount;
mod swagger;

pub use document::{
    DocFormat, Document, MediaType, Operation, Parameter, ParameterLocation, Paths, RequestBody,
    ResponseEntry,
};
pub use error::{DocsError, DocsResult};
pub use generate::{generate, DocsGenerator, RequestSchemas, Route};
pub use mount::{DocsApp, StaticAssets};
pub use swagger::{DocExpansion, SwaggerUi};

pub use vellum_schema::{DocumentSchema, SchemaError, SchemaObject, SchemaType};
