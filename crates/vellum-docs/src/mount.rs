//! Capability seams for publishing documentation onto a web server.
//!
//! The generator never talks to a concrete web framework. It asks a
//! [`StaticAssets`] capability for a handler serving the documentation asset
//! directory and registers handlers through a [`DocsApp`] capability. Both
//! are trivially fakeable in tests, and an embedding application implements
//! them once for its framework of choice.

use std::path::Path;

use crate::swagger::SwaggerUi;

/// Capability to build a handler that serves a static asset directory.
pub trait StaticAssets {
    /// Handler type the host application can mount.
    type Handler;

    /// Build a handler serving the files under `dir`.
    fn serve_static(&self, dir: &Path) -> Self::Handler;
}

/// Capability to register handlers on the host application.
pub trait DocsApp<H> {
    /// Register `handler` at `path`.
    fn use_handler(&mut self, path: &str, handler: H);

    /// Register the documentation UI at `path`.
    fn use_ui(&mut self, path: &str, ui: SwaggerUi);
}
