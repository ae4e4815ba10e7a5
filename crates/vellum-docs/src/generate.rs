//! Route descriptors and document generation.
//!
//! [`DocsGenerator`] is a configuration builder over a list of [`Route`]
//! descriptors. [`DocsGenerator::build_document`] is the pure transformation
//! from descriptors to a [`Document`]; [`generate`] (and the
//! [`DocsGenerator::mount`] convenience) additionally registers the static
//! asset handler and the Swagger UI page on the host application.

use std::path::PathBuf;

use indexmap::IndexMap;
use regex::Regex;
use serde_json::{Map, Value};

use vellum_schema::{DocumentSchema, SchemaObject};

use crate::document::{
    DocFormat, Document, MediaType, Operation, Parameter, ParameterLocation, Paths, RequestBody,
    ResponseEntry,
};
use crate::error::DocsResult;
use crate::mount::{DocsApp, StaticAssets};
use crate::swagger::SwaggerUi;

/// Default pattern matching `:identifier` placeholder tokens in route paths.
const PLACEHOLDER_PATTERN: &str = r":([A-Za-z0-9_]*)";

/// Per-location request schemas for one route.
///
/// A present field is the location's validation schema; the generator skips
/// absent locations. `body` is set aside as the request-body entry; the
/// others flatten into the parameter list in the order `path`, `query`,
/// `header`.
#[derive(Debug, Clone)]
pub struct RequestSchemas<S> {
    /// Path parameter schema.
    pub path: Option<S>,
    /// Query parameter schema.
    pub query: Option<S>,
    /// Header parameter schema.
    pub header: Option<S>,
    /// Body schema.
    pub body: Option<S>,
}

impl<S> Default for RequestSchemas<S> {
    fn default() -> Self {
        Self {
            path: None,
            query: None,
            header: None,
            body: None,
        }
    }
}

/// A route descriptor: one HTTP endpoint to document.
#[derive(Debug, Clone)]
pub struct Route<S> {
    /// Route path, possibly containing `:name` placeholders.
    pub path: String,
    /// HTTP method (any case; lowercased in the output).
    pub method: String,
    /// Tags for grouping.
    pub tags: Vec<String>,
    /// Short summary.
    pub summary: String,
    /// Request schemas by location.
    pub request: RequestSchemas<S>,
    /// Response body schema.
    pub response: Option<S>,
}

impl<S> Route<S> {
    /// Create a route descriptor for `method` and `path`.
    #[must_use]
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            tags: Vec::new(),
            summary: String::new(),
            request: RequestSchemas::default(),
            response: None,
        }
    }

    /// Add a tag.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the summary.
    #[must_use]
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Set the path parameter schema.
    #[must_use]
    pub fn path_schema(mut self, schema: S) -> Self {
        self.request.path = Some(schema);
        self
    }

    /// Set the query parameter schema.
    #[must_use]
    pub fn query_schema(mut self, schema: S) -> Self {
        self.request.query = Some(schema);
        self
    }

    /// Set the header parameter schema.
    #[must_use]
    pub fn header_schema(mut self, schema: S) -> Self {
        self.request.header = Some(schema);
        self
    }

    /// Set the body schema.
    #[must_use]
    pub fn body_schema(mut self, schema: S) -> Self {
        self.request.body = Some(schema);
        self
    }

    /// Set the response body schema.
    #[must_use]
    pub fn response_schema(mut self, schema: S) -> Self {
        self.response = Some(schema);
        self
    }
}

/// Documentation generator configuration.
///
/// Collects route descriptors and output options, then builds the document
/// and mounts the documentation routes.
///
/// ```rust
/// use vellum_docs::{DocsGenerator, Route};
/// use vellum_schema::SchemaObject;
///
/// let generator = DocsGenerator::new()
///     .info_field("info", serde_json::json!({"title": "My API", "version": "1.0.0"}))
///     .route(
///         Route::new("get", "/users/:id")
///             .tag("users")
///             .summary("Get user")
///             .path_schema(SchemaObject::object().property("id", SchemaObject::string()))
///             .response_schema(SchemaObject::object().property("name", SchemaObject::string())),
///     );
///
/// let document = generator.build_document().unwrap().unwrap();
/// assert!(document.get("paths").unwrap().get("/users/{id}").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct DocsGenerator<S> {
    mount_path: String,
    assets_dir: PathBuf,
    format: DocFormat,
    path_pattern: Option<Regex>,
    routes: Vec<Route<S>>,
    document_info: Map<String, Value>,
    response_envelope: Option<SchemaObject>,
}

impl<S> Default for DocsGenerator<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> DocsGenerator<S> {
    /// Create a generator with default options.
    #[must_use]
    pub fn new() -> Self {
        Self {
            mount_path: "/api-docs".to_string(),
            assets_dir: PathBuf::from("public"),
            format: DocFormat::default(),
            path_pattern: None,
            routes: Vec::new(),
            document_info: Map::new(),
            response_envelope: None,
        }
    }

    /// Set the path the documentation routes are mounted at.
    #[must_use]
    pub fn mount_path(mut self, path: impl Into<String>) -> Self {
        self.mount_path = path.into();
        self
    }

    /// Set the static asset directory served alongside the UI.
    #[must_use]
    pub fn assets_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.assets_dir = dir.into();
        self
    }

    /// Set the output document format.
    #[must_use]
    pub fn format(mut self, format: DocFormat) -> Self {
        self.format = format;
        self
    }

    /// Override the path placeholder pattern.
    ///
    /// Each match is rewritten to `{name}` where `name` is the matched token
    /// without its leading sigil character.
    #[must_use]
    pub fn path_pattern(mut self, pattern: Regex) -> Self {
        self.path_pattern = Some(pattern);
        self
    }

    /// Add a route descriptor.
    #[must_use]
    pub fn route(mut self, route: Route<S>) -> Self {
        self.routes.push(route);
        self
    }

    /// Add several route descriptors.
    #[must_use]
    pub fn routes(mut self, routes: impl IntoIterator<Item = Route<S>>) -> Self {
        self.routes.extend(routes);
        self
    }

    /// Set the caller-supplied top-level document fields.
    ///
    /// Merged into the document after the format marker and `paths`; do not
    /// pass those keys here.
    #[must_use]
    pub fn document_info(mut self, info: Map<String, Value>) -> Self {
        self.document_info = info;
        self
    }

    /// Set one caller-supplied top-level document field.
    #[must_use]
    pub fn info_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.document_info.insert(key.into(), value.into());
        self
    }

    /// Set the envelope fragment response payloads are nested inside.
    ///
    /// When the envelope declares properties, each converted response schema
    /// is injected as the envelope's `data` property; an envelope without
    /// properties is ignored.
    #[must_use]
    pub fn response_envelope(mut self, envelope: SchemaObject) -> Self {
        self.response_envelope = Some(envelope);
        self
    }
}

impl<S: DocumentSchema> DocsGenerator<S> {
    /// Build the documentation document without touching any server.
    ///
    /// Returns `Ok(None)` when no routes are configured: nothing to
    /// document, deliberately not an error. Two calls with identical
    /// configuration produce equal documents.
    pub fn build_document(&self) -> DocsResult<Option<Document>> {
        if self.routes.is_empty() {
            return Ok(None);
        }

        let pattern = match &self.path_pattern {
            Some(pattern) => pattern.clone(),
            None => Regex::new(PLACEHOLDER_PATTERN).expect("valid regex"),
        };

        let mut paths = Paths::new();
        for route in &self.routes {
            let normalized = normalize_path(&route.path, &pattern);
            let operation = self.build_operation(route)?;
            tracing::debug!(path = %normalized, method = %route.method, "Documented route");
            paths
                .entry(normalized)
                .or_default()
                .insert(route.method.to_ascii_lowercase(), operation);
        }

        let document = Document::assemble(self.format, &paths, &self.document_info)?;
        tracing::info!(
            routes = self.routes.len(),
            paths = paths.len(),
            "Generated API documentation document"
        );
        Ok(Some(document))
    }

    /// Build the document and mount the documentation routes. See [`generate`].
    pub fn mount<Srv, App>(&self, server: &Srv, app: &mut App) -> DocsResult<Option<Document>>
    where
        Srv: StaticAssets,
        App: DocsApp<Srv::Handler>,
    {
        generate(server, app, self)
    }

    fn build_operation(&self, route: &Route<S>) -> DocsResult<Operation> {
        let mut parameters = Vec::new();
        let mut request_body = None;

        if let Some(schema) = &route.request.body {
            let converted = schema.doc_schema()?;
            match self.format {
                DocFormat::Swagger2 => parameters.push(Parameter {
                    name: "body".to_string(),
                    location: ParameterLocation::Body,
                    required: true,
                    schema: Some(converted),
                    shape: None,
                }),
                DocFormat::OpenApi3 => {
                    request_body = Some(RequestBody {
                        required: true,
                        content: json_content(converted),
                    });
                }
            }
        }

        for (schema, location) in [
            (&route.request.path, ParameterLocation::Path),
            (&route.request.query, ParameterLocation::Query),
            (&route.request.header, ParameterLocation::Header),
        ] {
            if let Some(schema) = schema {
                parameters.extend(flatten_parameters(schema.doc_schema()?, location, self.format));
            }
        }

        let mut responses = IndexMap::new();
        if let Some(schema) = &route.response {
            let converted = apply_envelope(self.response_envelope.as_ref(), schema.doc_schema()?);
            responses.insert("200".to_string(), success_response(converted, self.format));
        }

        Ok(Operation {
            tags: route.tags.clone(),
            summary: route.summary.clone(),
            parameters,
            request_body,
            responses,
        })
    }
}

/// Build the document and register the documentation routes.
///
/// Registers, in order, the static-asset handler and the Swagger UI page at
/// the generator's mount path. Returns `Ok(None)` without registering
/// anything when the generator has no routes. Registration is not
/// de-duplicated across calls; call once at startup.
pub fn generate<Srv, App, S>(
    server: &Srv,
    app: &mut App,
    generator: &DocsGenerator<S>,
) -> DocsResult<Option<Document>>
where
    Srv: StaticAssets,
    App: DocsApp<Srv::Handler>,
    S: DocumentSchema,
{
    let document = match generator.build_document()? {
        Some(document) => document,
        None => return Ok(None),
    };

    let assets = server.serve_static(&generator.assets_dir);
    app.use_handler(&generator.mount_path, assets);
    app.use_ui(
        &generator.mount_path,
        SwaggerUi::new(&generator.mount_path, &document),
    );
    tracing::info!(path = %generator.mount_path, "Mounted API documentation");

    Ok(Some(document))
}

/// Rewrite placeholder tokens into the `{name}` brace form.
///
/// Matches are computed against the original string and each one is replaced
/// as a literal substring (first remaining occurrence), so a replacement
/// cannot shift the offsets of later matches.
fn normalize_path(path: &str, pattern: &Regex) -> String {
    let mut normalized = path.to_string();
    for token in pattern.find_iter(path) {
        let token = token.as_str();
        let name = token.get(1..).unwrap_or("");
        normalized = normalized.replacen(token, &format!("{{{name}}}"), 1);
    }
    normalized
}

/// Expand an object fragment into one parameter per property.
///
/// Path parameters are always required; other locations are required when the
/// fragment's required list names them.
fn flatten_parameters(
    fragment: SchemaObject,
    location: ParameterLocation,
    format: DocFormat,
) -> Vec<Parameter> {
    let required_names = fragment.required;
    fragment
        .properties
        .into_iter()
        .map(|(name, property)| {
            let required =
                location == ParameterLocation::Path || required_names.contains(&name);
            let (schema, shape) = match format {
                DocFormat::Swagger2 => (None, Some(property)),
                DocFormat::OpenApi3 => (Some(property), None),
            };
            Parameter {
                name,
                location,
                required,
                schema,
                shape,
            }
        })
        .collect()
}

/// Nest a response schema inside the configured envelope, if any.
fn apply_envelope(envelope: Option<&SchemaObject>, response: SchemaObject) -> SchemaObject {
    match envelope {
        Some(envelope) if !envelope.properties.is_empty() => {
            let mut wrapped = envelope.clone();
            wrapped.properties.insert("data".to_string(), response);
            wrapped
        }
        _ => response,
    }
}

fn success_response(schema: SchemaObject, format: DocFormat) -> ResponseEntry {
    match format {
        DocFormat::Swagger2 => ResponseEntry {
            description: "successful operation".to_string(),
            schema: Some(schema),
            content: None,
        },
        DocFormat::OpenApi3 => ResponseEntry {
            description: "successful operation".to_string(),
            schema: None,
            content: Some(json_content(schema)),
        },
    }
}

fn json_content(schema: SchemaObject) -> IndexMap<String, MediaType> {
    let mut content = IndexMap::new();
    content.insert(
        "application/json".to_string(),
        MediaType {
            schema: Some(schema),
        },
    );
    content
}
