//! Swagger UI page generation.
//!
//! [`SwaggerUi`] is the documentation-UI middleware payload: it holds a
//! generated [`Document`] and renders a complete HTML page that loads Swagger
//! UI from a CDN with the document embedded. The host application serves the
//! page at the mount path through the [`DocsApp`](crate::DocsApp) capability.

use crate::document::Document;

/// Swagger UI configuration and HTML generation.
#[derive(Debug, Clone)]
pub struct SwaggerUi {
    /// Base path where the UI is served (e.g., "/api-docs").
    path: String,
    /// The document to display.
    document: Document,
    /// Title for the HTML page.
    title: String,
    /// Whether the URL tracks the selected operation.
    deep_linking: bool,
    /// Default expansion depth for operations.
    doc_expansion: DocExpansion,
    /// Swagger UI version to load from the CDN.
    ui_version: String,
}

/// Document expansion level for Swagger UI.
#[derive(Debug, Clone, Copy, Default)]
pub enum DocExpansion {
    /// Show all operations collapsed.
    None,
    /// Show only the list of operations.
    #[default]
    List,
    /// Expand all operations fully.
    Full,
}

impl DocExpansion {
    fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::List => "list",
            Self::Full => "full",
        }
    }
}

impl SwaggerUi {
    /// Create a new Swagger UI page for `document`, served at `path`.
    ///
    /// The page title is taken from the document's `info.title` field when
    /// present.
    #[must_use]
    pub fn new(path: impl Into<String>, document: &Document) -> Self {
        let title = document
            .get("info")
            .and_then(|info| info.get("title"))
            .and_then(serde_json::Value::as_str)
            .map_or_else(
                || "API Documentation".to_string(),
                |title| format!("{title} - Swagger UI"),
            );

        Self {
            path: path.into(),
            document: document.clone(),
            title,
            deep_linking: true,
            doc_expansion: DocExpansion::List,
            ui_version: "5.18.2".to_string(),
        }
    }

    /// Set the page title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Enable or disable deep linking.
    #[must_use]
    pub fn deep_linking(mut self, enabled: bool) -> Self {
        self.deep_linking = enabled;
        self
    }

    /// Set the document expansion level.
    #[must_use]
    pub fn doc_expansion(mut self, expansion: DocExpansion) -> Self {
        self.doc_expansion = expansion;
        self
    }

    /// Set the Swagger UI version to load from the CDN.
    #[must_use]
    pub fn ui_version(mut self, version: impl Into<String>) -> Self {
        self.ui_version = version.into();
        self
    }

    /// The base path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The document being displayed.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// The path where the raw JSON document is served.
    #[must_use]
    pub fn spec_path(&self) -> String {
        format!("{}/openapi.json", self.path.trim_end_matches('/'))
    }

    /// The document as JSON.
    #[must_use]
    pub fn spec_json(&self) -> String {
        self.document
            .to_json_pretty()
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Render the complete HTML page.
    #[must_use]
    pub fn html(&self) -> String {
        format!(
            r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@{version}/swagger-ui.css" />
    <style>
        body {{
            margin: 0;
            background: #fafafa;
        }}
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@{version}/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {{
            window.ui = SwaggerUIBundle({{
                spec: {spec_json},
                dom_id: '#swagger-ui',
                deepLinking: {deep_linking},
                docExpansion: '{doc_expansion}',
                presets: [SwaggerUIBundle.presets.apis],
                layout: "BaseLayout"
            }});
        }};
    </script>
</body>
</html>"##,
            title = html_escape(&self.title),
            version = self.ui_version,
            spec_json = self.spec_json(),
            deep_linking = self.deep_linking,
            doc_expansion = self.doc_expansion.as_str(),
        )
    }

    /// Render the HTML as bytes for use in HTTP responses.
    #[must_use]
    pub fn html_bytes(&self) -> bytes::Bytes {
        bytes::Bytes::from(self.html())
    }
}

/// Simple HTML escape for XSS prevention in the title.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocFormat, Paths};
    use serde_json::json;

    fn test_document() -> Document {
        let mut info = serde_json::Map::new();
        info.insert("info".to_string(), json!({"title": "Test API", "version": "1.0.0"}));
        Document::assemble(DocFormat::OpenApi3, &Paths::new(), &info).unwrap()
    }

    #[test]
    fn test_title_from_document_info() {
        let ui = SwaggerUi::new("/api-docs", &test_document());
        assert_eq!(ui.title, "Test API - Swagger UI");
    }

    #[test]
    fn test_title_fallback_without_info() {
        let document =
            Document::assemble(DocFormat::OpenApi3, &Paths::new(), &serde_json::Map::new())
                .unwrap();
        let ui = SwaggerUi::new("/api-docs", &document);
        assert_eq!(ui.title, "API Documentation");
    }

    #[test]
    fn test_spec_path_trims_trailing_slash() {
        let ui = SwaggerUi::new("/api-docs/", &test_document());
        assert_eq!(ui.spec_path(), "/api-docs/openapi.json");
    }

    #[test]
    fn test_html_embeds_document() {
        let ui = SwaggerUi::new("/api-docs", &test_document());
        let html = ui.html();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("swagger-ui"));
        assert!(html.contains("Test API"));
        assert!(html.contains("3.0.0"));
    }

    #[test]
    fn test_customization() {
        let ui = SwaggerUi::new("/api-docs", &test_document())
            .title("Custom Title")
            .deep_linking(false)
            .doc_expansion(DocExpansion::Full)
            .ui_version("5.0.0");

        let html = ui.html();
        assert!(html.contains("Custom Title"));
        assert!(html.contains("deepLinking: false"));
        assert!(html.contains("docExpansion: 'full'"));
        assert!(html.contains("swagger-ui-dist@5.0.0"));
    }

    #[test]
    fn test_html_escapes_title() {
        let ui = SwaggerUi::new("/api-docs", &test_document()).title("<script>");
        assert!(ui.html().contains("&lt;script&gt;"));
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }

    #[test]
    fn test_html_bytes() {
        let ui = SwaggerUi::new("/api-docs", &test_document());
        assert!(!ui.html_bytes().is_empty());
    }
}
