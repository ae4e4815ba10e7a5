//! Documentation document model.
//!
//! These types are the output side of generation: per-method operation
//! entries keyed by normalized path, assembled into a single [`Document`]
//! together with the format marker and the caller's top-level info fields.
//!
//! The same types serve both target formats; [`DocFormat`] selects which of
//! the shape conventions (inline parameter fragments and body parameters for
//! Swagger 2.0, `schema` parameters and `requestBody`/`content` for OpenAPI
//! 3.0) the generator fills in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use vellum_schema::SchemaObject;

use crate::error::DocsResult;

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocFormat {
    /// Swagger 2.0 shape conventions.
    Swagger2,
    /// OpenAPI 3.0 shape conventions.
    #[default]
    OpenApi3,
}

impl DocFormat {
    /// The format-version marker placed first in the document.
    pub(crate) fn marker(self) -> (&'static str, &'static str) {
        match self {
            Self::Swagger2 => ("swagger", "2.0"),
            Self::OpenApi3 => ("openapi", "3.0.0"),
        }
    }
}

/// Parameter location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// URL path parameter.
    Path,
    /// Query string parameter.
    Query,
    /// HTTP header.
    Header,
    /// Request body (Swagger 2.0 body parameter).
    Body,
}

/// An operation parameter.
///
/// Exactly one of `schema` and `shape` is set: `schema` for the OpenAPI 3.0
/// form (and the Swagger 2.0 body parameter), `shape` for Swagger 2.0
/// non-body parameters, whose converted fragment fields are inlined into the
/// parameter entry itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter location.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Whether required.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Fragment under a `schema` key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaObject>,
    /// Fragment inlined into the parameter entry.
    #[serde(flatten)]
    pub shape: Option<SchemaObject>,
}

/// Request body documentation (OpenAPI 3.0 only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestBody {
    /// Whether required.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    /// Content by media type.
    pub content: IndexMap<String, MediaType>,
}

/// Media type content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaType {
    /// Schema for this media type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaObject>,
}

/// A single response entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEntry {
    /// Response description.
    pub description: String,
    /// Response body schema (Swagger 2.0 shape).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaObject>,
    /// Response content by media type (OpenAPI 3.0 shape).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<IndexMap<String, MediaType>>,
}

/// A per-method documentation entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operation {
    /// Tags for grouping.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Short summary.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub summary: String,
    /// Flattened parameter list (always present, possibly empty).
    pub parameters: Vec<Parameter>,
    /// Request body (OpenAPI 3.0 only).
    #[serde(rename = "requestBody", skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,
    /// Responses by status code; omitted when the route documents none.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, ResponseEntry>,
}

/// The `paths` accumulator: normalized path, then lowercased method.
pub type Paths = IndexMap<String, IndexMap<String, Operation>>;

/// An assembled documentation document.
///
/// A JSON object holding the format marker, `paths`, and the caller's
/// top-level info fields. Two documents built from identical inputs compare
/// equal (deep equality).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Assemble the final document.
    ///
    /// The marker and `paths` are written first and `info` entries last, so
    /// an `info` entry sharing a key with either of them wins. Callers must
    /// not pass `paths` or the marker key in `info`.
    pub(crate) fn assemble(
        format: DocFormat,
        paths: &Paths,
        info: &Map<String, Value>,
    ) -> DocsResult<Self> {
        let mut document = Map::new();
        let (marker, version) = format.marker();
        document.insert(marker.to_string(), Value::String(version.to_string()));
        document.insert("paths".to_string(), serde_json::to_value(paths)?);
        for (key, value) in info {
            document.insert(key.clone(), value.clone());
        }
        Ok(Self(document))
    }

    /// Look up a top-level field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The document as a JSON object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// The document as a JSON value.
    #[must_use]
    pub fn to_value(&self) -> Value {
        Value::Object(self.0.clone())
    }

    /// Serialize the document to compact JSON.
    pub fn to_json(&self) -> DocsResult<String> {
        serde_json::to_string(&self.0).map_err(Into::into)
    }

    /// Serialize the document to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> DocsResult<String> {
        serde_json::to_string_pretty(&self.0).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_markers() {
        assert_eq!(DocFormat::Swagger2.marker(), ("swagger", "2.0"));
        assert_eq!(DocFormat::OpenApi3.marker(), ("openapi", "3.0.0"));
    }

    #[test]
    fn test_parameter_location_serialization() {
        assert_eq!(
            serde_json::to_value(ParameterLocation::Query).unwrap(),
            json!("query")
        );
        assert_eq!(
            serde_json::to_value(ParameterLocation::Body).unwrap(),
            json!("body")
        );
    }

    #[test]
    fn test_inline_parameter_serialization() {
        let param = Parameter {
            name: "limit".to_string(),
            location: ParameterLocation::Query,
            required: true,
            schema: None,
            shape: Some(SchemaObject::integer()),
        };

        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(
            value,
            json!({"name": "limit", "in": "query", "required": true, "type": "integer"})
        );
    }

    #[test]
    fn test_schema_parameter_serialization() {
        let param = Parameter {
            name: "id".to_string(),
            location: ParameterLocation::Path,
            required: true,
            schema: Some(SchemaObject::string()),
            shape: None,
        };

        let value = serde_json::to_value(&param).unwrap();
        assert_eq!(
            value,
            json!({"name": "id", "in": "path", "required": true, "schema": {"type": "string"}})
        );
    }

    #[test]
    fn test_optional_parameter_omits_required() {
        let param = Parameter {
            name: "page".to_string(),
            location: ParameterLocation::Query,
            required: false,
            schema: Some(SchemaObject::integer()),
            shape: None,
        };

        let value = serde_json::to_value(&param).unwrap();
        assert!(value.get("required").is_none());
    }

    #[test]
    fn test_operation_serialization_keeps_empty_parameters() {
        let operation = Operation {
            tags: Vec::new(),
            summary: String::new(),
            parameters: Vec::new(),
            request_body: None,
            responses: IndexMap::new(),
        };

        let value = serde_json::to_value(&operation).unwrap();
        assert_eq!(value, json!({"parameters": []}));
    }

    #[test]
    fn test_assemble_places_marker_and_paths_first() {
        let document = Document::assemble(DocFormat::OpenApi3, &Paths::new(), &Map::new()).unwrap();
        assert_eq!(document.get("openapi"), Some(&json!("3.0.0")));
        assert_eq!(document.get("paths"), Some(&json!({})));
        assert!(document.get("swagger").is_none());
    }

    #[test]
    fn test_assemble_info_wins_on_collision() {
        let mut info = Map::new();
        info.insert("info".to_string(), json!({"title": "My API"}));
        info.insert("openapi".to_string(), json!("3.0.3"));

        let document = Document::assemble(DocFormat::OpenApi3, &Paths::new(), &info).unwrap();
        assert_eq!(document.get("info"), Some(&json!({"title": "My API"})));
        // The caller's value overwrites the marker; callers are told not to
        // pass the marker key.
        assert_eq!(document.get("openapi"), Some(&json!("3.0.3")));
    }

    #[test]
    fn test_document_deep_equality() {
        let mut info = Map::new();
        info.insert("info".to_string(), json!({"title": "My API", "version": "1.0.0"}));

        let a = Document::assemble(DocFormat::Swagger2, &Paths::new(), &info).unwrap();
        let b = Document::assemble(DocFormat::Swagger2, &Paths::new(), &info).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_document_json_output() {
        let document = Document::assemble(DocFormat::Swagger2, &Paths::new(), &Map::new()).unwrap();
        let json = document.to_json().unwrap();
        assert!(json.contains("\"swagger\":\"2.0\""));

        let pretty = document.to_json_pretty().unwrap();
        assert!(pretty.contains("\"swagger\": \"2.0\""));
    }
}
