//! Example diagram resources.
//!
//! Exposes the built-in example catalog under `mermaid://examples/{diagram_type}`.
//! Any diagram type may be read; unknown types return a message listing the
//! known ones rather than an error.

use mermaid_ink::{example_types, lookup_example};
use rmcp::ErrorData as McpError;
use rmcp::model::{
    AnnotateAble, RawResource, ReadResourceResult, Resource, ResourceContents, ResourceTemplate,
};

/// URI prefix of example resources.
pub const EXAMPLES_PREFIX: &str = "mermaid://examples/";

/// URI template of example resources.
pub const EXAMPLES_TEMPLATE: &str = "mermaid://examples/{diagram_type}";

const MIME_TYPE: &str = "text/plain";

/// One concrete resource per known diagram type.
pub fn examples() -> Vec<Resource> {
    example_types()
        .map(|name| {
            let mut resource =
                RawResource::new(format!("{EXAMPLES_PREFIX}{name}"), format!("{name} example"));
            resource.mime_type = Some(MIME_TYPE.to_owned());
            resource.no_annotation()
        })
        .collect()
}

/// The example lookup template.
///
/// # Errors
///
/// Returns an internal error if the template cannot be built.
pub fn templates() -> Result<Vec<ResourceTemplate>, McpError> {
    let template = serde_json::from_value(serde_json::json!({
        "uriTemplate": EXAMPLES_TEMPLATE,
        "name": "mermaid_example",
        "description": "Example Mermaid source for a diagram type \
            (flowchart, sequence, gantt, pie, gitgraph, mindmap, class)",
        "mimeType": MIME_TYPE
    }))
    .map_err(|e| McpError::internal_error(format!("Invalid resource template: {e}"), None))?;
    Ok(vec![template])
}

/// Read an example resource.
///
/// # Errors
///
/// Returns an invalid-params error if `uri` is outside `mermaid://examples/`.
pub fn read(uri: &str) -> Result<ReadResourceResult, McpError> {
    let diagram_type = uri
        .strip_prefix(EXAMPLES_PREFIX)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| {
            McpError::invalid_params(
                format!("Unknown resource: {uri}"),
                Some(serde_json::json!({ "uri": uri })),
            )
        })?;

    tracing::info!(diagram_type, "Providing example diagram");
    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(lookup_example(diagram_type), uri)],
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;

    fn to_json(value: &impl serde::Serialize) -> Value {
        serde_json::to_value(value).unwrap()
    }

    #[test]
    fn test_templates() {
        let templates = to_json(&templates().unwrap());
        assert_eq!(
            templates[0]["uriTemplate"],
            "mermaid://examples/{diagram_type}"
        );
        assert_eq!(templates[0]["mimeType"], "text/plain");
    }

    #[test]
    fn test_examples_cover_every_type() {
        let resources = to_json(&examples());
        let uris: Vec<_> = resources
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|r| r["uri"].as_str())
            .collect();
        assert_eq!(uris.len(), 7);
        assert_eq!(uris[0], "mermaid://examples/flowchart");
        assert!(uris.contains(&"mermaid://examples/class"));
    }

    #[test]
    fn test_read_known_example() {
        let result = to_json(&read("mermaid://examples/Sequence").unwrap());
        let text = result["contents"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("sequenceDiagram"));
        assert_eq!(result["contents"][0]["uri"], "mermaid://examples/Sequence");
    }

    #[test]
    fn test_read_unknown_example_lists_types() {
        let result = to_json(&read("mermaid://examples/venn").unwrap());
        let text = result["contents"][0]["text"].as_str().unwrap();
        assert!(text.contains("'venn'"));
        assert!(text.contains("flowchart, sequence"));
    }

    #[test]
    fn test_read_rejects_foreign_uri() {
        let err = read("file:///etc/passwd").unwrap_err();
        assert_eq!(err.code.0, -32602);
        assert!(read("mermaid://examples/").is_err());
    }
}
