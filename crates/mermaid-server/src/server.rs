//! MCP handler: the three Mermaid tools and the example resources.

use std::sync::Arc;

use mermaid_ink::{ConversionArgs, MermaidConverter, supported_options};
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ListResourceTemplatesResult, ListResourcesResult,
    PaginatedRequestParam, ProtocolVersion, ReadResourceRequestParam, ReadResourceResult,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, schemars, tool, tool_handler, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::resources;

/// Server name reported during initialization.
pub const SERVER_NAME: &str = "mermaid-converter";

const INSTRUCTIONS: &str = "Converts Mermaid diagrams to PNG, JPG, SVG or PDF via mermaid.ink. \
    Call get_supported_options for themes and formats, validate_mermaid_syntax to check a \
    diagram, and read mermaid://examples/{diagram_type} for starting points.";

/// Arguments of `validate_mermaid_syntax`.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(default)]
pub struct ValidateParams {
    /// Mermaid diagram source to validate.
    pub mermaid_code: Option<String>,
}

/// Mermaid MCP server.
///
/// Cheap to clone; every clone shares one converter and its connection pools.
#[derive(Clone)]
pub struct MermaidServer {
    converter: Arc<MermaidConverter>,
    version: String,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl MermaidServer {
    /// Create a server around the given converter.
    pub fn new(converter: MermaidConverter, version: impl Into<String>) -> Self {
        Self {
            converter: Arc::new(converter),
            version: version.into(),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Convert Mermaid diagram code to an image (PNG, JPG, SVG or PDF) using \
            mermaid.ink. Returns the image as base64 together with its MIME type, filename \
            and size. Background color accepts a hex code (FF0000) or a named color with a \
            ! prefix (!white)."
    )]
    async fn convert_mermaid_to_image(
        &self,
        Parameters(args): Parameters<ConversionArgs>,
    ) -> Result<CallToolResult, McpError> {
        let converter = Arc::clone(&self.converter);
        let result = run_blocking(move || converter.convert(&args)).await?;
        json_result(&result)
    }

    #[tool(
        description = "Validate Mermaid diagram syntax by asking mermaid.ink to render it. \
            Returns whether the diagram is valid and a message or error."
    )]
    async fn validate_mermaid_syntax(
        &self,
        Parameters(params): Parameters<ValidateParams>,
    ) -> Result<CallToolResult, McpError> {
        let converter = Arc::clone(&self.converter);
        let result =
            run_blocking(move || converter.validate(params.mermaid_code.as_deref())).await?;
        json_result(&result)
    }

    #[tool(description = "List the themes and output formats supported by the converter.")]
    async fn get_supported_options(&self) -> Result<CallToolResult, McpError> {
        tracing::info!("Providing list of supported options");
        json_result(&supported_options())
    }
}

#[tool_handler]
impl ServerHandler for MermaidServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = SERVER_NAME.to_owned();
        server_info.version.clone_from(&self.version);

        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info,
            instructions: Some(INSTRUCTIONS.to_owned()),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(resources::examples()))
    }

    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourceTemplatesResult, McpError> {
        Ok(ListResourceTemplatesResult::with_all_items(
            resources::templates()?,
        ))
    }

    async fn read_resource(
        &self,
        ReadResourceRequestParam { uri }: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        resources::read(&uri)
    }
}

/// Run a blocking mermaid.ink call off the async runtime.
async fn run_blocking<T, F>(call: F) -> Result<T, McpError>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|e| McpError::internal_error(format!("Conversion task failed: {e}"), None))
}

/// Return a structured result as JSON text content.
fn json_result(value: &impl Serialize) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::json(value)?]))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;

    fn server() -> MermaidServer {
        MermaidServer::new(MermaidConverter::new("http://127.0.0.1:9"), "1.2.3")
    }

    /// Decode the JSON payload of a tool result.
    fn payload(result: &CallToolResult) -> Value {
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["isError"], false);
        serde_json::from_str(json["content"][0]["text"].as_str().unwrap()).unwrap()
    }

    #[test]
    fn test_server_info() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert_eq!(info.server_info.version, "1.2.3");
        assert_eq!(info.protocol_version, ProtocolVersion::V_2024_11_05);
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_some());
    }

    #[test]
    fn test_tool_list() {
        let tools = server().tool_router.list_all();
        let mut names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        names.sort_unstable();
        assert_eq!(
            names,
            [
                "convert_mermaid_to_image",
                "get_supported_options",
                "validate_mermaid_syntax"
            ]
        );

        let convert = tools
            .iter()
            .find(|t| t.name == "convert_mermaid_to_image")
            .unwrap();
        let properties = &convert.input_schema["properties"];
        for field in ["mermaid_code", "output_format", "theme", "background_color"] {
            assert!(properties.get(field).is_some(), "missing {field}");
        }
    }

    #[tokio::test]
    async fn test_convert_empty_code_is_structured_failure() {
        let args = ConversionArgs::new("").with_format("png");
        let result = server()
            .convert_mermaid_to_image(Parameters(args))
            .await
            .unwrap();
        assert_eq!(
            payload(&result),
            serde_json::json!({
                "success": false,
                "error": "Mermaid code is required and cannot be empty"
            })
        );
    }

    #[tokio::test]
    async fn test_convert_bad_format_is_structured_failure() {
        let args = ConversionArgs::new("pie").with_format("BMP");
        let result = server()
            .convert_mermaid_to_image(Parameters(args))
            .await
            .unwrap();
        let data = payload(&result);
        assert_eq!(data["success"], false);
        assert!(
            data["error"]
                .as_str()
                .unwrap()
                .starts_with("Invalid output format 'bmp'")
        );
    }

    #[tokio::test]
    async fn test_validate_whitespace_code_is_invalid() {
        let params = ValidateParams {
            mermaid_code: Some(" \n ".to_owned()),
        };
        let result = server()
            .validate_mermaid_syntax(Parameters(params))
            .await
            .unwrap();
        assert_eq!(
            payload(&result),
            serde_json::json!({
                "valid": false,
                "error": "Mermaid code is required and cannot be empty"
            })
        );
    }

    #[tokio::test]
    async fn test_supported_options_are_fixed_lists() {
        let expected = serde_json::json!({
            "themes": ["default", "dark", "neutral", "forest"],
            "formats": ["png", "jpg", "svg", "pdf"]
        });
        let server = server();
        for _ in 0..3 {
            let result = server.get_supported_options().await.unwrap();
            assert_eq!(payload(&result), expected);
        }
    }
}
