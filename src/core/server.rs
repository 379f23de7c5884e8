//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to domain-specific services.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and dispatched through the [`ToolRegistry`], which validates arguments
//! against each tool's declared schema before the handler runs.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use crate::domains::resources::{ResourceError, ResourceService};
use crate::domains::tools::{ToolRegistry, default_registry};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between different domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Registry dispatching tool calls.
    tools: Arc<ToolRegistry>,

    /// Service for handling resource-related requests.
    resources: Arc<ResourceService>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the tool or resource catalog contains a registration
    /// conflict; that is a programming error and aborts startup.
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);

        let tools = Arc::new(default_registry(config.as_ref())?);
        let resources = Arc::new(ResourceService::new()?);

        info!(
            "Server initialized with {} tools and {} resources",
            tools.tool_names().len(),
            resources.list_resources().len()
        );

        Ok(Self {
            config,
            tools,
            resources,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "General-purpose toolbox server. Provides greeting, calculator, \
                 time, geocoding, weather, image generation, and code review \
                 tools, plus per-city weather/location/time resources."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools.list(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, request, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        let arguments = request.arguments.unwrap_or_default();
        self.tools.dispatch(&request.name, arguments).await
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        Ok(ListResourcesResult {
            resources: self.resources.list_resources(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resources
            .read_resource(&request.uri)
            .await
            .map_err(map_resource_error)
    }
}

/// Convert a resource-domain failure into the protocol error space. A
/// crashed producer is an internal error, not a missing URI.
fn map_resource_error(error: ResourceError) -> McpError {
    let message = error.to_string();
    match error {
        ResourceError::NotFound(_) => McpError::resource_not_found(message, None),
        ResourceError::Conflict(_) | ResourceError::Internal(_) => {
            McpError::internal_error(message, None)
        }
    }
}
