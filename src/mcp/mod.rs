use std::sync::Arc;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerInfo},
    tool, tool_handler, tool_router,
    schemars::JsonSchema,
    ErrorData as McpError, ServerHandler, ServiceExt,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use warroom_core::models::*;
use warroom_core::{Storage, StorageError};

#[derive(Clone)]
pub struct McpServer {
    storage: Arc<dyn Storage>,
    user_id: Uuid,
    tool_router: ToolRouter<Self>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateStickyNoteRequest {
    #[schemars(description = "Text of the note")]
    pub content: String,
    #[schemars(description = "Pin the note to the top of the board")]
    #[serde(default)]
    pub pinned: bool,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CompleteSupersalTaskRequest {
    #[schemars(description = "The SuperSal task ID to mark as complete")]
    pub task_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchLeadsRequest {
    #[schemars(description = "Free-text match on company, domain, industry or technology")]
    pub query: Option<String>,
    #[schemars(description = "Industry to restrict to, matched case-insensitively")]
    pub industry: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LeadSummary {
    pub id: Uuid,
    pub company_name: String,
    pub industry: String,
    pub lead_score: u8,
}

impl McpServer {
    pub fn new(storage: Arc<dyn Storage>, user_id: Uuid) -> Self {
        Self {
            storage,
            user_id,
            tool_router: Self::tool_router(),
        }
    }

    fn parse_uuid(s: &str) -> Result<Uuid, McpError> {
        Uuid::parse_str(s)
            .map_err(|e| McpError::invalid_params(format!("Invalid UUID: {}", e), None))
    }

    fn storage_error(err: StorageError) -> McpError {
        if err.is_not_found() || matches!(err, StorageError::Invalid(_)) {
            McpError::invalid_params(err.to_string(), None)
        } else {
            McpError::internal_error(err.to_string(), None)
        }
    }

    fn json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_router]
impl McpServer {
    #[tool(description = "List sticky notes, pinned notes first")]
    async fn list_sticky_notes(&self) -> Result<CallToolResult, McpError> {
        let notes = self
            .storage
            .get_sticky_notes(self.user_id)
            .map_err(Self::storage_error)?;
        Self::json(&notes)
    }

    #[tool(description = "Add a sticky note to the war room board")]
    async fn create_sticky_note(
        &self,
        params: Parameters<CreateStickyNoteRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let input = CreateStickyNoteInput {
            content: req.content,
            kind: StickyNoteType::Note,
            priority: Priority::Medium,
            pinned: req.pinned,
            color: None,
            metadata: Metadata::new(),
        };
        input
            .validate()
            .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

        let note = self
            .storage
            .create_sticky_note(self.user_id, input)
            .map_err(Self::storage_error)?;

        Ok(CallToolResult::success(vec![Content::text(format!(
            "Sticky note added with id: {}",
            note.id
        ))]))
    }

    #[tool(description = "List SuperSal executive tasks, newest first")]
    async fn list_supersal_tasks(&self) -> Result<CallToolResult, McpError> {
        let tasks = self
            .storage
            .get_supersal_tasks(self.user_id)
            .map_err(Self::storage_error)?;
        Self::json(&tasks)
    }

    #[tool(description = "Mark a SuperSal task as complete")]
    async fn complete_supersal_task(
        &self,
        params: Parameters<CompleteSupersalTaskRequest>,
    ) -> Result<CallToolResult, McpError> {
        let task_id = Self::parse_uuid(&params.0.task_id)?;

        let task = self
            .storage
            .complete_supersal_task(task_id)
            .map_err(Self::storage_error)?;

        Ok(CallToolResult::success(vec![Content::text(
            task.supersal_response.unwrap_or_default(),
        )]))
    }

    #[tool(description = "Search sample companies for leads; every search is recorded as a campaign")]
    async fn search_leads(
        &self,
        params: Parameters<SearchLeadsRequest>,
    ) -> Result<CallToolResult, McpError> {
        let req = params.0;
        let result = self
            .storage
            .search_leads(
                self.user_id,
                LeadSearchParams {
                    query: req.query,
                    industry: req.industry,
                    intent: None,
                },
            )
            .map_err(Self::storage_error)?;

        let summary: Vec<LeadSummary> = result
            .leads
            .into_iter()
            .map(|l| LeadSummary {
                id: l.id,
                company_name: l.company_name,
                industry: l.industry,
                lead_score: l.lead_score,
            })
            .collect();
        Self::json(&summary)
    }

    #[tool(description = "Report integration health (fixture data)")]
    async fn system_status(&self) -> Result<CallToolResult, McpError> {
        let status = self
            .storage
            .get_system_status()
            .map_err(Self::storage_error)?;
        Self::json(&status)
    }
}

#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "War Room MCP server: sticky notes, SuperSal tasks and lead search".into(),
            ),
            ..Default::default()
        }
    }
}

pub async fn run_stdio_server(storage: Arc<dyn Storage>, user_id: Uuid) -> anyhow::Result<()> {
    use tokio::io::{stdin, stdout};

    tracing::info!("Starting MCP server via stdio");

    let service = McpServer::new(storage, user_id);
    let server = service.serve((stdin(), stdout())).await?;

    let quit_reason = server.waiting().await?;
    tracing::info!("MCP server stopped: {:?}", quit_reason);

    Ok(())
}
