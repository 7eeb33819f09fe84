//! The data-access seam between transports and persistence.
//!
//! Every HTTP handler and MCP tool goes through [`Storage`]. The only
//! implementation is [`MemStorage`], which lives for the lifetime of the
//! process; construct it once at startup and hand it to whoever needs it.

mod memory;
mod table;

pub use memory::MemStorage;

use uuid::Uuid;

use crate::models::*;
use crate::StorageResult;

/// Per-entity CRUD scoped to an owning user.
///
/// Conventions shared by every entity group:
///
/// - `get_*s(user_id)` returns only records owned by `user_id`.
/// - `get_*(id)` returns `Ok(None)` when the record does not exist.
/// - `create_*` assigns a fresh id and stamps `created_at == updated_at`.
/// - `update_*` merges the `Some` fields of the input over the record, never
///   touches `id`, `user_id` or `created_at`, strictly advances `updated_at`
///   and fails with [`StorageError::NotFound`](crate::StorageError::NotFound)
///   when the record is missing.
/// - `delete_*` returns whether a record was removed. Deletes never cascade.
///
/// Inputs are not validated here; callers run `validate()` first.
pub trait Storage: Send + Sync {
    // Users
    fn get_user(&self, id: Uuid) -> StorageResult<Option<User>>;
    fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>>;
    fn create_user(&self, input: CreateUserInput) -> StorageResult<User>;
    fn update_user_stripe_info(&self, id: Uuid, info: StripeInfo) -> StorageResult<User>;

    // Contacts
    fn get_contacts(&self, user_id: Uuid) -> StorageResult<Vec<Contact>>;
    fn get_contact(&self, id: Uuid) -> StorageResult<Option<Contact>>;
    fn create_contact(&self, user_id: Uuid, input: CreateContactInput) -> StorageResult<Contact>;
    fn update_contact(&self, id: Uuid, input: UpdateContactInput) -> StorageResult<Contact>;
    fn delete_contact(&self, id: Uuid) -> StorageResult<bool>;

    // Tasks
    fn get_tasks(&self, user_id: Uuid) -> StorageResult<Vec<Task>>;
    fn get_task(&self, id: Uuid) -> StorageResult<Option<Task>>;
    fn create_task(&self, user_id: Uuid, input: CreateTaskInput) -> StorageResult<Task>;
    fn update_task(&self, id: Uuid, input: UpdateTaskInput) -> StorageResult<Task>;
    fn delete_task(&self, id: Uuid) -> StorageResult<bool>;

    // KPI metrics, newest first; optionally restricted to one period
    fn get_kpi_metrics(&self, user_id: Uuid, period: Option<&str>)
        -> StorageResult<Vec<KpiMetric>>;
    fn create_kpi_metric(&self, user_id: Uuid, input: CreateKpiMetricInput)
        -> StorageResult<KpiMetric>;

    // Calendar events, ordered by start time
    fn get_calendar_events(&self, user_id: Uuid) -> StorageResult<Vec<CalendarEvent>>;
    fn get_calendar_event(&self, id: Uuid) -> StorageResult<Option<CalendarEvent>>;
    fn create_calendar_event(
        &self,
        user_id: Uuid,
        input: CreateCalendarEventInput,
    ) -> StorageResult<CalendarEvent>;
    fn update_calendar_event(
        &self,
        id: Uuid,
        input: UpdateCalendarEventInput,
    ) -> StorageResult<CalendarEvent>;
    fn delete_calendar_event(&self, id: Uuid) -> StorageResult<bool>;

    // AI memory, newest first
    fn get_ai_memories(&self, user_id: Uuid, kind: Option<&str>) -> StorageResult<Vec<AiMemory>>;
    fn create_ai_memory(&self, user_id: Uuid, input: CreateAiMemoryInput)
        -> StorageResult<AiMemory>;
    fn search_ai_memories(&self, user_id: Uuid, query: &str) -> StorageResult<Vec<AiMemory>>;

    // Workflows
    fn get_workflows(&self, user_id: Uuid) -> StorageResult<Vec<Workflow>>;
    fn get_workflow(&self, id: Uuid) -> StorageResult<Option<Workflow>>;
    fn create_workflow(&self, user_id: Uuid, input: CreateWorkflowInput)
        -> StorageResult<Workflow>;
    fn update_workflow(&self, id: Uuid, input: UpdateWorkflowInput) -> StorageResult<Workflow>;
    fn delete_workflow(&self, id: Uuid) -> StorageResult<bool>;

    // Chat sessions, most recently active first
    fn get_chat_sessions(&self, user_id: Uuid) -> StorageResult<Vec<ChatSession>>;
    fn get_chat_session(&self, id: Uuid) -> StorageResult<Option<ChatSession>>;
    fn create_chat_session(
        &self,
        user_id: Uuid,
        input: CreateChatSessionInput,
    ) -> StorageResult<ChatSession>;
    fn append_chat_message(
        &self,
        id: Uuid,
        input: AppendChatMessageInput,
    ) -> StorageResult<ChatSession>;

    // SuperSal executive tasks, newest first
    fn get_supersal_tasks(&self, user_id: Uuid) -> StorageResult<Vec<SupersalTask>>;
    fn get_supersal_task(&self, id: Uuid) -> StorageResult<Option<SupersalTask>>;
    fn create_supersal_task(
        &self,
        user_id: Uuid,
        input: CreateSupersalTaskInput,
    ) -> StorageResult<SupersalTask>;
    fn update_supersal_task(
        &self,
        id: Uuid,
        input: UpdateSupersalTaskInput,
    ) -> StorageResult<SupersalTask>;
    fn complete_supersal_task(&self, id: Uuid) -> StorageResult<SupersalTask>;
    fn delete_supersal_task(&self, id: Uuid) -> StorageResult<bool>;

    // Lead intelligence, highest score first
    fn get_leads(&self, user_id: Uuid) -> StorageResult<Vec<LeadIntelligence>>;
    fn get_lead(&self, id: Uuid) -> StorageResult<Option<LeadIntelligence>>;
    fn create_lead(&self, user_id: Uuid, input: CreateLeadInput)
        -> StorageResult<LeadIntelligence>;
    /// Attaches fixture contact details and technologies, and raises the score
    /// by [`ENRICHMENT_SCORE_BOOST`](crate::fixtures::ENRICHMENT_SCORE_BOOST)
    /// capped at 100.
    fn enrich_lead(&self, id: Uuid) -> StorageResult<LeadIntelligence>;
    /// Records a search campaign and persists every matching sample company
    /// as a new lead tagged with that campaign. Identical searches are not
    /// deduplicated: each one is its own campaign with its own rows.
    fn search_leads(&self, user_id: Uuid, params: LeadSearchParams)
        -> StorageResult<LeadSearchResult>;

    // Search campaigns, newest first
    fn get_search_campaigns(&self, user_id: Uuid) -> StorageResult<Vec<SearchCampaign>>;
    fn create_search_campaign(
        &self,
        user_id: Uuid,
        input: CreateSearchCampaignInput,
    ) -> StorageResult<SearchCampaign>;

    // Sticky notes, pinned first then newest first
    fn get_sticky_notes(&self, user_id: Uuid) -> StorageResult<Vec<StickyNote>>;
    fn get_sticky_note(&self, id: Uuid) -> StorageResult<Option<StickyNote>>;
    fn create_sticky_note(
        &self,
        user_id: Uuid,
        input: CreateStickyNoteInput,
    ) -> StorageResult<StickyNote>;
    fn update_sticky_note(&self, id: Uuid, input: UpdateStickyNoteInput)
        -> StorageResult<StickyNote>;
    fn delete_sticky_note(&self, id: Uuid) -> StorageResult<bool>;

    /// Fixture health records; no service is probed.
    fn get_system_status(&self) -> StorageResult<Vec<ServiceStatus>>;
}
