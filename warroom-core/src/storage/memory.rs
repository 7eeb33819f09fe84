use std::cmp::Reverse;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use super::table::{Clock, Table};
use super::Storage;
use crate::fixtures;
use crate::models::*;
use crate::{StorageError, StorageResult};

/// Process-lifetime storage backed by one hash map per entity.
pub struct MemStorage {
    clock: Clock,
    users: Table<User>,
    contacts: Table<Contact>,
    tasks: Table<Task>,
    kpi_metrics: Table<KpiMetric>,
    calendar_events: Table<CalendarEvent>,
    ai_memories: Table<AiMemory>,
    workflows: Table<Workflow>,
    chat_sessions: Table<ChatSession>,
    supersal_tasks: Table<SupersalTask>,
    leads: Table<LeadIntelligence>,
    search_campaigns: Table<SearchCampaign>,
    sticky_notes: Table<StickyNote>,
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStorage {
    pub fn new() -> Self {
        Self {
            clock: Clock::new(),
            users: Table::new(),
            contacts: Table::new(),
            tasks: Table::new(),
            kpi_metrics: Table::new(),
            calendar_events: Table::new(),
            ai_memories: Table::new(),
            workflows: Table::new(),
            chat_sessions: Table::new(),
            supersal_tasks: Table::new(),
            leads: Table::new(),
            search_campaigns: Table::new(),
            sticky_notes: Table::new(),
        }
    }

    fn insert_lead(
        &self,
        user_id: Uuid,
        campaign_id: Option<Uuid>,
        input: CreateLeadInput,
    ) -> LeadIntelligence {
        let now = self.clock.now();
        let lead = LeadIntelligence {
            id: Uuid::new_v4(),
            user_id,
            campaign_id,
            company_name: input.company_name,
            domain: input.domain,
            industry: input.industry,
            employee_count: input.employee_count,
            lead_score: input.lead_score.min(MAX_LEAD_SCORE),
            intent: input.intent,
            technologies: input.technologies,
            contact_info: None,
            enriched_at: None,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
        };
        self.leads.insert(lead.id, lead)
    }
}

impl Storage for MemStorage {
    // ============================================================
    // Users
    // ============================================================

    fn get_user(&self, id: Uuid) -> StorageResult<Option<User>> {
        Ok(self.users.get(id))
    }

    fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        Ok(self.users.find(|u| u.username == username))
    }

    fn create_user(&self, input: CreateUserInput) -> StorageResult<User> {
        if self.get_user_by_username(&input.username)?.is_some() {
            return Err(StorageError::Conflict(format!(
                "Username {} is already taken",
                input.username
            )));
        }

        let now = self.clock.now();
        let user = User {
            id: Uuid::new_v4(),
            username: input.username,
            email: input.email,
            stripe_customer_id: None,
            stripe_subscription_id: None,
            biometric_enabled: input.biometric_enabled,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
        };
        debug!(user_id = %user.id, username = %user.username, "created user");
        Ok(self.users.insert(user.id, user))
    }

    fn update_user_stripe_info(&self, id: Uuid, info: StripeInfo) -> StorageResult<User> {
        self.users
            .modify(id, |user| {
                user.stripe_customer_id = Some(info.customer_id);
                if let Some(subscription_id) = info.subscription_id {
                    user.stripe_subscription_id = Some(subscription_id);
                }
                user.updated_at = self.clock.now();
            })
            .ok_or_else(|| StorageError::not_found("User", id))
    }

    // ============================================================
    // Contacts
    // ============================================================

    fn get_contacts(&self, user_id: Uuid) -> StorageResult<Vec<Contact>> {
        let mut contacts = self.contacts.filter(|c| c.user_id == user_id);
        contacts.sort_by_key(|c| c.created_at);
        Ok(contacts)
    }

    fn get_contact(&self, id: Uuid) -> StorageResult<Option<Contact>> {
        Ok(self.contacts.get(id))
    }

    fn create_contact(&self, user_id: Uuid, input: CreateContactInput) -> StorageResult<Contact> {
        let now = self.clock.now();
        let contact = Contact {
            id: Uuid::new_v4(),
            user_id,
            name: input.name,
            email: input.email,
            phone: input.phone,
            company: input.company,
            status: input.status,
            ghl_contact_id: input.ghl_contact_id,
            tags: input.tags,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
        };
        debug!(contact_id = %contact.id, status = contact.status.as_str(), "created contact");
        Ok(self.contacts.insert(contact.id, contact))
    }

    fn update_contact(&self, id: Uuid, input: UpdateContactInput) -> StorageResult<Contact> {
        self.contacts
            .modify(id, |contact| {
                if let Some(name) = input.name {
                    contact.name = name;
                }
                if let Some(email) = input.email {
                    contact.email = Some(email);
                }
                if let Some(phone) = input.phone {
                    contact.phone = Some(phone);
                }
                if let Some(company) = input.company {
                    contact.company = Some(company);
                }
                if let Some(status) = input.status {
                    contact.status = status;
                }
                if let Some(ghl_contact_id) = input.ghl_contact_id {
                    contact.ghl_contact_id = Some(ghl_contact_id);
                }
                if let Some(tags) = input.tags {
                    contact.tags = tags;
                }
                if let Some(metadata) = input.metadata {
                    contact.metadata = metadata;
                }
                contact.updated_at = self.clock.now();
            })
            .ok_or_else(|| StorageError::not_found("Contact", id))
    }

    fn delete_contact(&self, id: Uuid) -> StorageResult<bool> {
        let removed = self.contacts.remove(id);
        debug!(contact_id = %id, removed, "delete contact");
        Ok(removed)
    }

    // ============================================================
    // Tasks
    // ============================================================

    fn get_tasks(&self, user_id: Uuid) -> StorageResult<Vec<Task>> {
        let mut tasks = self.tasks.filter(|t| t.user_id == user_id);
        tasks.sort_by_key(|t| t.created_at);
        Ok(tasks)
    }

    fn get_task(&self, id: Uuid) -> StorageResult<Option<Task>> {
        Ok(self.tasks.get(id))
    }

    fn create_task(&self, user_id: Uuid, input: CreateTaskInput) -> StorageResult<Task> {
        let now = self.clock.now();
        let task = Task {
            id: Uuid::new_v4(),
            user_id,
            title: input.title,
            description: input.description,
            priority: input.priority,
            status: input.status,
            completed: input.completed,
            due_date: input.due_date,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
        };
        debug!(task_id = %task.id, priority = task.priority.as_str(), "created task");
        Ok(self.tasks.insert(task.id, task))
    }

    fn update_task(&self, id: Uuid, input: UpdateTaskInput) -> StorageResult<Task> {
        let task = self
            .tasks
            .modify(id, |task| {
                if let Some(title) = input.title {
                    task.title = title;
                }
                if let Some(description) = input.description {
                    task.description = Some(description);
                }
                if let Some(priority) = input.priority {
                    task.priority = priority;
                }
                if let Some(status) = input.status {
                    task.status = status;
                }
                if let Some(completed) = input.completed {
                    task.completed = completed;
                }
                if let Some(due_date) = input.due_date {
                    task.due_date = Some(due_date);
                }
                if let Some(metadata) = input.metadata {
                    task.metadata = metadata;
                }
                task.updated_at = self.clock.now();
            })
            .ok_or_else(|| StorageError::not_found("Task", id))?;
        debug!(task_id = %id, status = task.status.as_str(), "updated task");
        Ok(task)
    }

    fn delete_task(&self, id: Uuid) -> StorageResult<bool> {
        let removed = self.tasks.remove(id);
        debug!(task_id = %id, removed, "delete task");
        Ok(removed)
    }

    // ============================================================
    // KPI metrics
    // ============================================================

    fn get_kpi_metrics(
        &self,
        user_id: Uuid,
        period: Option<&str>,
    ) -> StorageResult<Vec<KpiMetric>> {
        let mut metrics = self
            .kpi_metrics
            .filter(|m| m.user_id == user_id && period.map_or(true, |p| m.period == p));
        metrics.sort_by_key(|m| Reverse(m.created_at));
        Ok(metrics)
    }

    fn create_kpi_metric(
        &self,
        user_id: Uuid,
        input: CreateKpiMetricInput,
    ) -> StorageResult<KpiMetric> {
        let now = self.clock.now();
        let metric = KpiMetric {
            id: Uuid::new_v4(),
            user_id,
            metric_name: input.metric_name,
            value: input.value,
            period: input.period,
            source: input.source,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
        };
        debug!(metric = %metric.metric_name, value = metric.value, "recorded kpi metric");
        Ok(self.kpi_metrics.insert(metric.id, metric))
    }

    // ============================================================
    // Calendar events
    // ============================================================

    fn get_calendar_events(&self, user_id: Uuid) -> StorageResult<Vec<CalendarEvent>> {
        let mut events = self.calendar_events.filter(|e| e.user_id == user_id);
        events.sort_by_key(|e| e.start_time);
        Ok(events)
    }

    fn get_calendar_event(&self, id: Uuid) -> StorageResult<Option<CalendarEvent>> {
        Ok(self.calendar_events.get(id))
    }

    fn create_calendar_event(
        &self,
        user_id: Uuid,
        input: CreateCalendarEventInput,
    ) -> StorageResult<CalendarEvent> {
        let now = self.clock.now();
        let event = CalendarEvent {
            id: Uuid::new_v4(),
            user_id,
            title: input.title,
            description: input.description,
            start_time: input.start_time,
            end_time: input.end_time,
            location: input.location,
            attendees: input.attendees,
            external_id: input.external_id,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
        };
        debug!(event_id = %event.id, "created calendar event");
        Ok(self.calendar_events.insert(event.id, event))
    }

    fn update_calendar_event(
        &self,
        id: Uuid,
        input: UpdateCalendarEventInput,
    ) -> StorageResult<CalendarEvent> {
        self.calendar_events
            .try_modify(id, |event| {
                if let Some(title) = input.title {
                    event.title = title;
                }
                if let Some(description) = input.description {
                    event.description = Some(description);
                }
                if let Some(start_time) = input.start_time {
                    event.start_time = start_time;
                }
                if let Some(end_time) = input.end_time {
                    event.end_time = end_time;
                }
                if let Some(location) = input.location {
                    event.location = Some(location);
                }
                if let Some(attendees) = input.attendees {
                    event.attendees = attendees;
                }
                if let Some(metadata) = input.metadata {
                    event.metadata = metadata;
                }
                if event.end_time < event.start_time {
                    return Err(StorageError::Invalid(
                        "endTime: must not precede startTime".to_string(),
                    ));
                }
                event.updated_at = self.clock.now();
                Ok(())
            })
            .ok_or_else(|| StorageError::not_found("Calendar event", id))?
    }

    fn delete_calendar_event(&self, id: Uuid) -> StorageResult<bool> {
        let removed = self.calendar_events.remove(id);
        debug!(event_id = %id, removed, "delete calendar event");
        Ok(removed)
    }

    // ============================================================
    // AI memory
    // ============================================================

    fn get_ai_memories(&self, user_id: Uuid, kind: Option<&str>) -> StorageResult<Vec<AiMemory>> {
        let mut memories = self
            .ai_memories
            .filter(|m| m.user_id == user_id && kind.map_or(true, |k| m.kind == k));
        memories.sort_by_key(|m| Reverse(m.created_at));
        Ok(memories)
    }

    fn create_ai_memory(
        &self,
        user_id: Uuid,
        input: CreateAiMemoryInput,
    ) -> StorageResult<AiMemory> {
        let now = self.clock.now();
        let memory = AiMemory {
            id: Uuid::new_v4(),
            user_id,
            kind: input.kind,
            content: input.content,
            embedding: None,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
        };
        debug!(memory_id = %memory.id, kind = %memory.kind, "stored ai memory");
        Ok(self.ai_memories.insert(memory.id, memory))
    }

    fn search_ai_memories(&self, user_id: Uuid, query: &str) -> StorageResult<Vec<AiMemory>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.get_ai_memories(user_id, None);
        }
        let mut memories = self.ai_memories.filter(|m| {
            m.user_id == user_id
                && (m.content.to_lowercase().contains(&needle)
                    || m.kind.to_lowercase().contains(&needle))
        });
        memories.sort_by_key(|m| Reverse(m.created_at));
        Ok(memories)
    }

    // ============================================================
    // Workflows
    // ============================================================

    fn get_workflows(&self, user_id: Uuid) -> StorageResult<Vec<Workflow>> {
        let mut workflows = self.workflows.filter(|w| w.user_id == user_id);
        workflows.sort_by_key(|w| w.created_at);
        Ok(workflows)
    }

    fn get_workflow(&self, id: Uuid) -> StorageResult<Option<Workflow>> {
        Ok(self.workflows.get(id))
    }

    fn create_workflow(
        &self,
        user_id: Uuid,
        input: CreateWorkflowInput,
    ) -> StorageResult<Workflow> {
        let now = self.clock.now();
        let workflow = Workflow {
            id: Uuid::new_v4(),
            user_id,
            name: input.name,
            description: input.description,
            definition: input.definition,
            status: input.status,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
        };
        debug!(workflow_id = %workflow.id, status = workflow.status.as_str(), "created workflow");
        Ok(self.workflows.insert(workflow.id, workflow))
    }

    fn update_workflow(&self, id: Uuid, input: UpdateWorkflowInput) -> StorageResult<Workflow> {
        self.workflows
            .modify(id, |workflow| {
                if let Some(name) = input.name {
                    workflow.name = name;
                }
                if let Some(description) = input.description {
                    workflow.description = Some(description);
                }
                if let Some(definition) = input.definition {
                    workflow.definition = definition;
                }
                if let Some(status) = input.status {
                    workflow.status = status;
                }
                if let Some(metadata) = input.metadata {
                    workflow.metadata = metadata;
                }
                workflow.updated_at = self.clock.now();
            })
            .ok_or_else(|| StorageError::not_found("Workflow", id))
    }

    fn delete_workflow(&self, id: Uuid) -> StorageResult<bool> {
        let removed = self.workflows.remove(id);
        debug!(workflow_id = %id, removed, "delete workflow");
        Ok(removed)
    }

    // ============================================================
    // Chat sessions
    // ============================================================

    fn get_chat_sessions(&self, user_id: Uuid) -> StorageResult<Vec<ChatSession>> {
        let mut sessions = self.chat_sessions.filter(|s| s.user_id == user_id);
        sessions.sort_by_key(|s| Reverse(s.updated_at));
        Ok(sessions)
    }

    fn get_chat_session(&self, id: Uuid) -> StorageResult<Option<ChatSession>> {
        Ok(self.chat_sessions.get(id))
    }

    fn create_chat_session(
        &self,
        user_id: Uuid,
        input: CreateChatSessionInput,
    ) -> StorageResult<ChatSession> {
        let now = self.clock.now();
        let session = ChatSession {
            id: Uuid::new_v4(),
            user_id,
            title: input.title,
            messages: Vec::new(),
            tokens_used: 0,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
        };
        debug!(session_id = %session.id, "created chat session");
        Ok(self.chat_sessions.insert(session.id, session))
    }

    fn append_chat_message(
        &self,
        id: Uuid,
        input: AppendChatMessageInput,
    ) -> StorageResult<ChatSession> {
        debug!(session_id = %id, role = input.role.as_str(), "append chat message");
        self.chat_sessions
            .modify(id, |session| {
                let now = self.clock.now();
                session.messages.push(ChatMessage {
                    role: input.role,
                    content: input.content,
                    timestamp: now,
                });
                session.tokens_used = session.tokens_used.saturating_add(input.tokens);
                session.updated_at = now;
            })
            .ok_or_else(|| StorageError::not_found("Chat session", id))
    }

    // ============================================================
    // SuperSal tasks
    // ============================================================

    fn get_supersal_tasks(&self, user_id: Uuid) -> StorageResult<Vec<SupersalTask>> {
        let mut tasks = self.supersal_tasks.filter(|t| t.user_id == user_id);
        tasks.sort_by_key(|t| Reverse(t.created_at));
        Ok(tasks)
    }

    fn get_supersal_task(&self, id: Uuid) -> StorageResult<Option<SupersalTask>> {
        Ok(self.supersal_tasks.get(id))
    }

    fn create_supersal_task(
        &self,
        user_id: Uuid,
        input: CreateSupersalTaskInput,
    ) -> StorageResult<SupersalTask> {
        let now = self.clock.now();
        let task = SupersalTask {
            id: Uuid::new_v4(),
            user_id,
            title: input.title,
            instructions: input.instructions,
            priority: input.priority,
            status: TaskStatus::Pending,
            completed: false,
            ai_generated: input.ai_generated,
            supersal_response: None,
            due_date: input.due_date,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
        };
        debug!(task_id = %task.id, ai_generated = task.ai_generated, "created supersal task");
        Ok(self.supersal_tasks.insert(task.id, task))
    }

    fn update_supersal_task(
        &self,
        id: Uuid,
        input: UpdateSupersalTaskInput,
    ) -> StorageResult<SupersalTask> {
        self.supersal_tasks
            .modify(id, |task| {
                if let Some(title) = input.title {
                    task.title = title;
                }
                if let Some(instructions) = input.instructions {
                    task.instructions = instructions;
                }
                if let Some(priority) = input.priority {
                    task.priority = priority;
                }
                if let Some(status) = input.status {
                    task.status = status;
                }
                if let Some(completed) = input.completed {
                    task.completed = completed;
                }
                if let Some(response) = input.supersal_response {
                    task.supersal_response = Some(response);
                }
                if let Some(due_date) = input.due_date {
                    task.due_date = Some(due_date);
                }
                if let Some(metadata) = input.metadata {
                    task.metadata = metadata;
                }
                task.updated_at = self.clock.now();
            })
            .ok_or_else(|| StorageError::not_found("SuperSal task", id))
    }

    fn complete_supersal_task(&self, id: Uuid) -> StorageResult<SupersalTask> {
        let task = self
            .supersal_tasks
            .modify(id, |task| {
                task.completed = true;
                task.status = TaskStatus::Completed;
                task.supersal_response = Some(fixtures::supersal_completion_message(&task.title));
                task.updated_at = self.clock.now();
            })
            .ok_or_else(|| StorageError::not_found("SuperSal task", id))?;
        info!(task_id = %id, "supersal task completed");
        Ok(task)
    }

    fn delete_supersal_task(&self, id: Uuid) -> StorageResult<bool> {
        let removed = self.supersal_tasks.remove(id);
        debug!(task_id = %id, removed, "delete supersal task");
        Ok(removed)
    }

    // ============================================================
    // Lead intelligence
    // ============================================================

    fn get_leads(&self, user_id: Uuid) -> StorageResult<Vec<LeadIntelligence>> {
        let mut leads = self.leads.filter(|l| l.user_id == user_id);
        leads.sort_by(|a, b| {
            b.lead_score
                .cmp(&a.lead_score)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(leads)
    }

    fn get_lead(&self, id: Uuid) -> StorageResult<Option<LeadIntelligence>> {
        Ok(self.leads.get(id))
    }

    fn create_lead(
        &self,
        user_id: Uuid,
        input: CreateLeadInput,
    ) -> StorageResult<LeadIntelligence> {
        let lead = self.insert_lead(user_id, None, input);
        debug!(lead_id = %lead.id, company = %lead.company_name, "created lead");
        Ok(lead)
    }

    fn enrich_lead(&self, id: Uuid) -> StorageResult<LeadIntelligence> {
        let lead = self
            .leads
            .modify(id, |lead| {
                lead.contact_info = Some(fixtures::enrichment_contact(
                    &lead.company_name,
                    lead.domain.as_deref(),
                ));
                for tech in fixtures::ENRICHMENT_TECHNOLOGIES {
                    if !lead.technologies.iter().any(|t| t.eq_ignore_ascii_case(tech)) {
                        lead.technologies.push(tech.to_string());
                    }
                }
                lead.lead_score = lead
                    .lead_score
                    .saturating_add(fixtures::ENRICHMENT_SCORE_BOOST)
                    .min(MAX_LEAD_SCORE);
                let now = self.clock.now();
                lead.enriched_at = Some(now);
                lead.updated_at = now;
            })
            .ok_or_else(|| StorageError::not_found("Lead", id))?;
        debug!(lead_id = %id, score = lead.lead_score, "enriched lead");
        Ok(lead)
    }

    fn search_leads(
        &self,
        user_id: Uuid,
        params: LeadSearchParams,
    ) -> StorageResult<LeadSearchResult> {
        let matches: Vec<_> = fixtures::matching_companies(&params).collect();

        let campaign = self.create_search_campaign(
            user_id,
            CreateSearchCampaignInput {
                query: params.describe(),
                industry: params.industry.clone(),
                intent: params.intent,
                results_count: matches.len(),
                metadata: Metadata::from([(
                    "source".to_string(),
                    MetaValue::from(fixtures::FIXTURE_SOURCE),
                )]),
            },
        )?;

        let leads = matches
            .into_iter()
            .map(|company| self.insert_lead(user_id, Some(campaign.id), company.to_input()))
            .collect::<Vec<_>>();

        info!(
            campaign_id = %campaign.id,
            query = %campaign.query,
            results = leads.len(),
            "lead search recorded"
        );
        Ok(LeadSearchResult { campaign, leads })
    }

    // ============================================================
    // Search campaigns
    // ============================================================

    fn get_search_campaigns(&self, user_id: Uuid) -> StorageResult<Vec<SearchCampaign>> {
        let mut campaigns = self.search_campaigns.filter(|c| c.user_id == user_id);
        campaigns.sort_by_key(|c| Reverse(c.created_at));
        Ok(campaigns)
    }

    fn create_search_campaign(
        &self,
        user_id: Uuid,
        input: CreateSearchCampaignInput,
    ) -> StorageResult<SearchCampaign> {
        let now = self.clock.now();
        let campaign = SearchCampaign {
            id: Uuid::new_v4(),
            user_id,
            query: input.query,
            industry: input.industry,
            intent: input.intent,
            results_count: input.results_count,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
        };
        Ok(self.search_campaigns.insert(campaign.id, campaign))
    }

    // ============================================================
    // Sticky notes
    // ============================================================

    fn get_sticky_notes(&self, user_id: Uuid) -> StorageResult<Vec<StickyNote>> {
        let mut notes = self.sticky_notes.filter(|n| n.user_id == user_id);
        notes.sort_by(|a, b| {
            b.pinned
                .cmp(&a.pinned)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(notes)
    }

    fn get_sticky_note(&self, id: Uuid) -> StorageResult<Option<StickyNote>> {
        Ok(self.sticky_notes.get(id))
    }

    fn create_sticky_note(
        &self,
        user_id: Uuid,
        input: CreateStickyNoteInput,
    ) -> StorageResult<StickyNote> {
        let now = self.clock.now();
        let note = StickyNote {
            id: Uuid::new_v4(),
            user_id,
            content: input.content,
            kind: input.kind,
            priority: input.priority,
            pinned: input.pinned,
            color: input.color,
            metadata: input.metadata,
            created_at: now,
            updated_at: now,
        };
        debug!(note_id = %note.id, kind = note.kind.as_str(), pinned = note.pinned, "created sticky note");
        Ok(self.sticky_notes.insert(note.id, note))
    }

    fn update_sticky_note(
        &self,
        id: Uuid,
        input: UpdateStickyNoteInput,
    ) -> StorageResult<StickyNote> {
        self.sticky_notes
            .modify(id, |note| {
                if let Some(content) = input.content {
                    note.content = content;
                }
                if let Some(kind) = input.kind {
                    note.kind = kind;
                }
                if let Some(priority) = input.priority {
                    note.priority = priority;
                }
                if let Some(pinned) = input.pinned {
                    note.pinned = pinned;
                }
                if let Some(color) = input.color {
                    note.color = Some(color);
                }
                if let Some(metadata) = input.metadata {
                    note.metadata = metadata;
                }
                note.updated_at = self.clock.now();
            })
            .ok_or_else(|| StorageError::not_found("Sticky note", id))
    }

    fn delete_sticky_note(&self, id: Uuid) -> StorageResult<bool> {
        let removed = self.sticky_notes.remove(id);
        debug!(note_id = %id, removed, "delete sticky note");
        Ok(removed)
    }

    // ============================================================
    // System
    // ============================================================

    fn get_system_status(&self) -> StorageResult<Vec<ServiceStatus>> {
        Ok(fixtures::system_status(Utc::now()))
    }
}
