use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use uuid::Uuid;

use warroom::api::{create_router, AppState};
use warroom::models::*;
use warroom::{MemStorage, Storage};

fn server() -> (TestServer, Uuid) {
    let storage = MemStorage::new();
    let user = storage
        .create_user(CreateUserInput {
            username: "demo".into(),
            email: Some("demo@warroom.local".into()),
            biometric_enabled: false,
            metadata: Metadata::new(),
        })
        .unwrap();
    let state = AppState::new(Arc::new(storage), user.id)
        .with_integrations(vec!["openai".to_string()]);
    (TestServer::new(create_router(state)).unwrap(), user.id)
}

#[tokio::test]
async fn health_reports_ok() {
    let (server, _) = server();
    let response = server.get("/api/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn current_user_is_the_demo_user() {
    let (server, user_id) = server();
    let user: User = server.get("/api/user").await.json();
    assert_eq!(user.id, user_id);
    assert_eq!(user.username, "demo");
}

#[tokio::test]
async fn task_lifecycle() {
    let (server, user_id) = server();

    let response = server
        .post("/api/tasks")
        .json(&json!({
            "title": "Call client",
            "priority": "high",
            "status": "pending"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let task: Task = response.json();
    assert_eq!(task.user_id, user_id);
    assert_eq!(task.title, "Call client");
    assert_eq!(task.priority, Priority::High);
    assert_eq!(task.created_at, task.updated_at);

    let tasks: Vec<Task> = server.get("/api/tasks").await.json();
    assert!(tasks.iter().any(|t| t.id == task.id));

    let updated: Task = server
        .patch(&format!("/api/tasks/{}", task.id))
        .json(&json!({ "completed": true }))
        .await
        .json();
    assert!(updated.completed);
    assert_eq!(updated.created_at, task.created_at);
    assert!(updated.updated_at > task.updated_at);

    server
        .delete(&format!("/api/tasks/{}", task.id))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let tasks: Vec<Task> = server.get("/api/tasks").await.json();
    assert!(tasks.iter().all(|t| t.id != task.id));
}

#[tokio::test]
async fn wire_format_is_camel_case() {
    let (server, _) = server();
    let body: Value = server
        .post("/api/sticky-notes")
        .json(&json!({ "content": "Renew domain", "type": "reminder" }))
        .await
        .json();

    assert!(body.get("userId").is_some());
    assert!(body.get("createdAt").is_some());
    assert_eq!(body["type"], "reminder");
    assert_eq!(body["pinned"], false);
}

#[tokio::test]
async fn deleting_a_missing_task_is_not_found() {
    let (server, _) = server();
    let response = server
        .delete(&format!("/api/tasks/{}", Uuid::new_v4()))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        "Delete task error: Task not found"
    );
}

#[tokio::test]
async fn updating_a_missing_task_is_not_found() {
    let (server, _) = server();
    let response = server
        .patch(&format!("/api/tasks/{}", Uuid::new_v4()))
        .json(&json!({ "title": "Nope" }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        "Update task error: Task not found"
    );
}

#[tokio::test]
async fn invalid_bodies_are_bad_requests() {
    let (server, _) = server();

    let blank = server.post("/api/tasks").json(&json!({ "title": "  " })).await;
    blank.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        blank.json::<Value>()["message"],
        "Create task error: title: must not be empty"
    );

    let wrong_enum = server
        .post("/api/contacts")
        .json(&json!({ "name": "Dana", "email": "d@x.io", "status": "vip" }))
        .await;
    wrong_enum.assert_status(StatusCode::BAD_REQUEST);
    let message = wrong_enum.json::<Value>()["message"].as_str().unwrap().to_string();
    assert!(message.starts_with("Create contact error:"));
}

#[tokio::test]
async fn malformed_ids_are_bad_requests() {
    let (server, _) = server();
    let response = server.get("/api/tasks/not-a-uuid").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["message"]
        .as_str()
        .unwrap()
        .starts_with("Fetch task error:"));
}

#[tokio::test]
async fn sticky_notes_list_pinned_first() {
    let (server, _) = server();
    for (content, pinned) in [("old", false), ("pinned", true), ("new", false)] {
        server
            .post("/api/sticky-notes")
            .json(&json!({ "content": content, "pinned": pinned }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let notes: Vec<StickyNote> = server.get("/api/sticky-notes").await.json();
    let contents: Vec<_> = notes.iter().map(|n| n.content.as_str()).collect();
    assert_eq!(contents, vec!["pinned", "new", "old"]);
}

#[tokio::test]
async fn repeated_lead_searches_duplicate_rows() {
    let (server, _) = server();
    let params = json!({ "industry": "technology" });

    let first: LeadSearchResult = server.post("/api/leads/search").json(&params).await.json();
    let second: LeadSearchResult = server.post("/api/leads/search").json(&params).await.json();
    assert!(first
        .leads
        .iter()
        .all(|l| l.industry.eq_ignore_ascii_case("technology")));
    assert_ne!(first.campaign.id, second.campaign.id);

    let leads: Vec<LeadIntelligence> = server.get("/api/leads").await.json();
    assert_eq!(leads.len(), first.leads.len() + second.leads.len());

    let campaigns: Vec<SearchCampaign> = server.get("/api/leads/campaigns").await.json();
    assert_eq!(campaigns.len(), 2);
}

#[tokio::test]
async fn enrichment_caps_the_score() {
    let (server, _) = server();
    let result: LeadSearchResult = server
        .post("/api/leads/search")
        .json(&json!({ "query": "techflow" }))
        .await
        .json();
    let lead = &result.leads[0];
    assert_eq!(lead.lead_score, 85);

    let enriched: LeadIntelligence = server
        .post(&format!("/api/leads/{}/enrich", lead.id))
        .await
        .json();
    assert_eq!(enriched.lead_score, 100);
    assert!(enriched.contact_info.is_some());

    let again: LeadIntelligence = server
        .post(&format!("/api/leads/{}/enrich", lead.id))
        .await
        .json();
    assert_eq!(again.lead_score, 100);
}

#[tokio::test]
async fn single_lead_and_note_are_fetchable_by_id() {
    let (server, _) = server();
    let result: LeadSearchResult = server
        .post("/api/leads/search")
        .json(&json!({ "query": "medicore" }))
        .await
        .json();
    let lead: LeadIntelligence = server
        .get(&format!("/api/leads/{}", result.leads[0].id))
        .await
        .json();
    assert_eq!(lead, result.leads[0]);
    assert_eq!(lead.campaign_id, Some(result.campaign.id));

    let note: StickyNote = server
        .post("/api/sticky-notes")
        .json(&json!({ "content": "Renew domain" }))
        .await
        .json();
    let fetched: StickyNote = server
        .get(&format!("/api/sticky-notes/{}", note.id))
        .await
        .json();
    assert_eq!(fetched, note);

    let missing = server
        .get(&format!("/api/sticky-notes/{}", Uuid::new_v4()))
        .await;
    missing.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(
        missing.json::<Value>()["message"],
        "Fetch sticky note error: Sticky note not found"
    );
    server
        .get(&format!("/api/leads/{}", Uuid::new_v4()))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn supersal_task_completion() {
    let (server, _) = server();
    let task: SupersalTask = server
        .post("/api/supersal/tasks")
        .json(&json!({ "title": "Draft investor update", "aiGenerated": true }))
        .await
        .json();
    assert!(task.ai_generated);

    let done: SupersalTask = server
        .post(&format!("/api/supersal/tasks/{}/complete", task.id))
        .await
        .json();
    assert!(done.completed);
    assert_eq!(done.status, TaskStatus::Completed);
    assert!(done.supersal_response.is_some());

    server
        .post(&format!("/api/supersal/tasks/{}/complete", Uuid::new_v4()))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn chat_session_accumulates_messages() {
    let (server, _) = server();
    let session: ChatSession = server
        .post("/api/chat/sessions")
        .json(&json!({ "title": "Morning briefing" }))
        .await
        .json();

    let session: ChatSession = server
        .post(&format!("/api/chat/sessions/{}/messages", session.id))
        .json(&json!({ "role": "user", "content": "What is on today?", "tokens": 9 }))
        .await
        .json();
    assert_eq!(session.messages.len(), 1);
    assert_eq!(session.tokens_used, 9);

    let fetched: ChatSession = server
        .get(&format!("/api/chat/sessions/{}", session.id))
        .await
        .json();
    assert_eq!(fetched.messages, session.messages);
}

#[tokio::test]
async fn kpi_metrics_filter_by_period() {
    let (server, _) = server();
    for period in ["2026-09", "2026-10"] {
        server
            .post("/api/kpi-metrics")
            .json(&json!({ "metricName": "mrr", "value": 1200.5, "period": period }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let october: Vec<KpiMetric> = server
        .get("/api/kpi-metrics")
        .add_query_param("period", "2026-10")
        .await
        .json();
    assert_eq!(october.len(), 1);
    assert_eq!(october[0].source, "manual");
}

#[tokio::test]
async fn calendar_rejects_inverted_ranges() {
    let (server, _) = server();
    server
        .post("/api/calendar/events")
        .json(&json!({
            "title": "Board call",
            "startTime": "2026-10-20T15:00:00Z",
            "endTime": "2026-10-20T14:00:00Z"
        }))
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn calendar_update_cannot_move_end_before_stored_start() {
    let (server, _) = server();
    let event: CalendarEvent = server
        .post("/api/calendar/events")
        .json(&json!({
            "title": "Board call",
            "startTime": "2026-10-20T14:00:00Z",
            "endTime": "2026-10-20T15:00:00Z"
        }))
        .await
        .json();

    let response = server
        .patch(&format!("/api/calendar/events/{}", event.id))
        .json(&json!({ "endTime": "2026-10-20T12:00:00Z" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let message = response.json::<Value>()["message"].as_str().unwrap().to_string();
    assert!(message.contains("endTime"));

    let stored: CalendarEvent = server
        .get(&format!("/api/calendar/events/{}", event.id))
        .await
        .json();
    assert_eq!(stored.end_time, event.end_time);
    assert_eq!(stored.updated_at, event.updated_at);
}

#[tokio::test]
async fn ai_memory_search_matches_content() {
    let (server, _) = server();
    server
        .post("/api/ai-memory")
        .json(&json!({ "type": "preference", "content": "Prefers morning standups" }))
        .await
        .assert_status(StatusCode::CREATED);

    let hits: Vec<AiMemory> = server
        .get("/api/ai-memory/search")
        .add_query_param("q", "standup")
        .await
        .json();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].kind, "preference");
}

#[tokio::test]
async fn audit_reflects_configured_integrations() {
    let (server, _) = server();
    let report: Value = server
        .post("/api/supersal/audit")
        .json(&json!({ "systemName": "HQ" }))
        .await
        .json();

    assert_eq!(report["systemName"], "HQ");
    let openai = report["findings"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["check"] == "OpenAI chat connectivity")
        .unwrap();
    assert_eq!(openai["outcome"], "pass");
}

#[tokio::test]
async fn system_status_lists_mock_services() {
    let (server, _) = server();
    let status: Vec<ServiceStatus> = server.get("/api/system/status").await.json();
    assert_eq!(status.len(), 4);
    assert!(status.iter().all(|s| s.mock));
}
