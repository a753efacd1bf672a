//! Integration tests for the housekeeping backend.

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::auth::{permissions, AllowAll, PermissionOracle, StaticGrants};
use crate::config::Config;
use crate::db::{init_database, Repository};
use crate::modules::room_status::RoomStatusModule;
use crate::modules::ModuleRegistry;
use crate::occupancy::SampleOccupancySource;
use crate::{create_router, AppState};

const TEST_TOKEN: &str = "test-session-token";

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    /// Fixture with every permission granted.
    async fn new() -> Self {
        Self::with_oracle(Arc::new(AllowAll)).await
    }

    /// Fixture with a specific grants table.
    async fn with_grants(grants: &[(i64, &[&str])]) -> Self {
        let mut map = HashMap::new();
        for (user_id, perms) in grants {
            map.insert(*user_id, perms.iter().map(|p| p.to_string()).collect());
        }
        Self::with_oracle(Arc::new(StaticGrants::new(map))).await
    }

    async fn with_oracle(oracle: Arc<dyn PermissionOracle>) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");

        // Initialize database
        let pool = init_database(&db_path).await.expect("Failed to init DB");
        let repo = Arc::new(Repository::new(pool));

        // Module catalog
        let room_status = Arc::new(RoomStatusModule);
        let mut registry = ModuleRegistry::new();
        registry.register(room_status.clone()).unwrap();

        // Create config
        let config = Config {
            session_token: Some(TEST_TOKEN.to_string()),
            db_path,
            grants_path: None,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            app_name: "Test Hotel".to_string(),
            start_url: "/".to_string(),
            asset_version: "test-1".to_string(),
        };

        let state = AppState {
            repo,
            registry: Arc::new(registry),
            room_status,
            occupancy: Arc::new(SampleOccupancySource),
            oracle,
            config: Arc::new(config),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert("x-session-token", TEST_TOKEN.parse().unwrap());
        headers.insert("x-user-id", "1".parse().unwrap());

        TestFixture {
            client: Client::builder().default_headers(headers).build().unwrap(),
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/health"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_auth_missing_token() {
    let fixture = TestFixture::new().await;

    let client = Client::new();
    let resp = client
        .get(fixture.url("/api/rooms/status"))
        .header("x-user-id", "1")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["data"]["message"], "Invalid security token");
}

#[tokio::test]
async fn test_auth_wrong_token() {
    let fixture = TestFixture::new().await;

    let client = Client::new();
    let resp = client
        .get(fixture.url("/api/rooms/status"))
        .header("x-session-token", "wrong-token")
        .header("x-user-id", "1")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Invalid security token");
}

#[tokio::test]
async fn test_auth_missing_identity() {
    let fixture = TestFixture::new().await;

    let client = Client::new();
    let resp = client
        .get(fixture.url("/api/rooms/status"))
        .header("x-session-token", TEST_TOKEN)
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Not authenticated");
}

#[tokio::test]
async fn test_auth_bearer_token_accepted() {
    let fixture = TestFixture::new().await;

    let client = Client::new();
    let resp = client
        .get(fixture.url("/api/rooms/status"))
        .header("authorization", format!("Bearer {}", TEST_TOKEN))
        .header("x-user-id", "1")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_permission_gate_blocks_write() {
    // User 1 may look but not touch
    let fixture = TestFixture::with_grants(&[(1, &[permissions::VIEW_ROOMS])]).await;

    let resp = fixture
        .client
        .post(fixture.url("/api/rooms/status"))
        .json(&json!({
            "roomNumber": "101",
            "status": "clean",
            "date": "2024-03-01"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 403);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["data"]["message"], "Insufficient permissions");

    // The denied write left no row behind
    let read = fixture
        .client
        .get(fixture.url("/api/rooms/status?date=2024-03-01"))
        .send()
        .await
        .unwrap();
    assert_eq!(read.status(), 200);
    let read_body: Value = read.json().await.unwrap();
    assert_eq!(read_body["data"]["rooms"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_update_and_read_room_status() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/rooms/status"))
        .json(&json!({
            "roomNumber": "104",
            "status": "inspected",
            "date": "2024-03-01",
            "inspectionRequired": true,
            "priority": "high"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["message"], "Status updated successfully");

    let read = fixture
        .client
        .get(fixture.url("/api/rooms/status?date=2024-03-01"))
        .send()
        .await
        .unwrap();
    let read_body: Value = read.json().await.unwrap();
    let rooms = read_body["data"]["rooms"].as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["roomNumber"], "104");
    assert_eq!(rooms[0]["status"], "inspected");
    assert_eq!(rooms[0]["priority"], "high");
    assert_eq!(rooms[0]["inspectionRequired"], true);
    assert_eq!(rooms[0]["updatedBy"], 1);
}

#[tokio::test]
async fn test_update_room_status_rejects_unknown_status() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/rooms/status"))
        .json(&json!({
            "roomNumber": "104",
            "status": "sparkling",
            "date": "2024-03-01"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["data"]["message"], "Invalid status");
}

#[tokio::test]
async fn test_room_status_upsert_is_idempotent() {
    let fixture = TestFixture::new().await;

    for _ in 0..2 {
        let resp = fixture
            .client
            .post(fixture.url("/api/rooms/status"))
            .json(&json!({
                "roomNumber": "110",
                "status": "clean",
                "date": "2024-03-01"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
    }

    // Exactly one row for the (room, date) key
    let read = fixture
        .client
        .get(fixture.url("/api/rooms/status?date=2024-03-01"))
        .send()
        .await
        .unwrap();
    let body: Value = read.json().await.unwrap();
    assert_eq!(body["data"]["rooms"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_date_defaults_to_today() {
    let fixture = TestFixture::new().await;

    // Write without a date, read back without a date: both resolve to today
    let resp = fixture
        .client
        .post(fixture.url("/api/rooms/status"))
        .json(&json!({
            "roomNumber": "112",
            "status": "clean"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let read = fixture
        .client
        .get(fixture.url("/api/rooms/status"))
        .send()
        .await
        .unwrap();
    let body: Value = read.json().await.unwrap();
    let rooms = body["data"]["rooms"].as_array().unwrap();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["roomNumber"], "112");
    assert_eq!(rooms[0]["status"], "clean");
}

#[tokio::test]
async fn test_assign_room() {
    let fixture = TestFixture::new().await;

    // Status row first, then the assignment lands on it
    fixture
        .client
        .post(fixture.url("/api/rooms/status"))
        .json(&json!({
            "roomNumber": "105",
            "status": "dirty",
            "date": "2024-03-01"
        }))
        .send()
        .await
        .unwrap();

    let resp = fixture
        .client
        .post(fixture.url("/api/rooms/assign"))
        .json(&json!({
            "roomNumber": "105",
            "assignedTo": 42,
            "date": "2024-03-01"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["message"], "Room assigned successfully");

    let read = fixture
        .client
        .get(fixture.url("/api/rooms/status?date=2024-03-01"))
        .send()
        .await
        .unwrap();
    let read_body: Value = read.json().await.unwrap();
    assert_eq!(read_body["data"]["rooms"][0]["assignedTo"], 42);
}

#[tokio::test]
async fn test_assign_room_without_status_row_is_noop_success() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/rooms/assign"))
        .json(&json!({
            "roomNumber": "199",
            "assignedTo": 42,
            "date": "2024-03-01"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_note_lifecycle() {
    let fixture = TestFixture::new().await;

    // Add
    let add_resp = fixture
        .client
        .post(fixture.url("/api/rooms/notes"))
        .json(&json!({
            "roomNumber": "108",
            "noteText": "Broken lamp on the nightstand",
            "noteType": "maintenance",
            "date": "2024-03-01"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(add_resp.status(), 200);
    let add_body: Value = add_resp.json().await.unwrap();
    assert_eq!(add_body["success"], true);
    let note_id = add_body["data"]["noteId"].as_i64().unwrap();

    // List
    let list_resp = fixture
        .client
        .get(fixture.url("/api/rooms/notes?roomNumber=108&date=2024-03-01"))
        .send()
        .await
        .unwrap();
    let list_body: Value = list_resp.json().await.unwrap();
    let notes = list_body["data"]["notes"].as_array().unwrap();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0]["noteText"], "Broken lamp on the nightstand");
    assert_eq!(notes[0]["noteType"], "maintenance");
    assert_eq!(notes[0]["isResolved"], false);

    // Resolve
    let resolve_resp = fixture
        .client
        .post(fixture.url(&format!("/api/notes/{}/resolve", note_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resolve_resp.status(), 200);

    // Resolving again succeeds and stays resolved (monotonic)
    let resolve_again = fixture
        .client
        .post(fixture.url(&format!("/api/notes/{}/resolve", note_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resolve_again.status(), 200);

    let list_resp = fixture
        .client
        .get(fixture.url("/api/rooms/notes?roomNumber=108&date=2024-03-01"))
        .send()
        .await
        .unwrap();
    let list_body: Value = list_resp.json().await.unwrap();
    assert_eq!(list_body["data"]["notes"][0]["isResolved"], true);
}

#[tokio::test]
async fn test_notes_listed_newest_first() {
    let fixture = TestFixture::new().await;

    for text in ["First note", "Second note"] {
        fixture
            .client
            .post(fixture.url("/api/rooms/notes"))
            .json(&json!({
                "roomNumber": "109",
                "noteText": text,
                "date": "2024-03-01"
            }))
            .send()
            .await
            .unwrap();
        // Keep the created_at timestamps distinct
        tokio::time::sleep(tokio::time::Duration::from_millis(5)).await;
    }

    let body: Value = fixture
        .client
        .get(fixture.url("/api/rooms/notes?roomNumber=109&date=2024-03-01"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let notes = body["data"]["notes"].as_array().unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0]["noteText"], "Second note");
    assert_eq!(notes[1]["noteText"], "First note");
}

#[tokio::test]
async fn test_resolve_missing_note_is_not_found() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/notes/9999/resolve"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_task_lifecycle() {
    let fixture = TestFixture::new().await;

    // Create
    let create_resp = fixture
        .client
        .post(fixture.url("/api/tasks"))
        .json(&json!({
            "title": "Deep clean suite 301",
            "description": "Guest complained about dust",
            "roomNumber": "301",
            "assignedTo": 7,
            "dueDate": "2024-03-02",
            "priority": "high"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(create_resp.status(), 200);
    let create_body: Value = create_resp.json().await.unwrap();
    let task_id = create_body["data"]["taskId"].as_i64().unwrap();

    // Pending list includes it
    let pending_resp = fixture
        .client
        .get(fixture.url("/api/tasks"))
        .send()
        .await
        .unwrap();
    let pending_body: Value = pending_resp.json().await.unwrap();
    let tasks = pending_body["data"]["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Deep clean suite 301");
    assert_eq!(tasks[0]["status"], "pending");
    assert_eq!(tasks[0]["isRecurring"], false);

    // Complete
    let complete_resp = fixture
        .client
        .post(fixture.url(&format!("/api/tasks/{}/complete", task_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(complete_resp.status(), 200);

    // Moved from pending to completed
    let pending_body: Value = fixture
        .client
        .get(fixture.url("/api/tasks"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(pending_body["data"]["tasks"].as_array().unwrap().len(), 0);

    let completed_body: Value = fixture
        .client
        .get(fixture.url("/api/tasks?status=completed"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let completed = completed_body["data"]["tasks"].as_array().unwrap();
    assert_eq!(completed.len(), 1);
    assert_eq!(completed[0]["completedBy"], 1);
}

#[tokio::test]
async fn test_tasks_ordered_by_priority_then_due_date() {
    let fixture = TestFixture::new().await;

    let tasks = [
        ("Replace hallway bulb", "low", "2024-03-04"),
        ("Flooded bathroom 210", "urgent", "2024-03-05"),
        ("Restock cart", "urgent", "2024-03-03"),
    ];
    for (title, priority, due_date) in tasks {
        fixture
            .client
            .post(fixture.url("/api/tasks"))
            .json(&json!({
                "title": title,
                "priority": priority,
                "dueDate": due_date
            }))
            .send()
            .await
            .unwrap();
    }

    let body: Value = fixture
        .client
        .get(fixture.url("/api/tasks"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    // Priority descending, earlier due date first within a priority
    let titles: Vec<&str> = body["data"]["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(
        titles,
        vec!["Restock cart", "Flooded bathroom 210", "Replace hallway bulb"]
    );
}

#[tokio::test]
async fn test_create_task_requires_title() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/tasks"))
        .json(&json!({ "title": "  " }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_complete_missing_task_is_not_found() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/tasks/404/complete"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_checklist_defaults_when_unsaved() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/checklists?roomNumber=115&date=2024-03-01"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert!(body["data"]["checklist"].is_null());

    let items = body["data"]["items"].as_array().unwrap();
    assert_eq!(items.len(), 8);
    assert_eq!(items[0]["label"], "Vacuum floor");
    assert!(items.iter().all(|i| i["done"] == false));
}

#[tokio::test]
async fn test_checklist_save_and_upsert() {
    let fixture = TestFixture::new().await;

    let items = json!([
        { "label": "Vacuum floor", "done": true },
        { "label": "Change linens", "done": false }
    ]);

    let save_resp = fixture
        .client
        .post(fixture.url("/api/checklists"))
        .json(&json!({
            "roomNumber": "115",
            "date": "2024-03-01",
            "items": items
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(save_resp.status(), 200);

    let first: Value = fixture
        .client
        .get(fixture.url("/api/checklists?roomNumber=115&date=2024-03-01"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let first_id = first["data"]["checklist"]["id"].as_i64().unwrap();
    assert_eq!(first["data"]["items"].as_array().unwrap().len(), 2);
    assert_eq!(first["data"]["items"][0]["done"], true);
    assert_eq!(first["data"]["checklist"]["completedBy"], 1);

    // Saving again updates the same row
    let items_updated = json!([
        { "label": "Vacuum floor", "done": true },
        { "label": "Change linens", "done": true }
    ]);
    fixture
        .client
        .post(fixture.url("/api/checklists"))
        .json(&json!({
            "roomNumber": "115",
            "date": "2024-03-01",
            "items": items_updated
        }))
        .send()
        .await
        .unwrap();

    let second: Value = fixture
        .client
        .get(fixture.url("/api/checklists?roomNumber=115&date=2024-03-01"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(second["data"]["checklist"]["id"].as_i64().unwrap(), first_id);
    assert_eq!(second["data"]["items"][1]["done"], true);
}

#[tokio::test]
async fn test_room_view_placeholder_scenario() {
    let fixture = TestFixture::new().await;

    // No stored statuses and no occupancy integration: the fixed sample set
    let resp = fixture
        .client
        .get(fixture.url("/api/rooms?date=2024-03-01"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let rooms = body["data"]["rooms"].as_array().unwrap();
    assert_eq!(rooms.len(), 20);
    assert_eq!(rooms[0]["roomNumber"], "101");
    assert_eq!(rooms[19]["roomNumber"], "120");
    for room in rooms {
        assert_eq!(room["housekeepingStatus"], "dirty");
        assert_eq!(room["priority"], "normal");
        assert_eq!(room["notesCount"], 0);
        assert_eq!(room["occupancyStatus"], "vacant");
    }
}

#[tokio::test]
async fn test_room_view_reflects_status_and_notes() {
    let fixture = TestFixture::new().await;

    fixture
        .client
        .post(fixture.url("/api/rooms/status"))
        .json(&json!({
            "roomNumber": "103",
            "status": "clean",
            "date": "2024-03-01",
            "priority": "high"
        }))
        .send()
        .await
        .unwrap();

    fixture
        .client
        .post(fixture.url("/api/rooms/notes"))
        .json(&json!({
            "roomNumber": "103",
            "noteText": "Check the minibar lock",
            "date": "2024-03-01"
        }))
        .send()
        .await
        .unwrap();

    let body: Value = fixture
        .client
        .get(fixture.url("/api/rooms?date=2024-03-01"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let rooms = body["data"]["rooms"].as_array().unwrap();
    let room_103 = rooms
        .iter()
        .find(|r| r["roomNumber"] == "103")
        .expect("room 103 in view");
    assert_eq!(room_103["housekeepingStatus"], "clean");
    assert_eq!(room_103["priority"], "high");
    assert_eq!(room_103["notesCount"], 1);

    // Resolving the note drops it from the count
    let notes: Value = fixture
        .client
        .get(fixture.url("/api/rooms/notes?roomNumber=103&date=2024-03-01"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let note_id = notes["data"]["notes"][0]["id"].as_i64().unwrap();
    fixture
        .client
        .post(fixture.url(&format!("/api/notes/{}/resolve", note_id)))
        .send()
        .await
        .unwrap();

    let body: Value = fixture
        .client
        .get(fixture.url("/api/rooms?date=2024-03-01"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let room_103 = body["data"]["rooms"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["roomNumber"] == "103")
        .unwrap()
        .clone();
    assert_eq!(room_103["notesCount"], 0);
}

#[tokio::test]
async fn test_modules_filtered_per_user() {
    // User 1 can view rooms but not assign; user 2 holds nothing
    let fixture = TestFixture::with_grants(&[(1, &[permissions::VIEW_ROOMS])]).await;

    let body: Value = fixture
        .client
        .get(fixture.url("/api/modules"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let modules = body["data"]["modules"].as_array().unwrap();
    assert_eq!(modules.len(), 1);
    assert_eq!(modules[0]["id"], "room_status");

    let tabs = modules[0]["tabs"].as_array().unwrap();
    let tab_ids: Vec<&str> = tabs.iter().map(|t| t["id"].as_str().unwrap()).collect();
    assert_eq!(tab_ids, vec!["daily_list", "by_status"]);

    // A user with no grants sees an empty catalog
    let body: Value = fixture
        .client
        .get(fixture.url("/api/modules"))
        .header("x-user-id", "2")
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["data"]["modules"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_manifest_served() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/manifest.json"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("application/manifest+json"));

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["name"], "Test Hotel - Housekeeping");
    assert_eq!(body["display"], "standalone");
    assert_eq!(body["icons"].as_array().unwrap().len(), 2);
    assert_eq!(body["icons"][0]["sizes"], "192x192");
    assert_eq!(body["icons"][1]["sizes"], "512x512");
}

#[tokio::test]
async fn test_service_worker_served_with_version_tag() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/service-worker.js"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    assert!(resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("application/javascript"));

    let body = resp.text().await.unwrap();
    assert!(body.contains("'test-1'"));
    assert!(!body.contains("__ASSET_VERSION__"));
    // API requests must never be intercepted
    assert!(body.contains("/api/"));
    assert!(body.contains("SKIP_WAITING"));
}

#[tokio::test]
async fn test_offline_page_served() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/offline.html"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body = resp.text().await.unwrap();
    assert!(body.contains("offline"));
}
