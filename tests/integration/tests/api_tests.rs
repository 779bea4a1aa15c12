//! API Integration Tests
//!
//! Each test starts its own server on an ephemeral port with a fresh
//! in-memory store, so no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    activity_body, assert_error, assert_json, assert_status, fixtures::*, server_body, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health / Config
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();

    let response = client.get("/health").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_public_config() {
    let server = TestServer::start().await.unwrap();
    let client = server.client().unwrap();

    let body: Value = assert_json(client.get("/api/config").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();

    assert_eq!(body["prefix"], "!");
    assert_eq!(body["version"], "1.0.0");
    assert!(body["sounds"]["welcome"].is_string());
    assert!(!body.to_string().contains("admin123"));
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_login_session_flow() {
    let server = TestServer::start().await.unwrap();
    let client = server.client().unwrap();
    let alice = json!({ "username": "alice", "password": "p1" });

    let response = client.post("/api/register", &alice).await.unwrap();
    let registered: UserEnvelope = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(registered.user.username, "alice");
    assert!(!registered.user.is_admin);

    // Same username again
    let response = client.post("/api/register", &alice).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = client.get("/api/session").await.unwrap();
    let session: SessionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!session.is_logged_in);
    assert!(session.user.is_none());

    let response = client.post("/api/login", &alice).await.unwrap();
    let logged_in: UserEnvelope = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(logged_in.user, registered.user);

    let response = client.get("/api/session").await.unwrap();
    let session: SessionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(session.is_logged_in);
    assert_eq!(session.user.unwrap().username, "alice");
}

#[tokio::test]
async fn test_register_validation() {
    let server = TestServer::start().await.unwrap();
    let client = server.client().unwrap();

    let response = client
        .post("/api/register", &json!({ "username": "", "password": "" }))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert!(body["error"]["details"]["username"].is_array());
    assert!(body["error"]["details"]["password"].is_array());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = TestServer::start().await.unwrap();
    let client = server.client().unwrap();

    let unknown_user = client
        .post("/api/login", &json!({ "username": "ghost", "password": "x" }))
        .await
        .unwrap();
    let unknown_body: Value = assert_json(unknown_user, StatusCode::UNAUTHORIZED).await.unwrap();

    let wrong_password = client
        .post("/api/login", &json!({ "username": "admin", "password": "x" }))
        .await
        .unwrap();
    let wrong_body: Value = assert_json(wrong_password, StatusCode::UNAUTHORIZED).await.unwrap();

    // Indistinguishable failures
    assert_eq!(unknown_body, wrong_body);
    assert_eq!(unknown_body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_logout_ends_session() {
    let server = TestServer::start().await.unwrap();
    let client = server.admin_client().await.unwrap();

    assert_status(client.get("/api/servers").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();

    let response = client.post_empty("/api/logout").await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let code = assert_error(client.get("/api/servers").await.unwrap(), StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
    assert_eq!(code, "MISSING_AUTH");

    let session: SessionResponse = assert_json(client.get("/api/session").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(!session.is_logged_in);
}

#[tokio::test]
async fn test_sessions_are_per_client() {
    let server = TestServer::start().await.unwrap();
    let admin = server.admin_client().await.unwrap();
    let anonymous = server.client().unwrap();

    assert_status(admin.get("/api/servers").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_status(anonymous.get("/api/servers").await.unwrap(), StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_admin_routes_reject_regular_users() {
    let server = TestServer::start().await.unwrap();
    let user = server.user_client().await.unwrap();
    let anonymous = server.client().unwrap();

    let code = assert_error(
        user.post("/api/servers", &server_body("1", "Guild")).await.unwrap(),
        StatusCode::FORBIDDEN,
    )
    .await
    .unwrap();
    assert_eq!(code, "INSUFFICIENT_PERMISSIONS");

    assert_status(
        anonymous.post("/api/servers", &server_body("1", "Guild")).await.unwrap(),
        StatusCode::UNAUTHORIZED,
    )
    .await
    .unwrap();

    // Regular users can still read
    assert_status(user.get("/api/servers").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
}

// ============================================================================
// Server Tests
// ============================================================================

#[tokio::test]
async fn test_server_create_get_list() {
    let server = TestServer::start().await.unwrap();
    let admin = server.admin_client().await.unwrap();

    for (id, name) in [("200", "Second"), ("100", "First")] {
        let created: ServerResponse = assert_json(
            admin.post("/api/servers", &server_body(id, name)).await.unwrap(),
            StatusCode::CREATED,
        )
        .await
        .unwrap();
        assert_eq!(created.prefix, "!");
    }

    let listed: Vec<ServerResponse> = assert_json(admin.get("/api/servers").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    let ids: Vec<&str> = listed.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["200", "100"]);

    let fetched: ServerResponse = assert_json(admin.get("/api/servers/100").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(fetched.name, "First");

    assert_status(admin.get("/api/servers/999").await.unwrap(), StatusCode::NOT_FOUND)
        .await
        .unwrap();

    // Duplicate id
    assert_status(
        admin.post("/api/servers", &server_body("100", "Again")).await.unwrap(),
        StatusCode::CONFLICT,
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_server_without_id_gets_generated_one() {
    let server = TestServer::start().await.unwrap();
    let admin = server.admin_client().await.unwrap();

    let created: ServerResponse = assert_json(
        admin.post("/api/servers", &json!({ "name": "No Id" })).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    assert!(!created.id.is_empty());

    assert_status(
        admin.get(&format!("/api/servers/{}", created.id)).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_server_patch_merges_and_clears() {
    let server = TestServer::start().await.unwrap();
    let admin = server.admin_client().await.unwrap();

    admin
        .post(
            "/api/servers",
            &json!({
                "id": "1",
                "name": "Guild",
                "logChannelId": "555",
                "welcomeMessage": "hi"
            }),
        )
        .await
        .unwrap();

    let user = server.user_client().await.unwrap();
    let updated: ServerResponse = assert_json(
        user.patch("/api/servers/1", &json!({ "prefix": "?", "welcomeMessage": null }))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    assert_eq!(updated.prefix, "?");
    assert_eq!(updated.name, "Guild");
    assert_eq!(updated.log_channel_id.as_deref(), Some("555"));
    assert!(updated.welcome_message.is_none());

    let code = assert_error(
        user.patch("/api/servers/404", &json!({ "name": "x" })).await.unwrap(),
        StatusCode::NOT_FOUND,
    )
    .await
    .unwrap();
    assert_eq!(code, "NOT_FOUND");
}

// ============================================================================
// Guard Settings Tests
// ============================================================================

#[tokio::test]
async fn test_guard_settings_lifecycle() {
    let server = TestServer::start().await.unwrap();
    let admin = server.admin_client().await.unwrap();
    admin.post("/api/servers", &server_body("1", "Guild")).await.unwrap();

    assert_status(admin.get("/api/servers/1/guard").await.unwrap(), StatusCode::NOT_FOUND)
        .await
        .unwrap();
    assert_status(
        admin.patch("/api/servers/1/guard", &json!({ "antiSpam": true })).await.unwrap(),
        StatusCode::NOT_FOUND,
    )
    .await
    .unwrap();

    let created: GuardSettingsResponse = assert_json(
        admin.post("/api/servers/1/guard", &json!({})).await.unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    assert!(!created.anti_spam);
    assert_eq!(created.max_warnings, 3);
    assert_eq!(created.mute_time, 300);

    assert_status(
        admin.post("/api/servers/1/guard", &json!({})).await.unwrap(),
        StatusCode::CONFLICT,
    )
    .await
    .unwrap();

    let updated: GuardSettingsResponse = assert_json(
        admin
            .patch("/api/servers/1/guard", &json!({ "antiSpam": true, "maxWarnings": 5 }))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(updated.anti_spam);
    assert!(!updated.anti_raid);
    assert_eq!(updated.max_warnings, 5);
    assert_eq!(updated.id, created.id);

    let fetched: GuardSettingsResponse = assert_json(admin.get("/api/servers/1/guard").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(fetched.server_id, "1");
    assert!(fetched.anti_spam);
}

#[tokio::test]
async fn test_guard_settings_for_unknown_server() {
    let server = TestServer::start().await.unwrap();
    let admin = server.admin_client().await.unwrap();

    assert_status(
        admin.post("/api/servers/ghost/guard", &json!({})).await.unwrap(),
        StatusCode::NOT_FOUND,
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_guard_settings_range_validation() {
    let server = TestServer::start().await.unwrap();
    let admin = server.admin_client().await.unwrap();
    admin.post("/api/servers", &server_body("1", "Guild")).await.unwrap();

    let code = assert_error(
        admin.post("/api/servers/1/guard", &json!({ "maxWarnings": 0 })).await.unwrap(),
        StatusCode::BAD_REQUEST,
    )
    .await
    .unwrap();
    assert_eq!(code, "VALIDATION_ERROR");
}

// ============================================================================
// Activity / Guard Event Tests
// ============================================================================

#[tokio::test]
async fn test_activity_newest_first_with_limit() {
    let server = TestServer::start().await.unwrap();
    let admin = server.admin_client().await.unwrap();
    admin.post("/api/servers", &server_body("1", "Guild")).await.unwrap();
    admin.post("/api/servers", &server_body("2", "Other")).await.unwrap();

    for action in ["join", "warn", "mute", "ban"] {
        assert_status(
            admin.post("/api/servers/1/activity", &activity_body(action)).await.unwrap(),
            StatusCode::CREATED,
        )
        .await
        .unwrap();
    }
    admin
        .post("/api/servers/2/activity", &activity_body("other"))
        .await
        .unwrap();

    let logs: Vec<ActivityLogResponse> = assert_json(
        admin.get("/api/servers/1/activity?limit=3").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let actions: Vec<&str> = logs.iter().map(|l| l.action.as_str()).collect();
    assert_eq!(actions, vec!["ban", "mute", "warn"]);
    assert!(logs.iter().all(|l| l.server_id == "1"));
    assert!(logs.windows(2).all(|w| w[0].timestamp > w[1].timestamp));

    let all: Vec<ActivityLogResponse> = assert_json(admin.get("/api/servers/1/activity").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(all.len(), 4);

    let blank: Vec<ActivityLogResponse> = assert_json(
        admin.get("/api/servers/1/activity?limit=").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(blank.len(), 4);
}

#[tokio::test]
async fn test_activity_invalid_limit() {
    let server = TestServer::start().await.unwrap();
    let admin = server.admin_client().await.unwrap();

    let code = assert_error(
        admin.get("/api/servers/1/activity?limit=lots").await.unwrap(),
        StatusCode::BAD_REQUEST,
    )
    .await
    .unwrap();
    assert_eq!(code, "INVALID_QUERY_PARAMETER");
}

#[tokio::test]
async fn test_activity_for_unknown_server() {
    let server = TestServer::start().await.unwrap();
    let admin = server.admin_client().await.unwrap();

    let logs: Vec<Value> = assert_json(admin.get("/api/servers/ghost/activity").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert!(logs.is_empty());

    assert_status(
        admin.post("/api/servers/ghost/activity", &activity_body("join")).await.unwrap(),
        StatusCode::NOT_FOUND,
    )
    .await
    .unwrap();
}

#[tokio::test]
async fn test_guard_events() {
    let server = TestServer::start().await.unwrap();
    let admin = server.admin_client().await.unwrap();
    admin.post("/api/servers", &server_body("1", "Guild")).await.unwrap();

    for event_type in ["spam", "raid"] {
        let event: GuardEventResponse = assert_json(
            admin
                .post(
                    "/api/servers/1/guard-events",
                    &json!({ "eventType": event_type, "action": "mute", "userId": "9" }),
                )
                .await
                .unwrap(),
            StatusCode::CREATED,
        )
        .await
        .unwrap();
        assert_eq!(event.server_id, "1");
    }

    let user = server.user_client().await.unwrap();
    let events: Vec<GuardEventResponse> = assert_json(
        user.get("/api/servers/1/guard-events?limit=1").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, "raid");

    assert_status(
        user.post(
            "/api/servers/1/guard-events",
            &json!({ "eventType": "spam", "action": "mute" }),
        )
        .await
        .unwrap(),
        StatusCode::FORBIDDEN,
    )
    .await
    .unwrap();
}

// ============================================================================
// Command Tests
// ============================================================================

#[tokio::test]
async fn test_command_catalog_is_public() {
    let server = TestServer::start().await.unwrap();
    let client = server.client().unwrap();

    let commands: Vec<CommandResponse> = assert_json(client.get("/api/commands").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(commands.len(), 5);

    let guard: Vec<CommandResponse> = assert_json(
        client.get("/api/commands/category/guard").await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    let names: Vec<&str> = guard.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["anti-spam", "anti-raid"]);

    let kick: CommandResponse = assert_json(client.get("/api/commands/name/kick").await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    assert_eq!(kick.category, "moderation");

    let by_id: CommandResponse = assert_json(
        client.get(&format!("/api/commands/{}", kick.id)).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(by_id.name, "kick");

    assert_status(client.get("/api/commands/999").await.unwrap(), StatusCode::NOT_FOUND)
        .await
        .unwrap();
    assert_status(client.get("/api/commands/name/nope").await.unwrap(), StatusCode::NOT_FOUND)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_command_admin_edits() {
    let server = TestServer::start().await.unwrap();
    let admin = server.admin_client().await.unwrap();

    let created: CommandResponse = assert_json(
        admin
            .post(
                "/api/commands",
                &json!({
                    "name": "mute",
                    "category": "moderation",
                    "description": "Mute a member",
                    "usage": "/mute @user"
                }),
            )
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();
    assert!(created.enabled);

    let disabled: CommandResponse = assert_json(
        admin
            .patch(&format!("/api/commands/{}", created.id), &json!({ "enabled": false }))
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(!disabled.enabled);
    assert_eq!(disabled.usage, "/mute @user");

    let anonymous = server.client().unwrap();
    assert_status(
        anonymous
            .patch(&format!("/api/commands/{}", created.id), &json!({ "enabled": true }))
            .await
            .unwrap(),
        StatusCode::UNAUTHORIZED,
    )
    .await
    .unwrap();
}
