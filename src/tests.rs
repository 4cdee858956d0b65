//! Integration tests for the YILDIRIM backend.

use std::sync::Arc;

use axum::{routing::get, routing::post, Json, Router};
use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::assist::AssistClient;
use crate::config::Config;
use crate::db::{init_database, Repository};
use crate::{create_router, AppState};

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_options(Some("test-api-key".to_string()), None, None).await
    }

    async fn with_options(
        psk: Option<String>,
        genai_base_url: Option<String>,
        genai_api_key: Option<String>,
    ) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");

        // Initialize database
        let pool = init_database(&db_path).await.expect("Failed to init DB");
        let repo = Arc::new(Repository::new(pool));

        // Create config
        let config = Config {
            api_psk: psk.clone(),
            db_path,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            genai_api_key: genai_api_key.clone(),
            genai_base_url: genai_base_url
                .unwrap_or_else(|| crate::config::DEFAULT_GENAI_BASE_URL.to_string()),
        };

        let assist = Arc::new(AssistClient::new(
            config.genai_base_url.clone(),
            config.genai_api_key.clone(),
        ));

        let state = AppState {
            repo,
            assist,
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

        let mut client_builder = Client::builder();
        if let Some(key) = psk {
            let mut headers = reqwest::header::HeaderMap::new();
            headers.insert("x-api-key", key.parse().unwrap());
            client_builder = client_builder.default_headers(headers);
        }

        TestFixture {
            client: client_builder.build().unwrap(),
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn create_member(&self, name: &str, rank: &str, sub_team: Option<&str>) -> Value {
        let resp = self
            .client
            .post(self.url("/api/members"))
            .json(&json!({
                "name": name,
                "role": "Üye",
                "rank": rank,
                "subTeam": sub_team
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        resp.json().await.unwrap()
    }
}

/// Spawn a stub generative-text upstream and return its base URL.
///
/// Mirrors the upstream surface the assist client touches: a model
/// catalogue and a generateContent call (the `{model}:generateContent`
/// suffix arrives as one path segment).
async fn spawn_genai_stub() -> String {
    let app = Router::new()
        .route(
            "/models",
            get(|| async {
                Json(json!({
                    "models": [
                        { "name": "models/embedding-001",
                          "supportedGenerationMethods": ["embedContent"] },
                        { "name": "models/gemini-1.5-flash",
                          "supportedGenerationMethods": ["generateContent"] },
                        { "name": "models/gemini-1.0-pro",
                          "supportedGenerationMethods": ["generateContent"] }
                    ]
                }))
            }),
        )
        .route(
            "/models/{call}",
            post(|| async {
                Json(json!({
                    "candidates": [
                        { "content": { "parts": [ { "text": "Taslak duyuru metni." } ] } }
                    ]
                }))
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

    format!("http://{}", addr)
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
async fn test_auth_missing_psk() {
    let fixture = TestFixture::new().await;

    // Plain client without the API key header
    let client = Client::new();
    let resp = client
        .get(fixture.url("/api/members"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_auth_invalid_psk() {
    let fixture = TestFixture::new().await;

    let client = Client::new();
    let resp = client
        .get(fixture.url("/api/members"))
        .header("x-api-key", "wrong-key")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "INVALID_PSK");
}

#[tokio::test]
async fn test_auth_bearer_token_accepted() {
    let fixture = TestFixture::new().await;

    let client = Client::new();
    let resp = client
        .get(fixture.url("/api/members"))
        .header("authorization", "Bearer test-api-key")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_public_routes_open_without_psk() {
    let fixture = TestFixture::new().await;

    // Public reads and the contact form must not require the admin key
    let client = Client::new();

    let resp = client.get(fixture.url("/api/news")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client.get(fixture.url("/api/roster")).send().await.unwrap();
    assert_eq!(resp.status(), 200);

    let resp = client
        .post(fixture.url("/api/messages"))
        .json(&json!({
            "name": "Ziyaretçi",
            "email": "ziyaretci@example.com",
            "message": "Merhaba takım!"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_member_crud() {
    let fixture = TestFixture::new().await;

    // Create member
    let create_resp = fixture
        .client
        .post(fixture.url("/api/members"))
        .json(&json!({
            "name": "Ayşe Yılmaz",
            "role": "Yazılım Ekibi Üyesi",
            "rank": "general member",
            "subTeam": "software"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(create_resp.status(), 200);
    let create_body: Value = create_resp.json().await.unwrap();
    assert_eq!(create_body["success"], true);
    let member_id = create_body["data"]["id"].as_str().unwrap();
    assert_eq!(create_body["data"]["name"], "Ayşe Yılmaz");
    assert_eq!(create_body["data"]["subTeam"], "software");
    let revision_after_create = create_body["revisionId"].as_i64().unwrap();

    // Get member
    let get_resp = fixture
        .client
        .get(fixture.url(&format!("/api/members/{}", member_id)))
        .send()
        .await
        .unwrap();

    assert_eq!(get_resp.status(), 200);
    let get_body: Value = get_resp.json().await.unwrap();
    assert_eq!(get_body["data"]["name"], "Ayşe Yılmaz");

    // Update member
    let update_resp = fixture
        .client
        .put(fixture.url(&format!("/api/members/{}", member_id)))
        .json(&json!({
            "rank": "subteam lead"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(update_resp.status(), 200);
    let update_body: Value = update_resp.json().await.unwrap();
    assert_eq!(update_body["data"]["rank"], "subteam lead");
    // Absent fields keep their stored values
    assert_eq!(update_body["data"]["name"], "Ayşe Yılmaz");
    let revision_after_update = update_body["revisionId"].as_i64().unwrap();
    assert!(revision_after_update > revision_after_create);

    // List members
    let list_resp = fixture
        .client
        .get(fixture.url("/api/members"))
        .send()
        .await
        .unwrap();

    assert_eq!(list_resp.status(), 200);
    let list_body: Value = list_resp.json().await.unwrap();
    assert!(list_body["data"].as_array().unwrap().len() >= 1);

    // Delete member
    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/members/{}", member_id)))
        .send()
        .await
        .unwrap();

    assert_eq!(delete_resp.status(), 200);

    // Verify deleted
    let get_deleted_resp = fixture
        .client
        .get(fixture.url(&format!("/api/members/{}", member_id)))
        .send()
        .await
        .unwrap();

    assert_eq!(get_deleted_resp.status(), 404);
}

#[tokio::test]
async fn test_member_validation_errors() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/members"))
        .json(&json!({ "name": "", "role": "Üye", "rank": "general member" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let resp = fixture
        .client
        .post(fixture.url("/api/members"))
        .json(&json!({ "name": "Ayşe", "role": "Üye", "rank": "  " }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn test_roster_grouping_endpoint() {
    let fixture = TestFixture::new().await;

    fixture
        .create_member("Ayşe", "general member", Some("Software"))
        .await;
    fixture.create_member("Bora", "team captain", None).await;
    fixture
        .create_member("Can", "community president", None)
        .await;
    // Leads order by the sub-team table, not by name
    fixture
        .create_member("Zeynep", "subteam lead", Some("motor"))
        .await;
    fixture
        .create_member("Ahmet", "subteam lead", Some("mechanical"))
        .await;
    fixture.create_member("Veli", "volunteer", None).await;

    let resp = Client::new()
        .get(fixture.url("/api/roster"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["caption"], "Başarının arkasındaki güç");

    let groups = body["data"]["groups"].as_array().unwrap();
    let ranks: Vec<&str> = groups
        .iter()
        .map(|g| g["rank"].as_str().unwrap())
        .collect();
    assert_eq!(
        ranks,
        vec![
            "community president",
            "team captain",
            "subteam lead",
            "general member",
            "other"
        ]
    );

    assert_eq!(groups[0]["members"][0]["name"], "Can");
    assert_eq!(groups[1]["members"][0]["name"], "Bora");

    // Mechanical precedes Motor irrespective of name order
    let lead_names: Vec<&str> = groups[2]["members"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(lead_names, vec!["Ahmet", "Zeynep"]);

    // General members nest into sub-team buckets
    assert_eq!(groups[3]["subGroups"][0]["subTeam"], "Software");
    assert_eq!(groups[3]["subGroups"][0]["members"][0]["name"], "Ayşe");

    // Unrecognized ranks land in the trailing group instead of vanishing
    assert_eq!(groups[4]["members"][0]["name"], "Veli");
}

#[tokio::test]
async fn test_roster_caption_from_settings() {
    let fixture = TestFixture::new().await;

    fixture
        .client
        .put(fixture.url("/api/settings/desc_team"))
        .json(&json!({ "value": "Geleceği birlikte inşa ediyoruz" }))
        .send()
        .await
        .unwrap();

    let resp = Client::new()
        .get(fixture.url("/api/roster"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["caption"], "Geleceği birlikte inşa ediyoruz");
}

#[tokio::test]
async fn test_marquee_centers_highest_rank() {
    let fixture = TestFixture::new().await;

    fixture
        .create_member("Ayşe", "general member", Some("Software"))
        .await;
    fixture.create_member("Bora", "team captain", None).await;
    fixture
        .create_member("Can", "community president", None)
        .await;
    fixture.create_member("Derya", "subteam mentor", None).await;

    let resp = Client::new()
        .get(fixture.url("/api/roster/marquee"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();

    let members = body["data"].as_array().unwrap();
    assert_eq!(members.len(), 4);
    // Sorted order is Can, Bora, Derya, Ayşe; the rotation centers the president.
    assert_eq!(members[2]["name"], "Can");

    let mut names: Vec<&str> = members
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    names.sort_unstable();
    assert_eq!(names, vec!["Ayşe", "Bora", "Can", "Derya"]);
}

#[tokio::test]
async fn test_news_crud_and_public_detail() {
    let fixture = TestFixture::new().await;

    let create_resp = fixture
        .client
        .post(fixture.url("/api/news"))
        .json(&json!({
            "title": "Yeni araç tanıtıldı",
            "content": "Takımımız yeni aracını tanıttı."
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(create_resp.status(), 200);
    let create_body: Value = create_resp.json().await.unwrap();
    let news_id = create_body["data"]["id"].as_str().unwrap();
    assert!(create_body["data"]["publishedAt"].is_string());

    // Detail page is public
    let get_resp = Client::new()
        .get(fixture.url(&format!("/api/news/{}", news_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(get_resp.status(), 200);
    let get_body: Value = get_resp.json().await.unwrap();
    assert_eq!(get_body["data"]["title"], "Yeni araç tanıtıldı");

    // Update
    let update_resp = fixture
        .client
        .put(fixture.url(&format!("/api/news/{}", news_id)))
        .json(&json!({ "title": "Yeni araç yola çıktı" }))
        .send()
        .await
        .unwrap();
    assert_eq!(update_resp.status(), 200);
    let update_body: Value = update_resp.json().await.unwrap();
    assert_eq!(update_body["data"]["title"], "Yeni araç yola çıktı");
    assert_eq!(update_body["data"]["content"], "Takımımız yeni aracını tanıttı.");

    // Validation
    let invalid_resp = fixture
        .client
        .post(fixture.url("/api/news"))
        .json(&json!({ "title": "", "content": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(invalid_resp.status(), 400);

    // Delete
    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/news/{}", news_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);

    let get_deleted = Client::new()
        .get(fixture.url(&format!("/api/news/{}", news_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(get_deleted.status(), 404);
}

#[tokio::test]
async fn test_race_crud() {
    let fixture = TestFixture::new().await;

    let create_resp = fixture
        .client
        .post(fixture.url("/api/races"))
        .json(&json!({
            "title": "Efficiency Challenge 2025",
            "resultRank": "1. Lig Şampiyonu",
            "year": "2025"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(create_resp.status(), 200);
    let create_body: Value = create_resp.json().await.unwrap();
    let race_id = create_body["data"]["id"].as_str().unwrap();
    assert_eq!(create_body["data"]["resultRank"], "1. Lig Şampiyonu");

    let update_resp = fixture
        .client
        .put(fixture.url(&format!("/api/races/{}", race_id)))
        .json(&json!({ "description": "İstanbul Park pistinde koşuldu." }))
        .send()
        .await
        .unwrap();
    assert_eq!(update_resp.status(), 200);

    let list_resp = Client::new()
        .get(fixture.url("/api/races"))
        .send()
        .await
        .unwrap();
    let list_body: Value = list_resp.json().await.unwrap();
    assert_eq!(list_body["data"].as_array().unwrap().len(), 1);

    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/races/{}", race_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);
}

#[tokio::test]
async fn test_vehicle_specs_round_trip() {
    let fixture = TestFixture::new().await;

    let create_resp = fixture
        .client
        .post(fixture.url("/api/vehicles"))
        .json(&json!({
            "name": "Şimşek",
            "specs": [
                { "label": "Motor Gücü", "value": "5 kW" },
                { "label": "Ağırlık", "value": "120 kg" }
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(create_resp.status(), 200);
    let create_body: Value = create_resp.json().await.unwrap();
    let vehicle_id = create_body["data"]["id"].as_str().unwrap();

    // Spec sheet order survives storage
    let list_resp = Client::new()
        .get(fixture.url("/api/vehicles"))
        .send()
        .await
        .unwrap();
    let list_body: Value = list_resp.json().await.unwrap();
    let specs = list_body["data"][0]["specs"].as_array().unwrap();
    assert_eq!(specs[0]["label"], "Motor Gücü");
    assert_eq!(specs[1]["value"], "120 kg");

    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/vehicles/{}", vehicle_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);
}

#[tokio::test]
async fn test_sponsor_and_activity_crud() {
    let fixture = TestFixture::new().await;

    let sponsor_resp = fixture
        .client
        .post(fixture.url("/api/sponsors"))
        .json(&json!({ "name": "Örnek Holding", "websiteUrl": "https://example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(sponsor_resp.status(), 200);
    let sponsor_body: Value = sponsor_resp.json().await.unwrap();
    let sponsor_id = sponsor_body["data"]["id"].as_str().unwrap();

    let activity_resp = fixture
        .client
        .post(fixture.url("/api/activities"))
        .json(&json!({ "title": "Lise ziyareti", "description": "Tanıtım etkinliği" }))
        .send()
        .await
        .unwrap();
    assert_eq!(activity_resp.status(), 200);

    let update_resp = fixture
        .client
        .put(fixture.url(&format!("/api/sponsors/{}", sponsor_id)))
        .json(&json!({ "logoUrl": "https://example.com/logo.png" }))
        .send()
        .await
        .unwrap();
    assert_eq!(update_resp.status(), 200);
    let update_body: Value = update_resp.json().await.unwrap();
    assert_eq!(update_body["data"]["name"], "Örnek Holding");
    assert_eq!(update_body["data"]["logoUrl"], "https://example.com/logo.png");

    let activities: Value = Client::new()
        .get(fixture.url("/api/activities"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(activities["data"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_contact_message_flow() {
    let fixture = TestFixture::new().await;

    // Public submission
    let submit_resp = Client::new()
        .post(fixture.url("/api/messages"))
        .json(&json!({
            "name": "Ziyaretçi",
            "email": "ziyaretci@example.com",
            "message": "Sponsorluk hakkında bilgi almak istiyorum."
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(submit_resp.status(), 200);
    let submit_body: Value = submit_resp.json().await.unwrap();
    let message_id = submit_body["data"]["id"].as_str().unwrap();
    assert_eq!(submit_body["data"]["isRead"], false);

    // Invalid email rejected
    let invalid_resp = Client::new()
        .post(fixture.url("/api/messages"))
        .json(&json!({ "name": "X", "email": "not-an-email", "message": "Merhaba" }))
        .send()
        .await
        .unwrap();
    assert_eq!(invalid_resp.status(), 400);

    // Listing requires the admin key
    let unauthorized = Client::new()
        .get(fixture.url("/api/messages"))
        .send()
        .await
        .unwrap();
    assert_eq!(unauthorized.status(), 401);

    let list_resp = fixture
        .client
        .get(fixture.url("/api/messages"))
        .send()
        .await
        .unwrap();
    assert_eq!(list_resp.status(), 200);
    let list_body: Value = list_resp.json().await.unwrap();
    assert_eq!(list_body["data"].as_array().unwrap().len(), 1);

    // Mark read
    let read_resp = fixture
        .client
        .put(fixture.url(&format!("/api/messages/{}/read", message_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(read_resp.status(), 200);
    let read_body: Value = read_resp.json().await.unwrap();
    assert_eq!(read_body["data"]["isRead"], true);

    // Delete
    let delete_resp = fixture
        .client
        .delete(fixture.url(&format!("/api/messages/{}", message_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(delete_resp.status(), 200);
}

#[tokio::test]
async fn test_settings_upsert() {
    let fixture = TestFixture::new().await;

    let put_resp = fixture
        .client
        .put(fixture.url("/api/settings/desc_about"))
        .json(&json!({ "value": "Hakkımızda açıklaması" }))
        .send()
        .await
        .unwrap();
    assert_eq!(put_resp.status(), 200);

    // Overwrite the same key
    let overwrite_resp = fixture
        .client
        .put(fixture.url("/api/settings/desc_about"))
        .json(&json!({ "value": "Güncellenmiş açıklama" }))
        .send()
        .await
        .unwrap();
    assert_eq!(overwrite_resp.status(), 200);

    // Single-key read is public
    let get_resp = Client::new()
        .get(fixture.url("/api/settings/desc_about"))
        .send()
        .await
        .unwrap();
    assert_eq!(get_resp.status(), 200);
    let get_body: Value = get_resp.json().await.unwrap();
    assert_eq!(get_body["data"]["value"], "Güncellenmiş açıklama");

    let list_resp = fixture
        .client
        .get(fixture.url("/api/settings"))
        .send()
        .await
        .unwrap();
    let list_body: Value = list_resp.json().await.unwrap();
    assert_eq!(list_body["data"].as_array().unwrap().len(), 1);

    let missing_resp = Client::new()
        .get(fixture.url("/api/settings/no_such_key"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing_resp.status(), 404);
}

#[tokio::test]
async fn test_dashboard_counts() {
    let fixture = TestFixture::new().await;

    fixture.create_member("Ayşe", "general member", None).await;
    fixture.create_member("Bora", "team captain", None).await;

    fixture
        .client
        .post(fixture.url("/api/news"))
        .json(&json!({ "title": "Duyuru", "content": "İçerik" }))
        .send()
        .await
        .unwrap();

    Client::new()
        .post(fixture.url("/api/messages"))
        .json(&json!({ "name": "Z", "email": "z@example.com", "message": "Merhaba" }))
        .send()
        .await
        .unwrap();

    let resp = fixture
        .client
        .get(fixture.url("/api/dashboard"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["members"], 2);
    assert_eq!(body["data"]["news"], 1);
    assert_eq!(body["data"]["vehicles"], 0);
    assert_eq!(body["data"]["messages"], 1);
    assert_eq!(body["data"]["unreadMessages"], 1);
}

#[tokio::test]
async fn test_revision_increments_on_writes() {
    let fixture = TestFixture::new().await;

    let initial: Value = fixture
        .client
        .get(fixture.url("/api/members"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let initial_revision = initial["revisionId"].as_i64().unwrap();

    let create_body = fixture.create_member("Ayşe", "general member", None).await;
    let after_create = create_body["revisionId"].as_i64().unwrap();
    assert_eq!(after_create, initial_revision + 1);

    let member_id = create_body["data"]["id"].as_str().unwrap();

    let update_body: Value = fixture
        .client
        .put(fixture.url(&format!("/api/members/{}", member_id)))
        .json(&json!({ "role": "Takım Üyesi" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let after_update = update_body["revisionId"].as_i64().unwrap();
    assert_eq!(after_update, initial_revision + 2);

    let delete_body: Value = fixture
        .client
        .delete(fixture.url(&format!("/api/members/{}", member_id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let after_delete = delete_body["revisionId"].as_i64().unwrap();
    assert_eq!(after_delete, initial_revision + 3);
}

#[tokio::test]
async fn test_not_found_errors() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .get(fixture.url("/api/members/non-existent-id"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 404);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let resp2 = Client::new()
        .get(fixture.url("/api/news/non-existent-id"))
        .send()
        .await
        .unwrap();

    assert_eq!(resp2.status(), 404);
}

#[tokio::test]
async fn test_assist_generates_via_discovered_model() {
    let stub_url = spawn_genai_stub().await;
    let fixture = TestFixture::with_options(
        Some("test-api-key".to_string()),
        Some(stub_url),
        Some("stub-genai-key".to_string()),
    )
    .await;

    let resp = fixture
        .client
        .post(fixture.url("/api/assist"))
        .json(&json!({ "prompt": "Yeni araç tanıtımı için kısa bir duyuru yaz" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["text"], "Taslak duyuru metni.");
    // Discovery picks the flash tier over the pro model
    assert_eq!(body["data"]["usedModel"], "gemini-1.5-flash");
}

#[tokio::test]
async fn test_assist_requires_configured_key() {
    let fixture = TestFixture::new().await; // no genai key configured

    let resp = fixture
        .client
        .post(fixture.url("/api/assist"))
        .json(&json!({ "prompt": "Merhaba" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 500);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_assist_rejects_empty_prompt() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .client
        .post(fixture.url("/api/assist"))
        .json(&json!({ "prompt": "   " }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
