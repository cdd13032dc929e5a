//! Request descriptors produced by the per-resource wrappers.
//!
//! A recording transport captures what each wrapper sends and answers
//! with a canned body, so no network is involved.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use expertdb_client::cache::{ExpertCache, EXPERT_CACHE_KEY};
use expertdb_client::request::RequestBody;
use expertdb_client::session::{TOKEN_KEY, USER_KEY};
use expertdb_client::{
    ApiClient, FormData, MemorySessionStore, RawResponse, RequestDescriptor, SessionStore,
    Transport, TransportError,
};
use expertdb_core::models::expert::ExpertFilters;
use expertdb_core::models::phase::{CreatePhase, NewPhaseApplication, ReviewApplication};
use expertdb_core::models::user::UserInput;
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde_json::{json, Value};

/// Records every request and replies with the same response.
struct Recorder {
    reply: Mutex<RawResponse>,
    seen: Mutex<Vec<RequestDescriptor>>,
}

impl Recorder {
    fn last(&self) -> RequestDescriptor {
        self.seen.lock().unwrap().last().cloned().expect("no request recorded")
    }

    fn count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    fn reply_with(&self, status: u16, body: Value) {
        *self.reply.lock().unwrap() = RawResponse::json(status, &body);
    }
}

#[async_trait]
impl Transport for Recorder {
    async fn send(
        &self,
        request: &RequestDescriptor,
        _extra_headers: &HeaderMap,
    ) -> Result<RawResponse, TransportError> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(self.reply.lock().unwrap().clone())
    }
}

fn setup(reply: Value) -> (ApiClient, Arc<Recorder>, Arc<MemorySessionStore>) {
    let recorder = Arc::new(Recorder {
        reply: Mutex::new(RawResponse::json(200, &reply)),
        seen: Mutex::new(Vec::new()),
    });
    let store = Arc::new(MemorySessionStore::new());
    let client = ApiClient::with_transport(recorder.clone(), store.clone());
    (client, recorder, store)
}

fn ack() -> Value {
    json!({"success": true, "message": "done"})
}

// ---------------------------------------------------------------------------
// Experts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_experts_sends_pagination_and_filters() {
    let (client, rec, _) = setup(json!({"experts": [], "pagination": {}}));
    let filters = ExpertFilters {
        name: Some("Hassan".into()),
        is_bahraini: Some(true),
        ..Default::default()
    };

    let env = client.get_experts(10, 20, Some(&filters)).await;

    assert!(env.is_success());
    let req = rec.last();
    assert_eq!(req.method(), &Method::GET);
    assert_eq!(req.url(), "/experts");
    assert_eq!(req.param_value("limit"), Some("10"));
    assert_eq!(req.param_value("offset"), Some("20"));
    assert_eq!(req.param_value("name"), Some("Hassan"));
    assert_eq!(req.param_value("is_bahraini"), Some("true"));
}

#[tokio::test]
async fn expert_mutations_use_expected_routes() {
    let (client, rec, _) = setup(ack());

    client
        .create_expert(FormData::new().text("name", "Dr. Sara"))
        .await;
    let req = rec.last();
    assert_eq!((req.method(), req.url()), (&Method::POST, "/experts"));
    assert_eq!(req.form_body().unwrap().text_value("name"), Some("Dr. Sara"));

    client.update_expert(12, FormData::new()).await;
    assert_eq!(rec.last().method(), &Method::PUT);
    assert_eq!(rec.last().url(), "/experts/12");

    let env = client.delete_expert(12).await;
    assert_eq!(rec.last().method(), &Method::DELETE);
    assert_eq!(rec.last().url(), "/experts/12");
    assert_eq!(env.message(), "done");
}

#[tokio::test]
async fn cached_experts_skip_the_network_while_fresh() {
    let (client, rec, store) = setup(json!({
        "experts": [{"id": 1, "name": "Dr. Yusuf"}],
        "pagination": {"totalCount": 1}
    }));
    let cache = ExpertCache::new(store.clone());

    let first = client.get_experts_cached(&cache, 100).await;
    let second = client.get_experts_cached(&cache, 100).await;

    assert_eq!(first.data().unwrap()[0].name, "Dr. Yusuf");
    assert_eq!(second.data(), first.data());
    assert_eq!(rec.count(), 1);
    assert!(store.get(EXPERT_CACHE_KEY).is_some());
}

#[tokio::test]
async fn failed_fetch_does_not_populate_cache() {
    let (client, rec, store) = setup(json!({}));
    rec.reply_with(500, json!(null));
    let cache = ExpertCache::new(store.clone());

    let env = client.get_experts_cached(&cache, 100).await;

    assert!(!env.is_success());
    assert!(store.get(EXPERT_CACHE_KEY).is_none());
}

// ---------------------------------------------------------------------------
// Requests, documents, engagements
// ---------------------------------------------------------------------------

#[tokio::test]
async fn expert_request_routes() {
    let (client, rec, _) = setup(ack());

    client.get_expert_requests(5, 0, &[("status", "pending")]).await;
    let req = rec.last();
    assert_eq!(req.url(), "/expert-requests");
    assert_eq!(req.param_value("status"), Some("pending"));
    assert_eq!(req.param_value("limit"), Some("5"));

    client.edit_expert_request(3, FormData::new()).await;
    assert_eq!(rec.last().url(), "/expert-requests/3/edit");
    assert_eq!(rec.last().method(), &Method::PUT);

    client
        .batch_approve(FormData::new().text("requestIds", "1,2,3"))
        .await;
    assert_eq!(rec.last().url(), "/expert-requests/batch-approve");
    assert_eq!(rec.last().method(), &Method::POST);
}

#[tokio::test]
async fn document_and_engagement_routes() {
    let (client, rec, _) = setup(ack());

    client.get_expert_documents(8).await;
    assert_eq!(rec.last().url(), "/experts/8/documents");

    client.delete_document(40).await;
    assert_eq!(rec.last().url(), "/documents/40");
    assert_eq!(rec.last().method(), &Method::DELETE);

    client.get_engagements(10, 30, &[("type", "validation")]).await;
    let req = rec.last();
    assert_eq!(req.url(), "/expert-engagements");
    assert_eq!(req.param_value("offset"), Some("30"));
    assert_eq!(req.param_value("type"), Some("validation"));

    client
        .import_engagements(FormData::new().file("file", "e.csv", b"a,b".to_vec(), None))
        .await;
    assert_eq!(rec.last().url(), "/engagements/import");
    assert!(matches!(rec.last().body(), Some(RequestBody::Multipart(_))));
}

// ---------------------------------------------------------------------------
// Phases, statistics, areas, users, assignments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn phase_bodies_are_json() {
    let (client, rec, _) = setup(ack());
    let phase = CreatePhase {
        title: "Spring 2025 validation".into(),
        assigned_scheduler_id: 4,
        status: "draft".into(),
        applications: vec![NewPhaseApplication {
            application_type: "QP".into(),
            institution_name: "Bahrain Polytechnic".into(),
            qualification_name: "BSc Engineering".into(),
            expert1: 0,
            expert2: 0,
            status: "pending".into(),
        }],
    };

    client.create_phase(&phase).await;
    let body = rec.last().json_body().cloned().unwrap();
    assert_eq!(body["assignedSchedulerId"], 4);
    assert_eq!(body["applications"][0]["type"], "QP");

    client
        .review_application(
            2,
            9,
            &ReviewApplication {
                status: "rejected".into(),
                rejection_notes: Some("Conflict of interest".into()),
            },
        )
        .await;
    let req = rec.last();
    assert_eq!(req.url(), "/phases/2/applications/9/review");
    assert_eq!(req.json_body().unwrap()["rejectionNotes"], "Conflict of interest");
}

#[tokio::test]
async fn statistics_routes() {
    let (client, rec, _) = setup(json!({}));

    client.get_overall_stats().await;
    assert_eq!(rec.last().url(), "/statistics");

    client.get_growth_stats(Some(5)).await;
    assert_eq!(rec.last().url(), "/statistics/growth");
    assert_eq!(rec.last().param_value("years"), Some("5"));

    client.get_growth_stats(None).await;
    assert_eq!(rec.last().param_value("years"), None);

    client.get_area_stats().await;
    assert_eq!(rec.last().url(), "/statistics/areas");
}

#[tokio::test]
async fn area_and_user_routes() {
    let (client, rec, _) = setup(ack());

    client.update_expert_area(3, "Engineering").await;
    assert_eq!(rec.last().url(), "/expert/areas/3");
    assert_eq!(rec.last().json_body().unwrap()["name"], "Engineering");

    client
        .create_user(&UserInput {
            name: Some("Planner One".into()),
            role: Some("planner".into()),
            ..Default::default()
        })
        .await;
    let body = rec.last().json_body().cloned().unwrap();
    assert_eq!(body["role"], "planner");
    assert!(body.get("password").is_none());

    client.get_users(2, 25, &[]).await;
    assert_eq!(rec.last().param_value("page"), Some("2"));
    assert_eq!(rec.last().param_value("limit"), Some("25"));
}

#[tokio::test]
async fn assignment_routes_carry_application_ids() {
    let (client, rec, _) = setup(json!({"success": true, "message": "", "data": {"user_id": 6}}));

    client.assign_planner_applications(6, &[11, 12]).await;
    let req = rec.last();
    assert_eq!(req.url(), "/users/6/planner-assignments");
    assert_eq!(req.method(), &Method::POST);
    assert_eq!(req.json_body().unwrap()["application_ids"], json!([11, 12]));

    client.remove_manager_assignments(6, &[12]).await;
    assert_eq!(rec.last().url(), "/users/6/manager-assignments");
    assert_eq!(rec.last().method(), &Method::DELETE);
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

#[tokio::test]
async fn refresh_replaces_token() {
    let (client, rec, store) =
        setup(json!({"success": true, "message": "", "data": {"token": "tok-new"}}));
    store.set(TOKEN_KEY, "tok-old");

    let env = client.refresh_token().await;

    assert!(env.is_success());
    assert_eq!(rec.last().url(), "/auth/refresh");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-new"));
}

#[tokio::test]
async fn refresh_without_token_is_failure() {
    let (client, _rec, store) =
        setup(json!({"success": true, "message": "", "data": {"token": ""}}));
    store.set(TOKEN_KEY, "tok-old");

    let env = client.refresh_token().await;

    assert!(!env.is_success());
    assert_eq!(env.message(), "Failed to refresh token");
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-old"));
}

#[tokio::test]
async fn logout_clears_session() {
    let (client, _rec, store) = setup(ack());
    client.session().begin("tok", r#"{"id":1}"#);

    client.logout();

    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
}

#[tokio::test]
async fn health_uses_shared_descriptor() {
    let (client, rec, _) = setup(json!({"status": "ok", "message": "ExpertDB API is running"}));

    let env = client.health().await;

    assert!(env.data().unwrap().is_ok());
    let expected = expertdb_client::api::health::health_request();
    assert_eq!(rec.last().method(), expected.method());
    assert_eq!(rec.last().url(), expected.url());
    assert_eq!(rec.last().url(), "/health");
}
