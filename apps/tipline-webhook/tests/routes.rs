use std::{
	env, fs,
	path::PathBuf,
	sync::{
		Arc, Mutex,
		atomic::{AtomicBool, Ordering},
	},
	time::{SystemTime, UNIX_EPOCH},
};

use axum::{
	Router,
	body::{Body, to_bytes},
	http::{Request, StatusCode},
};
use color_eyre::eyre;
use serde_json::{Value, json};
use tower::ServiceExt;

use tipline_config::{Config, Postgres, Push, Security, Service, Storage};
use tipline_push::{AccessToken, PushMessage};
use tipline_service::{PushProvider, Stores, TipService};
use tipline_storage::{BoxFuture, models::NewConsent};
use tipline_testkit::{MemoryConsentStore, MemoryTipStore};
use tipline_webhook::{
	routes::{self, APOLOGY_SPEECH},
	state::AppState,
};

fn test_config(seed_path: &str) -> Config {
	Config {
		service: Service {
			http_bind: "127.0.0.1:8080".to_string(),
			admin_bind: "127.0.0.1:8081".to_string(),
			log_level: "info".to_string(),
		},
		security: Security { bind_localhost_only: true },
		storage: Storage {
			postgres: Postgres { dsn: "postgres://unused".to_string(), pool_max_conns: 1 },
			seed_path: seed_path.to_string(),
		},
		push: Push {
			token_url: "https://oauth.example.test/token".to_string(),
			client_id: "tipline-webhook".to_string(),
			client_secret: "secret".to_string(),
			scope: "https://push.example.test/auth/notifications".to_string(),
			api_base: "https://push.example.test".to_string(),
			path: "/v1/notifications:send".to_string(),
			timeout_ms: 5_000,
			notification_title: "Here's a fresh tip for you".to_string(),
		},
	}
}

#[derive(Default)]
struct StubPush {
	sent: Mutex<Vec<PushMessage>>,
	fail_token: AtomicBool,
}
impl StubPush {
	fn sent_count(&self) -> usize {
		self.sent.lock().unwrap_or_else(|err| err.into_inner()).len()
	}
}
impl PushProvider for StubPush {
	fn acquire_token<'a>(
		&'a self,
		_cfg: &'a tipline_config::Push,
	) -> BoxFuture<'a, color_eyre::Result<AccessToken>> {
		Box::pin(async move {
			if self.fail_token.load(Ordering::Relaxed) {
				return Err(eyre::eyre!("injected token failure"));
			}

			Ok(AccessToken { token: "test-token".to_string() })
		})
	}

	fn send<'a>(
		&'a self,
		_cfg: &'a tipline_config::Push,
		_token: &'a AccessToken,
		msg: &'a PushMessage,
	) -> BoxFuture<'a, color_eyre::Result<u16>> {
		Box::pin(async move {
			self.sent.lock().unwrap_or_else(|err| err.into_inner()).push(msg.clone());

			Ok(200)
		})
	}
}

struct Harness {
	app: Router,
	admin: Router,
	tips: Arc<MemoryTipStore>,
	push: Arc<StubPush>,
}

fn harness(seed_path: &str, consents: Vec<NewConsent>) -> Harness {
	let tips = Arc::new(MemoryTipStore::new());
	let consent_store = Arc::new(MemoryConsentStore::with_consents(consents));
	let push = Arc::new(StubPush::default());
	let service = TipService::with_parts(
		test_config(seed_path),
		Stores::new(tips.clone(), consent_store),
		push.clone(),
	);
	let state = AppState::with_service(service);

	Harness {
		app: routes::router(state.clone()),
		admin: routes::admin_router(state),
		tips,
		push,
	}
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
	Request::builder()
		.method("POST")
		.uri(uri)
		.header("content-type", "application/json")
		.body(Body::from(body.to_string()))
		.expect("Failed to build request.")
}

async fn json_body(response: axum::response::Response) -> Value {
	let bytes =
		to_bytes(response.into_body(), usize::MAX).await.expect("Failed to read body.");

	serde_json::from_slice(&bytes).expect("Body must be JSON.")
}

fn consent(user_id: &str) -> NewConsent {
	NewConsent { user_id: user_id.to_string(), intent: "tell_latest_tip".to_string() }
}

fn write_temp_seed(contents: &str) -> PathBuf {
	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("Clock went backwards.")
		.as_nanos();
	let path = env::temp_dir().join(format!("tipline_seed_{nanos}.json"));

	fs::write(&path, contents).expect("Failed to write seed file.");

	path
}

#[tokio::test]
async fn health_responds_ok() {
	let h = harness("unused.json", Vec::new());
	let response = h
		.app
		.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
		.await
		.expect("Request failed.");

	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn webhook_setup_push_requests_permission() {
	let h = harness("unused.json", Vec::new());
	let response = h
		.app
		.oneshot(post_json("/webhook", json!({ "intent": "setup_push" })))
		.await
		.expect("Request failed.");

	assert_eq!(response.status(), StatusCode::OK);

	let body = json_body(response).await;

	assert_eq!(body["reply"]["permission_request"]["intent"], "tell_latest_tip");
	assert_eq!(body["reply"]["expect_user_response"], true);
}

#[tokio::test]
async fn webhook_faults_degrade_to_an_apology() {
	let h = harness("unused.json", Vec::new());
	let response = h
		.app
		.oneshot(post_json(
			"/webhook",
			json!({
				"intent": "make_coffee",
				"user_flags": { "DAILY_NOTIFICATION_ASKED": true }
			}),
		))
		.await
		.expect("Request failed.");

	assert_eq!(response.status(), StatusCode::OK);

	let body = json_body(response).await;

	assert_eq!(body["reply"]["speech"], APOLOGY_SPEECH);
	assert_eq!(body["reply"]["expect_user_response"], false);
	// The flag bag still travels back so the platform does not lose it.
	assert_eq!(body["user_flags"]["DAILY_NOTIFICATION_ASKED"], true);
}

#[tokio::test]
async fn tip_created_reports_the_fanout() {
	let h = harness("unused.json", vec![consent("u1"), consent("u2")]);
	let response = h
		.app
		.oneshot(post_json(
			"/v1/tips/created",
			json!({ "id": uuid::Uuid::new_v4(), "category": "tools" }),
		))
		.await
		.expect("Request failed.");

	assert_eq!(response.status(), StatusCode::OK);

	let body = json_body(response).await;

	assert_eq!(body["attempted"], 2);
	assert_eq!(body["failed"], 0);
	assert_eq!(h.push.sent_count(), 2);
}

#[tokio::test]
async fn tip_created_surfaces_token_failure_as_bad_gateway() {
	let h = harness("unused.json", vec![consent("u1")]);

	h.push.fail_token.store(true, Ordering::Relaxed);

	let response = h
		.app
		.oneshot(post_json(
			"/v1/tips/created",
			json!({ "id": uuid::Uuid::new_v4(), "category": "tools" }),
		))
		.await
		.expect("Request failed.");

	assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

	let body = json_body(response).await;

	assert_eq!(body["error_code"], "provider_unavailable");
	assert_eq!(h.push.sent_count(), 0);
}

#[tokio::test]
async fn admin_reset_seeds_from_the_fixed_list() {
	let seed = json!([
		{ "category": "tools", "tip": "Use a debugger.", "url": "https://example.test/debugger" },
		{ "category": "promotion", "tip": "Tell people about your app.", "url": "https://example.test/promotion" }
	]);
	let path = write_temp_seed(&seed.to_string());
	let h = harness(path.to_str().expect("Seed path must be valid UTF-8."), Vec::new());
	let response = h
		.admin
		.oneshot(post_json("/v1/admin/reset", json!({})))
		.await
		.expect("Request failed.");

	assert_eq!(response.status(), StatusCode::OK);

	let body = json_body(response).await;

	assert_eq!(body["seeded"], 2);
	assert_eq!(h.tips.records().len(), 2);

	let _ = fs::remove_file(&path);
}
