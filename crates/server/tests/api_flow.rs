use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::routing::get;
use axum::Router;
use chrono::Utc;
use configs::Environment;
use serde_json::{json, Value};
use service::{Catalog, IdGenerator};
use tower::ServiceExt;

use server::{routes, AppState};

fn cors() -> tower_http::cors::CorsLayer { tower_http::cors::CorsLayer::very_permissive() }

fn state() -> AppState {
    AppState::new(Arc::new(Catalog::builtin(Utc::now())), Environment::Test)
}

fn app() -> Router {
    routes::build_router(state(), cors())
}

async fn send(app: Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
    let resp = app.oneshot(req).await?;
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await?;
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
    Ok((status, body))
}

async fn get_json(app: Router, uri: &str) -> anyhow::Result<(StatusCode, Value)> {
    send(app, Request::builder().uri(uri).body(Body::empty())?).await
}

async fn post_json(app: Router, uri: &str, body: Value) -> anyhow::Result<(StatusCode, Value)> {
    let req = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&body)?))?;
    send(app, req).await
}

#[tokio::test]
async fn register_valid_application() -> anyhow::Result<()> {
    let (status, body) = post_json(
        app(),
        "/api/influencers/register",
        json!({"name": "A", "email": "a@b.com", "homeCountry": "US"}),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);
    assert!(body["message"].as_str().unwrap().starts_with("Registration submitted successfully!"));

    let data = &body["data"];
    let id_re = regex::Regex::new(r"^inf-\d+$")?;
    assert!(id_re.is_match(data["id"].as_str().unwrap()), "id {}", data["id"]);
    assert_eq!(data["status"], "pending_review");
    assert_eq!(data["kycStatus"], "not_started");
    assert_eq!(data["name"], "A");
    assert_eq!(data["homeCountry"], "US");
    assert!(data["createdAt"].as_str().unwrap().ends_with('Z'));
    Ok(())
}

#[tokio::test]
async fn register_echoes_optional_fields() -> anyhow::Result<()> {
    let (status, body) = post_json(
        app(),
        "/api/influencers/register",
        json!({
            "name": "Elif",
            "email": "elif@example.com.tr",
            "homeCountry": "Turkey",
            "socialLinks": {"instagram": "@elif", "tiktok": "@elif.y"},
            "bio": "Bazaar regular",
            "travelExperience": "5 years"
        }),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["socialLinks"]["tiktok"], "@elif.y");
    assert_eq!(body["data"]["bio"], "Bazaar regular");
    assert_eq!(body["data"]["travelExperience"], "5 years");
    Ok(())
}

#[tokio::test]
async fn register_uses_injected_id_generator() -> anyhow::Result<()> {
    struct Fixed(AtomicU64);
    impl IdGenerator for Fixed {
        fn next_id(&self) -> String { format!("inf-{}", self.0.fetch_add(1, Ordering::SeqCst)) }
    }
    let state = state().with_id_generator(Arc::new(Fixed(AtomicU64::new(1000))));
    let app = routes::build_router(state, cors());
    let payload = json!({"name": "A", "email": "a@b.com", "homeCountry": "US"});
    let (_, first) = post_json(app.clone(), "/api/influencers/register", payload.clone()).await?;
    let (_, second) = post_json(app, "/api/influencers/register", payload).await?;
    assert_eq!(first["data"]["id"], "inf-1000");
    assert_eq!(second["data"]["id"], "inf-1001");
    Ok(())
}

#[tokio::test]
async fn register_flags_each_missing_field() -> anyhow::Result<()> {
    let cases = [
        (json!({"email": "a@b.com", "homeCountry": "US"}), "name", "Name is required"),
        (json!({"name": "A", "homeCountry": "US"}), "email", "Email is required"),
        (json!({"name": "A", "email": "a@b.com"}), "homeCountry", "Home country is required"),
        (json!({"name": "", "email": "a@b.com", "homeCountry": "US"}), "name", "Name is required"),
    ];
    for (payload, field, msg) in cases {
        let (status, body) = post_json(app(), "/api/influencers/register", payload).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Validation Error");
        assert_eq!(body["message"], "Name, email, and home country are required");
        assert_eq!(body["fields"][field], msg);
    }
    Ok(())
}

#[tokio::test]
async fn register_accepts_whitespace_only_name() -> anyhow::Result<()> {
    let (status, body) = post_json(
        app(),
        "/api/influencers/register",
        json!({"name": "   ", "email": "a@b.com", "homeCountry": "US"}),
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["name"], "   ");
    Ok(())
}

async fn post_form(app: Router, body: &'static str) -> anyhow::Result<(StatusCode, Value)> {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/influencers/register")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))?;
    send(app, req).await
}

#[tokio::test]
async fn register_accepts_form_encoded_body() -> anyhow::Result<()> {
    let (status, body) = post_form(app(), "name=A&email=a%40b.com&homeCountry=US").await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["email"], "a@b.com");
    assert_eq!(body["data"]["status"], "pending_review");

    let (status, body) = post_form(
        app(),
        "name=Elif&email=elif%40example.com&homeCountry=Turkey&socialLinks%5Binstagram%5D=%40elif&bio=Bazaar+regular",
    )
    .await?;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["socialLinks"]["instagram"], "@elif");
    assert_eq!(body["data"]["bio"], "Bazaar regular");
    Ok(())
}

#[tokio::test]
async fn form_registration_is_validated_like_json() -> anyhow::Result<()> {
    let (status, body) = post_form(app(), "name=A&homeCountry=US").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"]["email"], "Email is required");

    let (status, body) = post_form(app(), "name=A&email=bad-email&homeCountry=US").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid email format");
    Ok(())
}

#[tokio::test]
async fn register_rejects_bad_email() -> anyhow::Result<()> {
    for email in ["bad-email", "a@b", "a b@c.com"] {
        let (status, body) = post_json(
            app(),
            "/api/influencers/register",
            json!({"name": "A", "email": email, "homeCountry": "US"}),
        )
        .await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{email}");
        assert_eq!(body["message"], "Invalid email format");
        assert!(body.get("fields").is_none());
    }
    Ok(())
}

#[tokio::test]
async fn register_rejects_unreadable_body() -> anyhow::Result<()> {
    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/influencers/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))?;
    let (status, body) = send(app(), req).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Validation Error");

    let req = Request::builder()
        .method(Method::POST)
        .uri("/api/influencers/register")
        .body(Body::from("name=A"))?;
    let (status, body) = send(app(), req).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    Ok(())
}

#[tokio::test]
async fn live_active_counts_match_lists() -> anyhow::Result<()> {
    let (status, body) = get_json(app(), "/api/live/active").await?;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    let live = data["live"].as_array().unwrap();
    let upcoming = data["upcoming"].as_array().unwrap();
    assert_eq!(data["totalLive"], live.len());
    assert_eq!(data["totalUpcoming"], upcoming.len());
    assert!(live.iter().all(|s| s["status"] == "LIVE" && s["startedAt"].is_string()));
    assert!(upcoming.iter().all(|s| s["status"] == "SCHEDULED" && s["scheduledAt"].is_string()));
    Ok(())
}

#[tokio::test]
async fn live_lookup_returns_exact_record() -> anyhow::Result<()> {
    let (_, active) = get_json(app(), "/api/live/active").await?;
    for set in ["live", "upcoming"] {
        for session in active["data"][set].as_array().unwrap() {
            let id = session["id"].as_str().unwrap();
            let (status, body) = get_json(app(), &format!("/api/live/{id}")).await?;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(&body["data"], session);
        }
    }
    Ok(())
}

#[tokio::test]
async fn live_lookup_unknown_id_is_404() -> anyhow::Result<()> {
    let (status, body) = get_json(app(), "/api/live/does-not-exist").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"success": false, "error": "Not Found", "message": "Live session not found"}));
    Ok(())
}

#[tokio::test]
async fn live_stats_over_builtin_set() -> anyhow::Result<()> {
    let (status, body) = get_json(app(), "/api/live/stats/overview").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({"activeSessions": 5, "totalViewers": 6203, "upcomingToday": 3, "countriesActive": 5})
    );
    Ok(())
}

#[tokio::test]
async fn influencer_endpoints() -> anyhow::Result<()> {
    let (status, body) = get_json(app(), "/api/influencers/featured").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 4);
    assert_eq!(body["data"][0]["currentLocation"]["countryCode"], "JP");

    let (status, body) = get_json(app(), "/api/influencers/anything-goes").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], "anything-goes");
    assert_eq!(body["data"]["upcomingTrips"].as_array().unwrap().len(), 2);
    Ok(())
}

#[tokio::test]
async fn health_and_readiness() -> anyhow::Result<()> {
    let (status, body) = get_json(app(), "/api/health").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "LiveBuy Local API is running");
    assert_eq!(body["environment"], "test");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));

    let (status, body) = get_json(app(), "/api/health/ready").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
    assert_eq!(body["services"]["api"], "healthy");
    Ok(())
}

#[tokio::test]
async fn unknown_route_gets_generic_404() -> anyhow::Result<()> {
    let (status, body) = get_json(app(), "/api/nope").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "The requested resource was not found");
    Ok(())
}

#[tokio::test]
async fn unsupported_method_on_known_path_gets_generic_404() -> anyhow::Result<()> {
    let cases = [
        (Method::POST, "/api/live/active"),
        (Method::DELETE, "/api/health"),
        (Method::PUT, "/api/live/1"),
        (Method::DELETE, "/api/influencers/register"),
    ];
    for (method, uri) in cases {
        let req = Request::builder().method(method.clone()).uri(uri).body(Body::empty())?;
        let (status, body) = send(app(), req).await?;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method} {uri}");
        assert_eq!(
            body,
            json!({"success": false, "error": "Not Found", "message": "The requested resource was not found"})
        );
    }
    Ok(())
}

#[tokio::test]
async fn get_on_register_path_returns_profile() -> anyhow::Result<()> {
    let (status, body) = get_json(app(), "/api/influencers/register").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], "register");
    assert_eq!(body["data"]["name"], "Yuki Tanaka");
    Ok(())
}

#[tokio::test]
async fn metrics_exposes_registration_counter() -> anyhow::Result<()> {
    let _ = post_json(app(), "/api/influencers/register", json!({"name": "A"})).await?;
    let resp = app().oneshot(Request::builder().uri("/metrics").body(Body::empty())?).await?;
    assert_eq!(resp.status(), StatusCode::OK);
    let text = String::from_utf8(to_bytes(resp.into_body(), usize::MAX).await?.to_vec())?;
    assert!(text.contains("livebuy_registrations_total"));
    Ok(())
}

fn panicking_app(environment: Environment) -> Router {
    let router = Router::new().route("/boom", get(|| async { panic!("kaboom") as () }));
    routes::with_layers(router, environment, cors())
}

#[tokio::test]
async fn panics_become_500_with_gated_detail() -> anyhow::Result<()> {
    let (status, body) = get_json(panicking_app(Environment::Development), "/boom").await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal Server Error");
    assert_eq!(body["message"], "kaboom");

    let (status, body) = get_json(panicking_app(Environment::Production), "/boom").await?;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Something went wrong");
    Ok(())
}

#[tokio::test]
async fn fixture_file_replaces_builtin_catalog() -> anyhow::Result<()> {
    let mut catalog = Catalog::builtin(Utc::now());
    catalog.live.truncate(2);
    let path = std::env::temp_dir().join(format!("livebuy_fixtures_{}.json", uuid::Uuid::new_v4()));
    std::fs::write(&path, serde_json::to_vec(&catalog)?)?;

    let mut cfg = configs::AppConfig::default();
    cfg.fixtures.path = Some(path.to_string_lossy().into_owned());
    let app = server::startup::build_app(&cfg)?;

    let (_, body) = get_json(app, "/api/live/stats/overview").await?;
    assert_eq!(body["data"]["activeSessions"], 2);
    assert_eq!(body["data"]["totalViewers"], 1247 + 892);
    std::fs::remove_file(&path).ok();
    Ok(())
}
