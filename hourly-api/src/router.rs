use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use axum_extra::extract::cookie::SameSite;
use axum_login::{
    login_required,
    tower_sessions::{
        CachingSessionStore, ExpiredDeletion, Expiry, SessionManagerLayer, SessionStore,
    },
    AuthManagerLayer, AuthManagerLayerBuilder,
};
use sqlx::PgPool;
use time::Duration;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tower_sessions_moka_store::MokaStore;
use tower_sessions_sqlx_store::PostgresStore;
use url::Url;

use crate::{
    app_state::AppState,
    auth::{self, AuthBackend},
    config::AuthSettings,
    domain::ports::inbound::AccessGate,
    routes,
};

pub type PersistentSessionStore = CachingSessionStore<MokaStore, PostgresStore>;

pub fn create<Store>(
    app_state: AppState,
    auth_layer: AuthManagerLayer<AuthBackend, Store>,
    app_url: &Url,
) -> Router<()>
where
    Store: SessionStore + Clone,
{
    let api = Router::new()
        .nest("/employees", routes::employees::router())
        .nest("/projects", routes::projects::router())
        .nest("/tasks", routes::tasks::router())
        .nest("/allocations", routes::allocations::router())
        .nest("/time_logs", routes::time_logs::router())
        .nest("/reports", routes::reports::router())
        .route_layer(login_required!(AuthBackend))
        .merge(auth::router());

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
        .allow_origin(client_origin(app_url));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", api)
        .with_state(app_state)
        .layer(auth_layer)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}

/// `scheme://host[:port]` of the client, as browsers send it in `Origin`.
fn client_origin(app_url: &Url) -> HeaderValue {
    let origin = app_url.origin().ascii_serialization();
    HeaderValue::from_str(&origin).unwrap_or_else(|_| HeaderValue::from_static("null"))
}

/// Session layer over `store`, with the cookie policy from `settings`.
pub fn auth_layer<Store>(
    store: Store,
    gate: Arc<dyn AccessGate>,
    settings: &AuthSettings,
) -> AuthManagerLayer<AuthBackend, Store>
where
    Store: SessionStore + Clone,
{
    let session_layer = SessionManagerLayer::new(store)
        .with_secure(settings.secure_cookies)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(settings.session_days)));

    AuthManagerLayerBuilder::new(AuthBackend::new(gate), session_layer).build()
}

/// Sessions persisted in PostgreSQL behind an in-memory Moka cache.
///
/// Also spawns the sweeper that deletes expired sessions.
pub async fn persistent_session_store(
    connection_pool: PgPool,
) -> Result<PersistentSessionStore, sqlx::Error> {
    let db_store = PostgresStore::new(connection_pool);
    db_store.migrate().await?;

    tokio::spawn(
        db_store
            .clone()
            .continuously_delete_expired(tokio::time::Duration::from_secs(60)),
    );

    let cache_store = MokaStore::new(Some(2_000));
    Ok(CachingSessionStore::new(cache_store, db_store))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        response::Response,
    };
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::{adapters::outbound::MockEntityStore, config::AuthSettings, factory};

    async fn test_app() -> Router {
        let state = factory::app_state(Arc::new(MockEntityStore::new()));
        state
            .access
            .ensure_default_admin("admin@geodataar.com", "admin123")
            .await
            .unwrap();

        let settings = AuthSettings {
            default_admin_email: "admin@geodataar.com".to_string(),
            default_admin_password: "admin123".to_string(),
            session_days: 1,
            secure_cookies: false,
        };
        let layer = auth_layer(MokaStore::new(Some(100)), state.access.clone(), &settings);
        let app_url = Url::parse("http://localhost:5173").unwrap();

        create(state, layer, &app_url)
    }

    fn json_request(method: &str, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn session_cookie(response: &Response) -> String {
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    async fn login_as_admin(app: &Router) -> String {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/login",
                None,
                json!({ "email": "admin@geodataar.com", "password": "admin123" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        session_cookie(&response)
    }

    #[tokio::test]
    async fn health_needs_no_session() {
        let app = test_app().await;

        let response = app.oneshot(get_request("/health", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn api_requires_login() {
        let app = test_app().await;

        let response = app
            .oneshot(get_request("/api/employees", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let app = test_app().await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/login",
                None,
                json!({ "email": "admin@geodataar.com", "password": "nope" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Invalid credentials");
    }

    #[tokio::test]
    async fn default_admin_logs_in_and_sees_identity() {
        let app = test_app().await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/login",
                None,
                json!({ "email": "admin@geodataar.com", "password": "admin123" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = session_cookie(&response);
        let identity = body_json(response).await;
        assert_eq!(identity["role"], "admin");
        assert_eq!(identity["name"], "Admin");

        let response = app
            .oneshot(get_request("/api/me", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["email"], "admin@geodataar.com");
    }

    #[tokio::test]
    async fn admin_builds_records_and_reads_payroll() {
        let app = test_app().await;
        let cookie = login_as_admin(&app).await;

        let employee = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/employees",
                    Some(&cookie),
                    json!({ "name": "Asha", "hourly_rate": 500 }),
                ))
                .await
                .unwrap(),
        )
        .await;
        let project = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/projects",
                    Some(&cookie),
                    json!({ "name": "Survey" }),
                ))
                .await
                .unwrap(),
        )
        .await;
        let task = body_json(
            app.clone()
                .oneshot(json_request(
                    "POST",
                    "/api/tasks",
                    Some(&cookie),
                    json!({ "project_id": project["id"], "name": "Fieldwork" }),
                ))
                .await
                .unwrap(),
        )
        .await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/time_logs",
                Some(&cookie),
                json!({
                    "employee_id": employee["id"],
                    "project_id": project["id"],
                    "task_id": task["id"],
                    "date": "2024-03-05",
                    "start_time": "09:00",
                    "end_time": "17:30"
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(get_request(
                "/api/reports/payroll?month=2024-03",
                Some(&cookie),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let report = body_json(response).await;
        assert_eq!(report["month"], "2024-03");
        assert_eq!(report["rows"][0]["total_hours"], 8.5);
        assert_eq!(report["rows"][0]["total_pay"], 4250.0);
        assert_eq!(report["total_payout"], 4250.0);

        let response = app
            .oneshot(json_request(
                "DELETE",
                &format!("/api/projects/{}", project["id"]),
                Some(&cookie),
                json!({}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(body_json(response).await["code"], "IN_USE");
    }

    async fn create_json(app: &Router, cookie: &str, uri: &str, body: Value) -> Value {
        let response = app
            .clone()
            .oneshot(json_request("POST", uri, Some(cookie), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "POST {uri}");
        body_json(response).await
    }

    async fn get_json(app: &Router, cookie: &str, uri: &str) -> Value {
        let response = app
            .clone()
            .oneshot(get_request(uri, Some(cookie)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
        body_json(response).await
    }

    #[tokio::test]
    async fn allocations_and_time_logs_read_back_by_id() {
        let app = test_app().await;
        let cookie = login_as_admin(&app).await;

        let employee = create_json(
            &app,
            &cookie,
            "/api/employees",
            json!({ "name": "Asha", "hourly_rate": 500 }),
        )
        .await;
        let project = create_json(&app, &cookie, "/api/projects", json!({ "name": "Survey" })).await;
        let task = create_json(
            &app,
            &cookie,
            "/api/tasks",
            json!({ "project_id": project["id"], "name": "Fieldwork" }),
        )
        .await;

        let allocation = create_json(
            &app,
            &cookie,
            "/api/allocations",
            json!({
                "employee_id": employee["id"],
                "project_id": project["id"],
                "task_id": task["id"],
                "allocated_hours": 6.5,
                "date": "2024-03-07",
                "status": "In Progress"
            }),
        )
        .await;
        let read = get_json(&app, &cookie, &format!("/api/allocations/{}", allocation["id"])).await;
        assert_eq!(read, allocation);
        assert_eq!(read["employee_id"], employee["id"]);
        assert_eq!(read["task_id"], task["id"]);
        assert_eq!(read["allocated_hours"], 6.5);
        assert_eq!(read["date"], "2024-03-07");
        assert_eq!(read["status"], "In Progress");

        let log = create_json(
            &app,
            &cookie,
            "/api/time_logs",
            json!({
                "employee_id": employee["id"],
                "project_id": project["id"],
                "task_id": task["id"],
                "date": "2024-03-05",
                "start_time": "09:00",
                "end_time": "17:30"
            }),
        )
        .await;
        let read = get_json(&app, &cookie, &format!("/api/time_logs/{}", log["id"])).await;
        assert_eq!(read, log);
        assert_eq!(read["employee_id"], employee["id"]);
        assert_eq!(read["date"], "2024-03-05");
        assert_eq!(read["start_time"], "09:00");
        assert_eq!(read["end_time"], "17:30");
        assert_eq!(read["worked_hours"], 8.5);
    }

    #[tokio::test]
    async fn malformed_month_is_a_bad_request() {
        let app = test_app().await;
        let cookie = login_as_admin(&app).await;

        let response = app
            .oneshot(get_request("/api/reports/payroll?month=2024-3", Some(&cookie)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
