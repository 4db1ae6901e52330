use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use sprofile_core::{AUTHORIZE_PATH, BEARER_TOKEN_PATH, PROFILE_PATH, TRACKS_PATH};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::fixtures::{Fixtures, ResponseOverride};

/// Token handed out once the stub session is signed in. Not a real credential.
pub const STUB_BEARER_TOKEN: &str = "stub-bearer-token";

const NO_TOKEN_MESSAGE: &str =
    "No bearer token available. User must authorize the application first.";

pub struct StubState {
    pub fixtures: Arc<RwLock<Fixtures>>,
    signed_in: AtomicBool,
}

impl StubState {
    pub fn new(fixtures: Arc<RwLock<Fixtures>>, signed_in: bool) -> Self {
        Self {
            fixtures,
            signed_in: AtomicBool::new(signed_in),
        }
    }

    /// State whose session starts as the fixtures say.
    pub fn from_fixtures(fixtures: Fixtures) -> Self {
        let signed_in = fixtures.signed_in;
        Self::new(Arc::new(RwLock::new(fixtures)), signed_in)
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in.load(Ordering::SeqCst)
    }
}

pub fn stub_router(state: Arc<StubState>) -> Router {
    Router::new()
        .route(AUTHORIZE_PATH, get(authorize))
        .route(BEARER_TOKEN_PATH, get(bearer_token))
        .route(PROFILE_PATH, get(profile))
        .route(TRACKS_PATH, get(tracks))
        .route("/health", get(health))
        .with_state(state)
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

fn json_error(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

fn override_response(forced: &ResponseOverride) -> Response {
    let status = StatusCode::from_u16(forced.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = forced.body.clone().unwrap_or_default();
    (status, [("content-type", "application/json")], body).into_response()
}

/// Stand-in for the Spotify redirect round trip: sign in (or fail) and send
/// the browser back to the page with the callback outcome in the query.
async fn authorize(State(state): State<Arc<StubState>>) -> Redirect {
    let login_error = state.fixtures.read().await.login_error.clone();
    match login_error {
        Some(code) => {
            warn!("stub login failing with {code}");
            Redirect::to(&error_location(&code))
        }
        None => {
            state.signed_in.store(true, Ordering::SeqCst);
            info!("stub session signed in");
            Redirect::to("/?success=true")
        }
    }
}

fn error_location(code: &str) -> String {
    match serde_urlencoded::to_string([("error", code)]) {
        Ok(query) => format!("/?{query}"),
        Err(e) => {
            warn!("failed to encode login error: {e}");
            "/?error=unknown".to_string()
        }
    }
}

async fn bearer_token(State(state): State<Arc<StubState>>) -> Response {
    if !state.is_signed_in() {
        return json_error(StatusCode::NOT_FOUND, NO_TOKEN_MESSAGE);
    }
    Json(serde_json::json!({ "bearer_token": STUB_BEARER_TOKEN })).into_response()
}

async fn profile(State(state): State<Arc<StubState>>) -> Response {
    user_route(&state, |f| {
        (
            f.overrides.profile.clone(),
            f.profile.as_ref().map(serde_json::to_value),
        )
    })
    .await
}

async fn tracks(State(state): State<Arc<StubState>>) -> Response {
    user_route(&state, |f| {
        (
            f.overrides.tracks.clone(),
            f.top_artists.as_ref().map(serde_json::to_value),
        )
    })
    .await
}

/// Shared shape of the two user routes: delay, auth check, forced response,
/// then the fixture body or 404.
async fn user_route(
    state: &StubState,
    pick: impl FnOnce(
        &Fixtures,
    ) -> (
        Option<ResponseOverride>,
        Option<serde_json::Result<serde_json::Value>>,
    ),
) -> Response {
    let (delay_ms, body_delay_ms, forced, body) = {
        let fixtures = state.fixtures.read().await;
        let (forced, body) = pick(&fixtures);
        (fixtures.delay_ms, fixtures.body_delay_ms, forced, body)
    };

    if let Some(ms) = delay_ms {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    if !state.is_signed_in() {
        return json_error(StatusCode::UNAUTHORIZED, NO_TOKEN_MESSAGE);
    }

    if let Some(forced) = forced {
        return override_response(&forced);
    }

    match body {
        Some(Ok(value)) => match body_delay_ms {
            Some(ms) => delayed_json(value, Duration::from_millis(ms)),
            None => Json(value).into_response(),
        },
        Some(Err(e)) => {
            warn!("failed to serialize fixture: {e}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// JSON response whose headers go out at once and whose body follows after
/// `delay`.
fn delayed_json(value: serde_json::Value, delay: Duration) -> Response {
    let text = value.to_string();
    let stream = futures::stream::once(async move {
        tokio::time::sleep(delay).await;
        Ok::<_, std::convert::Infallible>(text)
    });
    (
        StatusCode::OK,
        [("content-type", "application/json")],
        Body::from_stream(stream),
    )
        .into_response()
}

async fn health(State(state): State<Arc<StubState>>) -> Response {
    let body = serde_json::json!({
        "status": "ok",
        "signed_in": state.is_signed_in(),
    });

    (
        StatusCode::OK,
        [("content-type", "application/json")],
        body.to_string(),
    )
        .into_response()
}
