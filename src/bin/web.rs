//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST (e.g. 127.0.0.1), PORT (e.g. 8080).

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    get, middleware, post,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use chrono::{DateTime, Utc};
use darts_scorer_web::{
    history_to_csv, random_hit, BoardLayout, Hit, MatchConfig, MatchPhase, MatchSession, MatchState,
    TRANSIENT_CLEAR_DELAY,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Unique identifier for a match session.
type MatchId = Uuid;

/// Per-match entry: session (state + undo) and activity times.
struct MatchEntry {
    session: MatchSession,
    created_at: DateTime<Utc>,
    last_activity: Instant,
}

/// In-memory state: many matches by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<MatchId, MatchEntry>>>;

/// Inactivity threshold: matches not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

/// Cookie-session key holding the browser's current match id.
const SESSION_MATCH_KEY: &str = "match_id";

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// A match as returned by the API: the full state plus what the controls need.
#[derive(Serialize)]
struct MatchResponse<'a> {
    id: MatchId,
    phase: MatchPhase,
    can_undo: bool,
    /// Client waits this long before calling /transient/clear.
    transient_clear_ms: u64,
    #[serde(flatten)]
    state: &'a MatchState,
}

#[derive(Serialize)]
struct MatchSummary {
    id: MatchId,
    created_at: DateTime<Utc>,
    phase: MatchPhase,
    players: Vec<String>,
}

/// Path segment: match id (e.g. /api/matches/{id})
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

fn match_json(id: MatchId, entry: &MatchEntry) -> HttpResponse {
    HttpResponse::Ok().json(MatchResponse {
        id,
        phase: entry.session.state().phase(),
        can_undo: entry.session.can_undo(),
        transient_clear_ms: TRANSIENT_CLEAR_DELAY.as_millis() as u64,
        state: entry.session.state(),
    })
}

fn no_match() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No match" }))
}

fn bad_request(e: impl std::fmt::Display) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }))
}

/// Lock, look up the match, refresh last_activity and run `f` on it.
fn with_match<F>(state: &AppState, id: MatchId, f: F) -> HttpResponse
where
    F: FnOnce(&mut MatchEntry) -> HttpResponse,
{
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            f(entry)
        }
        None => no_match(),
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "darts-scorer-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Board numbers and ring radii for the SVG renderer.
#[get("/api/board")]
async fn api_board() -> HttpResponse {
    HttpResponse::Ok().json(BoardLayout::standard())
}

/// List all live matches, newest first.
#[get("/api/matches")]
async fn api_list_matches(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let mut summaries: Vec<MatchSummary> = g
        .iter()
        .map(|(id, entry)| MatchSummary {
            id: *id,
            created_at: entry.created_at,
            phase: entry.session.state().phase(),
            players: entry.session.state().players.iter().map(|p| p.name.clone()).collect(),
        })
        .collect();
    summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    HttpResponse::Ok().json(summaries)
}

/// Create a new unstarted match and remember it in the browser session.
#[post("/api/matches")]
async fn api_create_match(state: AppState, session: Session) -> HttpResponse {
    let id = Uuid::new_v4();
    let entry = MatchEntry {
        session: MatchSession::new(),
        created_at: Utc::now(),
        last_activity: Instant::now(),
    };
    let response = match_json(id, &entry);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    g.insert(id, entry);
    if let Err(e) = session.insert(SESSION_MATCH_KEY, id) {
        log::warn!("Could not store match id in session: {}", e);
    }
    log::info!("Created match {}", id);
    response
}

/// The match remembered in this browser's session (404 if none or expired).
#[get("/api/matches/current")]
async fn api_current_match(state: AppState, session: Session) -> HttpResponse {
    match session.get::<MatchId>(SESSION_MATCH_KEY) {
        Ok(Some(id)) => with_match(&state, id, |entry| match_json(id, entry)),
        Ok(None) => no_match(),
        Err(e) => bad_request(e),
    }
}

/// Get a match by id. Touching it refreshes last_activity.
#[get("/api/matches/{id}")]
async fn api_get_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let id = path.id;
    with_match(&state, id, |entry| match_json(id, entry))
}

/// Start the match with players and format (also restarts a finished one).
#[post("/api/matches/{id}/start")]
async fn api_start_match(state: AppState, path: Path<MatchPath>, body: Json<MatchConfig>) -> HttpResponse {
    let id = path.id;
    with_match(&state, id, |entry| match entry.session.start_match(&body) {
        Ok(()) => match_json(id, entry),
        Err(e) => bad_request(e),
    })
}

/// Score one dart. Invalid value/multiplier pairs are rejected with 400 by the Json extractor.
#[post("/api/matches/{id}/throws")]
async fn api_throw(state: AppState, path: Path<MatchPath>, body: Json<Hit>) -> HttpResponse {
    let id = path.id;
    with_match(&state, id, |entry| {
        entry.session.throw(*body);
        match_json(id, entry)
    })
}

/// Score a random dart anywhere on the board.
#[post("/api/matches/{id}/throws/random")]
async fn api_random_throw(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let id = path.id;
    let hit = random_hit(&mut rand::thread_rng());
    with_match(&state, id, |entry| {
        entry.session.throw(hit);
        match_json(id, entry)
    })
}

/// Start the next leg after a checkout.
#[post("/api/matches/{id}/next-leg")]
async fn api_next_leg(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let id = path.id;
    with_match(&state, id, |entry| {
        entry.session.start_next_leg();
        match_json(id, entry)
    })
}

/// Undo the last dart or leg change.
#[post("/api/matches/{id}/undo")]
async fn api_undo(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let id = path.id;
    with_match(&state, id, |entry| match entry.session.undo() {
        Ok(()) => match_json(id, entry),
        Err(e) => bad_request(e),
    })
}

/// New match: back to setup, undo history discarded.
#[post("/api/matches/{id}/reset")]
async fn api_reset(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let id = path.id;
    with_match(&state, id, |entry| {
        entry.session.new_match();
        match_json(id, entry)
    })
}

/// Clear hit highlight and short-lived message (called by the client timer).
#[post("/api/matches/{id}/transient/clear")]
async fn api_clear_transient(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let id = path.id;
    with_match(&state, id, |entry| {
        entry.session.clear_transient();
        match_json(id, entry)
    })
}

/// Darts of the current leg as CSV.
#[get("/api/matches/{id}/history.csv")]
async fn api_history_csv(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    with_match(&state, path.id, |entry| match history_to_csv(entry.session.state()) {
        Ok(csv) => HttpResponse::Ok().content_type("text/csv; charset=utf-8").body(csv),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() })),
    })
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let state = Data::new(RwLock::new(HashMap::<MatchId, MatchEntry>::new()));
    // Sessions only hold a match id, which is useless after a restart, so a per-process key is enough.
    let session_key = Key::generate();

    // Background task: every 30 minutes, remove matches inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive match(es) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::Logger::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), session_key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_board)
            .service(api_list_matches)
            .service(api_create_match)
            .service(api_current_match)
            .service(api_get_match)
            .service(api_start_match)
            .service(api_throw)
            .service(api_random_throw)
            .service(api_next_leg)
            .service(api_undo)
            .service(api_reset)
            .service(api_clear_transient)
            .service(api_history_csv)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
