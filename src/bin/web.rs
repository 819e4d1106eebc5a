//! Single binary web server: calendar generation over a JSON API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080).

use actix_web::{
    delete, get, post,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use league_calendar::{
    flatten_calendar, generate_season_calendar, project_live_games, write_csv, CalendarRequest,
    SchedulingError, SeasonCalendar, SeasonId,
};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Stored calendar for a season + last activity time (for auto-cleanup).
struct CalendarEntry {
    calendar: SeasonCalendar,
    last_activity: Instant,
}

/// In-memory state: latest generated calendar per season. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<SeasonId, CalendarEntry>>>;

/// Inactivity threshold: calendars not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segment: season id (e.g. /api/seasons/{id}/calendar)
#[derive(Deserialize)]
struct SeasonPath {
    id: SeasonId,
}

fn scheduling_error(e: &SchedulingError) -> HttpResponse {
    HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string(), "kind": e.kind() }))
}

fn no_calendar() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "No calendar for this season" }))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "league-calendar",
    })
}

/// Generate a calendar without storing it.
#[post("/api/calendar/preview")]
async fn api_preview_calendar(body: Json<CalendarRequest>) -> HttpResponse {
    match generate_season_calendar(&body) {
        Ok(calendar) => HttpResponse::Ok().json(calendar),
        Err(e) => scheduling_error(&e),
    }
}

/// Generate a season's calendar, replacing any calendar generated before.
#[post("/api/seasons/{id}/calendar")]
async fn api_generate_calendar(
    state: AppState,
    path: Path<SeasonPath>,
    body: Json<CalendarRequest>,
) -> HttpResponse {
    // Generation is pure; only the swap needs the lock.
    let calendar = match generate_season_calendar(&body) {
        Ok(c) => c,
        Err(e) => return scheduling_error(&e),
    };
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let replaced = g
        .insert(
            path.id,
            CalendarEntry {
                calendar,
                last_activity: Instant::now(),
            },
        )
        .is_some();
    let entry = &g[&path.id];
    log::info!(
        "Season {}: {} calendar with {} matchday(s)",
        path.id,
        if replaced { "replaced" } else { "stored" },
        entry.calendar.summary.matchdays
    );
    HttpResponse::Ok().json(&entry.calendar)
}

/// Get the stored calendar for a season (404 if none). Touching it refreshes last_activity.
#[get("/api/seasons/{id}/calendar")]
async fn api_get_calendar(state: AppState, path: Path<SeasonPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(&entry.calendar)
        }
        None => no_calendar(),
    }
}

/// Flat calendar records (one row per scheduled match or bye).
#[get("/api/seasons/{id}/calendar/records")]
async fn api_calendar_records(state: AppState, path: Path<SeasonPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(flatten_calendar(&entry.calendar.matchdays))
        }
        None => no_calendar(),
    }
}

/// Flat calendar records as CSV.
#[get("/api/seasons/{id}/calendar/csv")]
async fn api_calendar_csv(state: AppState, path: Path<SeasonPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = match g.get_mut(&path.id) {
        Some(e) => e,
        None => return no_calendar(),
    };
    entry.last_activity = Instant::now();
    let records = flatten_calendar(&entry.calendar.matchdays);
    let mut buf = Vec::new();
    match write_csv(&records, &mut buf) {
        Ok(()) => HttpResponse::Ok().content_type("text/csv; charset=utf-8").body(buf),
        Err(e) => {
            log::error!("CSV export failed for season {}: {}", path.id, e);
            HttpResponse::InternalServerError().json(serde_json::json!({ "error": e.to_string() }))
        }
    }
}

/// Live game seeds for every scheduled (non-bye) match.
#[get("/api/seasons/{id}/calendar/live-games")]
async fn api_calendar_live_games(state: AppState, path: Path<SeasonPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.get_mut(&path.id) {
        Some(entry) => {
            entry.last_activity = Instant::now();
            HttpResponse::Ok().json(project_live_games(&entry.calendar.matchdays))
        }
        None => no_calendar(),
    }
}

/// Remove the stored calendar for a season.
#[delete("/api/seasons/{id}/calendar")]
async fn api_delete_calendar(state: AppState, path: Path<SeasonPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => no_calendar(),
    }
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

    let state = Data::new(RwLock::new(HashMap::<SeasonId, CalendarEntry>::new()));

    // Background task: every 30 minutes, remove calendars inactive for 12+ hours
    let state_cleanup = state.clone();
    tokio::spawn(async move {
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
                log::info!("Cleaned up {} inactive calendar(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().limit(1 << 20))
            .service(api_health)
            .service(api_preview_calendar)
            .service(api_generate_calendar)
            .service(api_get_calendar)
            .service(api_calendar_records)
            .service(api_calendar_csv)
            .service(api_calendar_live_games)
            .service(api_delete_calendar)
    })
    .bind(bind)?
    .run()
    .await
}
