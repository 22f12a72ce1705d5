//! Single binary web server: one shared tournament, JSON REST API.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080),
//! STATE_PATH (JSON document path, default tournament.json).

use actix_web::{
    get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use swiss_tournament_web::{
    advance_round, import_players, record_bracket_result, record_swiss_result, standings,
    BracketRound, Contestant, JsonFileStore, PlayerId, Tournament,
};

/// Shared state: the one live tournament plus its backing store. Every
/// mutating handler computes the full next state under the write lock, then
/// fire-and-forget persists it.
struct Shared {
    tournament: RwLock<Tournament>,
    store: JsonFileStore,
}

type AppState = Data<Shared>;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Tournament state response, with a non-fatal notice when persisting failed.
#[derive(Serialize)]
struct ActionResponse<'a> {
    #[serde(flatten)]
    tournament: &'a Tournament,
    #[serde(skip_serializing_if = "Option::is_none")]
    persist_error: Option<String>,
}

#[derive(Serialize)]
struct ImportResponse<'a> {
    imported: usize,
    #[serde(flatten)]
    tournament: &'a Tournament,
    #[serde(skip_serializing_if = "Option::is_none")]
    persist_error: Option<String>,
}

#[derive(Deserialize)]
struct AddPlayerBody {
    name: String,
}

#[derive(Deserialize)]
struct SwissWinnerBody {
    match_index: usize,
    winner_id: PlayerId,
}

#[derive(Deserialize)]
struct BracketWinnerBody {
    round: BracketRound,
    match_index: usize,
    winner: Contestant,
}

/// Path segment: player id (e.g. /api/tournament/players/{player_id}/drop)
#[derive(Deserialize)]
struct PlayerPath {
    player_id: PlayerId,
}

/// Write the state through to the store. Failures are non-fatal: logged,
/// reported in the response, never retried; the in-memory state stands.
fn persist(shared: &Shared, tournament: &Tournament) -> Option<String> {
    match shared.store.save(tournament) {
        Ok(()) => None,
        Err(e) => {
            log::warn!("failed to persist tournament state: {e}");
            Some(e.to_string())
        }
    }
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "swiss-tournament-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Current full tournament state.
#[get("/api/tournament")]
async fn api_get_tournament(state: AppState) -> HttpResponse {
    let g = match state.tournament.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(&*g)
}

/// All players ranked by points descending (dropped players included).
#[get("/api/tournament/standings")]
async fn api_standings(state: AppState) -> HttpResponse {
    let g = match state.tournament.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(standings(&g))
}

/// Register a player. Registration stays open for the whole tournament.
#[post("/api/tournament/players")]
async fn api_add_player(state: AppState, body: Json<AddPlayerBody>) -> HttpResponse {
    let mut g = match state.tournament.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.add_player(body.name.trim()) {
        Ok(()) => {
            let persist_error = persist(&state, &g);
            HttpResponse::Ok().json(ActionResponse {
                tournament: &g,
                persist_error,
            })
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Bulk-register players from a CSV body (first column = name).
#[post("/api/tournament/players/import")]
async fn api_import_players(state: AppState, body: web::Bytes) -> HttpResponse {
    let data = match std::str::from_utf8(&body) {
        Ok(d) => d,
        Err(_) => {
            return HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": "body must be UTF-8 CSV" }))
        }
    };
    let mut g = match state.tournament.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match import_players(&mut g, data) {
        Ok(imported) => {
            let persist_error = persist(&state, &g);
            HttpResponse::Ok().json(ImportResponse {
                imported,
                tournament: &g,
                persist_error,
            })
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Toggle a player's dropped flag (withdraw / rejoin).
#[post("/api/tournament/players/{player_id}/drop")]
async fn api_toggle_drop(state: AppState, path: Path<PlayerPath>) -> HttpResponse {
    let mut g = match state.tournament.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.toggle_drop(path.player_id) {
        Ok(dropped) => {
            log::info!(
                "player {} {}",
                path.player_id,
                if dropped { "dropped" } else { "rejoined" }
            );
            let persist_error = persist(&state, &g);
            HttpResponse::Ok().json(ActionResponse {
                tournament: &g,
                persist_error,
            })
        }
        Err(e) => HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() })),
    }
}

/// Start the tournament, generate the next Swiss round, or finish the Swiss
/// phase and seed the bracket, depending on the current state.
#[post("/api/tournament/advance")]
async fn api_advance(state: AppState) -> HttpResponse {
    let mut g = match state.tournament.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    advance_round(&mut g);
    let persist_error = persist(&state, &g);
    HttpResponse::Ok().json(ActionResponse {
        tournament: &g,
        persist_error,
    })
}

/// Record (or correct) a Swiss match winner.
#[put("/api/tournament/swiss/winner")]
async fn api_swiss_winner(state: AppState, body: Json<SwissWinnerBody>) -> HttpResponse {
    let mut g = match state.tournament.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    record_swiss_result(&mut g, body.match_index, body.winner_id);
    let persist_error = persist(&state, &g);
    HttpResponse::Ok().json(ActionResponse {
        tournament: &g,
        persist_error,
    })
}

/// Record (or toggle off) a bracket match winner; cascades stages.
#[put("/api/tournament/bracket/winner")]
async fn api_bracket_winner(state: AppState, body: Json<BracketWinnerBody>) -> HttpResponse {
    let mut g = match state.tournament.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    record_bracket_result(&mut g, body.round, body.match_index, body.winner);
    let persist_error = persist(&state, &g);
    HttpResponse::Ok().json(ActionResponse {
        tournament: &g,
        persist_error,
    })
}

/// Reset everything: overwrite the stored document with a fresh empty state.
#[post("/api/tournament/reset")]
async fn api_reset(state: AppState) -> HttpResponse {
    let mut g = match state.tournament.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match state.store.reset() {
        Ok(fresh) => {
            *g = fresh;
            log::info!("tournament reset");
            HttpResponse::Ok().json(ActionResponse {
                tournament: &g,
                persist_error: None,
            })
        }
        Err(e) => {
            // Reset locally even when the store write fails; surface the failure.
            *g = Tournament::default();
            log::warn!("failed to reset stored tournament state: {e}");
            HttpResponse::Ok().json(ActionResponse {
                tournament: &g,
                persist_error: Some(e.to_string()),
            })
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_state_path() -> String {
    "tournament.json".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let state_path = std::env::var("STATE_PATH").unwrap_or_else(|_| default_state_path());

    let store = JsonFileStore::new(&state_path);
    // First read: when no document exists yet, store the empty initial state.
    let tournament = match store.load() {
        Ok(Some(t)) => {
            log::info!("Loaded tournament state from {}", state_path);
            t
        }
        Ok(None) => {
            let fresh = Tournament::default();
            if let Err(e) = store.save(&fresh) {
                log::warn!("failed to store initial tournament state: {e}");
            }
            fresh
        }
        Err(e) => {
            log::warn!("failed to load tournament state ({e}); starting from empty state");
            Tournament::default()
        }
    };

    let shared = Data::new(Shared {
        tournament: RwLock::new(tournament),
        store,
    });

    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .app_data(shared.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_tournament)
            .service(api_standings)
            .service(api_add_player)
            .service(api_import_players)
            .service(api_toggle_drop)
            .service(api_advance)
            .service(api_swiss_winner)
            .service(api_bracket_winner)
            .service(api_reset)
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
