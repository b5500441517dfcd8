//! HTTP handlers for the game endpoints.
//!
//! Each handler forwards to the `GameSession` actor and answers with JSON.

use actix::MailboxError;
use actix_web::http::{Method, StatusCode};
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::json;

use crate::game::Snapshot;
use crate::server::game_session::messages::{ClientAction, GetSnapshot, ProcessClientAction, ResetGame};
use crate::server::http_error::{http_error_response, mailbox_error_response};
use crate::server::state::AppState;

fn snapshot_response(result: Result<Snapshot, MailboxError>) -> HttpResponse {
    match result {
        Ok(snapshot) => HttpResponse::Ok().json(snapshot),
        Err(err) => mailbox_error_response(err),
    }
}

/// `GET /`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

/// `GET /game`
pub async fn get_game(state: web::Data<AppState>) -> HttpResponse {
    snapshot_response(state.game_session.send(GetSnapshot { reveal_all: false }).await)
}

/// `GET /game/debug`: every square shown, hidden or not.
pub async fn get_game_debug(state: web::Data<AppState>) -> HttpResponse {
    snapshot_response(state.game_session.send(GetSnapshot { reveal_all: true }).await)
}

/// `POST /game`. Rejected actions still answer 200; the snapshot status says why.
pub async fn post_action(
    state: web::Data<AppState>,
    body: web::Json<ClientAction>,
) -> HttpResponse {
    let action = body.into_inner();
    snapshot_response(state.game_session.send(ProcessClientAction { action }).await)
}

/// `POST /reset`
pub async fn post_reset(state: web::Data<AppState>) -> HttpResponse {
    snapshot_response(state.game_session.send(ResetGame).await)
}

/// Unmatched paths. Preflight requests are answered everywhere.
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        return HttpResponse::Ok().finish();
    }
    http_error_response("NOT_FOUND", "No such route.", Some(req.path()), StatusCode::NOT_FOUND)
}

/// Known path, unsupported method.
pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    if req.method() == Method::OPTIONS {
        return HttpResponse::Ok().finish();
    }
    http_error_response(
        "METHOD_NOT_ALLOWED",
        &format!("{} is not supported here.", req.method()),
        Some(req.path()),
        StatusCode::METHOD_NOT_ALLOWED,
    )
}

#[cfg(test)]
mod tests {
    use actix::Actor;
    use actix_web::http::header::ContentType;
    use actix_web::{App, test};
    use serde_json::Value;

    use super::*;
    use crate::server::game_session::GameSession;
    use crate::server::router;

    macro_rules! game_app {
        ($seed:expr) => {
            test::init_service(
                App::new()
                    .wrap(router::cors_headers())
                    .app_data(web::Data::new(AppState::new(GameSession::new($seed).start())))
                    .configure(router::config),
            )
            .await
        };
    }

    /// Column of the Rabbit on the bottom row, read from the debug snapshot.
    fn rabbit_col(debug: &Value) -> usize {
        debug["board"][19]
            .as_array()
            .unwrap()
            .iter()
            .position(|square| square[0]["name"] == "Rabbit")
            .unwrap()
    }

    #[actix_web::test]
    async fn test_health() {
        let app = game_app!(1);
        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("Access-Control-Allow-Origin").unwrap(), "*");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[actix_web::test]
    async fn test_get_game_snapshot() {
        let app = game_app!(2);
        let body: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/game").to_request()).await;

        assert_eq!(body["board"].as_array().unwrap().len(), 20);
        assert_eq!(body["currentAnimalTurn"], "Rabbit");
        assert_eq!(body["nextAnimalTurn"], "Fox");
        assert_eq!(body["currentAnimalTurnType"], "move");
        assert_eq!(body["gameOver"], false);
        assert_eq!(body["status"], "");
    }

    #[actix_web::test]
    async fn test_malformed_json_is_400() {
        let app = game_app!(3);
        let req = test::TestRequest::post()
            .uri("/game")
            .insert_header(ContentType::json())
            .set_payload("{\"action\": \"move\", ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MALFORMED_REQUEST");
        assert_eq!(body["error"]["context"], "/game");

        let req = test::TestRequest::post()
            .uri("/game")
            .set_json(json!({ "action": "move", "animal": "Rabbit" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_wrong_animal_leaves_game_unchanged() {
        let app = game_app!(4);
        let before: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/game").to_request()).await;

        let req = test::TestRequest::post()
            .uri("/game")
            .set_json(json!({ "action": "move", "animal": "Fox", "toSquare": { "row": 18, "col": 0 } }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let after: Value = test::read_body_json(resp).await;
        assert_eq!(after["status"], "The last move was invalid.");
        assert_eq!(after["board"], before["board"]);
        assert_eq!(after["currentAnimalTurn"], "Rabbit");
        assert_eq!(after["currentAnimalTurnType"], "move");
    }

    #[actix_web::test]
    async fn test_move_then_reset() {
        let app = game_app!(5);
        let fresh: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/game").to_request()).await;
        let debug: Value =
            test::call_and_read_body_json(&app, test::TestRequest::get().uri("/game/debug").to_request()).await;
        let col = rabbit_col(&debug);

        let req = test::TestRequest::post()
            .uri("/game")
            .set_json(json!({ "action": "move", "animal": "Rabbit", "toSquare": { "row": 18, "col": col } }))
            .to_request();
        let moved: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(moved["status"], "The last move was successful.");
        assert_eq!(moved["currentAnimalTurnType"], "spell");
        assert_eq!(moved["board"][18][col][0]["name"], "Rabbit");

        let reset: Value =
            test::call_and_read_body_json(&app, test::TestRequest::post().uri("/reset").to_request()).await;
        assert_eq!(reset, fresh);
    }

    #[actix_web::test]
    async fn test_preflight_and_unknown_routes() {
        let app = game_app!(6);
        let req = test::TestRequest::default().method(Method::OPTIONS).uri("/game").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("Access-Control-Max-Age").unwrap(), "86400");

        let req = test::TestRequest::default().method(Method::OPTIONS).uri("/anything").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/nowhere").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri("/game").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
