//! Main entry point for the woodland game server.
//!
//! Parses the port and seed, starts the game session actor, and launches the
//! HTTP server that exposes the game as JSON.

use actix::Actor;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use log::info;

use config::server::BIND_HOST;
use server::game_session::GameSession;

pub mod config;
mod server;
mod game;

/// Serve a single seeded woodland game over HTTP.
#[derive(Parser, Debug)]
#[command(name = "woodland", version, about)]
struct Args {
    /// Port to listen on.
    port: u16,
    /// Seed for board generation. Resets reuse it.
    seed: u64,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize logger from RUST_LOG (default to info level).
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Start the GameSession actor (owns the game, serializes every request).
    let game_session = GameSession::new(args.seed).start();

    // Shared application state for HTTP handlers.
    let state = web::Data::new(server::state::AppState::new(game_session));

    info!("[Server] Listening on {}:{} with seed {}", BIND_HOST, args.port, args.seed);
    HttpServer::new(move || {
        App::new()
            .wrap(server::router::cors_headers())
            .app_data(state.clone())
            .configure(server::router::config)
    })
    .bind((BIND_HOST, args.port))?
    .run()
    .await
}
