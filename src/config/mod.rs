/// Main configuration module.
///
/// Re-exports submodules for game rules and server configuration.
pub mod game;
pub mod server;
