pub mod server;
pub mod messages;
pub mod handlers;

pub use server::GameSession;
