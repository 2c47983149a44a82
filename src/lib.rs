pub mod config;
pub mod email;
pub mod error;
pub mod notification;
pub mod observability;
pub mod routes;
pub mod server;
pub mod submission;

pub use config::Config;
pub use routes::AppState;
pub use server::app;
