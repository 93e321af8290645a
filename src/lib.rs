pub mod app;
pub mod binding;
pub mod catalog;
pub mod completion;
pub mod config;
pub mod custom;
pub mod data;
pub mod errors;
pub mod handlers;
pub mod keys;
pub mod models;
pub mod reminders;
pub mod reset;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use catalog::Catalog;
pub use config::Config;
pub use state::AppState;
pub use storage::{FileBackend, Storage};
