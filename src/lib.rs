//! In-memory asset advisor services: CRUD over assets, contributions, goals
//! and survey answers, plus portfolio aggregation and investment suggestions.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::ApiError;
pub use router::{advisor_router, portfolio_router};
pub use state::AppState;
pub use store::Store;
