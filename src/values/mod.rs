// Leadership value catalog module
// Admin-managed CRUD over the cards shown to assessment respondents

pub mod handlers;
pub mod models;
pub mod repository;

pub use handlers::*;
pub use models::*;
pub use repository::*;
