// Assessment submissions module
// Public submission intake plus authenticated listing, filtering, and
// CSV export

pub mod export;
pub mod handlers;
pub mod models;
pub mod repository;

pub use export::*;
pub use handlers::*;
pub use models::*;
pub use repository::*;
