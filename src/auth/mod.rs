// Authentication module
// Password-hash-plus-token authentication: registration, login, and a
// bearer-token extractor for protected routes

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use handlers::{current_user_handler, login_handler, logout_handler, register_handler};
pub use middleware::AuthenticatedUser;
pub use models::{AuthResponse, CredentialsRequest, User, UserResponse};
pub use repository::UserRepository;
pub use service::AccountService;
pub use token::TokenService;
