// Email relay module
// Delivers the respondent's PDF report through the SMTP collaborator

pub mod handlers;
pub mod models;
pub mod service;

pub use handlers::send_pdf_email_handler;
pub use models::{CoreValueItem, RecipientInfo, SendPdfEmailRequest};
pub use service::EmailService;
