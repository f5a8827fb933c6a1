pub mod app_state;
pub mod credential_service;
pub mod email_status;
pub mod error;
pub mod mailer;
pub mod registration;
pub mod session;

pub use app_state::AppState;
pub use credential_service::CredentialService;
pub use email_status::EmailStatus;
pub use error::{Result, ServiceError};
pub use mailer::{LogMailer, MailError, Mailer};
pub use registration::Registration;
pub use session::{Session, UserSummary};
