pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::basic_info::BasicInfo;
pub use models::identity::Identity;
pub use models::registration_stats::RegistrationStats;
pub use models::role_set::{RoleSet, MAX_ROLES};

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
