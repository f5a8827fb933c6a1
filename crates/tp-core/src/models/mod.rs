pub mod basic_info;
pub mod identity;
pub mod registration_stats;
pub mod role_set;
