pub mod stats_query;
pub mod user_info_response;
pub mod user_stats_response;
pub mod users;
