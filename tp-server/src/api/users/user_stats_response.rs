use tp_core::RegistrationStats;

use serde::Serialize;

/// Reporting window echoed back with the tallies.
#[derive(Debug, Serialize)]
pub struct StatsPeriod {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Serialize)]
pub struct UserStatsResponse {
    pub new_students: i64,
    pub new_teachers: i64,
    pub confirmed_emails: i64,
    pub period: StatsPeriod,
}

impl UserStatsResponse {
    pub fn new(stats: RegistrationStats, start_date: String, end_date: String) -> Self {
        Self {
            new_students: stats.new_students,
            new_teachers: stats.new_teachers,
            confirmed_emails: stats.confirmed_emails,
            period: StatsPeriod {
                start_date,
                end_date,
            },
        }
    }
}
