//! User REST API handlers

use crate::{ApiResult, StatsQuery, UserInfoResponse, UserStatsResponse};

use tp_service::AppState;

use axum::{
    extract::{Path, Query, State},
    Json,
};

/// GET /api/v1/users/{id}
///
/// Basic profile info. Malformed ids read as absent rather than erroring.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserInfoResponse>> {
    let info = state.credentials().get_basic_info(&id).await?;

    Ok(Json(info.into()))
}

/// GET /api/v1/users/stats?start_date=&end_date=
///
/// Registration tallies over the given window.
pub async fn get_user_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> ApiResult<Json<UserStatsResponse>> {
    let (start, end) = query.parse_window()?;

    let stats = state
        .credentials()
        .get_registration_stats(start, end)
        .await?;

    Ok(Json(UserStatsResponse::new(
        stats,
        query.start_date,
        query.end_date,
    )))
}
