use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};

use crate::{
    dto::catalog::{ActiveCategory, IntersectionRequest, IntersectionResponse, SessionQuery},
    error::AppResult,
    response::{ApiResponse, Meta},
    state::AppState,
    tracker::CategoryTracker,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/active-category", get(active_category))
        .route("/intersections", post(report_intersection))
}

#[utoipa::path(
    get,
    path = "/api/catalog/active-category",
    params(
        ("session_id" = String, Query, description = "Session id rendered into the catalog page")
    ),
    responses(
        (status = 200, description = "Category highlighted in this page's top bar", body = ApiResponse<ActiveCategory>),
        (status = 400, description = "Unknown session"),
    ),
    tag = "Catalog"
)]
pub async fn active_category(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
) -> AppResult<Json<ApiResponse<ActiveCategory>>> {
    let data = ActiveCategory {
        active_category_id: state.categories.active_id(&query.session_id).await?,
    };
    Ok(Json(ApiResponse::success(
        "Active category",
        data,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    post,
    path = "/api/catalog/intersections",
    request_body = IntersectionRequest,
    responses(
        (status = 200, description = "Intersection applied", body = ApiResponse<IntersectionResponse>),
        (status = 400, description = "Unknown session or category, or ratio outside [0, 1]"),
    ),
    tag = "Catalog"
)]
pub async fn report_intersection(
    State(state): State<AppState>,
    Json(payload): Json<IntersectionRequest>,
) -> AppResult<Json<ApiResponse<IntersectionResponse>>> {
    let resp = apply_intersection(&state.categories, payload).await?;
    Ok(Json(resp))
}

pub async fn apply_intersection(
    tracker: &CategoryTracker,
    payload: IntersectionRequest,
) -> AppResult<ApiResponse<IntersectionResponse>> {
    let observation = tracker
        .observe(
            &payload.session_id,
            payload.category_id,
            payload.intersection_ratio,
        )
        .await?;
    Ok(ApiResponse::success(
        "OK",
        IntersectionResponse::from(observation),
        Some(Meta::empty()),
    ))
}
