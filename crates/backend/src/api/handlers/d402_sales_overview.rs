use axum::{extract::State, Json};
use contracts::dashboards::d402_sales_overview::{
    FilterCriteria, ReportOptions, SalesOverviewResponse,
};

use crate::shared::app_state::AppState;

/// GET /api/d402/options
pub async fn get_options(State(state): State<AppState>) -> Json<ReportOptions> {
    let options = state.session.options();
    tracing::info!(
        "D402 Dashboard: {} channels, {} product types available",
        options.channels.len(),
        options.product_types.len()
    );
    Json(options)
}

/// POST /api/d402/report
///
/// Recomputes the whole report for the posted filter selection.
pub async fn post_report(
    State(state): State<AppState>,
    Json(criteria): Json<FilterCriteria>,
) -> Json<SalesOverviewResponse> {
    tracing::info!(
        "D402 Dashboard: report for {}..{}",
        criteria.date_range.start,
        criteria.date_range.end
    );
    Json(state.session.recompute(&criteria))
}

/// GET /api/d402/report/default
pub async fn get_default_report(State(state): State<AppState>) -> Json<SalesOverviewResponse> {
    let criteria = state.session.default_criteria();
    Json(state.session.recompute(&criteria))
}
