use axum::{extract::State, Json};
use contracts::shared::indicators::*;

use crate::shared::app_state::AppState;

/// GET /api/indicators/meta
///
/// Returns the catalogue of KPIs, charts and sets.
pub async fn get_indicator_catalog(
    State(state): State<AppState>,
) -> Json<IndicatorCatalogResponse> {
    Json(state.session.catalog().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d402_sales_overview::SalesSession;
    use crate::shared::data::record_store::RecordStore;
    use chrono::NaiveDate;
    use contracts::dashboards::d402_sales_overview::DateRange;

    #[tokio::test]
    async fn test_catalog_handler() {
        let day = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
        let state = AppState::new(SalesSession::new(
            RecordStore::default(),
            DateRange::new(day, day),
        ));

        let Json(catalog) = get_indicator_catalog(State(state)).await;
        assert_eq!(catalog.indicators.len(), 5);
        assert_eq!(catalog.charts.len(), 8);
        assert_eq!(catalog.sets.len(), 1);
    }
}
