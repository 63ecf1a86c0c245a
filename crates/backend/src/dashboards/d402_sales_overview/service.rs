use contracts::dashboards::d402_sales_overview::{
    DateRange, FilterCriteria, ReportOptions, ReportWarning, SalesOverviewResponse,
};
use contracts::shared::indicators::IndicatorCatalogResponse;

use super::{aggregator, filter, report};
use crate::shared::data::record_store::RecordStore;
use crate::shared::indicators::{metadata, registry::IndicatorRegistry};

/// Loaded records plus dashboard defaults, shared read-only between requests.
pub struct SalesSession {
    store: RecordStore,
    default_window: DateRange,
    catalog: IndicatorCatalogResponse,
    registry: IndicatorRegistry,
}

impl SalesSession {
    pub fn new(store: RecordStore, default_window: DateRange) -> Self {
        Self {
            store,
            default_window,
            catalog: metadata::build_catalog(),
            registry: IndicatorRegistry::new(),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn catalog(&self) -> &IndicatorCatalogResponse {
        &self.catalog
    }

    /// All channels, all product types, configured initial window.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::new(
            self.store.channels(),
            self.store.product_types(),
            self.default_window,
        )
    }

    /// Values for the dashboard filter controls.
    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            channels: self.store.channels(),
            product_types: self.store.product_types(),
            date_bounds: self.store.date_bounds(),
            default_criteria: self.default_criteria(),
        }
    }

    /// Run the whole pipeline for one filter state.
    pub fn recompute(&self, criteria: &FilterCriteria) -> SalesOverviewResponse {
        let filtered = filter::apply(self.store.records(), criteria);
        let mut warnings = filter::inspect(&self.store, criteria);

        if filtered.is_empty() {
            tracing::warn!(
                "D402 Dashboard: no records match {} channel(s), {} product type(s), {}..{}",
                criteria.channels.len(),
                criteria.product_types.len(),
                criteria.date_range.start,
                criteria.date_range.end
            );
            warnings.insert(0, ReportWarning::EmptyResult);
        }

        let (kpis, tables) = aggregator::summarize(&filtered);
        let days_of_week = aggregator::days_of_week(&filtered);
        let kpi_cards = self.registry.cards(&kpis, &self.catalog);
        let report = report::assemble(kpis, tables);

        tracing::info!(
            "D402 Dashboard: {} of {} records selected, total sales {:.2}",
            report.record_count,
            self.store.len(),
            report.kpis.total_sales
        );

        SalesOverviewResponse {
            report,
            days_of_week,
            kpi_cards,
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d402_sales_overview::fixtures::*;
    use crate::shared::format::NO_DATA;
    use contracts::domain::a025_sales_record::aggregate::SalesRecord;
    use std::collections::BTreeMap;

    fn session(records: Vec<SalesRecord>) -> SalesSession {
        SalesSession::new(
            store(records),
            DateRange::new(date("2023-01-02"), date("2023-01-06")),
        )
    }

    #[test]
    fn test_reference_scenario() {
        let session = session(scenario_records());
        let response = session.recompute(&criteria(
            &["Online"],
            &["T-Shirt"],
            "2023-01-02",
            "2023-01-06",
        ));

        assert_eq!(response.report.record_count, 1);
        assert_eq!(response.report.kpis.total_sales, 100.0);
        assert_eq!(
            response.report.tables.sales_by_channel,
            BTreeMap::from([("Online".to_string(), 100.0)])
        );
        assert_eq!(response.days_of_week, vec!["Monday"]);
        assert_eq!(response.kpi_cards[0].display, "$100.00");
        assert!(response.warnings.is_empty());
    }

    #[test]
    fn test_window_without_data() {
        let session = session(scenario_records());
        let response = session.recompute(&criteria(
            &["Online"],
            &["T-Shirt"],
            "2023-01-10",
            "2023-01-15",
        ));

        assert_eq!(response.report.record_count, 0);
        assert_eq!(response.report.kpis.total_sales, 0.0);
        assert_eq!(response.report.kpis.avg_product_rating, None);
        assert!(response.report.tables.sales_by_channel.is_empty());
        assert!(response.days_of_week.is_empty());
        assert_eq!(response.warnings, vec![ReportWarning::EmptyResult]);
        assert!(response.kpi_cards[1..].iter().all(|c| c.display == NO_DATA));
    }

    #[test]
    fn test_default_criteria_selects_everything_in_window() {
        let session = session(week_records());
        let defaults = session.default_criteria();

        assert_eq!(defaults.channels.len(), 3);
        assert_eq!(defaults.product_types.len(), 3);
        assert_eq!(defaults.date_range.start, date("2023-01-02"));
        assert_eq!(defaults.date_range.end, date("2023-01-06"));

        // 2023-01-07 falls outside the initial window
        let response = session.recompute(&defaults);
        assert_eq!(response.report.record_count, 5);
        assert_eq!(response.report.kpis.total_sales, 360.0);
    }

    #[test]
    fn test_options() {
        let session = session(week_records());
        let options = session.options();

        assert_eq!(options.channels, vec!["Online", "Instagram", "Fair"]);
        assert_eq!(options.product_types, vec!["T-Shirt", "Hoodie", "Cap"]);
        let bounds = options.date_bounds.unwrap();
        assert_eq!(bounds.min, date("2023-01-02"));
        assert_eq!(bounds.max, date("2023-01-07"));
        assert_eq!(options.default_criteria, session.default_criteria());
    }

    #[test]
    fn test_empty_store_still_reports() {
        let session = session(Vec::new());
        let options = session.options();
        assert!(options.date_bounds.is_none());

        let response = session.recompute(&options.default_criteria);
        assert_eq!(response.report.record_count, 0);
        assert_eq!(response.warnings, vec![ReportWarning::EmptyResult]);
    }

    #[test]
    fn test_full_selection_matches_whole_store() {
        let session = session(week_records());
        let response = session.recompute(&everything(session.store()));

        let view: Vec<_> = session.store().records().iter().collect();
        let (kpis, tables) = aggregator::summarize(&view);
        assert_eq!(response.report, report::assemble(kpis, tables));
        assert!(response.warnings.is_empty());
    }

    #[test]
    fn test_recompute_is_repeatable() {
        let session = session(week_records());
        let selection = criteria(&["Online", "Fair"], &["Hoodie"], "2023-01-01", "2023-01-31");
        assert_eq!(session.recompute(&selection), session.recompute(&selection));
    }
}
