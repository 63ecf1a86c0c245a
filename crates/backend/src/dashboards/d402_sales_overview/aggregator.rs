use contracts::dashboards::d402_sales_overview::{DailyTrends, SalesKpis, SalesTables, TrendPoint};
use contracts::domain::a025_sales_record::aggregate::SalesRecord;
use std::collections::{BTreeMap, HashSet};

/// Running sum/count for an arithmetic mean.
#[derive(Debug, Clone, Copy, Default)]
struct MeanAcc {
    sum: f64,
    count: usize,
}

impl MeanAcc {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    /// `None` when nothing was pushed.
    fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as f64)
        }
    }
}

fn mean_of<'a>(
    records: &[&'a SalesRecord],
    field: impl Fn(&'a SalesRecord) -> f64,
) -> Option<f64> {
    let mut acc = MeanAcc::default();
    for record in records {
        acc.push(field(*record));
    }
    acc.mean()
}

/// Per-group mean of `field`, keyed by `key`.
fn group_mean<'a>(
    records: &[&'a SalesRecord],
    key: impl Fn(&'a SalesRecord) -> &'a str,
    field: impl Fn(&'a SalesRecord) -> f64,
) -> BTreeMap<String, f64> {
    let mut groups: BTreeMap<&str, MeanAcc> = BTreeMap::new();
    for record in records {
        groups.entry(key(*record)).or_default().push(field(*record));
    }

    groups
        .into_iter()
        .filter_map(|(k, acc)| acc.mean().map(|m| (k.to_string(), m)))
        .collect()
}

/// Scalar KPIs of the filtered view.
pub fn kpis(records: &[&SalesRecord]) -> SalesKpis {
    SalesKpis {
        total_sales: records.iter().map(|r| r.revenue).sum(),
        avg_production_time: mean_of(records, |r| r.production_time),
        avg_cost_per_unit: mean_of(records, |r| r.cost_per_unit),
        avg_customer_satisfaction: mean_of(records, |r| r.customer_satisfaction),
        avg_product_rating: mean_of(records, |r| r.product_rating),
    }
}

/// Revenue per channel.
pub fn sales_by_channel(records: &[&SalesRecord]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.sales_channel.clone()).or_insert(0.0) += record.revenue;
    }
    totals
}

/// One point per record, stable-sorted by date; equal dates are not merged.
pub fn daily_trends(records: &[&SalesRecord]) -> DailyTrends {
    let mut by_date: Vec<&SalesRecord> = records.to_vec();
    by_date.sort_by_key(|r| r.date);

    let series = |field: fn(&SalesRecord) -> f64| -> Vec<TrendPoint> {
        by_date
            .iter()
            .map(|r| TrendPoint {
                date: r.date,
                value: field(*r),
            })
            .collect()
    };

    DailyTrends {
        revenue: series(|r| r.revenue),
        production_time: series(|r| r.production_time),
        cost_per_unit: series(|r| r.cost_per_unit),
        customer_satisfaction: series(|r| r.customer_satisfaction),
        product_rating: series(|r| r.product_rating),
    }
}

/// Grouped tables of the filtered view.
pub fn tables(records: &[&SalesRecord]) -> SalesTables {
    SalesTables {
        sales_by_channel: sales_by_channel(records),
        production_time_by_product_type: group_mean(
            records,
            |r| r.product_type.as_str(),
            |r| r.production_time,
        ),
        cost_per_unit_by_product_type: group_mean(
            records,
            |r| r.product_type.as_str(),
            |r| r.cost_per_unit,
        ),
        daily: daily_trends(records),
    }
}

/// KPIs and tables, all computed from the same filtered view.
pub fn summarize(records: &[&SalesRecord]) -> (SalesKpis, SalesTables) {
    (kpis(records), tables(records))
}

/// Distinct day names ("Monday", ...) in order of first appearance.
pub fn days_of_week(records: &[&SalesRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.day_of_week))
        .map(|r| r.day_name().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d402_sales_overview::filter;
    use crate::dashboards::d402_sales_overview::fixtures::*;

    fn refs(records: &[SalesRecord]) -> Vec<&SalesRecord> {
        records.iter().collect()
    }

    #[test]
    fn test_reference_scenario() {
        let records = scenario_records();
        let filtered = filter::apply(
            &records,
            &criteria(&["Online"], &["T-Shirt"], "2023-01-02", "2023-01-06"),
        );
        let (kpis, tables) = summarize(&filtered);

        assert_eq!(kpis.total_sales, 100.0);
        assert_eq!(kpis.avg_production_time, Some(2.0));
        assert_eq!(kpis.avg_cost_per_unit, Some(20.0));
        assert_eq!(kpis.avg_customer_satisfaction, Some(4.0));
        assert_eq!(kpis.avg_product_rating, Some(5.0));
        assert_eq!(
            tables.sales_by_channel,
            BTreeMap::from([("Online".to_string(), 100.0)])
        );
    }

    #[test]
    fn test_empty_view_uses_no_data_sentinel() {
        let (kpis, tables) = summarize(&[]);

        assert_eq!(kpis.total_sales, 0.0);
        assert_eq!(kpis.avg_production_time, None);
        assert_eq!(kpis.avg_cost_per_unit, None);
        assert_eq!(kpis.avg_customer_satisfaction, None);
        assert_eq!(kpis.avg_product_rating, None);
        assert!(tables.sales_by_channel.is_empty());
        assert!(tables.production_time_by_product_type.is_empty());
        assert!(tables.cost_per_unit_by_product_type.is_empty());
        assert!(tables.daily.revenue.is_empty());
        assert!(tables.daily.product_rating.is_empty());
    }

    #[test]
    fn test_total_reconciles_with_channel_breakdown() {
        let records = week_records();
        let (kpis, tables) = summarize(&refs(&records));

        let channel_sum: f64 = tables.sales_by_channel.values().sum();
        assert!((kpis.total_sales - channel_sum).abs() < 1e-9);
        assert_eq!(kpis.total_sales, 420.0);
        assert_eq!(tables.sales_by_channel["Online"], 240.0);
        assert_eq!(tables.sales_by_channel["Fair"], 100.0);
        assert_eq!(tables.sales_by_channel["Instagram"], 80.0);
    }

    #[test]
    fn test_product_type_means() {
        let records = week_records();
        let tables = tables(&refs(&records));

        assert_eq!(
            tables.production_time_by_product_type,
            BTreeMap::from([
                ("Cap".to_string(), 1.0),
                ("Hoodie".to_string(), 4.0),
                ("T-Shirt".to_string(), 1.75),
            ])
        );
        assert_eq!(
            tables.cost_per_unit_by_product_type,
            BTreeMap::from([
                ("Cap".to_string(), 8.0),
                ("Hoodie".to_string(), 107.0 / 3.0),
                ("T-Shirt".to_string(), 16.5),
            ])
        );
    }

    #[test]
    fn test_daily_trends_keep_duplicate_dates_in_input_order() {
        let records = week_records();
        let daily = daily_trends(&refs(&records));

        let points: Vec<_> = daily.revenue.iter().map(|p| (p.date, p.value)).collect();
        assert_eq!(
            points,
            vec![
                (date("2023-01-02"), 80.0),
                (date("2023-01-02"), 95.0),
                (date("2023-01-03"), 25.0),
                (date("2023-01-04"), 120.0),
                (date("2023-01-05"), 40.0),
                (date("2023-01-07"), 60.0),
            ]
        );
        assert_eq!(daily.production_time.len(), records.len());
        assert_eq!(daily.product_rating[1].value, 4.5);
        assert_eq!(daily.customer_satisfaction[0].value, 4.0);
        assert_eq!(daily.cost_per_unit[5].value, 40.0);
    }

    #[test]
    fn test_full_selection_reproduces_store_totals() {
        let store = store(week_records());
        let filtered = filter::apply(store.records(), &everything(&store));

        assert_eq!(filtered.len(), store.len());
        assert_eq!(summarize(&filtered), summarize(&refs(store.records())));
    }

    #[test]
    fn test_days_of_week_first_appearance() {
        let records = week_records();
        let days = days_of_week(&refs(&records));
        // 2023-01-04 Wed, 01-02 Mon, 01-05 Thu, 01-03 Tue, 01-07 Sat
        assert_eq!(
            days,
            vec!["Wednesday", "Monday", "Thursday", "Tuesday", "Saturday"]
        );
        assert!(days_of_week(&[]).is_empty());
    }
}
