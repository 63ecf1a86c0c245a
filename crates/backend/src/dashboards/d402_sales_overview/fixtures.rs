use chrono::NaiveDate;
use contracts::dashboards::d402_sales_overview::{DateRange, FilterCriteria};
use contracts::domain::a025_sales_record::aggregate::{SalesMeasures, SalesRecord};

use crate::shared::data::record_store::RecordStore;

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// (revenue, production time, cost per unit, satisfaction, rating)
pub fn record(
    day: &str,
    channel: &str,
    product_type: &str,
    measures: (f64, f64, f64, f64, f64),
) -> SalesRecord {
    let (revenue, production_time, cost_per_unit, customer_satisfaction, product_rating) = measures;
    SalesRecord::new(
        date(day),
        channel,
        product_type,
        SalesMeasures {
            revenue,
            production_time,
            cost_per_unit,
            customer_satisfaction,
            product_rating,
        },
    )
}

/// The two-record data set used by the reference scenarios.
pub fn scenario_records() -> Vec<SalesRecord> {
    vec![
        record("2023-01-02", "Online", "T-Shirt", (100.0, 2.0, 20.0, 4.0, 5.0)),
        record("2023-01-03", "Fair", "Hoodie", (50.0, 3.0, 30.0, 3.0, 4.0)),
    ]
}

/// A week of mixed records with repeated dates, out of date order.
pub fn week_records() -> Vec<SalesRecord> {
    vec![
        record("2023-01-04", "Online", "T-Shirt", (120.0, 2.0, 18.0, 4.5, 5.0)),
        record("2023-01-02", "Instagram", "Hoodie", (80.0, 4.0, 35.0, 4.0, 4.0)),
        record("2023-01-02", "Online", "Hoodie", (95.0, 3.5, 32.0, 3.5, 4.5)),
        record("2023-01-05", "Fair", "T-Shirt", (40.0, 1.5, 15.0, 5.0, 4.0)),
        record("2023-01-03", "Online", "Cap", (25.0, 1.0, 8.0, 3.0, 3.5)),
        record("2023-01-07", "Fair", "Hoodie", (60.0, 4.5, 40.0, 2.5, 3.0)),
    ]
}

pub fn store(records: Vec<SalesRecord>) -> RecordStore {
    RecordStore::new(records)
}

pub fn criteria(channels: &[&str], product_types: &[&str], from: &str, to: &str) -> FilterCriteria {
    FilterCriteria::new(
        channels.iter().copied(),
        product_types.iter().copied(),
        DateRange::new(date(from), date(to)),
    )
}

/// All channels and product types of `store`, over its full date span.
pub fn everything(store: &RecordStore) -> FilterCriteria {
    let bounds = store.date_bounds().unwrap();
    FilterCriteria::new(
        store.channels(),
        store.product_types(),
        DateRange::new(bounds.min, bounds.max),
    )
}
