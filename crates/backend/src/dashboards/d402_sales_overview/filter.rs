use contracts::dashboards::d402_sales_overview::{FilterCriteria, ReportWarning};
use contracts::domain::a025_sales_record::aggregate::SalesRecord;

use crate::shared::data::record_store::RecordStore;

/// True when the record passes all three predicates.
pub fn matches(record: &SalesRecord, criteria: &FilterCriteria) -> bool {
    criteria.channels.contains(&record.sales_channel)
        && criteria.product_types.contains(&record.product_type)
        && criteria.date_range.contains(record.date)
}

/// Filtered view of `records`, in input order.
pub fn apply<'a>(records: &'a [SalesRecord], criteria: &FilterCriteria) -> Vec<&'a SalesRecord> {
    records.iter().filter(|r| matches(r, criteria)).collect()
}

/// Selections that can never match anything in `store`.
///
/// Informational only; `apply` does not consult it.
pub fn inspect(store: &RecordStore, criteria: &FilterCriteria) -> Vec<ReportWarning> {
    let mut warnings = Vec::new();

    let channels = store.channels();
    for name in &criteria.channels {
        if !channels.contains(name) {
            warnings.push(ReportWarning::UnknownChannel { name: name.clone() });
        }
    }

    let product_types = store.product_types();
    for name in &criteria.product_types {
        if !product_types.contains(name) {
            warnings.push(ReportWarning::UnknownProductType { name: name.clone() });
        }
    }

    if criteria.date_range.is_inverted() {
        warnings.push(ReportWarning::InvertedDateRange {
            start: criteria.date_range.start,
            end: criteria.date_range.end,
        });
    }

    warnings
}
