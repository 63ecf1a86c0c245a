use contracts::dashboards::d402_sales_overview::{SalesKpis, SalesReport, SalesTables};

/// Bundle KPIs and tables into one report.
///
/// Daily series carry one point per filtered record, so their length is the
/// record count.
pub fn assemble(kpis: SalesKpis, tables: SalesTables) -> SalesReport {
    SalesReport {
        record_count: tables.daily.revenue.len(),
        kpis,
        tables,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d402_sales_overview::aggregator;
    use crate::dashboards::d402_sales_overview::fixtures::*;

    #[test]
    fn test_assemble_keeps_parts_unchanged() {
        let records = week_records();
        let view: Vec<_> = records.iter().collect();
        let (kpis, tables) = aggregator::summarize(&view);

        let report = assemble(kpis.clone(), tables.clone());
        assert_eq!(report.record_count, records.len());
        assert_eq!(report.kpis, kpis);
        assert_eq!(report.tables, tables);
    }

    #[test]
    fn test_assemble_empty() {
        let (kpis, tables) = aggregator::summarize(&[]);
        let report = assemble(kpis, tables);
        assert_eq!(report.record_count, 0);
        assert_eq!(report.kpis.total_sales, 0.0);
    }
}
