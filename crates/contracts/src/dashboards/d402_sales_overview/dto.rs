use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::shared::indicators::IndicatorId;

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// Inclusive date interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Both ends are inclusive.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// An inverted range (start after end) contains no dates.
    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }
}

/// Filter selection sent by the dashboard on every interaction.
///
/// An empty `channels` or `product_types` set matches no records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub channels: BTreeSet<String>,
    #[serde(default)]
    pub product_types: BTreeSet<String>,
    pub date_range: DateRange,
}

impl FilterCriteria {
    pub fn new<C, P>(channels: C, product_types: P, date_range: DateRange) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            channels: channels.into_iter().map(Into::into).collect(),
            product_types: product_types.into_iter().map(Into::into).collect(),
            date_range,
        }
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Scalar KPIs of one filter state.
///
/// Averages are `None` when there is nothing to average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesKpis {
    /// Sum of revenue; 0 for an empty selection.
    pub total_sales: f64,
    pub avg_production_time: Option<f64>,
    pub avg_cost_per_unit: Option<f64>,
    pub avg_customer_satisfaction: Option<f64>,
    pub avg_product_rating: Option<f64>,
}

/// One point of a daily trend line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Per-record trend lines ordered by date.
///
/// Records sharing a date stay separate points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailyTrends {
    pub revenue: Vec<TrendPoint>,
    pub production_time: Vec<TrendPoint>,
    pub cost_per_unit: Vec<TrendPoint>,
    pub customer_satisfaction: Vec<TrendPoint>,
    pub product_rating: Vec<TrendPoint>,
}

/// Grouped tables; map keys are sorted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SalesTables {
    /// Channel -> sum of revenue
    pub sales_by_channel: BTreeMap<String, f64>,
    /// Product type -> mean production time
    pub production_time_by_product_type: BTreeMap<String, f64>,
    /// Product type -> mean cost per unit
    pub cost_per_unit_by_product_type: BTreeMap<String, f64>,
    pub daily: DailyTrends,
}

/// Immutable snapshot of every metric for one filter state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    /// Number of records in the filtered view
    pub record_count: usize,
    pub kpis: SalesKpis,
    pub tables: SalesTables,
}

/// KPI value paired with its display text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    pub id: IndicatorId,
    pub label: String,
    pub value: Option<f64>,
    /// e.g. "$1,234.50", "2.50 horas", "4.20/5"
    pub display: String,
}

/// Non-fatal conditions detected while building a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportWarning {
    /// No record matched the criteria.
    EmptyResult,
    /// Selected channel does not occur in the data.
    UnknownChannel { name: String },
    /// Selected product type does not occur in the data.
    UnknownProductType { name: String },
    /// Start date is after end date.
    InvertedDateRange { start: NaiveDate, end: NaiveDate },
}

/// POST /api/d402/report response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesOverviewResponse {
    pub report: SalesReport,
    /// Distinct day names of the filtered records, in order of first appearance
    pub days_of_week: Vec<String>,
    pub kpi_cards: Vec<KpiCard>,
    pub warnings: Vec<ReportWarning>,
}

// ---------------------------------------------------------------------------
// Filter options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

/// Values the dashboard offers in its filter controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Distinct channels, in order of first appearance in the data
    pub channels: Vec<String>,
    /// Distinct product types, in order of first appearance in the data
    pub product_types: Vec<String>,
    /// `None` when no records are loaded
    pub date_bounds: Option<DateBounds>,
    /// All channels, all product types, initial date window
    pub default_criteria: FilterCriteria,
}
