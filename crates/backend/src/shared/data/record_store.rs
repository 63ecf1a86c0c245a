use chrono::{NaiveDate, NaiveDateTime};
use contracts::dashboards::d402_sales_overview::DateBounds;
use contracts::domain::a025_sales_record::aggregate::{SalesMeasures, SalesRecord};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const COL_DATE: &str = "Date";
pub const COL_SALES_CHANNEL: &str = "Sales Channel";
pub const COL_PRODUCT_TYPE: &str = "Product Type";
pub const COL_REVENUE: &str = "Revenue";
pub const COL_PRODUCTION_TIME: &str = "Production Time";
pub const COL_COST_PER_UNIT: &str = "Cost per Unit";
pub const COL_CUSTOMER_SATISFACTION: &str = "Customer Satisfaction";
pub const COL_PRODUCT_RATING: &str = "Product Rating";

const COLUMN_COUNT: usize = 8;

pub const REQUIRED_COLUMNS: [&str; COLUMN_COUNT] = [
    COL_DATE,
    COL_SALES_CHANNEL,
    COL_PRODUCT_TYPE,
    COL_REVENUE,
    COL_PRODUCTION_TIME,
    COL_COST_PER_UNIT,
    COL_CUSTOMER_SATISFACTION,
    COL_PRODUCT_RATING,
];

/// Upper bound of the satisfaction and rating scales.
const SCORE_MAX: f64 = 5.0;

/// Errors raised while loading the sales CSV.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("line {line}: empty value in column '{column}'")]
    MissingValue { line: u64, column: &'static str },

    #[error("line {line}: invalid value '{value}' in column '{column}': {reason}")]
    InvalidValue {
        line: u64,
        column: &'static str,
        value: String,
        reason: String,
    },
}

/// In-memory, read-only set of sales records for one dashboard session.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<SalesRecord>,
}

impl RecordStore {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    /// Load and parse the CSV file at `path`.
    pub fn load(path: &Path, date_formats: &[String]) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::from_csv_str(&text, date_formats)?;
        tracing::info!(
            "Loaded {} sales records from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// Parse CSV text; any malformed row fails the whole load.
    pub fn from_csv_str(csv_text: &str, date_formats: &[String]) -> Result<Self, LoadError> {
        // Strip UTF-8 BOM if present
        let text = csv_text.trim_start_matches('\u{FEFF}');

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        let columns = ColumnIndex::resolve(&headers)?;

        let mut records = Vec::new();
        let mut totals = ColumnTotals::default();
        for result in reader.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            let parser = RowParser {
                row: &row,
                columns: &columns,
                line,
            };

            let date = parser.date(date_formats)?;
            let channel = parser.text(Column::SalesChannel)?;
            let product_type = parser.text(Column::ProductType)?;
            let measures = SalesMeasures {
                revenue: parser.non_negative(Column::Revenue)?,
                production_time: parser.non_negative(Column::ProductionTime)?,
                cost_per_unit: parser.non_negative(Column::CostPerUnit)?,
                customer_satisfaction: parser.score(Column::CustomerSatisfaction)?,
                product_rating: parser.score(Column::ProductRating)?,
            };
            totals.add(&parser, &measures)?;

            records.push(SalesRecord::new(date, channel, product_type, measures));
        }

        if records.is_empty() {
            tracing::warn!("Sales CSV contains a header but no records");
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct channels in order of first appearance.
    pub fn channels(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.sales_channel.as_str()))
    }

    /// Distinct product types in order of first appearance.
    pub fn product_types(&self) -> Vec<String> {
        distinct(self.records.iter().map(|r| r.product_type.as_str()))
    }

    /// Earliest and latest record date; `None` for an empty store.
    pub fn date_bounds(&self) -> Option<DateBounds> {
        let min = self.records.iter().map(|r| r.date).min()?;
        let max = self.records.iter().map(|r| r.date).max()?;
        Some(DateBounds { min, max })
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| seen.insert(*v))
        .map(str::to_string)
        .collect()
}

/// Required columns, in the order of `REQUIRED_COLUMNS`.
#[derive(Debug, Clone, Copy)]
enum Column {
    Date,
    SalesChannel,
    ProductType,
    Revenue,
    ProductionTime,
    CostPerUnit,
    CustomerSatisfaction,
    ProductRating,
}

impl Column {
    fn name(self) -> &'static str {
        REQUIRED_COLUMNS[self as usize]
    }
}

/// Position of every required column in the header row.
struct ColumnIndex {
    positions: [usize; COLUMN_COUNT],
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let mut positions = [0usize; COLUMN_COUNT];
        for (slot, column) in positions.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or(LoadError::MissingColumn(column))?;
        }
        Ok(Self { positions })
    }

    fn position(&self, column: Column) -> usize {
        self.positions[column as usize]
    }
}

/// Running sums of absolute values per numeric column.
///
/// Every aggregate over a subset of rows is bounded by these totals, so a
/// finite total keeps all report sums and means finite.
#[derive(Default)]
struct ColumnTotals {
    revenue: f64,
    production_time: f64,
    cost_per_unit: f64,
    customer_satisfaction: f64,
    product_rating: f64,
}

impl ColumnTotals {
    fn add(&mut self, parser: &RowParser<'_>, measures: &SalesMeasures) -> Result<(), LoadError> {
        let columns = [
            (&mut self.revenue, measures.revenue, Column::Revenue),
            (
                &mut self.production_time,
                measures.production_time,
                Column::ProductionTime,
            ),
            (
                &mut self.cost_per_unit,
                measures.cost_per_unit,
                Column::CostPerUnit,
            ),
            (
                &mut self.customer_satisfaction,
                measures.customer_satisfaction,
                Column::CustomerSatisfaction,
            ),
            (
                &mut self.product_rating,
                measures.product_rating,
                Column::ProductRating,
            ),
        ];
        for (total, value, column) in columns {
            *total += value.abs();
            if !total.is_finite() {
                let raw = parser.text(column)?;
                return Err(parser.invalid(column, raw, "column total is not finite"));
            }
        }
        Ok(())
    }
}

struct RowParser<'a> {
    row: &'a csv::StringRecord,
    columns: &'a ColumnIndex,
    line: u64,
}

impl RowParser<'_> {
    fn text(&self, column: Column) -> Result<&str, LoadError> {
        self.row
            .get(self.columns.position(column))
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(LoadError::MissingValue {
                line: self.line,
                column: column.name(),
            })
    }

    fn invalid(&self, column: Column, value: &str, reason: impl Into<String>) -> LoadError {
        LoadError::InvalidValue {
            line: self.line,
            column: column.name(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    fn date(&self, formats: &[String]) -> Result<NaiveDate, LoadError> {
        let raw = self.text(Column::Date)?;
        parse_date(raw, formats).ok_or_else(|| {
            self.invalid(
                Column::Date,
                raw,
                format!("expected one of the formats {}", formats.join(", ")),
            )
        })
    }

    /// Parsed value together with the cell text it came from.
    fn number(&self, column: Column) -> Result<(&str, f64), LoadError> {
        let raw = self.text(column)?;
        let value: f64 = raw
            .parse()
            .map_err(|e| self.invalid(column, raw, format!("{e}")))?;
        if !value.is_finite() {
            return Err(self.invalid(column, raw, "value must be finite"));
        }
        Ok((raw, value))
    }

    fn non_negative(&self, column: Column) -> Result<f64, LoadError> {
        let (raw, value) = self.number(column)?;
        if value < 0.0 {
            return Err(self.invalid(column, raw, "value must not be negative"));
        }
        Ok(value)
    }

    fn score(&self, column: Column) -> Result<f64, LoadError> {
        let (_, value) = self.number(column)?;
        if !(0.0..=SCORE_MAX).contains(&value) {
            tracing::warn!(
                "line {}: {} = {} is outside the expected 0-{} range",
                self.line,
                column.name(),
                value,
                SCORE_MAX
            );
        }
        Ok(value)
    }
}

/// Try each format in order; datetime formats keep only the date part.
pub fn parse_date(raw: &str, formats: &[String]) -> Option<NaiveDate> {
    formats
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            formats
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
}
