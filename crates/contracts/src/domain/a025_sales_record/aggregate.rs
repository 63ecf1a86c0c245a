use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// One sales row (a025).
///
/// Created once when the CSV is loaded and never mutated afterwards.
/// `day_of_week` is derived from `date` and is not read from the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub day_of_week: Weekday,

    // Dimensions
    pub sales_channel: String,
    pub product_type: String,

    // Measures
    /// Revenue of the sale, never negative.
    pub revenue: f64,
    /// Production time in hours, never negative.
    pub production_time: f64,
    /// Cost per produced unit, never negative.
    pub cost_per_unit: f64,
    /// Customer satisfaction score, expected in 0..=5.
    pub customer_satisfaction: f64,
    /// Product rating, expected in 0..=5.
    pub product_rating: f64,
}

/// Measures of a [`SalesRecord`], grouped to keep the constructor readable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SalesMeasures {
    pub revenue: f64,
    pub production_time: f64,
    pub cost_per_unit: f64,
    pub customer_satisfaction: f64,
    pub product_rating: f64,
}

impl SalesRecord {
    pub fn new(
        date: NaiveDate,
        sales_channel: impl Into<String>,
        product_type: impl Into<String>,
        measures: SalesMeasures,
    ) -> Self {
        Self {
            date,
            day_of_week: date.weekday(),
            sales_channel: sales_channel.into(),
            product_type: product_type.into(),
            revenue: measures.revenue,
            production_time: measures.production_time,
            cost_per_unit: measures.cost_per_unit,
            customer_satisfaction: measures.customer_satisfaction,
            product_rating: measures.product_rating,
        }
    }

    /// Full English day name ("Monday", "Tuesday", ...).
    pub fn day_name(&self) -> &'static str {
        day_name(self.day_of_week)
    }
}

pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
