use contracts::shared::indicators::ValueFormat;

/// Display text for a KPI that has no data to average.
pub const NO_DATA: &str = "Sin datos";

/// Integer with thousands separated by commas.
///
/// # Examples
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1,234,567");
/// assert_eq!(format_number(42), "42");
/// assert_eq!(format_number(0), "0");
/// ```
pub fn format_number(n: usize) -> String {
    group_thousands(&n.to_string())
}

/// Money with two decimals and grouped thousands.
///
/// ```
/// use backend::shared::format::format_money;
/// assert_eq!(format_money(1234.5), "$1,234.50");
/// ```
pub fn format_money(value: f64) -> String {
    format_money_with(value, "$")
}

pub fn format_money_with(value: f64, currency: &str) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{currency}{}.{frac_part}", group_thousands(int_part))
}

/// Render a KPI value according to its catalogue format.
pub fn format_value(value: Option<f64>, format: &ValueFormat) -> String {
    let Some(value) = value else {
        return NO_DATA.to_string();
    };

    match format {
        ValueFormat::Money { currency } => format_money_with(value, currency),
        ValueFormat::Number { decimals, unit } => {
            let number = format!("{:.*}", *decimals as usize, value);
            match unit {
                Some(unit) => format!("{number} {unit}"),
                None => number,
            }
        }
        ValueFormat::Score { decimals, scale } => {
            format!("{:.*}/{}", *decimals as usize, value, scale)
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}
