pub mod compare;
pub mod loan;
pub mod simple_interest;
pub mod sip;

use chrono::{Local, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use fincalc_core::bounds::InputBounds;

/// Clamp a committed value into its declared range, recording a warning
/// when the value moved.
pub(crate) fn clamp_with_warning(
    field: &str,
    value: Decimal,
    bounds: &InputBounds,
    warnings: &mut Vec<String>,
) -> Decimal {
    let clamped = bounds.clamp(value);
    if clamped != value {
        warnings.push(format!(
            "{field} {value} is outside [{}, {}], using {clamped}",
            bounds.min, bounds.max
        ));
    }
    clamped
}

/// Tenures are whole years; clamp in Decimal space and convert back.
pub(crate) fn clamp_years(
    field: &str,
    years: u32,
    bounds: &InputBounds,
    warnings: &mut Vec<String>,
) -> u32 {
    let clamped = clamp_with_warning(field, Decimal::from(years), bounds, warnings);
    clamped.to_u32().unwrap_or(years)
}

/// Explicit reference date if given, otherwise today.
pub(crate) fn resolve_start_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

/// Write a header row plus records to a CSV file.
pub(crate) fn write_csv<const N: usize>(
    path: &str,
    headers: &[&str; N],
    rows: &[[String; N]],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(headers)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
