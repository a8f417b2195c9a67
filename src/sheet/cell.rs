//! Cell coercion
//!
//! Spreadsheet cells are loosely typed: a year header may be stored as text
//! or as a number, and statistics sheets mark gaps with `..` or blanks. These
//! helpers turn a cell into the Rust type a loader needs, or `None`.

use calamine::Data;

/// Trimmed, non-empty text of a cell. Integral numbers print without a fraction.
#[must_use]
pub fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 => format!("{f:.0}"),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(_) | Data::Error(_) | Data::Empty => return None,
    };
    (!text.is_empty()).then_some(text)
}

/// Numeric value of a cell; numeric text is parsed, anything else is `None`
#[must_use]
pub fn cell_f64(cell: &Data) -> Option<f64> {
    let value = match cell {
        Data::Float(f) => *f,
        #[allow(clippy::cast_precision_loss)]
        Data::Int(i) => *i as f64,
        Data::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (!value.is_nan()).then_some(value)
}

/// Integral value of a cell. Fractional numbers are rejected.
#[must_use]
pub fn cell_i64(cell: &Data) -> Option<i64> {
    match cell {
        Data::Int(i) => Some(*i),
        Data::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| float_to_i64(s.parse::<f64>().ok()?))
        }
        Data::Float(f) => float_to_i64(*f),
        _ => None,
    }
}

/// Year label of a cell (e.g. `1960`, `"1960"`, `1960.0`)
#[must_use]
pub fn cell_year(cell: &Data) -> Option<i32> {
    cell_i64(cell).and_then(|year| i32::try_from(year).ok())
}

#[allow(clippy::cast_possible_truncation)]
fn float_to_i64(value: f64) -> Option<i64> {
    // Integers beyond 2^53 are not exact in f64
    let in_range = (-9.0e15..=9.0e15).contains(&value);
    (in_range && value.fract() == 0.0).then_some(value as i64)
}
