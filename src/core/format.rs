use std::fmt;
use std::sync::Arc;

pub type ValueFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Caller-supplied value formatter, typically currency or locale aware.
#[derive(Clone)]
pub struct ValueFormatter(ValueFormatterFn);

impl ValueFormatter {
    pub fn new(formatter: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(formatter))
    }

    #[must_use]
    pub fn format(&self, value: f64) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueFormatter(..)")
    }
}

impl PartialEq for ValueFormatter {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Formats with `custom` when present, otherwise with K/M compact suffixes.
#[must_use]
pub fn format_value(value: f64, custom: Option<&ValueFormatter>) -> String {
    match custom {
        Some(formatter) => formatter.format(value),
        None => format_compact(value),
    }
}

/// Formats with `custom` when present, otherwise as the plain number.
#[must_use]
pub fn format_plain_value(value: f64, custom: Option<&ValueFormatter>) -> String {
    match custom {
        Some(formatter) => formatter.format(value),
        None => format_number(value),
    }
}

/// `1_250_000 -> "1.3M"`, `4_200 -> "4.2K"`, anything below a thousand unchanged.
#[must_use]
pub fn format_compact(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        format_number(value)
    }
}

/// Shortest round-trip decimal form; integral values print without a fraction.
#[must_use]
pub fn format_number(value: f64) -> String {
    // -0.0 would otherwise print as "-0".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{value}")
}
