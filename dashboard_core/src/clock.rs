//! Wall-clock text shown in the top-right corner.

use jiff::Zoned;

const CLOCK_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time, e.g. `2025-01-31 23:59:07`.
pub fn local_timestamp() -> String {
    format_timestamp(&Zoned::now())
}

pub fn format_timestamp(at: &Zoned) -> String {
    at.strftime(CLOCK_FORMAT).to_string()
}
