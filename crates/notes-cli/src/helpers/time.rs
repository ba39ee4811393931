//! Wall-clock stamps for created/edited/removed timestamps and due defaults.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

/// Format of the default due date.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of the default due time.
pub const DUE_TIME_FORMAT: &str = "%H:%M";

/// One reading of the clock, rendered three ways.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamps {
    /// Full timestamp stored in `created_at` / `edited_at`
    pub full: String,
    /// Today, used when no due date is given
    pub date: String,
    /// Now, used when no due time is given
    pub time: String,
}

impl Timestamps {
    /// Read the local clock once.
    pub fn now(full_format: &str) -> Self {
        Self::at(&Local::now(), full_format)
    }

    fn at(moment: &DateTime<Local>, full_format: &str) -> Self {
        Self {
            full: moment.format(full_format).to_string(),
            date: moment.format(DUE_DATE_FORMAT).to_string(),
            time: moment.format(DUE_TIME_FORMAT).to_string(),
        }
    }
}

/// Reject strftime patterns chrono cannot render.
pub fn validate_timestamp_format(format: &str) -> anyhow::Result<()> {
    if format.trim().is_empty() {
        return Err(anyhow::anyhow!("Timestamp format cannot be empty"));
    }
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(anyhow::anyhow!("Invalid timestamp format: {}", format));
    }
    Ok(())
}
