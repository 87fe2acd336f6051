use chrono::{DateTime, Utc};

pub fn now_timestamp() -> i64 {
    Utc::now().timestamp()
}

/// Formats unix seconds as `dd/mm/YYYY HH:MM` (UTC).
pub fn format_timestamp(secs: i64) -> String {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .map(|dt| dt.format("%d/%m/%Y %H:%M").to_string())
        .unwrap_or_default()
}
