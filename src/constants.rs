use std::time::Duration;

/// Archived snapshot of the Wikipedia "List of largest banks" page.
pub const DEFAULT_SOURCE_URL: &str =
    "https://web.archive.org/web/20230908091635/https://en.wikipedia.org/wiki/List_of_largest_banks";

pub const DEFAULT_EXCHANGE_RATE_PATH: &str = "exchange_rate.csv";
pub const DEFAULT_OUTPUT_CSV_PATH: &str = "Largest_banks_data.csv";
pub const DEFAULT_DATABASE_PATH: &str = "Banks.db";
pub const DEFAULT_TABLE_NAME: &str = "Largest_banks";
pub const DEFAULT_LOG_PATH: &str = "code_log.txt";

/// Bound on the page fetch; the source has no explicit timeout.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Stamp format for progress-log lines, e.g. `2026-Aug-30-14:03:59`.
pub const PROGRESS_STAMP_FORMAT: &str = "%Y-%b-%d-%H:%M:%S";
