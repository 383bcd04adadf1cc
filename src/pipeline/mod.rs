pub mod extract;
pub mod load;
pub mod report;
pub mod transform;

use rusqlite::Connection;
use tracing::info;

use crate::config::Config;
use crate::error::{EtlError, Result};
use crate::progress::ProgressLog;
use crate::types::ExchangeRates;

/// Runs the full extract → transform → load → report pass. Strictly linear;
/// the first failing stage aborts the run, leaving the progress log at the
/// last completed milestone.
pub fn run(config: &Config, progress: &dyn ProgressLog) -> Result<()> {
    progress.milestone("Preliminaries complete. Initiating ETL process")?;

    let html = extract::fetch_page(&config.source_url)?;
    let banks = extract::parse_banks(&html)?;
    info!(rows = banks.len(), "extracted bank table");
    progress.milestone("Data extraction complete. Initiating Transformation process")?;

    let rates = ExchangeRates::from_csv(&config.exchange_rate_path)?;
    let rows = transform::transform(&banks, &rates)?;
    progress.milestone("Data transformation complete. Initiating Loading process")?;

    load::load_to_csv(&rows, &config.output_csv_path)?;
    progress.milestone("Data saved to CSV file")?;

    let mut conn = Connection::open(&config.database_path)?;
    progress.milestone("SQL Connection initiated")?;

    load::load_to_db(&rows, &mut conn, &config.table_name)?;
    progress.milestone("Data loaded to Database as a table, Executing queries")?;

    report::run_query(&conn, &format!("SELECT * FROM {}", config.table_name))?;
    report::run_query(
        &conn,
        &format!("SELECT AVG(MC_GBP_Billion) FROM {}", config.table_name),
    )?;
    report::run_query(
        &conn,
        &format!("SELECT Name FROM {} LIMIT 5", config.table_name),
    )?;
    progress.milestone("Process Complete")?;

    // Error paths above release the connection on drop; the happy path
    // closes explicitly so close failures are reported.
    conn.close().map_err(|(_, e)| EtlError::Store(e))?;
    progress.milestone("Server Connection closed")?;

    info!("ETL run complete");
    Ok(())
}
