use rusqlite::{params, Connection};
use tracing::debug;

use std::path::Path;

use crate::error::Result;
use crate::types::TransformedBank;

/// Serializes the full row set to a CSV file, truncating any existing file
/// at the path. Header and column order are fixed by `TransformedBank`'s
/// field order: Name, MC_USD_Billion, MC_GBP_Billion, MC_EUR_Billion,
/// MC_INR_Billion.
pub fn load_to_csv(rows: &[TransformedBank], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    debug!(rows = rows.len(), path = %path.display(), "wrote CSV output");
    Ok(())
}

/// Writes the row set into the named table, dropping and recreating it so a
/// rerun replaces rather than appends. All statements run in one
/// transaction.
pub fn load_to_db(rows: &[TransformedBank], conn: &mut Connection, table: &str) -> Result<()> {
    let tx = conn.transaction()?;
    tx.execute_batch(&format!(
        r#"
        DROP TABLE IF EXISTS "{table}";
        CREATE TABLE "{table}" (
            Name           TEXT NOT NULL,
            MC_USD_Billion REAL NOT NULL,
            MC_GBP_Billion REAL NOT NULL,
            MC_EUR_Billion REAL NOT NULL,
            MC_INR_Billion REAL NOT NULL
        );
        "#
    ))?;

    {
        let mut stmt = tx.prepare(&format!(
            "INSERT INTO \"{table}\" \
             (Name, MC_USD_Billion, MC_GBP_Billion, MC_EUR_Billion, MC_INR_Billion) \
             VALUES (?1, ?2, ?3, ?4, ?5)"
        ))?;
        for row in rows {
            stmt.execute(params![
                row.name,
                row.mc_usd_billion,
                row.mc_gbp_billion,
                row.mc_eur_billion,
                row.mc_inr_billion,
            ])?;
        }
    }

    tx.commit()?;
    debug!(rows = rows.len(), table, "loaded table");
    Ok(())
}
