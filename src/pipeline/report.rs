use rusqlite::types::ValueRef;
use rusqlite::Connection;

use crate::error::{EtlError, Result};

/// Executes one diagnostic query and prints the SQL text followed by its
/// full result set. Pass-through only; any failure aborts the run as a
/// `Query` error carrying the offending statement.
pub fn run_query(conn: &Connection, sql: &str) -> Result<()> {
    println!("{sql}");
    let rendered = render_query(conn, sql).map_err(|source| EtlError::Query {
        sql: sql.to_string(),
        source,
    })?;
    println!("{rendered}");
    Ok(())
}

fn render_query(conn: &Connection, sql: &str) -> rusqlite::Result<String> {
    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt.column_names().iter().map(|c| c.to_string()).collect();

    let mut lines = vec![columns.join(" | ")];
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let cells: Vec<String> = (0..columns.len())
            .map(|i| row.get_ref(i).map(render_value))
            .collect::<rusqlite::Result<_>>()?;
        lines.push(cells.join(" | "));
    }

    Ok(lines.join("\n"))
}

fn render_value(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => format!("<{} bytes>", b.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(
            r#"
            CREATE TABLE Largest_banks (Name TEXT, MC_GBP_Billion REAL);
            INSERT INTO Largest_banks VALUES ('Bank A', 80.0), ('Bank B', 40.0);
            "#,
        )
        .unwrap();
        conn
    }

    #[test]
    fn renders_header_and_all_rows() {
        let conn = seeded_connection();
        let out = render_query(&conn, "SELECT * FROM Largest_banks").unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Name | MC_GBP_Billion");
        assert_eq!(lines[1], "Bank A | 80");
        assert_eq!(lines[2], "Bank B | 40");
    }

    #[test]
    fn renders_aggregate_result() {
        let conn = seeded_connection();
        let out =
            render_query(&conn, "SELECT AVG(MC_GBP_Billion) FROM Largest_banks").unwrap();
        assert!(out.lines().nth(1).unwrap().starts_with("60"));
    }

    #[test]
    fn failed_query_carries_the_sql_text() {
        let conn = seeded_connection();
        match run_query(&conn, "SELECT * FROM missing_table") {
            Err(EtlError::Query { sql, .. }) => {
                assert_eq!(sql, "SELECT * FROM missing_table");
            }
            other => panic!("expected Query error, got {other:?}"),
        }
    }
}
