use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("parse failed: {0}")]
    Parse(String),

    #[error("missing exchange rate for {0}")]
    MissingRate(String),

    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("query '{sql}' failed: {source}")]
    Query {
        sql: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, EtlError>;
