use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{EtlError, Result};

/// One row of the extracted bank table, in page order.
#[derive(Debug, Clone, PartialEq)]
pub struct Bank {
    pub name: String,
    pub mc_usd_billion: f64,
}

/// A bank row with the three derived currency columns. Field order is the
/// CSV/database column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformedBank {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "MC_USD_Billion")]
    pub mc_usd_billion: f64,
    #[serde(rename = "MC_GBP_Billion")]
    pub mc_gbp_billion: f64,
    #[serde(rename = "MC_EUR_Billion")]
    pub mc_eur_billion: f64,
    #[serde(rename = "MC_INR_Billion")]
    pub mc_inr_billion: f64,
}

/// Currency-code → rate lookup, loaded once per run and immutable after.
#[derive(Debug, Clone)]
pub struct ExchangeRates {
    rates: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct RateRecord {
    #[serde(rename = "Currency")]
    currency: String,
    #[serde(rename = "Rate")]
    rate: f64,
}

impl ExchangeRates {
    /// Reads a two-column `Currency,Rate` CSV file.
    pub fn from_csv(path: &Path) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut rates = HashMap::new();
        for record in reader.deserialize() {
            let record: RateRecord = record?;
            rates.insert(record.currency, record.rate);
        }
        Ok(Self { rates })
    }

    pub fn get(&self, code: &str) -> Result<f64> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| EtlError::MissingRate(code.to_string()))
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Self {
        Self {
            rates: pairs.iter().map(|(c, r)| (c.to_string(), *r)).collect(),
        }
    }
}
