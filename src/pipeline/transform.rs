use crate::error::Result;
use crate::types::{Bank, ExchangeRates, TransformedBank};

/// Rounds to two decimal places, half away from zero (`f64::round`), so
/// 0.125 becomes 0.13. Documented here because round-half-to-even would
/// differ at exactly-representable .005 boundaries.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derives the GBP/EUR/INR columns for every bank. Pure: same cardinality
/// and order as the input, no I/O. Any missing target rate fails the whole
/// run before a single row is produced.
pub fn transform(banks: &[Bank], rates: &ExchangeRates) -> Result<Vec<TransformedBank>> {
    let gbp = rates.get("GBP")?;
    let eur = rates.get("EUR")?;
    let inr = rates.get("INR")?;

    Ok(banks
        .iter()
        .map(|bank| TransformedBank {
            name: bank.name.clone(),
            mc_usd_billion: bank.mc_usd_billion,
            mc_gbp_billion: round2(bank.mc_usd_billion * gbp),
            mc_eur_billion: round2(bank.mc_usd_billion * eur),
            mc_inr_billion: round2(bank.mc_usd_billion * inr),
        })
        .collect())
}
