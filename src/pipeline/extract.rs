use reqwest::blocking::Client;
use scraper::{Html, Selector};
use tracing::debug;

use crate::constants::FETCH_TIMEOUT;
use crate::error::{EtlError, Result};
use crate::types::Bank;

/// Fetches the raw HTML for the bank-table page. Transport failures,
/// timeouts and non-2xx statuses all surface as `EtlError::Fetch`.
pub fn fetch_page(url: &str) -> Result<String> {
    let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let response = client.get(url).send()?.error_for_status()?;
    Ok(response.text()?)
}

/// Parses the first `<tbody>` in the document into bank rows, preserving
/// page order.
///
/// Cell layout follows the source table: index 1 holds the bank name,
/// index 2 the market cap in USD billions. Header and separator rows carry
/// no `<td>` cells and are skipped; rows with fewer than three cells are
/// dropped silently, matching the source's tolerance for short rows, while
/// a non-numeric market-cap cell in a surviving row is an error so bad
/// figures cannot corrupt downstream averages.
pub fn parse_banks(html: &str) -> Result<Vec<Bank>> {
    let tbody_selector = Selector::parse("tbody").unwrap();
    let tr_selector = Selector::parse("tr").unwrap();
    let td_selector = Selector::parse("td").unwrap();

    let document = Html::parse_document(html);
    let tbody = document
        .select(&tbody_selector)
        .next()
        .ok_or_else(|| EtlError::Parse("no <tbody> found in document".to_string()))?;

    let mut banks = Vec::new();
    for row in tbody.select(&tr_selector) {
        let cells: Vec<_> = row.select(&td_selector).collect();
        if cells.len() < 3 {
            continue;
        }

        let name = cells[1].text().collect::<String>().trim_end().to_string();
        let raw_value = cells[2].text().collect::<String>();
        let mc_usd_billion = raw_value.trim().parse::<f64>().map_err(|_| {
            EtlError::Parse(format!(
                "market cap for '{}' is not numeric: '{}'",
                name,
                raw_value.trim()
            ))
        })?;

        banks.push(Bank {
            name,
            mc_usd_billion,
        });
    }

    debug!(rows = banks.len(), "parsed bank table");
    Ok(banks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &str) -> String {
        format!(
            "<html><body><table><tbody>\
             <tr><th>Rank</th><th>Bank name</th><th>Market cap</th></tr>\
             {rows}\
             </tbody></table></body></html>"
        )
    }

    fn data_row(rank: u32, name: &str, value: &str) -> String {
        format!("<tr><td>{rank}</td><td>{name}\n</td><td>{value}\n</td></tr>")
    }

    #[test]
    fn extracts_all_data_rows_in_page_order() {
        let html = table(&format!(
            "{}{}{}",
            data_row(1, "JPMorgan Chase", "432.92"),
            data_row(2, "Bank of America", "231.52"),
            data_row(3, "ICBC", "194.56"),
        ));

        let banks = parse_banks(&html).unwrap();
        assert_eq!(banks.len(), 3);
        assert_eq!(banks[0].name, "JPMorgan Chase");
        assert_eq!(banks[0].mc_usd_billion, 432.92);
        assert_eq!(banks[2].name, "ICBC");
    }

    #[test]
    fn header_rows_and_short_rows_are_skipped() {
        let html = table(&format!(
            "<tr><td>spacer</td><td>only two cells</td></tr>{}",
            data_row(1, "Bank A", "100.0"),
        ));

        let banks = parse_banks(&html).unwrap();
        assert_eq!(banks.len(), 1);
        assert_eq!(banks[0].name, "Bank A");
    }

    #[test]
    fn trailing_whitespace_is_trimmed_from_names() {
        let html = table(&data_row(1, "Wells Fargo", "160.68"));
        let banks = parse_banks(&html).unwrap();
        assert_eq!(banks[0].name, "Wells Fargo");
    }

    #[test]
    fn non_numeric_market_cap_names_the_offending_row() {
        let html = table(&format!(
            "{}{}",
            data_row(1, "Bank A", "100.0"),
            data_row(2, "Bank B", "n/a"),
        ));

        match parse_banks(&html) {
            Err(EtlError::Parse(msg)) => {
                assert!(msg.contains("Bank B"), "message was: {msg}");
                assert!(msg.contains("n/a"));
            }
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn document_without_tbody_is_a_parse_error() {
        let err = parse_banks("<html><body><p>no table here</p></body></html>").unwrap_err();
        assert!(matches!(err, EtlError::Parse(_)));
    }
}
