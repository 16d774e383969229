//! PLMN table splitting and report rendering
//!
//! Table data is either a bare run of packed records or a modem reply whose
//! last comma-separated field holds the records, e.g.
//! `+CRSM: 144,0,32F405408032F4514080` or the echoed write command
//! `AT+CRSM=214,28512,0,0,10,13006240801300144080`.

use uplmn_common::logging::{format_hex_compact, HexDump};

use crate::error::{TableError, TableResult};
use crate::plmn::{PlmnEntry, RECORD_LEN};

/// Returns the record payload of a table string.
///
/// This is everything after the last comma, or the whole input if there is
/// none. Surrounding whitespace and double quotes are trimmed.
pub fn extract_payload(raw: &str) -> &str {
    let field = raw.rsplit(',').next().unwrap_or(raw);
    field.trim().trim_matches('"')
}

/// Splits table data into packed records, in input order.
///
/// The payload must be a positive multiple of [`RECORD_LEN`] hex characters.
pub fn split_table(raw: &str) -> TableResult<Vec<&str>> {
    let payload = extract_payload(raw);

    if payload.is_empty() || payload.len() % RECORD_LEN != 0 {
        tracing::debug!(len = payload.len(), "payload is not a whole number of records");
        return Err(TableError::Malformed(raw.to_string()));
    }

    let bytes = hex::decode(payload).map_err(|e| {
        tracing::debug!(error = %e, "payload is not hex");
        TableError::Malformed(raw.to_string())
    })?;
    tracing::trace!(
        records = payload.len() / RECORD_LEN,
        hex = %HexDump(&bytes),
        "split table payload"
    );

    // Payload is ASCII once it passed hex validation
    Ok(payload
        .as_bytes()
        .chunks(RECORD_LEN)
        .filter_map(|chunk| std::str::from_utf8(chunk).ok())
        .collect())
}

/// Decodes every record of a table.
pub fn decode_table(raw: &str) -> TableResult<Vec<PlmnEntry>> {
    split_table(raw)?
        .into_iter()
        .map(|record| {
            let entry = PlmnEntry::from_record(record)?;
            tracing::trace!(
                mcc = %entry.mcc,
                mnc = %entry.mnc,
                rat = %format_hex_compact(&[entry.lte.0, entry.gsm.0], 1),
                "decoded entry"
            );
            Ok(entry)
        })
        .collect()
}

/// Renders decoded entries as a numbered report, one line per entry.
pub fn format_report(entries: &[PlmnEntry]) -> String {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| format!("{}. {}", i + 1, entry))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decodes table data into a numbered report.
///
/// # Example
///
/// ```
/// use uplmn_codec::table::decode_report;
///
/// let report = decode_report("+CRSM: 144,0,32F4054080").unwrap();
/// assert_eq!(
///     report,
///     "1. MCC: 234 MNC: 50 RAT(s): E-UTRAN in WB-S1, NB-S1 modes, GSM + EC-GSM-IoT"
/// );
/// ```
pub fn decode_report(raw: &str) -> TableResult<String> {
    let entries = decode_table(raw)?;
    Ok(format_report(&entries))
}
