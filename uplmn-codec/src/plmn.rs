//! PLMN record encoding and decoding
//!
//! A packed record is 5 bytes written as 10 hex characters:
//!
//! ```text
//! byte 0: MCC digit 2 | MCC digit 1
//! byte 1: MNC digit 3 | MCC digit 3
//! byte 2: MNC digit 2 | MNC digit 1
//! byte 3: LTE/UTRAN access technology
//! byte 4: GSM/CDMA access technology
//! ```
//!
//! Each byte is written high nibble first, so the digit order inside a byte
//! pair is swapped relative to the MCC/MNC text. Absent digits are written
//! as the filler nibble `F`.

use std::fmt;

use uplmn_common::logging::{log_plmn_record, Operation};

use crate::error::{TableError, TableResult};
use crate::rat::{GsmRat, LteRat};

/// Filler nibble for absent digit positions
pub const FILLER: char = 'F';

/// Access technology bytes appended to every encoded record:
/// E-UTRAN in WB-S1 and NB-S1 modes (0x40), GSM and EC-GSM-IoT (0x80)
pub const DEFAULT_RAT: &str = "4080";

/// Length of a packed record in hex characters
pub const RECORD_LEN: usize = 10;

/// Length of a packed record in bytes
pub const RECORD_BYTES: usize = RECORD_LEN / 2;

/// Number of digit positions reserved for an MCC or an MNC
const CODE_DIGITS: usize = 3;

/// Pads or clamps a code to exactly three symbols.
fn normalize_code(code: &str, kind: &str) -> [char; CODE_DIGITS] {
    let len = code.chars().count();
    if len > CODE_DIGITS {
        tracing::debug!(kind = kind, code = code, "truncating to {} digits", CODE_DIGITS);
    }

    let mut out = [FILLER; CODE_DIGITS];
    for (slot, c) in out.iter_mut().zip(code.chars()) {
        *slot = c;
    }
    out
}

/// Encodes an MCC/MNC pair into a packed 10-character record.
///
/// Codes shorter than three digits are padded with [`FILLER`]; longer codes
/// are clamped to their first three digits. The access technology bytes are
/// always [`DEFAULT_RAT`].
///
/// # Example
///
/// ```
/// use uplmn_codec::plmn::encode;
///
/// assert_eq!(encode("310", "410"), "1300144080");
/// assert_eq!(encode("289", "88"), "82F9884080");
/// ```
pub fn encode(mcc: &str, mnc: &str) -> String {
    let [m0, m1, m2] = normalize_code(mcc, "mcc");
    let [n0, n1, n2] = normalize_code(mnc, "mnc");

    let mut record = String::with_capacity(RECORD_LEN);
    record.extend([m1, m0, n2, m2, n1, n0]);
    record.push_str(DEFAULT_RAT);

    log_plmn_record(Operation::Encode, mcc, mnc, &record);
    record
}

/// Encodes a list of MCC/MNC pairs into one concatenated payload,
/// preserving input order.
pub fn encode_pairs<S: AsRef<str>>(pairs: &[(S, S)]) -> String {
    pairs
        .iter()
        .map(|(mcc, mnc)| encode(mcc.as_ref(), mnc.as_ref()))
        .collect()
}

fn strip_filler(symbols: [char; CODE_DIGITS]) -> String {
    symbols
        .into_iter()
        .filter(|c| !c.eq_ignore_ascii_case(&FILLER))
        .collect()
}

/// Decodes the MCC and MNC from a packed record.
///
/// Only the first six symbols are read, so any trailing data (including the
/// access technology bytes) is ignored. Every filler symbol is dropped from
/// the decoded codes wherever it appears. Symbols missing from a short input
/// count as filler.
///
/// # Example
///
/// ```
/// use uplmn_codec::plmn::decode;
///
/// assert_eq!(decode("1300624080"), ("310".to_string(), "260".to_string()));
/// ```
pub fn decode(record: &str) -> (String, String) {
    let mut s = [FILLER; 6];
    for (slot, c) in s.iter_mut().zip(record.chars()) {
        *slot = c;
    }

    let mcc = strip_filler([s[1], s[0], s[3]]);
    let mnc = strip_filler([s[5], s[4], s[2]]);
    (mcc, mnc)
}

/// A decoded PLMN table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlmnEntry {
    /// Mobile Country Code, fillers removed
    pub mcc: String,
    /// Mobile Network Code, fillers removed
    pub mnc: String,
    /// LTE/UTRAN access technology byte
    pub lte: LteRat,
    /// GSM/CDMA access technology byte
    pub gsm: GsmRat,
}

impl PlmnEntry {
    /// Decodes a full record, access technology bytes included.
    ///
    /// Characters past [`RECORD_LEN`] are ignored.
    pub fn from_record(record: &str) -> TableResult<Self> {
        let actual = record.chars().count();
        if actual < RECORD_LEN {
            return Err(TableError::ShortRecord {
                expected: RECORD_LEN,
                actual,
            });
        }

        let rat_text: String = record.chars().skip(6).take(4).collect();
        let rat = hex::decode(&rat_text).map_err(|_| TableError::InvalidRat(rat_text.clone()))?;

        let (mcc, mnc) = decode(record);
        log_plmn_record(Operation::Decode, &mcc, &mnc, record);

        Ok(Self {
            mcc,
            mnc,
            lte: LteRat(rat[0]),
            gsm: GsmRat(rat[1]),
        })
    }
}

impl fmt::Display for PlmnEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MCC: {} MNC: {} RAT(s): {}, {}",
            self.mcc, self.mnc, self.lte, self.gsm
        )
    }
}
