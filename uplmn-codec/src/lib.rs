//! SIM PLMN selector table codec
//!
//! Converts between MCC/MNC pairs and the packed records of the SIM
//! "PLMN with access technology" file, and renders table dumps read back
//! from a modem as human-readable reports.
//!
//! # Overview
//!
//! - [`plmn`]: record encoder and MCC/MNC decoder
//! - [`rat`]: access technology byte decoders
//! - [`table`]: payload extraction, splitting and report rendering
//! - [`crsm`]: `AT+CRSM` command lines and reply parsing
//!
//! # Example
//!
//! ```rust
//! use uplmn_codec::crsm::encode_command;
//! use uplmn_codec::table::decode_report;
//!
//! let cmd = encode_command(&[("234", "50")]);
//! assert_eq!(cmd, "AT+CRSM=214,28512,0,0,5,32F4054080");
//!
//! let report = decode_report(&cmd).unwrap();
//! assert!(report.starts_with("1. MCC: 234 MNC: 50"));
//! ```

pub mod crsm;
pub mod error;
pub mod plmn;
pub mod rat;
pub mod table;

pub use crsm::{encode_command, read_binary_command, update_binary_command, CrsmResponse};
pub use error::{TableError, TableResult};
pub use plmn::{decode, encode, encode_pairs, PlmnEntry, DEFAULT_RAT, FILLER, RECORD_LEN};
pub use rat::{decode_gsm, decode_lte, EutranMode, GsmMode, GsmRat, LteRat};
pub use table::{decode_report, decode_table, extract_payload, format_report, split_table};
