//! Logging infrastructure for uplmn
//!
//! This module provides configurable logging using the `tracing` crate,
//! record logging helpers and hex formatting for debugging.
//!
//! Log output always goes to stderr: stdout carries the AT command lines and
//! decoded reports produced by the tool.

use std::fmt;
use std::io;

use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// Log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Trace level - most verbose
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warn level (default)
    #[default]
    Warn,
    /// Error level - least verbose
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Initialize the tracing subscriber with the specified log level.
///
/// This should be called once at application startup. The log level can be
/// overridden by the `RUST_LOG` environment variable.
///
/// # Example
///
/// ```no_run
/// use uplmn_common::logging::{init_logging, LogLevel};
///
/// init_logging(LogLevel::Debug);
/// ```
pub fn init_logging(level: LogLevel) {
    init_logging_with_filter(&level.to_string());
}

/// Initialize logging with a custom filter string.
///
/// Allows fine-grained control over which modules log at which levels.
///
/// # Example
///
/// ```no_run
/// use uplmn_common::logging::init_logging_with_filter;
///
/// // Keep everything at warn, but trace the table splitter
/// init_logging_with_filter("warn,uplmn_codec::table=trace");
/// ```
pub fn init_logging_with_filter(filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_span_events(FmtSpan::NONE)
        .init();
}

/// Codec operation for record logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// MCC/MNC pair packed into a record
    Encode,
    /// Record unpacked into MCC/MNC and access technologies
    Decode,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Encode => write!(f, "ENC"),
            Operation::Decode => write!(f, "DEC"),
        }
    }
}

/// Log a packed PLMN record at debug level with its raw bytes at trace level.
///
/// # Arguments
///
/// * `operation` - Whether the record was produced or consumed
/// * `mcc` - Mobile Country Code as text
/// * `mnc` - Mobile Network Code as text
/// * `record` - The record as hex text
///
/// # Example
///
/// ```
/// use uplmn_common::logging::{log_plmn_record, Operation};
///
/// log_plmn_record(Operation::Encode, "310", "410", "1300144080");
/// ```
pub fn log_plmn_record(operation: Operation, mcc: &str, mnc: &str, record: &str) {
    tracing::debug!(
        op = %operation,
        mcc = mcc,
        mnc = mnc,
        "{} PLMN record {}",
        operation,
        record
    );
    if let Ok(bytes) = hex::decode(record) {
        tracing::trace!(op = %operation, hex = %HexDump(&bytes), "record bytes");
    }
}

/// Wrapper for hex dump formatting
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Format bytes as a compact hex string with optional grouping.
///
/// # Arguments
///
/// * `data` - Bytes to format
/// * `group_size` - Number of bytes per group (0 for no grouping)
///
/// # Example
///
/// ```
/// use uplmn_common::logging::format_hex_compact;
///
/// let data = [0x13, 0x00, 0x14, 0x40, 0x80];
/// assert_eq!(format_hex_compact(&data, 0), "1300144080");
/// assert_eq!(format_hex_compact(&data, 3), "130014 4080");
/// ```
pub fn format_hex_compact(data: &[u8], group_size: usize) -> String {
    if group_size == 0 {
        return hex::encode(data);
    }

    data.chunks(group_size)
        .map(hex::encode)
        .collect::<Vec<_>>()
        .join(" ")
}
