//! Common utilities for uplmn
//!
//! This crate provides the logging setup and hex formatting helpers shared
//! by the codec library and the command-line tool.

pub mod logging;

pub use logging::{
    format_hex_compact, init_logging, init_logging_with_filter, log_plmn_record, HexDump,
    LogLevel, Operation,
};
