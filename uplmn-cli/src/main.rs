//! uplmn: encode and decode SIM UPLMN table entries
//!
//! # Usage
//!
//! ```bash
//! uplmn 310 410 310 260
//! uplmn -p "+CRSM: 144,0,32F405408032F4514080"
//! ```

mod args;

use std::process::ExitCode;

use anyhow::Result;
use tracing::{debug, warn};

use uplmn_codec::crsm::{encode_command, CrsmResponse};
use uplmn_codec::table::decode_report;
use uplmn_common::logging::{init_logging, LogLevel};

use args::{parse_args, Command, Invocation};

const NAME: &str = "uplmn";

fn version_line() -> String {
    format!("{} {}", NAME, env!("CARGO_PKG_VERSION"))
}

fn help_text() -> String {
    format!(
        "{}\n\n\
         Encode and decode SIM UPLMN table entries.\n\n\
         Usage:\n\n  {} [-p <ENCODED_PLMNS>] [-h] <MCC> <MNC> ... <MCC> <MNC>\n\n\
         Options:\n\n  \
         -p / --plmn     An AT command-ready coded PLMN string. You\n                  \
         can include multiple -p switches.\n  \
         -h / --help     This help information.\n",
        version_line(),
        NAME
    )
}

fn main() -> ExitCode {
    init_logging(LogLevel::default());

    match run(std::env::args()) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Produces the lines to print for an argument list.
///
/// Nothing is returned on error, so a bad argument or table never leaves
/// partial output behind.
fn run<I, T>(argv: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    match parse_args(argv)? {
        Command::Version => Ok(vec![version_line()]),
        Command::Help => Ok(vec![help_text()]),
        Command::Run(invocation) => execute(&invocation),
    }
}

fn execute(invocation: &Invocation) -> Result<Vec<String>> {
    let mut lines = Vec::new();

    for table in &invocation.tables {
        if let Some(resp) = CrsmResponse::parse(table) {
            if !resp.is_success() {
                warn!(sw1 = resp.sw1, sw2 = resp.sw2, "SIM reported a failed read");
            }
        }
        lines.push(decode_report(table)?);
    }

    if !invocation.pairs.is_empty() {
        debug!(pairs = invocation.pairs.len(), "encoding PLMN entries");
        lines.push(encode_command(&invocation.pairs));
    }

    Ok(lines)
}
