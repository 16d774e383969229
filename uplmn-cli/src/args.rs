//! Command-line argument parsing
//!
//! Parsing is pure: it turns an argument list into a [`Command`] or a
//! [`UsageError`] and never prints or exits.

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;
use thiserror::Error;

/// Raw arguments as understood by clap
#[derive(Parser, Debug)]
#[command(name = "uplmn")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// An AT command-ready coded PLMN string, may be repeated
    #[arg(short = 'p', long = "plmn", value_name = "ENCODED_PLMNS")]
    pub plmn: Vec<String>,

    /// Show help information
    #[arg(short = 'h', long = "help")]
    pub help: bool,

    /// MCC/MNC pairs to encode
    #[arg(value_name = "MCC_MNC")]
    pub entries: Vec<String>,
}

/// Argument errors; every one ends the process with status 1
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// Odd number of positional codes
    #[error("An MCC-MNC pairing is incomplete")]
    IncompletePairing,

    /// Option given without its value
    #[error("Missing value after option {0}")]
    MissingValue(String),

    /// Flag not recognised
    #[error("Unknown option: {0}")]
    UnknownOption(String),

    /// Any other rejection from the parser
    #[error("{0}")]
    Invalid(String),
}

/// Work requested on the command line
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    /// Table strings to decode, in argument order
    pub tables: Vec<String>,
    /// MCC/MNC pairs to encode, in argument order
    pub pairs: Vec<(String, String)>,
}

/// What the tool should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// No arguments: show name and version
    Version,
    /// Show usage
    Help,
    /// Decode tables and/or encode pairs
    Run(Invocation),
}

fn is_help(arg: &str) -> bool {
    matches!(arg.to_lowercase().as_str(), "-h" | "--help")
}

fn is_plmn_flag(arg: &str) -> bool {
    matches!(arg.to_lowercase().as_str(), "-p" | "--plmn")
}

/// Checks flag shapes and hands clap a normalized argument list.
///
/// Flags are matched case-insensitively and only in their bare form, so
/// `--plmn=<v>`, `-p<v>` and `--` are unknown options. A value slot whose
/// token starts with `-` is a missing value.
fn normalize_flags(argv: &[String]) -> Result<Vec<String>, UsageError> {
    let mut out = Vec::with_capacity(argv.len());
    let mut pending: Option<&str> = None;

    for (i, arg) in argv.iter().enumerate() {
        if i == 0 {
            out.push(arg.clone());
            continue;
        }

        if let Some(option) = pending.take() {
            if arg.starts_with('-') {
                return Err(UsageError::MissingValue(option.to_string()));
            }
            out.push(arg.clone());
            continue;
        }

        if is_plmn_flag(arg) {
            pending = Some(arg.as_str());
            out.push(arg.to_lowercase());
        } else if is_help(arg) {
            out.push(arg.to_lowercase());
        } else if arg.starts_with('-') {
            return Err(UsageError::UnknownOption(arg.clone()));
        } else {
            out.push(arg.clone());
        }
    }

    match pending {
        Some(option) => Err(UsageError::MissingValue(option.to_string())),
        None => Ok(out),
    }
}

/// Name of the offending argument from clap's error context.
fn invalid_arg(err: &clap::Error) -> String {
    match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => {
            // clap reports options as "--plmn <ENCODED_PLMNS>"
            arg.split_whitespace().next().unwrap_or(arg).to_string()
        }
        _ => String::new(),
    }
}

fn usage_error(err: clap::Error) -> UsageError {
    match err.kind() {
        ErrorKind::UnknownArgument => UsageError::UnknownOption(invalid_arg(&err)),
        ErrorKind::InvalidValue | ErrorKind::NoEquals | ErrorKind::TooFewValues => {
            UsageError::MissingValue(invalid_arg(&err))
        }
        _ => UsageError::Invalid(err.to_string().trim().to_string()),
    }
}

/// Parses a full argument list, program name first.
///
/// Help wins over everything else; an empty list asks for the version.
pub fn parse_args<I, T>(argv: I) -> Result<Command, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let argv: Vec<String> = argv.into_iter().map(Into::into).collect();

    if argv.len() <= 1 {
        return Ok(Command::Version);
    }
    if argv.iter().skip(1).any(|a| is_help(a)) {
        return Ok(Command::Help);
    }

    let argv = normalize_flags(&argv)?;
    let args = Args::try_parse_from(&argv).map_err(usage_error)?;
    if args.help {
        return Ok(Command::Help);
    }

    if args.entries.len() % 2 != 0 {
        return Err(UsageError::IncompletePairing);
    }

    let pairs = args
        .entries
        .chunks(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect();

    Ok(Command::Run(Invocation {
        tables: args.plmn,
        pairs,
    }))
}
