//! AT+CRSM command helpers for the PLMN selector file
//!
//! 3GPP TS 27.007 restricted SIM access: `AT+CRSM=<command>,<fileid>,<P1>,<P2>,<P3>[,<data>]`.
//! The reply is `+CRSM: <sw1>,<sw2>[,<response>]`.

use crate::plmn::{encode_pairs, RECORD_BYTES};

/// EF PLMNwAcT file identifier (0x6F60)
pub const EF_PLMNWACT: u16 = 28512;

/// READ BINARY command code
pub const COMMAND_READ_BINARY: u8 = 176;

/// UPDATE BINARY command code
pub const COMMAND_UPDATE_BINARY: u8 = 214;

/// Status word 1 for a successful command (0x90)
pub const SW1_SUCCESS: u8 = 144;

const RESPONSE_PREFIX: &str = "+CRSM:";

/// Builds the command that writes `payload` to the start of the PLMN file.
///
/// The length parameter is the payload size in bytes.
///
/// # Example
///
/// ```
/// use uplmn_codec::crsm::update_binary_command;
///
/// assert_eq!(
///     update_binary_command("1300144080"),
///     "AT+CRSM=214,28512,0,0,5,1300144080"
/// );
/// ```
pub fn update_binary_command(payload: &str) -> String {
    format!(
        "AT+CRSM={},{},0,0,{},{}",
        COMMAND_UPDATE_BINARY,
        EF_PLMNWACT,
        payload.len() / 2,
        payload
    )
}

/// Builds the update command for a list of MCC/MNC pairs.
pub fn encode_command<S: AsRef<str>>(pairs: &[(S, S)]) -> String {
    update_binary_command(&encode_pairs(pairs))
}

/// Builds the command that reads the first `records` entries of the PLMN file.
pub fn read_binary_command(records: usize) -> String {
    format!(
        "AT+CRSM={},{},0,0,{}",
        COMMAND_READ_BINARY,
        EF_PLMNWACT,
        records * RECORD_BYTES
    )
}

/// A parsed `+CRSM:` reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrsmResponse {
    /// Status word 1
    pub sw1: u8,
    /// Status word 2
    pub sw2: u8,
    /// Response data, empty when the command returned none
    pub data: String,
}

impl CrsmResponse {
    /// Parses a modem reply.
    ///
    /// Returns `None` when the text is not a `+CRSM:` reply or its status
    /// words are not numeric.
    pub fn parse(raw: &str) -> Option<Self> {
        let body = raw.trim().strip_prefix(RESPONSE_PREFIX)?;
        let mut fields = body.splitn(3, ',');

        let sw1 = fields.next()?.trim().parse().ok()?;
        let sw2 = fields.next()?.trim().parse().ok()?;
        let data = fields
            .next()
            .map(|d| d.trim().trim_matches('"').to_string())
            .unwrap_or_default();

        Some(Self { sw1, sw2, data })
    }

    /// Returns true if the SIM reported normal completion
    pub fn is_success(&self) -> bool {
        self.sw1 == SW1_SUCCESS
    }
}
