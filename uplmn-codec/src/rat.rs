//! Access technology identifiers of a PLMN record
//!
//! Bytes 3 and 4 of a record carry the access technologies the entry may be
//! used with. Layout per 3GPP TS 31.102, EF PLMNwAcT:
//!
//! ```text
//! byte 3: | UTRAN | E-UTRAN | E-UTRAN mode (2) | NG-RAN | reserved (3) |
//! byte 4: | GSM   | GSM COMPACT | HRPD | 1xRTT | GSM mode (2) | reserved (2) |
//! ```

use std::fmt;

use num_enum::{FromPrimitive, IntoPrimitive};

/// Suffix appended to a description when reserved bits are set
pub const RESERVED_WARNING: &str = " -- WARNING: Reserved bits set";

const SEPARATOR: &str = ", ";

/// E-UTRAN sub-mode, bits 0x30 of the LTE/UTRAN byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum EutranMode {
    /// Both WB-S1 and NB-S1 modes (also encoded as 3)
    #[num_enum(default)]
    WbS1AndNbS1 = 0,
    /// NB-S1 mode only
    NbS1Only = 1,
    /// WB-S1 mode only
    WbS1Only = 2,
}

impl fmt::Display for EutranMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EutranMode::WbS1AndNbS1 => write!(f, "E-UTRAN in WB-S1, NB-S1 modes"),
            EutranMode::NbS1Only => write!(f, "E-UTRAN in NB-S1 mode only"),
            EutranMode::WbS1Only => write!(f, "E-UTRAN in WB-S1 mode only"),
        }
    }
}

/// GSM sub-mode, bits 0x0C of the GSM/CDMA byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum GsmMode {
    /// GSM and EC-GSM-IoT (also encoded as 3)
    #[num_enum(default)]
    GsmAndEcGsmIot = 0,
    /// GSM without EC-GSM-IoT
    GsmOnly = 1,
    /// EC-GSM-IoT only
    EcGsmIotOnly = 2,
}

impl fmt::Display for GsmMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GsmMode::GsmAndEcGsmIot => write!(f, "GSM + EC-GSM-IoT"),
            GsmMode::GsmOnly => write!(f, "GSM"),
            GsmMode::EcGsmIotOnly => write!(f, "EC-GSM-IoT"),
        }
    }
}

/// Joins technology names and appends the reserved-bit warning.
fn describe(names: &[String], reserved: bool) -> String {
    let mut out = names.join(SEPARATOR);
    if reserved {
        out.push_str(RESERVED_WARNING);
    }
    out
}

/// LTE/UTRAN access technology byte (record byte 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LteRat(pub u8);

impl LteRat {
    /// UTRAN enabled
    pub const UTRAN: u8 = 0x80;
    /// E-UTRAN enabled
    pub const EUTRAN: u8 = 0x40;
    /// E-UTRAN mode field, see [`EutranMode`]
    pub const EUTRAN_MODE_MASK: u8 = 0x30;
    /// NG-RAN enabled
    pub const NG_RAN: u8 = 0x08;
    /// Reserved for future use
    pub const RESERVED_MASK: u8 = 0x07;

    /// E-UTRAN mode, if E-UTRAN is enabled
    pub fn eutran_mode(&self) -> Option<EutranMode> {
        if self.0 & Self::EUTRAN == 0 {
            return None;
        }
        Some(EutranMode::from((self.0 & Self::EUTRAN_MODE_MASK) >> 4))
    }

    /// Returns true if any reserved bit is set
    pub fn has_reserved_bits(&self) -> bool {
        self.0 & Self::RESERVED_MASK != 0
    }

    /// Returns true if the byte carries no bits at all
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Enabled technologies in UTRAN, E-UTRAN, NG-RAN order
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::new();
        if self.0 & Self::UTRAN != 0 {
            names.push("UTRAN".to_string());
        }
        if let Some(mode) = self.eutran_mode() {
            names.push(mode.to_string());
        }
        if self.0 & Self::NG_RAN != 0 {
            names.push("NG-RAN".to_string());
        }
        names
    }
}

impl fmt::Display for LteRat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(&self.names(), self.has_reserved_bits()))
    }
}

/// GSM/CDMA access technology byte (record byte 4)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GsmRat(pub u8);

impl GsmRat {
    /// GSM enabled
    pub const GSM: u8 = 0x80;
    /// GSM COMPACT enabled
    pub const GSM_COMPACT: u8 = 0x40;
    /// cdma2000 HRPD enabled
    pub const CDMA2000_HRPD: u8 = 0x20;
    /// cdma2000 1xRTT enabled
    pub const CDMA2000_1XRTT: u8 = 0x10;
    /// GSM mode field, see [`GsmMode`]
    pub const GSM_MODE_MASK: u8 = 0x0C;
    /// Reserved for future use
    pub const RESERVED_MASK: u8 = 0x03;

    /// GSM mode, if GSM is enabled
    pub fn gsm_mode(&self) -> Option<GsmMode> {
        if self.0 & Self::GSM == 0 {
            return None;
        }
        Some(GsmMode::from((self.0 & Self::GSM_MODE_MASK) >> 2))
    }

    /// Returns true if any reserved bit is set
    pub fn has_reserved_bits(&self) -> bool {
        self.0 & Self::RESERVED_MASK != 0
    }

    /// Returns true if the byte carries no bits at all
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Enabled technologies in GSM, GSM COMPACT, HRPD, 1xRTT order
    pub fn names(&self) -> Vec<String> {
        let mut names = Vec::new();
        if let Some(mode) = self.gsm_mode() {
            names.push(mode.to_string());
        }
        for (bit, name) in [
            (Self::GSM_COMPACT, "GSM COMPACT"),
            (Self::CDMA2000_HRPD, "CDMA2000 HRPD"),
            (Self::CDMA2000_1XRTT, "CDMA2000 1xRTT"),
        ] {
            if self.0 & bit != 0 {
                names.push(name.to_string());
            }
        }
        names
    }
}

impl fmt::Display for GsmRat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe(&self.names(), self.has_reserved_bits()))
    }
}

/// Describes an LTE/UTRAN access technology byte.
///
/// # Example
///
/// ```
/// use uplmn_codec::rat::decode_lte;
///
/// assert_eq!(decode_lte(0x50), "E-UTRAN in NB-S1 mode only");
/// assert_eq!(decode_lte(0x00), "");
/// ```
pub fn decode_lte(byte: u8) -> String {
    LteRat(byte).to_string()
}

/// Describes a GSM/CDMA access technology byte.
///
/// # Example
///
/// ```
/// use uplmn_codec::rat::decode_gsm;
///
/// assert_eq!(decode_gsm(0x84), "GSM");
/// ```
pub fn decode_gsm(byte: u8) -> String {
    GsmRat(byte).to_string()
}
