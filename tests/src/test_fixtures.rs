//! Test fixtures for PLMN table scenarios
//!
//! Operator entries with the records they encode to under the default
//! access technology bytes.

/// An MCC/MNC pair and its packed record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorFixture {
    /// Mobile Country Code
    pub mcc: &'static str,
    /// Mobile Network Code
    pub mnc: &'static str,
    /// Packed record produced by the encoder
    pub record: &'static str,
}

impl OperatorFixture {
    /// The (mcc, mnc) pair as owned strings
    pub fn pair(&self) -> (String, String) {
        (self.mcc.to_string(), self.mnc.to_string())
    }
}

/// Three-digit MNC operators
pub const US_OPERATORS: &[OperatorFixture] = &[
    OperatorFixture { mcc: "310", mnc: "410", record: "1300144080" },
    OperatorFixture { mcc: "310", mnc: "260", record: "1300624080" },
];

/// Two-digit MNC operators
pub const UK_OPERATORS: &[OperatorFixture] = &[
    OperatorFixture { mcc: "234", mnc: "50", record: "32F4054080" },
    OperatorFixture { mcc: "234", mnc: "15", record: "32F4514080" },
    OperatorFixture { mcc: "234", mnc: "10", record: "32F4014080" },
];

/// Payload of a table holding every fixture in `operators`, in order
pub fn payload_of(operators: &[OperatorFixture]) -> String {
    operators.iter().map(|op| op.record).collect()
}
