//! Table decode tests
//!
//! Reports for hand-built tables with non-default access technology bytes.

use integration_tests::{assert_report_line, init_test_logging, TestResult};
use uplmn_codec::rat::{GsmRat, LteRat, RESERVED_WARNING};
use uplmn_codec::table::{decode_table, split_table};
use uplmn_codec::TableError;

#[test]
fn test_mixed_access_technologies() -> TestResult {
    init_test_logging();

    // UTRAN + NG-RAN / GSM only; E-UTRAN NB-S1 only / CDMA2000 HRPD
    let entries = decode_table("13001488841300625020")?;
    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].lte, LteRat(0x88));
    assert_eq!(entries[0].gsm, GsmRat(0x84));
    assert_report_line(&format!("1. {}", entries[0]), 1, "310", "410", "UTRAN, NG-RAN, GSM");

    assert_report_line(
        &format!("2. {}", entries[1]),
        2,
        "310",
        "260",
        "E-UTRAN in NB-S1 mode only, CDMA2000 HRPD",
    );
    Ok(())
}

#[test]
fn test_disabled_entry() -> TestResult {
    init_test_logging();

    // Unused slots are typically all-filler with no access technology
    let entries = decode_table("FFFFFF0000")?;
    assert_eq!(entries[0].mcc, "");
    assert_eq!(entries[0].mnc, "");
    assert!(entries[0].lte.is_empty());
    assert!(entries[0].gsm.is_empty());
    assert_eq!(entries[0].to_string(), "MCC:  MNC:  RAT(s): , ");
    Ok(())
}

#[test]
fn test_reserved_bits_are_a_warning() -> TestResult {
    init_test_logging();

    let entries = decode_table("1300144781")?;
    assert!(entries[0].lte.has_reserved_bits());
    assert!(entries[0].gsm.has_reserved_bits());
    assert_eq!(
        entries[0].lte.to_string(),
        format!("E-UTRAN in WB-S1, NB-S1 modes{RESERVED_WARNING}")
    );
    Ok(())
}

#[test]
fn test_lowercase_payload() -> TestResult {
    init_test_logging();

    let entries = decode_table("32f4054080")?;
    assert_eq!(entries[0].mcc, "234");
    assert_eq!(entries[0].mnc, "50");
    Ok(())
}

#[test]
fn test_length_must_be_whole_records() {
    init_test_logging();

    for raw in ["", "1300144", "82F988408", "13001440801"] {
        assert!(
            matches!(split_table(raw), Err(TableError::Malformed(_))),
            "{raw:?} should be rejected"
        );
    }
}
