//! End-to-End Scenario Tests for uplmn
//!
//! These tests follow a table through the whole tool chain:
//! - MCC/MNC pairs encoded into an UPDATE BINARY command
//! - The echoed command decoded back into a report
//! - A READ BINARY reply from the modem decoded into a report

use integration_tests::test_fixtures::payload_of;
use integration_tests::{assert_report_line, init_test_logging, TestResult, UK_OPERATORS, US_OPERATORS};
use uplmn_codec::crsm::{encode_command, read_binary_command, CrsmResponse};
use uplmn_codec::table::{decode_report, decode_table};

const DEFAULT_RAT_TEXT: &str = "E-UTRAN in WB-S1, NB-S1 modes, GSM + EC-GSM-IoT";

/// E2E Test: write command for pairs given in order
#[test]
fn test_e2e_encode_preserves_input_order() {
    init_test_logging();

    let pairs: Vec<_> = US_OPERATORS.iter().map(|op| op.pair()).collect();
    let cmd = encode_command(&pairs);

    assert_eq!(cmd, "AT+CRSM=214,28512,0,0,10,13001440801300624080");
}

/// E2E Test: the echoed write command decodes to the same operators
#[test]
fn test_e2e_encode_then_decode_command() -> TestResult {
    init_test_logging();

    let pairs: Vec<_> = UK_OPERATORS.iter().map(|op| op.pair()).collect();
    let cmd = encode_command(&pairs);
    let report = decode_report(&cmd)?;

    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), UK_OPERATORS.len());
    for (i, (line, op)) in lines.iter().zip(UK_OPERATORS).enumerate() {
        assert_report_line(line, i + 1, op.mcc, op.mnc, DEFAULT_RAT_TEXT);
    }
    Ok(())
}

/// E2E Test: decode the reply to a READ BINARY of the PLMN file
///
/// 1. Build the read command for two records
/// 2. Modem answers with status 144,0 and the records
/// 3. Reply is decoded from its last field
#[test]
fn test_e2e_modem_read_reply() -> TestResult {
    init_test_logging();

    assert_eq!(read_binary_command(2), "AT+CRSM=176,28512,0,0,10");

    let reply = "+CRSM: 144,0,32F405408032F4514080\r\n";
    let resp = CrsmResponse::parse(reply).ok_or("reply not recognised")?;
    assert!(resp.is_success());
    assert_eq!(resp.data, payload_of(&UK_OPERATORS[..2]));

    let report = decode_report(reply)?;
    let lines: Vec<&str> = report.lines().collect();
    assert_report_line(lines[0], 1, "234", "50", DEFAULT_RAT_TEXT);
    assert_report_line(lines[1], 2, "234", "15", DEFAULT_RAT_TEXT);
    Ok(())
}

/// E2E Test: the documented write command decodes in payload order
#[test]
fn test_e2e_documented_command() -> TestResult {
    init_test_logging();

    let report = decode_report("AT+CRSM=214,28512,0,0,10,13006240801300144080")?;
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_report_line(lines[0], 1, "310", "260", DEFAULT_RAT_TEXT);
    assert_report_line(lines[1], 2, "310", "410", DEFAULT_RAT_TEXT);
    Ok(())
}

/// E2E Test: over-long codes are clamped before they reach the SIM
#[test]
fn test_e2e_truncated_codes_round_trip_clamped() -> TestResult {
    init_test_logging();

    let cmd = encode_command(&[("3108", "410333")]);
    let entries = decode_table(&cmd)?;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].mcc, "310");
    assert_eq!(entries[0].mnc, "410");
    Ok(())
}

/// E2E Test: a truncated reply yields no report at all
#[test]
fn test_e2e_truncated_reply_rejected() {
    init_test_logging();

    let reply = format!("+CRSM: 144,0,{}", &payload_of(UK_OPERATORS)[..29]);
    assert!(decode_report(&reply).is_err());
}
