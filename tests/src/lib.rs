//! Integration test framework for uplmn
#![allow(missing_docs)]
//!
//! This crate provides fixtures and helpers for end-to-end testing of the
//! PLMN table codec and the `uplmn` command line.
//!
//! # Components
//!
//! - [`test_fixtures`] - Known operator entries and the records they encode to
//! - [`test_utils`] - Logging setup and report assertions
//!
//! # Test Categories
//!
//! 1. **E2E Scenarios** - Encode pairs, decode the echoed command and modem replies
//! 2. **Table Decode Tests** - Reports for hand-built tables and access technology bytes

pub mod test_fixtures;

pub use test_fixtures::{OperatorFixture, UK_OPERATORS, US_OPERATORS};
pub use test_utils::{assert_report_line, init_test_logging, TestResult};
