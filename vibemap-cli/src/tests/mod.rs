//! Shared test harness modules for the vibemap CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;

mod helpers;
mod io_unit;
mod route_unit;
mod survey_unit;
