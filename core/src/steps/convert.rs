//! Step argument converters
//!
//! Numbers in step text may carry `,` grouping separators (`1,000,000`).

use std::str::FromStr;

use sqlsteps_types::ParamKind;

use crate::error::{Result, StepError};

fn invalid(kind: ParamKind, value: &str) -> StepError {
    StepError::InvalidArgument {
        kind,
        value: value.to_owned(),
    }
}

fn parse_grouped<T: FromStr>(kind: ParamKind, value: &str) -> Result<T> {
    let digits: String = value.chars().filter(|c| *c != ',').collect();
    if digits.is_empty() {
        return Err(invalid(kind, value));
    }
    digits.parse().map_err(|_| invalid(kind, value))
}

pub fn parse_integer(value: &str) -> Result<i32> {
    parse_grouped(ParamKind::Integer, value)
}

pub fn parse_long(value: &str) -> Result<i64> {
    parse_grouped(ParamKind::Long, value)
}

pub fn parse_double(value: &str) -> Result<f64> {
    parse_grouped(ParamKind::Double, value)
}

pub fn parse_boolean(value: &str) -> Result<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid(ParamKind::Boolean, value)),
    }
}
