// Equity Domain Model
//
// A fractional ownership stake in [0, 1]. Persisted and serialized as a
// normalized decimal string ("0.002", "1", "0").

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "EquityRepr", into = "String")]
pub struct Equity(f64);

impl Equity {
    pub const ZERO: Equity = Equity(0.0);

    /// Parse a decimal fraction; accepts anything `f64` parses that lands in [0, 1]
    pub fn parse(s: &str) -> Result<Self> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::InvalidEquity(s.to_string()))?;
        Self::from_f64(value).map_err(|_| DomainError::InvalidEquity(s.to_string()))
    }

    pub fn from_f64(value: f64) -> Result<Self> {
        if !value.is_finite() || !(0.0..=1.0).contains(&value) {
            return Err(DomainError::InvalidEquity(value.to_string()));
        }
        // -0.0 would otherwise render as "-0"
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }
}

impl fmt::Display for Equity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f64 Display never uses exponent notation, so this is a plain decimal
        write!(f, "{}", self.0)
    }
}

impl FromStr for Equity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Equity> for String {
    fn from(equity: Equity) -> Self {
        equity.to_string()
    }
}

/// Wire form: callers send either "0.05" or 0.05
#[derive(Deserialize)]
#[serde(untagged)]
enum EquityRepr {
    Text(String),
    Number(f64),
}

impl TryFrom<EquityRepr> for Equity {
    type Error = DomainError;

    fn try_from(repr: EquityRepr) -> Result<Self> {
        match repr {
            EquityRepr::Text(s) => Self::parse(&s),
            EquityRepr::Number(n) => Self::from_f64(n),
        }
    }
}
