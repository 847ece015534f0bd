use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use sqlx::Type;
use thiserror::Error;

//--------------------------------------        Cents        ---------------------------------------------------------
/// A monetary amount in euro cents. Catalog prices are stored and transmitted in this unit.
#[derive(Debug, Clone, Copy, Default, Type, PartialEq, Eq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[sqlx(transparent)]
#[serde(transparent)]
pub struct Cents(i64);

#[derive(Debug, Clone, Error)]
#[error("Value cannot be represented in cents: {0}")]
pub struct CentsConversionError(String);

impl From<i64> for Cents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Parses prices written as decimal euros, e.g. "12", "12.5" or "12.50".
impl FromStr for Cents {
    type Err = CentsConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let mut parts = digits.splitn(2, '.');
        let whole = parts
            .next()
            .filter(|p| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| CentsConversionError(format!("Invalid price value: {s}")))?
            .parse::<i64>()
            .map_err(|e| CentsConversionError(format!("Invalid price value: {s}. {e}.")))?;
        let cents = match parts.next() {
            None | Some("") => 0,
            Some(frac) if !frac.bytes().all(|b| b.is_ascii_digit()) => {
                return Err(CentsConversionError(format!("Invalid price value: {s}")))
            },
            Some(frac) if frac.len() == 1 => 10 * i64::from(frac.as_bytes()[0] - b'0'),
            Some(frac) if frac.len() == 2 => {
                frac.parse::<i64>().map_err(|e| CentsConversionError(format!("Invalid price value: {s}. {e}.")))?
            },
            Some(_) => return Err(CentsConversionError(format!("Too many decimal places in {s}"))),
        };
        let value = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(|| CentsConversionError(format!("Value {s} is too large to convert to Cents")))?;
        Ok(Self(if negative { -value } else { value }))
    }
}

impl Display for Cents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}€", abs / 100, abs % 100)
    }
}

impl Cents {
    pub fn value(&self) -> i64 {
        self.0
    }
}
