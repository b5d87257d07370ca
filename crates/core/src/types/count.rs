//! Coercion of store-native count values to integers.
//!
//! `COUNT(*)` comes back as `BIGINT` from Postgres, but views, casts and other
//! drivers can surface the same number as `INTEGER`, `NUMERIC` or text. The
//! aggregation layer funnels every representation through [`CountValue`] so
//! callers always see an `i64`.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// A count that could not be turned into an integer.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CountError {
    /// Decimal with a non-zero fractional part.
    #[error("count is not integral: {0}")]
    NotIntegral(Decimal),
    /// Decimal or text outside the `i64` range.
    #[error("count out of range: {0}")]
    OutOfRange(String),
    /// Negative counts cannot come from `COUNT`.
    #[error("count is negative: {0}")]
    Negative(i64),
    /// Text that is not a number.
    #[error("count is not numeric: {0:?}")]
    NotNumeric(String),
}

/// A count as the store delivered it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountValue {
    Integer(i64),
    Decimal(Decimal),
    Text(String),
}

impl CountValue {
    /// Coerce to a non-negative `i64`.
    ///
    /// # Errors
    ///
    /// Returns a `CountError` if the value is fractional, negative, out of
    /// range, or not a number.
    pub fn into_count(self) -> Result<i64, CountError> {
        let n = match self {
            Self::Integer(n) => n,
            Self::Decimal(d) => decimal_to_i64(d)?,
            Self::Text(s) => {
                let trimmed = s.trim();
                match trimmed.parse::<i64>() {
                    Ok(n) => n,
                    Err(_) => {
                        let d = trimmed
                            .parse::<Decimal>()
                            .map_err(|_| CountError::NotNumeric(s.clone()))?;
                        decimal_to_i64(d)?
                    }
                }
            }
        };

        if n < 0 {
            return Err(CountError::Negative(n));
        }
        Ok(n)
    }
}

impl From<i64> for CountValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<i32> for CountValue {
    fn from(n: i32) -> Self {
        Self::Integer(i64::from(n))
    }
}

impl From<Decimal> for CountValue {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<String> for CountValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

fn decimal_to_i64(d: Decimal) -> Result<i64, CountError> {
    if !d.fract().is_zero() {
        return Err(CountError::NotIntegral(d));
    }
    d.to_i64().ok_or_else(|| CountError::OutOfRange(d.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_passthrough() {
        assert_eq!(CountValue::from(5_i64).into_count().unwrap(), 5);
        assert_eq!(CountValue::from(3_i32).into_count().unwrap(), 3);
        assert_eq!(CountValue::from(0_i64).into_count().unwrap(), 0);
    }

    #[test]
    fn test_decimal_with_zero_scale_fraction() {
        // NUMERIC columns often arrive as "12.00"
        let d = Decimal::new(1200, 2);
        assert_eq!(CountValue::from(d).into_count().unwrap(), 12);
    }

    #[test]
    fn test_decimal_fractional_rejected() {
        let d = Decimal::new(125, 1);
        assert_eq!(
            CountValue::from(d).into_count(),
            Err(CountError::NotIntegral(d))
        );
    }

    #[test]
    fn test_text_counts() {
        assert_eq!(CountValue::from("42".to_string()).into_count().unwrap(), 42);
        assert_eq!(CountValue::from(" 7 ".to_string()).into_count().unwrap(), 7);
        assert_eq!(
            CountValue::from("8.0".to_string()).into_count().unwrap(),
            8
        );
        assert!(matches!(
            CountValue::from("many".to_string()).into_count(),
            Err(CountError::NotNumeric(_))
        ));
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(
            CountValue::from(-1_i64).into_count(),
            Err(CountError::Negative(-1))
        );
    }
}
