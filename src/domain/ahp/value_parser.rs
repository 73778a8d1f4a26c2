//! Value Parser - Turns a judge's raw token into a real number.
//!
//! Accepted forms are decimal literals (`3`, `0.25`) and simple fractions
//! (`1/3`). Parsing is pure and allocation-free on the success path.

use thiserror::Error;

/// Why a token could not be read as a judgment value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("value is blank")]
    Empty,

    #[error("malformed fraction \"{token}\"")]
    MalformedFraction { token: String },

    #[error("fraction \"{token}\" has a zero denominator")]
    ZeroDenominator { token: String },

    #[error("\"{token}\" is not a number")]
    NotANumber { token: String },

    #[error("\"{token}\" is not finite")]
    NonFinite { token: String },

    #[error("\"{token}\" must be greater than zero")]
    NonPositive { token: String },
}

/// Parses a token into a finite real. Zero and negative values are allowed.
///
/// # Rules
/// - Surrounding whitespace is ignored; an empty token is an error.
/// - A token containing `/` must split into exactly two non-empty numeric
///   parts `a/b` with `b != 0`; the result is `a / b`.
/// - Anything else must be a complete floating-point literal.
/// - NaN and infinities are rejected.
pub fn parse_value(token: &str) -> Result<f64, ParseError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let value = if trimmed.contains('/') {
        parse_fraction(trimmed)?
    } else {
        parse_number(trimmed, trimmed)?
    };

    if !value.is_finite() {
        return Err(ParseError::NonFinite {
            token: trimmed.to_string(),
        });
    }

    Ok(value)
}

/// Parses a token that must be a strictly positive judgment.
pub fn parse_judgment(token: &str) -> Result<f64, ParseError> {
    let value = parse_value(token)?;
    if value <= 0.0 {
        return Err(ParseError::NonPositive {
            token: token.trim().to_string(),
        });
    }
    Ok(value)
}

fn parse_fraction(token: &str) -> Result<f64, ParseError> {
    let mut parts = token.split('/');
    let (numerator, denominator) = match (parts.next(), parts.next(), parts.next()) {
        (Some(a), Some(b), None) if !a.trim().is_empty() && !b.trim().is_empty() => {
            (a.trim(), b.trim())
        }
        _ => {
            return Err(ParseError::MalformedFraction {
                token: token.to_string(),
            })
        }
    };

    let a = parse_number(numerator, token)?;
    let b = parse_number(denominator, token)?;

    if !a.is_finite() || !b.is_finite() {
        return Err(ParseError::NonFinite {
            token: token.to_string(),
        });
    }
    if b == 0.0 {
        return Err(ParseError::ZeroDenominator {
            token: token.to_string(),
        });
    }

    Ok(a / b)
}

fn parse_number(part: &str, token: &str) -> Result<f64, ParseError> {
    part.parse::<f64>().map_err(|_| ParseError::NotANumber {
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parses_integer_and_decimal() {
        assert_relative_eq!(parse_value("3").unwrap(), 3.0);
        assert_relative_eq!(parse_value("0.25").unwrap(), 0.25);
        assert_relative_eq!(parse_value("  7.5 ").unwrap(), 7.5);
    }

    #[test]
    fn parses_fraction() {
        assert_relative_eq!(parse_value("1/3").unwrap(), 1.0 / 3.0);
        assert_relative_eq!(parse_value(" 2 / 4 ").unwrap(), 0.5);
    }

    #[test]
    fn blank_is_empty_error() {
        assert_eq!(parse_value(""), Err(ParseError::Empty));
        assert_eq!(parse_value("   "), Err(ParseError::Empty));
    }

    #[test]
    fn fraction_with_extra_slash_is_malformed() {
        assert!(matches!(
            parse_value("1/2/3"),
            Err(ParseError::MalformedFraction { .. })
        ));
    }

    #[test]
    fn fraction_with_missing_part_is_malformed() {
        assert!(matches!(parse_value("/3"), Err(ParseError::MalformedFraction { .. })));
        assert!(matches!(parse_value("3/"), Err(ParseError::MalformedFraction { .. })));
    }

    #[test]
    fn zero_denominator_is_rejected() {
        assert_eq!(
            parse_value("1/0"),
            Err(ParseError::ZeroDenominator {
                token: "1/0".to_string()
            })
        );
    }

    #[test]
    fn non_numeric_is_rejected() {
        assert!(matches!(parse_value("abc"), Err(ParseError::NotANumber { .. })));
        assert!(matches!(parse_value("x/2"), Err(ParseError::NotANumber { .. })));
        assert!(matches!(parse_value("3abc"), Err(ParseError::NotANumber { .. })));
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(matches!(parse_value("inf"), Err(ParseError::NonFinite { .. })));
        assert!(matches!(parse_value("NaN"), Err(ParseError::NonFinite { .. })));
        assert!(matches!(parse_value("1e400"), Err(ParseError::NonFinite { .. })));
    }

    #[test]
    fn parse_value_allows_zero_and_negative() {
        assert_relative_eq!(parse_value("0").unwrap(), 0.0);
        assert_relative_eq!(parse_value("-2").unwrap(), -2.0);
    }

    #[test]
    fn parse_judgment_requires_positive() {
        assert!(matches!(parse_judgment("0"), Err(ParseError::NonPositive { .. })));
        assert!(matches!(parse_judgment("-5"), Err(ParseError::NonPositive { .. })));
        assert!(matches!(parse_judgment("1/-3"), Err(ParseError::NonPositive { .. })));
        assert_relative_eq!(parse_judgment("1/5").unwrap(), 0.2);
    }

    #[test]
    fn error_messages_quote_the_token() {
        let err = parse_judgment("abc").unwrap_err();
        assert_eq!(err.to_string(), "\"abc\" is not a number");
    }
}
