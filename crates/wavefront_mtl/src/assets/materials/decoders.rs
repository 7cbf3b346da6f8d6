//! Value decoders for directive arguments
//!
//! Colors are strict and report [`DecodeError`]s. Scalars are lenient: exporters routinely
//! write a bare `illum` or `Ns`, so a missing or unreadable number decodes as zero.

use std::str::FromStr;

use super::material::Color;
use super::tokenizer::{Token, Tokenizer};

/// Why a strictly decoded value was rejected
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Color directive without its first channel
    #[error("red channel is required")]
    MissingRed,

    /// Token is not a floating point literal
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// Extra token after the blue channel
    #[error("unexpected trailing value '{0}'")]
    TrailingGarbage(String),
}

fn parse_channel(token: Token<'_>) -> Result<f32, DecodeError> {
    token
        .text
        .parse()
        .map_err(|_| DecodeError::InvalidNumber(token.text.to_string()))
}

/// Next token if it is present and non-empty
fn present<'a>(tokens: &mut Tokenizer<'a, '_>) -> Option<Token<'a>> {
    tokens.next().filter(|token| !token.is_empty())
}

/// Decode `r [g [b]]` into an opaque color
///
/// An omitted or empty green copies red into green and blue. An omitted or empty blue copies
/// red, not green, into blue.
pub fn decode_color(tokens: &mut Tokenizer<'_, '_>) -> Result<Color, DecodeError> {
    let red = present(tokens).ok_or(DecodeError::MissingRed)?;
    let r = parse_channel(red)?;
    let mut color = Color::splat(r);

    let Some(green) = present(tokens) else {
        return Ok(color);
    };
    color.g = parse_channel(green)?;

    let Some(blue) = present(tokens) else {
        return Ok(color);
    };
    color.b = parse_channel(blue)?;

    match tokens.next_value() {
        Some(extra) => Err(DecodeError::TrailingGarbage(extra.text.to_string())),
        None => Ok(color),
    }
}

/// Longest leading part of `text` that parses as a `T`
///
/// `2.0` reads as the integer `2` and `10asdf` as `10`.
fn parse_prefix<T: FromStr>(text: &str) -> Option<T> {
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(text.len());
    (1..=end).rev().find_map(|len| text[..len].parse().ok())
}

/// Decode the first value of the line as a float, zero if missing or unreadable
///
/// Anything after the leading number is ignored.
pub fn decode_float(tokens: &mut Tokenizer<'_, '_>) -> f32 {
    tokens
        .next_value()
        .and_then(|token| parse_prefix(token.text))
        .unwrap_or(0.0)
}

/// Decode the first value of the line as an integer, zero if missing or unreadable
pub fn decode_int(tokens: &mut Tokenizer<'_, '_>) -> i32 {
    tokens
        .next_value()
        .and_then(|token| parse_prefix(token.text))
        .unwrap_or(0)
}

/// Decode a line holding exactly one value, returned as raw text
///
/// `None` when the line has no value or more than one.
pub fn decode_single<'a>(tokens: &mut Tokenizer<'a, '_>) -> Option<&'a str> {
    let value = tokens.next_value()?;
    match tokens.next_value() {
        Some(_) => None,
        None => Some(value.text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn color(rest: &str) -> Result<Color, DecodeError> {
        decode_color(&mut Tokenizer::new(rest, " \t"))
    }

    #[test]
    fn test_color_three_channels() {
        assert_relative_eq!(color("0.1 0.5 0.7").unwrap(), Color::rgb(0.1, 0.5, 0.7));
    }

    #[test]
    fn test_color_single_channel_fills_all() {
        assert_relative_eq!(color("0.1").unwrap(), Color::rgb(0.1, 0.1, 0.1));
        assert_relative_eq!(color("0.1 ").unwrap(), Color::rgb(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_color_blue_aliases_red() {
        assert_relative_eq!(color("0.1 0.5").unwrap(), Color::rgb(0.1, 0.5, 0.1));
        assert_relative_eq!(color("0.1 0.5 ").unwrap(), Color::rgb(0.1, 0.5, 0.1));
    }

    #[test]
    fn test_color_alpha_is_opaque() {
        assert_eq!(color("0").unwrap().a, 1.0);
    }

    #[test]
    fn test_color_trailing_garbage() {
        assert_eq!(
            color("0.1 0.5 0.7 asdf"),
            Err(DecodeError::TrailingGarbage("asdf".to_string()))
        );
        assert!(color("0.1 0.5 0.7 0.9").is_err());
        // Trailing whitespace is not garbage
        assert!(color("0.1 0.5 0.7 ").is_ok());
    }

    #[test]
    fn test_color_missing_red() {
        assert_eq!(color(""), Err(DecodeError::MissingRed));
        assert_eq!(color(" 0.5"), Err(DecodeError::MissingRed));
    }

    #[test]
    fn test_color_invalid_number() {
        assert_eq!(
            color("0.1 green"),
            Err(DecodeError::InvalidNumber("green".to_string()))
        );
        assert!(color("red").is_err());
    }

    #[test]
    fn test_float_lenient() {
        assert_relative_eq!(decode_float(&mut Tokenizer::new("3.92", " ")), 3.92);
        assert_relative_eq!(decode_float(&mut Tokenizer::new("  32 extra", " ")), 32.0);
        assert_eq!(decode_float(&mut Tokenizer::new("", " ")), 0.0);
        assert_eq!(decode_float(&mut Tokenizer::new("abc", " ")), 0.0);
        assert_relative_eq!(decode_float(&mut Tokenizer::new("0.5abc", " ")), 0.5);
        assert_relative_eq!(decode_float(&mut Tokenizer::new("1e2", " ")), 100.0);
    }

    #[test]
    fn test_int_lenient() {
        assert_eq!(decode_int(&mut Tokenizer::new("5", " ")), 5);
        assert_eq!(decode_int(&mut Tokenizer::new("10 asdf", " ")), 10);
        assert_eq!(decode_int(&mut Tokenizer::new(" ", " ")), 0);
        assert_eq!(decode_int(&mut Tokenizer::new("asdf", " ")), 0);
        assert_eq!(decode_int(&mut Tokenizer::new("2.0", " ")), 2);
        assert_eq!(decode_int(&mut Tokenizer::new("10asdf", " ")), 10);
        assert_eq!(decode_int(&mut Tokenizer::new("-3", " ")), -3);
    }

    #[test]
    fn test_single_value() {
        assert_eq!(decode_single(&mut Tokenizer::new("Steel", " ")), Some("Steel"));
        assert_eq!(decode_single(&mut Tokenizer::new("Steel ", " ")), Some("Steel"));
        assert_eq!(decode_single(&mut Tokenizer::new("", " ")), None);
        assert_eq!(decode_single(&mut Tokenizer::new("Steel Plate", " ")), None);
    }
}
