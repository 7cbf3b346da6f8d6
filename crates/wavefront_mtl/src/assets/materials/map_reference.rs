//! Texture map references (`map_Kd`, `bump`, `refl`, ...)
//!
//! A map directive is a list of `-flag value...` options followed by a filename. The filename
//! is everything after the last option, so paths containing spaces survive intact.

use std::collections::TryReserveError;

use serde::{Deserialize, Serialize};

use super::tokenizer::{copy_token, Tokenizer};

/// One `-flag arg...` option that preceded a map filename
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapOption {
    /// Flag including its leading `-`, e.g. `-bm`
    pub flag: String,
    /// Arguments consumed by the flag
    pub args: Vec<String>,
}

/// Reference to an external texture file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapReference {
    /// Filename or path as written in the source, trimmed; may be empty
    pub file: String,
    /// Options that preceded the filename, in source order
    pub options: Vec<MapOption>,
}

impl MapReference {
    /// Reference to `file` with no options
    pub const fn new(file: String) -> Self {
        Self {
            file,
            options: Vec::new(),
        }
    }

    /// First option with the given flag
    pub fn option(&self, flag: &str) -> Option<&MapOption> {
        self.options.iter().find(|option| option.flag == flag)
    }
}

/// Most arguments an option flag consumes
///
/// The first argument is always taken. Later ones are taken only while they parse as numbers,
/// so a short `-mm 0.5 tex.png` leaves the filename alone.
fn option_arity(flag: &str) -> usize {
    match flag {
        "-mm" => 2,
        "-o" | "-s" | "-t" => 3,
        // -blendu -blendv -bm -boost -cc -clamp -imfchan -texres -type and unknown flags
        _ => 1,
    }
}

/// Decode the remainder of a map directive line
///
/// Never fails on content: a line with only options stores an empty filename. The only error
/// is running out of memory while copying strings.
pub fn decode_map(tokens: &mut Tokenizer<'_, '_>) -> Result<MapReference, TryReserveError> {
    let mut reference = MapReference::default();

    loop {
        let rest = tokens.remainder();
        let Some(token) = tokens.next_value() else {
            break;
        };

        if token.text.starts_with('-') {
            let option = decode_option(token.text, tokens)?;
            reference.options.try_reserve(1)?;
            reference.options.push(option);
            continue;
        }

        let file = rest.trim_matches(|c: char| c.is_whitespace() || tokens.is_delimiter(c));
        reference.file = copy_token(file)?;
        break;
    }

    Ok(reference)
}

fn decode_option(flag: &str, tokens: &mut Tokenizer<'_, '_>) -> Result<MapOption, TryReserveError> {
    let arity = option_arity(flag);
    let mut args = Vec::new();

    if let Some(arg) = tokens.next_value() {
        args.try_reserve(arity)?;
        args.push(copy_token(arg.text)?);

        while args.len() < arity {
            let mut lookahead = tokens.clone();
            match lookahead.next_value() {
                Some(arg) if arg.text.parse::<f32>().is_ok() => {
                    args.push(copy_token(arg.text)?);
                    *tokens = lookahead;
                }
                _ => break,
            }
        }
    }

    Ok(MapOption {
        flag: copy_token(flag)?,
        args,
    })
}
