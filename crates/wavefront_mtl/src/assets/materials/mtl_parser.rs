//! MTL (Material Template Library) file parser
//!
//! Parses Wavefront .mtl text into a [`MaterialLibrary`]. The document is processed one
//! line at a time; the first strict decode failure stops the parse.

use std::collections::TryReserveError;

use super::decoders::DecodeError;
use super::directive::{Directive, DirectiveFailure};
use super::library::MaterialLibrary;
use super::tokenizer::Tokenizer;
use crate::config::ParserConfig;

/// MTL parsing errors
#[derive(thiserror::Error, Debug)]
pub enum MtlError {
    /// No input buffer was supplied
    #[error("no MTL input supplied")]
    MissingInput,

    /// Growing the library or copying a string failed
    #[error("line {line}: out of memory while storing `{directive}` data")]
    Allocation {
        /// 1-based line of the failing directive
        line: usize,
        /// Directive being applied
        directive: Directive,
        /// Underlying reservation failure
        #[source]
        source: TryReserveError,
    },

    /// A strictly validated value was malformed
    #[error("line {line}: invalid `{directive}` directive: {source}")]
    Decode {
        /// 1-based line of the failing directive
        line: usize,
        /// Directive being applied
        directive: Directive,
        /// What was wrong with the value
        #[source]
        source: DecodeError,
    },
}

impl MtlError {
    /// Line the error occurred on, if it is tied to one
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::MissingInput => None,
            Self::Allocation { line, .. } | Self::Decode { line, .. } => Some(*line),
        }
    }
}

/// Result type for MTL parsing
pub type MtlResult<T> = Result<T, MtlError>;

/// MTL document parser
#[derive(Debug, Clone, Default)]
pub struct MtlParser {
    config: ParserConfig,
}

impl MtlParser {
    /// Create a parser with custom delimiter sets
    pub const fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse MTL text into a fresh library
    ///
    /// # Arguments
    /// * `input` - The text contents of the MTL file
    ///
    /// # Returns
    /// Every declared material in declaration order, or the first error
    pub fn parse(&self, input: &str) -> MtlResult<MaterialLibrary> {
        let mut library = MaterialLibrary::new();
        self.parse_into(&mut library, Some(input))?;
        Ok(library)
    }

    /// Parse MTL text into a caller-owned library
    ///
    /// Materials already in `library` can be reselected by `newmtl` but no material is
    /// current when parsing starts. On error the library keeps everything decoded before
    /// the failing line.
    pub fn parse_into(&self, library: &mut MaterialLibrary, input: Option<&str>) -> MtlResult<()> {
        let input = input.ok_or(MtlError::MissingInput)?;
        let mut current = None;

        for token in Tokenizer::new(input, &self.config.line_delimiters) {
            self.parse_line(library, &mut current, token.text)
                .map_err(|(directive, failure)| {
                    let line = line_number(input, token.start, &self.config.line_delimiters);
                    match failure {
                        DirectiveFailure::Decode(source) => MtlError::Decode {
                            line,
                            directive,
                            source,
                        },
                        DirectiveFailure::Allocation(source) => MtlError::Allocation {
                            line,
                            directive,
                            source,
                        },
                    }
                })?;
        }

        log::debug!("Parsed MTL document with {} materials", library.len());
        Ok(())
    }

    fn parse_line(
        &self,
        library: &mut MaterialLibrary,
        current: &mut Option<usize>,
        line: &str,
    ) -> Result<(), (Directive, DirectiveFailure)> {
        let horizontal = self.config.horizontal_delimiters.as_str();
        let line = line.trim_start_matches(|c: char| horizontal.contains(c));

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let mut tokens = Tokenizer::new(line, horizontal);
        let Some(keyword) = tokens.next() else {
            return Ok(());
        };

        let Some(directive) = Directive::from_keyword(keyword.text) else {
            // Ignore unknown commands silently
            log::trace!("Ignoring unknown directive '{}'", keyword.text);
            return Ok(());
        };

        directive
            .apply(library, current, &mut tokens)
            .map_err(|failure| (directive, failure))
    }
}

/// 1-based line number of byte `offset`
///
/// A `\r\n` pair counts as one line break.
fn line_number(input: &str, offset: usize, line_delimiters: &str) -> usize {
    let mut breaks = 0;
    let mut previous = None;
    for c in input[..offset].chars() {
        if line_delimiters.contains(c) && !(c == '\n' && previous == Some('\r')) {
            breaks += 1;
        }
        previous = Some(c);
    }
    breaks + 1
}
