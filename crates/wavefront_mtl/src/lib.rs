//! # Wavefront MTL
//!
//! Parser for Wavefront material library (`.mtl`) files, the companion format of `.obj`
//! geometry. Produces an ordered, name-deduplicated [`MaterialLibrary`] of Phong-style
//! materials with colors, scalar coefficients and texture map references.
//!
//! ## Features
//!
//! - **Lenient**: unknown directives, bare scalar keywords and directives before the first
//!   `newmtl` are tolerated the way real-world exporters need
//! - **Strict colors**: malformed `Ka`/`Kd`/`Ks`/`Tf` lines abort the parse with the line number
//! - **Owned output**: every name and filename is copied, so the library outlives its input
//! - **Configurable**: delimiter sets are loaded from TOML or RON through [`ParserConfig`]
//!
//! ## Quick Start
//!
//! ```rust
//! use wavefront_mtl::prelude::*;
//!
//! fn main() -> Result<(), MtlError> {
//!     let library = MtlParser::default().parse("newmtl Red\nKd 1.0 0.0 0.0\n")?;
//!     let red = library.get("Red").expect("declared above");
//!     assert_eq!(red.diffuse, Color::rgb(1.0, 0.0, 0.0));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod assets;
pub mod config;
pub mod foundation;

pub use assets::materials::{
    Color, DecodeError, LibraryError, MapOption, MapReference, MapSlot, Material, MaterialLibrary,
    MtlError, MtlParser, MtlResult,
};
pub use config::{Config, ConfigError, ParserConfig};

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        assets::materials::{
            Color, ColorSlot, DecodeError, MapOption, MapReference, MapSlot, Material,
            MaterialLibrary, MtlError, MtlParser, MtlResult, ReflectionFace, ScalarSlot,
        },
        config::{Config, ConfigError, ParserConfig},
    };
}
