//! Material library parsing subsystem
//!
//! Tokenizer, value decoders and directive table behind [`MtlParser`].

pub mod decoders;
pub mod directive;
pub mod library;
pub mod map_reference;
pub mod material;
pub mod mtl_parser;
pub mod tokenizer;

pub use decoders::DecodeError;
pub use directive::Directive;
pub use library::{LibraryError, MaterialLibrary};
pub use map_reference::{MapOption, MapReference};
pub use material::{Color, ColorSlot, MapSlot, Material, ReflectionFace, ScalarSlot};
pub use mtl_parser::{MtlError, MtlParser, MtlResult};
pub use tokenizer::{Token, Tokenizer};
