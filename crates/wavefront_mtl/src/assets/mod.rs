//! Asset parsing

pub mod materials;

pub use materials::{MaterialLibrary, MtlParser};
