//! Foundation module - Core utilities and types
//!
//! This module provides fundamental utilities used throughout the crate:
//! - Math type aliases shared with renderers
//! - Logging utilities

pub mod logging;
pub mod math;
