//! coloring - incremental, line-at-a-time syntax tagging
//!
//! Each line of a document is tagged from its own text plus the
//! [`syntax::BlockState`] the previous line ended in, so editors can
//! re-highlight only what an edit touched.

pub mod config;
pub mod error;
pub mod render;
pub mod syntax;

pub use error::{Error, Result};
