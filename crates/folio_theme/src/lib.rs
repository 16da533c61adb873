//! Appearance tables for the Folio document UI.
//!
//! Named compile-time constants controlling visual presentation of the
//! document picker and its preview views, plus the small const value
//! types they are expressed in. No behavior lives here; rendering code
//! reads these tables.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Modules

mod color;
mod geometry;

pub mod picker;
pub mod preview;

// -----------------------------------------------------------------------------
// Top-level exports

pub use color::{LinearRgba, WhiteAlpha};
pub use geometry::{EdgeInsets, Size};
