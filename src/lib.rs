#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use folio_bundle as bundle;
pub use folio_theme as theme;
pub use folio_utils as utils;
