//! `enstools` is a toolkit of fast and reliable libraries for working with
//! evaluated nuclear structure data
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use enstools_utils as utils;

#[cfg(feature = "ensdf")]
#[cfg_attr(docsrs, doc(cfg(feature = "ensdf")))]
#[doc(inline)]
pub use enstools_ensdf as ensdf;
