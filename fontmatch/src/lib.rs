// Copyright 2026 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font candidate ranking and best-match selection.
//!
//! This crate answers one question for a document layout engine: given the
//! fonts that are actually available, which of them best satisfies a
//! requested font-family list and style? Candidates are scored against each
//! family preference in priority order and sorted best to worst, so a
//! caller can take the best match or walk the full ranking until it finds a
//! font with the glyph coverage it needs.
//!
//! Font files are never opened here. Each candidate is described by a
//! [`FontDescriptor`] produced elsewhere (family name, bold/italic/monospace
//! flags, weight and italic angle), optionally wrapped with an alias name
//! that stands in for the descriptor's family during matching.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided
//!   for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use fontmatch::{FontCandidate, FontDescriptor, FontRanking, StyleRequest};
//! use std::sync::Arc;
//!
//! let candidates = vec![
//!     FontCandidate::new(Arc::new(FontDescriptor::new("Helvetica"))),
//!     FontCandidate::new(Arc::new(FontDescriptor {
//!         bold: true,
//!         ..FontDescriptor::new("Arial")
//!     })),
//! ];
//! let ranking = FontRanking::rank(candidates, ["Arial"], StyleRequest::default()).unwrap();
//! assert_eq!(ranking.best_match().descriptor().family_name.as_ref(), "Arial");
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![no_std]

extern crate alloc;

mod font;
mod matching;
mod ranking;
mod style;

pub use font::{FontCandidate, FontDescriptor};
pub use ranking::{FontRanking, RankError};
pub use style::StyleRequest;
