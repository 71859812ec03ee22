// Copyright 2026 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ranking of font candidates against a selection request.

use super::font::FontCandidate;
use super::matching::{self, MatchKey};
use super::style::StyleRequest;
use alloc::vec::Vec;
use core::fmt;
use core::slice;

/// Error returned when a ranking cannot be produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RankError {
    /// No candidates were supplied, so no best match can exist.
    NoCandidates,
}

impl fmt::Display for RankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => write!(f, "cannot rank an empty set of font candidates"),
        }
    }
}

impl core::error::Error for RankError {}

/// Candidate fonts ordered from best to worst match for one request.
///
/// A ranking is computed once, at construction, and is immutable
/// afterwards. Family preferences are priority ordered: the first family
/// decides the order and later families only break ties, so a candidate
/// that misses the most-preferred family is judged against the next one
/// rather than punished outright. The last family in the list is the
/// fallback and is always scored on style, matching name or not.
#[derive(Clone, Debug)]
pub struct FontRanking {
    fonts: Vec<FontCandidate>,
}

impl FontRanking {
    /// Ranks `candidates` against the given family preferences and style.
    ///
    /// `families` is the priority-ordered list of requested family names,
    /// most preferred first, and may be empty, in which case candidates are
    /// ranked by style alone. When the style request leaves bold and italic
    /// unspecified, they are inferred per family name ("bold", "italic" and
    /// "oblique" as substrings); the literal family name "monospace"
    /// requests the monospace characteristic instead of a name match.
    ///
    /// Candidates tying on every preference appear in an unspecified
    /// relative order.
    ///
    /// Returns [`RankError::NoCandidates`] if `candidates` is empty.
    pub fn rank<C, F>(candidates: C, families: F, style: StyleRequest) -> Result<Self, RankError>
    where
        C: IntoIterator<Item = FontCandidate>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        let preferences = matching::build_preferences(families, style);
        let mut ranked: Vec<(MatchKey, FontCandidate)> = candidates
            .into_iter()
            .map(|candidate| (MatchKey::new(&candidate), candidate))
            .collect();
        if ranked.is_empty() {
            return Err(RankError::NoCandidates);
        }
        ranked.sort_by(|a, b| matching::compare(&preferences, &a.0, &b.0));
        Ok(Self {
            fonts: ranked.into_iter().map(|(_, candidate)| candidate).collect(),
        })
    }

    /// Returns the best matching candidate.
    ///
    /// Ranking knows nothing about glyph coverage; if this font lacks the
    /// glyphs a caller needs, the caller should walk [`fonts`](Self::fonts)
    /// in order until one covers them.
    pub fn best_match(&self) -> &FontCandidate {
        &self.fonts[0]
    }

    /// Returns all candidates, ordered best to worst.
    pub fn fonts(&self) -> &[FontCandidate] {
        &self.fonts
    }

    /// Returns an iterator over the candidates, ordered best to worst.
    pub fn iter(&self) -> slice::Iter<'_, FontCandidate> {
        self.fonts.iter()
    }

    /// Consumes the ranking, returning the ordered candidates.
    pub fn into_fonts(self) -> Vec<FontCandidate> {
        self.fonts
    }
}

impl<'a> IntoIterator for &'a FontRanking {
    type Item = &'a FontCandidate;
    type IntoIter = slice::Iter<'a, FontCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
