// Copyright 2026 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Requested style for font ranking.

use core::fmt;

/// The style a caller is asking for, independent of any family name.
///
/// Each flag is tri-state: `None` means the caller expressed no preference,
/// which is distinct from explicitly requesting the trait to be absent.
/// Whether bold and italic were left unspecified governs whether they are
/// inferred from the requested family name (see
/// [`FontRanking::rank`](crate::FontRanking::rank)).
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct StyleRequest {
    /// Whether a bold font is wanted.
    pub bold: Option<bool>,
    /// Whether an italic font is wanted.
    pub italic: Option<bool>,
    /// Whether a monospace font is wanted.
    pub monospace: Option<bool>,
}

impl StyleRequest {
    /// Resolves this request against one requested family name, producing
    /// the style actually used when scoring that preference.
    ///
    /// `family` must already be lowercased. When neither bold nor italic
    /// was specified, both are inferred from the name: "bold" anywhere in
    /// the name requests bold, "italic" or "oblique" requests italic. The
    /// literal family name "monospace" requests a monospace font
    /// unconditionally; monospace is never inferred from a substring.
    pub(crate) fn resolve_for_family(mut self, family: &str) -> Self {
        if self.bold.is_none() && self.italic.is_none() {
            if family.contains("bold") {
                self.bold = Some(true);
            }
            if family.contains("italic") || family.contains("oblique") {
                self.italic = Some(true);
            }
        }
        if family == "monospace" {
            self.monospace = Some(true);
        }
        self
    }
}

impl fmt::Display for StyleRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn flag(value: Option<bool>) -> &'static str {
            match value {
                None => "unspecified",
                Some(false) => "no",
                Some(true) => "yes",
            }
        }
        write!(
            f,
            "bold: {}, italic: {}, monospace: {}",
            flag(self.bold),
            flag(self.italic),
            flag(self.monospace)
        )
    }
}
