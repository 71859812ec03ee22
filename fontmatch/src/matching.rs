// Copyright 2026 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Similarity scoring between style preferences and font candidates.

use super::font::FontCandidate;
use super::style::StyleRequest;
use alloc::boxed::Box;
use alloc::string::String;
use core::cmp::Ordering;
use smallvec::SmallVec;

const MONOSPACE_AWARD: i32 = 5;
const UNREQUESTED_MONOSPACE_PENALTY: i32 = 1;
const FAMILY_EQUALS_AWARD: i32 = 13;
const BOLD_AWARD: i32 = 5;
const UNREQUESTED_BOLD_PENALTY: i32 = 3;
const ITALIC_AWARD: i32 = 5;
const UNREQUESTED_ITALIC_PENALTY: i32 = 3;

/// One entry of the requested family list, ready for scoring.
///
/// The family name is lowercased once and the style is resolved against it
/// up front, so scoring and comparison never mutate anything.
pub(crate) struct Preference {
    /// Lowercased requested family; `None` when the caller gave no family
    /// list at all and ranking is by style alone.
    family: Option<Box<str>>,
    style: StyleRequest,
    /// The last preference is the fallback: it is scored on style even when
    /// its family name does not match.
    is_last: bool,
}

pub(crate) type PreferenceList = SmallVec<[Preference; 4]>;

/// Builds the scoring preferences for a ranking request.
///
/// Produces one entry per requested family, in priority order. An empty
/// family list yields a single style-only entry carrying the caller's
/// request unmodified.
pub(crate) fn build_preferences<I>(families: I, style: StyleRequest) -> PreferenceList
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut preferences: PreferenceList = families
        .into_iter()
        .map(|family| {
            let family = lowercase(family.as_ref());
            Preference {
                style: style.resolve_for_family(&family),
                family: Some(family),
                is_last: false,
            }
        })
        .collect();
    match preferences.last_mut() {
        Some(last) => last.is_last = true,
        None => preferences.push(Preference {
            family: None,
            style,
            is_last: true,
        }),
    }
    preferences
}

/// Matching facts about one candidate, precomputed so that the comparator
/// does no case mapping of its own.
pub(crate) struct MatchKey {
    name: Box<str>,
    bold: bool,
    italic: bool,
    monospace: bool,
}

impl MatchKey {
    pub(crate) fn new(candidate: &FontCandidate) -> Self {
        let descriptor = candidate.descriptor();
        Self {
            name: lowercase(candidate.matching_name()),
            bold: descriptor.appears_bold(),
            italic: descriptor.appears_italic(),
            monospace: descriptor.monospace,
        }
    }
}

/// Scores how well one candidate satisfies one preference; higher is better.
///
/// Requesting monospace settles family identity by characteristics alone,
/// so the name comparison is skipped entirely for such preferences. A name
/// mismatch against any preference other than the last one returns the
/// partial score right away: the candidate is left to be judged by the
/// preferences after it, while the last preference acts as the fallback and
/// is always scored on style.
pub(crate) fn similarity(preference: &Preference, key: &MatchKey) -> i32 {
    let mut score = 0;
    let mut family_set_by_characteristics = false;
    if preference.style.monospace == Some(true) {
        family_set_by_characteristics = true;
        if key.monospace {
            score += MONOSPACE_AWARD;
        } else {
            score -= MONOSPACE_AWARD;
        }
    } else if key.monospace {
        score -= UNREQUESTED_MONOSPACE_PENALTY;
    }
    if !family_set_by_characteristics {
        let family_equals = preference
            .family
            .as_deref()
            .is_some_and(|family| !family.is_empty() && *family == *key.name);
        if family_equals {
            score += FAMILY_EQUALS_AWARD;
        } else if !preference.is_last {
            return score;
        }
    }
    if preference.style.bold == Some(true) {
        if key.bold {
            score += BOLD_AWARD;
        } else {
            score -= BOLD_AWARD;
        }
    } else if key.bold {
        score -= UNREQUESTED_BOLD_PENALTY;
    }
    if preference.style.italic == Some(true) {
        if key.italic {
            score += ITALIC_AWARD;
        } else {
            score -= ITALIC_AWARD;
        }
    } else if key.italic {
        score -= UNREQUESTED_ITALIC_PENALTY;
    }
    score
}

/// Compares two candidates preference by preference.
///
/// The first preference whose similarity differs decides; later preferences
/// only ever break ties. This keeps the requested families strictly
/// prioritized rather than blending them into one number.
pub(crate) fn compare(preferences: &[Preference], a: &MatchKey, b: &MatchKey) -> Ordering {
    for preference in preferences {
        let ordering = similarity(preference, b).cmp(&similarity(preference, a));
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn lowercase(s: &str) -> Box<str> {
    s.chars()
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .into_boxed_str()
}

#[cfg(test)]
mod tests {
    use super::{MatchKey, build_preferences, compare, similarity};
    use crate::font::{FontCandidate, FontDescriptor};
    use crate::style::StyleRequest;
    use alloc::sync::Arc;
    use core::cmp::Ordering;

    fn key(descriptor: FontDescriptor) -> MatchKey {
        MatchKey::new(&FontCandidate::new(Arc::new(descriptor)))
    }

    #[test]
    fn family_match_beats_style_match_for_a_single_preference() {
        let preferences = build_preferences(
            ["Arial"],
            StyleRequest {
                bold: Some(true),
                ..StyleRequest::default()
            },
        );
        // Family award 13, bold mismatch -5.
        let arial = key(FontDescriptor::new("Arial"));
        assert_eq!(similarity(&preferences[0], &arial), 8);
        // No family award, but the sole preference is the fallback, so the
        // bold award still applies.
        let helvetica = key(FontDescriptor {
            bold: true,
            ..FontDescriptor::new("Helvetica")
        });
        assert_eq!(similarity(&preferences[0], &helvetica), 5);
        assert_eq!(compare(&preferences, &arial, &helvetica), Ordering::Less);
    }

    #[test]
    fn family_comparison_ignores_case() {
        let preferences = build_preferences(["ARIAL"], StyleRequest::default());
        assert_eq!(similarity(&preferences[0], &key(FontDescriptor::new("arial"))), 13);
        assert_eq!(similarity(&preferences[0], &key(FontDescriptor::new("Arial"))), 13);
    }

    #[test]
    fn name_mismatch_on_a_non_last_preference_skips_style_scoring() {
        let style = StyleRequest {
            bold: Some(true),
            ..StyleRequest::default()
        };
        let preferences = build_preferences(["Verdana", "Arial"], style);
        let arial_bold = key(FontDescriptor {
            bold: true,
            ..FontDescriptor::new("Arial")
        });
        // Against "Verdana" the name mismatches, so neither the bold award
        // nor any penalty is collected.
        assert_eq!(similarity(&preferences[0], &arial_bold), 0);
        // Against the fallback "Arial" the full score applies.
        assert_eq!(similarity(&preferences[1], &arial_bold), 18);
    }

    #[test]
    fn unrequested_traits_are_penalized_lightly() {
        let preferences = build_preferences(["Arial"], StyleRequest::default());
        let regular = key(FontDescriptor::new("Arial"));
        let bold = key(FontDescriptor {
            bold: true,
            ..FontDescriptor::new("Arial")
        });
        let italic = key(FontDescriptor {
            italic: true,
            ..FontDescriptor::new("Arial")
        });
        let mono = key(FontDescriptor {
            monospace: true,
            ..FontDescriptor::new("Arial")
        });
        assert_eq!(similarity(&preferences[0], &regular), 13);
        assert_eq!(similarity(&preferences[0], &bold), 10);
        assert_eq!(similarity(&preferences[0], &italic), 10);
        assert_eq!(similarity(&preferences[0], &mono), 12);
    }

    #[test]
    fn requesting_monospace_skips_the_name_comparison() {
        let preferences = build_preferences(["monospace"], StyleRequest::default());
        // A monospace font scores the award but never the family award,
        // even though its name is nothing like "monospace".
        let mono = key(FontDescriptor {
            monospace: true,
            ..FontDescriptor::new("Courier Prime")
        });
        assert_eq!(similarity(&preferences[0], &mono), 5);
        // A font literally named "monospace" gets no credit for the name.
        let named = key(FontDescriptor::new("monospace"));
        assert_eq!(similarity(&preferences[0], &named), -5);
    }

    #[test]
    fn aliased_candidates_match_only_under_the_alias() {
        let descriptor = Arc::new(FontDescriptor::new("Foo"));
        let aliased = MatchKey::new(&FontCandidate::with_alias(descriptor, "Bar"));
        let by_alias = build_preferences(["Bar"], StyleRequest::default());
        let by_family = build_preferences(["Foo"], StyleRequest::default());
        assert_eq!(similarity(&by_alias[0], &aliased), 13);
        assert_eq!(similarity(&by_family[0], &aliased), 0);
    }

    #[test]
    fn empty_family_list_scores_style_only() {
        let preferences = build_preferences(
            core::iter::empty::<&str>(),
            StyleRequest {
                italic: Some(true),
                ..StyleRequest::default()
            },
        );
        assert_eq!(preferences.len(), 1);
        let italic = key(FontDescriptor {
            italic: true,
            ..FontDescriptor::new("Whatever")
        });
        let upright = key(FontDescriptor::new("Whatever"));
        assert_eq!(similarity(&preferences[0], &italic), 5);
        assert_eq!(similarity(&preferences[0], &upright), -5);
    }

    #[test]
    fn empty_family_name_never_matches() {
        let preferences = build_preferences([""], StyleRequest::default());
        assert_eq!(similarity(&preferences[0], &key(FontDescriptor::new(""))), 0);
    }

    #[test]
    fn ties_on_early_preferences_fall_through_to_later_ones() {
        let style = StyleRequest {
            bold: Some(true),
            ..StyleRequest::default()
        };
        let preferences = build_preferences(["Verdana", "Arial"], style);
        let arial_bold = key(FontDescriptor {
            bold: true,
            ..FontDescriptor::new("Arial")
        });
        let arial_regular = key(FontDescriptor::new("Arial"));
        // Both miss "Verdana" identically; the second preference decides.
        assert_eq!(
            compare(&preferences, &arial_bold, &arial_regular),
            Ordering::Less
        );
        assert_eq!(
            compare(&preferences, &arial_regular, &arial_bold),
            Ordering::Greater
        );
    }
}
