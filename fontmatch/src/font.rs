// Copyright 2026 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Models for fonts offered to the ranker.

use alloc::sync::Arc;
use core::fmt;

/// Facts about a single physical font that are relevant for matching.
///
/// Descriptors are produced by a font parsing subsystem and are treated as
/// read-only here. The boolean flags come straight from the font's own
/// metadata; [`appears_bold`](Self::appears_bold) and
/// [`appears_italic`](Self::appears_italic) fold in the numeric weight and
/// italic angle, since plenty of real fonts set one but not the other.
#[derive(Clone, Debug, PartialEq)]
pub struct FontDescriptor {
    /// Family name as recorded in the font.
    pub family_name: Arc<str>,
    /// Bold flag from the font's metadata.
    pub bold: bool,
    /// Italic flag from the font's metadata.
    pub italic: bool,
    /// Whether all glyphs advance by the same fixed width.
    pub monospace: bool,
    /// Weight class, typically `100..=900`.
    pub weight: u16,
    /// Slant of the glyphs in degrees; negative values lean right.
    pub italic_angle: f32,
}

impl FontDescriptor {
    /// Creates a descriptor for the given family with regular-weight,
    /// upright defaults.
    pub fn new(family_name: impl Into<Arc<str>>) -> Self {
        Self {
            family_name: family_name.into(),
            ..Self::default()
        }
    }

    /// Returns `true` if the font renders as bold, either by flag or by a
    /// weight class above 500.
    pub fn appears_bold(&self) -> bool {
        self.bold || self.weight > 500
    }

    /// Returns `true` if the font renders slanted, either by flag or by a
    /// negative italic angle.
    pub fn appears_italic(&self) -> bool {
        self.italic || self.italic_angle < 0.0
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family_name: "".into(),
            bold: false,
            italic: false,
            monospace: false,
            weight: 400,
            italic_angle: 0.0,
        }
    }
}

/// A font offered to the ranker, with an optional alias name.
///
/// The descriptor is shared rather than owned; the same descriptor may
/// participate in any number of concurrent rankings. When an alias is set it
/// fully replaces the descriptor's family name for matching purposes.
#[derive(Clone, Debug)]
pub struct FontCandidate {
    descriptor: Arc<FontDescriptor>,
    alias: Option<Arc<str>>,
}

impl FontCandidate {
    /// Creates a candidate that matches under its descriptor's family name.
    pub fn new(descriptor: Arc<FontDescriptor>) -> Self {
        Self {
            descriptor,
            alias: None,
        }
    }

    /// Creates a candidate that matches under `alias` instead of its
    /// descriptor's family name.
    pub fn with_alias(descriptor: Arc<FontDescriptor>, alias: impl Into<Arc<str>>) -> Self {
        Self {
            descriptor,
            alias: Some(alias.into()),
        }
    }

    /// Returns the descriptor for this font.
    pub fn descriptor(&self) -> &FontDescriptor {
        &self.descriptor
    }

    /// Returns the alias name, if one was assigned.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Returns the name this candidate matches under: the alias if one is
    /// set, otherwise the descriptor's family name.
    pub fn matching_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.descriptor.family_name)
    }
}

impl fmt::Display for FontCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.alias {
            Some(alias) => write!(f, "{} (as {})", self.descriptor.family_name, alias),
            None => write!(f, "{}", self.descriptor.family_name),
        }
    }
}
