// Copyright 2026 the Fontmatch Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marked-content tags for tagged document structure.
//!
//! A [`ContentTag`] marks one piece of drawn content with a role (the tag
//! type, comparable to an HTML element name) and a bag of named properties.
//! The two properties with dedicated accessors are the numeric content
//! identifier, which ties the content into the document's logical structure
//! tree, and the actual-text override used by accessibility tooling.
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided
//!   for forward compatibility.
//!
//! ## Example
//!
//! ```
//! use marked_content::{ContentTag, MissingContentId};
//!
//! let mut tag = ContentTag::with_content_id("Span", 7);
//! tag.set_actual_text("Ligature-free reading text");
//! assert_eq!(tag.content_id(), Ok(7));
//! assert_eq!(tag.actual_text(), Some("Ligature-free reading text"));
//!
//! let untagged = ContentTag::new("Artifact");
//! assert_eq!(untagged.content_id(), Err(MissingContentId));
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

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;
use hashbrown::HashMap;

/// Property name under which the numeric content identifier is stored.
pub const CONTENT_ID: &str = "MCID";

/// Property name under which the actual-text override is stored.
pub const ACTUAL_TEXT: &str = "ActualText";

/// A property value attached to a [`ContentTag`].
#[derive(Clone, PartialEq, Debug)]
pub enum PropertyValue {
    /// An integer value.
    Int(i64),
    /// A text value.
    Text(Arc<str>),
}

impl From<i64> for PropertyValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        Self::Text(value.into())
    }
}

impl From<Arc<str>> for PropertyValue {
    fn from(value: Arc<str>) -> Self {
        Self::Text(value)
    }
}

/// Error returned when a tag is asked for a content identifier it does not
/// carry.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MissingContentId;

impl fmt::Display for MissingContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "marked-content tag has no content identifier")
    }
}

impl core::error::Error for MissingContentId {}

/// A single tag on a single piece of marked content.
///
/// Tags carry a role naming the kind of structure element they mark and an
/// open-ended set of named properties.
#[derive(Clone, Debug)]
pub struct ContentTag {
    role: Arc<str>,
    properties: HashMap<Arc<str>, PropertyValue>,
}

impl ContentTag {
    /// Creates a tag with the given role and no properties.
    pub fn new(role: impl Into<Arc<str>>) -> Self {
        Self {
            role: role.into(),
            properties: HashMap::new(),
        }
    }

    /// Creates a tag referenced into the document's logical structure via
    /// the given content identifier.
    pub fn with_content_id(role: impl Into<Arc<str>>, id: i64) -> Self {
        let mut tag = Self::new(role);
        tag.set_property(CONTENT_ID, id);
        tag
    }

    /// Returns the role of the tag.
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the content identifier of the tag.
    ///
    /// Fails if no identifier was ever attached; content that is not part
    /// of the logical structure tree has none.
    pub fn content_id(&self) -> Result<i64, MissingContentId> {
        match self.properties.get(CONTENT_ID) {
            Some(PropertyValue::Int(id)) => Ok(*id),
            _ => Err(MissingContentId),
        }
    }

    /// Returns `true` if a content identifier is attached.
    pub fn has_content_id(&self) -> bool {
        matches!(self.properties.get(CONTENT_ID), Some(PropertyValue::Int(_)))
    }

    /// Adds or replaces a single property, returning the tag for chaining.
    pub fn set_property(
        &mut self,
        name: impl Into<Arc<str>>,
        value: impl Into<PropertyValue>,
    ) -> &mut Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Removes a single property, returning its previous value.
    pub fn remove_property(&mut self, name: &str) -> Option<PropertyValue> {
        self.properties.remove(name)
    }

    /// Returns the value of the named property.
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    /// Returns an iterator over all properties of the tag.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_ref(), value))
    }

    /// Returns the actual-text override, if one is set.
    pub fn actual_text(&self) -> Option<&str> {
        match self.properties.get(ACTUAL_TEXT) {
            Some(PropertyValue::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Sets the actual-text override, returning the tag for chaining.
    pub fn set_actual_text(&mut self, text: impl Into<Arc<str>>) -> &mut Self {
        self.set_property(ACTUAL_TEXT, text.into())
    }
}
