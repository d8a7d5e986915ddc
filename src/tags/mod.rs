//! Customer Tags
//!
//! The qualifying tag that marks a customer as a VIP, and a small sorted tag collection to test it
//! against.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Customer tag that makes a customer eligible for the VIP discount.
pub const QUALIFYING_TAG: &str = "VIP";

/// A sorted, de-duplicated set of customer tags.
///
/// Comparison is exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerTags {
    tags: SmallVec<[String; 5]>,
}

impl CustomerTags {
    /// Create a tag set from owned strings.
    #[must_use]
    pub fn new(tags: SmallVec<[String; 5]>) -> Self {
        let mut collection = Self { tags };

        collection.tags.sort();
        collection.tags.dedup();

        collection
    }

    /// Create a tag set from string slices.
    pub fn from_strs(tags: &[&str]) -> Self {
        tags.iter().copied().collect()
    }

    /// Check whether the set holds the given tag.
    pub fn contains(&self, tag: &str) -> bool {
        self.tags
            .binary_search_by(|probe| probe.as_str().cmp(tag))
            .is_ok()
    }

    /// Check whether the set holds the qualifying tag.
    pub fn is_vip(&self) -> bool {
        self.contains(QUALIFYING_TAG)
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Get the number of distinct tags.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Iterate over the tags in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CustomerTags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

/// Answer to "does this customer carry the qualifying tag".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VipStatus {
    /// Whether the customer is a VIP.
    #[serde(rename = "isVIP")]
    pub is_vip: bool,
}

impl From<&CustomerTags> for VipStatus {
    fn from(tags: &CustomerTags) -> Self {
        Self {
            is_vip: tags.is_vip(),
        }
    }
}
