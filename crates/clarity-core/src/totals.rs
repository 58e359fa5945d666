//! Time spent per tag.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::Serialize;

use crate::TimeSpan;

/// Elapsed seconds per tag, ordered by tag name.
///
/// Always recomputed from a full set of spans with [`tag_totals`]. Totals are
/// signed: a span that ends before it starts contributes a negative amount.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TagTotals(BTreeMap<String, i64>);

impl TagTotals {
    /// Returns the total for `tag`, if any span carried it.
    pub fn get(&self, tag: &str) -> Option<i64> {
        self.0.get(tag).copied()
    }

    /// Iterates over `(tag, seconds)` in lexicographic tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(tag, seconds)| (tag.as_str(), *seconds))
    }

    /// Number of distinct tags.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no span carried a tag.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest single total, used to scale bar charts.
    pub fn max(&self) -> Option<i64> {
        self.0.values().copied().max()
    }

    /// Consumes the totals, returning the underlying map.
    pub fn into_inner(self) -> BTreeMap<String, i64> {
        self.0
    }
}

impl<'a> IntoIterator for &'a TagTotals {
    type Item = (&'a String, &'a i64);
    type IntoIter = btree_map::Iter<'a, String, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Sums elapsed seconds per tag across `spans`.
///
/// Every expanded tag on a span receives the span's full elapsed time, so a
/// tag repeated on one span is counted once per occurrence.
pub fn tag_totals<'a, I>(spans: I) -> TagTotals
where
    I: IntoIterator<Item = &'a TimeSpan>,
{
    let mut totals: BTreeMap<String, i64> = BTreeMap::new();

    for span in spans {
        let elapsed = span.elapsed_seconds();
        for tag in &span.tags {
            *totals.entry(tag.clone()).or_default() += elapsed;
        }
    }

    TagTotals(totals)
}
