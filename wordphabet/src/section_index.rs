use alloc::string::String;
use alloc::vec::Vec;

use crate::key::first_letter_uppercase;

/// An immutable mapping from dataset position to section label.
///
/// The index holds position `p` iff `p` is the first item of a section: `p == 0`, or the section
/// key of item `p` differs from that of item `p - 1`. Positions are stored in a sorted `Vec`, so
/// lookups and predecessor queries are binary searches.
///
/// Build it once per dataset and share it by reference; it is never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SectionIndex {
    positions: Vec<usize>,
    labels: Vec<String>,
}

impl SectionIndex {
    /// Builds the index in a single pass over `items`, labelling each section with its key.
    pub fn build<I, S>(items: I, mut section_key: impl FnMut(&str) -> String) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut positions = Vec::new();
        let mut labels: Vec<String> = Vec::new();

        for (position, item) in items.into_iter().enumerate() {
            let key = section_key(item.as_ref());
            if labels.last() != Some(&key) {
                positions.push(position);
                labels.push(key);
            }
        }

        sdebug!(sections = positions.len(), "SectionIndex::build");
        Self { positions, labels }
    }

    /// Builds the index using [`first_letter_uppercase`] as the section key.
    pub fn from_items<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build(items, first_letter_uppercase)
    }

    /// Builds the index from explicit `(position, label)` entries.
    ///
    /// Entries may come in any order. When a position repeats, the first label wins.
    pub fn from_entries<L: Into<String>>(entries: impl IntoIterator<Item = (usize, L)>) -> Self {
        let mut entries: Vec<(usize, String)> =
            entries.into_iter().map(|(p, l)| (p, l.into())).collect();
        // Stable: equal positions keep their input order.
        entries.sort_by_key(|&(p, _)| p);

        let mut positions = Vec::with_capacity(entries.len());
        let mut labels = Vec::with_capacity(entries.len());
        for (position, label) in entries {
            if positions.last() == Some(&position) {
                swarn!(position, "SectionIndex::from_entries: duplicate position ignored");
                continue;
            }
            positions.push(position);
            labels.push(label);
        }

        Self { positions, labels }
    }

    /// Reassembles an index from its parts, as returned by [`positions`](Self::positions) and
    /// the labels of [`iter`](Self::iter).
    ///
    /// Returns `None` unless `positions` is strictly increasing and pairs up one-to-one with
    /// `labels`.
    pub fn from_parts(positions: Vec<usize>, labels: Vec<String>) -> Option<Self> {
        if positions.len() != labels.len() || positions.windows(2).any(|w| w[0] >= w[1]) {
            swarn!(
                positions = positions.len(),
                labels = labels.len(),
                "SectionIndex::from_parts: rejected malformed parts"
            );
            return None;
        }
        Some(Self { positions, labels })
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Section-start positions, ascending.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// `(position, label)` pairs in ascending position order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.positions
            .iter()
            .zip(self.labels.iter())
            .map(|(p, l)| (*p, l.as_str()))
    }

    /// The label of the section starting at `position`, if a section starts there.
    pub fn get(&self, position: usize) -> Option<&str> {
        let i = self.positions.binary_search(&position).ok()?;
        self.labels.get(i).map(String::as_str)
    }

    pub fn contains(&self, position: usize) -> bool {
        self.positions.binary_search(&position).is_ok()
    }

    /// The greatest section start strictly before `position`.
    pub fn section_start_before(&self, position: usize) -> Option<(usize, &str)> {
        let i = self.positions.partition_point(|&p| p < position);
        self.entry(i.checked_sub(1)?)
    }

    /// The section `position` belongs to: the greatest section start `<= position`.
    pub fn section_containing(&self, position: usize) -> Option<(usize, &str)> {
        let i = self.positions.partition_point(|&p| p <= position);
        self.entry(i.checked_sub(1)?)
    }

    /// The first position of the section labelled `label`.
    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.iter().find(|&(_, l)| l == label).map(|(p, _)| p)
    }

    fn entry(&self, i: usize) -> Option<(usize, &str)> {
        Some((*self.positions.get(i)?, self.labels.get(i)?.as_str()))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for SectionIndex {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Parts {
            positions: Vec<usize>,
            labels: Vec<String>,
        }

        let Parts { positions, labels } =
            <Parts as serde::Deserialize>::deserialize(deserializer)?;
        Self::from_parts(positions, labels).ok_or_else(|| {
            serde::de::Error::custom(
                "section positions must be strictly increasing and match labels one-to-one",
            )
        })
    }
}
