use alloc::vec::Vec;

use crate::VisibleItemGeometry;

/// The realized items of one frame, stored bottom-to-top.
///
/// The positioner walks items from the bottom of the screen upwards, because a lower header can
/// push an upper one but never the reverse. Hosts that enumerate children top-to-bottom can use
/// [`Self::from_top_to_bottom`] or [`Self::push_top_to_bottom`].
///
/// The buffer can be reused across frames via [`Self::clear`].
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometrySnapshot {
    items: Vec<VisibleItemGeometry>, // bottom-most first
}

impl GeometrySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Wraps items already ordered bottom-most first.
    pub fn from_bottom_to_top(items: Vec<VisibleItemGeometry>) -> Self {
        Self { items }
    }

    /// Collects items ordered top-most first.
    pub fn from_top_to_bottom(items: impl IntoIterator<Item = VisibleItemGeometry>) -> Self {
        let mut items: Vec<_> = items.into_iter().collect();
        items.reverse();
        Self { items }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Appends an item above every item pushed so far.
    pub fn push_bottom_to_top(&mut self, item: VisibleItemGeometry) {
        self.items.push(item);
    }

    /// Inserts an item below every item pushed so far.
    ///
    /// This is `O(n)` per call; prefer [`Self::push_bottom_to_top`] when the host can walk its
    /// children in reverse.
    pub fn push_top_to_bottom(&mut self, item: VisibleItemGeometry) {
        self.items.insert(0, item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in bottom-to-top order.
    pub fn as_slice(&self) -> &[VisibleItemGeometry] {
        &self.items
    }

    pub fn iter_bottom_to_top(&self) -> impl DoubleEndedIterator<Item = &VisibleItemGeometry> {
        self.items.iter()
    }

    pub fn iter_top_to_bottom(&self) -> impl DoubleEndedIterator<Item = &VisibleItemGeometry> {
        self.items.iter().rev()
    }

    /// The first realized item in top-to-bottom order, whether or not it is inside the viewport.
    pub fn topmost(&self) -> Option<&VisibleItemGeometry> {
        self.items.last()
    }

    pub fn bottommost(&self) -> Option<&VisibleItemGeometry> {
        self.items.first()
    }
}
