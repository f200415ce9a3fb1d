use crate::errors::Result;

/// The positional surface shared by every container in this crate.
///
/// Callers written against `Sequence` can swap a [`DynamicArray`] for a
/// [`DoublyLinkedList`] without changing behaviour, only cost.
///
/// [`DynamicArray`]: super::array::DynamicArray
/// [`DoublyLinkedList`]: super::linked_list::DoublyLinkedList
pub trait Sequence {
    /// A type representing the sequence’s elements.
    type Item;

    /// The number of elements in the sequence.
    fn count(&self) -> usize;

    /// A `bool` value indicating whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Returns the element at `index`, or `IndexOutOfRange` when `index >= count()`.
    fn get(&self, index: usize) -> Result<&Self::Item>;

    fn get_mut(&mut self, index: usize) -> Result<&mut Self::Item>;

    /// Adds a new element at the end of the sequence.
    fn append(&mut self, element: Self::Item);

    /// Inserts `element` so that it ends up at position `at`.
    ///
    /// Elements previously at `at..` move one position towards the end.
    /// Fails with `IndexOutOfRange` when `at > count()`.
    fn insert(&mut self, element: Self::Item, at: usize) -> Result<()>;

    /// Removes and returns the element at `at`.
    fn remove(&mut self, at: usize) -> Result<Self::Item>;

    /// Removes all elements.
    fn clear(&mut self);

    /// Sorts the sequence in ascending natural order.
    fn sort(&mut self)
    where
        Self::Item: Ord;

    /// Returns a reference to the first element, if available.
    fn first(&self) -> Option<&Self::Item> {
        self.get(0).ok()
    }

    /// Returns a reference to the last element, if available.
    fn last(&self) -> Option<&Self::Item> {
        self.count()
            .checked_sub(1)
            .and_then(|index| self.get(index).ok())
    }

    /// Inserts `element` at the front.
    fn prepend(&mut self, element: Self::Item) {
        // Position 0 is always valid.
        let _ = self.insert(element, 0);
    }

    /// Removes and returns the last element of the sequence.
    fn pop_last(&mut self) -> Option<Self::Item> {
        let last = self.count().checked_sub(1)?;
        self.remove(last).ok()
    }
}
