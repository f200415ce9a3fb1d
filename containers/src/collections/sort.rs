use core::fmt;

/// Length above which [`SortStrategy::select`] switches from bubble sort to quicksort.
pub const DEFAULT_SORT_THRESHOLD: usize = 100;

/// The in-place algorithms a contiguous sequence can be sorted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortStrategy {
    /// Lomuto-partition quicksort, pivot on the last element of each range.
    Quick,
    /// Full nested passes of adjacent compare-and-swap.
    Bubble,
}

impl SortStrategy {
    /// Picks [`SortStrategy::Quick`] when `len` exceeds `threshold`, otherwise
    /// [`SortStrategy::Bubble`].
    #[must_use]
    pub const fn select(len: usize, threshold: usize) -> Self {
        if len > threshold {
            Self::Quick
        } else {
            Self::Bubble
        }
    }

    /// Sorts `elements` ascending under their natural ordering.
    pub fn apply<T: Ord>(self, elements: &mut [T]) {
        match self {
            Self::Quick => quick_sort(elements),
            Self::Bubble => bubble_sort(elements),
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quick => f.write_str("quick"),
            Self::Bubble => f.write_str("bubble"),
        }
    }
}

pub fn quick_sort<T: Ord>(mut elements: &mut [T]) {
    while elements.len() > 1 {
        let range = core::mem::take(&mut elements);
        let pivot = partition(range);
        let (left, rest) = range.split_at_mut(pivot);
        let right = &mut rest[1..];

        // Recurse into the shorter side so the stack stays logarithmic.
        if left.len() < right.len() {
            quick_sort(left);
            elements = right;
        } else {
            quick_sort(right);
            elements = left;
        }
    }
}

/// Lomuto partition around the last element; returns the pivot's final index.
fn partition<T: Ord>(elements: &mut [T]) -> usize {
    let high = elements.len() - 1;
    let mut store = 0;

    for j in 0..high {
        if elements[j] <= elements[high] {
            elements.swap(store, j);
            store += 1;
        }
    }

    elements.swap(store, high);
    store
}

pub fn bubble_sort<T: Ord>(elements: &mut [T]) {
    let last = elements.len().saturating_sub(1);

    for _ in 0..last {
        for j in 0..last {
            if elements[j] > elements[j + 1] {
                elements.swap(j, j + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn scrambled(len: u32) -> Vec<u32> {
        (0..len).map(|i| (i * 37 + 11) % 53).collect()
    }

    #[test]
    fn test_select_threshold() {
        assert_eq!(SortStrategy::select(0, DEFAULT_SORT_THRESHOLD), SortStrategy::Bubble);
        assert_eq!(SortStrategy::select(100, DEFAULT_SORT_THRESHOLD), SortStrategy::Bubble);
        assert_eq!(SortStrategy::select(101, DEFAULT_SORT_THRESHOLD), SortStrategy::Quick);
        assert_eq!(SortStrategy::select(3, 2), SortStrategy::Quick);
    }

    #[test]
    fn test_quick_sort() {
        let mut values = scrambled(250);
        let mut expected = values.clone();
        expected.sort_unstable();

        quick_sort(&mut values);
        assert_eq!(values, expected);
    }

    #[test]
    fn test_bubble_sort() {
        let mut values = scrambled(60);
        let mut expected = values.clone();
        expected.sort_unstable();

        bubble_sort(&mut values);
        assert_eq!(values, expected);
    }

    #[test]
    fn test_sorted_and_reversed_inputs() {
        let mut ascending: Vec<u32> = (0..2000).collect();
        quick_sort(&mut ascending);
        assert!(ascending.windows(2).all(|w| w[0] <= w[1]));

        let mut descending: Vec<u32> = (0..2000).rev().collect();
        quick_sort(&mut descending);
        assert_eq!(descending, (0..2000).collect::<Vec<_>>());
    }

    #[test]
    fn test_trivial_slices() {
        let mut empty: [u8; 0] = [];
        quick_sort(&mut empty);
        bubble_sort(&mut empty);

        let mut single = [4];
        SortStrategy::Quick.apply(&mut single);
        SortStrategy::Bubble.apply(&mut single);
        assert_eq!(single, [4]);
    }

    #[test]
    fn test_duplicates() {
        let mut values = [3, 1, 3, 1, 2, 2, 3];
        SortStrategy::Quick.apply(&mut values);
        assert_eq!(values, [1, 1, 2, 2, 3, 3, 3]);
    }
}
