use alloc::alloc::{alloc, dealloc, handle_alloc_error, realloc};

use core::{
    alloc::Layout,
    fmt,
    marker::PhantomData,
    mem,
    ops::{Index, IndexMut},
    ptr::{self, NonNull},
    slice,
};

use log::{debug, trace};

use crate::errors::{check_index, check_position, Result};

use super::{
    sequences::Sequence,
    sort::{SortStrategy, DEFAULT_SORT_THRESHOLD},
};

/// Number of slots a freshly created array can hold before its first reallocation.
pub const INITIAL_CAPACITY: usize = 10;

/// A growable list backed by one contiguous allocation.
///
/// Elements always occupy the slots `0..count()`; the slots between `count()`
/// and `capacity()` are uninitialised. When an append or insert finds the buffer
/// full, the buffer is reallocated at twice its capacity and the existing
/// elements move along with it.
pub struct DynamicArray<T> {
    ptr: NonNull<T>,
    capacity: usize,
    length: usize,
    sort_threshold: usize,
    _marker: PhantomData<T>,
}

// SAFETY: the array uniquely owns its elements.
unsafe impl<T: Send> Send for DynamicArray<T> {}
// SAFETY: shared access only ever hands out `&T`.
unsafe impl<T: Sync> Sync for DynamicArray<T> {}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }
}

impl<T> DynamicArray<T> {
    const IS_ZST: bool = mem::size_of::<T>() == 0;

    /// Creates an empty array with [`INITIAL_CAPACITY`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty array able to hold `capacity` elements without reallocating.
    ///
    /// # Panics
    ///
    /// Panics if the byte size of `capacity` elements overflows `isize`, and
    /// aborts through [`handle_alloc_error`] if the allocator fails.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (ptr, capacity) = if Self::IS_ZST {
            (NonNull::dangling(), usize::MAX)
        } else if capacity == 0 {
            (NonNull::dangling(), 0)
        } else {
            (Self::allocate(capacity), capacity)
        };

        Self {
            ptr,
            capacity,
            length: 0,
            sort_threshold: DEFAULT_SORT_THRESHOLD,
            _marker: PhantomData,
        }
    }

    /// Creates an array holding `count` clones of `value`.
    #[must_use]
    pub fn repeating(value: T, count: usize) -> Self
    where
        T: Clone,
    {
        let mut array = Self::with_capacity(count);
        for _ in 0..count {
            array.append(value.clone());
        }
        array
    }

    /// A `bool` value indicating whether the collection is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// The number of elements in the array.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.length
    }

    /// The total number of elements that the array can contain without allocating new storage.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a reference to the first element, if available.
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a reference to the last element, if available.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`](crate::errors::Error::IndexOutOfRange)
    /// if `index >= self.count()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.length)?;
        // SAFETY: `index < length`, so the slot is initialised.
        Ok(unsafe { &*self.ptr.as_ptr().add(index) })
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`](crate::errors::Error::IndexOutOfRange)
    /// if `index >= self.count()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_index(index, self.length)?;
        // SAFETY: `index < length`, so the slot is initialised.
        Ok(unsafe { &mut *self.ptr.as_ptr().add(index) })
    }

    /// Adds a new element at the end of the array.
    pub fn append(&mut self, element: T) {
        if self.length == self.capacity {
            self.grow();
        }

        unsafe {
            ptr::write(self.ptr.as_ptr().add(self.length), element);
        }

        self.length += 1;
    }

    /// Inserts a new element at the specified position.
    ///
    /// Shifts all elements from `at` onwards to the right by one position. A
    /// full buffer grows exactly like it does for [`append`](Self::append).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`](crate::errors::Error::IndexOutOfRange)
    /// if `at > self.count()`; the array is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::dynamic_array;
    ///
    /// let mut array = dynamic_array![1, 2];
    /// array.insert(3, 1).unwrap(); // Inserts 3 at index 1
    /// assert_eq!(array[1], 3);
    /// assert_eq!(array.to_string(), "[1, 3, 2]");
    /// ```
    pub fn insert(&mut self, element: T, at: usize) -> Result<()> {
        check_position(at, self.length)?;

        if self.length == self.capacity {
            self.grow();
        }

        self.shift_right(at);
        unsafe {
            ptr::write(self.ptr.as_ptr().add(at), element);
        }

        self.length += 1;
        Ok(())
    }

    /// Removes and returns the element at the specified position.
    ///
    /// All elements following the removed one are shifted one position to the left.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`](crate::errors::Error::IndexOutOfRange)
    /// if `at >= self.count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::dynamic_array;
    ///
    /// let mut array = dynamic_array![10, 20];
    /// let value = array.remove(0).unwrap();
    /// assert_eq!(value, 10);
    /// assert_eq!(array[0], 20);
    /// ```
    pub fn remove(&mut self, at: usize) -> Result<T> {
        check_index(at, self.length)?;

        let value = unsafe { ptr::read(self.ptr.as_ptr().add(at)) };
        self.shift_left(at + 1);
        self.length -= 1;

        Ok(value)
    }

    /// Removes all elements from the array, keeping its capacity.
    pub fn clear(&mut self) {
        let elements: *mut [T] = self.as_mut_slice();

        // A panicking destructor must not leave dropped slots counted as live.
        self.length = 0;
        unsafe {
            ptr::drop_in_place(elements);
        }
    }

    /// Reserves enough space to store the specified number of elements.
    pub fn reserve_capacity(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity {
            self.realloc(new_capacity);
        }
    }

    /// The length above which [`sort`](Self::sort) uses quicksort.
    #[must_use]
    pub const fn sort_threshold(&self) -> usize {
        self.sort_threshold
    }

    pub fn set_sort_threshold(&mut self, threshold: usize) {
        self.sort_threshold = threshold;
    }

    #[must_use]
    pub fn with_sort_threshold(mut self, threshold: usize) -> Self {
        self.sort_threshold = threshold;
        self
    }

    /// The algorithm [`sort`](Self::sort) would run on the current contents.
    #[must_use]
    pub const fn sort_strategy(&self) -> SortStrategy {
        SortStrategy::select(self.length, self.sort_threshold)
    }

    /// Sorts the array in ascending order.
    ///
    /// Arrays longer than [`sort_threshold`](Self::sort_threshold) are
    /// quicksorted, shorter ones bubble sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::dynamic_array;
    ///
    /// let mut array = dynamic_array![5, 3, 8];
    /// array.sort();
    /// assert_eq!(array.to_string(), "[3, 5, 8]");
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_with(self.sort_strategy());
    }

    /// Sorts the array with `strategy`, ignoring the threshold.
    pub fn sort_with(&mut self, strategy: SortStrategy)
    where
        T: Ord,
    {
        strategy.apply(self.as_mut_slice());
        debug!("{strategy} sort done on {} elements", self.length);
    }

    fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.length) }
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.length) }
    }

    fn allocate(capacity: usize) -> NonNull<T> {
        let layout = Layout::array::<T>(capacity).expect("Invalid layout");
        let raw = unsafe { alloc(layout).cast::<T>() };
        NonNull::new(raw).unwrap_or_else(|| handle_alloc_error(layout))
    }

    fn grow(&mut self) {
        let new_capacity = if self.capacity == 0 {
            INITIAL_CAPACITY
        } else {
            self.capacity.checked_mul(2).expect("Capacity overflow")
        };
        trace!("growing storage from {} to {new_capacity} slots", self.capacity);
        self.realloc(new_capacity);
    }

    /// Moves the live prefix into an allocation of `new_capacity` slots.
    fn realloc(&mut self, new_capacity: usize) {
        if Self::IS_ZST {
            return;
        }

        let new_layout = Layout::array::<T>(new_capacity).expect("Invalid layout");
        let new_ptr = unsafe {
            if self.capacity == 0 {
                alloc(new_layout)
            } else {
                let old_layout = Layout::array::<T>(self.capacity).expect("Invalid layout");
                realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size())
            }
        };

        self.ptr = NonNull::new(new_ptr.cast()).unwrap_or_else(|| handle_alloc_error(new_layout));
        self.capacity = new_capacity;
    }

    /// Moves `from..length` one slot right. The caller guarantees `length < capacity`.
    fn shift_right(&mut self, from: usize) {
        unsafe {
            let src = self.ptr.as_ptr().add(from);
            ptr::copy(src, src.add(1), self.length - from);
        }
    }

    /// Moves `from..length` one slot left, over the slot at `from - 1`.
    fn shift_left(&mut self, from: usize) {
        unsafe {
            let src = self.ptr.as_ptr().add(from);
            ptr::copy(src, src.sub(1), self.length - from);
        }
    }
}

impl<T> DynamicArray<Option<T>> {
    /// Removes every `None` slot, scanning from the back. Returns how many were removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::dynamic_array;
    ///
    /// let mut array = dynamic_array![Some(1), None, Some(3), None];
    /// assert_eq!(array.trim(), 2);
    /// assert_eq!(array, dynamic_array![Some(1), Some(3)]);
    /// ```
    pub fn trim(&mut self) -> usize {
        let before = self.length;

        for index in (0..self.length).rev() {
            if self[index].is_none() {
                // The downward scan keeps `index` below the shrinking length.
                let _ = self.remove(index);
            }
        }

        let removed = before - self.length;
        trace!("trimmed {removed} absent slots");
        removed
    }
}

impl<T> Sequence for DynamicArray<T> {
    type Item = T;

    fn count(&self) -> usize {
        Self::count(self)
    }

    fn get(&self, index: usize) -> Result<&T> {
        Self::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        Self::get_mut(self, index)
    }

    fn append(&mut self, element: T) {
        Self::append(self, element);
    }

    fn insert(&mut self, element: T, at: usize) -> Result<()> {
        Self::insert(self, element, at)
    }

    fn remove(&mut self, at: usize) -> Result<T> {
        Self::remove(self, at)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn sort(&mut self)
    where
        T: Ord,
    {
        Self::sort(self);
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        assert!((index < self.length), "Index out of bounds");
        unsafe { &*self.ptr.as_ptr().add(index) }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        assert!((index < self.length), "Index out of bounds");
        unsafe { &mut *self.ptr.as_ptr().add(index) }
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity);
        copy.sort_threshold = self.sort_threshold;
        for element in self.as_slice() {
            copy.append(element.clone());
        }
        copy
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynamicArray<T> {}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.as_slice().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("]")
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let mut array = Self::default();
        array.reserve_capacity(lower);
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(self.as_mut_slice());
        }

        if !Self::IS_ZST && self.capacity > 0 {
            let layout = Layout::array::<T>(self.capacity).expect("Invalid layout");
            unsafe {
                dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
            }
        }
    }
}

#[macro_export]
macro_rules! dynamic_array {
    ($elem:expr; $count:expr) => {{
        $crate::collections::array::DynamicArray::repeating($elem, $count)
    }};

    ($($elem:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut array = $crate::collections::array::DynamicArray::new();
        $(array.append($elem);)*
        array
    }};
}
