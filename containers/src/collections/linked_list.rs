use alloc::vec::Vec;

use core::{fmt, iter};

use log::debug;

use crate::errors::{check_index, check_position, Result};

use super::sequences::Sequence;

// The node index that represents a node's address in the arena.
type Link = usize;
const NIL: Link = Link::MAX;

#[derive(Clone, Debug)]
struct Node<T> {
    // `None` only while the slot sits on the free list.
    value: Option<T>,
    prev: Link,
    next: Link,
}

/// A doubly linked list whose nodes live in a single arena.
///
/// Neighbours are addressed by arena index rather than by pointer, so the list
/// owns every node exactly once and no reference cycles exist. Slots vacated by
/// [`remove`](Self::remove) are chained into a free list and reused by later
/// inserts.
///
/// The list keeps these invariants after every operation:
/// * `head` has no predecessor and `tail` has no successor.
/// * For adjacent nodes, `a.next == b` exactly when `b.prev == a`.
/// * An empty list has neither `head` nor `tail`; a single-node list has `head == tail`.
/// * Walking `next` from `head` visits exactly `count()` nodes and ends at `tail`.
#[derive(Clone)]
pub struct DoublyLinkedList<T> {
    nodes: Vec<Node<T>>,
    head: Link,
    tail: Link,
    free: Link,
    length: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DoublyLinkedList<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            head: NIL,
            tail: NIL,
            free: NIL,
            length: 0,
        }
    }

    /// Creates an empty list whose arena holds `capacity` nodes before reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// A `bool` value indicating whether the list is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The number of nodes in the list.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn first(&self) -> Option<&T> {
        (self.head != NIL).then(|| self.value(self.head))
    }

    #[must_use]
    pub fn last(&self) -> Option<&T> {
        (self.tail != NIL).then(|| self.value(self.tail))
    }

    /// Returns the value at `index`, walking from whichever end is closer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`](crate::errors::Error::IndexOutOfRange)
    /// if `index >= self.count()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        check_index(index, self.length)?;
        Ok(self.value(self.link_at(index)))
    }

    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`](crate::errors::Error::IndexOutOfRange)
    /// if `index >= self.count()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        check_index(index, self.length)?;
        let link = self.link_at(index);
        Ok(self.value_mut(link))
    }

    /// Links a new node after the current tail.
    pub fn append(&mut self, element: T) {
        let link = self.alloc_node(element, self.tail, NIL);

        match self.tail {
            NIL => self.head = link,
            tail => self.nodes[tail].next = link,
        }

        self.tail = link;
        self.length += 1;
    }

    /// Inserts `element` so that it becomes the node at position `at`.
    ///
    /// `at == 0` makes it the new head and `at == count()` the new tail; any
    /// other position splices it between the nodes at `at - 1` and `at`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`](crate::errors::Error::IndexOutOfRange)
    /// if `at > self.count()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::linked_list;
    ///
    /// let mut list = linked_list![1, 3];
    /// list.insert(2, 1).unwrap();
    /// list.insert(0, 0).unwrap();
    /// assert_eq!(list.to_string(), "[0, 1, 2, 3]");
    /// assert!(list.insert(9, 9).is_err());
    /// ```
    pub fn insert(&mut self, element: T, at: usize) -> Result<()> {
        check_position(at, self.length)?;

        if at == self.length {
            self.append(element);
            return Ok(());
        }

        let next = self.link_at(at);
        let prev = self.nodes[next].prev;
        let link = self.alloc_node(element, prev, next);

        self.nodes[next].prev = link;
        match prev {
            NIL => self.head = link,
            prev => self.nodes[prev].next = link,
        }

        self.length += 1;
        Ok(())
    }

    /// Unlinks the node at `at` and returns its value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`](crate::errors::Error::IndexOutOfRange)
    /// if `at >= self.count()`.
    pub fn remove(&mut self, at: usize) -> Result<T> {
        check_index(at, self.length)?;

        let link = self.link_at(at);
        self.unlink(link);
        self.length -= 1;

        Ok(self.free_node(link))
    }

    /// Drops every node. The arena keeps its allocation.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.head = NIL;
        self.tail = NIL;
        self.free = NIL;
        self.length = 0;
    }

    /// Insertion sort over values: each key moves backward past every
    /// predecessor that compares greater. Links are never rewired, and equal
    /// values keep their relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use containers::linked_list;
    ///
    /// let mut list = linked_list![5, 3, 8];
    /// list.sort();
    /// assert_eq!(list.to_string(), "[3, 5, 8]");
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        if self.length < 2 {
            return;
        }

        let mut current = self.nodes[self.head].next;
        while current != NIL {
            let mut hole = current;
            loop {
                let prev = self.nodes[hole].prev;
                if prev == NIL || self.value(prev) <= self.value(hole) {
                    break;
                }
                self.swap_values(prev, hole);
                hole = prev;
            }
            current = self.nodes[current].next;
        }

        debug!("insertion sort done on {} elements", self.length);
    }

    /// Finds the node at `index`, starting from `head` for the first half and
    /// from `tail` otherwise. The caller guarantees `index < length`.
    fn link_at(&self, index: usize) -> Link {
        if index < self.length / 2 {
            let mut link = self.head;
            for _ in 0..index {
                link = self.nodes[link].next;
            }
            link
        } else {
            let mut link = self.tail;
            for _ in index + 1..self.length {
                link = self.nodes[link].prev;
            }
            link
        }
    }

    fn value(&self, link: Link) -> &T {
        self.nodes[link]
            .value
            .as_ref()
            .expect("linked node holds a value")
    }

    fn value_mut(&mut self, link: Link) -> &mut T {
        self.nodes[link]
            .value
            .as_mut()
            .expect("linked node holds a value")
    }

    fn swap_values(&mut self, a: Link, b: Link) {
        let moved = self.nodes[a].value.take();
        self.nodes[a].value = core::mem::replace(&mut self.nodes[b].value, moved);
    }

    fn alloc_node(&mut self, value: T, prev: Link, next: Link) -> Link {
        let node = Node {
            value: Some(value),
            prev,
            next,
        };

        if self.free == NIL {
            self.nodes.push(node);
            return self.nodes.len() - 1;
        }

        // Point the free list at the reused slot's successor.
        let link = self.free;
        self.free = self.nodes[link].next;
        self.nodes[link] = node;
        link
    }

    fn free_node(&mut self, link: Link) -> T {
        let node = &mut self.nodes[link];
        let value = node.value.take().expect("linked node holds a value");
        node.prev = NIL;
        node.next = self.free;
        self.free = link;
        value
    }

    /// Bypasses `link`, moving `head`/`tail` when it is an endpoint.
    fn unlink(&mut self, link: Link) {
        let (prev, next) = (self.nodes[link].prev, self.nodes[link].next);

        match prev {
            NIL => self.head = next,
            prev => self.nodes[prev].next = next,
        }
        match next {
            NIL => self.tail = prev,
            next => self.nodes[next].prev = prev,
        }
    }

    fn values(&self) -> impl Iterator<Item = &T> + '_ {
        let mut link = self.head;
        iter::from_fn(move || {
            if link == NIL {
                return None;
            }
            let node = &self.nodes[link];
            link = node.next;
            node.value.as_ref()
        })
    }
}

impl<T> Sequence for DoublyLinkedList<T> {
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

    fn first(&self) -> Option<&T> {
        Self::first(self)
    }

    fn last(&self) -> Option<&T> {
        Self::last(self)
    }
}

impl<T: PartialEq> PartialEq for DoublyLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.values().eq(other.values())
    }
}

impl<T: Eq> Eq for DoublyLinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.values().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DoublyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.append(value);
        }
    }
}

#[macro_export]
macro_rules! linked_list {
    ($($elem:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut list = $crate::collections::linked_list::DoublyLinkedList::new();
        $(list.append($elem);)*
        list
    }};
}
