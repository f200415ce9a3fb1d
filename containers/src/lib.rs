#![no_std]
#![warn(clippy::nursery, clippy::pedantic, clippy::all)]

extern crate alloc;

pub mod collections;
pub mod errors;

pub use collections::{
    array::DynamicArray,
    linked_list::DoublyLinkedList,
    sequences::Sequence,
    sort::{SortStrategy, DEFAULT_SORT_THRESHOLD},
};
