pub mod array;
pub mod linked_list;
pub mod sequences;
pub mod sort;
