//! Building blocks shared by the daily puzzle crates: an indexed binary heap,
//! A* search on top of it, Floyd-Warshall distances and a small DFA lexer.

pub mod astar;
pub mod floyd_warshall;
pub mod heap;
pub mod lexer;
pub mod logging;

pub use astar::{search, Edge, Search};
pub use heap::IndexedHeap;
