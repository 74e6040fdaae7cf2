//! Cursor-addressed editing on top of the linked-list store.
//!
//! Provides a single-line edit buffer with a cursor denoting the current
//! edit position, designed for embedding into a line editor's input layer.

mod buffer;

pub use buffer::{CursorOutOfBounds, LineBuffer};
