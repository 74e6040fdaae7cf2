use std::fmt;

use thiserror::Error;

use crate::list::{LinkedList, NodeId};

/// Error returned when restoring a buffer with a cursor index past the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cursor index {cursor} is out of bounds for a buffer of {len} characters")]
pub struct CursorOutOfBounds {
    /// The requested cursor index.
    pub cursor: usize,
    /// The buffer length at restore time.
    pub len: usize,
}

/// A single-line edit buffer with a cursor.
///
/// Characters are stored in a [`LinkedList`]; the cursor is a non-owning
/// handle to the character the edit position is "at", or `None` for the
/// virtual position before the first character (which is also the state of
/// an empty buffer). Insertion places the new character after the cursor,
/// deletion removes the character under it.
///
/// All four editing operations return `&mut Self` so calls can be chained,
/// and all are total: every reachable buffer state is a legal input and
/// produces a well-defined next state.
#[derive(Clone)]
pub struct LineBuffer {
    text: LinkedList<char>,
    cursor: Option<NodeId>,
}

impl LineBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self {
            text: LinkedList::new(),
            cursor: None,
        }
    }

    /// Create a buffer from existing text, with the cursor at the last
    /// character.
    pub fn from_text(text: &str) -> Self {
        text.chars().collect::<LinkedList<char>>().into()
    }

    /// Rebuild a buffer from its contents and a saved cursor index
    /// (`None` meaning the virtual before-start position).
    ///
    /// # Errors
    ///
    /// Returns [`CursorOutOfBounds`] if `cursor` does not name a character
    /// of `text`.
    pub fn from_parts(text: &str, cursor: Option<usize>) -> Result<Self, CursorOutOfBounds> {
        let mut buffer = Self::from_text(text);
        buffer.cursor = match cursor {
            None => None,
            Some(target) => {
                let Some(id) = buffer.text.find(|node| node.index == target) else {
                    return Err(CursorOutOfBounds {
                        cursor: target,
                        len: buffer.text.len(),
                    });
                };
                Some(id)
            }
        };
        Ok(buffer)
    }

    /// Insert a character at the cursor position.
    ///
    /// With the cursor before the first character (or the buffer empty) the
    /// character becomes the new head; otherwise it lands immediately after
    /// the cursor. The cursor moves onto the inserted character.
    pub fn insert(&mut self, ch: char) -> &mut Self {
        let inserted = match self.cursor {
            None => self.text.push_front(ch),
            Some(cursor) => self.text.insert_after(cursor, ch),
        };
        self.cursor = Some(inserted);
        tracing::trace!(
            "LineBuffer.insert: ch={:?}, cursor={:?}, len={}",
            ch,
            self.cursor_index(),
            self.text.len()
        );
        self
    }

    /// Remove the character under the cursor and move the cursor to the
    /// previous position.
    ///
    /// Deleting the head character leaves the cursor before the start.
    /// Does nothing if the cursor is already there (or the buffer is empty).
    pub fn delete(&mut self) -> &mut Self {
        let Some(cursor) = self.cursor else {
            return self;
        };
        let previous = self.previous_of(cursor);
        let removed = self.text.remove(cursor);
        self.cursor = previous;
        tracing::trace!(
            "LineBuffer.delete: removed={:?}, cursor={:?}, len={}",
            removed,
            self.cursor_index(),
            self.text.len()
        );
        self
    }

    /// Move the cursor one position toward the head.
    ///
    /// From the head character the cursor moves to the virtual before-start
    /// position; once there, further calls do nothing.
    pub fn arrow_left(&mut self) -> &mut Self {
        if let Some(cursor) = self.cursor {
            // At the head this yields `None`, the before-start position.
            self.cursor = self.previous_of(cursor);
            tracing::trace!("LineBuffer.arrow_left: cursor={:?}", self.cursor_index());
        }
        self
    }

    /// Move the cursor one position toward the tail.
    ///
    /// From the virtual before-start position the cursor moves onto the head
    /// character. At the tail (or on an empty buffer) this does nothing.
    pub fn arrow_right(&mut self) -> &mut Self {
        let tail = self.text.tail();
        if self.cursor != tail {
            self.cursor = match self.cursor {
                None => self.text.head(),
                Some(cursor) => self.text.next(cursor),
            };
            tracing::trace!("LineBuffer.arrow_right: cursor={:?}", self.cursor_index());
        }
        self
    }

    /// The buffer contents in order.
    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// Iterate over the buffer contents in order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.text.iter().copied()
    }

    /// Number of characters in the buffer.
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the buffer holds no characters.
    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Zero-based index of the cursor, `None` when the cursor sits before
    /// the first character (or the buffer is empty).
    pub fn cursor_index(&self) -> Option<usize> {
        self.cursor.map(|cursor| self.index_of(cursor))
    }

    /// The character under the cursor, `None` at the before-start position.
    pub fn cursor_char(&self) -> Option<char> {
        self.cursor.and_then(|cursor| self.text.get(cursor)).copied()
    }

    /// Handle of the node preceding `cursor`, `None` when the cursor is at
    /// the head. Panics if the cursor is not reachable from the head, which
    /// would mean the buffer's own bookkeeping is broken.
    fn previous_of(&self, cursor: NodeId) -> Option<NodeId> {
        match self.text.find_with_previous(|node| node.id == cursor) {
            Some((_, previous)) => previous,
            None => panic!("cursor node is not reachable from the head"),
        }
    }

    fn index_of(&self, cursor: NodeId) -> usize {
        match self.text.position_of(cursor) {
            Some(index) => index,
            None => panic!("cursor node is not reachable from the head"),
        }
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<LinkedList<char>> for LineBuffer {
    /// Wrap an existing character sequence, placing the cursor at its tail.
    fn from(text: LinkedList<char>) -> Self {
        let cursor = text.tail();
        Self { text, cursor }
    }
}

impl fmt::Debug for LineBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LineBuffer")
            .field("text", &self.text())
            .field("cursor", &self.cursor_index())
            .finish()
    }
}

impl PartialEq for LineBuffer {
    /// Buffers are equal when contents and cursor position agree; node
    /// identities are not observable and do not participate.
    fn eq(&self, other: &Self) -> bool {
        self.cursor_index() == other.cursor_index() && self.text == other.text
    }
}

impl Eq for LineBuffer {}

#[cfg(feature = "serde")]
mod serde_support {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::LineBuffer;

    /// Wire form of a buffer: its text plus the cursor index.
    #[derive(Serialize, Deserialize)]
    struct Snapshot {
        text: String,
        cursor: Option<usize>,
    }

    impl Serialize for LineBuffer {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            Snapshot {
                text: self.text(),
                cursor: self.cursor_index(),
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for LineBuffer {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let snapshot = Snapshot::deserialize(deserializer)?;
            Self::from_parts(&snapshot.text, snapshot.cursor).map_err(D::Error::custom)
        }
    }
}
