use crate::arena::Entry;
use std::fmt;

/// A reference to the substring `words[word][start..end]` of the word store.
///
/// Edge labels never own text; they are resolved against the word store when needed. A label with
/// `start == end` is zero-length and marks the end of a word that is a prefix of (or identical to)
/// another word sharing the same path.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Indexes {
    pub word: usize,
    pub start: usize,
    pub end: usize,
}

impl Indexes {
    pub fn new(word: usize, start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "Error: label start past its end.");
        Indexes { word, start, end }
    }

    /// Returns the number of bytes the label spans.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the label is zero-length.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Displays the label as `(word, start, last)` with an inclusive last offset. A zero-length label
/// shows a last offset one below its start.
impl fmt::Display for Indexes {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let last = self.end as i128 - 1;
        write!(f, "({}, {}, {})", self.word, self.start, last)
    }
}

pub struct Node {
    pub label: Option<Indexes>,
    pub child: Option<Entry>,
    pub next: Option<Entry>,
}

impl Node {
    pub fn new(label: Indexes) -> Self {
        Node {
            label: Some(label),
            child: None,
            next: None,
        }
    }

    pub fn root() -> Self {
        Node {
            label: None,
            child: None,
            next: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.child.is_none()
    }
}
