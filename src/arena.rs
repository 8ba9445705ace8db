//! Append-only typed arena.

use std::ops::{Index, IndexMut};
use std::vec::Vec;

/// A handle to an object stored in a `TypedArena<T>`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Entry {
    chunk_index: usize,
    block_index: usize,
}

/// A fast, but limited allocator that only allocates a single type of object.
///
/// Objects are stored in fixed capacity chunks, so allocating never moves an object that was
/// already allocated. Objects cannot be freed individually; everything is dropped together with
/// the arena. The underlying container is simply a `Vec` of `Vec`s, so no unsafe code is needed.
///
/// # Examples
///
/// ```
/// use completion_trie::arena::TypedArena;
///
/// let mut arena = TypedArena::new(1024);
///
/// let x = arena.allocate(1);
/// assert_eq!(arena[x], 1);
///
/// arena[x] += 1;
/// assert_eq!(arena[x], 2);
/// assert_eq!(arena.len(), 1);
/// ```
pub struct TypedArena<T> {
    chunks: Vec<Vec<T>>,
    chunk_size: usize,
    len: usize,
}

impl<T> TypedArena<T> {
    /// Constructs a new, empty `TypedArena<T>` with a specific number of objects per chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use completion_trie::arena::TypedArena;
    ///
    /// // creates a new TypedArena<T> that contains a maximum of 1024 u32's per chunk
    /// let arena: TypedArena<u32> = TypedArena::new(1024);
    /// ```
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "Error: chunk size must be positive.");
        TypedArena {
            chunks: Vec::new(),
            chunk_size,
            len: 0,
        }
    }

    /// Allocates an object in the typed arena and returns an `Entry` that can later be used to
    /// retrieve mutable and immutable references to the object.
    ///
    /// # Examples
    ///
    /// ```
    /// use completion_trie::arena::TypedArena;
    ///
    /// let mut arena = TypedArena::new(1024);
    /// let x = arena.allocate(0);
    /// assert_eq!(arena.get(&x), Some(&0));
    /// ```
    pub fn allocate(&mut self, value: T) -> Entry {
        let needs_chunk = match self.chunks.last() {
            Some(chunk) => chunk.len() == self.chunk_size,
            None => true,
        };
        if needs_chunk {
            self.chunks.push(Vec::with_capacity(self.chunk_size));
        }
        self.len += 1;

        let chunk_index = self.chunks.len() - 1;
        let last_chunk = &mut self.chunks[chunk_index];
        last_chunk.push(value);
        Entry {
            chunk_index,
            block_index: last_chunk.len() - 1,
        }
    }

    /// Returns an immutable reference to an object in the typed arena. Returns `None` if the entry
    /// does not correspond to an allocated object.
    pub fn get(&self, entry: &Entry) -> Option<&T> {
        self.chunks
            .get(entry.chunk_index)
            .and_then(|chunk| chunk.get(entry.block_index))
    }

    /// Returns a mutable reference to an object in the typed arena. Returns `None` if the entry
    /// does not correspond to an allocated object.
    pub fn get_mut(&mut self, entry: &Entry) -> Option<&mut T> {
        self.chunks
            .get_mut(entry.chunk_index)
            .and_then(|chunk| chunk.get_mut(entry.block_index))
    }

    /// Returns the number of objects allocated in the arena.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if nothing has been allocated in the arena.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<T> Index<Entry> for TypedArena<T> {
    type Output = T;

    fn index(&self, entry: Entry) -> &Self::Output {
        self.get(&entry).expect("Error: entry out of bounds.")
    }
}

impl<T> IndexMut<Entry> for TypedArena<T> {
    fn index_mut(&mut self, entry: Entry) -> &mut Self::Output {
        self.get_mut(&entry).expect("Error: entry out of bounds.")
    }
}
