use crate::arena::Entry;
use crate::trie::node::{Indexes, Node};
use crate::trie::tree::{self, Arena};
use std::fmt;

/// The default number of nodes allocated per arena chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// A compressed trie over a borrowed word list that answers completion queries.
///
/// Edge labels are `Indexes` into the word list rather than copies of the text, so the trie
/// borrows the word list for its whole lifetime. Chains of single-child nodes are merged into a
/// single edge, and the children of a node are represented as a singly linked list of siblings.
/// Nodes live in a typed arena and refer to each other by `Entry`.
///
/// Every word gets its own leaf, including repeated words. Leaves are returned in no particular
/// order.
///
/// # Examples
///
/// ```
/// use completion_trie::trie::Trie;
///
/// let words = ["bear", "bull", "stock", "bell"];
/// let trie = Trie::new(&words);
///
/// let mut completions: Vec<&str> = trie
///     .complete("be")
///     .unwrap()
///     .iter()
///     .map(|leaf| leaf.word())
///     .collect();
/// completions.sort();
/// assert_eq!(completions, vec!["bear", "bell"]);
///
/// assert!(trie.complete("z").is_none());
/// ```
pub struct Trie<'a, S>
where
    S: 'a,
{
    words: &'a [S],
    arena: Arena,
    root: Entry,
}

/// A handle to a leaf of a `Trie`, resolvable back to the word it holds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Leaf<'a> {
    node: Entry,
    index: usize,
    word: &'a str,
}

impl<'a> Leaf<'a> {
    /// Returns the position of the word in the word list.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the word held by the leaf.
    pub fn word(&self) -> &'a str {
        self.word
    }

    /// Returns the arena entry of the leaf node.
    pub fn node(&self) -> Entry {
        self.node
    }
}

impl<'a, S> Trie<'a, S>
where
    S: AsRef<str> + 'a,
{
    /// Builds a trie by inserting every word in `words`, in order, using the default arena chunk
    /// size.
    ///
    /// # Examples
    ///
    /// ```
    /// use completion_trie::trie::Trie;
    ///
    /// let words = vec![String::from("cat"), String::from("car")];
    /// let trie = Trie::new(&words);
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn new(words: &'a [S]) -> Self {
        Self::with_chunk_size(words, DEFAULT_CHUNK_SIZE)
    }

    /// Builds a trie by inserting every word in `words`, in order, allocating `chunk_size` nodes
    /// per arena chunk.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_chunk_size(words: &'a [S], chunk_size: usize) -> Self {
        let mut arena = Arena::new(chunk_size);
        let root = arena.allocate(Node::root());

        if let Some(first) = words.first() {
            let leaf = arena.allocate(Node::new(Indexes::new(0, 0, first.as_ref().len())));
            arena[root].child = Some(leaf);
            for index in 1..words.len() {
                tree::insert(&mut arena, root, words, index);
            }
        }

        debug!(
            "built trie over {} words with {} nodes",
            words.len(),
            arena.len(),
        );
        Trie { words, arena, root }
    }

    /// Returns every leaf whose word starts with `prefix`, or `None` if no word starts with
    /// `prefix`. A returned list is never empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use completion_trie::trie::Trie;
    ///
    /// let words = ["same", "same"];
    /// let trie = Trie::new(&words);
    ///
    /// let mut indices: Vec<usize> = trie
    ///     .complete("sa")
    ///     .unwrap()
    ///     .iter()
    ///     .map(|leaf| leaf.index())
    ///     .collect();
    /// indices.sort();
    /// assert_eq!(indices, vec![0, 1]);
    /// assert!(trie.complete("samey").is_none());
    /// ```
    pub fn complete(&self, prefix: &str) -> Option<Vec<Leaf<'a>>> {
        let ret = tree::find(&self.arena, self.root, self.words, prefix.as_bytes())
            .map(|entry| self.leaves_under(entry).collect::<Vec<_>>());
        match ret {
            Some(ref leaves) => trace!("{} completions for {:?}", leaves.len(), prefix),
            None => trace!("no completions for {:?}", prefix),
        }
        ret
    }

    /// Returns `true` if `word` is in the word list.
    ///
    /// # Examples
    ///
    /// ```
    /// use completion_trie::trie::Trie;
    ///
    /// let words = ["cat", "cats"];
    /// let trie = Trie::new(&words);
    /// assert!(trie.contains("cat"));
    /// assert!(!trie.contains("ca"));
    /// ```
    pub fn contains(&self, word: &str) -> bool {
        match tree::find(&self.arena, self.root, self.words, word.as_bytes()) {
            Some(entry) => self.leaves_under(entry).any(|leaf| leaf.word() == word),
            None => false,
        }
    }

    /// Returns the number of words in the trie.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the trie holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the word list the trie was built from.
    pub fn words(&self) -> &'a [S] {
        self.words
    }

    /// Resolves a label to its text. Returns `None` if the label does not fall on character
    /// boundaries of its word.
    pub fn label_text(&self, label: &Indexes) -> Option<&'a str> {
        let words = self.words;
        words[label.word].as_ref().get(label.start..label.end)
    }

    /// Returns an iterator over every leaf of the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use completion_trie::trie::Trie;
    ///
    /// let words = ["cat", "car", "dog"];
    /// let trie = Trie::new(&words);
    ///
    /// let mut indices: Vec<usize> = trie.leaves().map(|leaf| leaf.index()).collect();
    /// indices.sort();
    /// assert_eq!(indices, vec![0, 1, 2]);
    /// ```
    pub fn leaves(&self) -> Leaves<'_, 'a, S> {
        match self.arena[self.root].child {
            Some(_) => self.leaves_under(self.root),
            None => Leaves {
                trie: self,
                stack: Vec::new(),
            },
        }
    }

    /// Returns a displayable dump of the structure of the trie, for debugging. Each labeled node
    /// shows the prefix it spells and its label with an inclusive last offset.
    ///
    /// # Examples
    ///
    /// ```
    /// use completion_trie::trie::Trie;
    ///
    /// let words = ["cat", "car"];
    /// let trie = Trie::new(&words);
    /// assert!(trie.dump().to_string().contains("(1, 2, 2)"));
    /// ```
    pub fn dump(&self) -> TrieDump<'_, 'a, S> {
        TrieDump { trie: self }
    }

    fn leaves_under(&self, entry: Entry) -> Leaves<'_, 'a, S> {
        Leaves {
            trie: self,
            stack: vec![entry],
        }
    }

    fn leaf(&self, entry: Entry) -> Leaf<'a> {
        let index = match self.arena[entry].label {
            Some(label) => label.word,
            None => unreachable!(),
        };
        let words = self.words;
        Leaf {
            node: entry,
            index,
            word: words[index].as_ref(),
        }
    }
}

/// An iterator over the leaves of a `Trie`.
///
/// This iterator traverses the trie depth first. The order in which leaves are yielded is
/// unspecified.
pub struct Leaves<'t, 'a, S>
where
    'a: 't,
    S: 'a,
{
    trie: &'t Trie<'a, S>,
    stack: Vec<Entry>,
}

impl<'t, 'a, S> Iterator for Leaves<'t, 'a, S>
where
    'a: 't,
    S: AsRef<str> + 'a,
{
    type Item = Leaf<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entry) = self.stack.pop() {
            let node = &self.trie.arena[entry];
            if node.is_leaf() {
                return Some(self.trie.leaf(entry));
            }
            let len = self.stack.len();
            let mut curr = node.child;
            while let Some(child) = curr {
                self.stack.push(child);
                curr = self.trie.arena[child].next;
            }
            self.stack[len..].reverse();
        }
        None
    }
}

/// A displayable dump of a `Trie`. See `Trie::dump`.
pub struct TrieDump<'t, 'a, S>
where
    'a: 't,
    S: 'a,
{
    trie: &'t Trie<'a, S>,
}

impl<'t, 'a, S> TrieDump<'t, 'a, S>
where
    'a: 't,
    S: AsRef<str> + 'a,
{
    fn write_node(&self, f: &mut fmt::Formatter, entry: Entry, indent: usize) -> fmt::Result {
        let pad = "    ".repeat(indent);
        let node = &self.trie.arena[entry];

        match node.label {
            Some(label) => {
                let spelled = &self.trie.words[label.word].as_ref().as_bytes()[..label.end];
                writeln!(f, "{}      {}", pad, String::from_utf8_lossy(spelled))?;
                writeln!(f, "{} ---{}", pad, label)?;
            },
            None => writeln!(f, "{} ---root", pad)?,
        }

        let mut curr = node.child;
        while let Some(child) = curr {
            writeln!(f, "{}     |", pad)?;
            self.write_node(f, child, indent + 1)?;
            curr = self.trie.arena[child].next;
        }
        Ok(())
    }
}

impl<'t, 'a, S> fmt::Display for TrieDump<'t, 'a, S>
where
    'a: 't,
    S: AsRef<str> + 'a,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.write_node(f, self.trie.root, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::Trie;

    fn sorted_words<S: AsRef<str>>(trie: &Trie<S>, prefix: &str) -> Option<Vec<String>> {
        trie.complete(prefix).map(|leaves| {
            let mut ret: Vec<String> = leaves.iter().map(|leaf| leaf.word().to_string()).collect();
            ret.sort();
            ret
        })
    }

    #[test]
    fn test_empty() {
        let words: Vec<String> = Vec::new();
        let trie = Trie::new(&words);
        assert!(trie.is_empty());
        assert_eq!(trie.len(), 0);
        assert!(trie.complete("").is_none());
        assert!(trie.complete("a").is_none());
        assert_eq!(trie.leaves().count(), 0);
        assert_eq!(trie.dump().to_string(), " ---root\n");
    }

    #[test]
    fn test_complete() {
        let words = ["bear", "bull", "stock", "bell"];
        let trie = Trie::new(&words);

        assert_eq!(
            sorted_words(&trie, "b"),
            Some(vec!["bear".to_string(), "bell".to_string(), "bull".to_string()]),
        );
        assert_eq!(
            sorted_words(&trie, "be"),
            Some(vec!["bear".to_string(), "bell".to_string()]),
        );
        assert_eq!(sorted_words(&trie, "bell"), Some(vec!["bell".to_string()]));
        assert_eq!(sorted_words(&trie, "s"), Some(vec!["stock".to_string()]));
        assert_eq!(sorted_words(&trie, "z"), None);
        assert_eq!(trie.complete("").map(|leaves| leaves.len()), Some(4));
    }

    #[test]
    fn test_complete_single_word() {
        let words = ["a"];
        let trie = Trie::new(&words);
        assert_eq!(sorted_words(&trie, "a"), Some(vec!["a".to_string()]));
        assert_eq!(sorted_words(&trie, "ab"), None);
    }

    #[test]
    fn test_complete_shared_edge() {
        let words = ["cat", "car", "cab"];
        let trie = Trie::new(&words);
        assert_eq!(trie.complete("ca").map(|leaves| leaves.len()), Some(3));
        assert_eq!(trie.complete("c").map(|leaves| leaves.len()), Some(3));
        assert_eq!(sorted_words(&trie, "cat"), Some(vec!["cat".to_string()]));
        assert_eq!(sorted_words(&trie, "cb"), None);
    }

    #[test]
    fn test_complete_duplicates() {
        let words = ["same", "same"];
        let trie = Trie::new(&words);

        let mut indices: Vec<usize> = trie
            .complete("same")
            .unwrap()
            .iter()
            .map(|leaf| leaf.index())
            .collect();
        indices.sort();
        assert_eq!(indices, vec![0, 1]);

        let leaves = trie.complete("s").unwrap();
        assert_eq!(leaves.len(), 2);
        assert_ne!(leaves[0].node(), leaves[1].node());
    }

    #[test]
    fn test_complete_prefix_words() {
        let words = ["cat", "ca", "c", "cats"];
        let trie = Trie::new(&words);

        assert_eq!(trie.complete("c").map(|leaves| leaves.len()), Some(4));
        assert_eq!(trie.complete("ca").map(|leaves| leaves.len()), Some(3));
        assert_eq!(
            sorted_words(&trie, "cat"),
            Some(vec!["cat".to_string(), "cats".to_string()]),
        );
        assert_eq!(sorted_words(&trie, "cats"), Some(vec!["cats".to_string()]));
        assert_eq!(sorted_words(&trie, "catss"), None);
    }

    #[test]
    fn test_complete_empty_word() {
        let words = ["", "a", ""];
        let trie = Trie::new(&words);

        let mut indices: Vec<usize> = trie
            .complete("")
            .unwrap()
            .iter()
            .map(|leaf| leaf.index())
            .collect();
        indices.sort();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(sorted_words(&trie, "a"), Some(vec!["a".to_string()]));
        assert!(trie.contains(""));
    }

    #[test]
    fn test_contains() {
        let words = ["bear", "bell", "be"];
        let trie = Trie::new(&words);
        assert!(trie.contains("be"));
        assert!(trie.contains("bell"));
        assert!(!trie.contains("bel"));
        assert!(!trie.contains("bells"));
        assert!(!trie.contains("b"));
    }

    #[test]
    fn test_leaves() {
        let words = ["bear", "bull", "stock", "bell"];
        let trie = Trie::with_chunk_size(&words, 2);
        let mut leaves: Vec<&str> = trie.leaves().map(|leaf| leaf.word()).collect();
        leaves.sort();
        assert_eq!(leaves, vec!["bear", "bell", "bull", "stock"]);
    }

    #[test]
    fn test_label_text() {
        let words = ["cat", "car"];
        let trie = Trie::new(&words);
        let leaf = trie.complete("car").unwrap()[0];
        assert_eq!(leaf.index(), 1);
        assert_eq!(
            trie.label_text(&super::Indexes::new(1, 2, 3)),
            Some("r"),
        );
        assert_eq!(trie.words().len(), 2);
    }

    #[test]
    fn test_dump() {
        let words = ["cat", "car"];
        let trie = Trie::new(&words);
        let expected = concat!(
            " ---root\n",
            "     |\n",
            "          ca\n",
            "     ---(0, 0, 1)\n",
            "         |\n",
            "              cat\n",
            "         ---(0, 2, 2)\n",
            "         |\n",
            "              car\n",
            "         ---(1, 2, 2)\n",
        );
        assert_eq!(trie.dump().to_string(), expected);
    }
}
