use crate::arena::{Entry, TypedArena};
use crate::trie::node::{Indexes, Node};

pub type Arena = TypedArena<Node>;

pub fn label_bytes<'a, S>(words: &'a [S], label: &Indexes) -> &'a [u8]
where
    S: AsRef<str>,
{
    &words[label.word].as_ref().as_bytes()[label.start..label.end]
}

fn label_of(arena: &Arena, entry: Entry) -> Indexes {
    match arena[entry].label {
        Some(label) => label,
        None => unreachable!(),
    }
}

fn common_prefix_len(lhs: &[u8], rhs: &[u8]) -> usize {
    lhs.iter().zip(rhs.iter()).take_while(|pair| pair.0 == pair.1).count()
}

/// Shortens the label of `entry` to end at `split_index` and gives it two children: the remainder
/// of the old label, which keeps the old subtree, and a new leaf.
fn split(arena: &mut Arena, entry: Entry, split_index: usize, leaf: Indexes) {
    let label = label_of(arena, entry);
    let old_child = arena[entry].child.take();
    arena[entry].label = Some(Indexes::new(label.word, label.start, split_index));

    let leaf = arena.allocate(Node::new(leaf));
    let mut remainder = Node::new(Indexes::new(label.word, split_index, label.end));
    remainder.child = old_child;
    remainder.next = Some(leaf);
    let remainder = arena.allocate(remainder);
    arena[entry].child = Some(remainder);
}

/// Turns the leaf at `entry` into an internal node whose only child is a zero-length leaf that
/// still belongs to the same word.
fn push_down(arena: &mut Arena, entry: Entry) {
    let label = label_of(arena, entry);
    let terminal = arena.allocate(Node::new(Indexes::new(label.word, label.end, label.end)));
    arena[entry].child = Some(terminal);
}

/// Inserts `words[index]` below `root`. Words must be inserted in index order.
pub fn insert<S>(arena: &mut Arena, root: Entry, words: &[S], index: usize)
where
    S: AsRef<str>,
{
    let word = words[index].as_ref().as_bytes();
    let mut parent = root;
    let mut cursor = 0;

    'descend: loop {
        let mut last = None;
        let mut curr = arena[parent].child;
        while let Some(entry) = curr {
            let label = label_of(arena, entry);
            debug_assert_eq!(label.start, cursor);
            let edge = label_bytes(words, &label);
            let matched = common_prefix_len(edge, &word[cursor..]);

            if matched == 0 {
                last = Some(entry);
                curr = arena[entry].next;
                continue;
            }

            if matched == edge.len() {
                if arena[entry].is_leaf() {
                    trace!("pushing down leaf of word {} at {}", label.word, label.end);
                    push_down(arena, entry);
                }
                parent = entry;
                cursor += matched;
                continue 'descend;
            }

            trace!("splitting {} at {} for word {}", label, cursor + matched, index);
            let leaf = Indexes::new(index, cursor + matched, word.len());
            split(arena, entry, cursor + matched, leaf);
            return;
        }

        let leaf = arena.allocate(Node::new(Indexes::new(index, cursor, word.len())));
        match last {
            Some(last) => arena[last].next = Some(leaf),
            None => arena[parent].child = Some(leaf),
        }
        trace!("appended leaf for word {} at {}", index, cursor);
        return;
    }
}

/// Returns the node whose subtree holds exactly the words starting with `prefix`, or `None` if no
/// word starts with `prefix`.
pub fn find<S>(arena: &Arena, root: Entry, words: &[S], prefix: &[u8]) -> Option<Entry>
where
    S: AsRef<str>,
{
    if prefix.is_empty() {
        return arena[root].child.map(|_| root);
    }

    let mut parent = root;
    let mut rest = prefix;

    'descend: loop {
        let mut curr = arena[parent].child;
        while let Some(entry) = curr {
            let label = label_of(arena, entry);
            let edge = label_bytes(words, &label);
            let matched = common_prefix_len(edge, rest);

            if matched == 0 {
                curr = arena[entry].next;
            } else if matched == rest.len() {
                return Some(entry);
            } else if matched == edge.len() {
                parent = entry;
                rest = &rest[matched..];
                continue 'descend;
            } else {
                // siblings diverge on their first byte, so no other sibling can match
                return None;
            }
        }
        return None;
    }
}
