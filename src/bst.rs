//! A plain (unbalanced) binary search tree built on the [`node`](crate::node) primitives.
//!
//! Besides the usual operations the tree remembers its *hot* node: the parent of the position
//! the last [`search`](Bst::search), [`insert`](Bst::insert) or [`remove`](Bst::remove) ended
//! at. That is where a new node gets attached, or where heights need refreshing after a
//! removal. Balanced trees layered on top use it to start rebalancing. It is only meaningful
//! right after one of those calls.
//!
//! # Examples
//!
//! ```
//! use bintree::bst::Bst;
//! use bintree::Error;
//!
//! let mut tree = Bst::new();
//! for key in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(key, key * 10);
//! }
//! assert_eq!(tree.to_string(), "{1, 3, 4, 5, 7, 8, 9}");
//!
//! // Duplicates are rejected, not merged.
//! assert!(!tree.insert(5, 0).is_inserted());
//! assert_eq!(tree.find(&5), Some(&50));
//!
//! assert_eq!(tree.remove(&5), Ok((5, 50)));
//! assert_eq!(tree.remove(&5), Err(Error::NotFound));
//! assert_eq!(tree.size(), 6);
//! assert_eq!(tree.to_string(), "{1, 3, 4, 7, 8, 9}");
//! ```

use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;

use tracing::debug;

use crate::collections::{write_braced, Vector};
use crate::error::{Error, Result};
use crate::node::{Arena, Color, Node, NodeId, Side};
use crate::traverse::iter::{InOrder, LevelOrder, PostOrder, PreOrder};
use crate::traverse::{self, Order, Strategy};

/// Outcome of [`Bst::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertResult {
    /// A new node was created.
    Inserted(NodeId),
    /// The key was already present. The existing node is untouched and the new key and value were
    /// dropped.
    Existing(NodeId),
}

impl InsertResult {
    /// The node holding the key, whether new or not.
    pub fn id(self) -> NodeId {
        match self {
            Self::Inserted(id) | Self::Existing(id) => id,
        }
    }

    /// Whether a node was created.
    pub fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted(_))
    }
}

/// Where a search for a key ended.
enum Slot {
    Found(NodeId),
    Vacant { parent: Option<NodeId>, side: Side },
}

/// An unbalanced binary search tree ordered by `K: Ord`.
///
/// Not `Sync`: the hot node is cached in a [`Cell`] so that searches can take `&self`. Share a tree
/// between threads only behind a lock that covers the whole tree.
#[derive(Debug, Clone)]
pub struct Bst<K, V> {
    arena: Arena<K, V>,
    root: Option<NodeId>,
    size: usize,
    hot: Cell<Option<NodeId>>,
}

impl<K, V> Default for Bst<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Bst<K, V> {
    /// Generates a new, empty tree.
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            size: 0,
            hot: Cell::new(None),
        }
    }

    /// Number of nodes. `O(1)`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the tree has no nodes. `O(1)`.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The root node.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The parent of the position where the last search, insert or remove ended. `None` for an
    /// empty tree or when that position was the root.
    pub fn hot(&self) -> Option<NodeId> {
        self.hot.get()
    }

    /// Looks up a node by id.
    pub fn get(&self, id: NodeId) -> Result<&Node<K, V>> {
        self.arena.get(id)
    }

    /// The node storage, for the [`traverse`](crate::traverse) functions and the topology queries.
    pub fn arena(&self) -> &Arena<K, V> {
        &self.arena
    }

    /// Mutable node storage, for balancing layers. Whatever they do must keep the search order,
    /// and rotations at the root must go through [`Bst::rotate_left`] and [`Bst::rotate_right`]
    /// so that the root stays tracked.
    pub fn arena_mut(&mut self) -> &mut Arena<K, V> {
        &mut self.arena
    }

    /// Removes every node.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// [`Arena::rotate_right`] that also updates the root and the heights above the rotated
    /// subtree.
    pub fn rotate_right(&mut self, id: NodeId) -> Option<NodeId> {
        let promoted = self.arena.rotate_right(id)?;
        self.after_rotation(id, promoted);
        Some(promoted)
    }

    /// [`Arena::rotate_left`] that also updates the root and the heights above the rotated
    /// subtree.
    pub fn rotate_left(&mut self, id: NodeId) -> Option<NodeId> {
        let promoted = self.arena.rotate_left(id)?;
        self.after_rotation(id, promoted);
        Some(promoted)
    }

    fn after_rotation(&mut self, demoted: NodeId, promoted: NodeId) {
        if self.root == Some(demoted) {
            self.root = Some(promoted);
        }
        self.arena.update_height_above(self.arena.parent(promoted));
    }

    /// Runs any traversal over the whole tree. See [`traverse`](crate::traverse) for the
    /// strategies.
    pub fn travel<F>(&mut self, order: Order, strategy: Strategy, visit: F)
    where
        F: FnMut(&K, &V),
    {
        traverse::travel(&mut self.arena, self.root, order, strategy, visit);
    }

    /// Breadth-first traversal.
    pub fn travel_level<F: FnMut(&K, &V)>(&self, visit: F) {
        traverse::level_order(&self.arena, self.root, visit);
    }

    /// Pre-order traversal with an explicit stack.
    pub fn travel_pre<F: FnMut(&K, &V)>(&self, visit: F) {
        traverse::stack::pre_order(&self.arena, self.root, visit);
    }

    /// In-order traversal with an explicit stack.
    pub fn travel_in<F: FnMut(&K, &V)>(&self, visit: F) {
        traverse::stack::in_order(&self.arena, self.root, visit);
    }

    /// Post-order traversal in constant space (Morris). Takes `&mut self` because threads are laid
    /// through the tree during the walk; all of them are gone on return.
    pub fn travel_post<F: FnMut(&K, &V)>(&mut self, visit: F) {
        traverse::morris::post_order(&mut self.arena, self.root, visit);
    }

    /// In-order (sorted) iterator.
    pub fn iter(&self) -> InOrder<'_, K, V> {
        InOrder::new(&self.arena, self.root)
    }

    /// Pre-order iterator.
    pub fn iter_pre(&self) -> PreOrder<'_, K, V> {
        PreOrder::new(&self.arena, self.root)
    }

    /// Post-order iterator.
    pub fn iter_post(&self) -> PostOrder<'_, K, V> {
        PostOrder::new(&self.arena, self.root)
    }

    /// Level-order iterator.
    pub fn iter_level(&self) -> LevelOrder<'_, K, V> {
        LevelOrder::new(&self.arena, self.root)
    }

    /// The keys in sorted order.
    pub fn keys(&self) -> Vector<&K> {
        self.iter().map(|(k, _)| k).collect()
    }
}

impl<K: Ord, V> Bst<K, V> {
    /// Finds the node holding `key`, or `None`. Either way [`Bst::hot`] is left pointing at the
    /// parent of the last position examined.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::bst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// let root = tree.insert(2, ()).id();
    /// let one = tree.insert(1, ()).id();
    ///
    /// assert_eq!(tree.search(&1), Some(one));
    /// assert_eq!(tree.hot(), Some(root));
    ///
    /// // A miss leaves `hot` at the node the key would hang from.
    /// assert_eq!(tree.search(&0), None);
    /// assert_eq!(tree.hot(), Some(one));
    /// ```
    pub fn search(&self, key: &K) -> Option<NodeId> {
        match self.locate(key) {
            Slot::Found(id) => Some(id),
            Slot::Vacant { .. } => None,
        }
    }

    /// The value stored under `key`.
    pub fn find(&self, key: &K) -> Option<&V> {
        self.search(key).map(|id| self.arena[id].value())
    }

    /// Mutable access to the value stored under `key`.
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.search(key)?;
        Some(self.arena[id].value_mut())
    }

    /// Whether `key` is present.
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Inserts `key` with `value` unless the key is already present, in which case nothing changes
    /// and the existing node is reported.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::bst::{Bst, InsertResult};
    ///
    /// let mut tree = Bst::new();
    /// let first = tree.insert("k", 1);
    /// assert!(first.is_inserted());
    ///
    /// assert_eq!(tree.insert("k", 2), InsertResult::Existing(first.id()));
    /// assert_eq!(tree.find(&"k"), Some(&1));
    /// assert_eq!(tree.size(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> InsertResult {
        let id = match self.locate(&key) {
            Slot::Found(id) => {
                debug!(node = %id, "duplicate key rejected");
                return InsertResult::Existing(id);
            }
            Slot::Vacant { parent: None, .. } => {
                let id = self.arena.alloc(key, value);
                self.root = Some(id);
                id
            }
            Slot::Vacant {
                parent: Some(parent),
                side,
            } => {
                let id = self.arena.insert_child(parent, side, key, value);
                self.arena.update_height_above(Some(parent));
                id
            }
        };
        self.size += 1;
        debug!(node = %id, size = self.size, "inserted");
        self.check_around(self.hot());
        InsertResult::Inserted(id)
    }

    /// Removes `key` and returns the key and value it held.
    ///
    /// A node with two children is not unlinked itself. It takes over the content of its in-order
    /// successor, and the successor's node, which has at most a right child, is spliced out
    /// instead. So after such a removal a `NodeId` taken from an earlier search may now hold a
    /// different key (the one that held `key` now holds the successor's key), or may no longer be
    /// live (the successor's old node). Treat ids obtained before a removal as invalidated.
    ///
    /// [`Bst::hot`] is left at the parent of the node that was physically removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::bst::Bst;
    ///
    /// let mut tree = Bst::new();
    /// for key in [5, 3, 8, 7] {
    ///     tree.insert(key, ());
    /// }
    /// let five = tree.search(&5).unwrap();
    ///
    /// tree.remove(&5).unwrap();
    /// // The old root now holds its successor.
    /// assert_eq!(tree.root(), Some(five));
    /// assert_eq!(tree.get(five).unwrap().key(), &7);
    /// ```
    pub fn remove(&mut self, key: &K) -> Result<(K, V)> {
        let x = self.search(key).ok_or(Error::NotFound)?;
        let (excised, replacement) = match (self.arena.left(x), self.arena.right(x)) {
            (None, right) => (x, right),
            (left, None) => (x, left),
            (Some(_), Some(right)) => {
                let succ = self.arena.leftmost(right);
                self.arena.swap_content(x, succ);
                (succ, self.arena.right(succ))
            }
        };

        let parent = self.arena.parent(excised);
        let slot = self.arena.from_parent(excised);
        // `excised` came from a search or a successor walk, so it is live. Freeing it before any
        // relinking keeps the tree whole should that ever not hold.
        let content = self.arena.free(excised)?;
        match (parent, slot) {
            (Some(parent), Some(side)) => self.arena.set_child(parent, side, replacement),
            _ => {
                self.root = replacement;
                if let Some(new_root) = replacement {
                    self.arena[new_root].parent = None;
                }
            }
        }
        self.hot.set(parent);
        self.size -= 1;
        self.arena.update_height_above(parent);

        debug!(node = %excised, size = self.size, "removed");
        self.check_around(parent);
        Ok(content)
    }

    /// Walks down from the root. Sets `hot` on the way out.
    fn locate(&self, key: &K) -> Slot {
        let mut parent = None;
        let mut side = Side::Left;
        let mut cur = self.root;
        while let Some(x) = cur {
            side = match key.cmp(self.arena[x].key()) {
                Ordering::Equal => {
                    self.hot.set(parent);
                    return Slot::Found(x);
                }
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            parent = Some(x);
            cur = self.arena[x].child(side);
        }
        self.hot.set(parent);
        Slot::Vacant { parent, side }
    }

    /// In debug builds, checks links, heights and key order at `id` and its children.
    fn check_around(&self, id: Option<NodeId>) {
        if !cfg!(debug_assertions) {
            return;
        }
        let Some(id) = id else {
            return;
        };
        let arena = &self.arena;
        let node = &arena[id];
        if let Some(left) = node.left() {
            assert_eq!(arena.parent(left), Some(id));
            assert!(arena[left].key() < node.key());
        }
        if let Some(right) = node.right() {
            assert_eq!(arena.parent(right), Some(id));
            assert!(arena[right].key() > node.key());
        }
        let tallest = arena.height(node.left()).max(arena.height(node.right()));
        let expected = match node.color() {
            Color::Red => tallest,
            Color::Black => tallest + 1,
        };
        assert_eq!(node.height(), expected);
    }
}

impl<K: Ord, V> Extend<(K, V)> for Bst<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for Bst<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// The keys in order, as `{k1, k2, ...}`.
impl<K: fmt::Display, V> fmt::Display for Bst<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_braced(f, self.iter().map(|(k, _)| k))
    }
}
