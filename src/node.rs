//! Arena-allocated binary tree nodes and the topology primitives that balancing trees build on.
//!
//! Nodes hold a mutual parent/child relationship, so rather than owning pointers they live in an
//! [`Arena`] and refer to each other by [`NodeId`]. An absent node is `None`. Every primitive here
//! keeps the two directions of each link consistent:
//!
//! ```text
//! arena[p].left == Some(n) || arena[p].right == Some(n)  =>  arena[n].parent == Some(p)
//! ```
//!
//! Heights are cached per node and follow the red/black aware formula: an absent node has height
//! `-1`, a black node is one taller than its taller child and a red node is as tall as its taller
//! child. Every node starts out black, so trees that never recolor get ordinary heights.
//!
//! # Examples
//!
//! ```
//! use bintree::node::{Arena, Side};
//!
//! let mut arena = Arena::new();
//! let b = arena.alloc('b', 2);
//! let a = arena.insert_child(b, Side::Left, 'a', 1);
//! arena.update_height_above(Some(b));
//!
//! // Rotating right promotes `a`.
//! assert_eq!(arena.rotate_right(b), Some(a));
//! assert_eq!(arena[a].right(), Some(b));
//! assert_eq!(arena[b].parent(), Some(a));
//! assert_eq!(arena[a].height(), 1);
//! ```

use std::fmt;
use std::ops::{Index, IndexMut};

use tracing::trace;

use crate::error::{Error, Result};

/// Height of an absent node.
pub const ABSENT_HEIGHT: i32 = -1;

/// Index of a node inside an [`Arena`].
///
/// An id stays valid until the node is freed. The arena may then hand the same id out again, so a
/// stale id can end up naming an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The slot this id refers to.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// # Panics
    ///
    /// When `index` does not fit in a `u32`.
    fn from_index(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(index) => NodeId(index),
            Err(_) => panic!("arena slot {} is beyond the u32 id space", index),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Red/black tag carried by every node. Uncolored trees leave everything `Black`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Does not add to the height of its subtree.
    Red,
    /// Adds one to the height of its subtree.
    #[default]
    Black,
}

/// Which child slot of a parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The `left` slot.
    Left,
    /// The `right` slot.
    Right,
}

impl Side {
    /// The other side.
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A single tree node. Links are read through the accessors and written through [`Arena`] so that
/// parent and child links cannot drift apart.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    key: K,
    value: V,
    color: Color,
    height: i32,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V, color: Color) -> Self {
        Self {
            key,
            value,
            color,
            height: 0,
            parent: None,
            left: None,
            right: None,
        }
    }

    /// The node's key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The node's value.
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Mutable access to the value. Keys stay immutable so search order cannot be broken from
    /// outside.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// The node's color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Recolors the node. The cached height is left alone; call [`Arena::update_height_above`]
    /// afterwards.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Cached height of the subtree rooted here.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// The parent, if any.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    /// The child on the given side.
    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Growable table of nodes with slot recycling.
#[derive(Debug, Clone)]
pub struct Arena<K, V> {
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<u32>,
    live: usize,
}

impl<K, V> Default for Arena<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Index<NodeId> for Arena<K, V> {
    type Output = Node<K, V>;

    /// # Panics
    ///
    /// When `id` has been freed.
    fn index(&self, id: NodeId) -> &Self::Output {
        match self.slots.get(id.index()) {
            Some(Some(node)) => node,
            _ => panic!("node {} is no longer live", id),
        }
    }
}

impl<K, V> IndexMut<NodeId> for Arena<K, V> {
    /// # Panics
    ///
    /// When `id` has been freed.
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        match self.slots.get_mut(id.index()) {
            Some(Some(node)) => node,
            _ => panic!("node {} is no longer live", id),
        }
    }
}

impl<K, V> Arena<K, V> {
    /// An empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether no node is live.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Whether `id` names a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.slots.get(id.index()), Some(Some(_)))
    }

    /// Ids of every live node, in slot order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| NodeId(i as u32))
    }

    /// Looks up a node, reporting freed ids as [`Error::StaleNode`].
    pub fn get(&self, id: NodeId) -> Result<&Node<K, V>> {
        match self.slots.get(id.index()) {
            Some(Some(node)) => Ok(node),
            _ => Err(Error::StaleNode(id)),
        }
    }

    /// Mutable counterpart of [`Arena::get`].
    pub fn get_mut(&mut self, id: NodeId) -> Result<&mut Node<K, V>> {
        match self.slots.get_mut(id.index()) {
            Some(Some(node)) => Ok(node),
            _ => Err(Error::StaleNode(id)),
        }
    }

    /// Allocates a detached black node of height 0.
    ///
    /// # Panics
    ///
    /// When every one of the `u32::MAX + 1` ids is live.
    pub fn alloc(&mut self, key: K, value: V) -> NodeId {
        self.alloc_colored(key, value, Color::Black)
    }

    /// Allocates a detached node with the given color. Its height is the one a leaf of that color
    /// would have, so it is consistent with [`Arena::update_height`] from the start.
    ///
    /// # Panics
    ///
    /// When every one of the `u32::MAX + 1` ids is live.
    pub fn alloc_colored(&mut self, key: K, value: V, color: Color) -> NodeId {
        let mut node = Node::new(key, value, color);
        if color == Color::Red {
            node.height = ABSENT_HEIGHT;
        }
        self.live += 1;
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot as usize] = Some(node);
                NodeId(slot)
            }
            None => {
                let id = NodeId::from_index(self.slots.len());
                self.slots.push(Some(node));
                id
            }
        }
    }

    /// Releases a node's slot and hands back its content. The caller must already have unlinked
    /// it; any ids still pointing at it become stale.
    pub fn free(&mut self, id: NodeId) -> Result<(K, V)> {
        let node = self
            .slots
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(Error::StaleNode(id))?;
        self.free.push(id.0);
        self.live -= 1;
        Ok((node.key, node.value))
    }

    /// Creates a new black leaf in the vacant `side` slot of `parent`. Heights above it are not
    /// refreshed.
    ///
    /// # Panics
    ///
    /// When `parent` is stale. In debug builds, also when the slot is already taken.
    pub fn insert_child(&mut self, parent: NodeId, side: Side, key: K, value: V) -> NodeId {
        debug_assert!(
            self[parent].child(side).is_none(),
            "insert_child into an occupied slot"
        );
        let child = self.alloc(key, value);
        self.set_child(parent, side, Some(child));
        child
    }

    /// Points `parent`'s `side` slot at `child` and, if present, points `child` back at `parent`.
    /// Whatever previously hung there is left detached but still allocated.
    pub fn set_child(&mut self, parent: NodeId, side: Side, child: Option<NodeId>) {
        *self[parent].child_mut(side) = child;
        if let Some(child) = child {
            self[child].parent = Some(parent);
        }
    }

    /// Swaps key and value between two live nodes. Links, colors and heights stay where they
    /// are, so the ids now name each other's content.
    ///
    /// # Panics
    ///
    /// When either id is stale.
    pub fn swap_content(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.slots.split_at_mut(hi.index());
        match (head.get_mut(lo.index()), tail.first_mut()) {
            (Some(Some(x)), Some(Some(y))) => {
                std::mem::swap(&mut x.key, &mut y.key);
                std::mem::swap(&mut x.value, &mut y.value);
            }
            _ => panic!("swap_content on a stale node ({} <-> {})", a, b),
        }
    }

    /// The parent of `id`.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self[id].parent
    }

    /// The left child of `id`.
    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self[id].left
    }

    /// The right child of `id`.
    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self[id].right
    }

    /// Cached height, with absent nodes at [`ABSENT_HEIGHT`].
    pub fn height(&self, id: Option<NodeId>) -> i32 {
        id.map_or(ABSENT_HEIGHT, |id| self[id].height)
    }

    // Classification.

    /// Absent nodes count as black.
    pub fn is_black(&self, id: Option<NodeId>) -> bool {
        id.map_or(true, |id| self[id].color == Color::Black)
    }

    /// Negation of [`Arena::is_black`].
    pub fn is_red(&self, id: Option<NodeId>) -> bool {
        !self.is_black(id)
    }

    /// Whether `id` has no parent.
    pub fn is_root(&self, id: NodeId) -> bool {
        self[id].parent.is_none()
    }

    /// Whether `id` is its parent's left child. False for a root.
    pub fn is_left_child(&self, id: NodeId) -> bool {
        self.from_parent(id) == Some(Side::Left)
    }

    /// Whether `id` is its parent's right child. False for a root.
    pub fn is_right_child(&self, id: NodeId) -> bool {
        self.from_parent(id) == Some(Side::Right)
    }

    /// Whether `id` has at least one child.
    pub fn has_child(&self, id: NodeId) -> bool {
        self[id].left.is_some() || self[id].right.is_some()
    }

    /// Whether `id` has two children.
    pub fn has_both_children(&self, id: NodeId) -> bool {
        self[id].left.is_some() && self[id].right.is_some()
    }

    /// Whether `id` has no children.
    pub fn is_leaf(&self, id: NodeId) -> bool {
        !self.has_child(id)
    }

    /// The slot of `id`'s parent that refers to `id`, or `None` for a root.
    pub fn from_parent(&self, id: NodeId) -> Option<Side> {
        let parent = self[id].parent?;
        if self[parent].left == Some(id) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// The other child of `id`'s parent. `None` for a root or a missing sibling.
    pub fn sibling(&self, id: NodeId) -> Option<NodeId> {
        let side = self.from_parent(id)?;
        self[self[id].parent?].child(side.opposite())
    }

    /// The sibling of `id`'s parent. `None` without a grandparent.
    pub fn uncle(&self, id: NodeId) -> Option<NodeId> {
        self.sibling(self[id].parent?)
    }

    // Queries.

    /// Number of nodes in the subtree rooted at `id`.
    pub fn size(&self, id: Option<NodeId>) -> usize {
        match id {
            None => 0,
            Some(id) => 1 + self.size(self[id].left) + self.size(self[id].right),
        }
    }

    /// The taller child of `id`. Ties go to the child on the same side as `id` hangs from its own
    /// parent; a root breaks ties to the right.
    pub fn higher_child(&self, id: NodeId) -> Option<NodeId> {
        let (left, right) = (self[id].left, self[id].right);
        let (lh, rh) = (self.height(left), self.height(right));
        if lh > rh {
            left
        } else if lh < rh {
            right
        } else if self.is_left_child(id) {
            left
        } else {
            right
        }
    }

    /// `height(left) - height(right)`.
    pub fn balance_factor(&self, id: NodeId) -> i32 {
        self.height(self[id].left) - self.height(self[id].right)
    }

    /// Whether the balance factor lies strictly inside `-2..2`. Absent nodes are balanced.
    pub fn is_balanced(&self, id: Option<NodeId>) -> bool {
        id.map_or(true, |id| (-1..=1).contains(&self.balance_factor(id)))
    }

    /// Leftmost node of the subtree rooted at `id`.
    pub fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self[id].left {
            id = left;
        }
        id
    }

    /// Rightmost node of the subtree rooted at `id`.
    pub fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self[id].right {
            id = right;
        }
        id
    }

    /// In-order successor, or `None` after the last node.
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        self.neighbor(id, Side::Right)
    }

    /// In-order precursor, or `None` before the first node.
    pub fn precursor(&self, id: NodeId) -> Option<NodeId> {
        self.neighbor(id, Side::Left)
    }

    /// Shared walk of [`Arena::successor`] (`toward == Right`) and [`Arena::precursor`].
    fn neighbor(&self, id: NodeId, toward: Side) -> Option<NodeId> {
        if let Some(mut x) = self[id].child(toward) {
            while let Some(next) = self[x].child(toward.opposite()) {
                x = next;
            }
            return Some(x);
        }
        let mut x = id;
        while self.from_parent(x) == Some(toward) {
            x = self[x].parent?;
        }
        self[x].parent
    }

    // Heights.

    /// Recomputes the height of `id` from its children and returns it.
    pub fn update_height(&mut self, id: NodeId) -> i32 {
        let tallest = self.height(self[id].left).max(self.height(self[id].right));
        let node = &mut self[id];
        node.height = match node.color {
            Color::Red => tallest,
            Color::Black => tallest + 1,
        };
        node.height
    }

    /// Recomputes heights from `id` up toward the root, stopping at the first node whose height
    /// comes out unchanged: nothing above it can have changed either.
    pub fn update_height_above(&mut self, id: Option<NodeId>) {
        let mut cur = id;
        while let Some(x) = cur {
            let before = self[x].height;
            if self.update_height(x) == before {
                break;
            }
            cur = self[x].parent;
        }
    }

    // Restructuring.

    /// Rotates clockwise around `id`: its left child takes over `id`'s slot in the parent and
    /// `id` becomes that child's right child. Returns the new local root, or `None` (and changes
    /// nothing) if `id` is stale or has no left child.
    ///
    /// If `id` was a root, the caller must update whatever holds the root.
    ///
    /// # Diagram
    ///
    /// ```text
    ///        p               p
    ///        |               |
    ///        n               l
    ///       / \             / \
    ///      l   z    ->     x   n
    ///     / \                 / \
    ///    x   y               y   z
    /// ```
    pub fn rotate_right(&mut self, id: NodeId) -> Option<NodeId> {
        self.rotate(id, Side::Left)
    }

    /// Mirror of [`Arena::rotate_right`]: promotes the right child.
    pub fn rotate_left(&mut self, id: NodeId) -> Option<NodeId> {
        self.rotate(id, Side::Right)
    }

    /// Promotes the child of `id` on side `up` into `id`'s place.
    fn rotate(&mut self, id: NodeId, up: Side) -> Option<NodeId> {
        let promoted = self.get(id).ok()?.child(up)?;
        let parent = self[id].parent;
        let slot = self.from_parent(id);
        trace!(node = %id, promoted = %promoted, ?up, "rotate");

        let inner = self[promoted].child(up.opposite());
        self.set_child(id, up, inner);
        self.set_child(promoted, up.opposite(), Some(id));
        match (parent, slot) {
            (Some(parent), Some(slot)) => self.set_child(parent, slot, Some(promoted)),
            _ => self[promoted].parent = None,
        }

        self.update_height(id);
        self.update_height(promoted);
        Some(promoted)
    }

    /// The "3+4" restructuring: hangs `t0`, `t1` under `a`, `t2`, `t3` under `c`, then `a`, `c`
    /// under `b`, refreshing heights bottom-up. The arguments must already be in in-order
    /// sequence (`t0 < a < t1 < b < t2 < c < t3`). Returns `b`; linking `b` to the rest of the tree
    /// is the caller's job.
    ///
    /// Every AVL single and double rotation is an instance of this with a suitable choice of
    /// arguments.
    ///
    /// # Panics
    ///
    /// When `a`, `b` or `c` is stale. Calling this with nodes missing is a contract violation.
    #[allow(clippy::too_many_arguments)]
    pub fn connect34(
        &mut self,
        a: NodeId,
        b: NodeId,
        c: NodeId,
        t0: Option<NodeId>,
        t1: Option<NodeId>,
        t2: Option<NodeId>,
        t3: Option<NodeId>,
    ) -> NodeId {
        trace!(a = %a, b = %b, c = %c, "connect34");
        self.set_child(a, Side::Left, t0);
        self.set_child(a, Side::Right, t1);
        self.update_height(a);

        self.set_child(c, Side::Left, t2);
        self.set_child(c, Side::Right, t3);
        self.update_height(c);

        self.set_child(b, Side::Left, Some(a));
        self.set_child(b, Side::Right, Some(c));
        self.update_height(b);
        b
    }
}
