//! Traversals over a subtree of an [`Arena`].
//!
//! Every entry point takes the subtree root and a visitor, and calls the visitor exactly once per
//! node with that node's key and value. An empty subtree (`None`) produces no calls.
//!
//! Pre-, in- and post-order each come in three strategies that produce identical sequences:
//!
//! * [`recursive`]: plain structural recursion.
//! * [`stack`]: iterative, with an explicit [`Stack`] holding `O(height)` ids.
//! * [`morris`]: iterative in `O(1)` extra space. These threads temporarily rewrite right links,
//!   which is why they take the arena mutably. Every link is restored before they return.
//!
//! [`iter`] offers the same orders as lazy iterators. There is no Morris iterator: a paused Morris
//! walk would leave threads in the tree.
//!
//! # Examples
//!
//! ```
//! use bintree::node::{Arena, Side};
//! use bintree::traverse::{travel, Order, Strategy};
//!
//! let mut arena = Arena::new();
//! let root = arena.alloc(2, "b");
//! arena.insert_child(root, Side::Left, 1, "a");
//! arena.insert_child(root, Side::Right, 3, "c");
//!
//! for strategy in [Strategy::Recursive, Strategy::Stack, Strategy::Morris] {
//!     let mut keys = Vec::new();
//!     travel(&mut arena, Some(root), Order::Post, strategy, |k, _| keys.push(*k));
//!     assert_eq!(keys, [1, 3, 2]);
//! }
//! ```

pub mod iter;
pub mod morris;
pub mod recursive;
pub mod stack;

use std::collections::VecDeque;

use crate::collections::{Queue, Stack};
use crate::node::{Arena, NodeId};

/// Visitation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// Breadth first, top to bottom, left to right.
    Level,
    /// Node, then left subtree, then right subtree.
    Pre,
    /// Left subtree, then node, then right subtree.
    In,
    /// Left subtree, then right subtree, then node.
    Post,
}

/// How a depth-first traversal keeps track of where to go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// The call stack.
    Recursive,
    /// An explicit stack of pending ids.
    Stack,
    /// Temporary threads through otherwise empty right links.
    Morris,
}

/// Runs the traversal for `order` with `strategy`. Level order has a single strategy and ignores
/// the argument.
pub fn travel<K, V, F>(
    arena: &mut Arena<K, V>,
    root: Option<NodeId>,
    order: Order,
    strategy: Strategy,
    visit: F,
) where
    F: FnMut(&K, &V),
{
    match (order, strategy) {
        (Order::Level, _) => level_order(arena, root, visit),
        (Order::Pre, Strategy::Recursive) => recursive::pre_order(arena, root, visit),
        (Order::Pre, Strategy::Stack) => stack::pre_order(arena, root, visit),
        (Order::Pre, Strategy::Morris) => morris::pre_order(arena, root, visit),
        (Order::In, Strategy::Recursive) => recursive::in_order(arena, root, visit),
        (Order::In, Strategy::Stack) => stack::in_order(arena, root, visit),
        (Order::In, Strategy::Morris) => morris::in_order(arena, root, visit),
        (Order::Post, Strategy::Recursive) => recursive::post_order(arena, root, visit),
        (Order::Post, Strategy::Stack) => stack::post_order(arena, root, visit),
        (Order::Post, Strategy::Morris) => morris::post_order(arena, root, visit),
    }
}

/// Breadth-first traversal using a fresh [`VecDeque`].
pub fn level_order<K, V, F>(arena: &Arena<K, V>, root: Option<NodeId>, visit: F)
where
    F: FnMut(&K, &V),
{
    level_order_with(arena, root, &mut VecDeque::new(), visit);
}

/// Breadth-first traversal using the caller's queue, which should start out empty. Absent children
/// are never queued.
pub fn level_order_with<K, V, Q, F>(
    arena: &Arena<K, V>,
    root: Option<NodeId>,
    queue: &mut Q,
    mut visit: F,
) where
    Q: Queue<NodeId>,
    F: FnMut(&K, &V),
{
    debug_assert!(queue.is_empty());
    if let Some(root) = root {
        queue.push(root);
    }
    while let Some(id) = queue.pop() {
        let node = &arena[id];
        visit(node.key(), node.value());
        for child in [node.left(), node.right()].into_iter().flatten() {
            queue.push(child);
        }
    }
}

/// In-order traversal without a stack and without mutation, climbing back up through parent
/// links whenever a node has no right subtree. Relies on parent links being consistent.
pub fn in_order_backtrack<K, V, F>(arena: &Arena<K, V>, root: Option<NodeId>, mut visit: F)
where
    F: FnMut(&K, &V),
{
    let Some(top) = root else {
        return;
    };
    let mut cur = Some(top);
    let mut backtracking = false;
    while let Some(x) = cur {
        let node = &arena[x];
        if let (false, Some(left)) = (backtracking, node.left()) {
            cur = Some(left);
            continue;
        }
        visit(node.key(), node.value());
        match node.right() {
            Some(right) => {
                cur = Some(right);
                backtracking = false;
            }
            None => {
                cur = climb_to_successor(arena, x, top);
                backtracking = true;
            }
        }
    }
}

/// In-order traversal that hops from each node to its [`Arena::successor`], with neither a stack
/// nor a backtracking flag. Stops after the rightmost node of the subtree at `root`.
pub fn in_order_by_successor<K, V, F>(arena: &Arena<K, V>, root: Option<NodeId>, mut visit: F)
where
    F: FnMut(&K, &V),
{
    let Some(top) = root else {
        return;
    };
    let last = arena.rightmost(top);
    let mut x = arena.leftmost(top);
    loop {
        let node = &arena[x];
        visit(node.key(), node.value());
        if x == last {
            break;
        }
        match arena.successor(x) {
            Some(next) => x = next,
            None => break,
        }
    }
}

/// The in-order successor of `x`, which has no right child, without leaving the subtree at `top`.
fn climb_to_successor<K, V>(arena: &Arena<K, V>, mut x: NodeId, top: NodeId) -> Option<NodeId> {
    while x != top {
        let parent = arena.parent(x)?;
        if arena.left(parent) == Some(x) {
            return Some(parent);
        }
        x = parent;
    }
    None
}

/// Pushes `cur` and every node down its chain of left children.
fn push_left_spine<K, V, S>(arena: &Arena<K, V>, mut cur: Option<NodeId>, stack: &mut S)
where
    S: Stack<NodeId>,
{
    while let Some(x) = cur {
        stack.push(x);
        cur = arena.left(x);
    }
}
