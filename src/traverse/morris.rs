//! Morris traversals: `O(1)` extra space, paid for with temporary writes to the tree.
//!
//! When the walk reaches a node `x` with a left subtree, it finds the rightmost node of that
//! subtree, which is `x`'s in-order predecessor, and points that node's empty right link back at
//! `x`. That thread is the way back up once the left subtree is done. The second time the walk
//! reaches `x` through the thread, it finds the predecessor's right link already equal to `x` and
//! clears it.
//!
//! Only right links are ever rewritten, parent links are never touched, and every thread is gone
//! by the time a traversal returns. The visitor may run while threads are in place, so it must not
//! assume the links it could observe are final; holding the arena mutably for the whole walk
//! keeps it from changing them.

use tracing::trace;

use crate::node::{Arena, NodeId};

/// Morris in-order traversal. A node with a left subtree is visited when its thread is found and
/// removed.
pub fn in_order<K, V, F>(arena: &mut Arena<K, V>, root: Option<NodeId>, mut visit: F)
where
    F: FnMut(&K, &V),
{
    trace!(?root, "morris in-order");
    let mut cur = root;
    while let Some(x) = cur {
        let Some(left) = arena.left(x) else {
            let node = &arena[x];
            visit(node.key(), node.value());
            cur = node.right();
            continue;
        };
        let pred = predecessor_in(arena, left, x);
        if arena[pred].right == Some(x) {
            arena[pred].right = None;
            let node = &arena[x];
            visit(node.key(), node.value());
            cur = node.right();
        } else {
            arena[pred].right = Some(x);
            cur = Some(left);
        }
    }
}

/// Morris pre-order traversal. A node is visited the first time it is reached, before its thread
/// goes in.
pub fn pre_order<K, V, F>(arena: &mut Arena<K, V>, root: Option<NodeId>, mut visit: F)
where
    F: FnMut(&K, &V),
{
    trace!(?root, "morris pre-order");
    let mut cur = root;
    while let Some(x) = cur {
        let Some(left) = arena.left(x) else {
            let node = &arena[x];
            visit(node.key(), node.value());
            cur = node.right();
            continue;
        };
        let pred = predecessor_in(arena, left, x);
        if arena[pred].right == Some(x) {
            arena[pred].right = None;
            cur = arena.right(x);
        } else {
            let node = &arena[x];
            visit(node.key(), node.value());
            arena[pred].right = Some(x);
            cur = Some(left);
        }
    }
}

/// Morris post-order traversal.
///
/// The walk acts as if the root hung as the left child of a synthetic parent. Each time a thread
/// is removed, the left subtree it closes is finished except for its right spine: the chain from
/// the subtree root down its right links to the predecessor. In post-order that spine comes
/// bottom-up, so it is emitted in reverse. To do that in constant space the spine's right links are
/// reversed in place, walked and reversed back. The synthetic parent's turn comes at the end, when
/// the right spine of the root itself is emitted the same way.
pub fn post_order<K, V, F>(arena: &mut Arena<K, V>, root: Option<NodeId>, mut visit: F)
where
    F: FnMut(&K, &V),
{
    trace!(?root, "morris post-order");
    let Some(top) = root else {
        return;
    };
    let mut cur = root;
    while let Some(x) = cur {
        if let Some(left) = arena.left(x) {
            let pred = predecessor_in(arena, left, x);
            if arena[pred].right != Some(x) {
                arena[pred].right = Some(x);
                cur = Some(left);
                continue;
            }
            arena[pred].right = None;
            emit_spine_reversed(arena, left, pred, &mut visit);
        }
        cur = arena.right(x);
    }
    let last = arena.rightmost(top);
    emit_spine_reversed(arena, top, last, &mut visit);
}

/// The rightmost node of the subtree at `left`, stopping early at a thread that already leads
/// back to `x`.
fn predecessor_in<K, V>(arena: &Arena<K, V>, left: NodeId, x: NodeId) -> NodeId {
    let mut pred = left;
    while let Some(right) = arena.right(pred) {
        if right == x {
            break;
        }
        pred = right;
    }
    pred
}

/// Visits the right-link chain `from -> ... -> to` from `to` back to `from`. Every right link on
/// the chain, `to`'s included, is the same afterwards as before.
fn emit_spine_reversed<K, V, F>(arena: &mut Arena<K, V>, from: NodeId, to: NodeId, visit: &mut F)
where
    F: FnMut(&K, &V),
{
    let tail = arena[to].right;
    reverse_right_links(arena, from, to);

    let mut x = to;
    loop {
        let node = &arena[x];
        visit(node.key(), node.value());
        match node.right() {
            Some(next) if x != from => x = next,
            _ => break,
        }
    }

    reverse_right_links(arena, to, from);
    arena[to].right = tail;
}

/// Flips the right links along the chain from `from` to `to` so each points at its predecessor in
/// the chain. `from`'s own right link is left as it was.
fn reverse_right_links<K, V>(arena: &mut Arena<K, V>, from: NodeId, to: NodeId) {
    let mut prev = from;
    let mut cur = arena[from].right;
    while let Some(x) = cur {
        if prev == to {
            break;
        }
        let next = arena[x].right;
        arena[x].right = Some(prev);
        prev = x;
        cur = next;
    }
}
