//! Iterative traversals driven by an explicit [`Stack`] of pending node ids.
//!
//! The `*_with` variants take the caller's stack, which must start out empty and is empty again on
//! return. The plain variants allocate a `Vec`.

use crate::collections::Stack;
use crate::node::{Arena, NodeId};

use super::push_left_spine;

/// Iterative pre-order traversal with a fresh `Vec` as the stack.
pub fn pre_order<K, V, F>(arena: &Arena<K, V>, root: Option<NodeId>, visit: F)
where
    F: FnMut(&K, &V),
{
    pre_order_with(arena, root, &mut Vec::new(), visit);
}

/// Iterative in-order traversal with a fresh `Vec` as the stack.
pub fn in_order<K, V, F>(arena: &Arena<K, V>, root: Option<NodeId>, visit: F)
where
    F: FnMut(&K, &V),
{
    in_order_with(arena, root, &mut Vec::new(), visit);
}

/// Iterative post-order traversal with a fresh `Vec` as the stack.
pub fn post_order<K, V, F>(arena: &Arena<K, V>, root: Option<NodeId>, visit: F)
where
    F: FnMut(&K, &V),
{
    post_order_with(arena, root, &mut Vec::new(), visit);
}

/// Walks down each left branch visiting as it goes and parks right children on the stack for
/// later.
pub fn pre_order_with<K, V, S, F>(
    arena: &Arena<K, V>,
    root: Option<NodeId>,
    stack: &mut S,
    mut visit: F,
) where
    S: Stack<NodeId>,
    F: FnMut(&K, &V),
{
    debug_assert!(stack.is_empty());
    let mut cur = root;
    loop {
        while let Some(x) = cur {
            let node = &arena[x];
            visit(node.key(), node.value());
            if let Some(right) = node.right() {
                stack.push(right);
            }
            cur = node.left();
        }
        match stack.pop() {
            Some(x) => cur = Some(x),
            None => break,
        }
    }
}

/// Stacks the whole left branch, then pops a node, visits it and turns to its right subtree.
pub fn in_order_with<K, V, S, F>(
    arena: &Arena<K, V>,
    root: Option<NodeId>,
    stack: &mut S,
    mut visit: F,
) where
    S: Stack<NodeId>,
    F: FnMut(&K, &V),
{
    debug_assert!(stack.is_empty());
    let mut cur = root;
    loop {
        push_left_spine(arena, cur, stack);
        let Some(x) = stack.pop() else {
            break;
        };
        let node = &arena[x];
        visit(node.key(), node.value());
        cur = node.right();
    }
}

/// Like [`in_order_with`] but a node stays on the stack until its right subtree is done. The most
/// recently visited node tells whether the top's right subtree has already been walked, so parent
/// links are not needed.
pub fn post_order_with<K, V, S, F>(
    arena: &Arena<K, V>,
    root: Option<NodeId>,
    stack: &mut S,
    mut visit: F,
) where
    S: Stack<NodeId>,
    F: FnMut(&K, &V),
{
    debug_assert!(stack.is_empty());
    let mut cur = root;
    let mut last = None;
    loop {
        push_left_spine(arena, cur, stack);
        cur = None;
        let Some(&top) = stack.top() else {
            break;
        };
        let node = &arena[top];
        match node.right() {
            Some(right) if last != Some(right) => cur = Some(right),
            _ => {
                visit(node.key(), node.value());
                last = Some(top);
                stack.pop();
            }
        }
    }
}
