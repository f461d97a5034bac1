//! Recursive traversals. These are the reference sequences that the other strategies must
//! reproduce. Recursion depth equals the subtree height.

use crate::node::{Arena, NodeId};

/// Recursive pre-order traversal.
pub fn pre_order<K, V, F>(arena: &Arena<K, V>, root: Option<NodeId>, mut visit: F)
where
    F: FnMut(&K, &V),
{
    pre(arena, root, &mut visit);
}

/// Recursive in-order traversal.
pub fn in_order<K, V, F>(arena: &Arena<K, V>, root: Option<NodeId>, mut visit: F)
where
    F: FnMut(&K, &V),
{
    inorder(arena, root, &mut visit);
}

/// Recursive post-order traversal.
pub fn post_order<K, V, F>(arena: &Arena<K, V>, root: Option<NodeId>, mut visit: F)
where
    F: FnMut(&K, &V),
{
    post(arena, root, &mut visit);
}

fn pre<K, V, F: FnMut(&K, &V)>(arena: &Arena<K, V>, id: Option<NodeId>, visit: &mut F) {
    let Some(id) = id else {
        return;
    };
    let node = &arena[id];
    visit(node.key(), node.value());
    pre(arena, node.left(), visit);
    pre(arena, node.right(), visit);
}

fn inorder<K, V, F: FnMut(&K, &V)>(arena: &Arena<K, V>, id: Option<NodeId>, visit: &mut F) {
    let Some(id) = id else {
        return;
    };
    let node = &arena[id];
    inorder(arena, node.left(), visit);
    visit(node.key(), node.value());
    inorder(arena, node.right(), visit);
}

fn post<K, V, F: FnMut(&K, &V)>(arena: &Arena<K, V>, id: Option<NodeId>, visit: &mut F) {
    let Some(id) = id else {
        return;
    };
    let node = &arena[id];
    post(arena, node.left(), visit);
    post(arena, node.right(), visit);
    visit(node.key(), node.value());
}
