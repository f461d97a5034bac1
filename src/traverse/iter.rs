//! Lazy traversals. Each iterator borrows the arena, keeps its own explicit stack (or queue) and
//! yields `(&K, &V)` pairs in the same sequence as the callback traversals. Cloning an iterator
//! forks it at its current position, and creating a new one restarts from the root.

use std::collections::VecDeque;

use crate::node::{Arena, NodeId};

use super::push_left_spine;

fn entry<K, V>(arena: &Arena<K, V>, id: NodeId) -> (&K, &V) {
    let node = &arena[id];
    (node.key(), node.value())
}

/// Pre-order iterator.
pub struct PreOrder<'a, K, V> {
    arena: &'a Arena<K, V>,
    stack: Vec<NodeId>,
}

/// In-order iterator.
pub struct InOrder<'a, K, V> {
    arena: &'a Arena<K, V>,
    stack: Vec<NodeId>,
    cur: Option<NodeId>,
}

/// Post-order iterator.
pub struct PostOrder<'a, K, V> {
    arena: &'a Arena<K, V>,
    stack: Vec<NodeId>,
    cur: Option<NodeId>,
    last: Option<NodeId>,
}

/// Level-order iterator.
pub struct LevelOrder<'a, K, V> {
    arena: &'a Arena<K, V>,
    queue: VecDeque<NodeId>,
}

// Manual `Clone` impls so cloning an iterator does not require `K: Clone` or `V: Clone`.

impl<K, V> Clone for PreOrder<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            stack: self.stack.clone(),
        }
    }
}

impl<K, V> Clone for InOrder<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            stack: self.stack.clone(),
            cur: self.cur,
        }
    }
}

impl<K, V> Clone for PostOrder<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            stack: self.stack.clone(),
            cur: self.cur,
            last: self.last,
        }
    }
}

impl<K, V> Clone for LevelOrder<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            queue: self.queue.clone(),
        }
    }
}

impl<'a, K, V> PreOrder<'a, K, V> {
    /// Starts a pre-order walk of the subtree at `root`.
    pub fn new(arena: &'a Arena<K, V>, root: Option<NodeId>) -> Self {
        Self {
            arena,
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, K, V> InOrder<'a, K, V> {
    /// Starts an in-order walk of the subtree at `root`.
    pub fn new(arena: &'a Arena<K, V>, root: Option<NodeId>) -> Self {
        Self {
            arena,
            stack: Vec::new(),
            cur: root,
        }
    }
}

impl<'a, K, V> PostOrder<'a, K, V> {
    /// Starts a post-order walk of the subtree at `root`.
    pub fn new(arena: &'a Arena<K, V>, root: Option<NodeId>) -> Self {
        Self {
            arena,
            stack: Vec::new(),
            cur: root,
            last: None,
        }
    }
}

impl<'a, K, V> LevelOrder<'a, K, V> {
    /// Starts a breadth-first walk of the subtree at `root`.
    pub fn new(arena: &'a Arena<K, V>, root: Option<NodeId>) -> Self {
        Self {
            arena,
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, K, V> Iterator for PreOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let id = self.stack.pop()?;
        // Right goes in first so that left comes out first.
        self.stack.extend(arena.right(id));
        self.stack.extend(arena.left(id));
        Some(entry(arena, id))
    }
}

impl<'a, K, V> Iterator for InOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        push_left_spine(arena, self.cur.take(), &mut self.stack);
        let id = self.stack.pop()?;
        self.cur = arena.right(id);
        Some(entry(arena, id))
    }
}

impl<'a, K, V> Iterator for PostOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        loop {
            push_left_spine(arena, self.cur.take(), &mut self.stack);
            let &top = self.stack.last()?;
            match arena.right(top) {
                Some(right) if self.last != Some(right) => self.cur = Some(right),
                _ => {
                    self.stack.pop();
                    self.last = Some(top);
                    return Some(entry(arena, top));
                }
            }
        }
    }
}

impl<'a, K, V> Iterator for LevelOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let arena = self.arena;
        let id = self.queue.pop_front()?;
        self.queue.extend(arena.left(id));
        self.queue.extend(arena.right(id));
        Some(entry(arena, id))
    }
}
