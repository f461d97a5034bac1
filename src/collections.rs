//! The sequence containers the traversals lean on: a FIFO [`Queue`], a LIFO [`Stack`] and a
//! rank-addressed [`Vector`] whose accessors report bad ranks instead of panicking.

use std::collections::VecDeque;
use std::fmt;

use crate::error::{Error, Result};

/// First-in, first-out sequence. Used by level-order traversal.
pub trait Queue<T> {
    /// Appends to the back.
    fn push(&mut self, item: T);
    /// Removes from the front.
    fn pop(&mut self) -> Option<T>;
    /// Whether nothing is queued.
    fn is_empty(&self) -> bool;
}

impl<T> Queue<T> for VecDeque<T> {
    fn push(&mut self, item: T) {
        self.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }

    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

/// Last-in, first-out sequence. Used by the explicit-stack traversals.
pub trait Stack<T> {
    /// Pushes onto the top.
    fn push(&mut self, item: T);
    /// Removes the top.
    fn pop(&mut self) -> Option<T>;
    /// Peeks at the top.
    fn top(&self) -> Option<&T>;
    /// Whether the stack is empty.
    fn is_empty(&self) -> bool;
}

impl<T> Stack<T> for Vec<T> {
    fn push(&mut self, item: T) {
        Vec::push(self, item);
    }

    fn pop(&mut self) -> Option<T> {
        Vec::pop(self)
    }

    fn top(&self) -> Option<&T> {
        self.last()
    }

    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

/// A growable sequence addressed by rank (a zero-based position).
///
/// # Examples
///
/// ```
/// use bintree::collections::Vector;
/// use bintree::Error;
///
/// let mut v: Vector<i32> = [3, 1, 2].into_iter().collect();
/// assert_eq!(v.at(1), Ok(&1));
/// assert_eq!(v.at(3), Err(Error::OutOfBounds { rank: 3, size: 3 }));
/// assert_eq!(v.remove(0), Ok(3));
/// assert_eq!(v.to_string(), "{1, 2}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Vector<T> {
    elems: Vec<T>,
}

impl<T> Vector<T> {
    /// An empty vector.
    pub fn new() -> Self {
        Self { elems: Vec::new() }
    }

    /// An empty vector with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elems: Vec::with_capacity(capacity),
        }
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.elems.len()
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    fn check(&self, rank: usize) -> Result<()> {
        if rank < self.size() {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                rank,
                size: self.size(),
            })
        }
    }

    /// The first element.
    pub fn front(&self) -> Result<&T> {
        self.elems.first().ok_or(Error::Empty)
    }

    /// The last element.
    pub fn back(&self) -> Result<&T> {
        self.elems.last().ok_or(Error::Empty)
    }

    /// The element at `rank`.
    pub fn at(&self, rank: usize) -> Result<&T> {
        self.check(rank)?;
        Ok(&self.elems[rank])
    }

    /// Replaces the element at `rank`, returning the old one.
    pub fn assign(&mut self, rank: usize, item: T) -> Result<T> {
        self.check(rank)?;
        Ok(std::mem::replace(&mut self.elems[rank], item))
    }

    /// Inserts before `rank`. `rank == size()` appends.
    pub fn insert(&mut self, rank: usize, item: T) -> Result<()> {
        if rank > self.size() {
            return Err(Error::OutOfBounds {
                rank,
                size: self.size(),
            });
        }
        self.elems.insert(rank, item);
        Ok(())
    }

    /// Removes and returns the element at `rank`, shifting the tail down.
    pub fn remove(&mut self, rank: usize) -> Result<T> {
        self.check(rank)?;
        Ok(self.elems.remove(rank))
    }

    /// Appends to the back.
    pub fn push(&mut self, item: T) {
        self.elems.push(item);
    }

    /// Removes the last element.
    pub fn pop(&mut self) -> Result<T> {
        self.elems.pop().ok_or(Error::Empty)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.elems.clear();
    }

    /// Calls `visit` on each element in rank order.
    pub fn traverse(&self, mut visit: impl FnMut(&T)) {
        self.elems.iter().for_each(|item| visit(item));
    }

    /// Iterates in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elems.iter()
    }

    /// Number of adjacent pairs that are out of order. Zero means sorted.
    pub fn disordered(&self) -> usize
    where
        T: PartialOrd,
    {
        self.elems.windows(2).filter(|w| w[0] > w[1]).count()
    }

    /// Rank of the last element equal to `item`.
    pub fn find(&self, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.elems.iter().rposition(|e| e == item)
    }

    /// Binary search over a sorted vector. Returns the rank just past the last element not greater
    /// than `item`, which is also where `item` would be inserted to keep the order stable.
    pub fn search(&self, item: &T) -> usize
    where
        T: Ord,
    {
        let (mut lo, mut hi) = (0, self.size());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if item < &self.elems[mid] {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        lo
    }

    /// Drops later duplicates from an unsorted vector, keeping first occurrences. Returns how many
    /// were dropped.
    pub fn deduplicate(&mut self) -> usize
    where
        T: PartialEq,
    {
        let before = self.size();
        let mut rank = 1;
        while rank < self.elems.len() {
            if self.elems[..rank].contains(&self.elems[rank]) {
                self.elems.remove(rank);
            } else {
                rank += 1;
            }
        }
        before - self.size()
    }

    /// Collapses runs of equal elements in a sorted vector. Returns how many were dropped.
    pub fn uniquify(&mut self) -> usize
    where
        T: PartialEq,
    {
        let before = self.size();
        self.elems.dedup();
        before - self.size()
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elems: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_braced(f, self.iter())
    }
}

/// Writes `{a, b, c}`.
pub(crate) fn write_braced<I>(f: &mut fmt::Formatter<'_>, items: I) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    f.write_str("{")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("}")
}
