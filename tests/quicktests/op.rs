use quickcheck::{Arbitrary, Gen};

/// One step of a random workload against the public tree API.
#[derive(Copy, Clone, Debug)]
pub enum Op<K, V> {
    Insert(K, V),
    Remove(K),
    /// Remove whatever key currently sits at the root, which always takes the two-child path on a
    /// bushy tree.
    RemoveRoot,
    /// Overwrite the value of K in place, if present.
    Update(K, V),
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    // Inserts are weighted up so trees get deep enough to exercise removals.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 2, 3]).copied() {
            Some(0) => Op::Insert(K::arbitrary(g), V::arbitrary(g)),
            Some(1) => Op::Remove(K::arbitrary(g)),
            Some(2) => Op::RemoveRoot,
            _ => Op::Update(K::arbitrary(g), V::arbitrary(g)),
        }
    }
}
