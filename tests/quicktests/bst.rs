use bintree::Bst;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and to a map of what should be in it, checking each
/// step's outcome against the map as it goes.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut Bst<K, V>, map: &mut BTreeMap<K, V>)
where
    K: Ord + Clone,
    V: Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                // Duplicates are rejected, so the first value stays.
                if bst.insert(k.clone(), v.clone()).is_inserted() {
                    map.insert(k.clone(), v.clone());
                }
            }
            Op::Remove(k) => {
                let removed = bst.remove(k).ok().map(|(_, v)| v);
                assert_eq!(removed.is_some(), map.remove(k).is_some());
            }
            Op::RemoveRoot => {
                if let Some(root) = bst.root() {
                    let key = bst.arena()[root].key().clone();
                    assert!(bst.remove(&key).is_ok());
                    assert!(map.remove(&key).is_some());
                }
            }
            Op::Update(k, v) => {
                if let Some(slot) = bst.find_mut(k) {
                    *slot = v.clone();
                }
                if let Some(slot) = map.get_mut(k) {
                    *slot = v.clone();
                }
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Bst::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.size() == map.len()
        && map.keys().all(|key| tree.find(key) == map.get(key))
        && tree.iter().eq(map.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Bst<_, _> = xs.iter().map(|x| (*x, *x)).collect();

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Bst<_, _> = xs.iter().map(|x| (*x, *x)).collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Bst<_, _> = xs.iter().map(|x| (*x, *x)).collect();
    for delete in &deletes {
        let _ = tree.remove(delete);
    }

    let deleted: HashSet<_> = deletes.into_iter().collect();
    let still_present: HashSet<_> = xs.into_iter().filter(|x| !deleted.contains(x)).collect();

    tree.size() == still_present.len()
        && still_present.iter().all(|x| tree.find(x) == Some(x))
        && deleted.iter().all(|x| !tree.contains(x))
}

#[quickcheck]
fn in_order_is_sorted_and_distinct(xs: Vec<i16>) -> bool {
    let tree: Bst<_, _> = xs.iter().map(|x| (*x, ())).collect();
    let keys: Vec<_> = tree.iter().map(|(k, _)| *k).collect();

    keys.windows(2).all(|w| w[0] < w[1]) && keys.len() == xs.iter().collect::<HashSet<_>>().len()
}

#[quickcheck]
fn size_counts_only_new_keys(xs: Vec<u8>) -> bool {
    let mut tree = Bst::new();
    let mut seen = HashSet::new();
    xs.into_iter().all(|x| {
        let before = tree.size();
        let inserted = tree.insert(x, ()).is_inserted();
        inserted == seen.insert(x) && tree.size() == before + usize::from(inserted)
    })
}

#[test]
fn removing_from_an_empty_tree_is_not_found() {
    let mut tree: Bst<i32, ()> = Bst::new();
    assert_eq!(tree.remove(&1), Err(bintree::Error::NotFound));
    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
}
