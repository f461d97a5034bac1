use bintree::collections::Vector;
use bintree::node::NodeId;
use bintree::traverse::{self, Order, Strategy};
use bintree::Bst;

use crate::init_logging;

const STRATEGIES: [Strategy; 3] = [Strategy::Recursive, Strategy::Stack, Strategy::Morris];

fn sample() -> Bst<i32, i32> {
    [5, 3, 8, 1, 4, 7, 9].into_iter().map(|k| (k, k * 10)).collect()
}

fn collect(tree: &mut Bst<i32, i32>, order: Order, strategy: Strategy) -> Vec<i32> {
    let mut keys = Vec::new();
    tree.travel(order, strategy, |k, _| keys.push(*k));
    keys
}

type Links = Vec<(NodeId, Option<NodeId>, Option<NodeId>, Option<NodeId>, i32)>;

/// Every node's parent, children and height.
fn links(tree: &Bst<i32, i32>) -> Links {
    let arena = tree.arena();
    arena
        .ids()
        .map(|id| {
            let node = &arena[id];
            (id, node.parent(), node.left(), node.right(), node.height())
        })
        .collect()
}

fn keys<'a>(it: impl Iterator<Item = (&'a i32, &'a i32)>) -> Vec<i32> {
    it.map(|(k, _)| *k).collect()
}

#[test]
fn seven_node_tree() {
    init_logging();
    let mut tree = sample();

    for strategy in STRATEGIES {
        assert_eq!(collect(&mut tree, Order::Pre, strategy), [5, 3, 1, 4, 8, 7, 9]);
        assert_eq!(collect(&mut tree, Order::In, strategy), [1, 3, 4, 5, 7, 8, 9]);
        assert_eq!(collect(&mut tree, Order::Post, strategy), [1, 4, 3, 7, 9, 8, 5]);
    }
    assert_eq!(collect(&mut tree, Order::Level, Strategy::Stack), [5, 3, 8, 1, 4, 7, 9]);

    let keys: Vector<i32> = tree.keys().iter().map(|k| **k).collect();
    assert_eq!(keys.to_string(), "{1, 3, 4, 5, 7, 8, 9}");
    assert_eq!(keys.disordered(), 0);
    assert_eq!(keys.search(&6), 4);
}

#[test]
fn seven_node_tree_after_removing_the_root() {
    init_logging();
    let mut tree = sample();
    assert_eq!(tree.remove(&5), Ok((5, 50)));
    assert_eq!(tree.size(), 6);

    for strategy in STRATEGIES {
        assert_eq!(collect(&mut tree, Order::In, strategy), [1, 3, 4, 7, 8, 9]);
        assert_eq!(collect(&mut tree, Order::Pre, strategy), [7, 3, 1, 4, 8, 9]);
        assert_eq!(collect(&mut tree, Order::Post, strategy), [1, 4, 3, 9, 8, 7]);
    }
    assert_eq!(tree.find(&7), Some(&70));
}

#[test]
fn morris_on_a_single_node() {
    init_logging();
    let mut tree = Bst::new();
    let only = tree.insert(1, 10).id();

    let mut seen = Vec::new();
    tree.travel(Order::In, Strategy::Morris, |k, v| seen.push((*k, *v)));
    assert_eq!(seen, [(1, 10)]);
    assert_eq!(tree.arena().left(only), None);
    assert_eq!(tree.arena().right(only), None);
}

#[test]
fn empty_tree_visits_nothing() {
    let mut tree: Bst<i32, i32> = Bst::new();
    for order in [Order::Level, Order::Pre, Order::In, Order::Post] {
        for strategy in STRATEGIES {
            assert!(collect(&mut tree, order, strategy).is_empty());
        }
    }
    assert_eq!(tree.iter().count(), 0);
}

#[test]
fn backtracking_in_order_matches_a_subtree() {
    let tree = sample();
    let three = tree.search(&3).unwrap();

    let mut keys = Vec::new();
    traverse::in_order_backtrack(tree.arena(), Some(three), |k, _| keys.push(*k));
    assert_eq!(keys, [1, 3, 4]);
}

#[quickcheck]
fn strategies_agree(xs: Vec<i32>) -> bool {
    let mut tree: Bst<_, _> = xs.iter().map(|x| (*x, *x)).collect();

    [Order::Pre, Order::In, Order::Post].into_iter().all(|order| {
        let expected = collect(&mut tree, order, Strategy::Recursive);
        collect(&mut tree, order, Strategy::Stack) == expected
            && collect(&mut tree, order, Strategy::Morris) == expected
    })
}

#[quickcheck]
fn iterators_agree_with_callbacks(xs: Vec<i32>) -> bool {
    let mut tree: Bst<_, _> = xs.iter().map(|x| (*x, *x)).collect();
    let pre = keys(tree.iter_pre());
    let inorder = keys(tree.iter());
    let post = keys(tree.iter_post());
    let level = keys(tree.iter_level());

    pre == collect(&mut tree, Order::Pre, Strategy::Stack)
        && inorder == collect(&mut tree, Order::In, Strategy::Stack)
        && post == collect(&mut tree, Order::Post, Strategy::Stack)
        && level == collect(&mut tree, Order::Level, Strategy::Stack)
}

#[quickcheck]
fn morris_leaves_links_untouched(xs: Vec<i32>) -> bool {
    let mut tree: Bst<_, _> = xs.iter().map(|x| (*x, *x)).collect();
    let before = links(&tree);

    [Order::Pre, Order::In, Order::Post].into_iter().all(|order| {
        collect(&mut tree, order, Strategy::Morris);
        links(&tree) == before
    })
}
