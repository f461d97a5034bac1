use bintree::node::{Arena, Color, Side};
use bintree::{Bst, Error};

#[test]
fn rotations_round_trip() {
    let mut tree: Bst<_, _> = [5, 3, 8, 1, 4].into_iter().map(|k| (k, ())).collect();
    let five = tree.root().unwrap();
    let snapshot = |tree: &Bst<i32, ()>| {
        let arena = tree.arena();
        arena
            .ids()
            .map(|id| (id, arena.parent(id), arena.left(id), arena.right(id), arena[id].height()))
            .collect::<Vec<_>>()
    };
    let before = snapshot(&tree);

    let three = tree.rotate_right(five).unwrap();
    assert_eq!(tree.root(), Some(three));
    assert_eq!(tree.arena().height(Some(three)), 2);
    assert_eq!(tree.arena()[tree.arena().left(five).unwrap()].key(), &4);
    assert_eq!(tree.to_string(), "{1, 3, 4, 5, 8}");

    assert_eq!(tree.rotate_left(three), Some(five));
    assert_eq!(tree.root(), Some(five));
    assert_eq!(snapshot(&tree), before);

    // Nothing to promote.
    let one = tree.search(&1).unwrap();
    assert_eq!(tree.rotate_left(one), None);
    assert_eq!(snapshot(&tree), before);
}

#[test]
fn red_nodes_do_not_add_height() {
    let mut arena = Arena::new();
    let root = arena.alloc(2, ());
    let one = arena.insert_child(root, Side::Left, 1, ());
    arena.update_height_above(Some(root));
    assert_eq!(arena.height(Some(root)), 1);

    arena[one].set_color(Color::Red);
    arena.update_height_above(Some(one));
    assert_eq!(arena.height(Some(one)), -1);
    assert_eq!(arena.height(Some(root)), 0);

    let three = arena.alloc_colored(3, (), Color::Red);
    arena.set_child(root, Side::Right, Some(three));
    arena.update_height_above(Some(root));
    assert_eq!(arena.height(Some(root)), 0);
    assert!(arena.is_red(arena.sibling(one)));
    assert!(arena.is_black(None));
    assert_eq!(arena.balance_factor(root), 0);
}

#[test]
fn height_updates_stop_at_the_first_unchanged_node() {
    let mut arena = Arena::new();
    let root = arena.alloc(4, ());
    let two = arena.insert_child(root, Side::Left, 2, ());
    let six = arena.insert_child(root, Side::Right, 6, ());
    arena.update_height_above(Some(root));
    assert_eq!(arena.height(Some(root)), 1);

    // Growing the left side by one level reaches the root.
    let one = arena.insert_child(two, Side::Left, 1, ());
    arena.update_height_above(Some(two));
    assert_eq!(arena.height(Some(two)), 1);
    assert_eq!(arena.height(Some(root)), 2);

    // A second child on the same node changes nothing above it.
    arena.insert_child(two, Side::Right, 3, ());
    arena.update_height_above(Some(two));
    assert_eq!(arena.height(Some(root)), 2);
    assert_eq!(arena.uncle(one), Some(six));
    assert_eq!(arena.size(Some(root)), 5);
}

#[test]
fn height_walk_leaves_ancestors_above_an_unchanged_node_alone() {
    let mut arena = Arena::new();
    let root = arena.alloc(4, ());
    let two = arena.insert_child(root, Side::Left, 2, ());
    arena.update_height_above(Some(root));
    assert_eq!(arena.height(Some(root)), 1);

    // Recolor the root without refreshing it, so its cached height is now stale.
    arena[root].set_color(Color::Red);
    arena.update_height_above(Some(two));
    assert_eq!(arena.height(Some(two)), 0);
    assert_eq!(arena.height(Some(root)), 1);

    // Starting at the root itself does refresh it.
    arena.update_height_above(Some(root));
    assert_eq!(arena.height(Some(root)), 0);
}

#[test]
fn connect34_hangs_three_nodes_and_four_subtrees() {
    let mut arena = Arena::new();
    let [a, b, c] = [1, 3, 5].map(|k| arena.alloc(k, ()));
    let [t0, t1, t2, t3] = [0, 2, 4, 6].map(|k| Some(arena.alloc(k, ())));

    let top = arena.connect34(a, b, c, t0, t1, t2, t3);
    assert_eq!(top, b);
    assert!(arena.is_root(b));
    assert_eq!(arena.height(Some(b)), 2);
    assert_eq!(arena.parent(a), Some(b));
    assert_eq!(arena.parent(c), Some(b));
    assert_eq!(arena.right(a), t1);
    assert_eq!(arena.left(c), t2);
    assert!(arena.is_balanced(Some(b)));
    assert_eq!(arena.size(Some(b)), 7);

    let keys: Vec<_> = std::iter::successors(Some(arena.leftmost(b)), |&x| arena.successor(x))
        .map(|x| *arena[x].key())
        .collect();
    assert_eq!(keys, [0, 1, 2, 3, 4, 5, 6]);
    assert_eq!(arena.precursor(c), t2);
}

#[test]
fn freed_ids_are_reported_stale() {
    let mut arena = Arena::new();
    let a = arena.alloc("a", 1);
    assert_eq!(arena.free(a), Ok(("a", 1)));
    assert_eq!(arena.get(a).err(), Some(Error::StaleNode(a)));
    assert_eq!(arena.free(a), Err(Error::StaleNode(a)));
    assert_eq!(arena.rotate_left(a), None);

    // The slot is reused.
    let b = arena.alloc("b", 2);
    assert_eq!(b, a);
    assert_eq!(arena.len(), 1);
}
