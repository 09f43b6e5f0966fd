use bst_queue::report::{verify_ascending, Statistics};
use bst_queue::BinarySearchTree;

use std::collections::VecDeque;

#[quickcheck]
fn size_counts_every_insert(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();

    tree.len() == xs.len()
}

#[quickcheck]
fn ascending_is_sorted_and_complete(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.iter().copied().collect();
    let ascending = tree.ascending_sequence();

    let mut sorted = xs;
    sorted.sort();

    verify_ascending(&ascending) && ascending.len() == tree.len() && ascending == sorted
}

#[quickcheck]
fn empty_iff_no_size_iff_no_height(xs: Vec<u8>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();

    tree.is_empty() == (tree.len() == 0) && (tree.len() == 0) == (tree.height() == 0)
}

#[quickcheck]
fn reads_are_idempotent(xs: Vec<i16>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();

    tree.len() == tree.len()
        && tree.height() == tree.height()
        && tree.ascending_sequence() == tree.ascending_sequence()
}

#[quickcheck]
fn height_is_bounded(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();
    let stats = Statistics::of(&tree);

    stats.optimal_height <= stats.height && stats.height <= stats.size
}

#[quickcheck]
fn strictly_increasing_is_a_chain(n: u8) -> bool {
    let n = usize::from(n);
    let tree: BinarySearchTree<_> = (0..n).collect();

    tree.height() == n
}

#[quickcheck]
fn queue_drains_in_order(xs: Vec<i32>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();
    let mut queue = VecDeque::new();
    tree.extend_inorder(&mut queue);

    let drained: Vec<_> = std::iter::from_fn(|| queue.pop_front()).collect();
    drained == tree.ascending_sequence() && queue.is_empty()
}

#[quickcheck]
fn render_has_a_line_per_node(xs: Vec<i8>) -> bool {
    let tree: BinarySearchTree<_> = xs.into_iter().collect();
    let rendered = tree.render_structure();

    if tree.is_empty() {
        rendered == "Tree is empty.\n"
    } else {
        rendered.lines().count() == tree.len()
            && rendered.lines().filter(|l| !l.starts_with(' ')).count() == 1
    }
}

#[test]
fn scenarios() {
    let tree: BinarySearchTree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    assert_eq!(tree.ascending_sequence(), vec![1, 3, 4, 5, 8]);
    assert_eq!((tree.len(), tree.height()), (5, 3));

    let tree: BinarySearchTree<i32> = std::iter::empty().collect();
    assert!(tree.is_empty());
    assert_eq!((tree.len(), tree.height()), (0, 0));
    assert!(tree.ascending_sequence().is_empty());

    let tree: BinarySearchTree<i32> = [2, 2, 2].into_iter().collect();
    assert_eq!(tree.ascending_sequence(), vec![2, 2, 2]);
    assert_eq!((tree.len(), tree.height()), (3, 3));

    let tree: BinarySearchTree<i32> = [1, 2, 3, 4, 5].into_iter().collect();
    assert_eq!(tree.height(), 5);
}
