//! An unbalanced BST. Values are placed exactly where the comparisons during insertion lead and
//! the tree is never rotated, so its shape is entirely decided by insertion order.
//!
//! Equal values always descend to the right. This means duplicates are kept (every `insert`
//! adds a node) and, among equal values, the ascending sequence yields them in the order they
//! were inserted.
//!
//! # Examples
//!
//! ```
//! use bst_queue::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::new();
//! assert!(tree.is_empty());
//!
//! for x in [5, 3, 8, 1, 4] {
//!     tree.insert(x);
//! }
//!
//! assert_eq!(tree.ascending_sequence(), vec![1, 3, 4, 5, 8]);
//! assert_eq!(tree.len(), 5);
//! assert_eq!(tree.height(), 3);
//! ```

use std::fmt;
use std::iter::FusedIterator;

/// What each level of depth is indented by in [`BinarySearchTree::render_structure`].
const INDENT: &str = "    ";

/// What [`BinarySearchTree::render_structure`] produces for a tree without nodes.
const EMPTY_MESSAGE: &str = "Tree is empty.\n";

type Link<T> = Option<Box<Node<T>>>;

/// A single value and the two subtrees it exclusively owns.
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree without any balancing. This can be used for inserting values and then
/// reading them back in ascending order along with some statistics about the shape of the tree.
pub struct BinarySearchTree<T> {
    root: Link<T>,
    /// Number of nodes reachable from `root`. Maintained on insert.
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    // Boxes drop recursively, one frame per level, and a degenerate tree is as deep as it is long.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> BinarySearchTree<T> {
    /// Generate a new, empty `BinarySearchTree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts the value as a new leaf. Smaller values go left and everything else, including
    /// values equal to the one being compared against, goes right. The tree is not rebalanced so
    /// inserting already sorted values builds a chain as tall as the tree is long.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_queue::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    /// tree.insert(2);
    ///
    /// // Duplicates are kept and each one nests to the right of the previous.
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut depth = 1;
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if value < node.value {
                &mut node.left
            } else {
                &mut node.right
            };
            depth += 1;
        }
        *slot = Some(Node::new_boxed(value));
        self.len += 1;

        log::trace!("inserted node at depth {} ({} nodes total)", depth, self.len);
    }

    /// Returns an iterator visiting every value in ascending order (left subtree, then the node,
    /// then the right subtree).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Collects every value in ascending order. The result always has [`len`][Self::len] values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_queue::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(tree.ascending_sequence(), vec![1, 2, 3]);
    /// ```
    pub fn ascending_sequence(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Pushes every value, in ascending order, onto the back of `sink`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::VecDeque;
    /// use bst_queue::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [5, 3, 8].into_iter().collect();
    /// let mut queue = VecDeque::new();
    /// tree.extend_inorder(&mut queue);
    ///
    /// assert_eq!(queue.pop_front(), Some(3));
    /// assert_eq!(queue.pop_front(), Some(5));
    /// assert_eq!(queue.pop_front(), Some(8));
    /// ```
    pub fn extend_inorder<E>(&self, sink: &mut E)
    where
        T: Clone,
        E: Extend<T>,
    {
        sink.extend(self.iter().cloned());
    }

    /// Number of values inserted so far, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Gets the height of this tree: the number of nodes on the longest path from the root to a
    /// leaf. An empty tree has a height of 0 and a single node has a height of 1.
    ///
    /// This is not cached and walks every node.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<T>, usize)> =
            self.root.as_deref().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|n| (n, depth + 1)));
            stack.extend(node.right.as_deref().map(|n| (n, depth + 1)));
        }

        height
    }

    /// Draws the tree rotated a quarter turn: one value per line, indented by its depth, with
    /// right subtrees above their parent and left subtrees below it. The root therefore ends up
    /// unindented somewhere in the middle.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_queue::BinarySearchTree;
    ///
    /// let tree: BinarySearchTree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.render_structure(), "    3\n2\n    1\n");
    ///
    /// let empty = BinarySearchTree::<i32>::new();
    /// assert_eq!(empty.render_structure(), "Tree is empty.\n");
    /// ```
    pub fn render_structure(&self) -> String
    where
        T: fmt::Display,
    {
        if self.is_empty() {
            return EMPTY_MESSAGE.to_string();
        }

        let mut out = String::new();
        let mut stack = Vec::new();
        let mut next = self.root.as_deref().map(|root| (root, 0));
        loop {
            // Reverse inorder: run down the right spine first.
            while let Some((node, depth)) = next {
                stack.push((node, depth));
                next = node.right.as_deref().map(|n| (n, depth + 1));
            }
            let Some((node, depth)) = stack.pop() else {
                break;
            };

            out.push_str(&INDENT.repeat(depth));
            out.push_str(&node.value.to_string());
            out.push('\n');

            next = node.left.as_deref().map(|n| (n, depth + 1));
        }

        out
    }
}

impl<T> FromIterator<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for BinarySearchTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`BinarySearchTree`] in ascending order.
///
/// Created by [`BinarySearchTree::iter`].
pub struct Iter<'a, T> {
    /// Nodes whose left subtree is being (or has been) visited but which haven't been yielded.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    fn new(tree: &'a BinarySearchTree<T>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: tree.len,
        };
        iter.push_left_spine(tree.root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut next: Option<&'a Node<T>>) {
        while let Some(node) = next {
            self.stack.push(node);
            next = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and to a plain `Vec` of everything inserted.
    /// This way we can check after every read that the tree agrees with the `Vec`.
    fn do_ops<T>(ops: &[Op<T>], bst: &mut BinarySearchTree<T>, inserted: &mut Vec<T>) -> bool
    where
        T: Ord + Clone,
    {
        for op in ops {
            match op {
                Op::Insert(x) => {
                    bst.insert(x.clone());
                    inserted.push(x.clone());
                }
                Op::Ascending => {
                    // A stable sort keeps equal values in insertion order, just like the tree.
                    let mut expected = inserted.clone();
                    expected.sort();
                    if bst.ascending_sequence() != expected {
                        return false;
                    }
                }
                Op::Stats => {
                    if bst.len() != inserted.len()
                        || bst.is_empty() != inserted.is_empty()
                        || (bst.height() == 0) != inserted.is_empty()
                        || bst.height() > bst.len()
                    {
                        return false;
                    }
                }
            }
        }

        true
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = BinarySearchTree::new();
            let mut inserted = Vec::new();

            do_ops(&ops, &mut tree, &mut inserted)
        }
    }

    quickcheck::quickcheck! {
        fn height_matches_definition(xs: Vec<i8>) -> bool {
            let tree: BinarySearchTree<_> = xs.into_iter().collect();

            fn height(node: Option<&Node<i8>>) -> usize {
                node.map_or(0, |n| 1 + height(n.left.as_deref()).max(height(n.right.as_deref())))
            }

            tree.height() == height(tree.root.as_deref())
        }
    }

    quickcheck::quickcheck! {
        fn order_invariant_holds(xs: Vec<i16>) -> bool {
            let tree: BinarySearchTree<_> = xs.into_iter().collect();

            // Every left subtree is strictly smaller and every right subtree is at least as big.
            fn within(node: Option<&Node<i16>>, low: Option<i16>, high: Option<i16>) -> bool {
                match node {
                    None => true,
                    Some(n) => {
                        low.map_or(true, |low| n.value >= low)
                            && high.map_or(true, |high| n.value < high)
                            && within(n.left.as_deref(), low, Some(n.value))
                            && within(n.right.as_deref(), Some(n.value), high)
                    }
                }
            }

            within(tree.root.as_deref(), None, None)
        }
    }
}
