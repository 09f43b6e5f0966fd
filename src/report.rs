//! Numbers and listings about a tree, for showing to a person.

use std::fmt;
use std::io::{self, Write};

use crate::BinarySearchTree;

/// A snapshot of the shape of a tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Statistics {
    /// How many values the tree holds.
    pub size: usize,
    /// Actual height of the tree.
    pub height: usize,
    /// Whether the tree holds nothing.
    pub is_empty: bool,
    /// Height of a perfectly balanced tree of the same size: `floor(log2(size)) + 1`, or 0 when
    /// empty.
    pub optimal_height: usize,
    /// `height - optimal_height`. Lower is better balanced.
    pub balance_factor: isize,
}

impl Statistics {
    /// Measures `tree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_queue::BinarySearchTree;
    /// use bst_queue::report::Statistics;
    ///
    /// let tree: BinarySearchTree<_> = (1..=5).collect();
    /// let stats = Statistics::of(&tree);
    ///
    /// assert_eq!(stats.height, 5);
    /// assert_eq!(stats.optimal_height, 3);
    /// assert_eq!(stats.balance_factor, 2);
    /// ```
    pub fn of<T>(tree: &BinarySearchTree<T>) -> Self {
        let size = tree.len();
        let height = tree.height();
        let optimal_height = optimal_height(size);

        Self {
            size,
            height,
            is_empty: tree.is_empty(),
            optimal_height,
            balance_factor: height as isize - optimal_height as isize,
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Nodes:    {}", self.size)?;
        writeln!(f, "Tree Height:    {}", self.height)?;
        writeln!(f, "Is Empty:       {}", yes_no(self.is_empty))?;
        writeln!(f, "Optimal Height: {}", self.optimal_height)?;
        writeln!(f, "Balance Factor: {}", self.balance_factor)
    }
}

fn optimal_height(size: usize) -> usize {
    match size {
        0 => 0,
        n => n.ilog2() as usize + 1,
    }
}

/// `YES` or `NO`.
pub fn yes_no(b: bool) -> &'static str {
    if b {
        "YES"
    } else {
        "NO"
    }
}

/// Writes each value right aligned in a column of width 4 followed by a space, breaking the line
/// after every `per_line` values. Returns how many values were written.
///
/// No line break is written after a final, partial line.
pub fn write_values<W, I>(out: &mut W, values: I, per_line: usize) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator,
    I::Item: fmt::Display,
{
    let mut count = 0;
    for value in values {
        write!(out, "{:>4} ", value)?;
        count += 1;
        if per_line > 0 && count % per_line == 0 {
            writeln!(out)?;
        }
    }

    Ok(count)
}

/// Whether `values` never goes down.
pub fn verify_ascending<T: PartialOrd>(values: &[T]) -> bool {
    values.windows(2).all(|pair| pair[0] <= pair[1])
}
