//! The interactive session: a numbered menu to load values from a file into a
//! [`BinarySearchTree`], look at it, and pour it into a queue in sorted order.
//!
//! Everything is written to a caller supplied [`Write`] and choices are read from a caller
//! supplied [`BufRead`], so a whole session can be scripted.
//!
//! # Examples
//!
//! ```no_run
//! use std::io;
//! use bst_queue::menu::Session;
//!
//! let stdin = io::stdin();
//! let mut session = Session::<i64, _, _>::new("numbers.txt", stdin.lock(), io::stdout());
//! session.run()?;
//! # Ok::<(), io::Error>(())
//! ```

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::report::{self, Statistics};
use crate::source::{self, SourceError};
use crate::BinarySearchTree;

/// How many values are listed per line when printing them.
const VALUES_PER_LINE: usize = 10;

const RULE: &str = "========================================";

const BANNER_RULE: &str = "--------------------------------------------------------";

/// One entry of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    /// Read the configured file and insert every value in it.
    Load,
    /// Draw the tree.
    Display,
    /// Print [`Statistics`].
    Statistics,
    /// Move the values into a queue in ascending order, then empty it again.
    Queue,
    /// Leave.
    Exit,
}

impl FromStr for Choice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Load),
            "2" => Ok(Self::Display),
            "3" => Ok(Self::Statistics),
            "4" => Ok(Self::Queue),
            "5" => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

/// A tree plus everything needed to drive it from a menu.
pub struct Session<T, R, W> {
    tree: BinarySearchTree<T>,
    source: PathBuf,
    /// Set by the first load attempt, successful or not.
    loaded: bool,
    input: R,
    output: W,
}

impl<T, R, W> Session<T, R, W>
where
    T: Ord + Clone + fmt::Display + FromStr,
    R: BufRead,
    W: Write,
{
    /// Starts a session with an empty tree that loads its values from `source`.
    pub fn new(source: impl Into<PathBuf>, input: R, output: W) -> Self {
        Self {
            tree: BinarySearchTree::new(),
            source: source.into(),
            loaded: false,
            input,
            output,
        }
    }

    /// The tree as it currently stands.
    pub fn tree(&self) -> &BinarySearchTree<T> {
        &self.tree
    }

    /// The file values are loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Ends the session, handing back its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Shows the menu and carries out choices until `5` is chosen or the input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        self.write_header()?;

        loop {
            self.write_menu()?;
            write!(self.output, "Enter your choice: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                log::debug!("input closed, leaving the menu");
                return self.perform(Choice::Exit);
            }

            match line.parse() {
                Ok(Choice::Exit) => return self.perform(Choice::Exit),
                Ok(choice) => self.perform(choice)?,
                Err(()) => {
                    log::debug!("ignoring menu input {:?}", line.trim());
                    writeln!(self.output, "\n[ERROR] Invalid choice! Please select 1-5.")?;
                }
            }
        }
    }

    /// Loads, draws, measures, and queues the tree once each without asking for anything.
    pub fn run_batch(&mut self) -> io::Result<()> {
        for choice in [
            Choice::Load,
            Choice::Display,
            Choice::Statistics,
            Choice::Queue,
        ] {
            self.perform(choice)?;
        }

        Ok(())
    }

    /// Carries out a single menu entry.
    pub fn perform(&mut self, choice: Choice) -> io::Result<()> {
        match choice {
            Choice::Load => self.load(),
            Choice::Exit => self.write_farewell(),
            _ if !self.loaded => {
                writeln!(self.output, "\n[ERROR] Please load data first (Option 1)!")
            }
            Choice::Display => self.display(),
            Choice::Statistics => self.statistics(),
            Choice::Queue => self.queue_conversion(),
        }
    }

    fn load(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n>>> LOADING DATA FROM FILE <<<")?;
        writeln!(self.output, "================================")?;
        self.loaded = true;

        let values: Vec<T> = match source::load_file(&self.source) {
            Ok(values) => values,
            Err(SourceError::Open { path, source }) => {
                log::warn!("could not open {}: {}", path.display(), source);
                writeln!(self.output, "[ERROR] Could not open file: {}", path.display())?;
                return writeln!(
                    self.output,
                    "Please ensure the file exists in the program directory."
                );
            }
            Err(err) => {
                log::warn!("{}", err);
                return writeln!(self.output, "[ERROR] {}: {}", err, self.source.display());
            }
        };

        writeln!(
            self.output,
            "Reading values from '{}'...\n",
            self.source.display()
        )?;
        writeln!(self.output, "Values being inserted:")?;
        writeln!(self.output, "----------------------")?;
        let count = report::write_values(&mut self.output, &values, VALUES_PER_LINE)?;
        self.tree.extend(values);
        log::info!(
            "loaded {} values, tree holds {} nodes",
            count,
            self.tree.len()
        );

        writeln!(self.output, "\n\n[SUCCESS] Loaded {} values into BST!", count)
    }

    fn display(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n>>> DISPLAYING BST STRUCTURE <<<")?;
        if self.tree.is_empty() {
            return write!(self.output, "{}", self.tree.render_structure());
        }

        writeln!(self.output, "\nTree Structure (rotated 90° clockwise):")?;
        writeln!(self.output, "{}", RULE)?;
        write!(self.output, "{}", self.tree.render_structure())?;
        writeln!(self.output, "{}", RULE)
    }

    fn statistics(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n>>> BST STATISTICS <<<")?;
        writeln!(self.output, "======================\n")?;
        write!(self.output, "{}", Statistics::of(&self.tree))?;
        writeln!(
            self.output,
            "\n(Lower balance factor indicates better tree balance)"
        )
    }

    fn queue_conversion(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n>>> BST TO QUEUE CONVERSION <<<")?;
        writeln!(self.output, "================================\n")?;

        writeln!(self.output, "Step 1: Performing INORDER traversal of BST...")?;
        writeln!(self.output, "        (Left -> Root -> Right)\n")?;
        let mut queue = VecDeque::with_capacity(self.tree.len());
        self.tree.extend_inorder(&mut queue);
        writeln!(
            self.output,
            "[SUCCESS] Values stored in queue in ASCENDING order!"
        )?;
        writeln!(self.output, "Queue size: {} elements\n", queue.len())?;

        writeln!(self.output, "Step 2: Dequeuing values to verify ordering...")?;
        writeln!(self.output, "================================================\n")?;
        writeln!(self.output, "Dequeued Values ({} per line):", VALUES_PER_LINE)?;
        writeln!(self.output, "------------------------------")?;
        let dequeued: Vec<T> = std::iter::from_fn(|| queue.pop_front()).collect();
        let count = report::write_values(&mut self.output, &dequeued, VALUES_PER_LINE)?;
        let ascending = report::verify_ascending(&dequeued);
        if !ascending {
            log::error!("queue drained out of order");
        }

        writeln!(self.output, "\n\nTotal dequeued: {} values", count)?;
        writeln!(
            self.output,
            "Order verified: {}",
            if ascending { "ASCENDING ✓" } else { "ERROR ✗" }
        )?;
        writeln!(
            self.output,
            "\n[VERIFICATION] All values dequeued in ascending order!"
        )?;
        writeln!(
            self.output,
            "The queue is now empty: {}",
            report::yes_no(queue.is_empty())
        )
    }

    fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "  {}", BANNER_RULE)?;
        writeln!(self.output, "|{:58}|", "")?;
        writeln!(self.output, "|         {:<49}|", "BINARY SEARCH TREE TO QUEUE CONVERTER")?;
        writeln!(self.output, "|         {:<49}|", "CS301 - Assignment 7: Queue Converter")?;
        writeln!(self.output, "|{:58}|", "")?;
        writeln!(self.output, "|{:58}|", "")?;
        writeln!(self.output, "  {}", BANNER_RULE)?;
        writeln!(self.output)
    }

    fn write_menu(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, " ----------------------------------------")?;
        writeln!(self.output, "|           MAIN MENU                    |")?;
        writeln!(self.output, "|----------------------------------------|")?;
        writeln!(self.output, "|  1. Load Data from File                |")?;
        writeln!(self.output, "|  2. Display BST Structure              |")?;
        writeln!(self.output, "|  3. Display BST Statistics             |")?;
        writeln!(self.output, "|  4. Convert BST to Queue (Inorder)     |")?;
        writeln!(self.output, "|  5. Exit Program                       |")?;
        writeln!(self.output, " ----------------------------------------")?;
        writeln!(self.output)
    }

    fn write_farewell(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", RULE)?;
        writeln!(self.output, "Thank you for using the BST Queue Converter!")?;
        writeln!(self.output, "Program terminated successfully.")?;
        writeln!(self.output, "{}", RULE)
    }
}
