//! `avl-menu`: line-oriented interactive driver.
//!
//! Provides the logic behind the binary entry point: a numbered menu read
//! from any [`BufRead`], output written to any [`Write`], and a scripted
//! demonstration. The driver only calls the tree's public operations; it
//! never influences tree semantics.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::avl::AvlTree;
use crate::observer::Observer;

/// Counted operations per session unless configured otherwise.
pub const DEFAULT_MAX_OPERATIONS: usize = 10;

/// Keys inserted by [`demo`], in order.
pub const DEMO_KEYS: [i64; 10] = [10, 20, 30, 40, 50, 25, 15, 5, 60, 70];

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Invalid input. Please enter a number between 1 and 8.")]
    InvalidChoice(String),
    #[error("Invalid input. Please enter a valid integer.")]
    InvalidKey(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

// ── Commands ──────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Insert,
    Delete,
    Search,
    InOrder,
    PreOrder,
    LevelOrder,
    Structure,
    Exit,
}

impl Command {
    /// Menu order; choice `n` is `ALL[n - 1]`.
    pub const ALL: [Command; 8] = [
        Command::Insert,
        Command::Delete,
        Command::Search,
        Command::InOrder,
        Command::PreOrder,
        Command::LevelOrder,
        Command::Structure,
        Command::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Command::Insert => "Insert a key",
            Command::Delete => "Delete a key",
            Command::Search => "Search for a key",
            Command::InOrder => "Print In-order Traversal",
            Command::PreOrder => "Print Pre-order Traversal",
            Command::LevelOrder => "Print Level-order Traversal",
            Command::Structure => "Print Tree Structure",
            Command::Exit => "Exit",
        }
    }

    /// Whether the command prompts for a key.
    pub fn takes_key(self) -> bool {
        matches!(self, Command::Insert | Command::Delete | Command::Search)
    }
}

impl FromStr for Command {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let choice = s.trim();
        match choice.parse::<usize>() {
            Ok(n @ 1..=8) => Ok(Command::ALL[n - 1]),
            _ => Err(MenuError::InvalidChoice(choice.to_string())),
        }
    }
}

/// Parses one integer key from a line of input.
pub fn parse_key(line: &str) -> Result<i64, MenuError> {
    let line = line.trim();
    line.parse()
        .map_err(|_| MenuError::InvalidKey(line.to_string()))
}

// ── Output ────────────────────────────────────────────────────────────────

fn write_keys<W: Write>(
    out: &mut W,
    title: &str,
    keys: impl Iterator<Item = String>,
) -> io::Result<()> {
    let keys: Vec<String> = keys.collect();
    if keys.is_empty() {
        writeln!(out, "{title}: Tree is empty")
    } else {
        writeln!(out, "{title}: {}", keys.join(" "))
    }
}

pub fn write_in_order<K: Display, O, W: Write>(tree: &AvlTree<K, O>, out: &mut W) -> io::Result<()> {
    write_keys(out, "In-order traversal", tree.in_order().map(|k| k.to_string()))
}

pub fn write_pre_order<K: Display, O, W: Write>(tree: &AvlTree<K, O>, out: &mut W) -> io::Result<()> {
    write_keys(out, "Pre-order traversal", tree.pre_order().map(|k| k.to_string()))
}

/// Breadth-first keys, each tagged with its height: `20(h=3) 10(h=2) ...`.
pub fn write_level_order<K: Display, O, W: Write>(
    tree: &AvlTree<K, O>,
    out: &mut W,
) -> io::Result<()> {
    write_keys(
        out,
        "Level-order traversal",
        tree.level_order()
            .map(|e| format!("{}(h={})", e.key, e.height)),
    )
}

pub fn write_structure<K: Display, O, W: Write>(tree: &AvlTree<K, O>, out: &mut W) -> io::Result<()> {
    writeln!(out, "Tree structure:")?;
    out.write_all(tree.render_structure().as_bytes())
}

/// In-order, level-order and structure, as printed after every mutation.
pub fn write_state<K: Display, O, W: Write>(tree: &AvlTree<K, O>, out: &mut W) -> io::Result<()> {
    write_in_order(tree, out)?;
    write_level_order(tree, out)?;
    write_structure(tree, out)
}

// ── Demo ──────────────────────────────────────────────────────────────────

/// Scripted demonstration: inserts [`DEMO_KEYS`], searches 25 and 100,
/// deletes 20 and 30, printing the tree state before and after.
pub fn demo<O, W>(tree: &mut AvlTree<i64, O>, out: &mut W) -> io::Result<()>
where
    O: Observer<i64>,
    W: Write,
{
    writeln!(out, "=== Demonstrating Initial AVL Tree Operations ===")?;
    for key in DEMO_KEYS {
        tree.insert(key);
    }

    writeln!(out, "\nInitial Tree State:")?;
    write_state(&*tree, out)?;

    for key in [25, 100] {
        write_search(tree, key, out)?;
    }

    for key in [20, 30] {
        tree.delete(&key);
    }

    writeln!(out, "\nFinal Tree State after Deletions:")?;
    write_state(&*tree, out)
}

fn write_search<O, W>(tree: &mut AvlTree<i64, O>, key: i64, out: &mut W) -> io::Result<()>
where
    O: Observer<i64>,
    W: Write,
{
    writeln!(out, "\nSearching for key {key} in AVL Tree")?;
    if tree.search(&key) {
        writeln!(out, "Key {key} found in the tree")
    } else {
        writeln!(out, "Key {key} not found in the tree")
    }
}

// ── Menu loop ─────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuConfig {
    /// Counted operations before the session ends. Exit and unparseable
    /// choices are not counted.
    pub max_operations: usize,
    /// Print the tree state after every insert and delete.
    pub echo_state: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            max_operations: DEFAULT_MAX_OPERATIONS,
            echo_state: true,
        }
    }
}

/// Interactive session over a borrowed tree.
pub struct Menu<'t, O, R, W> {
    tree: &'t mut AvlTree<i64, O>,
    input: R,
    output: W,
    config: MenuConfig,
}

impl<'t, O, R, W> Menu<'t, O, R, W>
where
    O: Observer<i64>,
    R: BufRead,
    W: Write,
{
    pub fn new(tree: &'t mut AvlTree<i64, O>, input: R, output: W, config: MenuConfig) -> Self {
        Self {
            tree,
            input,
            output,
            config,
        }
    }

    /// Runs until Exit, end of input, or the operation limit.
    ///
    /// Returns the number of counted operations. Invalid choices and keys are
    /// reported to the output and the session continues; only I/O failures
    /// end it with an error.
    pub fn run(&mut self) -> Result<usize, MenuError> {
        let max = self.config.max_operations;
        let mut count = 0;

        while count < max {
            self.write_menu(count + 1)?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output, "\nEnd of input. Exiting interactive menu.")?;
                break;
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    debug!("rejected menu choice {line:?}");
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };
            if command == Command::Exit {
                writeln!(self.output, "Exiting interactive menu.")?;
                break;
            }
            count += 1;
            debug!("menu operation {count}/{max}: {command:?}");

            if command.takes_key() {
                write!(self.output, "Enter an integer value: ")?;
                self.output.flush()?;
                let Some(line) = self.read_line()? else {
                    break;
                };
                match parse_key(&line) {
                    Ok(key) => self.execute_keyed(command, key)?,
                    Err(err) => writeln!(self.output, "{err}")?,
                }
            } else {
                self.execute_print(command)?;
            }

            if count >= max {
                writeln!(
                    self.output,
                    "Maximum operations reached. Exiting interactive menu."
                )?;
            }
        }

        self.output.flush()?;
        Ok(count)
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn write_menu(&mut self, operation: usize) -> io::Result<()> {
        writeln!(
            self.output,
            "\n=== AVL Tree Interactive Menu (Operation {operation}/{}) ===",
            self.config.max_operations
        )?;
        for (i, command) in Command::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, command.label())?;
        }
        write!(self.output, "Enter your choice (1-8): ")?;
        self.output.flush()
    }

    /// Next line without its terminator, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn execute_keyed(&mut self, command: Command, key: i64) -> io::Result<()> {
        match command {
            Command::Insert => {
                writeln!(self.output, "\nInserting key {key} into AVL Tree")?;
                if !self.tree.insert(key) {
                    writeln!(self.output, "Duplicate key {key} ignored")?;
                }
                if self.config.echo_state {
                    writeln!(self.output, "Insertion complete. Current tree state:")?;
                    write_state(&*self.tree, &mut self.output)?;
                }
            }
            Command::Delete => {
                writeln!(self.output, "\nDeleting key {key} from AVL Tree")?;
                if !self.tree.delete(&key) {
                    writeln!(self.output, "Key {key} not found in the tree")?;
                }
                if self.config.echo_state {
                    writeln!(self.output, "Deletion complete. Current tree state:")?;
                    write_state(&*self.tree, &mut self.output)?;
                }
            }
            Command::Search => write_search(&mut *self.tree, key, &mut self.output)?,
            _ => unreachable!("{command:?} takes no key"),
        }
        Ok(())
    }

    fn execute_print(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::InOrder => write_in_order(&*self.tree, &mut self.output),
            Command::PreOrder => write_pre_order(&*self.tree, &mut self.output),
            Command::LevelOrder => write_level_order(&*self.tree, &mut self.output),
            Command::Structure => write_structure(&*self.tree, &mut self.output),
            _ => unreachable!("{command:?} is not a print command"),
        }
    }
}
