//! `avl-menu`: interactive AVL tree session.
//!
//! Usage:
//!   avl-menu [--max-operations N] [--no-demo] [--log-level LEVEL]
//!
//! Runs the scripted demonstration, then reads menu choices from stdin.
//! Structural events (rotations, deletions, ...) are logged to stderr.

use std::io::{self, Write};

use avl_tree::menu::{demo, Menu, MenuConfig, DEFAULT_MAX_OPERATIONS};
use avl_tree::{AvlTree, LogObserver};
use clap::{Parser, ValueEnum};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Interactive AVL tree session
#[derive(Parser, Debug)]
#[command(name = "avl-menu")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Counted operations before the session ends
    #[arg(long, default_value_t = DEFAULT_MAX_OPERATIONS)]
    max_operations: usize,

    /// Skip the scripted demonstration
    #[arg(long)]
    no_demo: bool,

    /// Do not print the tree after each insert and delete
    #[arg(long)]
    quiet: bool,

    /// Structural event log level
    #[arg(long, env = "AVL_LOG", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = TermLogger::init(
        cli.log_level.into(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("{e}");
    }

    let mut tree = AvlTree::with_observer(LogObserver);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.no_demo {
        if let Err(e) = demo(&mut tree, &mut out) {
            eprintln!("{e}");
            std::process::exit(1);
        }
        let _ = writeln!(
            out,
            "\n=== Starting Interactive Mode (Limited to {} Operations) ===",
            cli.max_operations
        );
    }

    let config = MenuConfig {
        max_operations: cli.max_operations,
        echo_state: !cli.quiet,
    };
    let stdin = io::stdin();
    let mut menu = Menu::new(&mut tree, stdin.lock(), out, config);
    if let Err(e) = menu.run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
