use clap::{ArgAction, Parser, ValueEnum};
use float_avl::collector::{CollectError, collect_keys, collect_keys_from_path};
use float_avl::preorder::write_preorder;
use float_avl::{Key, Tree, TreeOps};
use log::{info, warn};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Order {
    A,
    B,
}

#[derive(Parser)]
#[command(name = "float-avl")]
#[command(about = "Builds an AVL tree from numbers read one per line and prints it in preorder")]
struct Args {
    /// Sort order selector, only reported
    #[arg(value_enum)]
    order: Order,

    /// Read keys from this file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Verify the tree invariants before printing
    #[arg(long)]
    check: bool,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    info!("{:?} order selected", args.order);

    let keys = match read_keys(args.input.as_deref()) {
        Ok(keys) => keys,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let mut tree = Tree::new();
    for key in keys {
        info!("inserting {key}");
        tree.insert(key);
    }

    if args.check {
        if let Err(e) = tree.validate() {
            eprintln!("{e}");
            process::exit(1);
        }
        info!("{} keys, height {}, invariants hold", tree.len(), tree.height());
    }

    if let Err(e) = print_tree(&tree) {
        eprintln!("{e}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("logging disabled: {e}");
    }
}

fn read_keys(path: Option<&Path>) -> Result<Vec<Key>, CollectError> {
    match path {
        Some(path) => collect_keys_from_path(path),
        None => {
            let keys = collect_keys(io::stdin().lock())?;
            if keys.is_empty() {
                warn!("no keys on stdin");
            }
            Ok(keys)
        }
    }
}

fn print_tree(tree: &Tree) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Pre order traversal of the constructed AVL tree is")?;
    write_preorder(tree.root(), &mut out)?;
    out.flush()
}
