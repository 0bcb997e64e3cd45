use clap::{ArgAction, Parser, ValueEnum};
use float_avl::{Key, Tree, TreeOps};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::time::Instant;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KeyOrder {
    Ascending,
    Descending,
    Random,
}

#[derive(Parser)]
#[command(name = "tree-benchmark")]
#[command(about = "An AVL tree insertion benchmark")]
struct Args {
    #[arg(long, default_value = "1000000")]
    size: usize,

    #[arg(long, value_enum, default_value = "random")]
    order: KeyOrder,

    #[arg(long, default_value = "42")]
    seed: u64,

    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn keys(args: &Args) -> Vec<Key> {
    let size = args.size;
    let values: Vec<f64> = match args.order {
        KeyOrder::Ascending => (0..size).map(|i| i as f64).collect(),
        KeyOrder::Descending => (0..size).rev().map(|i| i as f64).collect(),
        KeyOrder::Random => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
            (0..size).map(|_| rng.random::<f64>() * size as f64).collect()
        }
    };
    values
        .into_iter()
        .map(|value| Key::new(value).expect("generated keys are never NaN"))
        .collect()
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn main() {
    let args = Args::parse();
    if let Err(e) = TermLogger::init(log_level(args.verbose), Config::default(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("logging disabled: {e}");
    }
    let keys = keys(&args);
    debug!("generated {} {:?} keys with seed {}", keys.len(), args.order, args.seed);

    println!(
        "Running with {:?} keys and {} node count",
        args.order, args.size
    );

    let mut tree = Tree::new();
    let start = Instant::now();
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(tree.len(), i);
        tree.insert(*key);
    }
    let inserted = Instant::now();
    for key in keys.iter() {
        assert!(tree.contains(key));
    }
    let checked_contains = Instant::now();
    if let Err(e) = tree.validate() {
        panic!("Tree is broken after inserts: {e}");
    }
    info!("invariants hold for {} keys", tree.len());

    let bound = 1.44 * ((args.size + 2) as f64).log2();
    println!(
        "Inserts took {} seconds",
        inserted.saturating_duration_since(start).as_secs_f32()
    );
    println!(
        "Checking contains took {} seconds",
        checked_contains
            .saturating_duration_since(inserted)
            .as_secs_f32()
    );
    println!("Height {} (bound {:.2})", tree.height(), bound);
}
