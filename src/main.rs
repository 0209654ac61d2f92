use balanced_trees::avl_tree::AvlTree;
use balanced_trees::bs_tree::BsTree;
use balanced_trees::pretty::PrettyOptions;
use balanced_trees::red_black_tree::RedBlackTree;
use balanced_trees::validate::Violation;
use log::{error, info, warn};
use rand::{Rng, SeedableRng, XorShiftRng};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::process;
use std::str::FromStr;
use structopt::StructOpt;

#[derive(Clone, Copy, Debug)]
enum Kind {
    Bst,
    Avl,
    RedBlack,
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bst" => Ok(Kind::Bst),
            "avl" => Ok(Kind::Avl),
            "rb" | "red-black" => Ok(Kind::RedBlack),
            _ => Err(format!("unknown tree kind `{}`, expected bst, avl or rb", s)),
        }
    }
}

/// Builds a tree from the command line and pretty-prints it.
#[derive(Clone, StructOpt)]
#[structopt(name = "balanced-trees")]
pub struct Opt {
    #[structopt(long = "kind", default_value = "avl")]
    kind: Kind,

    #[structopt(long = "insert", use_delimiter = true)]
    insert: Vec<i64>,

    #[structopt(long = "remove", use_delimiter = true)]
    remove: Vec<i64>,

    // random values in [0, 100) inserted after the explicit ones
    #[structopt(long = "random", default_value = "0")]
    random: usize,

    #[structopt(long = "seed", default_value = "1")]
    seed: u32,

    #[structopt(long = "level", default_value = "1")]
    level: i64,

    #[structopt(long = "indent", default_value = "0")]
    indent: i64,

    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: u8,
}

trait DemoTree {
    fn insert(&mut self, value: i64);
    fn remove(&mut self, value: &i64) -> bool;
    fn validate(&self) -> Result<(), Violation>;
    fn tree_height(&self) -> i32;
    fn render(&self, options: &PrettyOptions) -> String;
}

macro_rules! demo_tree_impls {
    ($($type_name:ident,)*) => {
        $(
            impl DemoTree for $type_name<i64> {
                fn insert(&mut self, value: i64) {
                    $type_name::insert(self, value)
                }

                fn remove(&mut self, value: &i64) -> bool {
                    $type_name::remove(self, value)
                }

                fn validate(&self) -> Result<(), Violation> {
                    $type_name::validate(self)
                }

                fn tree_height(&self) -> i32 {
                    $type_name::tree_height(self)
                }

                fn render(&self, options: &PrettyOptions) -> String {
                    $type_name::render(self, options)
                }
            }
        )*
    }
}

demo_tree_impls!(BsTree, AvlTree, RedBlackTree,);

fn run(opts: &Opt, tree: &mut dyn DemoTree) -> Result<(), Violation> {
    let mut rng: XorShiftRng = SeedableRng::from_seed([opts.seed, 1, 1, 1]);
    let mut values = opts.insert.clone();
    values.extend((0..opts.random).map(|_| rng.gen_range(0, 100)));

    for value in &values {
        tree.insert(*value);
        tree.validate()?;
    }
    info!(
        "{:?} tree: inserted {} values, height {}",
        opts.kind,
        values.len(),
        tree.tree_height(),
    );

    for value in &opts.remove {
        if !tree.remove(value) {
            warn!("{} is not in the tree", value);
        }
        tree.validate()?;
    }

    let options = PrettyOptions {
        level: opts.level,
        indent: opts.indent,
    };
    print!("{}", tree.render(&options));
    Ok(())
}

fn main() {
    let opts = Opt::from_args();

    let level = match opts.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(err) = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto) {
        eprintln!("failed to initialize logging: {}", err);
    }

    let mut tree: Box<dyn DemoTree> = match opts.kind {
        Kind::Bst => Box::new(BsTree::new()),
        Kind::Avl => Box::new(AvlTree::new()),
        Kind::RedBlack => Box::new(RedBlackTree::new()),
    };

    if let Err(err) = run(&opts, tree.as_mut()) {
        error!("tree invariant broken: {}", err);
        process::exit(1);
    }
}
