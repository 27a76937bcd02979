//! Wordgraph CLI — corpus-to-graph queries.
//!
//! Usage:
//!   wordgraph <corpus.txt> edges [--json]
//!   wordgraph <corpus.txt> bridge <word1> <word2>
//!   wordgraph <corpus.txt> augment <text>...
//!   wordgraph <corpus.txt> path <from> <to>
//!   wordgraph <corpus.txt> rank <word>
//!   wordgraph <corpus.txt> walk [--seed N] [--out FILE]

use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use wordgraph::{augment, page_rank, random_walk, BridgeQuery, GraphBuilder, PathQuery, WordGraph};

#[derive(Parser)]
#[command(
    name = "wordgraph",
    version,
    about = "Weighted word-adjacency graph engine"
)]
struct Cli {
    /// Path to the plain-text corpus file
    corpus: PathBuf,
    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dump the edge list (from, to, weight)
    Edges {
        /// Emit JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Find bridge words between two words
    Bridge {
        word1: String,
        word2: String,
    },
    /// Rewrite text by inserting random bridge words
    Augment {
        /// Input text (joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
        /// Seed for the random source (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Compute the weighted shortest path between two words
    Path {
        from: String,
        to: String,
    },
    /// Compute the PageRank score of a word
    Rank {
        word: String,
    },
    /// Perform a random walk over the graph
    Walk {
        /// Seed for the random source (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
        /// Also write the rendered walk to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn cmd_edges(graph: &WordGraph, json: bool) -> i32 {
    let edges = graph.edges();
    if json {
        match serde_json::to_string_pretty(&edges) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    } else {
        for edge in edges {
            println!("{} -> {} [w={}]", edge.from, edge.to, edge.weight);
        }
    }
    0
}

fn cmd_bridge(graph: &WordGraph, word1: &str, word2: &str) -> i32 {
    println!("{}", BridgeQuery::between(word1, word2).execute(graph));
    0
}

fn cmd_augment(graph: &WordGraph, text: &[String], seed: Option<u64>) -> i32 {
    let mut rng = rng_from(seed);
    println!("{}", augment(graph, &text.join(" "), &mut rng));
    0
}

fn cmd_path(graph: &WordGraph, from: &str, to: &str) -> i32 {
    println!("{}", PathQuery::between(from, to).execute(graph));
    0
}

fn cmd_rank(graph: &WordGraph, word: &str) -> i32 {
    println!("PageRank({})={:.6}", word, page_rank(graph, word));
    0
}

fn cmd_walk(graph: &WordGraph, seed: Option<u64>, out: Option<&PathBuf>) -> i32 {
    let mut rng = rng_from(seed);
    let rendered = random_walk(graph, &mut rng).to_string();
    println!("{}", rendered);
    if let Some(path) = out {
        if let Err(e) = std::fs::write(path, format!("{}\n", rendered)) {
            eprintln!("Error: cannot write '{}': {}", path.display(), e);
            return 1;
        }
    }
    0
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let graph = match GraphBuilder::from_path(&cli.corpus) {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let code = match cli.command {
        Commands::Edges { json } => cmd_edges(&graph, json),
        Commands::Bridge { word1, word2 } => cmd_bridge(&graph, &word1, &word2),
        Commands::Augment { text, seed } => cmd_augment(&graph, &text, seed),
        Commands::Path { from, to } => cmd_path(&graph, &from, &to),
        Commands::Rank { word } => cmd_rank(&graph, &word),
        Commands::Walk { seed, out } => cmd_walk(&graph, seed, out.as_ref()),
    };
    std::process::exit(code);
}
