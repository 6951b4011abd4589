//! Command-line surface of the `holdem` binary.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "holdem",
    version,
    about = "Texas Hold'em against computer opponents"
)]
pub struct HoldemCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive game until you cash out, go bankrupt or clear the table
    Play {
        /// Number of computer opponents (1-9)
        #[arg(long)]
        opponents: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Decks in the shoe
        #[arg(long)]
        decks: Option<usize>,
        /// Skip the name prompt
        #[arg(long)]
        name: Option<String>,
    },
    /// Run an all-computer table and check that no chips appear or vanish
    Sim {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: u32,
        #[arg(long)]
        opponents: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
        /// Write one JSON record per round to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Score 2 to 7 cards, e.g. `holdem score AS KS QS JS TS`
    Score {
        #[arg(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}
