use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::{scoring::StrategyChoice, search::SearchParams};

#[derive(Debug, Parser)]
#[command(
    name = "smartsuggest",
    about = "Search a local collection of code snippets"
)]
pub struct Cli {
    /// Override the XDG data directory
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Read snippets from this directory instead of <data-dir>/snippets
    #[arg(long, global = true)]
    pub snippets_dir: Option<PathBuf>,

    /// Scoring strategy for the linguistic layer
    #[arg(
        long,
        global = true,
        value_enum,
        env = "SMARTSUGGEST_STRATEGY",
        default_value_t = StrategyChoice::Auto
    )]
    pub strategy: StrategyChoice,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Rank snippets against a query
    Search(SearchArgs),
    /// List every snippet in corpus order
    List(ListArgs),
    /// Print the code of the snippet with the given title
    Get(GetArgs),
    /// Show where snippets are loaded from and how they are scored
    Status(StatusArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Search --

#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// The search query
    pub query: String,

    /// Number of results to return
    #[arg(short = 'n', long, default_value = "10")]
    pub count: usize,

    /// Return all matching results
    #[arg(long)]
    pub all: bool,

    /// Minimum score threshold
    #[arg(long, default_value = "0.0")]
    pub min_score: f64,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Print only the code of the best match
    #[arg(long, conflicts_with = "json")]
    pub code: bool,
}

impl SearchArgs {
    pub fn params(&self) -> SearchParams {
        SearchParams {
            query: self.query.clone(),
            count: self.count,
            all: self.all,
            min_score: self.min_score,
        }
    }
}

// -- List --

#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Get --

#[derive(Debug, Parser)]
pub struct GetArgs {
    /// Snippet title (case-insensitive)
    pub title: String,

    /// Output the whole record as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Status --

#[derive(Debug, Parser)]
pub struct StatusArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "smartsuggest",
            &mut std::io::stdout(),
        );
    }
}
