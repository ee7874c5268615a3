use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "daydo")]
#[command(about = "A daily to-do list with per-day priority ordering", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a pending todo (defaults to today)
    Add {
        text: String,

        /// Target date as YYYY-MM-DD
        #[arg(short, long, conflicts_with = "offset")]
        date: Option<String>,

        /// Target date as a day offset from today, negative for the past
        #[arg(short, long, allow_hyphen_values = true)]
        offset: Option<i64>,
    },
    /// Mark a todo as done
    Done { id: u64 },
    /// Remove a todo
    #[command(alias = "remove")]
    Rm { id: u64 },
    /// Replace a todo's text
    Edit { id: u64, text: String },
    /// Move a pending todo to a new rank within its day (0 = top)
    Move { id: u64, rank: usize },
    /// Show the days around a focus date
    Show {
        /// Focus date as YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Days to show on each side of the focus date
        #[arg(short, long)]
        side: Option<usize>,
    },
}
