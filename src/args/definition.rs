//! Command-line argument definition.

use clap::Parser;

/// pokesearch - typeahead Pokémon reference in the terminal
#[derive(Parser, Debug)]
#[command(name = "pokesearch")]
#[command(version)]
#[command(about = "Typeahead Pokémon reference: search Pokémon, routes, items, abilities, natures and TMs", long_about = None)]
pub struct Args {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print suggestions for QUERY and exit instead of starting the TUI
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Print the detail record for TYPE and ID (e.g. `--details pokemon 25`) and exit
    #[arg(short, long, num_args = 2, value_names = ["TYPE", "ID"])]
    pub details: Option<Vec<String>>,

    /// Emit JSON instead of text (with --search or --details)
    #[arg(long)]
    pub json: bool,
}
