use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "flight-optimizer",
    version,
    about = "Find the destination with the cheapest flight per kilometer"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the form page and the JSON API.
    Serve {
        #[arg(long, help = "Listen port (defaults to PORT or 8000)")]
        port: Option<u16>,
    },
    /// Rank destinations once and print the winner.
    Best {
        #[arg(long = "from")]
        from: String,
        #[arg(long = "to", num_args = 1.., required = true)]
        to: Vec<String>,
        #[arg(long, help = "Print the full result as JSON")]
        json: bool,
    },
}
