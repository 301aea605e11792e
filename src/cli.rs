use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "luckydraw", version, about = "Lucky draw wheel for the terminal")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Names file, one name per line ('-' reads stdin)"
    )]
    pub names: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Skip the message service and use the fallback message"
    )]
    pub offline: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Spin the wheel and announce a winner.
    Spin {
        #[arg(long, help = "Seed for a reproducible draw")]
        seed: Option<u64>,
        #[arg(long, default_value_t = false, help = "Jump straight to the result")]
        no_animate: bool,
        #[arg(long, help = "Milliseconds between frames")]
        frame_ms: Option<u64>,
    },
    Names {
        #[command(subcommand)]
        command: NamesCommands,
    },
    History {
        #[command(subcommand)]
        command: HistoryCommands,
    },
    /// Show the wheel layout at the current rotation.
    Wheel,
    /// Generate a congratulatory message for a name.
    Message { name: String },
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum NamesCommands {
    List,
    Add {
        #[arg(required = true, value_name = "NAME")]
        entries: Vec<String>,
    },
    Dedupe,
}

#[derive(Subcommand, Debug)]
pub enum HistoryCommands {
    List {
        #[arg(long)]
        limit: Option<usize>,
    },
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    Show,
}
