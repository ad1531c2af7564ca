use clap::Parser;

/// Dotfield: an interactive field of glowing dots that shy away from the
/// cursor or a tracked hand.
#[derive(Parser, Debug)]
#[command(name = "dotfield", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (e.g. debug, dotfield=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Theme override (light or dark).
    #[arg(long)]
    pub theme: Option<String>,

    /// Drive hand mode from a simulated camera and detector.
    #[arg(long)]
    pub simulate_hand: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
