use clap::Parser;

/// Forumus Admin Gateway
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<String>,

    /// Service account key file path
    #[arg(long)]
    pub service_account: Option<String>,
}
