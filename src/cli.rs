use clap::Parser;

/// YeetFile HTTP Server
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about = "YeetFile HTTP Server", long_about = None)]
pub struct Cli {
    /// Port to serve on (default: 8000)
    #[arg(long)]
    pub port: Option<u16>,
}
