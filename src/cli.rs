use clap::Parser;

#[derive(Parser)]
#[command(name = "dockpulse")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_TIME"), ")"))]
#[command(about = "Docker container health report tool", long_about = None)]
pub struct Cli {
    /// Container names or IDs to check (default: all running containers)
    pub containers: Vec<String>,

    /// Health-check log lines shown for unhealthy containers
    #[arg(short, long, default_value_t = 5)]
    pub tail: usize,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
