// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "quadview")]
#[command(about = "WebGPU textured quad viewer", long_about = None)]
pub struct Cli {
    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Open a borderless fullscreen window on the current monitor
    #[arg(long, default_value = "false")]
    pub fullscreen: bool,

    /// Enable debug-level diagnostics output
    #[arg(long, default_value = "false")]
    pub debug: bool,

    /// Path to the sprite sheet to map onto the quad
    #[arg(long, default_value = "assets/bird64.png")]
    pub texture: PathBuf,
}
