//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};
use inkbound_core::{ArtStyle, ImageMode};
use std::path::PathBuf;

/// Inkbound - interactive AI-driven branching comic stories
#[derive(Parser, Debug)]
#[command(name = "inkbound")]
#[command(about = "Interactive AI-driven branching comic stories", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive story from a seed prompt
    Play(PlayArgs),

    /// Check that the text provider is reachable and responding
    Doctor,
}

/// Arguments for the play command
#[derive(Args, Debug)]
pub struct PlayArgs {
    /// The story seed (at least 10 characters)
    #[arg(long)]
    pub seed: String,

    /// Art style for illustrations
    #[arg(long, default_value = "western_comic")]
    pub style: ArtStyle,

    /// Illustration mode: one panel per scene, or a full comic page
    #[arg(long, default_value = "panel")]
    pub mode: ImageMode,

    /// Skip illustration entirely
    #[arg(long)]
    pub no_images: bool,

    /// Override the scene count at which the story ends
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Directory for generated images
    #[arg(long, default_value = "generated_images")]
    pub images_dir: PathBuf,

    /// Write the finished story and its comic projection as JSON
    #[arg(long)]
    pub out: Option<PathBuf>,
}
