use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const USAGE_TEXT: &str = r#"zcomp: generate zsh tab-completion scripts from a command-tree description

Usage:
  zcomp generate [<tree.json>] [--out <path>]
  zcomp candidates [<values.json>]
  zcomp help

Input:
  - `generate` reads a JSON application definition (name, display_name,
    commands) from the given file or stdin and writes a self-contained zsh
    completion script.
  - `candidates` reads a JSON array of {"value", "description"} pairs and
    writes them as `value:description` lines. This is the stream the
    generated __<ns>_onthefly helper expects from an executable answering a
    --completion-candidates request.
"#;

#[derive(Parser, Debug)]
#[command(name = "zcomp")]
#[command(disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
pub enum Cmd {
    /// Print usage
    Help,

    /// Generate a zsh completion script from a command-tree JSON file
    Generate {
        /// Command-tree description (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
        /// Write the script here instead of stdout
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },

    /// Render resolved completion candidates as value:description lines
    Candidates {
        /// Candidate list (reads stdin when omitted)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}
