use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod candidates;
mod cli;
mod cmd;
mod model;
mod ui;
mod util;
mod zsh;

use cli::{Cli, Cmd, USAGE_TEXT};
use cmd::{cmd_candidates, cmd_generate};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("[zcomp] ERROR: {e}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<i32> {
    let log = ui::Logger;
    let cli = Cli::parse();

    let Some(cmd) = cli.cmd else {
        eprintln!("{USAGE_TEXT}");
        return Ok(2);
    };

    match cmd {
        Cmd::Help => {
            print!("{USAGE_TEXT}");
            Ok(0)
        }

        Cmd::Generate { file, out } => cmd_generate(&log, file.as_deref(), out.as_deref()),

        Cmd::Candidates { file } => cmd_candidates(&log, file.as_deref()),
    }
}
