use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::model::AppDefinition;
use crate::ui;
use crate::util;
use crate::zsh::ZshCompletionGenerator;

pub fn cmd_generate(log: &ui::Logger, file: Option<&Path>, out: Option<&Path>) -> Result<i32> {
    let raw = match util::read_input(file) {
        Ok(b) => b,
        Err(e) => {
            log.errorf(&format!("{e:#}"));
            return Ok(1);
        }
    };

    let app: AppDefinition = match serde_json::from_slice(&raw) {
        Ok(a) => a,
        Err(e) => {
            log.errorf(&format!("input is not a valid command-tree definition: {e}"));
            return Ok(1);
        }
    };

    let generator = ZshCompletionGenerator::new(app.display_name(), &app.name);
    let mut script = Vec::new();
    generator.generate(&mut script, &app.commands)?;

    match out {
        Some(p) => {
            fs::write(p, &script).with_context(|| format!("write {}", p.display()))?;
            log.infof(&format!("wrote {}", p.display()));
        }
        None => io::stdout().write_all(&script)?,
    }
    Ok(0)
}
