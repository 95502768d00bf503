use anyhow::Result;
use std::io;
use std::path::Path;

use crate::candidates::render_candidates;
use crate::model::CandidateValue;
use crate::ui;
use crate::util;

pub fn cmd_candidates(log: &ui::Logger, file: Option<&Path>) -> Result<i32> {
    let raw = match util::read_input(file) {
        Ok(b) => b,
        Err(e) => {
            log.errorf(&format!("{e:#}"));
            return Ok(1);
        }
    };

    let values: Vec<CandidateValue> = match serde_json::from_slice(&raw) {
        Ok(v) => v,
        Err(e) => {
            log.errorf(&format!("input is not a valid candidate list: {e}"));
            return Ok(1);
        }
    };

    let stdout = io::stdout();
    render_candidates(&mut stdout.lock(), &values)?;
    Ok(0)
}
