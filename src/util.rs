use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

pub fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(p) => fs::read(p).with_context(|| format!("read {}", p.display())),
        None => {
            let mut b = Vec::new();
            std::io::stdin().read_to_end(&mut b).context("read stdin")?;
            Ok(b)
        }
    }
}
