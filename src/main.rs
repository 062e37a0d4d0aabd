use anyhow::{Context, Result};
use cfunc::demo;
use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for line in demo::report() {
        writeln!(out, "{line}").context("failed to write to stdout")?;
    }
    Ok(())
}
