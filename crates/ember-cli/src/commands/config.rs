//! Default config printing

use anyhow::{Context, Result};
use ember_particles::FireworksConfig;

pub fn run(output: Option<&str>) -> Result<()> {
    let text = FireworksConfig::default()
        .to_toml_string()
        .context("Failed to serialize default config")?;
    match output {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("Failed to write {}", path))?;
            println!("Wrote {}", path);
        }
        None => print!("{}", text),
    }
    Ok(())
}
