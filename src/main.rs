use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use play_a_show::config::Config;
use play_a_show::{catalog, menu};

#[derive(Parser)]
#[command(name = "play-a-show")]
#[command(about = "Pick songs to play from a rhythm-game library")]
struct Args {
    /// Keep only songs that chart this instrument
    #[arg(long = "instrument_filter")]
    instrument_filter: Option<String>,

    /// Config file holding the catalog path
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let json_file_path = match Config::load(&args.config)? {
        Some(config) => config.paths.json_file_path,
        None => {
            writeln!(out, "Configuration file not found. Creating a new one.")?;
            write!(out, "Enter the path for the JSON file: ")?;
            out.flush()?;
            let mut line = String::new();
            input.read_line(&mut line)?;
            let path = line.trim().to_string();
            if path.is_empty() {
                bail!("no catalog path entered");
            }
            Config::new(path.clone())
                .save(&args.config)
                .with_context(|| format!("writing {}", args.config.display()))?;
            path
        }
    };

    let catalog = catalog::load(&json_file_path, args.instrument_filter.as_deref())
        .with_context(|| format!("loading catalog from {}", json_file_path))?;

    if catalog.is_empty() {
        bail!("no songs loaded from {}", json_file_path);
    }

    menu::run(&catalog, &mut rand::thread_rng(), input, &mut out)
}
