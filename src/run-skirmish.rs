mod skirmish;

use std::{
    fs::File,
    io::{self, BufRead, BufReader},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use skirmish::{command::Command, config::{Args, Scenario}, Skirmish};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let scenario = Scenario::from_args(&args)?;
    info!("{}x{} grid, start {:?}, {} PM", scenario.width, scenario.height, scenario.start, scenario.movement_points);

    let input: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening script {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut skirmish = Skirmish::new(&scenario);
    for (n, line) in input.lines().enumerate() {
        let line = line.context("reading script")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') { continue }

        match line.parse::<Command>() {
            Ok(command) => if let Some(out) = skirmish.apply(command) { print!("{out}") },
            Err(err) => warn!("line {}: {}", n + 1, err),
        }
    }
    skirmish.finish();
    Ok(())
}
