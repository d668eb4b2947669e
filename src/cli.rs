use std::time::Duration;

use anyhow::{bail, Context};
use eighttile::{SolverConfig, VisitedCheck};

const DEFAULT_DELAY_MS: u64 = 1000;

#[derive(Debug, PartialEq)]
pub struct Args {
    pub path: String,
    pub delay: Duration,
    pub config: SolverConfig,
    /// Print frames one after another instead of redrawing in place.
    pub plain: bool,
}

/// Parses the command line, program name first.
pub fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Args> {
    let mut args = args.into_iter();
    let program = args.next().unwrap_or_else(|| "eighttile".to_string());
    let usage = format!(
        "Incorrect usage, try e.g. {} 1.8tile [--delay <ms>] [--hashed] [--plain]",
        program
    );

    let mut path = None;
    let mut delay = Duration::from_millis(DEFAULT_DELAY_MS);
    let mut config = SolverConfig::default();
    let mut plain = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--hashed" => config.visited = VisitedCheck::Hashed,
            "--plain" => plain = true,
            "--delay" => {
                let ms = args.next().context(usage.clone())?;
                let ms = ms
                    .parse()
                    .with_context(|| format!("Invalid delay {:?}", ms))?;
                delay = Duration::from_millis(ms);
            }
            _ if path.is_none() && !arg.starts_with("--") => path = Some(arg),
            _ => bail!(usage),
        }
    }

    Ok(Args {
        path: path.context(usage)?,
        delay,
        config,
        plain,
    })
}
