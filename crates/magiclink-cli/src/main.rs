use anyhow::{Context, Result, bail};
use magiclink_config::Config;
use magiclink_engine::{LinkConfig, MagicLinkExtension, Markdown};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::{env, process};

const USAGE: &str = "Usage: magiclink [--hide-protocol] [--config PATH] [FILE]";

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    hide_protocol: bool,
    config: Option<PathBuf>,
    /// `None` reads stdin.
    input: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Render(Args),
    Help,
}

fn parse_args<I, S>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut parsed = Args::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--hide-protocol" => parsed.hide_protocol = true,
            "--config" => match args.next() {
                Some(path) => parsed.config = Some(PathBuf::from(path)),
                None => bail!("--config needs a path"),
            },
            "-" => {}
            flag if flag.starts_with('-') && flag.len() > 1 => bail!("unknown option `{flag}`"),
            path => {
                if parsed.input.is_some() {
                    bail!("only one input file may be given");
                }
                parsed.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Command::Render(parsed))
}

/// Config file first, then flags on top.
fn resolve_config(args: &Args) -> Result<LinkConfig> {
    let from_file = match &args.config {
        Some(path) => Some(
            Config::load_from_path(path)?
                .with_context(|| format!("config file '{}' not found", path.display()))?,
        ),
        None => Config::load()?,
    };

    let mut config = from_file.map(|c| c.magiclink).unwrap_or_default();
    if args.hide_protocol {
        config.hide_protocol = true;
    }
    Ok(config)
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = resolve_config(&args)?;
    log::debug!("rendering with {config:?}");

    let markdown = Markdown::new().with_extension(&MagicLinkExtension::new(config))?;
    let source = read_input(args.input.as_ref())?;
    let html = markdown.render(&source);

    let mut stdout = io::stdout().lock();
    stdout.write_all(html.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = match parse_args(env::args().skip(1)) {
        Ok(Command::Render(args)) => args,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{USAGE}");
            process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
