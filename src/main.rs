use clap::Parser;
use log::{debug, info};
use std::error::Error;
use std::fs::File;
use std::io::prelude::*;
use std::path::{Path, PathBuf};
use std::process;
use wormcard::config::{Config, OutputFormat};
use wormcard::header::decode_headers;
use wormcard::render::{render_json, render_slots_json, SlotListing, TextReport};
use wormcard::CardDecoder;

/// Print the Worms team statistics stored on a memory card dump.
#[derive(Debug, Parser)]
#[command(name = "wormcard", version, about)]
struct Cli {
    /// Raw memory card image
    #[arg(value_name = "MCR_FILE")]
    path: PathBuf,

    /// Output representation (default: text on a terminal, JSON otherwise)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,

    /// List the slot headers instead of decoding the save
    #[arg(long)]
    slots: bool,

    /// TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // clap exits with usage and status 2 on bad arguments
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let config = Config::resolve(cli.config.as_deref())?;
    debug!("Effective config: {:?}", config);

    let format = cli.format.or(config.format).unwrap_or_else(|| {
        if atty::is(atty::Stream::Stdout) {
            OutputFormat::Text
        } else {
            OutputFormat::Json
        }
    });
    let pretty = config.pretty && !cli.compact;

    let card = read_card(&cli.path)?;
    info!("Read {} bytes from {}", card.len(), cli.path.display());

    if cli.slots {
        let headers = decode_headers(&card)?;
        match format {
            OutputFormat::Text => print!("{}", SlotListing(&headers)),
            OutputFormat::Json => println!("{}", render_slots_json(&headers, pretty)?),
        }
        return Ok(());
    }

    let decoded = CardDecoder::new().decode(&card)?;
    match format {
        OutputFormat::Text => print!(
            "{}",
            TextReport::new(&decoded).skip_empty_teams(config.skip_empty_teams)
        ),
        OutputFormat::Json => println!("{}", render_json(&decoded, pretty)?),
    }
    Ok(())
}

fn read_card(path: &Path) -> Result<Vec<u8>, String> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            return Err(match e.kind() {
                std::io::ErrorKind::NotFound => {
                    format!("memory card file not found: {}", path.display())
                }
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading {}", path.display())
                }
                _ => format!("cannot open '{}': {}", path.display(), e),
            })
        }
    };
    let mut card = Vec::new();
    file.read_to_end(&mut card)
        .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
    Ok(card)
}
