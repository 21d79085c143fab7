use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wine_colours::analysis::AnalysisResponse;
use wine_colours::config::load_or_default;
use wine_colours::render::encode_png;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse()?;
    let mut config = load_or_default(args.config.as_deref())?;
    if let Some(seed) = args.seed {
        config.render.seed = seed;
    }
    if let Some(size) = args.size {
        config.render.size = size;
    }
    let options = config.render.to_options();

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read analysis input {}", args.input.display()))?;
    let response = AnalysisResponse::from_json(&text)
        .with_context(|| format!("Failed to parse analysis input {}", args.input.display()))?;
    let profile = response.profile();
    info!(
        wine = response.wine_name.as_deref().unwrap_or("unnamed"),
        wine_type = profile.wine_type.label(),
        fingerprint = %profile.fingerprint(),
        "normalized profile"
    );

    let image = options.render(&profile);
    let bytes = encode_png(&image)?;
    let output = args
        .output
        .unwrap_or_else(|| args.input.with_extension("png"));
    fs::write(&output, bytes)
        .with_context(|| format!("Failed to write diagram {}", output.display()))?;
    info!(
        path = %output.display(),
        width = image.width(),
        height = image.height(),
        "wrote diagram"
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&profile).context("Failed to serialize profile")?
    );
    Ok(())
}

struct CliArgs {
    input: PathBuf,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
    seed: Option<u64>,
    size: Option<u32>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut positional = Vec::new();
        let mut config = None;
        let mut seed = None;
        let mut size = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let value = args.next().context("Expected a path after --config")?;
                    config = Some(PathBuf::from(value));
                }
                "--seed" => {
                    let value = args.next().context("Expected a number after --seed")?;
                    seed = Some(
                        value
                            .parse()
                            .with_context(|| format!("Invalid --seed value '{value}'"))?,
                    );
                }
                "--size" => {
                    let value = args.next().context("Expected a number after --size")?;
                    size = Some(
                        value
                            .parse()
                            .with_context(|| format!("Invalid --size value '{value}'"))?,
                    );
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other if other.starts_with("--") => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
                _ => positional.push(PathBuf::from(arg)),
            }
        }
        let mut positional = positional.into_iter();
        let input = positional
            .next()
            .context("Missing input file. Run with --help for usage instructions.")?;
        let output = positional.next();
        if let Some(extra) = positional.next() {
            return Err(anyhow!("Unexpected argument '{}'", extra.display()));
        }
        Ok(Self {
            input,
            output,
            config,
            seed,
            size,
        })
    }
}

fn print_usage() {
    println!("render_wine");
    println!("Normalizes a wine analysis response and renders its ring diagram as PNG.");
    println!();
    println!("Usage: render_wine <input.json> [output.png] [--config path] [--seed N] [--size N]");
    println!("  --config   TOML config (defaults to the per-user config file)");
    println!("  --seed     seed for bubble and mineral placement");
    println!("  --size     diagram edge length in pixels");
}
