use anyhow::Context;
use clap::Parser;
use laptop_tiers::server::dto::RecommendRequest;
use laptop_tiers::utils::logger;
use laptop_tiers::{classify, Classification, LaptopSpec, TierError};
use std::io::Read;

#[derive(Parser)]
#[command(name = "recommend")]
#[command(about = "Print tiers and recommended activities for a laptop spec")]
struct Args {
    /// JSON spec file; reads stdin when omitted or "-"
    input: Option<String>,

    /// Print the JSON response instead of plain lines
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn read_input(input: Option<&str>) -> anyhow::Result<String> {
    match input {
        None | Some("-") => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read spec from stdin")?;
            Ok(buffer)
        }
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read spec file '{}'", path))
        }
    }
}

fn parse_spec(content: &str) -> Result<LaptopSpec, TierError> {
    let request: RecommendRequest = serde_json::from_str(content)?;
    request.into_spec()
}

fn print_plain(classification: &Classification) {
    println!("Processor tier: {}", classification.processor_tier);
    println!("GPU tier: {}", classification.gpu_tier);
    println!("Recommended activities:");
    for activity in &classification.activities {
        println!("  - {}", activity);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let content = read_input(args.input.as_deref())?;

    let spec = match parse_spec(&content) {
        Ok(spec) => spec,
        Err(e) => {
            tracing::error!("❌ Invalid spec: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let classification = classify(&spec);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&classification)?);
    } else {
        print_plain(&classification);
    }

    Ok(())
}
