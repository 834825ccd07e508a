use anyhow::{Context, Result};
use clap::Parser;
use gostruct_infer::{Generator, Options, DEFAULT_ROOT_NAME};
use std::fs::File;
use std::io::{stdin, BufReader, Read};
use tracing_subscriber::EnvFilter;

/// Generates Go struct declarations from an example JSON document
#[derive(Parser, Debug)]
#[command(name = "gostruct-infer", version)]
struct Cli {
    /// Where to read the JSON document from. Dash (hyphen) indicates stdin
    #[arg(default_value = "-")]
    input: String,

    /// Name of the top-level Go type
    #[arg(long, short, default_value = DEFAULT_ROOT_NAME)]
    name: String,

    /// Tag every field with omitempty, not just the ones missing from some objects
    #[arg(long)]
    omitempty: bool,

    /// Add an example tag with the first value seen for each scalar field
    #[arg(long)]
    examples: bool,

    /// Accepted for compatibility; nested structs are always declared separately
    #[arg(long)]
    flatten: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let mut reader = BufReader::new(match cli.input.as_str() {
        "-" => Box::new(stdin()) as Box<dyn Read>,
        path => Box::new(File::open(path).with_context(|| format!("failed to open {}", path))?)
            as Box<dyn Read>,
    });

    let mut json = String::new();
    reader
        .read_to_string(&mut json)
        .with_context(|| format!("failed to read {}", cli.input))?;

    let options = Options::new()
        .with_all_omitempty(cli.omitempty)
        .with_examples(cli.examples)
        .with_flatten(cli.flatten);

    let source = Generator::new(options).generate(&json, &cli.name)?;
    print!("{}", source);

    Ok(())
}
