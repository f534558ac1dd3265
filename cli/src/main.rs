//! OBI command line interface
//!
//! Converts between hex-encoded OBI bytes and JSON through a schema string.

mod commands;

use clap::{Parser, Subcommand};
use obi_core::constants::DEFAULT_MAX_DEPTH;
use obi_core::DecodeOptions;
use tracing_subscriber::EnvFilter;

/// OBI codec tool
#[derive(Parser, Debug)]
#[command(name = "obi")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Maximum shape nesting accepted from schema text
    #[arg(long, env = "OBI_MAX_DEPTH", default_value_t = DEFAULT_MAX_DEPTH, global = true)]
    pub max_depth: usize,

    /// Accept input with unread bytes after the value
    #[arg(long, global = true)]
    pub allow_trailing: bool,

    /// Log at debug level regardless of RUST_LOG
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode hex input and print it as JSON
    Decode {
        /// Schema text, e.g. {symbol:string,px:u64}
        #[arg(short, long)]
        schema: String,

        /// Encoded value as hex (optional 0x prefix)
        hex: String,
    },

    /// Encode a JSON value and print it as hex
    Encode {
        #[arg(short, long)]
        schema: String,

        /// Value as JSON
        json: String,
    },

    /// Print the parsed shape, its canonical text and fixed size
    Shape {
        #[arg(short, long)]
        schema: String,
    },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let opts = DecodeOptions::default()
        .with_max_depth(cli.max_depth)
        .with_trailing(cli.allow_trailing);

    match cli.command {
        Commands::Decode { schema, hex } => commands::decode(&schema, &hex, &opts),
        Commands::Encode { schema, json } => commands::encode(&schema, &json, &opts),
        Commands::Shape { schema } => commands::shape(&schema, &opts),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "obi", "decode", "--schema", "u8", "7b", "--allow-trailing", "--max-depth", "8",
        ])
        .unwrap();
        assert!(cli.allow_trailing);
        assert_eq!(cli.max_depth, 8);
        assert!(matches!(cli.command, Commands::Decode { ref hex, .. } if hex == "7b"));
    }

    #[test]
    fn run_dispatches_to_command() {
        let cli = Cli::try_parse_from(["obi", "encode", "-s", "{a:u8,b:string}", r#"{"a":1,"b":"x"}"#])
            .unwrap();
        assert_eq!(run(cli).unwrap(), "0x010100000078");
    }
}
