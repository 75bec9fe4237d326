use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

use yamledit::config::Config;
use yamledit::file::loader::{load_document, load_document_from_stdin};
use yamledit::file::saver::save_document;

/// yamledit - read and update single values in YAML documents
#[derive(Parser)]
#[command(name = "yamledit")]
#[command(version)]
#[command(about = "Read and update single values in YAML documents by dot-notation path", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the value at a dot-notation path, re-encoded as YAML
    Read {
        /// YAML file to read ("-" for stdin)
        file: String,
        /// Dot-notation path to the value (e.g. person.name)
        path: String,
        /// Write output to this file instead of stdout
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Replace the value at a dot-notation path and print the whole document
    Update {
        /// YAML file to update ("-" for stdin)
        file: String,
        /// Dot-notation path to the value (e.g. person.age)
        path: String,
        /// New value, as a YAML literal (e.g. 35, true, "some text")
        value: String,
        /// Write output to this file instead of stdout
        #[arg(short, long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Command::Read { file, path, out } => {
            let text = load_input(&file)?;
            let value: serde_yaml::Value = yamledit::read(&text, &path)
                .with_context(|| format!("Failed to read value at {}", path))?;
            let rendered =
                serde_yaml::to_string(&value).context("Failed to render value as YAML")?;
            emit(&rendered, out.as_deref(), &config)
        }
        Command::Update {
            file,
            path,
            value,
            out,
        } => {
            let text = load_input(&file)?;
            // Parse the new value as a YAML literal so numbers, booleans,
            // and nested structures come through typed.
            let parsed: serde_yaml::Value = serde_yaml::from_str(&value)
                .with_context(|| format!("New value {:?} is not valid YAML", value))?;
            let updated = yamledit::update(&text, &path, &parsed)
                .with_context(|| format!("Failed to update value at {}", path))?;
            emit(&updated, out.as_deref(), &config)
        }
    }
}

fn load_input(file: &str) -> Result<String> {
    if file == "-" {
        load_document_from_stdin()
    } else {
        load_document(file)
    }
}

fn emit(data: &str, out: Option<&str>, config: &Config) -> Result<()> {
    match out {
        Some(path) => save_document(path, data, config),
        None => {
            print!("{}", data);
            std::io::stdout().flush().context("Failed to flush stdout")?;
            Ok(())
        }
    }
}
