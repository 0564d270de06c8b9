//! The `yamlpick` command: argument parsing and the lookup run.
//!
//! `run` writes to caller-supplied streams and returns the exit status, so
//! the binary is a thin wrapper around it.

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::debug;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

use crate::config::Config;
use crate::document::{render, Format, Value};
use crate::file::loader::{load_file, load_from_stdin};
use crate::path::{format_path, parse_path};
use crate::pick::{KeyedContainer, Strategy};

/// yamlpick - read a value out of a nested YAML or JSON document
#[derive(Debug, Parser)]
#[command(name = "yamlpick")]
#[command(version)]
#[command(about = "Look up a value in a YAML or JSON document by key path", long_about = None)]
pub struct Cli {
    /// Path expression, e.g. `server.:tls.cert` or `$['a.b'][42]`
    pub path: String,

    /// Document to read (omit to read from stdin)
    pub file: Option<PathBuf>,

    /// Lookup strategy (default from config: indifferent)
    #[arg(short, long, value_enum)]
    pub strategy: Option<Strategy>,

    /// Output format for the found value
    #[arg(short, long, value_enum)]
    pub output: Option<Format>,

    /// Input format (default: from the file extension, YAML for stdin)
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Config file to use instead of ~/.config/yamlpick/config.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Look the path up in every document of a YAML stream
    #[arg(short, long)]
    pub all_documents: bool,

    /// Log lookup progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Loads the config file and applies command-line overrides on top.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load(),
        };
        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        if self.all_documents {
            config.all_documents = true;
        }
        Ok(config)
    }

    fn load_documents(&self) -> Result<Vec<Value>> {
        let documents = match &self.file {
            Some(path) => load_file(path, self.format)?,
            None => {
                if io::stdin().is_terminal() {
                    bail!("No input: pass a FILE or pipe a document on stdin");
                }
                load_from_stdin(self.format.unwrap_or_default())
                    .context("Failed to load document from stdin")?
            }
        };

        if documents.is_empty() {
            bail!("Input contains no documents");
        }
        Ok(documents)
    }
}

/// Runs one lookup and returns the process exit status.
///
/// Found values go to `out`. A miss writes `not found: <path>` to `err` and
/// returns the configured `missing_exit_code`.
///
/// # Errors
///
/// Fails on unreadable input, an invalid path expression, or a lookup error.
/// In single-document mode a root that isn't a mapping is a lookup error; with
/// `all_documents` such documents are skipped as misses.
pub fn run<W: Write, E: Write>(cli: &Cli, out: &mut W, err: &mut E) -> Result<i32> {
    let config = cli.resolve_config()?;
    let keys = parse_path(&cli.path)
        .with_context(|| format!("Invalid path expression '{}'", cli.path))?;
    let documents = cli.load_documents()?;
    let searched = if config.all_documents {
        &documents[..]
    } else {
        &documents[..1]
    };

    let mut found = false;
    for (index, document) in searched.iter().enumerate() {
        if config.all_documents && !document.is_container() {
            debug!("skipping document {}: {} root", index, document.kind());
            continue;
        }
        let lookup = config
            .strategy
            .lookup(document, &keys)
            .with_context(|| format!("Cannot look up {}", format_path(&keys)))?;
        if let Some(value) = lookup {
            out.write_all(render(value, config.output)?.as_bytes())?;
            found = true;
        }
    }
    out.flush()?;

    if found {
        Ok(0)
    } else {
        writeln!(err, "not found: {}", format_path(&keys))?;
        Ok(config.missing_exit_code)
    }
}
