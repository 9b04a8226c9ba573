//! Command-line and environment configuration.
//!
//! Every option can also be supplied through a `ROUTEDOC_*` environment
//! variable; `main` loads a `.env` file first when one is present.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::logic::paths::ConflictPolicy;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";

/// Header fields and build policy applied to a `DocumentBuilder`.
/// `None` leaves the builder default in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocSettings {
    pub title: Option<String>,
    pub description: Option<String>,
    pub app_version: Option<String>,
    pub conflict_policy: ConflictPolicy,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Assemble an OpenAPI-style document from controller metadata")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the document to stdout or a file.
    Generate(GenerateArgs),
    /// Serve the document over HTTP under /api-docs.
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct DocArgs {
    /// Controller manifest (.json, .yaml or .yml).
    #[arg(short, long, env = "ROUTEDOC_MANIFEST")]
    pub manifest: PathBuf,

    /// Document title.
    #[arg(long, env = "ROUTEDOC_TITLE")]
    pub title: Option<String>,

    /// Document description.
    #[arg(long, env = "ROUTEDOC_DESCRIPTION")]
    pub description: Option<String>,

    /// Application version advertised in `info.version`.
    #[arg(long, env = "ROUTEDOC_APP_VERSION")]
    pub app_version: Option<String>,

    /// Fail when two routes declare the same path and method.
    #[arg(long, env = "ROUTEDOC_STRICT")]
    pub strict: bool,
}

impl DocArgs {
    pub fn settings(&self) -> DocSettings {
        DocSettings {
            title: self.title.clone(),
            description: self.description.clone(),
            app_version: self.app_version.clone(),
            conflict_policy: if self.strict {
                ConflictPolicy::Reject
            } else {
                ConflictPolicy::Overwrite
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub doc: DocArgs,

    /// Output file; stdout when omitted.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json, env = "ROUTEDOC_FORMAT")]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub doc: DocArgs,

    /// Address the HTTP server binds to.
    #[arg(short, long, default_value = DEFAULT_BIND, env = "ROUTEDOC_BIND")]
    pub bind: String,
}
