//! CLI for the WXS schema loader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wxs_core::config;
use wxs_core::{SchemaLoader, VersionTag};

use commands::{run_dump, run_fetch, run_namespaces, run_raw, run_show, run_tag};

/// Top-level CLI for the WXS WebExtension schema loader.
#[derive(Debug, Parser)]
#[command(name = "wxs")]
#[command(about = "WXS: fetch and index Firefox WebExtension JSON schemas", long_about = None)]
pub struct Cli {
    /// Repository tag to load (e.g. FIREFOX_128_0_3_RELEASE). Defaults to the latest stable release.
    #[arg(long, global = true)]
    pub tag: Option<String>,

    /// Extraction directory; overrides `out_dir` from config.toml.
    #[arg(long, global = true, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the tag that would be loaded.
    Tag,

    /// Download (if not cached) and parse the schemas, then print a summary.
    Fetch,

    /// List namespaces with their fragment counts.
    Namespaces,

    /// Print every fragment of a namespace as JSON.
    Show {
        /// Namespace name (e.g. "privacy", "manifest").
        namespace: String,
    },

    /// Print the parsed contents of one schema file as JSON.
    Raw {
        /// Schema file name (e.g. "privacy.json").
        file: String,
    },

    /// Write the tag, raw schemas and namespace index as one JSON document.
    Dump {
        /// Output file; stdout when omitted.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        if let Some(dir) = cli.out_dir {
            cfg.out_dir = Some(dir);
        }
        let out_dir = cfg.resolve_out_dir()?;
        let loader = SchemaLoader::new(cfg, out_dir).with_tag(cli.tag.map(VersionTag::new));

        match cli.command {
            CliCommand::Tag => run_tag(&loader).await?,
            CliCommand::Fetch => run_fetch(&loader).await?,
            CliCommand::Namespaces => run_namespaces(&loader).await?,
            CliCommand::Show { namespace } => run_show(&loader, &namespace).await?,
            CliCommand::Raw { file } => run_raw(&loader, &file).await?,
            CliCommand::Dump { output } => run_dump(&loader, output.as_deref()).await?,
        }

        Ok(())
    }
}
