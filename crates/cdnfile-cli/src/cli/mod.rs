//! CLI for resolving Google Hosted Libraries files.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use cdnfile_core::config::{self, CdnConfig};
use cdnfile_core::{validate, LibraryRequest};

use commands::{run_check, run_completions, run_list, run_resolve, run_tag};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "cdnfile")]
#[command(about = "Resolve front-end libraries to Google Hosted Libraries URLs and include tags", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/cdnfile/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Reject library, version or theme values that are not URL path safe.
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// Library selection shared by resolve, check and tag. Unset values come from `[defaults]`.
#[derive(Debug, Clone, Default, Args)]
pub struct RequestArgs {
    /// Library name, e.g. "jQuery UI", "Angular", "three.js".
    pub library: Option<String>,

    /// Library version, e.g. 1.11.2.
    #[arg(short = 'v', long = "lib-version", value_name = "VERSION")]
    pub version: Option<String>,

    /// File type: "js" or "css".
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub file_type: Option<String>,

    /// Stylesheet theme (jQuery UI only).
    #[arg(long)]
    pub theme: Option<String>,

    /// Use a mirror instead of the configured source prefix.
    #[arg(long, value_name = "URL")]
    pub prefix: Option<String>,
}

impl RequestArgs {
    /// Applies the explicit arguments on top of the configured defaults.
    pub fn build(&self, cfg: &CdnConfig) -> LibraryRequest {
        let mut req = cfg.default_request();
        if let Some(library) = &self.library {
            req = req.with_library(library);
        }
        if let Some(version) = &self.version {
            req = req.with_version(version);
        }
        if let Some(file_type) = &self.file_type {
            req = req.with_file_type(file_type.as_str());
        }
        if let Some(theme) = &self.theme {
            req = req.with_theme(theme);
        }
        if let Some(prefix) = &self.prefix {
            req = req.with_prefix(prefix);
        }
        req
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the CDN URL for a library file.
    Resolve {
        #[command(flatten)]
        request: RequestArgs,
        /// Print the resolved request as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Check that the resolved file exists on the CDN.
    Check {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Print the <script> or <link> tag for a library file.
    Tag {
        #[command(flatten)]
        request: RequestArgs,
        /// Escape angle brackets so the tag prints as text.
        #[arg(long)]
        debug: bool,
        /// Skip the existence check.
        #[arg(long)]
        no_check: bool,
    },

    /// List libraries known to be hosted on the CDN.
    List {
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions.
    Completions {
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);
        let strict = cli.strict || cfg.strict;

        let prepare = |args: &RequestArgs| -> Result<LibraryRequest> {
            let req = args.build(&cfg);
            if strict {
                validate::check_request(&req)?;
            }
            tracing::debug!(library = req.library(), url = req.url(), "resolved request");
            Ok(req)
        };

        match cli.command {
            CliCommand::Resolve { request, json } => run_resolve(&prepare(&request)?, json)?,
            CliCommand::Check { request } => run_check(&prepare(&request)?, &cfg)?,
            CliCommand::Tag {
                request,
                debug,
                no_check,
            } => run_tag(&prepare(&request)?, &cfg, debug, no_check)?,
            CliCommand::List { json } => run_list(json)?,
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
