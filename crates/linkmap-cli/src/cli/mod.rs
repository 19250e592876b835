//! CLI for building and using deep-link templates.

mod commands;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use linkmap_core::config;
use linkmap_core::render::BookingValues;
use std::path::PathBuf;

use commands::{
    run_interpret, run_parse, run_render, run_suggest, run_template, run_variables, TemplateEdits,
};

/// Top-level CLI for linkmap.
#[derive(Debug, Parser)]
#[command(name = "linkmap")]
#[command(about = "linkmap: map deep-link URL slots to booking variables", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Decompose a URL and list its slots.
    Parse {
        /// Example deep link (scheme optional).
        url: String,
    },

    /// Show the mapping rules the heuristics suggest for a URL.
    Suggest {
        /// Example deep link (scheme optional).
        url: String,
    },

    /// Build a template from a URL, with optional manual overrides, and print it as JSON.
    Template {
        /// Example deep link (scheme optional).
        url: String,

        /// Assign a variable to a slot, e.g. `query:0:ci=checkIn`; use `none` to clear.
        #[arg(long = "assign", value_name = "SLOT=VAR")]
        assign: Vec<String>,

        /// Set a rule's format pattern, e.g. `query:0:ci=DD/MM/YYYY`.
        #[arg(long = "format", value_name = "SLOT=PATTERN")]
        format: Vec<String>,

        /// Set a rule's uppercase flag, e.g. `query:3:promo=false`.
        #[arg(long = "uppercase", value_name = "SLOT=BOOL")]
        uppercase: Vec<String>,

        /// Skip heuristic suggestions even if enabled in config.
        #[arg(long)]
        no_suggest: bool,

        /// Save the template under this name in the template directory.
        #[arg(long, value_name = "NAME")]
        save: Option<String>,
    },

    /// Synthesize a deep link from a saved template and booking values.
    Render {
        /// Path to a template JSON file.
        template: PathBuf,

        #[command(flatten)]
        values: ValuesArgs,
    },

    /// Read booking values out of a URL using a saved template.
    Interpret {
        /// Path to a template JSON file.
        template: PathBuf,

        /// Deep link with the same shape as the template's example.
        url: String,
    },

    /// List the internal variables a slot can be mapped to.
    Variables,
}

/// Booking values supplied on the command line.
#[derive(Debug, Default, Args)]
pub struct ValuesArgs {
    /// Check-in date (YYYY-MM-DD).
    #[arg(long)]
    pub check_in: Option<NaiveDate>,
    /// Check-out date (YYYY-MM-DD).
    #[arg(long)]
    pub check_out: Option<NaiveDate>,
    #[arg(long)]
    pub adults: Option<u32>,
    #[arg(long)]
    pub children: Option<u32>,
    /// Defaults to adults + children.
    #[arg(long)]
    pub total_guests: Option<u32>,
    /// Defaults to the span between the dates.
    #[arg(long)]
    pub nights: Option<u32>,
    #[arg(long)]
    pub promo_code: Option<String>,
    #[arg(long)]
    pub currency: Option<String>,
    #[arg(long)]
    pub hotel_id: Option<String>,
}

impl From<ValuesArgs> for BookingValues {
    fn from(v: ValuesArgs) -> Self {
        BookingValues {
            check_in: v.check_in,
            check_out: v.check_out,
            adults: v.adults,
            children: v.children,
            total_guests: v.total_guests,
            nights: v.nights,
            promo_code: v.promo_code,
            currency: v.currency,
            hotel_id: v.hotel_id,
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Parse { url } => run_parse(&cfg, &url)?,
            CliCommand::Suggest { url } => run_suggest(&cfg, &url)?,
            CliCommand::Template {
                url,
                assign,
                format,
                uppercase,
                no_suggest,
                save,
            } => {
                let edits = TemplateEdits::from_args(&assign, &format, &uppercase)?;
                run_template(&cfg, &url, &edits, !no_suggest, save.as_deref())?;
            }
            CliCommand::Render { template, values } => run_render(&template, values.into())?,
            CliCommand::Interpret { template, url } => run_interpret(&cfg, &template, &url)?,
            CliCommand::Variables => run_variables(),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
