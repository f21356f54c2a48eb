//! listtags-gen CLI
//!
//! Generates the per-service tag listing functions. Run with no arguments
//! to write `list_tags_gen.rs` in the current directory.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use listtags_gen_common::{is_known_service, sorted_service_names, ServiceAttributes};
use listtags_gen_generator::{ListTagsGenerator, DEFAULT_OUTPUT};
use log::LevelFilter;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "listtags-gen")]
#[command(version, about = "Generate tag listing functions for AWS SDK clients", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the tag listing source file (the default)
    #[command(after_help = "EXAMPLES:\n  \
        # Regenerate in the current directory\n  \
        listtags-gen generate\n\n  \
        # Fail if the checked-in file is out of date\n  \
        listtags-gen generate --output src/keyvaluetags/list_tags_gen.rs --check")]
    Generate {
        /// Output file
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Compare with the existing file instead of writing it
        #[arg(long)]
        check: bool,
    },

    /// Show the resolved attributes for one service
    Show {
        /// Service name, e.g. "kms"
        service: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the services that get a generated function
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match cli.command.unwrap_or(Commands::Generate {
        output: PathBuf::from(DEFAULT_OUTPUT),
        check: false,
    }) {
        Commands::Generate { output, check } => {
            if check {
                check_command(&output)?;
            } else {
                generate_command(&output)?;
            }
        }
        Commands::Show { service, json } => {
            show_command(&service, json)?;
        }
        Commands::List => {
            list_command();
        }
    }

    Ok(())
}

fn generate_command(output: &Path) -> Result<()> {
    println!("{} Generating {}", "→".cyan(), output.display());

    let generator = ListTagsGenerator::new().context("Failed to create generator")?;
    generator
        .write_to(output)
        .context("Failed to generate tag listing functions")?;

    println!(
        "{} Wrote {} services to {}",
        "✓".green().bold(),
        generator.services().len(),
        output.display().to_string().yellow()
    );

    Ok(())
}

fn check_command(output: &Path) -> Result<()> {
    println!("{} Checking {}", "→".cyan(), output.display());

    let generator = ListTagsGenerator::new().context("Failed to create generator")?;
    let up_to_date = generator
        .is_up_to_date(output)
        .context("Failed to check generated file")?;

    if !up_to_date {
        anyhow::bail!(
            "{} is out of date; rerun listtags-gen to regenerate it",
            output.display()
        );
    }

    println!("{} {} is up to date", "✓".green().bold(), output.display());
    Ok(())
}

fn show_command(service: &str, json: bool) -> Result<()> {
    if !is_known_service(service) {
        eprintln!(
            "{} {} is not in the service table; showing default attributes",
            "⚠".yellow(),
            service
        );
    }

    let attrs = ServiceAttributes::resolve(service);

    if json {
        let text =
            serde_json::to_string_pretty(&attrs).context("Failed to serialize attributes")?;
        println!("{}", text);
        return Ok(());
    }

    println!("{}", attrs.name.bold());
    println!("  Client: {}", attrs.client_type);
    println!("  Operation: {}", attrs.list_tags_function.cyan());
    println!(
        "  Identifier: {}{}",
        attrs.identifier_field,
        if attrs.identifier_requires_slice {
            " (list)"
        } else {
            ""
        }
    );
    if let Some(field) = attrs.resource_type_field {
        println!("  Resource type: {}", field);
    }
    println!("  Tags: {}", attrs.tags_field);

    Ok(())
}

fn list_command() {
    let names = sorted_service_names();
    for name in &names {
        println!("  • {}", name);
    }
    println!("\n{} {} services", "✓".green(), names.len());
}
