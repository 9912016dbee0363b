//! Parse command - extract contact fields from a single card's OCR text.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use cardex_core::{format_phone, BusinessCardParser, CardParser, ParsedContact};

use super::load_config;

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input text file, or `-` to read from stdin
    #[arg(required = true)]
    input: String,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print warnings and line tags to stderr
    #[arg(long)]
    report: bool,

    /// Validate the parsed contact
    #[arg(long)]
    validate: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON output
    Json,
    /// Indented JSON output
    Pretty,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension for outputs in this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json | OutputFormat::Pretty => "json",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let text = read_input(&args.input)?;
    info!("Parsing {} ({} bytes)", args.input, text.len());

    let parser = BusinessCardParser::from_config(&config.extraction);
    let result = parser.parse_with_report(&text);

    if args.report {
        eprintln!("{}", style("Lines:").blue());
        for line in &result.tagged_lines {
            let tag = line
                .category
                .map(|c| format!("{:?}", c))
                .unwrap_or_else(|| "-".to_string());
            eprintln!("  [{:>8}] {}", tag, line.text);
        }
        if !result.warnings.is_empty() {
            eprintln!("{}", style("Warnings:").yellow());
            for warning in &result.warnings {
                eprintln!("  - {}", warning);
            }
        }
    }

    if args.validate {
        let issues = result.contact.validate();
        if !issues.is_empty() {
            eprintln!("{}", style("Validation issues:").yellow());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    let output = format_contact(&result.contact, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    let path = Path::new(input);
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", path.display());
    }
    Ok(fs::read_to_string(path)?)
}

pub fn format_contact(contact: &ParsedContact, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(contact)?),
        OutputFormat::Pretty => Ok(serde_json::to_string_pretty(contact)?),
        OutputFormat::Text => Ok(format_text(contact)),
    }
}

fn format_text(contact: &ParsedContact) -> String {
    let mut output = String::new();

    output.push_str(&format!("Name: {}\n", contact.full_name));
    if !contact.job_title.is_empty() {
        output.push_str(&format!("Title: {}\n", contact.job_title));
    }
    if !contact.company.is_empty() {
        output.push_str(&format!("Company: {}\n", contact.company));
    }

    for email in contact.emails.iter().filter(|e| !e.value.is_empty()) {
        output.push_str(&format!("Email ({:?}): {}\n", email.kind, email.value));
    }
    for phone in contact.phones.iter().filter(|p| !p.value.is_empty()) {
        output.push_str(&format!(
            "Phone ({:?}): {}\n",
            phone.kind,
            format_phone(&phone.value)
        ));
    }

    if !contact.website.is_empty() {
        output.push_str(&format!("Website: {}\n", contact.website));
    }
    if !contact.social_links.linkedin.is_empty() {
        output.push_str(&format!("LinkedIn: {}\n", contact.social_links.linkedin));
    }
    if !contact.social_links.twitter.is_empty() {
        output.push_str(&format!("Twitter: {}\n", contact.social_links.twitter));
    }

    if !contact.address.is_empty() {
        output.push_str("Address:\n");
        for line in contact.address.format().lines() {
            output.push_str(&format!("  {}\n", line));
        }
    }

    output
}
