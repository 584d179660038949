//! atsready CLI - résumé to ATS-ready DOCX converter

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use atsready::render::{output_filename, to_json};
use atsready::{AtsProfile, ConvertOptions, JsonFormat, LineRole, Pipeline, ProfileId};

#[derive(Parser)]
#[command(name = "atsready")]
#[command(version)]
#[command(about = "Restructure résumés into ATS-friendly DOCX files", long_about = None)]
struct Cli {
    /// Input résumé files (PDF, DOCX, TXT)
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    #[command(flatten)]
    profile: ProfileArgs,

    /// Output directory
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args)]
struct ProfileArgs {
    /// Target ATS
    #[arg(short, long, value_enum, default_value = "generic")]
    profile: ProfileArg,

    /// Custom profile definition (JSON), overrides --profile
    #[arg(long, value_name = "FILE")]
    profile_file: Option<PathBuf>,

    /// Keep extracted text as-is (no Unicode, bullet or whitespace cleanup)
    #[arg(long)]
    no_cleanup: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert résumés to ATS-ready DOCX files
    Convert {
        /// Input résumé files
        #[arg(value_name = "FILE", required = true)]
        inputs: Vec<PathBuf>,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Show the extracted contact record and classified lines
    Inspect {
        /// Input résumé file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        #[command(flatten)]
        profile: ProfileArgs,

        /// Print the full conversion as JSON
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,
    },

    /// List built-in ATS profiles and their section vocabularies
    Profiles {
        /// Print profiles as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
    /// Workday Recruiting
    Workday,
    /// Lever
    Lever,
    /// AshbyHQ
    Ashby,
    /// Vendor-neutral vocabulary
    Generic,
}

impl From<ProfileArg> for ProfileId {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Workday => ProfileId::Workday,
            ProfileArg::Lever => ProfileId::Lever,
            ProfileArg::Ashby => ProfileId::Ashby,
            ProfileArg::Generic => ProfileId::Generic,
        }
    }
}

impl ProfileArgs {
    fn pipeline(&self) -> atsready::Result<Pipeline> {
        let profile = match &self.profile_file {
            Some(path) => AtsProfile::from_json(&fs::read_to_string(path)?)?,
            None => AtsProfile::builtin(self.profile.into()),
        };

        let mut options = ConvertOptions::new().with_profile(profile);
        if self.no_cleanup {
            options = options.without_cleanup();
        }
        Ok(Pipeline::new(options))
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            inputs,
            profile,
            output,
        }) => cmd_convert(&inputs, &profile, output.as_deref()),
        Some(Commands::Inspect {
            input,
            profile,
            json,
            compact,
        }) => cmd_inspect(&input, &profile, json, compact).map(|_| true),
        Some(Commands::Profiles { json }) => cmd_profiles(json).map(|_| true),
        Some(Commands::Version) => {
            cmd_version();
            Ok(true)
        }
        None => {
            // Default behavior: convert if inputs are provided
            if cli.inputs.is_empty() {
                println!("{}", "Usage: atsready <FILE>... [-p PROFILE] [-o DIR]".yellow());
                println!("       atsready --help for more information");
                Ok(true)
            } else {
                cmd_convert(&cli.inputs, &cli.profile, cli.output.as_deref())
            }
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e.describe());
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when at least one input failed.
fn cmd_convert(
    inputs: &[PathBuf],
    args: &ProfileArgs,
    output: Option<&Path>,
) -> atsready::Result<bool> {
    let pipeline = args.pipeline()?;
    let profile_id = pipeline.profile().id;

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;
    log::debug!("writing output to {}", output_dir.display());

    let pb = ProgressBar::new(inputs.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("progress template is valid")
            .progress_chars("#>-"),
    );
    pb.set_message(format!("Converting for {}...", profile_id.display_name()));

    let results = pipeline.convert_batch_with(inputs, |path, _| {
        pb.set_message(path.display().to_string());
        pb.inc(1);
    });
    pb.finish_and_clear();

    let mut failed = 0;
    let mut claimed = HashSet::new();
    println!("{}", "Output files:".green().bold());
    for (input, result) in inputs.iter().zip(results) {
        let written = result.and_then(|conversion| {
            let name = output_filename(profile_id, input);
            let path = claim_output_path(&output_dir, &name, &mut claimed);
            fs::write(&path, conversion.to_docx()?)?;
            Ok((path, conversion.stats))
        });

        match written {
            Ok((path, stats)) => println!(
                "  {} {} {}",
                "├─".dimmed(),
                path.display(),
                format!(
                    "({} sections, {} lines, {} dates)",
                    stats.header_count, stats.line_count, stats.dates_normalized
                )
                .dimmed()
            ),
            Err(e) => {
                failed += 1;
                eprintln!(
                    "  {} {}: {}",
                    "Error".red().bold(),
                    input.display(),
                    e.describe()
                );
            }
        }
    }

    if failed > 0 {
        eprintln!(
            "\n{} {} of {} files failed",
            "Done with errors.".yellow().bold(),
            failed,
            inputs.len()
        );
    } else {
        println!("\n{} {} files converted", "Done!".green().bold(), inputs.len());
    }

    Ok(failed == 0)
}

/// `dir/name`, or `dir/<stem>_2.docx`, `_3`, ... when an earlier input of
/// this run already wrote there.
fn claim_output_path(dir: &Path, name: &str, claimed: &mut HashSet<PathBuf>) -> PathBuf {
    let path = dir.join(name);
    if claimed.insert(path.clone()) {
        return path;
    }

    let stem = name.strip_suffix(".docx").unwrap_or(name);
    let mut n = 2;
    loop {
        let candidate = dir.join(format!("{}_{}.docx", stem, n));
        if claimed.insert(candidate.clone()) {
            log::warn!(
                "{} already written in this run, using {}",
                path.display(),
                candidate.display()
            );
            return candidate;
        }
        n += 1;
    }
}

fn cmd_inspect(
    input: &Path,
    args: &ProfileArgs,
    json: bool,
    compact: bool,
) -> atsready::Result<()> {
    let conversion = args.pipeline()?.convert_file(input)?;

    if json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        println!("{}", to_json(&conversion, format)?);
        return Ok(());
    }

    println!("{}", "Contact".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Name".bold(), conversion.contact.name);
    println!("{}: {}", "Email".bold(), conversion.contact.email);
    println!("{}: {}", "Phone".bold(), conversion.contact.phone);

    println!();
    println!(
        "{} ({}, {})",
        "Lines".cyan().bold(),
        conversion.source_format,
        conversion.profile.display_name()
    );
    println!("{}", "─".repeat(40).dimmed());
    for line in &conversion.lines {
        match (line.role, line.canonical_section.as_deref()) {
            (LineRole::Header, Some(section)) => {
                println!("{} {}", format!("[{}]", section).green().bold(), line.text)
            }
            _ => println!("  {}", line.text),
        }
    }

    println!();
    println!("{}", "Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    let stats = &conversion.stats;
    println!("{}: {}", "Lines".bold(), stats.line_count);
    println!("{}: {}", "Headers".bold(), stats.header_count);
    println!("{}: {}", "Dates normalized".bold(), stats.dates_normalized);
    println!("{}: {}", "Words".bold(), stats.word_count);

    Ok(())
}

fn cmd_profiles(json: bool) -> atsready::Result<()> {
    let profiles = AtsProfile::builtins();

    if json {
        println!("{}", to_json(&profiles, JsonFormat::Pretty)?);
        return Ok(());
    }

    for profile in &profiles {
        println!(
            "{} {}",
            profile.id.display_name().cyan().bold(),
            format!("({}, headers < {} chars)", profile.id, profile.max_header_len).dimmed()
        );
        for section in &profile.sections {
            println!(
                "  {} {}",
                format!("{:<15}", section.name).bold(),
                section.synonyms.join(", ")
            );
        }
        println!();
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "atsready".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Résumé to ATS-ready DOCX converter");
    println!();
    println!("License: MIT");
}
