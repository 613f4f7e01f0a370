use clap::Parser;
use miette::IntoDiagnostic;

use ffm_personality::config::{AppConfig, OutputFormat};
use ffm_personality::core::logging;
use ffm_personality::core::personality::PersonalityProfile;

/// Describe a Five Factor Model personality profile
#[derive(Parser, Debug)]
#[command(name = "ffm", version, about)]
struct Cli {
    /// Trait values in OCEAN order, each in [0, 1]
    #[arg(
        num_args = 5,
        value_names = ["O", "C", "E", "A", "N"],
        allow_negative_numbers = true,
        required_unless_present = "average",
        conflicts_with = "average"
    )]
    values: Vec<f64>,

    /// Use the average preset (every trait at 0.5)
    #[arg(long)]
    average: bool,

    /// Rendering to print; overrides the configured format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Single-line JSON for the record format
    #[arg(long)]
    compact: bool,
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    let (config, config_error) = AppConfig::load_or_default();

    logging::init(&config.logging);
    log::info!("{} v{} starting", ffm_personality::NAME, ffm_personality::VERSION);
    if let Some(e) = config_error {
        log::warn!(
            "Failed to load config from {}: {e}; using defaults",
            AppConfig::config_path().display()
        );
    }

    let profile = build_profile(&cli)?;
    let format = cli.format.unwrap_or(config.output.format);
    let pretty = config.output.pretty && !cli.compact;

    println!("{}", render(&profile, format, pretty)?);
    Ok(())
}

fn build_profile(cli: &Cli) -> miette::Result<PersonalityProfile> {
    if cli.average {
        return Ok(PersonalityProfile::average());
    }
    match cli.values.as_slice() {
        &[o, c, e, a, n] => Ok(PersonalityProfile::new(o, c, e, a, n)?),
        other => Err(miette::miette!("expected 5 trait values, got {}", other.len())),
    }
}

fn render(profile: &PersonalityProfile, format: OutputFormat, pretty: bool) -> miette::Result<String> {
    let rendered = match format {
        OutputFormat::Sentence => profile.describe(),
        OutputFormat::Text => profile.to_text(),
        OutputFormat::Record if pretty => serde_json::to_string_pretty(&profile.to_record()).into_diagnostic()?,
        OutputFormat::Record => serde_json::to_string(&profile.to_record()).into_diagnostic()?,
    };
    log::debug!("Rendered profile as {:?}", format);
    Ok(rendered)
}
