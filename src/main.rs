//! Command-line front end for the salary converter.
//!
//! Each invocation restores the saved session, applies one action and saves
//! the result, so consecutive runs behave like one continuous session.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use salary_converter::app::SalaryConverter;
use salary_converter::config::{AppConfig, ConfigLoader};
use salary_converter::events::EventKind;
use salary_converter::i18n::{FieldId, LocalizedView, Translator};
use salary_converter::models::{HoursPerWeek, Language, Theme};
use salary_converter::presentation::to_text;
use salary_converter::store::{JsonFileStore, KeyValueStore};

#[derive(Debug, Parser)]
#[command(
    name = "salary-converter",
    version,
    about = "Convert a monthly salary into other periods and currencies"
)]
struct Cli {
    /// YAML settings file.
    #[arg(long, global = true, env = "SALARY_CONVERTER_CONFIG")]
    config: Option<PathBuf>,

    /// Session store file (overrides the settings file).
    #[arg(long, global = true, env = "SALARY_CONVERTER_STORE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate the conversion table, using saved values for omitted fields.
    Calculate {
        /// Monthly salary in the primary currency.
        #[arg(long, allow_hyphen_values = true)]
        salary: Option<String>,
        /// Units of primary currency per unit of secondary currency.
        #[arg(long, alias = "exchange-rate", allow_hyphen_values = true)]
        rate: Option<String>,
        /// Weekly working hours: 40, 45 or 48.
        #[arg(long)]
        hours: Option<HoursPerWeek>,
        /// Print the table as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Clear the saved salary, exchange rate and hours.
    Reset,
    /// Set the theme, or toggle it when none is given.
    Theme {
        /// light or dark.
        theme: Option<Theme>,
    },
    /// Set the interface language.
    Language {
        /// es or en.
        language: Language,
    },
    /// Show the saved form and preferences.
    Show,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?
            .into_config(),
        None => AppConfig::default(),
    };
    if let Some(store) = &cli.store {
        config.store_path = Some(store.clone());
    }
    Ok(config)
}

async fn load_translator(config: &AppConfig) -> Translator {
    match &config.locales_dir {
        Some(dir) => Translator::load_dir(dir, config.default_language).await,
        None => Translator::embedded(config.default_language),
    }
}

fn label(view: &LocalizedView, field: FieldId) -> &str {
    view.get(&field).map(String::as_str).unwrap_or_default()
}

fn print_form<S: KeyValueStore>(converter: &SalaryConverter<S>) {
    let view = converter.view();
    let form = converter.form();

    println!("{}", label(&view, FieldId::Title));
    println!("  {}: {}", label(&view, FieldId::SalaryLabel), form.salary);
    println!("  {}: {}", label(&view, FieldId::ExchangeRateLabel), form.exchange_rate);
    println!("  {}: {}", label(&view, FieldId::HoursLabel), form.hours_per_week);
    println!(
        "  {}: {} {}",
        label(&view, FieldId::ThemeToggle),
        converter.theme().toggle_icon(),
        converter.translator().get(&format!("theme.{}", converter.theme()))
    );
    println!(
        "  {}: {}",
        label(&view, FieldId::LanguageLabel),
        converter.language().native_name()
    );
}

fn run_calculate<S: KeyValueStore>(
    converter: &mut SalaryConverter<S>,
    salary: Option<String>,
    rate: Option<String>,
    hours: Option<HoursPerWeek>,
    json: bool,
) -> Result<ExitCode> {
    if let Some(salary) = salary {
        converter.set_salary(salary);
    }
    if let Some(rate) = rate {
        converter.set_exchange_rate(rate);
    }
    if let Some(hours) = hours {
        converter.set_hours(hours);
    }

    if converter.calculate().is_err() {
        let view = converter.view();
        for (field, message) in [
            (FieldId::SalaryLabel, converter.salary_error()),
            (FieldId::ExchangeRateLabel, converter.exchange_rate_error()),
        ] {
            if let Some(message) = message {
                eprintln!("{}: {}", label(&view, field), message);
            }
        }
        return Ok(ExitCode::FAILURE);
    }

    let table = converter
        .table()
        .context("results table missing after calculation")?;
    if json {
        println!("{}", serde_json::to_string_pretty(table)?);
    } else {
        println!("{}", label(&converter.view(), FieldId::ResultsTitle));
        print!("{}", to_text(table));
    }
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let store_path = config
        .resolved_store_path()
        .context("no platform data directory; pass --store")?;
    let store = JsonFileStore::open(&store_path)?;
    let translator = load_translator(&config).await;

    let mut converter = SalaryConverter::new(&config, store, translator);
    converter.subscribe(EventKind::ThemeChanged, |event| {
        debug!(?event, "Theme change applied")
    });
    converter.subscribe(EventKind::LanguageChanged, |event| {
        debug!(?event, "Language change applied")
    });

    match cli.command {
        Command::Calculate {
            salary,
            rate,
            hours,
            json,
        } => return run_calculate(&mut converter, salary, rate, hours, json),
        Command::Reset => {
            converter.reset();
            print_form(&converter);
        }
        Command::Theme { theme } => {
            match theme {
                Some(theme) => converter.set_theme(theme),
                None => {
                    converter.toggle_theme();
                }
            }
            println!("{} {}", converter.theme().toggle_icon(), converter.theme());
        }
        Command::Language { language } => {
            if !converter.set_language(language) {
                eprintln!("No translations available for '{}'", language);
                return Ok(ExitCode::FAILURE);
            }
            print_form(&converter);
        }
        Command::Show => print_form(&converter),
    }

    Ok(ExitCode::SUCCESS)
}
