use std::{
    io::{self, IsTerminal},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};

use zakat_core::{AssetField, InvestmentField, ZakatSession};
use zakat_ui::{FieldAssignment, InputMode, Preferences, form, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Zakat calculator.
///
/// Sums the given assets and investments and prints 2.5% of the total.
/// Values are read leniently: blank or non-numeric entries count as zero.
/// With no values given, prompts for each field on a terminal, or reads one
/// value per line from piped stdin (assets, then investments).
#[derive(Debug, Parser)]
#[command(name = "zakat", version, about)]
struct Cli {
    /// Cash on hand and in bank accounts.
    #[arg(long, allow_hyphen_values = true)]
    cash: Option<String>,

    /// Value of gold held.
    #[arg(long, allow_hyphen_values = true)]
    gold: Option<String>,

    /// Value of silver held.
    #[arg(long, allow_hyphen_values = true)]
    silver: Option<String>,

    /// Other assets.
    #[arg(long, allow_hyphen_values = true)]
    other_assets: Option<String>,

    /// Value of stocks.
    #[arg(long, allow_hyphen_values = true)]
    stocks: Option<String>,

    /// Value of mutual funds.
    #[arg(long, allow_hyphen_values = true)]
    mutual_funds: Option<String>,

    /// Value of real estate held as investment.
    #[arg(long, allow_hyphen_values = true)]
    real_estate: Option<String>,

    /// Other investments.
    #[arg(long, allow_hyphen_values = true)]
    other_investments: Option<String>,

    /// Set any field by form key, e.g. `investments.mutualFunds=300`.
    /// May be repeated; applied after the named flags.
    #[arg(long = "set", value_name = "CATEGORY.KEY=VALUE")]
    assignments: Vec<FieldAssignment>,

    /// Prompt for every field, even when values were given.
    #[arg(short, long)]
    interactive: bool,

    /// Print notes about zakat and the nisab, then exit.
    #[arg(long)]
    about: bool,

    /// Preferences file (TOML). Defaults to `zakat.toml` if present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug`. Overrides the preferences file;
    /// `RUST_LOG` overrides both.
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    /// Copies every supplied value into `session`. Returns how many fields
    /// were set.
    fn fill_session(
        &self,
        session: &mut ZakatSession,
    ) -> anyhow::Result<usize> {
        let assets = [
            (AssetField::Cash, &self.cash),
            (AssetField::Gold, &self.gold),
            (AssetField::Silver, &self.silver),
            (AssetField::Other, &self.other_assets),
        ];
        let investments = [
            (InvestmentField::Stocks, &self.stocks),
            (InvestmentField::MutualFunds, &self.mutual_funds),
            (InvestmentField::RealEstate, &self.real_estate),
            (InvestmentField::Other, &self.other_investments),
        ];

        let mut supplied = 0;
        for (field, value) in assets {
            if let Some(value) = value {
                session.set_asset(field, value.as_str());
                supplied += 1;
            }
        }
        for (field, value) in investments {
            if let Some(value) = value {
                session.set_investment(field, value.as_str());
                supplied += 1;
            }
        }
        for assignment in &self.assignments {
            assignment
                .apply(session)
                .with_context(|| format!("cannot apply --set {assignment}"))?;
            supplied += 1;
        }

        Ok(supplied)
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let preferences = Preferences::load_or_default(cli.config.as_deref())
        .context("failed to load preferences")?;
    logging::init_logging(cli.log_level.as_deref().unwrap_or(&preferences.log_level));

    let stdout = io::stdout();
    let mut output = stdout.lock();

    if cli.about {
        form::render_about(&mut output)?;
        return Ok(());
    }

    let mut session = ZakatSession::new();
    let supplied = cli.fill_session(&mut session)?;
    debug!(supplied, "fields supplied on the command line");

    let stdin = io::stdin();
    match InputMode::select(cli.interactive, supplied, stdin.is_terminal()) {
        InputMode::Flags => {}
        InputMode::Prompt => {
            form::prompt_fields(&mut session, stdin.lock(), &mut output)
                .context("failed to read field values")?;
        }
        InputMode::Piped => {
            let answers = form::prompt_fields(&mut session, stdin.lock(), &mut io::sink())
                .context("failed to read field values from stdin")?;
            if answers == 0 {
                warn!("no field values given on the command line or stdin; see --help");
            }
        }
    }

    session.calculate();
    form::render_result(&session, preferences.show_breakdown, &mut output)?;

    Ok(())
}
