//! BetBuddy CLI - Command-line interface for betting analytics and staking

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use betbuddy::analytics::{
    analyze_by_odds_range, calculate_performance, calculate_statistics,
    calculate_statistics_by_period, group_bets_by_period, settled_win_rate, BettingStatistics,
    Period,
};
use betbuddy::core::kelly::KellyAssessment;
use betbuddy::core::{
    calculate_expected_value, calculate_flat_stake, calculate_profit, calculate_return,
    calculate_stop_levels, calculate_suggested_stake, calculate_unit_size, check_betting_limits,
    convert_odds, evaluate_betting_session, remaining_limits, responsible_gambling_tips,
    WageredAmounts,
};
use betbuddy::export::{
    export_bets, format_currency, format_date, format_percentage, format_profit_loss, format_roi,
    format_streak, truncate_text, DateStyle, ExportFormat, Locale, ProfitLossDisplay, Tone,
};
use betbuddy::models::{
    BankrollConfig, BetInput, BetOutcome, BetRecord, OddsFormat, OddsValue, RiskTolerance,
};
use betbuddy::validation::{parse_date, validate_bet};

#[derive(Parser)]
#[command(name = "betbuddy")]
#[command(author, version, about = "Betting analytics and staking CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run in interactive mode
    #[arg(short, long)]
    interactive: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Display locale (en-US, en-GB, de-DE, fr-FR)
    #[arg(long, env = "BETBUDDY_LOCALE", default_value = "en-US", global = true)]
    locale: Locale,

    /// Currency code for amounts
    #[arg(long, env = "BETBUDDY_CURRENCY", default_value = "USD", global = true)]
    currency: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert odds to every format
    Convert {
        /// Odds value, e.g. 2.5, +150 or 3/2
        #[arg(allow_hyphen_values = true)]
        odds: String,

        /// Format of the odds value
        #[arg(short, long, default_value = "decimal")]
        format: OddsFormat,
    },

    /// Potential return and profit for a stake
    Returns {
        stake: f64,

        #[arg(allow_hyphen_values = true)]
        odds: String,

        #[arg(short, long, default_value = "decimal")]
        format: OddsFormat,
    },

    /// Kelly fraction and expected value for a price
    Kelly {
        /// Estimated win probability (0-1)
        probability: f64,

        /// Decimal odds
        odds: f64,

        /// Stake used for the expected value
        #[arg(long, default_value = "100")]
        stake: f64,

        /// Kelly multiplier (0.5 = half Kelly)
        #[arg(long, default_value = "0.5")]
        multiplier: f64,
    },

    /// Suggested stake for a bankroll and risk profile
    Stake {
        /// Estimated win probability (0-1)
        probability: f64,

        /// Decimal odds
        odds: f64,

        #[arg(long, env = "BETBUDDY_BANKROLL", default_value = "1000")]
        bankroll: f64,

        /// conservative, moderate or aggressive
        #[arg(long, env = "BETBUDDY_RISK", default_value = "moderate")]
        risk: RiskTolerance,

        /// Units the bankroll is divided into
        #[arg(long, default_value = "100")]
        units: f64,
    },

    /// Check a stake against bankroll limits
    Limits {
        stake: f64,

        #[arg(long, env = "BETBUDDY_BANKROLL", default_value = "1000")]
        bankroll: f64,

        #[arg(long, env = "BETBUDDY_RISK", default_value = "moderate")]
        risk: RiskTolerance,

        /// Largest single stake as a percentage of bankroll
        #[arg(long)]
        max_stake_pct: Option<f64>,

        #[arg(long)]
        daily_limit: Option<f64>,

        #[arg(long)]
        weekly_limit: Option<f64>,

        #[arg(long)]
        monthly_limit: Option<f64>,

        /// Amount already wagered today
        #[arg(long, default_value = "0")]
        today: f64,

        #[arg(long, default_value = "0")]
        this_week: f64,

        #[arg(long, default_value = "0")]
        this_month: f64,
    },

    /// Stop-loss and take-profit levels
    Stops {
        #[arg(long, env = "BETBUDDY_BANKROLL", default_value = "1000")]
        bankroll: f64,

        #[arg(long, env = "BETBUDDY_RISK", default_value = "moderate")]
        risk: RiskTolerance,
    },

    /// Should the session continue?
    Session {
        /// Recent results, oldest first (e.g. win,loss,loss)
        #[arg(long, value_delimiter = ',')]
        results: Vec<BetOutcome>,

        /// Current bankroll
        #[arg(long)]
        bankroll: f64,

        /// Bankroll at session start
        #[arg(long)]
        original: f64,
    },

    /// Statistics for a JSON file of bets
    Stats {
        /// JSON array of bets
        file: PathBuf,

        /// Break down by day, week or month
        #[arg(long)]
        period: Option<Period>,

        /// Only bets on or after this date
        #[arg(long)]
        from: Option<String>,

        /// Only bets on or before this date
        #[arg(long)]
        to: Option<String>,
    },

    /// Validate a JSON file of bets
    Validate {
        file: PathBuf,
    },

    /// Export a JSON file of bets
    Export {
        file: PathBuf,

        /// csv, json, jsonlines, tsv, html or markdown
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Responsible gambling tips and resources
    Tips,
}

/// Display settings shared by all commands
struct View {
    locale: Locale,
    currency: String,
}

impl View {
    fn money(&self, amount: f64) -> String {
        format_currency(amount, &self.currency, self.locale)
    }

    fn profit(&self, amount: f64) -> ColoredString {
        paint(&format_profit_loss(amount, &self.currency, self.locale))
    }
}

fn paint(display: &ProfitLossDisplay) -> ColoredString {
    match display.tone {
        Tone::Green => display.value.green(),
        Tone::Red => display.value.red(),
        Tone::Gray => display.value.dimmed(),
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let display = View {
        locale: cli.locale,
        currency: cli.currency.clone(),
    };

    if cli.interactive {
        println!("{}", "BetBuddy CLI v0.2.0".cyan().bold());
        println!();
        return run_interactive(&display);
    }

    let Some(command) = cli.command else {
        println!("Use --help for usage information or --interactive for interactive mode.");
        return Ok(());
    };

    match command {
        Commands::Convert { odds, format } => run_convert(&odds, format)?,
        Commands::Returns {
            stake,
            odds,
            format,
        } => run_returns(&display, stake, &odds, format)?,
        Commands::Kelly {
            probability,
            odds,
            stake,
            multiplier,
        } => run_kelly(&display, probability, odds, stake, multiplier)?,
        Commands::Stake {
            probability,
            odds,
            bankroll,
            risk,
            units,
        } => run_stake(&display, probability, odds, bankroll, risk, units)?,
        Commands::Limits {
            stake,
            bankroll,
            risk,
            max_stake_pct,
            daily_limit,
            weekly_limit,
            monthly_limit,
            today,
            this_week,
            this_month,
        } => {
            let config = BankrollConfig {
                total_bankroll: bankroll,
                risk_tolerance: risk,
                daily_limit,
                weekly_limit,
                monthly_limit,
                max_stake_percentage: max_stake_pct,
            };
            let wagered = WageredAmounts {
                today,
                this_week,
                this_month,
            };
            run_limits(&display, stake, &config, wagered);
        }
        Commands::Stops { bankroll, risk } => run_stops(&display, bankroll, risk)?,
        Commands::Session {
            results,
            bankroll,
            original,
        } => run_session(&results, bankroll, original)?,
        Commands::Stats {
            file,
            period,
            from,
            to,
        } => run_stats(&display, &file, period, from.as_deref(), to.as_deref())?,
        Commands::Validate { file } => run_validate(&file)?,
        Commands::Export {
            file,
            format,
            output,
        } => run_export(&file, &format, output.as_deref())?,
        Commands::Tips => run_tips(),
    }

    Ok(())
}

fn run_convert(odds: &str, format: OddsFormat) -> Result<()> {
    let conversion =
        convert_odds(odds, format).with_context(|| format!("Failed to convert {}", odds))?;

    println!("{} {} ({})", "Odds:".green(), odds, format);
    println!("{}", "-".repeat(40));
    println!("{:<22} {:>12.2}", "Decimal", conversion.decimal);
    println!("{:<22} {:>12}", "Fractional", conversion.fractional);
    println!(
        "{:<22} {:>12}",
        "American",
        if conversion.american > 0 {
            format!("+{}", conversion.american)
        } else {
            conversion.american.to_string()
        }
    );
    println!(
        "{:<22} {:>12}",
        "Implied probability",
        format_percentage(conversion.implied_probability, 2, false)
    );

    Ok(())
}

fn run_returns(display: &View, stake: f64, odds: &str, format: OddsFormat) -> Result<()> {
    let value = OddsValue::parse(odds, format).with_context(|| format!("Invalid odds {}", odds))?;
    let total = calculate_return(stake, value)?;
    let profit = calculate_profit(stake, value)?;

    println!("{:<10} {}", "Stake", display.money(stake));
    println!("{:<10} {}", "Return", display.money(total));
    println!("{:<10} {}", "Profit", display.profit(profit));

    Ok(())
}

fn run_kelly(
    display: &View,
    probability: f64,
    odds: f64,
    stake: f64,
    multiplier: f64,
) -> Result<()> {
    let assessment = KellyAssessment::new(probability, odds, multiplier)?;
    let ev = calculate_expected_value(stake, probability, odds)?;

    println!("{}", "Kelly Criterion".yellow().bold());
    println!("{}", "-".repeat(40));
    println!("{:<22} {:>12.4}", "Full Kelly", assessment.kelly_fraction);
    println!(
        "{:<22} {:>12.4}",
        format!("{}x Kelly", multiplier),
        assessment.recommended_fraction
    );
    println!(
        "{:<22} {:>12}",
        "Edge",
        format_percentage(assessment.edge * 100.0, 2, true)
    );
    println!(
        "{:<22} {:>12}",
        format!("EV on {}", display.money(stake)),
        display.profit(ev)
    );

    if !assessment.has_edge() {
        println!();
        println!("{}", "No positive edge at this price.".red());
    }

    Ok(())
}

fn run_stake(
    display: &View,
    probability: f64,
    odds: f64,
    bankroll: f64,
    risk: RiskTolerance,
    units: f64,
) -> Result<()> {
    let suggestion = calculate_suggested_stake(bankroll, odds, probability, risk)?;
    let flat = calculate_flat_stake(bankroll, risk)?;
    let unit = calculate_unit_size(bankroll, units)?;

    println!(
        "{} {} ({} risk)",
        "Bankroll:".green(),
        display.money(bankroll),
        risk
    );
    println!("{}", "-".repeat(50));
    println!(
        "{:<18} {}",
        "Suggested stake",
        display.money(suggestion.suggested_stake).bold()
    );
    println!(
        "{:<18} {} - {}",
        "Range",
        display.money(suggestion.min_stake),
        display.money(suggestion.max_stake)
    );
    println!("{:<18} {}", "Flat stake", display.money(flat));
    println!("{:<18} {}", format!("Unit (1/{})", units), display.money(unit));
    println!();
    println!("{}", suggestion.reasoning.dimmed());

    Ok(())
}

fn run_limits(display: &View, stake: f64, config: &BankrollConfig, wagered: WageredAmounts) {
    let check = check_betting_limits(stake, config, wagered);
    let remaining = remaining_limits(config, wagered);

    if check.allowed {
        println!("{} {}", "Allowed:".green().bold(), display.money(stake));
    } else {
        println!("{} {}", "Blocked:".red().bold(), display.money(stake));
    }
    for violation in &check.violations {
        println!("  {} {}", "✗".red(), violation);
    }
    for warning in &check.warnings {
        println!("  {} {}", "!".yellow(), warning);
    }

    let limits = [
        ("Daily", remaining.daily),
        ("Weekly", remaining.weekly),
        ("Monthly", remaining.monthly),
    ];
    if limits.iter().any(|(_, left)| left.is_some()) {
        println!();
        println!("{}", "Remaining limits:".yellow());
        for (name, left) in limits {
            if let Some(left) = left {
                println!("  {:<10} {}", name, display.money(left));
            }
        }
    }
}

fn run_stops(display: &View, bankroll: f64, risk: RiskTolerance) -> Result<()> {
    let levels = calculate_stop_levels(bankroll, risk)?;

    println!(
        "{:<14} {} ({})",
        "Stop loss",
        display.money(levels.stop_loss).red(),
        format_percentage(levels.stop_loss_percentage, 0, false)
    );
    println!(
        "{:<14} {} ({})",
        "Take profit",
        display.money(levels.take_profit).green(),
        format_percentage(levels.take_profit_percentage, 0, false)
    );
    println!();
    for recommendation in &levels.recommendations {
        println!("  - {}", recommendation);
    }

    Ok(())
}

fn run_session(results: &[BetOutcome], bankroll: f64, original: f64) -> Result<()> {
    let assessment = evaluate_betting_session(results, bankroll, original)?;

    if assessment.should_pause {
        println!("{}", "Take a break".red().bold());
    } else {
        println!("{}", "Keep going".green().bold());
    }
    if let Some(reason) = &assessment.reason {
        println!("{} {}", "Reason:".yellow(), reason);
    }
    println!("{}", assessment.recommendation);

    Ok(())
}

/// Load and normalize a JSON array of bets. Invalid bets are reported and skipped.
fn load_bets(path: &Path) -> Result<Vec<BetRecord>> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .context("Invalid spinner template")?,
    );
    pb.set_message("Loading bets...");

    let inputs = read_bet_inputs(path)?;

    let mut bets = Vec::with_capacity(inputs.len());
    for (index, input) in inputs.iter().enumerate() {
        match betbuddy::normalize_bet(input) {
            Ok(bet) => bets.push(bet),
            Err(e) => warn!(index, "skipping bet: {}", e),
        }
    }

    pb.finish_and_clear();
    debug!(loaded = bets.len(), total = inputs.len(), "bets loaded");

    if bets.len() < inputs.len() {
        println!(
            "{}",
            format!(
                "Skipped {} invalid bets (run `validate` for details)",
                inputs.len() - bets.len()
            )
            .yellow()
        );
    }

    Ok(bets)
}

fn read_bet_inputs(path: &Path) -> Result<Vec<BetInput>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read bets from {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse bets in {:?}", path))
}

fn parse_bound(raw: Option<&str>, name: &str) -> Result<Option<chrono::DateTime<chrono::Utc>>> {
    match raw {
        None => Ok(None),
        Some(raw) => match parse_date(raw) {
            Some(date) => Ok(Some(date)),
            None => bail!("Invalid --{} date: {}", name, raw),
        },
    }
}

fn print_statistics(display: &View, stats: &BettingStatistics) {
    let roi = format_roi(stats.roi);

    println!("{:<18} {:>14}", "Bets", stats.total_bets);
    println!("{:<18} {:>14}", "Total staked", display.money(stats.total_stake));
    println!("{:<18} {:>14}", "Total returns", display.money(stats.total_returns));
    println!("{:<18} {:>14}", "Profit", display.profit(stats.profit));
    println!("{:<18} {:>14} {}", "ROI", roi.value, roi.indicator.symbol());
    println!(
        "{:<18} {:>14}",
        "Win rate",
        format_percentage(stats.win_rate, 2, false)
    );
    println!("{:<18} {:>14}", "Average stake", display.money(stats.average_stake));
    println!("{:<18} {:>14.2}", "Average odds", stats.average_odds);
    println!("{:<18} {:>14}", "Current streak", format_streak(&stats.current_streak));
    println!("{:<18} {:>14}", "Longest win run", stats.longest_win_streak);
    println!("{:<18} {:>14}", "Longest loss run", stats.longest_lose_streak);
}

fn run_stats(
    display: &View,
    path: &Path,
    period: Option<Period>,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<()> {
    let bets = load_bets(path)?;
    let start = parse_bound(from, "from")?;
    let end = parse_bound(to, "to")?;

    let stats = match (start, end) {
        (None, None) => calculate_statistics(&bets),
        (start, end) => calculate_statistics_by_period(
            &bets,
            start.unwrap_or(chrono::DateTime::<chrono::Utc>::MIN_UTC),
            end.unwrap_or(chrono::DateTime::<chrono::Utc>::MAX_UTC),
        ),
    };

    println!("{}", "Betting Statistics".yellow().bold());
    println!("{}", "-".repeat(40));
    print_statistics(display, &stats);
    println!(
        "{:<18} {:>14}",
        "Settled win rate",
        format_percentage(settled_win_rate(&bets), 2, false)
    );

    let performance = calculate_performance(&bets);
    println!();
    println!("{}", "Performance".yellow().bold());
    println!("{}", "-".repeat(40));
    println!("{:<18} {:>14}", "Gross profit", display.money(performance.gross_profit));
    println!("{:<18} {:>14}", "Gross loss", display.money(performance.gross_loss));
    match performance.profit_factor {
        Some(pf) => println!("{:<18} {:>14.2}", "Profit factor", pf),
        None => println!("{:<18} {:>14}", "Profit factor", "-"),
    }
    println!(
        "{:<18} {:>14} ({})",
        "Max drawdown",
        display.money(performance.max_drawdown),
        format_percentage(performance.max_drawdown_pct, 1, false)
    );
    println!("{:<18} {:>14.4}", "Sharpe ratio", performance.sharpe_ratio);

    let ranges = analyze_by_odds_range(&bets);
    if !ranges.is_empty() {
        println!();
        println!("{}", "By odds range:".yellow().bold());
        println!(
            "{:<18} {:>6} {:>6} {:>10} {:>14}",
            "Range", "Bets", "Wins", "ROI", "Profit"
        );
        println!("{}", "-".repeat(58));
        for range in &ranges {
            println!(
                "{:<18} {:>6} {:>6} {:>10} {:>14}",
                range.key,
                range.bets,
                range.wins,
                format_percentage(range.roi, 1, true),
                display.profit(range.profit)
            );
        }
    }

    if let Some(period) = period {
        println!();
        println!("{}", "By period:".yellow().bold());
        println!(
            "{:<12} {:>6} {:>10} {:>14}",
            "Period", "Bets", "Win rate", "Profit"
        );
        println!("{}", "-".repeat(46));
        for (key, group) in group_bets_by_period(&bets, period) {
            let s = calculate_statistics(&group);
            println!(
                "{:<12} {:>6} {:>10} {:>14}",
                key,
                s.total_bets,
                format_percentage(s.win_rate, 1, false),
                display.profit(s.profit)
            );
        }
    }

    Ok(())
}

fn run_validate(path: &Path) -> Result<()> {
    let inputs = read_bet_inputs(path)?;

    let mut invalid = 0;
    for (index, input) in inputs.iter().enumerate() {
        let result = validate_bet(input);
        if result.is_valid {
            continue;
        }
        invalid += 1;
        println!("{} #{}", "Invalid bet".red(), index + 1);
        for error in &result.errors {
            println!("  - {}", truncate_text(error, 76, "..."));
        }
    }

    if invalid == 0 {
        println!("{} {} bets valid", "OK".green().bold(), inputs.len());
    } else {
        println!();
        println!("{} of {} bets invalid", invalid, inputs.len());
    }

    Ok(())
}

fn run_export(path: &Path, format: &str, output: Option<&Path>) -> Result<()> {
    let bets = load_bets(path)?;
    let format = ExportFormat::parse_lenient(format);
    let rendered = export_bets(&bets, format).context("Failed to export bets")?;

    match output {
        Some(out) => {
            std::fs::write(out, &rendered)
                .with_context(|| format!("Failed to write {:?}", out))?;
            println!(
                "{} {} bets to {:?} ({})",
                "Exported".green(),
                bets.len(),
                out,
                format
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

fn run_tips() {
    let tips = responsible_gambling_tips();

    println!("{}", "Responsible Gambling".yellow().bold());
    println!("{}", "-".repeat(40));
    for tip in &tips.tips {
        println!("  - {}", tip);
    }
    println!();
    println!("{}", "Resources:".yellow());
    for resource in &tips.resources {
        println!("  {} - {}", resource.name.bold(), resource.description);
        println!("    {}", resource.url.cyan());
    }
}

fn run_interactive(display: &View) -> Result<()> {
    println!("{}", "Interactive mode".green().bold());
    println!(
        "Today is {}.\n",
        format_date(chrono::Utc::now(), DateStyle::Full, display.locale)
    );

    let theme = ColorfulTheme::default();

    loop {
        let options = vec![
            "Convert odds",
            "Suggest a stake",
            "Check my session",
            "Responsible gambling tips",
            "Quit",
        ];

        let selection = Select::with_theme(&theme)
            .with_prompt("What would you like to do?")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let formats = [OddsFormat::Decimal, OddsFormat::American, OddsFormat::Fractional];
                let index = Select::with_theme(&theme)
                    .with_prompt("Odds format")
                    .items(&["Decimal", "American", "Fractional"])
                    .default(0)
                    .interact()?;
                let odds: String = Input::with_theme(&theme)
                    .with_prompt("Odds")
                    .interact_text()?;

                println!();
                if let Err(e) = run_convert(&odds, formats[index]) {
                    println!("{} {:#}", "Error:".red(), e);
                }
                println!();
            }
            1 => {
                let bankroll: f64 = Input::with_theme(&theme)
                    .with_prompt("Bankroll")
                    .default(1000.0)
                    .interact_text()?;
                let odds: f64 = Input::with_theme(&theme)
                    .with_prompt("Decimal odds")
                    .interact_text()?;
                let probability: f64 = Input::with_theme(&theme)
                    .with_prompt("Win probability (0-1)")
                    .interact_text()?;

                let risks = [
                    RiskTolerance::Conservative,
                    RiskTolerance::Moderate,
                    RiskTolerance::Aggressive,
                ];
                let index = Select::with_theme(&theme)
                    .with_prompt("Risk tolerance")
                    .items(&["Conservative", "Moderate", "Aggressive"])
                    .default(1)
                    .interact()?;

                println!();
                if let Err(e) = run_stake(display, probability, odds, bankroll, risks[index], 100.0)
                {
                    println!("{} {:#}", "Error:".red(), e);
                }
                println!();
            }
            2 => {
                let results: String = Input::with_theme(&theme)
                    .with_prompt("Recent results, oldest first (win,loss,...)")
                    .allow_empty(true)
                    .interact_text()?;
                let original: f64 = Input::with_theme(&theme)
                    .with_prompt("Starting bankroll")
                    .interact_text()?;
                let bankroll: f64 = Input::with_theme(&theme)
                    .with_prompt("Current bankroll")
                    .interact_text()?;

                let outcomes = results
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::parse::<BetOutcome>)
                    .collect::<Result<Vec<_>, _>>();

                println!();
                match outcomes {
                    Ok(outcomes) => {
                        if let Err(e) = run_session(&outcomes, bankroll, original) {
                            println!("{} {:#}", "Error:".red(), e);
                        }
                    }
                    Err(e) => println!("{} {}", "Error:".red(), e),
                }
                println!();
            }
            3 => {
                println!();
                run_tips();
                println!();
            }
            4 => {
                println!("Goodbye!");
                break;
            }
            _ => {}
        }
    }

    Ok(())
}
