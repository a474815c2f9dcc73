use std::io::Write;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};
use usdconv_core::view::Screen;
use usdconv_core::{RateConversionView, ViewSettings};
use usdconv_market_data::{CurrencyApiProvider, RateProvider};

use crate::config::Config;

const HELP: &str =
    "Commands: amount <usd>, currency <code>, convert, list, show, help, quit";

/// Codes printed per line by `list`
const CODES_PER_LINE: usize = 12;

#[derive(Parser, Debug)]
#[clap(
    name = "usdconv",
    version,
    about = "Convert US dollars into other currencies using the latest daily rates"
)]
pub struct Cli {
    #[clap(
        long,
        short,
        allow_hyphen_values = true,
        help = "Amount in USD; converts once and exits"
    )]
    pub amount: Option<String>,

    #[clap(long, short, help = "Target currency code, e.g. eur")]
    pub currency: Option<String>,

    #[clap(long, help = "Print the available currency codes and exit")]
    pub list: bool,

    #[clap(long, help = "Print the rendered view as JSON")]
    pub json: bool,
}

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    // stdout belongs to the view; logs go to stderr.
    if config.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_provider(config: &Config) -> Arc<dyn RateProvider> {
    tracing::debug!("Rate endpoint: {}", config.rates_url);
    Arc::new(CurrencyApiProvider::with_endpoint(
        config.rates_url.clone(),
        config.request_timeout,
    ))
}

pub fn build_settings(config: &Config) -> anyhow::Result<ViewSettings> {
    let settings = ViewSettings::default();
    match config.preferred_currency.as_deref() {
        Some(code) => Ok(settings.with_preferred_currency(code)?),
        None => Ok(settings),
    }
}

/// Waits for the view's rates, tearing the view down on Ctrl-C.
///
/// Returns `false` when interrupted.
pub async fn wait_for_rates(view: &mut RateConversionView) -> bool {
    let interrupted = tokio::select! {
        _ = view.settle() => false,
        _ = tokio::signal::ctrl_c() => true,
    };
    if interrupted {
        view.teardown();
        tracing::info!("Interrupted while loading rates");
    }
    !interrupted
}

pub fn print_screen(out: &mut impl Write, screen: &Screen, json: bool) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(screen)?)?;
    } else {
        write!(out, "{}", screen)?;
    }
    Ok(())
}

pub fn print_currencies(out: &mut impl Write, screen: &Screen) -> anyhow::Result<()> {
    let labels: Vec<&str> = screen
        .currency_selector
        .options
        .iter()
        .map(|option| option.label.as_str())
        .collect();
    if labels.is_empty() {
        writeln!(out, "No currencies available.")?;
    }
    for line in labels.chunks(CODES_PER_LINE) {
        writeln!(out, "{}", line.join(" "))?;
    }
    Ok(())
}

fn ensure_rates_loaded(view: &RateConversionView) -> anyhow::Result<()> {
    match view.state().fetch().error_message() {
        Some(message) => anyhow::bail!("{}", message),
        None => Ok(()),
    }
}

/// `--list`: prints the available codes, or fails if the rates did not load.
pub fn run_list(view: &RateConversionView, out: &mut impl Write) -> anyhow::Result<()> {
    ensure_rates_loaded(view)?;
    print_currencies(out, &view.render())
}

/// `--amount`: converts once and prints the screen. Fails after printing
/// when the rates did not load.
pub fn run_once(
    view: &mut RateConversionView,
    amount: &str,
    currency: Option<&str>,
    out: &mut impl Write,
    json: bool,
) -> anyhow::Result<()> {
    if let Some(code) = currency {
        view.select_currency(code);
    }
    view.set_amount(amount);
    let outcome = view.submit();
    tracing::debug!(?outcome, "Submitted conversion");
    print_screen(out, &view.render(), json)?;
    ensure_rates_loaded(view)
}

/// Line-oriented event loop over an already activated view.
///
/// Ends on `quit` or end of input and tears the view down.
pub async fn run_interactive<R>(
    view: &mut RateConversionView,
    input: R,
    out: &mut impl Write,
    json: bool,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    print_screen(out, &view.render(), json)?;
    writeln!(out, "{}", HELP)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = line
            .split_once(char::is_whitespace)
            .map(|(command, arg)| (command, arg.trim()))
            .unwrap_or((line, ""));

        match command {
            "" => continue,
            "amount" | "a" => view.set_amount(arg),
            "currency" | "c" => {
                if view.render().currency_selector.enabled {
                    view.select_currency(arg);
                } else {
                    writeln!(out, "No currencies available.")?;
                }
            }
            "convert" => {
                let outcome = view.submit();
                tracing::debug!(?outcome, "Submitted conversion");
                print_screen(out, &view.render(), json)?;
            }
            "list" => print_currencies(out, &view.render())?,
            "show" => print_screen(out, &view.render(), json)?,
            "help" => writeln!(out, "{}", HELP)?,
            "quit" | "exit" => break,
            other => writeln!(out, "Unknown command '{}'. {}", other, HELP)?,
        }
        out.flush()?;
    }

    view.teardown();
    Ok(())
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
