use tokio::io::BufReader;
use usdconv_cli::config::Config;
use usdconv_cli::{
    build_provider, build_settings, init_tracing, run_interactive, run_list, run_once,
    wait_for_rates, Cli,
};
use usdconv_core::RateConversionView;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let config = Config::from_env();
    init_tracing(&config);

    let settings = build_settings(&config)?;
    let provider = build_provider(&config);
    let mut view = RateConversionView::new(settings);
    view.activate(provider)?;

    let mut stdout = std::io::stdout();
    if !wait_for_rates(&mut view).await {
        return Ok(());
    }

    if cli.list {
        return run_list(&view, &mut stdout);
    }
    if let Some(amount) = cli.amount.as_deref() {
        return run_once(
            &mut view,
            amount,
            cli.currency.as_deref(),
            &mut stdout,
            cli.json,
        );
    }

    if let Some(code) = cli.currency.as_deref() {
        view.select_currency(code);
    }
    let stdin = BufReader::new(tokio::io::stdin());
    run_interactive(&mut view, stdin, &mut stdout, cli.json).await
}
