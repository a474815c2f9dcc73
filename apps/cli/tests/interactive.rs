use std::time::Duration;

use usdconv_cli::config::Config;
use usdconv_cli::{
    build_provider, build_settings, print_currencies, run_interactive, run_list, run_once,
    wait_for_rates,
};
use usdconv_core::{FetchState, RateConversionView};

const RATES_PATH: &str = "/v1/currencies/usd.json";
const RATES_BODY: &str =
    r#"{"date": "2026-10-17", "usd": {"jpy": 150.2, "eur": 0.93, "gbp": 0.79}}"#;

fn test_config(server: &mockito::ServerGuard) -> Config {
    Config {
        rates_url: format!("{}{}", server.url(), RATES_PATH),
        request_timeout: Duration::from_secs(5),
        preferred_currency: None,
        log_format: "text".to_string(),
    }
}

async fn loaded_view(config: &Config) -> RateConversionView {
    let mut view = RateConversionView::new(build_settings(config).unwrap());
    view.activate(build_provider(config)).unwrap();
    assert!(wait_for_rates(&mut view).await);
    view
}

#[tokio::test]
async fn interactive_session_converts_selected_currency() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", RATES_PATH)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RATES_BODY)
        .expect(1)
        .create_async()
        .await;

    let config = test_config(&server);
    let mut view = loaded_view(&config).await;

    let input: &[u8] = b"currency EUR\namount 10\nconvert\nquit\nconvert\n";
    let mut output = Vec::new();
    run_interactive(&mut view, input, &mut output, false)
        .await
        .unwrap();

    mock.assert_async().await;
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Convert to: JPY (3 currencies)"));
    assert!(output.contains("Converted amount: 9.30 EUR"));
    assert!(output.contains("1 USD = 0.93 EUR"));
    // Nothing after `quit` is processed.
    assert_eq!(output.matches("Converted amount:").count(), 1);
    assert!(view.is_torn_down());
}

#[tokio::test]
async fn invalid_amount_shows_validation_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", RATES_PATH)
        .with_status(200)
        .with_body(RATES_BODY)
        .create_async()
        .await;

    let config = test_config(&server);
    let mut view = loaded_view(&config).await;

    let input: &[u8] = b"amount -5\nconvert\n";
    let mut output = Vec::new();
    run_interactive(&mut view, input, &mut output, false)
        .await
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("! Enter an amount greater than 0."));
    assert!(!output.contains("Converted amount:"));
}

#[tokio::test]
async fn unavailable_rates_disable_currency_selection() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", RATES_PATH)
        .with_status(500)
        .create_async()
        .await;

    let config = test_config(&server);
    let mut view = loaded_view(&config).await;
    assert!(matches!(view.state().fetch(), FetchState::Error(_)));

    let input: &[u8] = b"currency eur\nlist\nconvert\n";
    let mut output = Vec::new();
    run_interactive(&mut view, input, &mut output, true)
        .await
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Unable to load exchange rates. Please try again shortly."));
    assert!(output.contains("No currencies available."));
    assert_eq!(view.state().selected_currency(), None);
}

#[tokio::test]
async fn preferred_currency_comes_from_config() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", RATES_PATH)
        .with_status(200)
        .with_body(RATES_BODY)
        .create_async()
        .await;

    let mut config = test_config(&server);
    config.preferred_currency = Some("GBP".to_string());
    let view = loaded_view(&config).await;

    assert_eq!(view.state().selected_currency(), Some("gbp"));

    let mut output = Vec::new();
    print_currencies(&mut output, &view.render()).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "EUR GBP JPY\n");
}

#[tokio::test]
async fn list_and_one_shot_fail_when_rates_are_unavailable() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", RATES_PATH)
        .with_status(500)
        .create_async()
        .await;

    let config = test_config(&server);
    let mut view = loaded_view(&config).await;

    let mut output = Vec::new();
    let err = run_list(&view, &mut output).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unable to load exchange rates. Please try again shortly."
    );
    assert!(output.is_empty());

    let mut output = Vec::new();
    let err = run_once(&mut view, "10", Some("eur"), &mut output, false).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unable to load exchange rates. Please try again shortly."
    );
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Error: Unable to load exchange rates."));
    assert!(!output.contains("Converted amount:"));
}

#[tokio::test]
async fn list_and_one_shot_succeed_with_rates() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", RATES_PATH)
        .with_status(200)
        .with_body(RATES_BODY)
        .create_async()
        .await;

    let config = test_config(&server);
    let mut view = loaded_view(&config).await;

    let mut output = Vec::new();
    run_list(&view, &mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "EUR GBP JPY\n");

    let mut output = Vec::new();
    run_once(&mut view, "10", Some("EUR"), &mut output, false).unwrap();
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains("Converted amount: 9.30 EUR"));
}

#[test]
fn invalid_preferred_currency_is_rejected() {
    let config = Config {
        rates_url: "http://127.0.0.1:1/usd.json".to_string(),
        request_timeout: Duration::from_millis(10),
        preferred_currency: Some("e-u-r".to_string()),
        log_format: "text".to_string(),
    };

    assert!(build_settings(&config).is_err());
}

#[test]
fn config_reads_environment() {
    std::env::set_var("USDCONV_RATES_URL", "http://localhost:9/rates.json");
    std::env::set_var("USDCONV_REQUEST_TIMEOUT_MS", "1500");
    std::env::set_var("USDCONV_PREFERRED_CURRENCY", "  ");

    let config = Config::from_env();

    assert_eq!(config.rates_url, "http://localhost:9/rates.json");
    assert_eq!(config.request_timeout, Duration::from_millis(1500));
    assert_eq!(config.preferred_currency, None);
    assert_eq!(config.log_format, "text");

    for key in [
        "USDCONV_RATES_URL",
        "USDCONV_REQUEST_TIMEOUT_MS",
        "USDCONV_PREFERRED_CURRENCY",
    ] {
        std::env::remove_var(key);
    }
}
