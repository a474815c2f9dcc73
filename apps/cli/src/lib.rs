pub mod config;
mod main_lib;

pub use main_lib::{
    build_provider, build_settings, init_tracing, print_currencies, print_screen, run_interactive,
    run_list, run_once, wait_for_rates, Cli,
};
