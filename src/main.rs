use clap::Parser;
use log::debug;
use staff::{cli::Cli, config};

fn init_logger() {
    let filters = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    pretty_env_logger::formatted_builder()
        .parse_filters(&filters)
        .init();
}

fn main() {
    let cli = Cli::parse();

    // .env は起動時に一度だけ読み込む
    if let Some(env_file) = config::default_env_file() {
        config::load_env_file(&env_file);
    }
    init_logger();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = staff::run(cli, config::process_env, &mut out) {
        debug!("{e:?}");
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
