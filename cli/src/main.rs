//! Main function querying gobgp and printing its peer sessions.

use dotenv::dotenv;
use gobgp_peer_report::args::{usage, Cli};
use gobgp_peer_report::client::{gobgp_endpoint, RoutingApiClient};
use gobgp_peer_report::report::render_outcome_as;
use gobgp_peer_report::{logger, report_error, Config, Parser, EXIT_RPC_FAILURE, EXIT_USAGE};
use std::io::Write;
use std::process::ExitCode;

#[tokio::main]
#[cfg(not(tarpaulin_include))]
async fn main() -> ExitCode {
    dotenv().ok();

    let program = std::env::args_os()
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from(env!("CARGO_BIN_NAME")));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version print to stdout and exit 0.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(EXIT_USAGE);
        }
    };
    let Some(host) = cli.address.as_deref() else {
        println!("{}", usage(&program));
        return ExitCode::from(EXIT_USAGE);
    };

    // Unset environment vars take their default values.
    let mut config = match Config::try_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("(config) {}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };
    cli.apply(&mut config);

    if let Err(e) = logger::init(&config) {
        eprintln!("(logger) {}", e);
    }

    let connection = match gobgp_endpoint(host, &config) {
        Ok(connection) => connection,
        Err(e) => {
            report_error!("(main) {}", e);
            eprintln!("{}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let client = RoutingApiClient::new(connection.channel());
    let outcome = client.fetch_peers().await;

    let text = match render_outcome_as(&outcome, cli.output_format()) {
        Ok(text) => text,
        Err(e) => {
            report_error!("(main) {}", e);
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
        report_error!("(main) could not write the report: {}", e);
        return ExitCode::FAILURE;
    }

    match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::from(EXIT_RPC_FAILURE),
    }
}
