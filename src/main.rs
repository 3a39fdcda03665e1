use clap::Parser;
use int_compare::utils::error::CompareError;
use int_compare::utils::logger;
use int_compare::{CliConfig, ComparisonRunner, IntComparator};

fn report(e: &CompareError) {
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
}

fn main() {
    let cli = CliConfig::parse();

    // logger 要等設定合併後才知道是否 verbose / json
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            report(&e);
            std::process::exit(e.severity().exit_code());
        }
    };

    if settings.json_logs {
        logger::init_json_logger(settings.verbose);
    } else {
        logger::init_cli_logger(settings.verbose);
    }
    tracing::debug!("Resolved settings: {:?}", settings);

    let runner = ComparisonRunner::new(IntComparator::new(), settings);
    match runner.run_and_render() {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Comparison failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            report(&e);
            std::process::exit(e.severity().exit_code());
        }
    }
}
