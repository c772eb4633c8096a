use cidr_aggregate::config::Config;
use cidr_aggregate::logging::init_logging;
use cidr_aggregate::output::print_summary;
use cidr_aggregate::run;
use std::error::Error;
use std::time::Instant;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let config = Config::from_env();
    init_logging(config.log_level)?;
    log::info!("#Start main()");

    let started = Instant::now();
    let stdout = std::io::stdout();
    let stats = run(&config, &mut stdout.lock())?;

    if config.summary {
        print_summary(stats.input_count, stats.output_count, started.elapsed());
    }

    Ok(())
}
