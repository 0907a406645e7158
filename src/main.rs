use clap::Parser;
use ip_calc::{init_logging, run, Config};
use std::error::Error;
use std::process::ExitCode;

fn main() -> Result<ExitCode, Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let config = Config::parse();
    init_logging(&config.log_config)?;
    log::info!("#Start main()");
    log::debug!("Config {:?}", config);

    let output = run(&config)?;
    print!("{}", output.rendered);

    if output.invalid > 0 {
        log::warn!(
            "{} of {} inputs were invalid",
            output.invalid,
            output.valid + output.invalid
        );
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
