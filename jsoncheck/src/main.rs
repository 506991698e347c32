use jsoncheck::args::{self, USAGE};
use jsoncheck::config::{CONFIG_ENV_VAR, CheckConfig};
use jsoncheck::{EXIT_FAILURE, EXIT_VALID};
use std::process;

fn main() {
    let args = match args::parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("jsoncheck: {}", e);
            eprintln!("{}", USAGE);
            process::exit(EXIT_FAILURE);
        }
    };

    if args.help {
        println!("{}", USAGE);
        process::exit(EXIT_VALID);
    }

    // Load configuration
    let config = match jsoncheck::load_config(&args, std::env::var(CONFIG_ENV_VAR).ok()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("jsoncheck: {}", e);
            eprintln!("jsoncheck: using default values");
            CheckConfig::default()
        }
    };

    // Initialize logger
    let logger = match jsoncheck::initialize_logger(&config) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("jsoncheck: {}", e);
            process::exit(EXIT_FAILURE);
        }
    };

    process::exit(jsoncheck::run(&args, &config, &logger));
}
