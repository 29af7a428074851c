use std::{env, process};

use court_costs::{
    cli::{self, output, CliError},
    init,
};

fn main() {
    init();

    if let Err(err) = cli::run(env::args().skip(1)) {
        match &err {
            CliError::Usage(message) => output::error(message),
            CliError::Cost(cost) => {
                tracing::debug!(error = ?cost, "calculation failed");
                output::error(cost);
            }
        }
        process::exit(1);
    }
}
