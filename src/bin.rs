use std::io::{self, Write};

mod cli;

#[allow(unused_must_use)]
#[cfg(not(tarpaulin_include))]
fn main() {
    // The actual gitskel executable (main fn) doesn't seem to be reachable via Tarpaulin.
    // We put as little as possible into this function so we can reach the rest via
    // other test coverage.

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    let mut cli = cli::Cli {
        arg_matches: cli::app().get_matches(),
        stdout: &mut stdout,
    };

    let r = cli.run();

    cli.flush();
    // Intentionally ignoring the result of this flush.

    std::process::exit(match r {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            1
        }
    });
}
