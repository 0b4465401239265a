use std::process::ExitCode;

fn main() -> ExitCode {
    match rule30rng::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
