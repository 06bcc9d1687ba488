use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = post_fixtures::run() {
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
