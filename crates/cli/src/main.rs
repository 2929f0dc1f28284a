use std::process::ExitCode;

fn main() -> ExitCode {
    shelfy_cli::run()
}
