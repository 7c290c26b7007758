use std::process::ExitCode;

fn main() -> ExitCode {
    match patternseek::cli::run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("patternseek: {}", e);
            ExitCode::from(2)
        }
    }
}
