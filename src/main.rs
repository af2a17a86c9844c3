use std::process::ExitCode;

fn main() -> ExitCode {
    match lcd_digits::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            if e.is_input_error() {
                eprintln!("usage: lcd [-s SIZE] DIGITS   (try `lcd --help`)");
            }
            ExitCode::FAILURE
        }
    }
}
