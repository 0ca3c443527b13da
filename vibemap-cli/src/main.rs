//! Entry point for the `vibemap` binary.
#![forbid(unsafe_code)]

use vibemap_cli::CliError;

#[expect(clippy::print_stderr, reason = "the binary reports failures on stderr")]
fn main() {
    match vibemap_cli::run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) if !err.use_stderr() => err.exit(),
        Err(err) => {
            eprintln!("vibemap: {err}");
            std::process::exit(1);
        }
    }
}
