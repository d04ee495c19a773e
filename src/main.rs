use clap::Parser;
use clj_chroma::cli::{self, ChromaArgs};
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = ChromaArgs::parse();
    match cli::run(&args) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(err) = stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush()) {
                eprintln!("clj-chroma: {err}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{:?}", miette::Report::new(err));
            ExitCode::FAILURE
        }
    }
}
