use std::env;
use std::process::ExitCode;

use touchfile::{ touch_file, TouchOutcome };
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let mut args = env::args().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        eprintln!("Usage: touchfile <path>");
        return ExitCode::from(2);
    };

    match touch_file(&path) {
        Ok(TouchOutcome::Touched) => {
            println!("touched {}", path);
            ExitCode::SUCCESS
        }
        Ok(TouchOutcome::Created) => {
            println!("created {}", path);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
