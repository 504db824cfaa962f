use std::process::ExitCode;

use log::error;
use tetgen_tetra::{convert, TetgenPaths};

fn main() -> ExitCode {
    // Configured in code only; the converter reads no environment.
    env_logger::Builder::new()
        .filter_module(
            "tetgen_tetra",
            if cfg!(debug_assertions) {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        )
        .init();

    let paths = TetgenPaths::default();
    match convert(&paths) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("conversion failed: {err}");
            ExitCode::FAILURE
        }
    }
}
