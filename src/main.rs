pub mod cli;
pub mod config;
pub mod console;
pub mod emit;
pub mod extract;
pub mod files;
pub mod ir;
pub mod path_de;
pub mod pipeline;
pub mod project;

use std::process::ExitCode;

fn main() -> ExitCode {
    let command_line_interface = cli::CommandLineInterface::load();
    match command_line_interface.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            console::error(format!("{error:#}"));
            ExitCode::FAILURE
        }
    }
}
