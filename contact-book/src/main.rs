use config::Config;
use contact_directory::{ContactDirectory, DirectoryHandle};
use dotenvy::dotenv;
use env_logger::Env;
use log::{error, info};
use shell::{Flow, Shell};
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader, stdin, stdout};

mod commands;
mod config;
mod errors;
mod process_command;
mod shell;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(error) => {
            error!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let directory = match ContactDirectory::load(&config.contacts_path) {
        Ok(directory) => directory,
        Err(error) => {
            error!("{error}");
            return ExitCode::FAILURE;
        }
    };

    let handle = DirectoryHandle::spawn(directory, config.contacts_path.clone());
    let shell = Shell::new(handle.clone());
    let mut lines = BufReader::new(stdin()).lines();
    let mut wr = stdout();

    info!("Reading commands from stdin");

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(error) => {
                error!("Could not read from stdin: {error}");
                break;
            }
        };

        match shell.handle_line(&mut wr, &line).await {
            Ok(Flow::Continue) => (),
            Ok(Flow::Quit) => break,
            Err(error) => error!("{error}"),
        }
    }

    if !config.save_on_exit {
        info!("Exiting without saving contacts");
        return ExitCode::SUCCESS;
    }

    if let Err(error) = handle.shutdown().await {
        error!("Could not save contacts on exit: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
