use std::process::ExitCode;

use colored::Colorize;

use gradecat::cli::{parse_or_exit_code, Cli};
use gradecat::config::ClientConfig;
use gradecat::error::ClientError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli: Cli = match parse_or_exit_code(std::env::args_os()) {
        Ok(cli) => cli,
        Err(code) => return ExitCode::from(code),
    };

    let target = match cli.target() {
        Ok(target) => target,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            return ExitCode::from(err.exit_code());
        }
    };

    let config = ClientConfig::new(target.endpoint);

    match gradecat::submit(&config, &target.record, cli.silent).await {
        Ok(response) => {
            println!("{}", response);
            ExitCode::SUCCESS
        }
        Err(ClientError::NoResponse) => {
            eprintln!("{}", ClientError::NoResponse.to_string().yellow());
            ExitCode::from(ClientError::NoResponse.exit_code())
        }
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::from(err.exit_code())
        }
    }
}
