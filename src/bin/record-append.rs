use std::path::Path;
use std::process::ExitCode;

use colored::Colorize;

use gradecat::append::{append_record, DATA_DIR};
use gradecat::cli::{parse_or_exit_code, AppendCli};

fn main() -> ExitCode {
    let cli: AppendCli = match parse_or_exit_code(std::env::args_os()) {
        Ok(cli) => cli,
        Err(code) => return ExitCode::from(code),
    };

    match append_record(Path::new(DATA_DIR), &cli.record()) {
        Ok(path) => {
            println!("Record written to {}", path.display().to_string().green());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::from(err.exit_code())
        }
    }
}
