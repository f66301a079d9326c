use clap::error::ErrorKind;
use clap::Parser;

use crate::config::Target;
use crate::error::ClientError;
use crate::record::Record;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "gradecat [OPTIONS] [HOST] <NAME> <CLASS> <GRADE>")]
pub struct Cli {
    /// Don't print connection status messages
    #[arg(short, long)]
    pub silent: bool,

    /// Optional server IPv4 address, then name, class and grade
    #[arg(value_name = "ARGS", num_args = 3..=4, required = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Resolve the endpoint and record. Nothing touches the network here.
    pub fn target(&self) -> Result<Target, ClientError> {
        Target::from_args(&self.args)
    }
}

#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
#[command(about = "Append a record line to data/dados_c.txt")]
pub struct AppendCli {
    pub name: String,
    pub class_label: String,
    pub grade: String,
}

impl AppendCli {
    pub fn record(&self) -> Record {
        Record::new(&self.name, &self.class_label, &self.grade)
    }
}

/// Parse arguments, printing help, version or usage errors like clap would.
///
/// Returns the exit code when the process should stop: 0 for help/version,
/// 1 for a malformed invocation.
pub fn parse_or_exit_code<P, I, T>(args: I) -> Result<P, u8>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    P::try_parse_from(args).map_err(|err| {
        let _ = err.print();
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        }
    })
}
