use clap::error::ErrorKind;
use clap::{ArgAction, Parser};

use crate::error::DeployError;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "deployer", author, version, about, long_about = None, disable_help_flag = true)]
pub struct Args {
    /// Name of the azd environment to create or reuse
    #[arg(short, long, value_name = "NAME")]
    pub environment_name: Option<String>,

    /// Skip `azd auth login` (use the current session)
    #[arg(long)]
    pub skip_auth: bool,

    /// Azure region for the environment
    #[arg(short, long, value_name = "REGION")]
    pub location: Option<String>,

    /// Path to a JSON config file (defaults to ./deployer.json when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<String>,

    /// Show usage and exit
    #[arg(short, long, action = ArgAction::SetTrue)]
    pub help: bool,
}

#[derive(Debug, PartialEq)]
pub enum Invocation {
    Help,
    Version(String),
    Run(Args),
}

/// Parses `argv` (including the program name).
///
/// A help flag anywhere wins over every other flag, valid or not.
pub fn parse_invocation<I, T>(argv: I) -> Result<Invocation, DeployError>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    let argv: Vec<String> = argv.into_iter().map(Into::into).collect();

    if argv
        .iter()
        .skip(1)
        .take_while(|arg| arg.as_str() != "--")
        .any(|arg| arg == "-h" || arg == "--help")
    {
        return Ok(Invocation::Help);
    }

    match Args::try_parse_from(&argv) {
        Ok(args) if args.help => Ok(Invocation::Help),
        Ok(args) => Ok(Invocation::Run(args)),
        Err(err) if err.kind() == ErrorKind::DisplayVersion => {
            Ok(Invocation::Version(err.to_string()))
        }
        Err(err) => Err(DeployError::InvalidArguments(first_line(&err.to_string()))),
    }
}

fn first_line(message: &str) -> String {
    message
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string()
}

pub fn usage() -> &'static str {
    "\
Deploy the platform to Azure with the Azure Developer CLI (azd).

Usage: deployer [OPTIONS]

Options:
  -e, --environment-name <NAME>  Name of the azd environment to create or reuse [default: dev]
      --skip-auth                Skip `azd auth login` (use the current session)
  -l, --location <REGION>        Azure region for the environment [default: westus2]
  -c, --config <PATH>            JSON config file [default: ./deployer.json when present]
  -h, --help                     Show this help and exit
  -V, --version                  Print version and exit

Examples:
  deployer
  deployer --environment-name staging
  deployer -e prod --skip-auth
"
}
