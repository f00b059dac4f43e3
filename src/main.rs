mod azd;
mod cli;
mod config;
mod deploy;
mod error;
mod host;
mod logging;

use colored::Colorize;

use azd::AzdCli;
use cli::{parse_invocation, usage, Invocation, StdinPrompter};
use config::{load_config, RunOptions};
use deploy::Orchestrator;
use error::DeployError;
use host::SystemProbe;
use logging::Console;

fn run(argv: Vec<String>) -> Result<(), DeployError> {
    let args = match parse_invocation(argv)? {
        Invocation::Help => {
            print!("{}", usage());
            return Ok(());
        }
        Invocation::Version(version) => {
            print!("{}", version);
            return Ok(());
        }
        Invocation::Run(args) => args,
    };

    let config = load_config(&args)?;
    let options = RunOptions {
        skip_auth: args.skip_auth,
    };

    let mut console = Console::stdout();
    console.section(&format!(
        "Deploying environment '{}' to {}",
        config.environment_name, config.location
    ));

    let tool = AzdCli::new();
    let mut prompter = StdinPrompter;
    let report =
        Orchestrator::new(&config, &tool, &SystemProbe, &mut prompter, &mut console).run(&options)?;

    match report.endpoint {
        Some(endpoint) => console.success(&format!(
            "Environment '{}' is live at {}",
            report.environment_name, endpoint
        )),
        None => console.success(&format!(
            "Environment '{}' is deployed",
            report.environment_name
        )),
    }
    Ok(())
}

fn main() {
    let argv: Vec<String> = std::env::args().collect();

    if let Err(err) = run(argv) {
        eprintln!("{} {}", "✗".red(), err.to_string().red());
        if let Some(hint) = err.hint() {
            eprintln!("  {}", hint);
        }
        std::process::exit(err.exit_code());
    }
}
