use std::io::Write;

use crate::azd::{extract_value, DeploymentTool};
use crate::cli::Prompter;
use crate::config::{validate_environment_name, DeployConfig, RunOptions};
use crate::error::DeployError;
use crate::host::HostProbe;
use crate::logging::Console;

use super::instructions::{print_next_steps, print_troubleshooting, ENDPOINT_PLACEHOLDER};

const DEPLOYMENT_TOOL: &str = "azd";
const CONTAINER_RUNTIME: &str = "docker";
const VERSION_CONTROL: &str = "git";

pub const SUBSCRIPTION_VARIABLE: &str = "AZURE_SUBSCRIPTION_ID";
pub const LOCATION_VARIABLE: &str = "AZURE_LOCATION";

#[derive(Debug, PartialEq)]
pub struct DeploymentReport {
    pub environment_name: String,
    /// `None` when the URL was not found and the placeholder was printed.
    pub endpoint: Option<String>,
}

/// Runs the deployment steps in order; the first fatal step ends the run.
pub struct Orchestrator<'a, W: Write> {
    config: &'a DeployConfig,
    tool: &'a dyn DeploymentTool,
    host: &'a dyn HostProbe,
    prompter: &'a mut dyn Prompter,
    console: &'a mut Console<W>,
}

impl<'a, W: Write> Orchestrator<'a, W> {
    pub fn new(
        config: &'a DeployConfig,
        tool: &'a dyn DeploymentTool,
        host: &'a dyn HostProbe,
        prompter: &'a mut dyn Prompter,
        console: &'a mut Console<W>,
    ) -> Self {
        Self {
            config,
            tool,
            host,
            prompter,
            console,
        }
    }

    pub fn run(&mut self, options: &RunOptions) -> Result<DeploymentReport, DeployError> {
        self.check_prerequisites()?;

        if options.skip_auth {
            self.console.section("Authentication");
            self.console.info("Skipping authentication (--skip-auth)");
        } else {
            self.authenticate()?;
        }

        let environment_name = self.setup_environment()?;
        self.deploy(&environment_name)?;
        let endpoint = self.report(&environment_name);

        Ok(DeploymentReport {
            environment_name,
            endpoint,
        })
    }

    fn check_prerequisites(&mut self) -> Result<(), DeployError> {
        self.console.section("Checking prerequisites");

        match self.tool.version() {
            Ok(version) => self
                .console
                .success(&format!("Azure Developer CLI found: {}", version)),
            Err(err) => {
                self.console.error(&format!(
                    "Azure Developer CLI ({}) is not installed or cannot be run: {}",
                    DEPLOYMENT_TOOL, err
                ));
                return Err(DeployError::MissingTool {
                    tool: DEPLOYMENT_TOOL.to_string(),
                });
            }
        }

        if !self.host.has_tool(CONTAINER_RUNTIME) {
            self.console
                .warning("Docker not found. Container images cannot be built locally.");
        } else if !self.host.container_runtime_running() {
            self.console
                .warning("Docker is installed but not running. Start Docker Desktop before deploying.");
        } else {
            self.console.success("Docker is running");
        }

        if self.host.has_tool(VERSION_CONTROL) {
            self.console.success("Git found");
        }

        Ok(())
    }

    fn authenticate(&mut self) -> Result<(), DeployError> {
        self.console.section("Authentication");
        self.console.info(&format!(
            "Logging in to tenant {}",
            self.config.tenant_id
        ));
        self.console.flush();

        match self.tool.login(&self.config.tenant_id) {
            Ok(()) => {
                self.console.success("Authenticated");
                Ok(())
            }
            Err(err) => {
                self.console.error(&format!("Login failed: {}", err));
                Err(DeployError::AuthenticationFailed {
                    tenant: self.config.tenant_id.clone(),
                })
            }
        }
    }

    /// Returns the name of the environment actually used.
    fn setup_environment(&mut self) -> Result<String, DeployError> {
        self.console.section("Environment setup");

        let requested = self.config.environment_name.clone();
        validate_environment_name(&requested)?;

        let existing = self.tool.list_environments()?;
        let name = if let Some(env) = existing.iter().find(|env| env.name == requested) {
            if env.is_default {
                self.console
                    .info(&format!("'{}' is the current default environment", requested));
            }
            self.console.flush();
            let answer = self.prompter.ask(&format!(
                "Environment '{}' already exists. Use it? (y/N): ",
                requested
            ))?;

            if answer.to_lowercase().starts_with('y') {
                self.tool.select_environment(&requested)?;
                self.console
                    .success(&format!("Using existing environment '{}'", requested));
                requested
            } else {
                let replacement = self.prompter.ask("Enter a new environment name: ")?;
                validate_environment_name(&replacement)?;
                self.create_environment(&replacement)?;
                replacement
            }
        } else {
            self.create_environment(&requested)?;
            requested
        };

        self.tool
            .set_variable(SUBSCRIPTION_VARIABLE, &self.config.subscription_id)?;
        self.tool
            .set_variable(LOCATION_VARIABLE, &self.config.location)?;
        self.console.success(&format!(
            "Configured subscription {} in {}",
            self.config.subscription_id, self.config.location
        ));

        Ok(name)
    }

    fn create_environment(&mut self, name: &str) -> Result<(), DeployError> {
        self.console
            .info(&format!("Creating environment '{}'", name));
        self.console.flush();
        self.tool.new_environment(name)?;
        self.console
            .success(&format!("Created environment '{}'", name));
        Ok(())
    }

    fn deploy(&mut self, environment_name: &str) -> Result<(), DeployError> {
        self.console.section("Deploying");
        self.console
            .info("Running azd up. Provisioning can take 10-15 minutes...");
        self.console.flush();

        match self.tool.up() {
            Ok(()) => {
                self.console.success("Deployment completed");
                Ok(())
            }
            Err(err) => {
                self.console.error(&format!("Deployment failed: {}", err));
                print_troubleshooting(self.console, environment_name);
                Err(DeployError::DeploymentFailed)
            }
        }
    }

    fn report(&mut self, environment_name: &str) -> Option<String> {
        let endpoint = match self.tool.get_values() {
            Ok(values) => extract_value(&values, &self.config.endpoint_key),
            Err(err) => {
                self.console
                    .warning(&format!("Could not read environment values: {}", err));
                None
            }
        };

        if endpoint.is_none() {
            self.console.warning(&format!(
                "{} not found in the environment outputs; replace {} below with the service URL.",
                self.config.endpoint_key, ENDPOINT_PLACEHOLDER
            ));
        }

        print_next_steps(
            self.console,
            environment_name,
            endpoint.as_deref().unwrap_or(ENDPOINT_PLACEHOLDER),
        );
        endpoint
    }
}
