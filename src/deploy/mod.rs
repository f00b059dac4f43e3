pub use self::pipeline::{DeploymentReport, Orchestrator};

mod instructions;
mod pipeline;
