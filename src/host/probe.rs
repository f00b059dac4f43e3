use std::process::{Command, Stdio};

/// Read-only checks against the local machine.
pub trait HostProbe {
    /// Whether `name` resolves to an executable on PATH.
    fn has_tool(&self, name: &str) -> bool;
    /// Whether the container daemon answers.
    fn container_runtime_running(&self) -> bool;
}

pub struct SystemProbe;

impl HostProbe for SystemProbe {
    fn has_tool(&self, name: &str) -> bool {
        which::which(name).is_ok()
    }

    fn container_runtime_running(&self) -> bool {
        Command::new("docker")
            .arg("info")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_tool() {
        assert!(!SystemProbe.has_tool("definitely-not-an-installed-tool-42"));
    }
}
