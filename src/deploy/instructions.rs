use std::io::Write;

use crate::logging::Console;

/// Stand-in printed when the service URL could not be read from the environment.
pub const ENDPOINT_PLACEHOLDER: &str = "<your-service-url>";

pub fn print_troubleshooting<W: Write>(console: &mut Console<W>, environment_name: &str) {
    console.section("Troubleshooting");
    console.plain("  1. Check you are logged in and can see the subscription:");
    console.command("azd auth login --check-status");
    console.plain("  2. Make sure Docker is running; container images are built locally.");
    console.plain("  3. Inspect the environment configuration:");
    console.command("azd env get-values");
    console.plain("  4. Re-run with debug output to see the failing resource:");
    console.command("azd up --debug");
    console.plain(&format!(
        "  5. Failed provisioning can be cleaned up with `azd down` (environment '{}').",
        environment_name
    ));
}

pub fn print_next_steps<W: Write>(console: &mut Console<W>, environment_name: &str, endpoint: &str) {
    console.section("Next steps");

    console.plain(&format!("Service URL: {}", endpoint));
    console.plain("");

    console.plain("1. Register the schemas:");
    console.command(&format!("./scripts/register-schemas.sh {}", endpoint));
    console.plain("");

    console.plain("2. Upload the sample data:");
    console.command(&format!("./scripts/upload-samples.sh {}", endpoint));
    console.plain("");

    console.plain("3. Configure authentication:");
    console.plain("   Register an app in Microsoft Entra ID and grant it access to the API,");
    console.plain("   then request tokens for the API scope:");
    console.command(&format!(
        "curl -H \"Authorization: Bearer $TOKEN\" {}/api/health",
        endpoint
    ));
    console.plain("");

    console.section("Useful commands");
    console.command("azd env get-values      # show environment outputs");
    console.command("azd monitor             # open monitoring dashboards");
    console.command("azd deploy              # redeploy code without reprovisioning");
    console.command(&format!(
        "azd down -e {}        # delete all provisioned resources",
        environment_name
    ));
    console.plain("");

    console.plain("Documentation:");
    console.plain("  README.md");
    console.plain("  docs/DEPLOYMENT.md");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(f: impl FnOnce(&mut Console<Vec<u8>>)) -> String {
        colored::control::set_override(false);
        let mut console = Console::new(Vec::new());
        f(&mut console);
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_next_steps_use_endpoint() {
        let output = render(|c| print_next_steps(c, "dev", "https://api.example.com"));

        assert!(output.contains("./scripts/register-schemas.sh https://api.example.com"));
        assert!(output.contains("./scripts/upload-samples.sh https://api.example.com"));
        assert!(output.contains("https://api.example.com/api/health"));
        assert!(output.contains("azd down -e dev"));
        assert!(output.contains("docs/DEPLOYMENT.md"));
    }

    #[test]
    fn test_troubleshooting_names_environment() {
        let output = render(|c| print_troubleshooting(c, "staging"));
        assert!(output.contains("Troubleshooting"));
        assert!(output.contains("azd up --debug"));
        assert!(output.contains("'staging'"));
    }
}
