use regex::Regex;

/// Finds `key` in `azd env get-values` output and returns its unquoted value.
///
/// Best effort: malformed lines are skipped and an empty value counts as absent.
pub fn extract_value(values: &str, key: &str) -> Option<String> {
    let pattern = format!(r#"^\s*{}\s*=\s*(.*?)\s*$"#, regex::escape(key));
    let re = Regex::new(&pattern).ok()?;

    values
        .lines()
        .find_map(|line| re.captures(line))
        .and_then(|captures| captures.get(1))
        .map(|m| unquote(m.as_str()).to_string())
        .filter(|value| !value.is_empty())
}

fn unquote(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if raw.len() >= 2 && raw.starts_with(quote) && raw.ends_with(quote) {
            return &raw[1..raw.len() - 1];
        }
    }
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALUES: &str = "AZURE_ENV_NAME=\"dev\"\n\
AZURE_LOCATION=\"westus2\"\n\
SERVICE_API_URI=\"https://api-dev.azurecontainerapps.io\"\n\
SERVICE_API_URI_INTERNAL=\"http://api.internal\"\n";

    #[test]
    fn test_extract_quoted_value() {
        assert_eq!(
            extract_value(VALUES, "SERVICE_API_URI").as_deref(),
            Some("https://api-dev.azurecontainerapps.io")
        );
        assert_eq!(
            extract_value(VALUES, "AZURE_LOCATION").as_deref(),
            Some("westus2")
        );
    }

    #[test]
    fn test_extract_unquoted_and_windows_lines() {
        let values = "SERVICE_API_URI=https://api.example.com\r\nOTHER='x'\r\n";
        assert_eq!(
            extract_value(values, "SERVICE_API_URI").as_deref(),
            Some("https://api.example.com")
        );
        assert_eq!(extract_value(values, "OTHER").as_deref(), Some("x"));
    }

    #[test]
    fn test_missing_or_empty_value() {
        assert_eq!(extract_value(VALUES, "WEB_URI"), None);
        assert_eq!(extract_value("SERVICE_API_URI=\"\"\n", "SERVICE_API_URI"), None);
        assert_eq!(extract_value("", "SERVICE_API_URI"), None);
    }

    #[test]
    fn test_key_prefix_does_not_match() {
        let values = "SERVICE_API_URI_INTERNAL=\"http://api.internal\"\n";
        assert_eq!(extract_value(values, "SERVICE_API_URI"), None);
    }
}
