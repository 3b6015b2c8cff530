//! Deploy URL value object.

use serde::{Serialize, Serializer};

const MAX_LABEL_LEN: usize = 63;

/// Public URL of a deployed dashboard: `https://<app-name>.<platform-domain>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeployUrl {
    app: String,
    domain: String,
}

impl DeployUrl {
    /// Build a URL from an app name and platform domain.
    ///
    /// Returns the reason on invalid input.
    pub fn new(app: &str, domain: &str) -> Result<Self, String> {
        validate_app_name(app)?;
        let domain = domain.trim().trim_end_matches('.').to_ascii_lowercase();
        if domain.is_empty() || !domain.contains('.') {
            return Err(format!("'{}' is not a fully qualified domain", domain));
        }
        if domain.split('.').any(|label| label.is_empty()) {
            return Err(format!("'{}' contains an empty label", domain));
        }
        Ok(Self {
            app: app.to_string(),
            domain,
        })
    }

    /// Parse an `https://<app>.<domain>` URL, requiring it to sit under `domain`.
    pub fn parse_under(url: &str, domain: &str) -> Option<Self> {
        let rest = url.trim().strip_prefix("https://")?;
        let host = rest.split(['/', '?', '#']).next()?.to_ascii_lowercase();
        let suffix = format!(".{}", domain.trim_end_matches('.').to_ascii_lowercase());
        let app = host.strip_suffix(&suffix)?;
        Self::new(app, domain).ok()
    }

    /// Find the first URL under `domain` in free-form text (e.g. CLI output).
    pub fn find_in(text: &str, domain: &str) -> Option<Self> {
        text.match_indices("https://").find_map(|(idx, _)| {
            let candidate: String = text[idx..]
                .chars()
                .take_while(|c| !c.is_whitespace() && !matches!(c, '"' | '\'' | ')' | '>'))
                .collect();
            Self::parse_under(&candidate, domain)
        })
    }

    pub fn app(&self) -> &str {
        &self.app
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn as_string(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for DeployUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "https://{}.{}", self.app, self.domain)
    }
}

impl Serialize for DeployUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Check that an app name is usable as a single hostname label.
pub fn validate_app_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("app name is empty".to_string());
    }
    if name.len() > MAX_LABEL_LEN {
        return Err(format!("longer than {} characters", MAX_LABEL_LEN));
    }
    if name.starts_with('-') || name.ends_with('-') {
        return Err("must not start or end with '-'".to_string());
    }
    if let Some(bad) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return Err(format!("character '{}' is not allowed", bad));
    }
    Ok(())
}
