//! Failure classification
//!
//! Platform tools report everything through exit codes and free text. This
//! maps that text onto the two remote failure classes.

/// Output fragments (lowercase) that mean the platform rejected our credentials
pub const AUTH_MARKERS: &[&str] = &[
    "unauthorized",
    "unauthenticated",
    "401",
    "403 forbidden",
    "not logged in",
    "authentication",
    "invalid token",
    "access denied",
    "permission denied (publickey",
    "could not read username",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    Authentication,
    Build,
}

/// Classify failed command output. `extra_markers` come from the platform profile.
pub fn classify_failure<'a>(
    output: impl IntoIterator<Item = &'a str>,
    extra_markers: &[String],
) -> FailureClass {
    let extra: Vec<String> = extra_markers.iter().map(|m| m.to_lowercase()).collect();
    for line in output {
        let line = line.to_lowercase();
        let hit = AUTH_MARKERS.iter().any(|m| line.contains(m))
            || extra.iter().any(|m| !m.is_empty() && line.contains(m.as_str()));
        if hit {
            return FailureClass::Authentication;
        }
    }
    FailureClass::Build
}
