use dashctl::application::{CheckItem, CheckReport, CheckStatus};

use crate::ui::icon::Icon;

pub fn render_check_header(
    platform: &str,
    target: &str,
    strict_warnings: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} Pre-flight check for {} ({})\n",
        Icon::Check.colored(supports_color, supports_unicode),
        platform,
        target
    );
    if strict_warnings {
        out.push_str("  Strict: failing on warnings\n");
    }
    out
}

fn render_item(item: &CheckItem, supports_color: bool, supports_unicode: bool) -> String {
    let icon = match item.status {
        CheckStatus::Pass => Icon::Success,
        CheckStatus::Warning => Icon::Warning,
        CheckStatus::Error => Icon::Error,
    }
    .colored(supports_color, supports_unicode);

    let mut out = format!("  {} {} - {}\n", icon, item.name, item.message);
    if let Some(rec) = &item.recommendation {
        out.push_str(&format!(
            "    {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            rec
        ));
    }
    out
}

/// Passing items are listed only with `-v`
pub fn render_check_report(
    report: &CheckReport,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    report
        .items
        .iter()
        .filter(|item| verbose > 0 || item.status != CheckStatus::Pass)
        .map(|item| render_item(item, supports_color, supports_unicode))
        .collect()
}

pub fn render_check_summary(
    report: &CheckReport,
    failed: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let (icon, title) = if failed {
        (Icon::Error, "Check FAILED")
    } else if report.warnings() > 0 {
        (Icon::Warning, "Check passed with warnings")
    } else {
        (Icon::Success, "All checks passed")
    };
    format!(
        "{} {}: {} passed, {} warnings, {} errors\n",
        icon.colored(supports_color, supports_unicode),
        title,
        report.passes(),
        report.warnings(),
        report.errors()
    )
}

pub fn check_item_json(item: &CheckItem) -> serde_json::Value {
    serde_json::json!({
        "event": "check",
        "command": "check",
        "name": item.name,
        "status": item.status.as_str(),
        "message": item.message,
        "recommendation": item.recommendation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> CheckReport {
        CheckReport {
            items: vec![
                CheckItem {
                    name: "manifest".to_string(),
                    status: CheckStatus::Pass,
                    message: "requirements.txt lists 3 packages".to_string(),
                    recommendation: None,
                },
                CheckItem {
                    name: "pinning".to_string(),
                    status: CheckStatus::Warning,
                    message: "unpinned packages: pandas".to_string(),
                    recommendation: Some("Pin with ==".to_string()),
                },
            ],
        }
    }

    #[test]
    fn quiet_report_hides_passes() {
        let text = render_check_report(&report(), 0, false, false);
        assert_eq!(
            text,
            "  [WARN] pinning - unpinned packages: pandas\n    [>] Pin with ==\n"
        );
    }

    #[test]
    fn verbose_report_lists_everything() {
        let text = render_check_report(&report(), 1, false, false);
        assert!(text.starts_with("  [OK] manifest"));
    }

    #[test]
    fn summary_counts() {
        insta::assert_snapshot!(
            render_check_summary(&report(), false, false, false).trim_end(),
            @"[WARN] Check passed with warnings: 1 passed, 1 warnings, 0 errors"
        );
    }
}
