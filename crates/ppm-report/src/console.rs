//! Console rendering of a report

use ppm_health::{PortfolioInsights, Severity};
use std::fmt::Write;

/// Recommendations shown on the console
pub const TOP_RECOMMENDATIONS: usize = 3;

const RULE_WIDTH: usize = 80;

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "Critical",
        Severity::High => "High",
    }
}

/// Render the executive summary, key concerns and top recommendations
#[must_use]
pub fn render_summary(insights: &PortfolioInsights) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{rule}\nEXECUTIVE SUMMARY\n{rule}\n");
    let _ = writeln!(out, "{}", insights.executive_summary);

    let _ = writeln!(out, "\nKEY CONCERNS:");
    if insights.key_concerns.is_empty() {
        let _ = writeln!(out, "\n  None");
    }
    for concern in &insights.key_concerns {
        let _ = writeln!(
            out,
            "\n  [{}] {}\n  Details: {}\n  Action: {}",
            severity_label(concern.severity),
            concern.title,
            concern.details,
            concern.action
        );
    }

    let _ = writeln!(out, "\nTOP RECOMMENDATIONS:");
    if insights.recommendations.is_empty() {
        let _ = writeln!(out, "\n  None");
    }
    for rec in insights.recommendations.iter().take(TOP_RECOMMENDATIONS) {
        let _ = writeln!(
            out,
            "\n  Priority {}: {}\n  Rationale: {}\n  Timeline: {}",
            rec.priority, rec.recommendation, rec.rationale, rec.timeline
        );
    }

    let _ = writeln!(out, "\n{rule}");
    out
}
