//! Human-readable rendering of a validated summary

use crate::summary::models::SummaryJson;

/// Stand-in for an empty list or an empty `decisions` field.
pub const PLACEHOLDER: &str = "—";

/// Section headers, in render order.
pub const SECTION_HEADERS: [&str; 7] = [
    "Patient Overview",
    "Key Findings",
    "Differentials",
    "Decisions",
    "Next Steps",
    "Follow-ups",
    "Red Flags",
];

/// Render the text block shown on the case card.
pub fn render_pretty_text(summary: &SummaryJson) -> String {
    let [overview, findings, differentials, decisions, next_steps, followups, red_flags] =
        SECTION_HEADERS;

    let decisions_text = if summary.decisions.is_empty() {
        PLACEHOLDER
    } else {
        summary.decisions.as_str()
    };

    [
        format!("{}: {}", overview, summary.patient_overview),
        bullet_section(findings, &summary.key_findings),
        bullet_section(differentials, &summary.differentials),
        format!("{}: {}", decisions, decisions_text),
        bullet_section(next_steps, &summary.next_steps),
        bullet_section(followups, &summary.followups),
        bullet_section(red_flags, &summary.red_flags),
    ]
    .join("\n\n")
}

fn bullet_section(header: &str, items: &[String]) -> String {
    let body = if items.is_empty() {
        PLACEHOLDER.to_string()
    } else {
        items.join("\n- ")
    };
    format!("{}:\n- {}", header, body)
}
