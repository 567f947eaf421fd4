//! Plain-text rendering for terminal output.

use triage_contracts::{
    assessment::{HealthStatus, NearbyResource, ResourceListing, TriageResult},
    condition::AnalysisResult,
    urgency::color_class_for,
};

const BAR_WIDTH: usize = 30;

/// Bar length for `value`, scaled so the largest value fills `width`.
pub fn bar_len(value: u8, max: u8, width: usize) -> usize {
    if max == 0 {
        return 0;
    }
    (value as usize * width + max as usize / 2) / max as usize
}

fn join(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn bar(value: u8, max: u8) -> String {
    "█".repeat(bar_len(value, max, BAR_WIDTH))
}

/// `HIGH (red)`, `WHATEVER (gray)`.
pub fn urgency_badge(label: &str) -> String {
    format!("{} ({})", label.to_uppercase(), color_class_for(label))
}

pub fn analysis(result: &AnalysisResult) -> String {
    let matched = match &result.matched_keyword {
        Some(kw) => format!("\"{}\"", kw),
        None => "(no keyword; default category)".to_string(),
    };
    let mut lines = vec![
        format!("  Condition:   {}", result.condition),
        format!("  Urgency:     {}", urgency_badge(result.urgency.as_str())),
        format!("  Confidence:  {}%", result.confidence),
        format!("  Matched on:  {}", matched),
        format!("  {}", result.description),
        String::new(),
        "  Symptom severity".to_string(),
    ];

    let max = result.symptom_profile.iter().map(|s| s.value).max().unwrap_or(0);
    lines.extend(
        result
            .symptom_profile
            .iter()
            .map(|s| format!("    {:<22} {:>3} {}", s.name, s.value, bar(s.value, max))),
    );

    lines.push(String::new());
    lines.push("  Treatment effectiveness".to_string());
    let max = result
        .treatment_profile
        .iter()
        .map(|t| t.effectiveness)
        .max()
        .unwrap_or(0);
    lines.extend(result.treatment_profile.iter().map(|t| {
        format!(
            "    {:<22} {:>3} {}",
            t.name,
            t.effectiveness,
            bar(t.effectiveness, max)
        )
    }));

    lines.push(String::new());
    lines.push("  Recommendations".to_string());
    lines.extend(result.recommendations.iter().map(|r| format!("    - {}", r)));
    join(lines)
}

fn resource_lines(lines: &mut Vec<String>, r: &NearbyResource) {
    lines.push(format!(
        "    {} [{}]  {}  wait {}  {}",
        r.name, r.kind, r.distance, r.wait_time, r.phone
    ));
    if let Some(address) = &r.address {
        lines.push(format!("      {}", address));
    }
}

pub fn triage(result: &TriageResult) -> String {
    let mut lines = vec![
        format!("  Urgency:  {}", urgency_badge(result.urgency_level.as_str())),
        format!("  {}", result.summary),
    ];
    if let Some(reasoning) = &result.reasoning {
        lines.push(format!("  Reasoning: {}", reasoning));
    }

    lines.push(String::new());
    lines.push("  Recommendations".to_string());
    lines.extend(result.recommendations.iter().map(|r| format!("    - {}", r)));

    lines.push(String::new());
    lines.push("  Nearby resources".to_string());
    for r in &result.nearby_resources {
        resource_lines(&mut lines, r);
    }

    if let Some(disclaimer) = &result.disclaimer {
        lines.push(String::new());
        lines.push(format!("  {}", disclaimer));
    }
    join(lines)
}

pub fn listing(urgency_label: &str, listing: &ResourceListing) -> String {
    let mut lines = vec![format!(
        "  {} resource(s) for urgency {}",
        listing.total,
        urgency_badge(urgency_label)
    )];
    for r in &listing.resources {
        resource_lines(&mut lines, r);
    }
    join(lines)
}

pub fn health(status: &HealthStatus) -> String {
    format!(
        "  {} {} is {} (reported at {:.0})\n",
        status.service, status.version, status.status, status.timestamp
    )
}

#[cfg(test)]
mod tests {
    use triage_core::classifier::SymptomClassifier;

    use super::*;

    #[test]
    fn bars_scale_to_largest_value() {
        assert_eq!(bar_len(90, 90, 30), 30);
        assert_eq!(bar_len(45, 90, 30), 15);
        assert_eq!(bar_len(0, 90, 30), 0);
        assert_eq!(bar_len(5, 0, 30), 0);
    }

    #[test]
    fn badges_follow_color_policy() {
        assert_eq!(urgency_badge("high"), "HIGH (red)");
        assert_eq!(urgency_badge("moderate"), "MODERATE (orange)");
        assert_eq!(urgency_badge("low"), "LOW (green)");
        assert_eq!(urgency_badge("critical"), "CRITICAL (gray)");
    }

    #[test]
    fn analysis_lists_profiles() {
        let result = SymptomClassifier::new().classify("high fever").unwrap();
        let text = analysis(&result);

        assert!(text.contains("Symptom severity"));
        assert!(text.contains("Treatment effectiveness"));
        assert!(text.contains("Matched on:  \"fever\""));
        for s in &result.symptom_profile {
            assert!(text.contains(s.name.as_ref()));
        }
    }

    #[test]
    fn analysis_marks_default_category() {
        let result = SymptomClassifier::new().classify("something vague").unwrap();
        assert!(analysis(&result).contains("default category"));
    }

    #[test]
    fn output_is_one_line_per_entry() {
        let result = triage_client::fallback_assessment();
        let text = triage(&result);

        assert!(text.ends_with('\n'));
        assert!(!text.ends_with("\n\n"));
        let recs: Vec<&str> = text.lines().filter(|l| l.starts_with("    - ")).collect();
        assert_eq!(recs.len(), result.recommendations.len());
    }

    #[test]
    fn triage_includes_resources() {
        let result = triage_client::fallback_assessment();
        let text = triage(&result);

        assert!(text.contains("MODERATE (orange)"));
        assert!(text.contains("Bay Area Urgent Care [Urgent Care]"));
        assert!(!text.contains("Reasoning"));
    }
}
