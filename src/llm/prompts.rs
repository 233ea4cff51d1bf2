use crate::summary::models::CaseContext;

const UNKNOWN: &str = "Unknown";

/// Build a deterministic summary prompt for a call transcript.
///
/// Missing or empty context fields are written as `Unknown`. The transcript
/// is embedded verbatim between two `---` lines.
pub fn build_summary_prompt(transcript: &str, context: Option<&CaseContext>) -> String {
    let name = context
        .and_then(|ctx| ctx.patient_name.as_deref())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN);
    let age = context
        .and_then(|ctx| ctx.age.as_ref())
        .filter(|age| !age.is_blank())
        .map(ToString::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string());
    let sex = context
        .and_then(|ctx| ctx.sex.as_deref())
        .filter(|sex| !sex.is_empty())
        .unwrap_or(UNKNOWN);

    format!(
        "You are a clinical voice AI assistant that writes post-call summaries for EHRs.\n\
Summarize the conversation into a compact, clinically useful record.\n\
\n\
STRICT OUTPUT FORMAT: Return a JSON object with EXACT keys:\n\
- patient_overview (string, 1–3 sentences)\n\
- key_findings (array of strings, 3–8 bullets)\n\
- differentials (array of strings, 2–6 items, rank more likely first)\n\
- decisions (string, 1–4 sentences)\n\
- next_steps (array of strings, actionable items)\n\
- followups (array of strings)\n\
- red_flags (array of strings; if none, return [])\n\
\n\
Patient context:\n\
- Name: {name}\n\
- Age: {age}\n\
- Sex: {sex}\n\
\n\
Conversation transcript (verbatim):\n\
---\n\
{transcript}\n\
---"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::models::Age;

    fn jane() -> CaseContext {
        CaseContext {
            patient_name: Some("Jane Doe".to_string()),
            age: Some(Age::Years(34)),
            sex: Some("F".to_string()),
        }
    }

    #[test]
    fn includes_context_and_transcript() {
        let prompt = build_summary_prompt("Patient reports headache.", Some(&jane()));

        assert!(prompt.contains("Name: Jane Doe"));
        assert!(prompt.contains("Age: 34"));
        assert!(prompt.contains("Sex: F"));
        assert!(prompt.contains("Patient reports headache."));
    }

    #[test]
    fn transcript_sits_between_delimiters() {
        let transcript = "Doctor: How long?\n\nPatient: Two days --- maybe three.\n";
        let prompt = build_summary_prompt(transcript, None);

        assert!(prompt.ends_with(&format!("(verbatim):\n---\n{}\n---", transcript)));
    }

    #[test]
    fn missing_context_renders_unknown() {
        let prompt = build_summary_prompt("hi", None);
        assert!(prompt.contains("- Name: Unknown\n- Age: Unknown\n- Sex: Unknown"));
    }

    #[test]
    fn partial_and_empty_context_renders_unknown() {
        let ctx = CaseContext {
            patient_name: Some(String::new()),
            age: Some(Age::Years(0)),
            sex: Some("M".to_string()),
        };
        let prompt = build_summary_prompt("hi", Some(&ctx));

        assert!(prompt.contains("- Name: Unknown"));
        assert!(prompt.contains("- Age: Unknown"));
        assert!(prompt.contains("- Sex: M"));
    }

    #[test]
    fn lists_every_summary_key() {
        let prompt = build_summary_prompt("hi", None);
        for key in [
            "patient_overview",
            "key_findings",
            "differentials",
            "decisions",
            "next_steps",
            "followups",
            "red_flags",
        ] {
            assert!(prompt.contains(&format!("- {} (", key)), "missing key {key}");
        }
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(
            build_summary_prompt("same", Some(&jane())),
            build_summary_prompt("same", Some(&jane()))
        );
    }
}
