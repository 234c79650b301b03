// Prompt template for résumé feedback.

/// Feedback prompt template. Replace `{resume_text}` and `{job_description}` before sending.
pub const FEEDBACK_PROMPT_TEMPLATE: &str = "
You are an expert AI resume coach. Compare the resume below to the job description and return detailed, actionable feedback to improve the resume for this specific role.

--- Resume Text ---
{resume_text}

--- Job Description ---
{job_description}

Your output should be a clear, concise list of improvements categorized by relevance, skill alignment, formatting, and clarity.
";

/// Fills the template. The job description goes in verbatim, unbounded.
pub fn build_prompt(resume_text: &str, job_description: &str) -> String {
    let (head, rest) = FEEDBACK_PROMPT_TEMPLATE
        .split_once("{resume_text}")
        .unwrap_or((FEEDBACK_PROMPT_TEMPLATE, ""));
    let (middle, tail) = rest.split_once("{job_description}").unwrap_or((rest, ""));
    format!("{head}{resume_text}{middle}{job_description}{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_prompt_places_both_texts() {
        let prompt = build_prompt("Jane Doe\nRust engineer", "Senior Rust role");
        assert!(prompt.starts_with("\nYou are an expert AI resume coach."));
        assert!(prompt.contains("--- Resume Text ---\nJane Doe\nRust engineer\n\n--- Job Description ---\nSenior Rust role\n"));
        assert!(prompt.ends_with("formatting, and clarity.\n"));
    }

    #[test]
    fn test_build_prompt_does_not_expand_placeholders_in_inputs() {
        // A résumé that happens to contain the job placeholder must not receive the job text.
        let prompt = build_prompt("see {job_description}", "JD");
        assert!(prompt.contains("see {job_description}\n"));
        assert_eq!(prompt.matches("JD").count(), 1);
    }
}
