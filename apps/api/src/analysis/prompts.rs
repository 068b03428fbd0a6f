// Prompt constants for job description analysis.

/// System prompt. Fixes the persona and the exact JSON shape expected back.
pub const ANALYZE_SYSTEM: &str = r#"You are a career advisor AI. Analyze job descriptions and provide helpful insights for job seekers.

Your response should be in JSON format with exactly this structure:
{
  "summary": "A concise 2-3 sentence summary of the job role and key responsibilities",
  "skills": ["skill1", "skill2", "skill3"]
}

For the skills array, provide exactly 3 of the most important technical or professional skills that a candidate should highlight in their resume for this position. Focus on skills that are explicitly mentioned or strongly implied in the job description."#;

/// Analysis prompt template. Replace `{job_description}` before sending.
pub const ANALYZE_PROMPT_TEMPLATE: &str = r#"Analyze this job description and provide a summary and 3 key skills to highlight:

{job_description}

Please respond with valid JSON only."#;

pub const MALFORMED_FALLBACK_SUMMARY: &str = "This position offers an exciting opportunity to contribute to a dynamic team and grow your career in a challenging environment.";
pub const MALFORMED_FALLBACK_SKILLS: [&str; 3] = ["Communication", "Problem Solving", "Teamwork"];

pub const UNAVAILABLE_FALLBACK_SUMMARY: &str =
    "Unable to analyze the job description at this time. Please try again later.";
pub const UNAVAILABLE_FALLBACK_SKILLS: [&str; 3] =
    ["Adaptability", "Critical Thinking", "Technical Skills"];
