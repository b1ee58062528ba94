//! Prompts for the LLM-backed analysis strategy.

pub const ANALYZE_SYSTEM: &str = "You are an expert HR resume analyzer. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Placeholders: {role}, {major}, {minor}, {resume_text}.
pub const ANALYZE_PROMPT_TEMPLATE: &str = "\
Analyze this resume for the role of {role}.

Core skills for the role: {major}
Supporting skills for the role: {minor}

Resume:
{resume_text}

Return a JSON object with exactly these fields:
- \"found_major\": core skills from the list above that the resume demonstrates
- \"found_minor\": supporting skills from the list above that the resume demonstrates
- \"missing_skills\": listed skills the resume does not demonstrate
- \"score\": overall match percentage, a number between 0 and 100

Only use skill tokens from the two lists. Do not invent new skills.";
