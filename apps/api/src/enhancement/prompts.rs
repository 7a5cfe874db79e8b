// All LLM prompt text for the enhancement module.
// The reply format here is what `segmenter` parses; keep the section labels in sync.

/// Resume enhancement prompt template.
/// Replace: {job_role}, {resume_text}
pub const RESUME_ENHANCE_PROMPT_TEMPLATE: &str = r#"You are an expert resume writer and ATS (Applicant Tracking System) specialist.

User's target job role: {job_role}

Here is the user's current resume content:
"""
{resume_text}
"""

Your tasks:

1. Rewrite the resume bullet points to be:
   - Action-oriented and impact-driven
   - Clear, concise, and professional
   - Relevant to the job role: {job_role}
   - Quantified where possible (e.g., "improved X by 20%")

2. Create a 3–4 line professional summary tailored to {job_role}.

3. Suggest 8–12 key skills (mix of technical and soft skills) that should appear in the resume for {job_role}.

Return the answer in this exact structure (no extra text):

SUMMARY:
- line 1
- line 2
- line 3

IMPROVED BULLETS:
- bullet 1
- bullet 2
- bullet 3
...

SUGGESTED SKILLS:
- skill 1
- skill 2
- skill 3
...
"#;

/// Appended when the user supplies a job description. Replace: {jd_text}
pub const JD_ADDENDUM_TEMPLATE: &str = r#"

Also consider the following Job Description when tailoring the content:

"""{jd_text}"""
"#;

/// Builds the base enhancement prompt for a resume and target role.
pub fn resume_enhance_prompt(resume_text: &str, job_role: &str) -> String {
    // Role first: resume text may itself contain the literal "{job_role}".
    RESUME_ENHANCE_PROMPT_TEMPLATE
        .replace("{job_role}", job_role)
        .replace("{resume_text}", resume_text)
}

/// Builds the full prompt, appending the JD block when a non-empty JD is given.
pub fn build_prompt(resume_text: &str, job_role: &str, jd_text: Option<&str>) -> String {
    let mut prompt = resume_enhance_prompt(resume_text, job_role);
    if let Some(jd) = jd_text.filter(|jd| !jd.trim().is_empty()) {
        prompt.push_str(&JD_ADDENDUM_TEMPLATE.replace("{jd_text}", jd));
    }
    prompt
}
