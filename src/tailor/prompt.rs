// src/tailor/prompt.rs
//! Deterministic prompt construction for the tailoring call.
//!
//! The job description and master resume are embedded verbatim, with no
//! truncation, so the outbound payload grows with its inputs.

pub fn build_prompt(
    job_title: &str,
    company_name: &str,
    job_description: &str,
    master_resume: &str,
) -> String {
    format!(
        r#"You are an expert technical recruiter and resume writer.
I am applying for the following role: {job_title} at {company_name}.

Here is the Job Description:
"""
{job_description}
"""

Here is my Master Resume containing all my experience:
"""
{master_resume}
"""

YOUR TASK:
1. Analyze the Job Description to identify the core technical skills and requirements.
2. Select ONLY the most relevant experiences, projects, and skills from my Master Resume.
3. Rewrite the bullet points to naturally highlight the keywords found in the Job Description.
4. Keep the output professional, concise, and impact-driven (use metrics where available).
5. STRICT RULE: Do NOT invent, hallucinate, or exaggerate any experience. Only use facts present in the Master Resume.

Output the final tailored resume strictly in clean Markdown format. Do not include any conversational filler.
"#
    )
}
