/// Single user-turn prompt; `{resume_text}` is replaced verbatim.
pub const SKILL_EXTRACTION_PROMPT: &str =
    "Extract only technical skills from this resume. Return comma-separated values:\n{resume_text}";

pub fn build_skill_prompt(resume_text: &str) -> String {
    SKILL_EXTRACTION_PROMPT.replace("{resume_text}", resume_text)
}
