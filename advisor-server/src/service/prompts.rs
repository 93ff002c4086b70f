//! Prompt templates for the compliance endpoints

/// Company details submitted for classification
#[derive(Debug, Clone)]
pub struct CompanyProfile {
    pub company: String,
    pub industry: String,
    pub revenue: String,
    pub use_of_ai: String,
}

pub const RISK_INSTRUCTIONS: &str =
    "Please analyze the provided company details for EU AI Act compliance.";

pub fn risk_classification(profile: &CompanyProfile) -> String {
    format!(
        "Company Name: {company}\n\
         Industry: {industry}\n\
         Annual Revenue: {revenue}\n\
         Description of AI Use Case: {use_of_ai}\n\
         \n\
         Based on the EU AI Act, please provide the following:\n\
         1. Risk Level: (Unacceptable Risk, High-Risk, Limited Risk, or Minimal Risk)\n\
         2. Reasoning: (Explain why this risk level is assigned based on the AI Act)\n\
         3. Maximum Potential Fine: (State the fine amount/range and the percentage of global annual turnover, \
         e.g., \"up to X million EUR or Y% of global annual turnover, whichever is higher\")\n\
         4. Compliance Measures: (List key compliance measures/obligations relevant to the identified risk level)\n\
         \n\
         Please structure your response clearly using these headings. For example:\n\
         Risk Level: [Your Answer]\n\
         Reasoning: [Your Answer]\n\
         Maximum Potential Fine: [Your Answer]\n\
         Compliance Measures: [Your Answer as a list or paragraph]\n",
        company = profile.company,
        industry = profile.industry,
        revenue = profile.revenue,
        use_of_ai = profile.use_of_ai,
    )
}

pub fn measures_policy(risk_level: &str, restrictiveness: &str) -> String {
    format!(
        "You are an AI Act compliance assistant.\n\
         An AI system has been classified with a Risk Level of: \"{risk_level}\".\n\
         The desired Restrictiveness for the compliance measures or policy is: \"{restrictiveness}\".\n\
         \n\
         Please generate a set of actionable compliance measures or a basic AI policy document outline \
         tailored to this risk level and desired restrictiveness.\n\
         Focus on practical, actionable steps. If generating a policy outline, include key sections \
         relevant to the EU AI Act for the given risk level.\n\
         Present the output clearly. For example, if generating measures, list them. \
         If generating a policy outline, use section headings.\n"
    )
}

pub fn measures_policy_instructions(risk_level: &str, restrictiveness: &str) -> String {
    format!(
        "Generate compliance measures/policy for {} risk with {} restrictiveness.",
        risk_level, restrictiveness
    )
}
