// Prompt templates for the career advisor.
// Placeholders are replaced verbatim; inputs are never rewritten.

/// Career advice prompt. Replace: {major}, {skills}, {work_environment},
/// {motivation}, {core_interest}, {problem_solving}, {personality}, {json_only}
pub const CAREER_ADVICE_PROMPT_TEMPLATE: &str = r#"You are an AI career advisor. Based on the comprehensive profile below, suggest EXACTLY 4 career paths that best match this person:

STUDENT PROFILE:
- Major: {major}
- Top Skills: {skills}
- Preferred Work Environment: {work_environment}
- Career Motivation: {motivation}
- Core Interest: {core_interest}
- Problem-Solving Style: {problem_solving}
- Personality Type: {personality}

IMPORTANT: You must provide EXACTLY 4 career recommendations ranked from best to good fit.

For each career path, provide:
1. A specific career title that aligns with their profile
2. Compelling reasons why this career fits them
3. Required skills to succeed in this field
4. Practical next steps to pursue this career
5. Career outlook and growth potential

Answer in a concise, friendly, encouraging tone using English.

Respond in JSON with this EXACT structure (4 entries in "careerPaths"):
{
  "careerPaths": [
    {
      "title": "Best Match Career Title",
      "description": "why this career fits the person based on their profile",
      "requiredSkills": ["skill1", "skill2", "skill3", "skill4", "skill5"],
      "nextSteps": ["actionable step1", "actionable step2", "actionable step3"],
      "outlook": "career outlook, growth potential, and market demand"
    }
  ],
  "generalAdvice": "overall career advice, development tips, and encouragement tailored to their profile"
}

{json_only}"#;

/// Market analysis prompt. Replace: {career_path}, {json_only}
pub const MARKET_ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are a labor market analyst. Analyze the current job market for the position '{career_path}'. Provide insights on: 1) The growth potential of this field in Vietnam. 2) Key required skills. 3) Average salary range for new graduates. 4) Top companies in this field. Answer in a clear, professional tone and use English.

Respond in JSON with this EXACT structure:
{
  "growthPotential": "detailed growth analysis",
  "requiredSkills": ["skill 1", "skill 2", "skill 3", "skill 4", "skill 5"],
  "salaryRange": {
    "junior": "salary range for junior level",
    "midLevel": "salary range for mid level",
    "senior": "salary range for senior level",
    "techLead": "salary range for tech lead level"
  },
  "topCompanies": ["company 1", "company 2", "company 3", "company 4"]
}

{json_only}"#;
