use crate::domain::{ExtractedText, ModelPrompt};

const DROPOUT_INSTRUCTION: &str = "\
You are 'DropOut Catcher', an advanced Educational AI system designed to prevent student dropouts.

🎯 Key Features:
- Dropout prediction
- Learning analytics
- Early intervention
- Performance tracking

📌 Use Cases:
- Student retention
- Academic support
- Performance monitoring
- Curriculum optimization

Instructions:
Analyze the student academic data, attendance, and behavioral notes carefully.
Return your prediction in *strict JSON format only*.

The output must strictly follow this JSON structure:
{
  \"at_risk_students\": [\"List of student names who are at risk\"],
  \"risk_factors\": [\"List of reasons (low attendance, poor grades, low engagement, etc.)\"],
  \"intervention_strategies\": [\"List of actionable steps for teachers/parents/admin\"],
  \"success_probability\": 0.xx
}

";

/// Wraps the student record in the fixed instruction. The record is
/// interpolated verbatim.
pub fn build_dropout_prompt(text: &ExtractedText) -> ModelPrompt {
    let prompt_text = format!("{DROPOUT_INSTRUCTION}Student Input:\n{}", text.as_str());
    ModelPrompt::user(prompt_text)
}
