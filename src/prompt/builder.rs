// src/prompt/builder.rs

use crate::persona::PersonaId;
use crate::questionnaire::{Dimension, QuestionnaireAnswers};

use super::guidance::{
    AVOID, COMMUNICATION_STYLE, SAFETY_BOUNDARIES, TRUST_BUILDING, TRUST_REMINDER, ULTIMATE_GOAL,
};

const SECTION_BREAK: &str = "\n\n---\n\n";

/// Label of the free-text concerns line
pub const CONCERNS_LABEL: &str = "ما يقلقه";

/// Heading of the person-information block
pub const PERSON_HEADING: &str = "## معلومات الشخص الذي أمامك:";

/// Builds the complete instruction for a chat session: persona template,
/// the person-information block, then the shared closing guidance.
///
/// Unknown answer codes are echoed verbatim, so this never fails.
pub fn assemble(answers: &QuestionnaireAnswers, persona: PersonaId) -> String {
    let mut prompt = String::new();

    // 1. Persona template
    prompt.push_str(persona.template().trim_end());
    prompt.push_str("\n\n");
    prompt.push_str(SAFETY_BOUNDARIES);
    prompt.push_str("\n\n");

    // 2. Who the model is talking to
    prompt.push_str(&person_block(answers));
    prompt.push_str("\n\n");
    prompt.push_str(TRUST_REMINDER);

    // 3. Shared guidance
    prompt.push_str(SECTION_BREAK);
    prompt.push_str(COMMUNICATION_STYLE);
    prompt.push_str(SECTION_BREAK);
    prompt.push_str(TRUST_BUILDING);
    prompt.push_str(SECTION_BREAK);
    prompt.push_str(AVOID);
    prompt.push_str(SECTION_BREAK);
    prompt.push_str(ULTIMATE_GOAL);

    prompt
}

/// One line per questionnaire dimension in fixed order, plus concerns when given
pub fn person_block(answers: &QuestionnaireAnswers) -> String {
    let mut block = String::from(PERSON_HEADING);
    for dimension in Dimension::ALL {
        let clause = dimension.resolve(answers.code(dimension));
        block.push_str(&format!("\n- **{}**: {}", dimension.label(), clause));
    }
    if let Some(concerns) = answers.concerns() {
        block.push_str(&format!("\n- **{}**: {}", CONCERNS_LABEL, concerns));
    }
    block
}
