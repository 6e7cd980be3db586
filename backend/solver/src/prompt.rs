//! Instruction construction for the recognition collaborator.
//!
//! The extraction contract is not enforced on the wire; it travels to the
//! vision model as natural language. These builders are pure string
//! assembly with no side effects.

use signsolve_extraction::Question;

/// Build the task instructions for a classified question.
pub fn build_instructions(question_text: &str, question: &Question) -> String {
    let question_text = question_text.trim();
    match question {
        Question::Blank { prefix, suffix } => format!(
            "You are an expert captcha solver reading business signboards. \
             The question is: \"{question_text}\". The word 빈칸 marks a blank to fill in. \
             Read every full string of text visible in the image and find the one that {}. \
             Respond with exactly the characters that stand in the blank's place and nothing \
             else: no explanation, no quotes, no punctuation. The answer may be a single \
             letter, a digit, or a short fragment rather than a whole word. For example, if \
             the question is \"빈칸나은행\" and the image shows \"하나은행\", respond with \"하\".",
            affix_clause(prefix, suffix)
        ),
        Question::FullName => format!(
            "You are an expert captcha solver reading business signboards. \
             The question is: \"{question_text}\". Respond with exactly the complete name of \
             the subject the question asks about, as written in the image, and nothing else: \
             no explanation, no quotes, no punctuation."
        ),
    }
}

fn affix_clause(prefix: &str, suffix: &str) -> String {
    match (prefix.is_empty(), suffix.is_empty()) {
        (false, false) => format!(
            "begins with \"{prefix}\" and ends with \"{suffix}\" with at least one character in between"
        ),
        (false, true) => format!("begins with \"{prefix}\" followed by at least one more character"),
        (true, false) => format!("ends with \"{suffix}\" preceded by at least one more character"),
        // Degenerate questions are rejected during validation.
        (true, true) => "matches the question".to_string(),
    }
}
