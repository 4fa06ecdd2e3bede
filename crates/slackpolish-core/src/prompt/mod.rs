//! Improve-prompt assembly
//!
//! Joins the style/language instruction, the formatted context block, and
//! the fixed requirements list into the single prompt string handed to the
//! LLM client collaborator. Deterministic string assembly; the HTTP call
//! itself stays outside the core.

use crate::config::Config;

/// Build the full rewrite prompt around an already-formatted context block.
///
/// The block comes from [`crate::context::format_context`] and already
/// contains the user's draft under its label, so nothing is quoted twice.
pub fn build_improve_prompt(config: &Config, prompt_block: &str) -> String {
    let mut prompt = format!(
        "Please improve the following text to be more {} in {}:",
        config.style, config.language
    );

    prompt.push_str("\n\n");
    prompt.push_str(prompt_block);

    prompt.push_str(&format!(
        "\n\nRequirements:\n\
         - Keep the same meaning and intent\n\
         - Make it sound more {}\n\
         - Use {} language\n\
         - Return only the improved text, no explanations",
        config.style, config.language
    ));

    let custom = config.custom_instructions.trim();
    if !custom.is_empty() {
        prompt.push_str(&format!("\n- Additional instructions: {custom}"));
    }

    prompt
}
