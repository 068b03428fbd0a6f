// Job description analysis: one model call, parsed into a summary and three skills.
// Downstream failures degrade to fixed fallback content instead of errors.

pub mod analyzer;
pub mod handlers;
pub mod prompts;
