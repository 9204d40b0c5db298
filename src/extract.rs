use crate::transcript::{Role, Transcript};

/// Separator between Markdown segments.
pub const SEPARATOR: &str = "\n\n---\n\n";

/// Render a parsed transcript as a Markdown string.
///
/// Walks the chunks in order. Each user chunk contributes a `Prompt {n}`
/// heading (the counter starts at 1 and advances once per user chunk, whether
/// or not its text is kept), followed by its text unless `exclude_user` is
/// set. Non-user chunks contribute their text directly; chunks flagged as
/// thoughts are dropped entirely unless `include_thought` is set.
///
/// Text passes through verbatim, no Markdown escaping.
pub fn extract_markdown(transcript: &Transcript, exclude_user: bool, include_thought: bool) -> String {
    let mut segments: Vec<String> = Vec::new();
    let mut question = 1u32;

    for chunk in &transcript.chunked_prompt.chunks {
        match chunk.role {
            Role::User => {
                segments.push(format!("Prompt {question}"));
                question += 1;
                if !exclude_user {
                    segments.push(chunk.text.clone());
                }
            }
            Role::Other => {
                if include_thought || !chunk.is_thought {
                    segments.push(chunk.text.clone());
                }
            }
        }
    }

    segments.join(SEPARATOR)
}
