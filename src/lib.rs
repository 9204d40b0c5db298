//! # gemini-chat-export
//!
//! A CLI tool that converts [Google AI Studio](https://aistudio.google.com) /
//! Gemini chat transcript JSON files into local Markdown files.
//!
//! ## What it does
//!
//! Gemini saves each conversation as a JSON document whose messages live under
//! `chunkedPrompt.chunks` as an ordered list of role-tagged text chunks. This
//! tool reads one such file (or every file in a directory), numbers the user
//! prompts, drops the assistant's internal "thought" chunks, and writes the
//! conversation as a `.md` file next to the input.
//!
//! Input files are never modified; the output is a sibling file with the
//! extension replaced by `.md`.
//!
//! ## Usage
//!
//! ```sh
//! # Convert a single saved chat
//! gemini-chat-export my-chat.json
//!
//! # Convert a whole directory, keeping thought blocks
//! gemini-chat-export ~/Downloads/gemini-chats --include-thought
//!
//! # Assistant output only, user prompts reduced to numbered headings
//! gemini-chat-export my-chat.json --exclude-user
//! ```
//!
//! ## Batch behavior
//!
//! Directory runs process files one at a time in name order. A file that
//! fails to parse or write is reported and skipped; the rest of the batch
//! continues, and the exit status reflects whether anything failed.
