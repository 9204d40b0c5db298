use crate::extract;
use crate::transcript::Transcript;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Conversion flags shared by every file in a run.
/// This decouples the logic from how the arguments were parsed.
#[derive(Clone, Copy, Default)]
pub struct ConvertOptions {
    pub exclude_user: bool,
    pub include_thought: bool,
}

/// Why a single file failed to convert. Each variant is reported with the
/// file name and downgrades that file to "skipped"; the batch continues.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("invalid JSON in {name}: {source}")]
    InvalidInput {
        name: String,
        source: serde_json::Error,
    },

    #[error("could not read/write file {name}: {source}")]
    Io {
        name: String,
        source: std::io::Error,
    },

    #[error("unexpected error processing {name}: {detail}")]
    Unexpected { name: String, detail: String },
}

/// Tally of a batch run.
#[derive(Default)]
pub struct BatchOutcome {
    pub processed: usize,
    pub skipped: usize,
}

/// Convert one transcript JSON file to a sibling `.md` file.
///
/// Prints the per-file progress line before touching the contents, then
/// reads, parses, extracts, and writes. The output path is the input path
/// with its extension swapped for `.md`.
pub fn convert_file(path: &Path, opts: ConvertOptions) -> Result<(), ProcessError> {
    if !path.is_file() {
        return Err(ProcessError::NotAFile(path.to_path_buf()));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| ProcessError::Unexpected {
            name: path.display().to_string(),
            detail: "path has no file name component".into(),
        })?;

    let output_path = path.with_extension("md");
    let output_name = output_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    println!("Processing \"{name}\" -> \"{output_name}\"");

    let content = fs::read_to_string(path).map_err(|source| ProcessError::Io {
        name: name.clone(),
        source,
    })?;

    let transcript: Transcript =
        serde_json::from_str(&content).map_err(|source| ProcessError::InvalidInput {
            name: name.clone(),
            source,
        })?;

    let markdown = extract::extract_markdown(&transcript, opts.exclude_user, opts.include_thought);

    fs::write(&output_path, markdown).map_err(|source| ProcessError::Io { name, source })
}

/// Convert a file, reporting any failure to stderr. Returns whether it
/// succeeded.
pub fn convert_and_report(path: &Path, opts: ConvertOptions) -> bool {
    match convert_file(path, opts) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Error: {e}");
            false
        }
    }
}

/// Convert every path in order, folding per-file outcomes into a tally.
/// A failure on one file has no effect on the rest.
pub fn run_batch(paths: &[PathBuf], opts: ConvertOptions) -> BatchOutcome {
    paths.iter().fold(BatchOutcome::default(), |mut acc, path| {
        if convert_and_report(path, opts) {
            acc.processed += 1;
        } else {
            acc.skipped += 1;
        }
        acc
    })
}

/// List the regular files directly inside `dir`, sorted by file name for a
/// deterministic processing order. Subdirectories and other entry kinds are
/// ignored; no recursion.
pub fn list_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push(entry.path());
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRANSCRIPT: &str = r#"{"chunkedPrompt": {"chunks": [
        {"role": "user", "text": "hi"},
        {"role": "model", "text": "hello"}
    ]}}"#;

    #[test]
    fn writes_markdown_next_to_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("chat.json");
        fs::write(&input, TRANSCRIPT).unwrap();

        convert_file(&input, ConvertOptions::default()).unwrap();

        let output = fs::read_to_string(dir.path().join("chat.md")).unwrap();
        assert_eq!(output, "Prompt 1\n\n---\n\nhi\n\n---\n\nhello");
    }

    #[test]
    fn options_are_forwarded_to_extraction() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("chat.json");
        fs::write(&input, TRANSCRIPT).unwrap();

        let opts = ConvertOptions {
            exclude_user: true,
            include_thought: false,
        };
        convert_file(&input, opts).unwrap();

        let output = fs::read_to_string(dir.path().join("chat.md")).unwrap();
        assert_eq!(output, "Prompt 1\n\n---\n\nhello");
    }

    #[test]
    fn missing_path_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let err =
            convert_file(&dir.path().join("nope.json"), ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, ProcessError::NotAFile(_)));
    }

    #[test]
    fn directory_is_not_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = convert_file(dir.path(), ConvertOptions::default()).unwrap_err();
        assert!(matches!(err, ProcessError::NotAFile(_)));
    }

    #[test]
    fn malformed_json_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.json");
        fs::write(&input, "{not json").unwrap();

        let err = convert_file(&input, ConvertOptions::default()).unwrap_err();
        match err {
            ProcessError::InvalidInput { name, .. } => assert_eq!(name, "broken.json"),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
        assert!(!dir.path().join("broken.md").exists());
    }

    #[test]
    fn batch_isolates_failures() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("a.json");
        let bad = dir.path().join("b.json");
        fs::write(&good, TRANSCRIPT).unwrap();
        fs::write(&bad, "oops").unwrap();

        let outcome = run_batch(&[bad, good], ConvertOptions::default());
        assert_eq!(outcome.processed, 1);
        assert_eq!(outcome.skipped, 1);
        assert!(dir.path().join("a.md").exists());
    }

    #[test]
    fn list_files_sorts_and_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let files = list_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["a.json", "b.json"]);
    }

    #[test]
    fn list_files_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_files(dir.path()).unwrap().is_empty());
    }
}
