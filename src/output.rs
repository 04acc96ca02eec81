//! Output format selection and file writing

use std::io;
use std::path::Path;

/// Target file format, chosen by the output filename's extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Markdown,
}

impl OutputFormat {
    /// Markdown for an `md` or `markdown` extension (any case), plain text
    /// for everything else, including no extension at all.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown") => {
                OutputFormat::Markdown
            }
            _ => OutputFormat::Text,
        }
    }

    pub fn is_markdown(self) -> bool {
        matches!(self, OutputFormat::Markdown)
    }
}

/// Wrap rendered tree text in a fenced code block tagged `text`.
///
/// The closing fence has no trailing newline.
pub fn wrap_markdown(tree: &str) -> String {
    format!("```text\n{}```", tree)
}

/// Write the final text, replacing any existing file.
pub fn write_output(path: &Path, content: &str) -> io::Result<()> {
    std::fs::write(path, content)
}
