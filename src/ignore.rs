//! Exclusion pattern loading and matching

use std::io;
use std::path::Path;

use glob::Pattern;

/// Ignore file consulted first.
pub const TREEIGNORE_FILE: &str = ".treeignore";

/// Fallback ignore file, consulted only when the primary yields no patterns.
pub const GITIGNORE_FILE: &str = ".gitignore";

/// Directories with more than this many immediate entries are offered for
/// exclusion when no ignore file provided any patterns.
pub const LARGE_DIR_THRESHOLD: usize = 100;

/// A single exclusion pattern.
///
/// The raw string is kept alongside its compiled form: a string that is not
/// valid glob syntax still excludes an exactly-matching name.
#[derive(Debug, Clone)]
struct IgnorePattern {
    raw: String,
    compiled: Option<Pattern>,
}

impl IgnorePattern {
    fn new(raw: String) -> Self {
        let compiled = Pattern::new(&raw).ok();
        Self { raw, compiled }
    }

    fn matches(&self, name: &str) -> bool {
        if name == self.raw {
            return true;
        }
        self.compiled.as_ref().is_some_and(|p| p.matches(name))
    }
}

/// An ordered set of exclusion patterns from a single source.
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreFilter {
    /// Load the exclusion patterns for `dir`.
    ///
    /// `.treeignore` takes priority; `.gitignore` is consulted only when the
    /// primary file is missing or yields zero patterns. The two files are
    /// never merged. A missing file counts as zero patterns; any other read
    /// error is returned to the caller.
    pub fn load(dir: &Path) -> io::Result<Self> {
        let patterns = read_patterns(&dir.join(TREEIGNORE_FILE))?;
        if !patterns.is_empty() {
            return Ok(Self::from_patterns(patterns));
        }
        let patterns = read_patterns(&dir.join(GITIGNORE_FILE))?;
        Ok(Self::from_patterns(patterns))
    }

    /// Build a filter from ready-made pattern strings.
    pub fn from_patterns<I>(patterns: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            patterns: patterns.into_iter().map(IgnorePattern::new).collect(),
        }
    }

    /// Append more patterns, keeping the existing ones.
    pub fn extend<I>(&mut self, patterns: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.patterns
            .extend(patterns.into_iter().map(IgnorePattern::new));
    }

    /// True if the bare entry name matches any pattern.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }
}

/// Read one ignore file into pattern strings, in file order.
///
/// Lines are trimmed; blank lines and `#` comments are skipped. A missing
/// file yields an empty list.
fn read_patterns(path: &Path) -> io::Result<Vec<String>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect())
}

/// Names of immediate subdirectories of `dir` holding more than `threshold`
/// entries, sorted by name.
///
/// A subdirectory that cannot be listed due to permissions counts as not
/// large.
pub fn detect_large_dirs(dir: &Path, threshold: usize) -> io::Result<Vec<String>> {
    let mut large = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let count = match std::fs::read_dir(&path) {
            Ok(children) => children.count(),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => 0,
            Err(e) => return Err(e),
        };
        if count > threshold {
            large.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    large.sort();
    Ok(large)
}
