//! Directory tree rendering

use std::io;
use std::path::{Path, PathBuf};

use crate::ignore::IgnoreFilter;

struct Entry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// Renders a directory tree as connector-annotated text.
pub struct TreeRenderer {
    filter: IgnoreFilter,
}

impl TreeRenderer {
    pub fn new(filter: IgnoreFilter) -> Self {
        Self { filter }
    }

    /// Render the subtree rooted at `path`, one entry per line, each line
    /// starting with `prefix`.
    ///
    /// The root itself is not printed. A listing that fails with
    /// `PermissionDenied` renders as empty text; any other I/O error aborts
    /// the render.
    pub fn render(&self, path: &Path, prefix: &str) -> io::Result<String> {
        let entries = match self.list_entries(path) {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                return Ok(String::new());
            }
            Err(e) => return Err(e),
        };

        let mut tree = String::new();
        for (index, entry) in entries.iter().enumerate() {
            let is_last = index == entries.len() - 1;
            let connector = if is_last { "└── " } else { "├── " };

            tree.push_str(prefix);
            tree.push_str(connector);
            tree.push_str(&entry.name);
            tree.push('\n');

            if entry.is_dir {
                let child_prefix = if is_last {
                    format!("{}    ", prefix)
                } else {
                    format!("{}│   ", prefix)
                };
                tree.push_str(&self.render(&entry.path, &child_prefix)?);
            }
        }

        Ok(tree)
    }

    /// List `path` filtered and in visitation order: directories before
    /// files, each group sorted by name.
    fn list_entries(&self, path: &Path) -> io::Result<Vec<Entry>> {
        let mut dirs = Vec::new();
        let mut files = Vec::new();

        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if self.filter.is_excluded(&name) {
                continue;
            }

            let path = entry.path();
            // Kind is resolved through symlinks, so a linked directory is
            // walked like a real one. Entries that are neither file nor
            // directory (broken links, sockets) are dropped.
            if path.is_dir() {
                dirs.push(Entry {
                    name,
                    path,
                    is_dir: true,
                });
            } else if path.is_file() {
                files.push(Entry {
                    name,
                    path,
                    is_dir: false,
                });
            }
        }

        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        files.sort_by(|a, b| a.name.cmp(&b.name));

        dirs.extend(files);
        Ok(dirs)
    }
}
