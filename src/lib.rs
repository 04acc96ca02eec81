//! Treescribe - a tree command that writes the result to a file

pub mod ignore;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use ignore::{
    GITIGNORE_FILE, IgnoreFilter, LARGE_DIR_THRESHOLD, TREEIGNORE_FILE, detect_large_dirs,
};
pub use output::{OutputFormat, wrap_markdown, write_output};
pub use tree::TreeRenderer;
