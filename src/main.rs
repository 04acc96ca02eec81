//! CLI entry point for treescribe

use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use treescribe::{
    IgnoreFilter, LARGE_DIR_THRESHOLD, OutputFormat, TreeRenderer, detect_large_dirs,
    wrap_markdown, write_output,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treescribe")]
#[command(about = "Write the current directory's tree to a text or Markdown file")]
#[command(version)]
struct Args {
    /// Output file; an .md or .markdown name wraps the tree in a fenced code block
    #[arg(default_value = "project-structure.txt")]
    output: PathBuf,

    /// Assume yes for every confirmation prompt
    #[arg(short = 'y', long = "yes")]
    yes: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

/// Ask a Y/n question on stdout and read one line of reply.
///
/// Only an explicit `n` declines; any other reply, including an empty one or
/// a closed stdin, accepts.
fn prompt_yes_no(question: &str) -> bool {
    print!("{}", question);
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return true;
    }
    !answer.trim().eq_ignore_ascii_case("n")
}

/// Print the success message, highlighting the output path when color is on.
fn report_saved(path: &Path, use_color: bool) -> io::Result<()> {
    let choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    write!(stdout, "Project tree saved to ")?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(stdout, "{}", path.display())?;
    stdout.reset()?;
    writeln!(stdout)
}

fn main() {
    let args = Args::parse();
    let use_color = should_use_color(args.color);
    let format = OutputFormat::from_path(&args.output);
    let root = Path::new(".");

    let mut filter = match IgnoreFilter::load(root) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("treescribe: failed to read ignore file: {}", e);
            process::exit(1);
        }
    };

    // With no ignore guidance at all, offer to skip oversized directories
    // before walking them.
    if filter.is_empty() {
        let large = match detect_large_dirs(root, LARGE_DIR_THRESHOLD) {
            Ok(large) => large,
            Err(e) => {
                eprintln!("treescribe: failed to scan for large directories: {}", e);
                process::exit(1);
            }
        };
        if !large.is_empty() {
            println!("Detected large directories: {}", large.join(", "));
            if args.yes || prompt_yes_no("Exclude these? (Y/n): ") {
                filter.extend(large);
            }
        }
    }

    if args.output.exists() && !args.yes {
        let question = format!(
            "{} already exists. Overwrite? (Y/n): ",
            args.output.display()
        );
        if !prompt_yes_no(&question) {
            println!("Operation canceled.");
            return;
        }
    }

    let renderer = TreeRenderer::new(filter);
    let tree = match renderer.render(root, "") {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("treescribe: failed to walk directory: {}", e);
            process::exit(1);
        }
    };

    let content = if format.is_markdown() {
        wrap_markdown(&tree)
    } else {
        tree
    };

    if let Err(e) = write_output(&args.output, &content) {
        eprintln!(
            "treescribe: failed to write {}: {}",
            args.output.display(),
            e
        );
        process::exit(1);
    }

    if let Err(e) = report_saved(&args.output, use_color) {
        eprintln!("treescribe: error writing output: {}", e);
        process::exit(1);
    }
}
