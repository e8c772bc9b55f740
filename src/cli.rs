//! Minimal CLI: schema JSON files → one Swift model file per type
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::codegen::FILE_EXTENSION;
use crate::config::{GeneratorConfig, KindSet};
use crate::generate::{Generated, generate};
use crate::schema::SourceDocument;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate RealmSwift + ObjectMapper model classes from GraphQL introspection JSON
#[derive(Parser, Debug)]
#[command(version)]
pub struct CommandLineInterface {
    /// One or more inputs. May be schema directories (their `*.json` entries are read),
    /// literal file paths or quoted glob patterns
    #[arg(long, short, num_args = 1.., required = true)]
    input: Vec<String>,

    /// output directory for the generated `.swift` files (created if missing)
    #[arg(long, short)]
    output: PathBuf,

    /// which declaration kinds to emit
    #[arg(long, value_enum, default_value_t = KindSet::ObjectsAndEnums)]
    kinds: KindSet,

    /// date stamped into file headers, as YYYY-MM-DD (today if omitted)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// list the files that would be written without touching the disk
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// log level for diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.log_level.to_lowercase()));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .without_time()
            .init();
    }

    pub fn run(&self) -> Result<()> {
        // 1) load documents
        let source_paths = resolve_input_paths(&self.input)?;
        let documents = load_documents(&source_paths)?;
        tracing::info!(files = documents.len(), "loaded schema documents");

        // 2) generate
        let date = self.date.unwrap_or_else(|| chrono::Local::now().date_naive());
        let config = GeneratorConfig::new(self.kinds, date);
        let generated = generate(&documents, &config)?;

        // 3) write + report
        if self.dry_run {
            for type_name in generated.classes.keys() {
                println!("{} {}", "would write".yellow(), output_path(&self.output, type_name).display());
            }
        } else {
            let written = write_classes(&self.output, &generated)?;
            println!(
                "{} {} file(s) to {}",
                "✓ wrote".green().bold(),
                written.len(),
                self.output.display()
            );
        }
        for failure in &generated.failures {
            eprintln!(
                "{} {}.{}: {}",
                "✗".red().bold(),
                failure.type_name(),
                failure.field(),
                failure
            );
        }
        if !generated.is_clean() {
            bail!("{} type(s) failed to generate", generated.failures.len());
        }
        Ok(())
    }
}

/// Write every generated class to `<dir>/<TypeName>.swift`, creating `dir` if needed.
pub fn write_classes(dir: &Path, generated: &Generated) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))?;
    let mut written = Vec::with_capacity(generated.classes.len());
    for (type_name, class) in &generated.classes {
        let path = output_path(dir, type_name);
        std::fs::write(&path, &class.source_text)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote class");
        written.push(path);
    }
    Ok(written)
}

pub fn output_path(dir: &Path, type_name: &str) -> PathBuf {
    dir.join(format!("{type_name}.{FILE_EXTENSION}"))
}

/// Read and parse every schema file; any failure aborts with the offending path.
pub fn load_documents(paths: &[PathBuf]) -> Result<Vec<SourceDocument>> {
    paths
        .iter()
        .map(|path| {
            let label = path.to_string_lossy().to_string();
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read source file {label}"))?;
            let json = serde_json::from_str::<serde_json::Value>(&source)
                .with_context(|| format!("failed to parse JSON source file ({label})"))?;
            Ok(SourceDocument::new(label, json))
        })
        .collect()
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Expand inputs into file paths, preserving argument order.
///
/// Directories contribute their `*.json` entries (non-recursive, sorted), glob
/// patterns their matches, anything else is taken literally.
pub fn resolve_input_paths<I>(patterns: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<PathBuf>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if Path::new(pattern).is_dir() {
            let dir_pattern = format!("{}/*.json", glob::Pattern::escape(pattern));
            let mut entries = glob::glob(&dir_pattern)?
                .collect::<Result<Vec<_>, _>>()?;
            entries.retain(|p| p.is_file());
            entries.sort();
            if entries.is_empty() {
                tracing::warn!(dir = %pattern, "input directory has no .json files");
            }
            out.extend(entries);
        } else if has_glob_chars(pattern) {
            let matches = glob::glob(pattern)?.collect::<Result<Vec<_>, _>>()?;
            if matches.is_empty() {
                // Pattern was explicitly a glob but matched nothing -> surface as an error
                bail!("glob pattern matched no files: {pattern}");
            }
            out.extend(matches);
        } else {
            out.push(PathBuf::from(pattern));
        }
    }

    Ok(out)
}
