use clap::{Parser, Subcommand};
use design_tokens_codegen::{CssDocument, GroupConfig};
use design_tokens_store::{DirectorySource, TokenStore};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "design-tokens")]
#[command(about = "Generate custom properties and utility classes from design tokens")]
#[command(version)]
struct Cli {
    /// Log every collection as it is loaded
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate CSS from a token directory
    Build {
        /// Directory containing the token JSON files
        tokens: PathBuf,

        /// JSON file with propertyGroups / utilityGroups / files overrides
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Stylesheet to insert the generated rules into
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Where to write the result (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load and resolve every token without writing output
    Check {
        /// Directory containing the token JSON files
        tokens: PathBuf,

        /// JSON file with propertyGroups / utilityGroups / files overrides
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Contents of a `--config` file.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BuildConfig {
    #[serde(flatten)]
    groups: GroupConfig,
    /// Collection key → file name, relative to the token directory.
    #[serde(default)]
    files: BTreeMap<String, String>,
}

impl BuildConfig {
    fn source(&self, tokens: &Path) -> DirectorySource {
        self.files
            .iter()
            .fold(DirectorySource::new(tokens), |source, (key, file)| {
                source.with_file(key, file)
            })
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Build {
            tokens,
            config,
            input,
            output,
        } => cmd_build(&tokens, config.as_deref(), input.as_deref(), output.as_deref()),
        Command::Check { tokens, config } => cmd_check(&tokens, config.as_deref()),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn read_text(path: &Path) -> String {
    match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error reading {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

fn read_config(path: Option<&Path>) -> BuildConfig {
    let Some(path) = path else {
        return BuildConfig::default();
    };
    match serde_json::from_str(&read_text(path)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid config {}: {e}", path.display());
            std::process::exit(1);
        }
    }
}

fn cmd_build(tokens: &Path, config: Option<&Path>, input: Option<&Path>, output: Option<&Path>) {
    let config = read_config(config);
    let source = config.source(tokens);
    tracing::debug!(tokens = %tokens.display(), "building stylesheet");

    let mut document = CssDocument::new(input.map(read_text).unwrap_or_default());
    if let Err(e) = design_tokens_codegen::transform(&mut document, &source, &config.groups, None) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let css = document.to_css();
    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &css) {
                eprintln!("Error writing {}: {e}", path.display());
                std::process::exit(1);
            }
            eprintln!("Built: {}", path.display());
        }
        None => print!("{css}"),
    }
}

fn cmd_check(tokens: &Path, config: Option<&Path>) {
    let config = read_config(config);
    let source = config.source(tokens);
    tracing::debug!(tokens = %tokens.display(), "checking tokens");

    let store = match TokenStore::load(&source, config.groups.collection_keys()) {
        Ok(store) => store,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let stylesheet = match design_tokens_codegen::generate(&store, &config.groups) {
        Ok(stylesheet) => stylesheet,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    for line in collection_summary(&store) {
        eprintln!("{line}");
    }
    eprintln!(
        "OK: {} collections, {} custom properties, {} utility classes",
        store.len(),
        stylesheet.root.declarations.len(),
        stylesheet.utilities.len()
    );
}

/// One line per loaded collection: key, title if any, token count.
fn collection_summary(store: &TokenStore) -> Vec<String> {
    store
        .keys()
        .filter_map(|key| store.collection(key).ok())
        .map(|collection| match collection.title() {
            Some(title) => format!("  {} ({title}): {} tokens", collection.key(), collection.len()),
            None => format!("  {}: {} tokens", collection.key(), collection.len()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_config_defaults() {
        let config: BuildConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.groups, GroupConfig::default());
        assert!(config.files.is_empty());
    }

    #[test]
    fn test_config_files_override_source() {
        let config: BuildConfig = serde_json::from_str(
            r#"{ "files": { "colors": "palette.json" }, "utilityGroups": [] }"#,
        )
        .unwrap();
        let source = config.source(Path::new("tokens"));
        assert_eq!(source.path_for("colors"), Path::new("tokens/palette.json"));
        assert_eq!(source.path_for("spacing"), Path::new("tokens/spacing.json"));
        assert!(config.groups.utility_groups.is_empty());
    }

    #[test]
    fn test_build_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("colors.json"),
            r##"{ "items": [{ "name": "Primary", "value": "#fff" }] }"##,
        )
        .unwrap();

        let config: BuildConfig = serde_json::from_str(
            r#"{ "propertyGroups": [{ "key": "colors", "prefix": "color" }], "utilityGroups": [] }"#,
        )
        .unwrap();
        let mut document = CssDocument::new("a{color:var(--color-primary);}");
        design_tokens_codegen::transform(&mut document, &config.source(dir.path()), &config.groups, None)
            .unwrap();

        assert_eq!(
            document.to_css(),
            ":root{--color-primary:#fff;}\na{color:var(--color-primary);}\n"
        );
    }

    #[test]
    fn test_check_summary_lists_collections() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("colors.json"),
            r##"{ "title": "Colors", "description": "Brand palette", "items": [{ "name": "Primary", "value": "#fff" }, { "name": "Ink", "value": "#000" }] }"##,
        )
        .unwrap();
        std::fs::write(
            dir.path().join("spacing.json"),
            r#"{ "items": [{ "name": "S", "value": "4px" }] }"#,
        )
        .unwrap();

        let config = BuildConfig::default();
        let store = TokenStore::load(&config.source(dir.path()), ["colors", "spacing"]).unwrap();

        assert_eq!(
            collection_summary(&store),
            vec!["  colors (Colors): 2 tokens", "  spacing: 1 tokens"]
        );
    }

    #[test]
    fn test_cli_parses() {
        let cli = Cli::try_parse_from(["design-tokens", "build", "tokens", "-o", "out.css"]).unwrap();
        match cli.command {
            Command::Build { tokens, output, .. } => {
                assert_eq!(tokens, PathBuf::from("tokens"));
                assert_eq!(output, Some(PathBuf::from("out.css")));
            }
            Command::Check { .. } => panic!("Expected Build"),
        }
    }
}
