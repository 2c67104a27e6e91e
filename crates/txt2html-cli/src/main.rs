//! txt2html - converts a plain-text notes file into a standalone HTML article.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use txt2html_config::Config;
use txt2html_engine::document::PageOptions;
use txt2html_engine::{FsExternalFiles, convert_page, dump_tree, io as files};

#[derive(Parser, Debug)]
#[command(name = "txt2html")]
#[command(author, version, about = "Convert plain-text notes to an HTML article", long_about = None)]
struct Cli {
    /// Source notes file
    file: PathBuf,

    /// Directory the page is written to (default: from config, else the current directory)
    output_dir: Option<PathBuf>,

    /// Load the distill and MathJax scripts from their CDNs
    #[arg(long)]
    online: bool,

    /// Leave out the appendix even when notes or a bibliography are present
    #[arg(long)]
    no_appendix: bool,

    /// Config file to use instead of ~/.config/txt2html/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the page instead of writing it to a file
    #[arg(long)]
    stdout: bool,

    /// Print the grouped node tree instead of HTML
    #[arg(long)]
    tree: bool,
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli, &mut io::stdout().lock()) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .context("Failed to load config")?;

    match config {
        Some(config) => Ok(config),
        None => {
            log::info!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Flags win over config values, which win over built-in defaults.
fn page_options(cli: &Cli, config: &Config) -> PageOptions {
    let mut options = PageOptions {
        use_local: config.use_local && !cli.online,
        appendix: config.appendix && !cli.no_appendix,
        ..PageOptions::default()
    };
    if let Some(folder) = &config.resource_folder {
        options.resource_folder = folder.clone();
    }
    options
}

fn output_dir(cli: &Cli, config: &Config) -> PathBuf {
    cli.output_dir
        .clone()
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let source = files::read_source(&cli.file)
        .with_context(|| format!("Failed to read {}", cli.file.display()))?;

    if cli.tree {
        let tree = dump_tree(&source)
            .with_context(|| format!("Failed to parse {}", cli.file.display()))?;
        writeln!(out, "{tree}")?;
        return Ok(());
    }

    let config = load_config(cli)?;
    let options = page_options(cli, &config);
    let includes = FsExternalFiles::beside(&cli.file);
    let html = convert_page(&source, &options, &includes)
        .with_context(|| format!("Failed to convert {}", cli.file.display()))?;

    if cli.stdout {
        out.write_all(html.as_bytes())?;
        return Ok(());
    }

    let target = files::output_path(&cli.file, &output_dir(cli, &config));
    write_output(&target, &html)?;
    log::info!("Wrote {}", target.display());
    Ok(())
}

fn write_output(target: &Path, html: &str) -> Result<()> {
    files::write_page(target, html).with_context(|| format!("Failed to write {}", target.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("txt2html").chain(args.iter().copied())).unwrap()
    }

    /// Writes `notes.txt` and an empty config into a fresh directory.
    fn workspace(text: &str) -> (TempDir, String, String) {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("notes.txt");
        fs::write(&source, text).unwrap();
        let config = dir.path().join("config.toml");
        fs::write(&config, "").unwrap();
        (
            dir,
            source.to_string_lossy().into_owned(),
            config.to_string_lossy().into_owned(),
        )
    }

    #[test]
    fn writes_page_next_to_output_dir() {
        let (dir, source, config) = workspace("Title\n\nHello *there*\n");
        let out_dir = dir.path().join("site");
        let args = cli(&[&source, out_dir.to_str().unwrap(), "--config", &config]);

        run(&args, &mut Vec::new()).unwrap();

        let html = fs::read_to_string(out_dir.join("notes.txt.html")).unwrap();
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<i>there</i>"));
        assert!(html.contains("resources/"));
    }

    #[test]
    fn stdout_flag_prints_instead_of_writing() {
        let (dir, source, config) = workspace("\nplain\n");
        let args = cli(&[&source, "--stdout", "--online", "--config", &config]);
        let mut out = Vec::new();

        run(&args, &mut out).unwrap();

        let html = String::from_utf8(out).unwrap();
        assert!(html.contains("<p>plain</p>"));
        assert!(html.contains("https://"));
        assert!(!dir.path().join("notes.txt.html").exists());
    }

    #[test]
    fn tree_flag_prints_the_dump() {
        let (_dir, source, _config) = workspace("|a|\n");
        let mut out = Vec::new();

        run(&cli(&[&source, "--tree"]), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Table\n  TableRow\n    TableCell \"|\"\n      Text \"a\"\n    TableCell \"|\"\n"
        );
    }

    #[test]
    fn flags_override_config() {
        let config = Config {
            use_local: true,
            appendix: true,
            resource_folder: Some(PathBuf::from("/srv/res")),
            output_dir: Some(PathBuf::from("/srv/out")),
        };
        let args = cli(&["notes.txt", "elsewhere", "--online", "--no-appendix"]);

        let options = page_options(&args, &config);

        assert!(!options.use_local);
        assert!(!options.appendix);
        assert_eq!(options.resource_folder, PathBuf::from("/srv/res"));
        assert_eq!(output_dir(&args, &config), PathBuf::from("elsewhere"));
    }

    #[test]
    fn config_fills_in_missing_flags() {
        let config = Config {
            use_local: false,
            appendix: false,
            resource_folder: None,
            output_dir: Some(PathBuf::from("/srv/out")),
        };
        let args = cli(&["notes.txt"]);

        let options = page_options(&args, &config);

        assert!(!options.use_local);
        assert!(!options.appendix);
        assert_eq!(options.resource_folder, PathBuf::from("resources"));
        assert_eq!(output_dir(&args, &config), PathBuf::from("/srv/out"));
        assert_eq!(output_dir(&cli(&["notes.txt"]), &Config::default()), PathBuf::from("."));
    }

    #[test]
    fn conversion_errors_name_the_file() {
        let (_dir, source, config) = workspace("\n**unclosed\n");
        let err = run(&cli(&[&source, "--stdout", "--config", &config]), &mut Vec::new()).unwrap_err();

        assert!(format!("{err:#}").contains("notes.txt"));
    }

    #[test]
    fn missing_source_is_reported() {
        let err = run(&cli(&["/no/such/notes.txt"]), &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("File not found"));
    }
}
