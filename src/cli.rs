use std::{
    fs::File,
    io::{self, BufRead, BufReader, IsTerminal},
    path::{Path, PathBuf},
    sync::{atomic::AtomicBool, Arc, Mutex},
};

use anyhow::{bail, Context};
use clap::Parser;
use pmenu_core::{MenuOptions, DEFAULT_PROMPT, MAX_QUERY_LENGTH};
use pmenu_tui::TuiSession;
use signal_hook::consts::{SIGINT, SIGTERM};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit code when the user cancels the menu.
const EXIT_CANCELLED: i32 = 1;

#[derive(Parser)]
#[command(
    version,
    about = "Sleek dmenu alternative for the terminal",
    long_about = "Sleek dmenu alternative for the terminal

Reads one candidate per line, lets you filter them by typing and prints
the chosen line. Exits with 1 when the menu is cancelled.

Examples:
  ls | pmenu                  (pick a file name)
  pmenu hosts.txt             (pick a line from a file)
  git branch | pmenu -q feat  (start with a query)
  pmenu -p '> ' -l 20 list    (custom prompt, short queries)
"
)]
struct Cli {
    /// read candidates from this file instead of stdin
    file: Option<PathBuf>,

    /// label shown in front of the query
    #[arg(short, long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// query to start with
    #[arg(short, long, default_value = "")]
    query: String,

    /// maximum query length in characters
    #[arg(short = 'l', long, default_value_t = MAX_QUERY_LENGTH)]
    max_length: usize,

    /// write logs to this file (filter with PMENU_LOG, default "info")
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn options(&self) -> MenuOptions {
        MenuOptions::default()
            .with_prompt(self.prompt.as_str())
            .with_max_query_length(self.max_length)
            .with_initial_query(self.query.as_str())
    }
}

pub fn run() -> anyhow::Result<i32> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let candidates = match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open '{}'", path.display()))?;
            read_candidates(BufReader::new(file))
        }
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                bail!("no candidates: pipe lines on stdin or pass a file");
            }
            read_candidates(stdin.lock())
        }
    }
    .context("failed to read candidates")?;
    debug!(count = candidates.len(), "candidates loaded");

    let interrupt = install_interrupt_flag().context("failed to install signal handlers")?;
    let selection = {
        let mut session = TuiSession::acquire()?.with_interrupt_flag(interrupt);
        pmenu_tui::run_menu_on(&candidates, &cli.options(), &mut session)?
    };

    match selection {
        Some(line) => {
            println!("{line}");
            Ok(0)
        }
        None => Ok(EXIT_CANCELLED),
    }
}

/// Routes SIGINT and SIGTERM into a flag the menu polls. The handlers stay
/// installed for the rest of the process, which ends right after the menu.
fn install_interrupt_flag() -> io::Result<Arc<AtomicBool>> {
    let flag = Arc::new(AtomicBool::new(false));
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, Arc::clone(&flag))?;
    }
    Ok(flag)
}

/// One candidate per line; CRLF endings are accepted and blank lines skipped.
fn read_candidates(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut candidates = Vec::new();
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        if !line.is_empty() {
            candidates.push(line);
        }
    }
    Ok(candidates)
}

fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file '{}'", path.display()))?;
    let filter = EnvFilter::try_from_env("PMENU_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["pmenu"]).unwrap();

        assert!(cli.file.is_none());
        assert!(cli.log_file.is_none());
        assert_eq!(cli.options(), MenuOptions::default());
    }

    #[test]
    fn test_file_and_flags() {
        let args = ["pmenu", "-p", "> ", "-q", "feat", "-l", "20", "list.txt"];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.file, Some(PathBuf::from("list.txt")));
        assert_eq!(
            cli.options(),
            MenuOptions::default()
                .with_prompt("> ")
                .with_max_query_length(20)
                .with_initial_query("feat")
        );
    }

    #[test]
    fn test_long_flags() {
        let args = [
            "pmenu",
            "--prompt",
            "pick: ",
            "--query",
            "x",
            "--max-length",
            "5",
            "--log-file",
            "/tmp/pmenu.log",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        assert_eq!(cli.prompt, "pick: ");
        assert_eq!(cli.query, "x");
        assert_eq!(cli.max_length, 5);
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/pmenu.log")));
    }

    #[test]
    fn test_invalid_max_length() {
        assert!(Cli::try_parse_from(["pmenu", "-l", "many"]).is_err());
    }

    #[test]
    fn test_read_candidates() {
        let input = "alpha\r\nbeta\n\n  \ngamma";
        let candidates = read_candidates(input.as_bytes()).unwrap();

        assert_eq!(candidates, vec!["alpha", "beta", "  ", "gamma"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_sigterm_raises_interrupt_flag() {
        use std::sync::atomic::Ordering;

        let flag = install_interrupt_flag().unwrap();
        assert!(!flag.load(Ordering::SeqCst));

        signal_hook::low_level::raise(SIGTERM).unwrap();
        assert!(flag.load(Ordering::SeqCst));
    }

    #[test]
    fn test_read_candidates_empty() {
        assert!(read_candidates(&b""[..]).unwrap().is_empty());
    }
}
