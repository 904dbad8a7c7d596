extern crate ansi_term;
extern crate linefeed;

#[macro_use]
mod error;

pub use error::Error;
pub use error::ErrorCode;

use crate::lang::keyword::{self, Table};
use crate::lang::Dialect;
use crate::render::{ansi, html};
use ansi_term::Style;
use clap::{Parser, ValueEnum};
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Terminal};
use std::io::Read;
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, PartialEq, Eq, Clone, Copy, ValueEnum)]
pub enum Format {
    Ansi,
    Html,
}

/// Highlight SmileBASIC listings.
#[derive(Debug, Parser)]
#[command(name = "sbhl", version)]
pub struct Options {
    /// Listing dialect: sb3, sb4, sb2 or ptc. Omit to accept every dialect.
    #[arg(short, long)]
    pub dialect: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Ansi)]
    pub format: Format,

    /// Files to highlight; `-` reads stdin. With no files, lines typed
    /// at the prompt are echoed back highlighted.
    pub files: Vec<String>,
}

impl Options {
    pub fn dialect(&self) -> Dialect {
        let tag = self.dialect.as_deref();
        if !Dialect::is_basic_tag(tag) {
            warn!(tag = tag.unwrap_or_default(), "unrecognized dialect, using all");
        }
        Dialect::from_tag(tag)
    }
}

pub fn main() {
    init_logging();
    let options = Options::parse();
    let dialect = options.dialect();
    if options.files.is_empty() {
        if let Err(error) = main_loop(dialect, options.format) {
            eprintln!("{}", error);
            std::process::exit(1);
        }
        return;
    }
    let mut failed = false;
    for filename in options.files.iter() {
        match highlight_file(filename, dialect, options.format) {
            Ok(s) => print!("{}", s),
            Err(error) => {
                failed = true;
                eprintln!("{}", Style::new().bold().paint(error.to_string()));
            }
        }
    }
    if failed {
        std::process::exit(1);
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SBHL_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

pub fn render(text: &str, dialect: Dialect, format: Format) -> String {
    match format {
        Format::Ansi => ansi::highlight(text, dialect),
        Format::Html => html::highlight(text, dialect),
    }
}

pub fn highlight_file(filename: &str, dialect: Dialect, format: Format) -> Result<String, Error> {
    debug!(filename, %dialect, ?format, "highlighting file");
    let text = load(filename)?;
    Ok(render(&text, dialect, format))
}

fn load(filename: &str) -> Result<String, Error> {
    if filename.is_empty() {
        return Err(error!(BadFileName));
    }
    if filename == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    if std::path::Path::new(filename).is_dir() {
        return Err(error!(BadFileMode; filename));
    }
    std::fs::read_to_string(filename).map_err(|error| Error::io(&error, filename))
}

fn main_loop(dialect: Dialect, format: Format) -> std::io::Result<()> {
    let command = Interface::new("SBHL")?;
    command.set_prompt(&format!("{}> ", dialect))?;
    command.set_completer(Arc::new(WordCompleter::new(dialect)));
    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        command.write_fmt(format_args!("{}\n", render(&string, dialect, format)))?;
        command.add_history_unique(string);
    }
    Ok(())
}

/// Completes reserved words and built-ins of the active dialect.
struct WordCompleter {
    words: Vec<&'static str>,
}

impl WordCompleter {
    fn new(dialect: Dialect) -> WordCompleter {
        let mut words: Vec<&'static str> = [Table::Keyword, Table::ArgKeyword, Table::Builtin]
            .iter()
            .flat_map(|&table| keyword::words(table, dialect))
            .collect();
        words.sort_unstable();
        words.dedup();
        WordCompleter { words }
    }

    fn matches(&self, word: &str) -> Vec<&'static str> {
        let upper = word.to_ascii_uppercase();
        self.words
            .iter()
            .copied()
            .filter(|w| w.starts_with(upper.as_str()))
            .collect()
    }
}

impl<Term: Terminal> Completer<Term> for WordCompleter {
    fn complete(
        &self,
        word: &str,
        _prompter: &Prompter<Term>,
        _start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        if word.is_empty() {
            return None;
        }
        let comp_list: Vec<Completion> = self
            .matches(word)
            .into_iter()
            .map(|w| Completion::simple(w.to_string()))
            .collect();
        if comp_list.is_empty() {
            None
        } else {
            Some(comp_list)
        }
    }
}
