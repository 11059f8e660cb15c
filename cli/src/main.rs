//! Command-line study assistant.
//!
//! Answers questions about a single PDF with Gemini and reads the answers aloud.
//!
//! # Usage
//!
//! ```bash
//! # Uses ./converted_text.pdf and GEMINI_API_KEY (also read from .env)
//! cargo run -p mindmap-cli
//!
//! # Another document, answers in Urdu, detailed
//! cargo run -p mindmap-cli -- --document civics.pdf --language Urdu --length detailed
//!
//! # Headless mode (single question, useful for testing/scripting)
//! cargo run -p mindmap-cli -- --prompt "What is federalism?" --quiet
//! ```

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use mindmap_assistant::{Preferences, Reply, Session, Speech};
use mindmap_cli::{Command, Input, command::HELP, format_history, save_answer, save_audio};
use mindmap_core::{AnswerLength, Language};
use mindmap_gemini::{DEFAULT_MODEL, GeminiBackend};
use mindmap_pdf::{DocumentLoader, DocumentText};
use mindmap_speech::GoogleTts;
use tracing_subscriber::EnvFilter;

type StudySession = Session<GeminiBackend, GoogleTts>;

/// Ask questions about a PDF and hear the answers.
#[derive(Parser, Debug)]
#[command(name = "mindmap", version, about)]
struct Args {
    /// PDF the answers are drawn from.
    #[arg(short, long, env = "MINDMAP_DOCUMENT", default_value = "converted_text.pdf")]
    document: PathBuf,

    /// Gemini model to use.
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Custom Gemini API base URL (proxies, sandboxes).
    #[arg(short, long)]
    base_url: Option<String>,

    /// Answer language (see `/languages`). Other names are passed to the model as-is.
    #[arg(short, long, default_value = "English")]
    language: String,

    /// Answer length: short or detailed.
    #[arg(long, default_value = "short")]
    length: AnswerLength,

    /// Directory for the saved answer text and audio.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Do not synthesize speech.
    #[arg(long)]
    no_audio: bool,

    /// Single question to answer (headless mode). Answers and exits.
    #[arg(long)]
    prompt: Option<String>,

    /// Quiet mode. Only output the answer (useful with --prompt for scripting).
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let api_key = std::env::var("GEMINI_API_KEY")
        .context("GEMINI_API_KEY is not set (export it or add it to .env)")?;

    let document = load_document(args.document.clone()).await?;
    let page_count = document.page_count();

    let mut model = GeminiBackend::new(api_key).with_text_model(args.model.as_str());
    if let Some(base_url) = &args.base_url {
        model = model.with_base_url(base_url.as_str());
    }
    let preferences = Preferences {
        length: args.length,
        language: Language::from_display_name(&args.language),
        speak: !args.no_audio,
    };
    let mut session = Session::new(document, model, GoogleTts::new()).with_preferences(preferences);

    if !args.quiet {
        println!("mindmap study assistant");
        println!("Document: {} ({page_count} pages)", args.document.display());
        println!("Model: {}", session.model().text_model());
        print_preferences(session.preferences());
        if args.prompt.is_none() {
            println!("Commands: {HELP}");
        }
        println!();
    }

    // Headless mode: answer one question and exit
    if let Some(ref prompt) = args.prompt {
        return run_headless(&mut session, &args, prompt).await;
    }

    run_repl(&mut session, &args).await
}

/// Extract the document once, off the async runtime.
async fn load_document(path: PathBuf) -> Result<DocumentText> {
    let shown = path.display().to_string();
    let loader = DocumentLoader::new();
    let document = tokio::task::spawn_blocking(move || loader.load_document(&path))
        .await
        .context("document loader stopped unexpectedly")?
        .with_context(|| format!("failed to read document {shown}"))?;

    if document.trim().is_empty() {
        tracing::warn!(
            path = %shown,
            pages = document.page_count(),
            "document has no extractable text; answers will have no context"
        );
    } else if document.blank_pages() > 0 {
        tracing::info!(
            blank_pages = document.blank_pages(),
            "some pages have no extractable text"
        );
    }
    Ok(document)
}

/// Answer a single question and exit (headless mode).
async fn run_headless(session: &mut StudySession, args: &Args, prompt: &str) -> Result<()> {
    match session.ask(prompt).await {
        Ok(reply) => {
            println!("{}", reply.answer());
            deliver_speech(&reply, args).await;
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run_repl(session: &mut StudySession, args: &Args) -> Result<()> {
    println!("Ask a question about the document, or type a command.\n");

    loop {
        let Some(line) = read_line("You> ")? else {
            break;
        };

        let question = match Input::parse(&line) {
            Input::Empty => continue,
            Input::Question(question) => question,
            Input::Command(Command::Quit) => break,
            Input::Command(command) => {
                run_command(session, args, command).await;
                continue;
            }
        };

        println!("\nAnswer>");
        match session.ask(question).await {
            Ok(reply) => {
                println!("{}", reply.answer());
                deliver_speech(&reply, args).await;
            }
            Err(e) => {
                println!("\x1b[31mError: {e}\x1b[0m");
            }
        }
        println!();
    }

    println!("Goodbye!");
    Ok(())
}

async fn run_command(session: &mut StudySession, args: &Args, command: Command) {
    match command {
        Command::Quit => {}
        Command::History => {
            if session.history().is_empty() {
                println!("No questions asked yet.");
            } else {
                print!("{}", format_history(session.history()));
            }
        }
        Command::Languages => {
            let current = &session.preferences().language;
            let languages = Language::ALL;
            for language in &languages {
                let marker = if language == current { '*' } else { ' ' };
                println!(
                    " {marker} {:<8} ({})",
                    language.display_name(),
                    language.synthesis_code()
                );
            }
        }
        Command::Language(None) | Command::Length(None) | Command::Speech(None) => {
            print_preferences(session.preferences());
        }
        Command::Language(Some(name)) => {
            let language = Language::from_display_name(&name);
            if !language.is_known() {
                println!(
                    "\x1b[33m{language} is not in the language list; answers will be spoken in English.\x1b[0m"
                );
            }
            session.set_language(language);
            print_preferences(session.preferences());
        }
        Command::Length(Some(value)) => match value.parse::<AnswerLength>() {
            Ok(length) => {
                session.set_length(length);
                print_preferences(session.preferences());
            }
            Err(e) => println!("\x1b[31m{e}\x1b[0m"),
        },
        Command::Speech(Some(speak)) => {
            session.set_speak(speak);
            print_preferences(session.preferences());
        }
        Command::BadSpeech(value) => {
            println!("\x1b[31mexpected `on` or `off`, got `{value}`\x1b[0m");
        }
        Command::Save => match session.history().latest() {
            Some(record) => match save_answer(&args.output_dir, record.answer()).await {
                Ok(path) => println!("Saved answer to {}", path.display()),
                Err(e) => println!("\x1b[31mCould not save answer: {e}\x1b[0m"),
            },
            None => println!("Nothing to save yet."),
        },
        Command::Help => println!("Commands: {HELP}"),
        Command::Unknown(cmd) => {
            println!("Unknown command: {cmd}");
            println!("Available: {HELP}");
        }
    }
}

fn print_preferences(preferences: &Preferences) {
    println!(
        "Language: {} | Length: {} | Speech: {}",
        preferences.language,
        preferences.length,
        if preferences.speak { "on" } else { "off" }
    );
}

/// Write the answer audio next to the text answer; speech problems are only reported.
async fn deliver_speech(reply: &Reply, args: &Args) {
    match reply.speech() {
        Speech::Skipped => {}
        Speech::Audio(audio) => match save_audio(&args.output_dir, audio).await {
            Ok(path) => {
                if !args.quiet {
                    println!("\x1b[2mAudio: {}\x1b[22m", path.display());
                }
            }
            Err(e) => eprintln!("\x1b[33mCould not save audio: {e}\x1b[0m"),
        },
        Speech::Failed(e) => eprintln!("\x1b[33mSpeech unavailable: {e}\x1b[0m"),
    }
}

/// What a key press does to the line being typed.
#[derive(Debug, PartialEq, Eq)]
enum LineEdit {
    Leave,
    Submit,
    Erase,
    Insert(char),
    Ignore,
}

fn line_edit(key: &KeyEvent) -> LineEdit {
    match key.code {
        KeyCode::Char('c' | 'd') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            LineEdit::Leave
        }
        KeyCode::Esc => LineEdit::Leave,
        KeyCode::Enter => LineEdit::Submit,
        KeyCode::Backspace => LineEdit::Erase,
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => LineEdit::Ignore,
        KeyCode::Char(c) => LineEdit::Insert(c),
        _ => LineEdit::Ignore,
    }
}

/// Read one line in raw mode. `None` when the user leaves with Esc, Ctrl-C or Ctrl-D.
fn read_line(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    enable_raw_mode()?;
    let _guard = RawModeGuard;

    let mut buffer = String::new();
    loop {
        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match line_edit(&key) {
            LineEdit::Leave => {
                print!("\r\n");
                io::stdout().flush().ok();
                return Ok(None);
            }
            LineEdit::Submit => {
                print!("\r\n");
                io::stdout().flush().ok();
                return Ok(Some(buffer));
            }
            LineEdit::Erase => {
                if buffer.pop().is_some() {
                    print!("\u{8} \u{8}");
                    io::stdout().flush().ok();
                }
            }
            LineEdit::Insert(c) => {
                buffer.push(c);
                print!("{c}");
                io::stdout().flush().ok();
            }
            LineEdit::Ignore => {}
        }
    }
}

/// Leaves raw mode however `read_line` returns.
struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
