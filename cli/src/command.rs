//! REPL input parsing.

/// A line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Nothing but whitespace.
    Empty,
    /// A slash command.
    Command(Command),
    /// A question for the document.
    Question(String),
}

/// Slash commands understood by the REPL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Leave the session.
    Quit,
    /// Show previous questions and answers.
    History,
    /// List the answer languages.
    Languages,
    /// Show (`None`) or change the answer language.
    Language(Option<String>),
    /// Show (`None`) or change the answer length.
    Length(Option<String>),
    /// Show (`None`) or switch speech: `Some(true)` for on, `Some(false)` for off.
    Speech(Option<bool>),
    /// `/speech` with something other than `on` or `off`.
    BadSpeech(String),
    /// Write the latest answer to a text file.
    Save,
    /// List commands.
    Help,
    /// Anything else starting with `/`.
    Unknown(String),
}

/// One-line summary of every command, for `/help` and unknown commands.
pub const HELP: &str = "/quit, /history, /languages, /language <name>, /length <short|detailed>, /speech <on|off>, /save, /help";

impl Input {
    /// Classify a raw input line.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        if !line.starts_with('/') {
            return Self::Question(line.to_string());
        }

        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let argument = Some(rest.trim())
            .filter(|rest| !rest.is_empty())
            .map(str::to_string);
        let command = match name {
            "/quit" | "/exit" | "/q" => Command::Quit,
            "/history" => Command::History,
            "/languages" => Command::Languages,
            "/language" | "/lang" => Command::Language(argument),
            "/length" => Command::Length(argument),
            "/speech" => match argument.as_deref() {
                None => Command::Speech(None),
                Some("on") => Command::Speech(Some(true)),
                Some("off") => Command::Speech(Some(false)),
                Some(other) => Command::BadSpeech(other.to_string()),
            },
            "/save" => Command::Save,
            "/help" | "/?" => Command::Help,
            other => Command::Unknown(other.to_string()),
        };
        Self::Command(command)
    }
}
