use crate::console::Console;
use logclient_core::{Clock, FormatTemplate, LogEntry, LogLevel, LogSender, Result};
use std::io::{BufRead, Write};
use tracing::{debug, warn};

/// Entries sent by the Auto option, in order
pub const AUTO_ENTRIES: [(LogLevel, &str); 5] = [
    (LogLevel::Info, "Client connected to the server"),
    (
        LogLevel::Info,
        "Auto log messages: All log messages printed at once",
    ),
    (LogLevel::Error, "Database connection failed."),
    (
        LogLevel::Warning,
        "Low disk space. Consider freeing up space.",
    ),
    (
        LogLevel::Debug,
        "Debugging information: Session ID - 696969",
    ),
];

/// Sent with level Info when the user exits normally
pub const DISCONNECT_MESSAGE: &str = "Client disconnected from the server";

/// Printed when the Noisy option drops the connection
pub const NOISY_NOTICE: &str = "Service abuse prevention system blocked overly noisy client";

/// A validated main-menu selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    Auto,
    Manual,
    Noisy,
    Exit,
    Invalid(String),
}

impl MenuChoice {
    pub fn parse(input: &str) -> Self {
        match input.trim() {
            "1" => MenuChoice::Auto,
            "2" => MenuChoice::Manual,
            "3" => MenuChoice::Noisy,
            "4" => MenuChoice::Exit,
            _ => MenuChoice::Invalid(input.to_string()),
        }
    }
}

/// How the session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Exit option: disconnect entry sent
    Graceful,
    /// Noisy option: connection dropped without further entries
    Noisy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    MenuWait,
    Configuring,
    Sending,
    Terminated(Termination),
}

/// Interactive loop driving one connection to the logging service
///
/// Owns the stream for its whole lifetime and holds the single active
/// template.
pub struct Session<R, W, S: Write, C> {
    console: Console<R, W>,
    sender: LogSender<S>,
    clock: C,
    template: FormatTemplate,
    state: SessionState,
}

impl<R, W, S, C> Session<R, W, S, C>
where
    R: BufRead,
    W: Write,
    S: Write,
    C: Clock,
{
    pub fn new(console: Console<R, W>, sender: LogSender<S>, clock: C) -> Self {
        Self {
            console,
            sender,
            clock,
            template: FormatTemplate::default(),
            state: SessionState::MenuWait,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn template(&self) -> &FormatTemplate {
        &self.template
    }

    /// Lines written to the stream so far
    pub fn sent(&self) -> usize {
        self.sender.sent()
    }

    /// Runs the menu loop until a terminal option is chosen, then releases
    /// the stream
    ///
    /// A console or stream failure ends the session with `Err`; the stream is
    /// dropped along with the session.
    pub fn run(mut self) -> Result<Termination> {
        let termination = loop {
            let choice = self.read_choice()?;
            if let SessionState::Terminated(termination) = self.step(choice)? {
                break termination;
            }
        };

        self.sender.close()?;
        Ok(termination)
    }

    /// Applies one menu selection and returns the resulting state
    pub fn step(&mut self, choice: MenuChoice) -> Result<SessionState> {
        let result = match choice {
            MenuChoice::Auto => self.auto(),
            MenuChoice::Manual => self.manual(),
            MenuChoice::Noisy => self.noisy(),
            MenuChoice::Exit => self.exit(),
            MenuChoice::Invalid(input) => {
                debug!(input = %input, "Invalid menu option");
                self.console
                    .warn("Invalid option. Please try again.")
                    .map_err(Into::into)
            }
        };

        if let Err(ref err) = result {
            warn!(error = %err, "Session fault");
        }
        result.map(|()| self.state)
    }

    fn read_choice(&mut self) -> Result<MenuChoice> {
        self.console.line("")?;
        self.console.line("Menu:")?;
        self.console
            .line("1. Auto (Print all log messages and Configure Log Format)")?;
        self.console
            .line("2. Manual (Enter log message and Configure Log Format)")?;
        self.console.line("3. Noisy (Test noisy logs)")?;
        self.console.line("4. Exit")?;

        match self.console.prompt("Select an option (1-4): ")? {
            Some(input) => Ok(MenuChoice::parse(&input)),
            None => {
                debug!("Console input closed, exiting");
                self.console.line("")?;
                Ok(MenuChoice::Exit)
            }
        }
    }

    /// Lets the user pick a preset; returns false if input was closed
    fn configure(&mut self) -> Result<bool> {
        self.transition(SessionState::Configuring);

        self.console
            .line(format_args!("Current log message format: {}", self.template))?;
        self.console.line("Choose log message format:")?;
        for (idx, preset) in FormatTemplate::PRESETS.iter().enumerate() {
            self.console.line(format_args!("{}. {}", idx + 1, preset))?;
        }

        let Some(input) = self.console.prompt("Select an option (1-3): ")? else {
            return Ok(false);
        };

        match input
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(FormatTemplate::preset)
        {
            Some(template) => {
                debug!(template = %template, "Log format changed");
                self.template = template;
            }
            None => self
                .console
                .warn("Invalid option. Keeping the current log format.")?,
        }
        Ok(true)
    }

    fn auto(&mut self) -> Result<()> {
        if self.configure()? {
            self.transition(SessionState::Sending);
            for (level, message) in AUTO_ENTRIES {
                self.send(&LogEntry::new(level, message))?;
            }
        }
        self.transition(SessionState::MenuWait);
        Ok(())
    }

    fn manual(&mut self) -> Result<()> {
        if self.configure()? {
            self.manual_entry()?;
        }
        self.transition(SessionState::MenuWait);
        Ok(())
    }

    fn manual_entry(&mut self) -> Result<()> {
        let Some(message) = self.console.prompt("Enter log message: ")? else {
            return Ok(());
        };

        self.console.line("Choose log level:")?;
        for level in LogLevel::ALL {
            self.console
                .line(format_args!("{}. {}", level.ordinal(), level))?;
        }

        let Some(token) = self.console.prompt("Select log level: ")? else {
            return Ok(());
        };

        match token.parse::<LogLevel>() {
            Ok(level) => {
                self.transition(SessionState::Sending);
                self.send(&LogEntry::new(level, message))
            }
            Err(err) => {
                warn!(error = %err, "Discarding manual entry");
                self.console
                    .error("Invalid log level. Log message not sent.")?;
                Ok(())
            }
        }
    }

    fn noisy(&mut self) -> Result<()> {
        self.console.line(NOISY_NOTICE)?;
        self.transition(SessionState::Terminated(Termination::Noisy));
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.transition(SessionState::Sending);
        self.send(&LogEntry::new(LogLevel::Info, DISCONNECT_MESSAGE))?;
        self.console.line("Exiting the program.")?;
        self.transition(SessionState::Terminated(Termination::Graceful));
        Ok(())
    }

    fn send(&mut self, entry: &LogEntry) -> Result<()> {
        let now = self.clock.now();
        self.sender.send_entry(entry, &self.template, now)
    }

    fn transition(&mut self, next: SessionState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "Session state change");
            self.state = next;
        }
    }
}
