//! Interactive menu session
//!
//! [`StockSelector`] drives the login/register menu and the logged-in menu
//! over any line-based input and output, so a whole session can be scripted
//! in tests. Domain errors are reported as messages and the loop carries on;
//! only failures of the terminal itself are returned.

use super::commands::{MainCommand, SessionCommand};
use super::formatter::CliFormatter;
use crate::api::{MarketDataProvider, validate_ticker};
use crate::auth::{CredentialStore, local_part};
use crate::config::SelectorConfig;
use crate::dates::parse_date;
use crate::engine::StockAnalysisEngine;
use crate::error::SelectorError;
use crate::results::ResultStore;
use crate::storage::{CsvCredentialRepository, CsvResultRepository, entry_name};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// The logged-in user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSession {
    pub email: String,
}

impl UserSession {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Key prefix for this user's saved analyses
    pub fn local_id(&self) -> &str {
        local_part(&self.email)
    }
}

/// Whether the session should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Read one trimmed line after printing `message`; `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> io::Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Interactive stock selection tool
pub struct StockSelector {
    credentials: CredentialStore,
    results: ResultStore,
    engine: StockAnalysisEngine,
    formatter: CliFormatter,
}

impl StockSelector {
    pub fn new(credentials: CredentialStore, results: ResultStore, engine: StockAnalysisEngine) -> Self {
        Self {
            credentials,
            results,
            engine,
            formatter: CliFormatter,
        }
    }

    /// File-backed stores at the configured locations
    pub fn from_config(config: &SelectorConfig, provider: Arc<dyn MarketDataProvider>) -> Self {
        Self::new(
            CredentialStore::new(Box::new(CsvCredentialRepository::new(&config.user_file))),
            ResultStore::new(Box::new(CsvResultRepository::new(&config.results_dir))),
            StockAnalysisEngine::new(provider),
        )
    }

    /// Run the top-level menu until the user exits or input ends
    pub async fn run<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.formatter.banner())?;

        loop {
            write!(out, "{}", MainCommand::menu_text())?;
            let Some(choice) = prompt(input, out, "Enter your choice (1/2/3): ")? else {
                break;
            };

            let flow = match MainCommand::parse(&choice) {
                Ok(MainCommand::Login) => self.login(input, out).await?,
                Ok(MainCommand::Register) => self.register(input, out)?,
                Ok(MainCommand::Exit) => {
                    writeln!(out, "Thank you for using the Stock Selection Tool. Goodbye!")?;
                    return Ok(());
                }
                Err(e) => {
                    writeln!(out, "{e}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        writeln!(out, "\nGoodbye!")?;
        Ok(())
    }

    fn register<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> io::Result<Flow> {
        let Some(email) = prompt(input, out, "Enter your email: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(password) = prompt(input, out, "Enter your password: ")? else {
            return Ok(Flow::Quit);
        };

        match self.credentials.register(&email, &password) {
            Ok(()) => writeln!(out, "Registration successful!")?,
            Err(e) => writeln!(out, "{}", self.formatter.format_error(&e))?,
        }
        Ok(Flow::Continue)
    }

    async fn login<R: BufRead, W: Write>(&self, input: &mut R, out: &mut W) -> io::Result<Flow> {
        let Some(email) = prompt(input, out, "Enter your email: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(password) = prompt(input, out, "Enter your password: ")? else {
            return Ok(Flow::Quit);
        };

        match self.credentials.authenticate(&email, &password) {
            Ok(true) => {
                writeln!(out, "\nLogin successful!\n")?;
                self.logged_in(&UserSession::new(email.trim()), input, out).await
            }
            Ok(false) => {
                writeln!(out, "Invalid email or password.")?;
                Ok(Flow::Continue)
            }
            Err(e) => {
                writeln!(out, "{}", self.formatter.format_error(&e))?;
                Ok(Flow::Continue)
            }
        }
    }

    async fn logged_in<R: BufRead, W: Write>(
        &self,
        session: &UserSession,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<Flow> {
        loop {
            write!(out, "{}", SessionCommand::menu_text())?;
            let Some(choice) = prompt(input, out, "Enter your choice (1/2/3): ")? else {
                return Ok(Flow::Quit);
            };

            let command = SessionCommand::parse(&choice);
            if let Ok(command) = &command {
                tracing::debug!(user = session.local_id(), command = command.description(), "Session command");
            }

            let flow = match command {
                Ok(SessionCommand::Analyze) => self.analyze(session, input, out).await?,
                Ok(SessionCommand::ViewSaved) => self.view_saved(session, input, out)?,
                Ok(SessionCommand::Logout) => {
                    writeln!(out, "Logging out...")?;
                    return Ok(Flow::Continue);
                }
                Err(e) => {
                    writeln!(out, "{e}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    async fn analyze<R: BufRead, W: Write>(
        &self,
        session: &UserSession,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<Flow> {
        let Some(ticker) = prompt(input, out, "Enter stock ticker (e.g., 1155.KL): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(start) = prompt(input, out, "Enter start date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Quit);
        };
        let Some(end) = prompt(input, out, "Enter end date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Quit);
        };

        let (Ok(start), Ok(end)) = (parse_date(&start), parse_date(&end)) else {
            writeln!(out, "Invalid date format. Please use YYYY-MM-DD.")?;
            return Ok(Flow::Continue);
        };

        let result = match self.engine.analyze_ticker(&ticker, start, end).await {
            Ok(result) => result,
            Err(e) => {
                writeln!(out, "{}", self.formatter.format_error(&e))?;
                if matches!(
                    e,
                    SelectorError::NoPriceData { .. } | SelectorError::DataProvider { .. }
                ) {
                    writeln!(
                        out,
                        "Unable to retrieve stock data. Please try again with a different ticker or date range."
                    )?;
                }
                return Ok(Flow::Continue);
            }
        };

        write!(out, "{}", self.formatter.format_analysis(&result))?;

        let Some(answer) = prompt(input, out, "Do you want to save this analysis? (y/n): ")? else {
            return Ok(Flow::Quit);
        };
        if answer.eq_ignore_ascii_case("y") {
            let ticker = validate_ticker(&ticker).unwrap_or(&ticker);
            match self.results.save(Some(&result), session.local_id(), ticker) {
                Ok(Some(key)) => writeln!(out, "Data saved to {}", entry_name(&key))?,
                Ok(None) => writeln!(out, "No data to save.")?,
                Err(e) => writeln!(out, "{}", self.formatter.format_error(&e))?,
            }
        }
        Ok(Flow::Continue)
    }

    fn view_saved<R: BufRead, W: Write>(
        &self,
        session: &UserSession,
        input: &mut R,
        out: &mut W,
    ) -> io::Result<Flow> {
        let names = match self.results.list(session.local_id()) {
            Ok(names) if names.is_empty() => {
                writeln!(out, "No saved data found.")?;
                return Ok(Flow::Continue);
            }
            Ok(names) => names,
            Err(e) => {
                writeln!(out, "{}", self.formatter.format_error(&e))?;
                return Ok(Flow::Continue);
            }
        };

        write!(out, "{}", self.formatter.format_listing(&names))?;
        let Some(selection) = prompt(input, out, "Enter the file number to view: ")? else {
            return Ok(Flow::Quit);
        };

        match self.results.read_selection(session.local_id(), &selection) {
            Ok(file) => writeln!(out, "{}", self.formatter.format_saved(&file))?,
            Err(e) => writeln!(out, "{}", self.formatter.format_error(&e))?,
        }
        Ok(Flow::Continue)
    }
}
