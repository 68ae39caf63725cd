//! Menu choice parsing for the interactive session

use crate::error::{Result, SelectorError};

/// Top-level menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainCommand {
    /// Log in with email and password
    Login,
    /// Create a new account
    Register,
    /// Leave the program
    Exit,
}

impl MainCommand {
    /// Parse a menu choice from user input
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim() {
            "1" => Ok(MainCommand::Login),
            "2" => Ok(MainCommand::Register),
            "3" => Ok(MainCommand::Exit),
            other => Err(SelectorError::InvalidChoice(other.to_string())),
        }
    }

    /// Menu shown before each choice
    pub fn menu_text() -> &'static str {
        "\nMenu:\n\
        1. Login\n\
        2. Register\n\
        3. Exit\n"
    }
}

/// Logged-in menu choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Fetch and summarise a ticker
    Analyze,
    /// Browse saved analyses
    ViewSaved,
    /// Return to the top-level menu
    Logout,
}

impl SessionCommand {
    /// Parse a menu choice from user input
    pub fn parse(input: &str) -> Result<Self> {
        match input.trim() {
            "1" => Ok(SessionCommand::Analyze),
            "2" => Ok(SessionCommand::ViewSaved),
            "3" => Ok(SessionCommand::Logout),
            other => Err(SelectorError::InvalidChoice(other.to_string())),
        }
    }

    /// Menu shown before each choice
    pub fn menu_text() -> &'static str {
        "\nLogged-In Menu:\n\
        1. Analyze Stock Data\n\
        2. View Saved Data\n\
        3. Logout\n"
    }

    /// Get a short description of the command
    pub fn description(&self) -> &'static str {
        match self {
            SessionCommand::Analyze => "Analyze stock data",
            SessionCommand::ViewSaved => "View saved data",
            SessionCommand::Logout => "Logout",
        }
    }
}
