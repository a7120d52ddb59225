use dialoguer::Confirm;
use log::warn;

use super::Interaction;

/// Prints to stdout and asks questions on the terminal
#[derive(Debug, Clone, Default)]
pub struct TerminalInteraction;

impl TerminalInteraction {
    pub fn new() -> Self {
        Self
    }
}

impl Interaction for TerminalInteraction {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }

    fn confirm(&self, question: &str) -> bool {
        match Confirm::new().with_prompt(question).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                // No terminal to ask on; treat as a "no"
                warn!("Could not prompt for confirmation: {}", e);
                false
            }
        }
    }
}

/// Prints to stdout and answers every question with "no"
#[derive(Debug, Clone, Default)]
pub struct AssumeNo;

impl Interaction for AssumeNo {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }

    fn confirm(&self, _question: &str) -> bool {
        false
    }
}

/// Prints to stdout and answers every question with "yes"
#[derive(Debug, Clone, Default)]
pub struct AssumeYes;

impl Interaction for AssumeYes {
    fn notify(&self, message: &str) {
        println!("{}", message);
    }

    fn confirm(&self, _question: &str) -> bool {
        true
    }
}
