//! Interactive command handler
//!
//! Menu-driven session over line-oriented input. The session is a small
//! state machine: menu prompt, create flow, list flow, terminated.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::cli::display::{report_send, write_history};
use crate::error::{AppError, AppResult};
use crate::models::ChannelType;
use crate::repositories::NotificationStore;
use crate::services::NotificationService;

/// Menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    List,
    Quit,
}

impl FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "create" => Ok(MenuChoice::Create),
            "2" | "list" => Ok(MenuChoice::List),
            "3" | "quit" => Ok(MenuChoice::Quit),
            _ => Err(AppError::UnrecognizedMenuChoice {
                value: s.trim().to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    MenuPrompt,
    CreateFlow,
    ListFlow,
    Terminated,
}

/// Handler for the interactive command
pub struct InteractiveCommandHandler<S: NotificationStore> {
    service: NotificationService<S>,
}

impl<S: NotificationStore> InteractiveCommandHandler<S> {
    pub fn new(service: NotificationService<S>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &NotificationService<S> {
        &self.service
    }

    /// Run the session until the user quits or input ends
    ///
    /// # Errors
    /// Only I/O failures end the session with an error; validation and
    /// menu errors are printed and the loop continues.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> AppResult<()> {
        writeln!(out, "=== Notification Simulator ===")?;

        let mut state = SessionState::MenuPrompt;
        loop {
            state = match state {
                SessionState::MenuPrompt => self.menu_prompt(input, out)?,
                SessionState::CreateFlow => self.create_flow(input, out)?,
                SessionState::ListFlow => self.list_flow(out)?,
                SessionState::Terminated => break,
            };
        }

        tracing::debug!(archived = self.service.store().len(), "Interactive session ended");
        Ok(())
    }

    fn menu_prompt<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> AppResult<SessionState> {
        writeln!(out)?;
        writeln!(out, "--- Menu ---")?;
        writeln!(out, "1. Create a notification")?;
        writeln!(out, "2. View history")?;
        writeln!(out, "3. Quit")?;

        let Some(line) = prompt(input, out, "Your choice: ")? else {
            return farewell(out);
        };

        match line.parse::<MenuChoice>() {
            Ok(MenuChoice::Create) => Ok(SessionState::CreateFlow),
            Ok(MenuChoice::List) => Ok(SessionState::ListFlow),
            Ok(MenuChoice::Quit) => farewell(out),
            Err(e) => {
                tracing::debug!(error = %e, "Menu choice rejected");
                writeln!(out, "❌ Invalid choice, try again.")?;
                Ok(SessionState::MenuPrompt)
            }
        }
    }

    fn create_flow<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> AppResult<SessionState> {
        let Some(kind) = prompt(input, out, "Choose the type (sms/email/push): ")? else {
            return farewell(out);
        };

        let channel = match kind.parse::<ChannelType>() {
            Ok(channel) => channel,
            Err(e) => {
                writeln!(out, "❌ {}", e)?;
                return Ok(SessionState::MenuPrompt);
            }
        };

        let target = if channel.requires_target() {
            match prompt(input, out, "Enter the recipient: ")? {
                Some(target) => Some(target),
                None => return farewell(out),
            }
        } else {
            None
        };

        let Some(message) = prompt(input, out, "Enter the message: ")? else {
            return farewell(out);
        };

        let result = self.service.send(channel, target.as_deref(), &message);
        if report_send(out, channel.label(), result)? {
            writeln!(out, "✅ Notification sent and archived.")?;
        }

        Ok(SessionState::MenuPrompt)
    }

    fn list_flow<W: Write>(&self, out: &mut W) -> AppResult<SessionState> {
        let archived = self.service.history()?;
        write_history(out, &archived)?;
        Ok(SessionState::MenuPrompt)
    }
}

/// Print a prompt and read one trimmed line
///
/// # Returns
/// `None` once input is exhausted
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> AppResult<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    // Bytes that are not UTF-8 become U+FFFD instead of failing the read
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}

fn farewell<W: Write>(out: &mut W) -> AppResult<SessionState> {
    writeln!(out, "👋 Goodbye!")?;
    Ok(SessionState::Terminated)
}
