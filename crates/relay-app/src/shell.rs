//! # Shell
//!
//! The line-oriented front end of the relay. [`ShellCommand::parse`] reads
//! one input line and [`Shell::execute`] runs it against a
//! [`RelayClient`], returning the lines to print. The shell does no I/O of
//! its own; `main` owns stdin and stdout.
//!
//! ```text
//! :role <customer|restaurant|partner>   switch the current role
//! <role>: <text>                        send once as another role
//! :process                              handle the next queued message
//! :status | :history | :export          queue state
//! :orders | :restaurants | :partners    store contents
//! :clear | :help | :quit
//! anything else                         send as the current role
//! ```

use crate::clients::{RelayClient, RelayError};
use crate::lifecycle::RelayConfig;
use crate::model::Role;
use chrono::{DateTime, Local};
use relay_framework::{ActorClient, QueueStatus};
use thiserror::Error;
use tracing::debug;

pub const EMPTY_INPUT: &str = "Please enter a message";
pub const QUEUE_FULL: &str = "Queue full: please process some messages first";
pub const NOTHING_TO_PROCESS: &str = "No messages to process";
pub const INVALID_REQUEST: &str = "Invalid request";

const HELP: &str = "\
Commands:
  :role <customer|restaurant|partner>  switch the current role
  <role>: <text>                       send one message as another role
  :process                             handle the next queued message
  :status                              queue depth and processed count
  :history                             processed messages
  :export                              processed messages as JSON lines
  :orders, :restaurants, :partners     list store contents
  :clear                               clear the screen
  :help                                this text
  :quit                                exit
Anything else is sent as the current role.";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    SwitchRole(Role),
    Process,
    Status,
    History,
    Export,
    Orders,
    Restaurants,
    Partners,
    Clear,
    Help,
    Quit,
    /// Text to submit. `role` is `None` for the current role.
    Send { role: Option<Role>, text: String },
    /// Not understood; carries the line to show.
    Invalid(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Self::Empty;
        }
        if let Some(rest) = line.strip_prefix(':') {
            return Self::parse_directive(rest);
        }
        // Only a known role name before the colon redirects the message;
        // any other text with a colon is sent as typed.
        if let Some((prefix, text)) = line.split_once(':') {
            if let Ok(role) = prefix.parse::<Role>() {
                let text = text.trim();
                if text.is_empty() {
                    return Self::Empty;
                }
                return Self::Send {
                    role: Some(role),
                    text: text.to_string(),
                };
            }
        }
        Self::Send {
            role: None,
            text: line.to_string(),
        }
    }

    fn parse_directive(rest: &str) -> Self {
        let (name, arg) = match rest.trim().split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest.trim(), ""),
        };
        match name.to_ascii_lowercase().as_str() {
            "role" => match arg.parse::<Role>() {
                Ok(role) => Self::SwitchRole(role),
                Err(_) => Self::Invalid(INVALID_REQUEST.to_string()),
            },
            "process" => Self::Process,
            "status" => Self::Status,
            "history" => Self::History,
            "export" => Self::Export,
            "orders" => Self::Orders,
            "restaurants" => Self::Restaurants,
            "partners" => Self::Partners,
            "clear" => Self::Clear,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => Self::Invalid(format!("Unknown command ':{other}', try :help")),
        }
    }
}

/// What the caller should do with the result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Lines(Vec<String>),
    /// Clear the screen, then print the lines.
    Clear(Vec<String>),
    Quit,
}

#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Relay(#[from] RelayError),
    #[error("Export failed: {0}")]
    Export(#[from] serde_json::Error),
}

/// `[HH:MM:SS] Sender: text`
pub fn stamp(at: DateTime<Local>, sender: &str, text: &str) -> String {
    format!("[{}] {sender}: {text}", at.format("%H:%M:%S"))
}

pub fn status_line(status: &QueueStatus, role: Role) -> String {
    format!(
        "Messages in Queue: {}/{} | Current Role: {role} | Processed Messages: {}",
        status.depth, status.capacity, status.processed
    )
}

/// Greeting naming the ids of the sample orders.
pub fn welcome(first_order_number: u32) -> String {
    format!(
        "Welcome! Type 'NEW' to create a new order, \
         or enter an order number ({}-{}) to check status.",
        first_order_number,
        first_order_number.saturating_add(2)
    )
}

pub struct Shell {
    client: RelayClient,
    role: Role,
    auto_process: bool,
    first_order_number: u32,
}

impl Shell {
    /// Starts as a customer.
    pub fn new(client: RelayClient, config: &RelayConfig) -> Self {
        Self {
            client,
            role: Role::Customer,
            auto_process: config.auto_process,
            first_order_number: config.first_order_number,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn welcome(&self) -> String {
        welcome(self.first_order_number)
    }

    pub async fn execute(&mut self, command: ShellCommand) -> Result<Output, ShellError> {
        debug!(?command, role = %self.role, "Executing");
        let lines = match command {
            ShellCommand::Empty => vec![EMPTY_INPUT.to_string()],
            ShellCommand::Invalid(message) => vec![message],
            ShellCommand::SwitchRole(role) => {
                self.role = role;
                vec![format!("Current role: {role}"), role.prompt().to_string()]
            }
            ShellCommand::Send { role, text } => {
                let role = role.unwrap_or(self.role);
                self.send(role, &text).await?
            }
            ShellCommand::Process => match self.client.drain_one().await? {
                Some(reply) => vec![stamp(Local::now(), "System", &reply)],
                None => vec![NOTHING_TO_PROCESS.to_string()],
            },
            ShellCommand::Status => {
                let status = self.client.status().await?;
                vec![status_line(&status, self.role)]
            }
            ShellCommand::History => {
                let history = self.client.history().await?;
                if history.is_empty() {
                    vec!["No processed messages".to_string()]
                } else {
                    history
                        .iter()
                        .map(|e| {
                            stamp(e.enqueued_at, &e.payload.role.to_string(), &e.payload.content)
                        })
                        .collect()
                }
            }
            ShellCommand::Export => self
                .client
                .history()
                .await?
                .iter()
                .map(serde_json::to_string)
                .collect::<Result<Vec<String>, _>>()?,
            ShellCommand::Orders => self
                .client
                .orders()
                .await?
                .iter()
                .map(|o| {
                    format!(
                        "{}  {}  {} / {}  {}",
                        o.id,
                        o.restaurant,
                        o.status,
                        o.delivery_status,
                        o.items.join(", ")
                    )
                })
                .collect(),
            ShellCommand::Restaurants => self
                .client
                .restaurants()
                .await?
                .iter()
                .map(|r| format!("{} ({}, {}): {}", r.name, r.status, r.rating, r.menu.join(", ")))
                .collect(),
            ShellCommand::Partners => self
                .client
                .partners()
                .await?
                .iter()
                .map(|p| format!("{} {} ({})", p.id, p.name, p.availability))
                .collect(),
            ShellCommand::Clear => return Ok(Output::Clear(vec![self.welcome()])),
            ShellCommand::Help => vec![HELP.to_string()],
            ShellCommand::Quit => return Ok(Output::Quit),
        };
        Ok(Output::Lines(lines))
    }

    async fn send(&self, role: Role, text: &str) -> Result<Vec<String>, ShellError> {
        if !self.client.submit(role, text).await? {
            return Ok(vec![QUEUE_FULL.to_string()]);
        }
        let mut lines = vec![stamp(Local::now(), &role.to_string(), text)];
        if self.auto_process {
            if let Some(reply) = self.client.drain_one().await? {
                lines.push(stamp(Local::now(), "System", &reply));
            }
        }
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ChatMessage;
    use crate::processor::CommandProcessor;
    use chrono::TimeZone;
    use relay_framework::mock::MockClient;

    fn shell(mock: &MockClient<CommandProcessor>, auto_process: bool) -> Shell {
        let config = RelayConfig {
            auto_process,
            ..Default::default()
        };
        Shell::new(RelayClient::new(mock.client()), &config)
    }

    fn lines(output: Output) -> Vec<String> {
        match output {
            Output::Lines(lines) => lines,
            other => panic!("expected lines, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_directives() {
        assert_eq!(ShellCommand::parse("   "), ShellCommand::Empty);
        assert_eq!(
            ShellCommand::parse(":role partner"),
            ShellCommand::SwitchRole(Role::DeliveryPartner)
        );
        assert_eq!(
            ShellCommand::parse(":ROLE  Restaurant "),
            ShellCommand::SwitchRole(Role::Restaurant)
        );
        assert_eq!(ShellCommand::parse(":process"), ShellCommand::Process);
        assert_eq!(ShellCommand::parse(":quit"), ShellCommand::Quit);
        assert_eq!(
            ShellCommand::parse(":role chef"),
            ShellCommand::Invalid(INVALID_REQUEST.into())
        );
        assert!(matches!(ShellCommand::parse(":frobnicate"), ShellCommand::Invalid(_)));
    }

    #[test]
    fn test_parse_role_prefix() {
        assert_eq!(
            ShellCommand::parse("restaurant: 1000"),
            ShellCommand::Send {
                role: Some(Role::Restaurant),
                text: "1000".into()
            }
        );
        assert_eq!(
            ShellCommand::parse("Delivery Partner:ORDER#1001"),
            ShellCommand::Send {
                role: Some(Role::DeliveryPartner),
                text: "ORDER#1001".into()
            }
        );
        assert_eq!(ShellCommand::parse("customer:   "), ShellCommand::Empty);
    }

    #[test]
    fn test_parse_plain_text() {
        for line in [
            "NEW",
            "ORDER#1000",
            " 1000 ",
            "ready at 12:30",
            "Order: 1000",
            "hello: where is it",
            "chef: 1000",
        ] {
            assert_eq!(
                ShellCommand::parse(line),
                ShellCommand::Send {
                    role: None,
                    text: line.trim().into()
                },
                "{line:?}"
            );
        }
    }

    #[test]
    fn test_rendering() {
        let at = Local.with_ymd_and_hms(2024, 5, 1, 9, 5, 7).unwrap();
        assert_eq!(stamp(at, "Customer", "NEW"), "[09:05:07] Customer: NEW");

        let status = QueueStatus {
            depth: 1,
            capacity: 10,
            processed: 4,
        };
        assert_eq!(
            status_line(&status, Role::DeliveryPartner),
            "Messages in Queue: 1/10 | Current Role: Delivery Partner | Processed Messages: 4"
        );
        assert_eq!(
            welcome(1000),
            "Welcome! Type 'NEW' to create a new order, \
             or enter an order number (1000-1002) to check status."
        );
    }

    #[tokio::test]
    async fn test_send_echoes_and_auto_processes() {
        let mut mock = MockClient::<CommandProcessor>::new();
        mock.expect_submit().return_ok(true);
        mock.expect_drain()
            .return_ok(Some("New order created: ORDER#1003".into()));
        let mut shell = shell(&mock, true);

        let out = lines(shell.execute(ShellCommand::parse("NEW")).await.unwrap());
        assert_eq!(out.len(), 2);
        assert!(out[0].ends_with("] Customer: NEW"), "{}", out[0]);
        assert!(out[1].ends_with("] System: New order created: ORDER#1003"), "{}", out[1]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_role_prefix_does_not_switch_role() {
        let mut mock = MockClient::<CommandProcessor>::new();
        mock.expect_submit().return_ok(true);
        let mut shell = shell(&mock, false);

        let out = lines(shell.execute(ShellCommand::parse("partner: 1000")).await.unwrap());
        assert_eq!(out.len(), 1);
        assert!(out[0].ends_with("] Delivery Partner: 1000"));
        assert_eq!(shell.role(), Role::Customer);
        assert_eq!(
            mock.submitted(),
            vec![ChatMessage::new(Role::DeliveryPartner, "1000")]
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_switch_role_changes_sender() {
        let mut mock = MockClient::<CommandProcessor>::new();
        mock.expect_submit().return_ok(true);
        let mut shell = shell(&mock, false);

        let out = lines(shell.execute(ShellCommand::SwitchRole(Role::Restaurant)).await.unwrap());
        assert_eq!(out, ["Current role: Restaurant", "Enter Order ID to update:"]);

        shell.execute(ShellCommand::parse("1001")).await.unwrap();
        assert_eq!(mock.submitted(), vec![ChatMessage::new(Role::Restaurant, "1001")]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_full_queue_and_empty_drain() {
        let mut mock = MockClient::<CommandProcessor>::new();
        mock.expect_submit().return_ok(false);
        mock.expect_drain().return_ok(None);
        let mut shell = shell(&mock, true);

        let out = lines(shell.execute(ShellCommand::parse("NEW")).await.unwrap());
        assert_eq!(out, [QUEUE_FULL]);
        let out = lines(shell.execute(ShellCommand::Process).await.unwrap());
        assert_eq!(out, [NOTHING_TO_PROCESS]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_local_commands_touch_no_client() {
        let mock = MockClient::<CommandProcessor>::new();
        let mut shell = shell(&mock, true);

        assert_eq!(lines(shell.execute(ShellCommand::Empty).await.unwrap()), [EMPTY_INPUT]);
        assert_eq!(
            shell.execute(ShellCommand::Clear).await.unwrap(),
            Output::Clear(vec![welcome(1000)])
        );
        assert_eq!(shell.execute(ShellCommand::Quit).await.unwrap(), Output::Quit);
        assert!(mock.submitted().is_empty());
        mock.verify();
    }

    #[tokio::test]
    async fn test_transport_failure_surfaces() {
        let mut mock = MockClient::<CommandProcessor>::new();
        mock.expect_status()
            .return_err(relay_framework::FrameworkError::ActorClosed);
        let mut shell = shell(&mock, true);

        let result = shell.execute(ShellCommand::Status).await;
        assert!(matches!(result, Err(ShellError::Relay(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_colon_text_without_role_goes_to_current_role() {
        let mut mock = MockClient::<CommandProcessor>::new();
        mock.expect_submit().return_ok(true);
        let mut shell = shell(&mock, false);

        let out = lines(shell.execute(ShellCommand::parse("Order: 1000")).await.unwrap());
        assert!(out[0].ends_with("] Customer: Order: 1000"), "{}", out[0]);
        assert_eq!(mock.submitted(), vec![ChatMessage::new(Role::Customer, "Order: 1000")]);
        mock.verify();
    }
}
