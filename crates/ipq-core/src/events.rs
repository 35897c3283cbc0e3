//! Incoming chat events, resolved once per Telegram update.

/// Commands the bot understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Check,
}

/// Discriminated dispatch over an incoming update, replacing pattern-keyed
/// handler registration with a single classification step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatEvent {
    Command(BotCommand),
    /// Plain text treated as a candidate IP address.
    FreeText(String),
    /// Unknown commands, empty text and non-text payloads; these produce no
    /// response at all.
    Ignored,
}

impl ChatEvent {
    /// Classify a message's text. `None` means a non-text payload.
    pub fn classify(text: Option<&str>) -> Self {
        let Some(text) = text else {
            return ChatEvent::Ignored;
        };
        if text.is_empty() {
            return ChatEvent::Ignored;
        }

        if let Some(rest) = text.strip_prefix('/') {
            return match parse_command(rest).as_str() {
                "start" => ChatEvent::Command(BotCommand::Start),
                "check" => ChatEvent::Command(BotCommand::Check),
                _ => ChatEvent::Ignored,
            };
        }

        ChatEvent::FreeText(text.to_string())
    }
}

/// Telegram may send `/cmd@botname args`; keep only the command name.
fn parse_command(rest: &str) -> String {
    rest.split_whitespace()
        .next()
        .unwrap_or("")
        .split('@')
        .next()
        .unwrap_or("")
        .to_lowercase()
}
