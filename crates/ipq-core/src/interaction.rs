//! Per-turn orchestration: validate or resolve, emit a loading placeholder,
//! fetch, classify, render, then edit the placeholder in place.

use std::sync::Arc;

use crate::{
    domain::{ChatId, MessageRef},
    events::{BotCommand, ChatEvent},
    messaging::MessagingPort,
    ports::{ReputationPort, SelfIpPort},
    report::render_report,
    risk::classify,
    validate::is_valid_ipv4,
    Result,
};

const WELCOME_TEXT: &str = "Welcome to IP Quality Checker Bot! 🔍\n\nSend me an IP address to check its quality, or use /check to analyze your current IP address.";
const LOADING_OWN_IP: &str = "🔍 Analyzing your IP address...";
const LOADING_GIVEN_IP: &str = "🔍 Analyzing the IP address...";
const REJECTION_TEXT: &str =
    "❌ Please send a valid IP address or use /check to analyze your current IP.";
const ERROR_TEXT: &str = "❌ Error occurred while checking IP quality. Please try again later.";

/// One orchestrator shared by all chat turns. Holds no per-turn state; every
/// `handle` call operates only on data scoped to its own event, so concurrent
/// turns need no synchronization.
pub struct Interaction {
    messenger: Arc<dyn MessagingPort>,
    reputation: Arc<dyn ReputationPort>,
    self_ip: Arc<dyn SelfIpPort>,
}

impl Interaction {
    pub fn new(
        messenger: Arc<dyn MessagingPort>,
        reputation: Arc<dyn ReputationPort>,
        self_ip: Arc<dyn SelfIpPort>,
    ) -> Self {
        Self {
            messenger,
            reputation,
            self_ip,
        }
    }

    /// Run one chat turn to completion.
    ///
    /// All pipeline failures are resolved inside the turn: the cause goes to
    /// the server log and the chat sees at most one generic error notice. A
    /// bad turn can never take down the dispatcher.
    pub async fn handle(&self, chat_id: ChatId, event: ChatEvent) {
        let outcome = match event {
            ChatEvent::Command(BotCommand::Start) => self.welcome(chat_id).await,
            ChatEvent::Command(BotCommand::Check) => self.check_own_ip(chat_id).await,
            ChatEvent::FreeText(text) => self.check_given_ip(chat_id, &text).await,
            ChatEvent::Ignored => Ok(()),
        };

        if let Err(e) = outcome {
            eprintln!("[IPQ] chat {} turn failed: {e}", chat_id.0);
        }
    }

    async fn welcome(&self, chat_id: ChatId) -> Result<()> {
        self.messenger.send_html(chat_id, WELCOME_TEXT).await?;
        Ok(())
    }

    /// Self-IP flow: the placeholder goes up before discovery starts, so the
    /// caller gets immediate feedback even when discovery itself is slow.
    async fn check_own_ip(&self, chat_id: ChatId) -> Result<()> {
        let placeholder = self.messenger.send_html(chat_id, LOADING_OWN_IP).await?;

        let report = self.assess_own_ip().await;
        self.resolve_placeholder(placeholder, report).await
    }

    async fn check_given_ip(&self, chat_id: ChatId, text: &str) -> Result<()> {
        if !is_valid_ipv4(text) {
            // Early rejection: no placeholder exists yet, so this is a plain
            // send rather than an edit.
            self.messenger.send_html(chat_id, REJECTION_TEXT).await?;
            return Ok(());
        }

        let placeholder = self.messenger.send_html(chat_id, LOADING_GIVEN_IP).await?;

        let report = self.assess(text).await;
        self.resolve_placeholder(placeholder, report).await
    }

    async fn assess_own_ip(&self) -> Result<String> {
        let ip = self.self_ip.resolve().await?;
        self.assess(&ip).await
    }

    /// Fetch, classify, render. Classification and rendering are pure and
    /// cannot fail; only the lookup can.
    async fn assess(&self, ip: &str) -> Result<String> {
        let record = self.reputation.lookup(ip).await?;
        let level = classify(record.fraud_score);
        Ok(render_report(ip, &record, level).to_html())
    }

    /// Resolve the placeholder exactly once: with the report on success, with
    /// the generic error notice on failure. The underlying cause is logged,
    /// never shown to the caller.
    async fn resolve_placeholder(
        &self,
        placeholder: MessageRef,
        report: Result<String>,
    ) -> Result<()> {
        match report {
            Ok(html) => self.messenger.edit_html(placeholder, &html).await,
            Err(e) => {
                eprintln!("[IPQ] lookup failed: {e}");
                self.messenger.edit_html(placeholder, ERROR_TEXT).await
            }
        }
    }
}
