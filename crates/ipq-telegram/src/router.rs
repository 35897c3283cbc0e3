use std::sync::Arc;

use teloxide::{dispatching::Dispatcher, dptree, prelude::*};

use ipq_core::{
    config::Config,
    interaction::Interaction,
    messaging::MessagingPort,
    ports::{ReputationPort, SelfIpPort},
};

use crate::handlers;
use crate::TelegramMessenger;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Interaction>,
}

pub async fn run_polling(
    cfg: Arc<Config>,
    reputation: Arc<dyn ReputationPort>,
    self_ip: Arc<dyn SelfIpPort>,
) -> anyhow::Result<()> {
    let bot = Bot::new(cfg.telegram_bot_token.clone());

    // Basic startup info.
    if let Ok(me) = bot.get_me().await {
        println!("ipq started: @{}", me.username());
    }
    println!("Self-IP endpoint: {}", cfg.self_ip_url);
    println!("Reputation endpoint: {}", cfg.reputation_base_url);

    let messenger: Arc<dyn MessagingPort> = Arc::new(TelegramMessenger::new(bot.clone()));
    let pipeline = Arc::new(Interaction::new(messenger, reputation, self_ip));

    let state = Arc::new(AppState { pipeline });

    let handler =
        dptree::entry().branch(Update::filter_message().endpoint(handlers::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .build()
        .dispatch()
        .await;

    Ok(())
}
