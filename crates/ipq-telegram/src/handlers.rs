//! Telegram update handlers.
//!
//! Each message is classified into a `ChatEvent` once, then handed to the
//! interaction pipeline. The pipeline resolves its own failures, so this
//! handler always reports success to the dispatcher and one bad turn never
//! blocks the next update.

use std::sync::Arc;

use teloxide::{prelude::*, types::Message};

use ipq_core::{domain::ChatId, events::ChatEvent};

use crate::router::AppState;

pub async fn handle_message(msg: Message, state: Arc<AppState>) -> ResponseResult<()> {
    let chat_id = ChatId(msg.chat.id.0);
    let event = ChatEvent::classify(msg.text());

    state.pipeline.handle(chat_id, event).await;

    Ok(())
}
