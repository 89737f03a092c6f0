//! Companion chat handlers.

mod screen_chat_message;

pub use screen_chat_message::{
    ScreenChatMessageCommand, ScreenChatMessageHandler, ScreenChatMessageResult,
};
