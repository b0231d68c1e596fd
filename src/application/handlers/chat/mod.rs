//! Chat handlers.

mod chat_room;
mod list_messages;
mod post_message;

pub use chat_room::ChatRoom;
pub use list_messages::ListChatMessagesHandler;
pub use post_message::{
    CommandOutcome, PostChatMessageCommand, PostChatMessageHandler, PostChatMessageResult,
};
