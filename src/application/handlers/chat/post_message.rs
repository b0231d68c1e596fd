//! PostChatMessageHandler - Stores a chat message and acts on music commands.
//!
//! A message like `add Artist - Title` puts the song on the roster. The DJ
//! bot answers in the chat either way.

use std::sync::Arc;

use crate::application::handlers::voting::{AddSongCommand, AddSongHandler};
use crate::domain::chat::{mentions_music, ChatError, ChatMessage, MusicCommand};
use crate::domain::voting::{Song, VotingError};

use super::ChatRoom;

const CHAT_ALBUM: &str = "Added via chat";
const USAGE_HINT: &str =
    "🎵 To add a song, type: \"add Artist - Title\" (e.g. \"add The Beatles - Hey Jude\") 🎶";
const VOTE_REMINDER: &str = "🗳️ Don't forget to vote! The most voted song plays automatically! 📊";

#[derive(Debug, Clone)]
pub struct PostChatMessageCommand {
    pub user: Option<String>,
    pub message: String,
}

/// What happened to a music command found in the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Added(Song),
    AlreadyListed,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct PostChatMessageResult {
    pub message: ChatMessage,
    pub command: Option<CommandOutcome>,
}

pub struct PostChatMessageHandler {
    room: Arc<ChatRoom>,
    songs: Arc<AddSongHandler>,
}

impl PostChatMessageHandler {
    pub fn new(room: Arc<ChatRoom>, songs: Arc<AddSongHandler>) -> Self {
        Self { room, songs }
    }

    pub async fn handle(&self, cmd: PostChatMessageCommand) -> Result<PostChatMessageResult, ChatError> {
        let message = ChatMessage::new(cmd.user.as_deref(), &cmd.message)?;
        self.room.post(message.clone()).await;
        tracing::info!(user = %message.user, "Chat message posted");

        let command = match MusicCommand::parse(&message.message) {
            Some(request) => Some(self.add_requested_song(request, &message.user).await),
            None => {
                if mentions_music(&message.message) {
                    self.room.post(ChatMessage::bot(USAGE_HINT)).await;
                }
                None
            }
        };

        Ok(PostChatMessageResult { message, command })
    }

    async fn add_requested_song(&self, request: MusicCommand, user: &str) -> CommandOutcome {
        tracing::info!(artist = %request.artist, title = %request.title, "Music command detected");
        self.room
            .post(ChatMessage::bot(format!(
                "🔍 Processing \"{} - {}\"...",
                request.artist, request.title
            )))
            .await;

        let result = self
            .songs
            .handle(AddSongCommand {
                title: request.title.clone(),
                artist: request.artist.clone(),
                album: Some(CHAT_ALBUM.to_string()),
                added_by: Some(user.to_string()),
                ..Default::default()
            })
            .await;

        match result {
            Ok(added) => {
                self.room
                    .post(ChatMessage::bot(format!(
                        "✅ \"{}\" by {} was added to the vote! 🎵 Requested by {}",
                        added.song.title(),
                        added.song.artist(),
                        user
                    )))
                    .await;
                self.room.post(ChatMessage::bot(VOTE_REMINDER)).await;
                CommandOutcome::Added(added.song)
            }
            Err(VotingError::Duplicate { title, artist }) => {
                self.room
                    .post(ChatMessage::bot(format!(
                        "❌ \"{}\" by {} is already on the voting list!",
                        title, artist
                    )))
                    .await;
                CommandOutcome::AlreadyListed
            }
            Err(err) => {
                tracing::warn!(error = %err, "Chat song request failed");
                self.room
                    .post(ChatMessage::bot(format!(
                        "❌ Could not process \"{} - {}\". Try again! 🔍",
                        request.artist, request.title
                    )))
                    .await;
                CommandOutcome::Failed(err.message())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::voting::VotingService;
    use crate::domain::chat::{ChatLog, BOT_USER};
    use crate::domain::voting::{VoteEvent, VoteLedger};
    use crate::ports::{PublishReport, VoteEventPublisher};

    struct NullPublisher;

    impl VoteEventPublisher for NullPublisher {
        fn publish(&self, _: &VoteEvent) -> PublishReport {
            PublishReport::default()
        }
    }

    fn setup() -> (PostChatMessageHandler, Arc<ChatRoom>, Arc<VotingService>) {
        let service = Arc::new(VotingService::new(VoteLedger::default(), Arc::new(NullPublisher)));
        let room = Arc::new(ChatRoom::new(ChatLog::new(50), 50));
        let songs = Arc::new(AddSongHandler::new(service.clone()));
        (PostChatMessageHandler::new(room.clone(), songs), room, service)
    }

    fn post(user: &str, message: &str) -> PostChatMessageCommand {
        PostChatMessageCommand {
            user: Some(user.to_string()),
            message: message.to_string(),
        }
    }

    #[tokio::test]
    async fn plain_message_is_stored() {
        let (handler, room, _) = setup();

        let result = handler.handle(post("ana", "hello there")).await.unwrap();

        assert_eq!(result.message.message, "hello there");
        assert!(result.command.is_none());
        assert_eq!(room.recent().await.len(), 1);
    }

    #[tokio::test]
    async fn music_command_adds_song() {
        let (handler, room, service) = setup();

        let result = handler.handle(post("ana", "add Radiohead - Creep")).await.unwrap();

        let Some(CommandOutcome::Added(song)) = result.command else {
            panic!("expected the song to be added");
        };
        assert_eq!(song.title(), "Creep");
        assert_eq!(song.added_by(), Some("ana"));
        assert_eq!(song.album(), CHAT_ALBUM);
        assert_eq!(service.read(|l| l.len()).await, 1);

        let bot_lines = room.recent().await.into_iter().filter(|m| m.user == BOT_USER).count();
        assert_eq!(bot_lines, 3);
    }

    #[tokio::test]
    async fn duplicate_request_gets_bot_reply() {
        let (handler, room, service) = setup();
        handler.handle(post("ana", "add Radiohead - Creep")).await.unwrap();

        let result = handler.handle(post("bo", "radiohead - creep play")).await.unwrap();

        assert_eq!(result.command, Some(CommandOutcome::AlreadyListed));
        assert_eq!(service.read(|l| l.len()).await, 1);
        let last = room.recent().await.pop().unwrap();
        assert!(last.message.contains("already on the voting list"));
    }

    #[tokio::test]
    async fn music_chatter_gets_usage_hint() {
        let (handler, room, _) = setup();

        handler.handle(post("ana", "can you play something good?")).await.unwrap();

        let last = room.recent().await.pop().unwrap();
        assert_eq!(last.user, BOT_USER);
        assert_eq!(last.message, USAGE_HINT);
    }

    #[tokio::test]
    async fn blank_message_is_rejected() {
        let (handler, room, _) = setup();

        let result = handler.handle(post("ana", "   ")).await;

        assert_eq!(result.unwrap_err(), ChatError::EmptyMessage);
        assert!(room.recent().await.is_empty());
    }
}
