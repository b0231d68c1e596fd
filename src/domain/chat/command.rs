//! Music commands typed into chat.
//!
//! Accepted shapes (keywords are case-insensitive):
//!
//! - `add Artist - Title` (also `music`, `play`, `search` and the
//!   Portuguese `adicionar`, `música`, `tocar`, `buscar`)
//! - `Artist - Title add` (any keyword except the search ones)
//!
//! Artist and title are split on the first `-`.

const PREFIX_KEYWORDS: &[&str] = &[
    "add", "adicionar", "music", "música", "play", "tocar", "search", "buscar",
];
const SUFFIX_KEYWORDS: &[&str] = &["add", "adicionar", "music", "música", "play", "tocar"];
const MUSIC_HINTS: &[&str] = &["music", "música", "song", "som", "play", "tocar", "add"];

/// A song request parsed from a chat line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MusicCommand {
    pub artist: String,
    pub title: String,
}

impl MusicCommand {
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();

        if let Some((head, rest)) = text.split_once(char::is_whitespace) {
            if is_keyword(head, PREFIX_KEYWORDS) {
                if let Some(command) = Self::split_pair(rest) {
                    return Some(command);
                }
            }
        }

        let (body, tail) = text.rsplit_once(char::is_whitespace)?;
        if is_keyword(tail, SUFFIX_KEYWORDS) {
            return Self::split_pair(body);
        }
        None
    }

    fn split_pair(text: &str) -> Option<Self> {
        let (artist, title) = text.split_once('-')?;
        let (artist, title) = (artist.trim(), title.trim());
        if artist.is_empty() || title.is_empty() {
            return None;
        }
        Some(Self {
            artist: artist.to_string(),
            title: title.to_string(),
        })
    }
}

/// Whether a message talks about music without being a valid command.
pub fn mentions_music(text: &str) -> bool {
    let lower = text.to_lowercase();
    MUSIC_HINTS.iter().any(|hint| lower.contains(hint))
}

fn is_keyword(word: &str, keywords: &[&str]) -> bool {
    let word = word.to_lowercase();
    keywords.iter().any(|k| *k == word)
}
