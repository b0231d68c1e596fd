//! Generated placeholder covers.
//!
//! Songs requested through chat get a placeholder until enrichment finds
//! real artwork. Placeholders are recognisable so enrichment can retry them.

const PLACEHOLDER_HOST: &str = "https://via.placeholder.com/300x300";
const PALETTE: [&str; 10] = [
    "ff6b6b", "feca57", "48dbfb", "ff9ff3", "54a0ff", "5f27cd", "00d2d3", "ff9f43", "ee5a6f",
    "0abde3",
];
const LABEL_CHARS: usize = 15;

/// Placeholder cover URL for a song. The same artist and title always give
/// the same URL.
pub fn placeholder_cover(artist: &str, title: &str) -> String {
    let seed = artist
        .bytes()
        .chain(title.bytes())
        .fold(0usize, |acc, b| acc.wrapping_mul(31).wrapping_add(b as usize));
    let color = PALETTE[seed % PALETTE.len()];

    format!(
        "{}/{}/ffffff?text={}+-+{}",
        PLACEHOLDER_HOST,
        color,
        label(artist),
        label(title)
    )
}

/// Whether a cover is missing real artwork.
pub fn is_placeholder_cover(cover_ref: &str) -> bool {
    cover_ref.contains("placeholder")
}

fn label(text: &str) -> String {
    text.chars()
        .take(LABEL_CHARS)
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_deterministic() {
        assert_eq!(
            placeholder_cover("Radiohead", "Creep"),
            placeholder_cover("Radiohead", "Creep")
        );
    }

    #[test]
    fn placeholder_carries_label() {
        let url = placeholder_cover("The Beatles", "Hey Jude!");
        assert!(url.starts_with(PLACEHOLDER_HOST));
        assert!(url.ends_with("?text=The+Beatles+-+Hey+Jude"));
    }

    #[test]
    fn generated_covers_are_recognised() {
        assert!(is_placeholder_cover(&placeholder_cover("a", "b")));
        assert!(!is_placeholder_cover("https://example.com/cover.jpg"));
    }
}
