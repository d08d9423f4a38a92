//! Genre and game label cleanup.

use crate::config::genre;
use crate::error::BracketError;

/// Canonical genre key for a raw genre label.
///
/// Removes every occurrence of the genre marker, trims, then applies the
/// translation table to the trimmed label.
pub fn clean_genre(raw: &str) -> String {
    let stripped = raw.replace(genre::MARKER, "");
    genre::translate(stripped.trim()).to_string()
}

/// Remove every `[ ... ]` annotation, brackets included.
///
/// Rejects `]` without an open `[`, a `[` inside an open annotation, and an
/// annotation left open at the end of the field.
pub fn strip_annotations(raw: &str) -> Result<String, BracketError> {
    let mut output = String::with_capacity(raw.len());
    let mut open: Option<usize> = None;

    for (position, c) in raw.chars().enumerate() {
        match (c, open) {
            ('[', None) => open = Some(position),
            ('[', Some(_)) => return Err(BracketError::NestedOpen { position }),
            (']', None) => return Err(BracketError::UnmatchedClose { position }),
            (']', Some(_)) => open = None,
            (_, Some(_)) => {}
            (_, None) => output.push(c),
        }
    }

    match open {
        Some(position) => Err(BracketError::Unclosed { position }),
        None => Ok(output),
    }
}

/// Game keys of a raw games field: annotations stripped, split on commas, trimmed.
///
/// Every token is kept, so an empty token becomes the empty game key.
pub fn split_games(raw: &str) -> Result<Vec<String>, BracketError> {
    let stripped = strip_annotations(raw)?;
    Ok(stripped.split(',').map(|game| game.trim().to_string()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_genre_removes_marker() {
        assert_eq!(clean_genre("액션 게임"), "액션");
        assert_eq!(clean_genre("  퍼즐게임  "), "퍼즐");
        assert_eq!(clean_genre("시뮬레이션"), "시뮬레이션");
    }

    #[test]
    fn test_clean_genre_translates_after_strip() {
        assert_eq!(clean_genre("어드벤쳐 게임"), "어드벤처");
        assert_eq!(clean_genre(" 어드벤쳐 "), "어드벤처");
        // Only the whole post-strip label is looked up
        assert_eq!(clean_genre("어드벤쳐 RPG"), "어드벤쳐 RPG");
    }

    #[test]
    fn test_strip_annotations() {
        assert_eq!(strip_annotations("테트리스[1988], 갤러그").unwrap(), "테트리스, 갤러그");
        assert_eq!(strip_annotations("a[x]b[y]c").unwrap(), "abc");
        assert_eq!(strip_annotations("[only]").unwrap(), "");
        assert_eq!(strip_annotations("plain").unwrap(), "plain");
    }

    #[test]
    fn test_strip_annotations_idempotent() {
        for raw in ["테트리스[1988], 갤러그", "a[x]b, c [y] d", "[]", "no brackets"] {
            let once = strip_annotations(raw).unwrap();
            assert_eq!(strip_annotations(&once).unwrap(), once);
        }
    }

    #[test]
    fn test_strip_annotations_rejects_malformed() {
        assert_eq!(
            strip_annotations("abc]"),
            Err(BracketError::UnmatchedClose { position: 3 })
        );
        assert_eq!(
            strip_annotations("a[b[c]]"),
            Err(BracketError::NestedOpen { position: 3 })
        );
        assert_eq!(
            strip_annotations("갤러그[1981"),
            Err(BracketError::Unclosed { position: 3 })
        );
    }

    #[test]
    fn test_split_games() {
        assert_eq!(
            split_games("테트리스[1988], 갤러그").unwrap(),
            vec!["테트리스", "갤러그"]
        );
        assert_eq!(
            split_games(" 너구리 [주석, 쉼표 포함] ,  보글보글 ").unwrap(),
            vec!["너구리", "보글보글"]
        );
    }

    #[test]
    fn test_split_games_keeps_empty_tokens() {
        assert_eq!(split_games("a,, b ,").unwrap(), vec!["a", "", "b", ""]);
        assert_eq!(split_games("테트리스, ").unwrap(), vec!["테트리스", ""]);
        assert_eq!(split_games("").unwrap(), vec![""]);
        assert_eq!(split_games("[메모]").unwrap(), vec![""]);
    }
}
