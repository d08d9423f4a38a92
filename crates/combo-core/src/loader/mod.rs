//! Score table loading.
//!
//! Reads every `DataSource` in order and merges its rows into one
//! `ScoreTable`. Any failure aborts the whole load.

mod clean;
mod csv;

pub use clean::*;

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::DataSource;
use crate::error::{BracketError, Error, Result};
use crate::score::ScoreTable;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Build the score table from `sources`, processed in the given order.
///
/// When several sources rate the same genre/game pair, the last one wins.
pub fn load_table(sources: &[DataSource]) -> Result<ScoreTable> {
    let mut table = ScoreTable::new();

    for source in sources {
        let rows = load_source(&mut table, source)?;
        info!(
            "Loaded {} rows from {} (tier {})",
            rows,
            source.path.display(),
            source.tier.value()
        );
    }

    info!(
        "Score table ready: {} genres, {} games, {} combinations",
        table.genres().len(),
        table.games().len(),
        table.len()
    );
    Ok(table)
}

/// Merge one source file into `table`. Returns the number of rows read.
pub fn load_source(table: &mut ScoreTable, source: &DataSource) -> Result<usize> {
    let bytes = fs::read(&source.path).map_err(|e| Error::SourceRead {
        path: source.path.clone(),
        source: e,
    })?;
    let content = decode_utf8(&bytes).ok_or_else(|| Error::InvalidUtf8 {
        path: source.path.clone(),
    })?;

    merge_rows(table, &content, source)
}

/// Strict UTF-8 decode; a leading byte order mark is dropped.
fn decode_utf8(bytes: &[u8]) -> Option<String> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    encoding_rs::UTF_8
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

fn merge_rows(table: &mut ScoreTable, content: &str, source: &DataSource) -> Result<usize> {
    let path = source.path.as_path();
    let records = csv::parse(content).map_err(|e| Error::UnterminatedQuote {
        path: path.to_path_buf(),
        line: e.line,
    })?;

    for record in &records {
        let [raw_genre, raw_games, ..] = record.fields.as_slice() else {
            return Err(Error::MalformedRow {
                path: path.to_path_buf(),
                line: record.line,
                columns: record.fields.len(),
            });
        };

        let genre = clean_genre(raw_genre);
        let games = split_games(raw_games)
            .map_err(|e| bracket_error(path, record.line, raw_games, e))?;
        debug!("{}: {} -> {} games", path.display(), genre, games.len());

        table.insert_games(&genre, &games, source.tier);
    }

    Ok(records.len())
}

fn bracket_error(path: &Path, line: usize, field: &str, source: BracketError) -> Error {
    Error::UnbalancedBrackets {
        path: path.to_path_buf(),
        line,
        field: field.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_sources;
    use crate::score::ScoreTier;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_source(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_single_source() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "best.csv", "액션 게임,\"테트리스[1988], 갤러그\"\n".as_bytes());

        let table = load_table(&[DataSource::new(path, ScoreTier::Masterpiece)]).unwrap();

        assert_eq!(table.genres(), vec!["액션"]);
        assert_eq!(table.get("액션", "테트리스"), Some(ScoreTier::Masterpiece));
        assert_eq!(table.get("액션", "갤러그"), Some(ScoreTier::Masterpiece));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_later_source_wins() {
        let dir = TempDir::new().unwrap();
        let best = write_source(&dir, "best.csv", "액션,\"테트리스, 갤러그\"\n".as_bytes());
        let not_bad = write_source(&dir, "not_bad.csv", "액션 게임,테트리스\n".as_bytes());

        let table = load_table(&[
            DataSource::new(best, ScoreTier::Masterpiece),
            DataSource::new(not_bad, ScoreTier::NotBad),
        ])
        .unwrap();

        assert_eq!(table.get("액션", "테트리스"), Some(ScoreTier::NotBad));
        assert_eq!(table.get("액션", "갤러그"), Some(ScoreTier::Masterpiece));
    }

    #[test]
    fn test_translated_genres_merge() {
        let dir = TempDir::new().unwrap();
        let path = write_source(
            &dir,
            "unique.csv",
            "어드벤쳐 게임,미스트\n어드벤처,젤다\n".as_bytes(),
        );

        let table = load_table(&[DataSource::new(path, ScoreTier::Original)]).unwrap();

        assert_eq!(table.genres(), vec!["어드벤처"]);
        assert_eq!(table.games(), vec!["미스트", "젤다"]);
    }

    #[test]
    fn test_default_sources_layout() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("raw")).unwrap();
        write_source(&dir, "raw/best.csv", "퍼즐,테트리스\n".as_bytes());
        write_source(&dir, "raw/unique.csv", "퍼즐,\"테트리스, 뿌요뿌요\"\n".as_bytes());
        write_source(&dir, "raw/not_bad.csv", b"\xEF\xBB\xBFRPG,Zelda\r\n");

        let table = load_table(&default_sources(dir.path())).unwrap();

        assert_eq!(table.get("퍼즐", "테트리스"), Some(ScoreTier::Original));
        assert_eq!(table.get("퍼즐", "뿌요뿌요"), Some(ScoreTier::Original));
        assert_eq!(table.get("RPG", "Zelda"), Some(ScoreTier::NotBad));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let result = load_table(&[DataSource::new(
            dir.path().join("missing.csv"),
            ScoreTier::Masterpiece,
        )]);
        assert!(matches!(result, Err(Error::SourceRead { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "bad.csv", b"\xB0\xA1,\xB0\xA2\n");
        let result = load_table(&[DataSource::new(path, ScoreTier::Original)]);
        assert!(matches!(result, Err(Error::InvalidUtf8 { .. })));
    }

    #[test]
    fn test_short_row_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "short.csv", "액션,테트리스\n퍼즐\n".as_bytes());
        let result = load_table(&[DataSource::new(path, ScoreTier::Original)]);
        assert!(matches!(
            result,
            Err(Error::MalformedRow {
                line: 2,
                columns: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_blank_row_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "blank.csv", "액션,테트리스\n\n퍼즐,뿌요뿌요\n".as_bytes());
        let result = load_table(&[DataSource::new(path, ScoreTier::Original)]);
        assert!(matches!(
            result,
            Err(Error::MalformedRow {
                line: 2,
                columns: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_unbalanced_brackets_are_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "brackets.csv", "액션,\"테트리스1988], 갤러그\"\n".as_bytes());
        let err = load_table(&[DataSource::new(path, ScoreTier::Original)]).unwrap_err();
        match err {
            Error::UnbalancedBrackets { line, field, .. } => {
                assert_eq!(line, 1);
                assert_eq!(field, "테트리스1988], 갤러그");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unterminated_quote_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "quote.csv", "액션,\"테트리스\n".as_bytes());
        let result = load_table(&[DataSource::new(path, ScoreTier::Original)]);
        assert!(matches!(
            result,
            Err(Error::UnterminatedQuote { line: 1, .. })
        ));
    }

    #[test]
    fn test_empty_game_tokens_become_keys() {
        let dir = TempDir::new().unwrap();
        let path = write_source(
            &dir,
            "best.csv",
            "액션,\"테트리스, \"\n퍼즐,[메모]\n".as_bytes(),
        );

        let table = load_table(&[DataSource::new(path, ScoreTier::Masterpiece)]).unwrap();

        assert_eq!(table.games(), vec!["", "테트리스"]);
        assert_eq!(table.get("액션", ""), Some(ScoreTier::Masterpiece));
        assert_eq!(table.get("퍼즐", ""), Some(ScoreTier::Masterpiece));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_source(&dir, "extra.csv", "액션,테트리스,memo,more\n".as_bytes());
        let table = load_table(&[DataSource::new(path, ScoreTier::NotBad)]).unwrap();
        assert_eq!(table.games(), vec!["테트리스"]);
    }
}
