use csv::ReaderBuilder;

use super::error::PairParseError;
use super::model::PairDraft;

/// Pick the delimiter for a delimited file by looking at its first line only.
///
/// Comma wins over semicolon, semicolon over tab; comma is the fallback.
/// Every later row is split with the same delimiter, even if it uses another.
pub fn sniff_delimiter(text: &str) -> u8 {
    let first_line = text.split('\n').next().unwrap_or("");

    if first_line.contains(',') {
        b','
    } else if first_line.contains(';') {
        b';'
    } else if first_line.contains('\t') {
        b'\t'
    } else {
        b','
    }
}

/// Parse CSV/TSV/semicolon separated text into pairs.
///
/// The first two fields of each row become a pair. Rows with fewer than two
/// fields, or with either field blank after trimming, are skipped.
pub fn parse_delimited(text: &str) -> Result<Vec<PairDraft>, PairParseError> {
    let delimiter = sniff_delimiter(text);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut pairs = Vec::new();
    let mut skipped = 0usize;

    for record in reader.records() {
        let record = record?;

        let pair = match (record.get(0), record.get(1)) {
            (Some(first), Some(second)) => PairDraft::from_fields(first, second),
            _ => None,
        };

        match pair {
            Some(pair) => pairs.push(pair),
            None => skipped += 1,
        }
    }

    tracing::debug!(
        delimiter = %(delimiter as char).escape_default(),
        pair_count = pairs.len(),
        skipped_rows = skipped,
        "Parsed delimited text"
    );

    Ok(pairs)
}

/// Parse text where every two consecutive lines form a pair.
///
/// A trailing unpaired line is dropped, as are pairs with a blank side.
pub fn parse_lines(text: &str) -> Vec<PairDraft> {
    let lines: Vec<&str> = text.trim().split('\n').collect();

    let pairs: Vec<PairDraft> = lines
        .chunks(2)
        .filter(|chunk| chunk.len() == 2)
        .filter_map(|chunk| PairDraft::from_fields(chunk[0], chunk[1]))
        .collect();

    tracing::debug!(
        line_count = lines.len(),
        pair_count = pairs.len(),
        "Parsed line pairs"
    );

    pairs
}

/// Accept a JSON array of `{"text1", "text2"}` objects as-is.
pub fn parse_json(text: &str) -> Result<Vec<PairDraft>, PairParseError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(text)?)
}
