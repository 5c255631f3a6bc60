//! CSV records as [`RawRow`]s.

use std::io::Read;

use bunklogs_core::import::RawRow;
use csv::StringRecord;

use crate::error::PipelineError;

/// UTF-8 BOM bytes, as prepended by spreadsheet exports.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Strip a UTF-8 BOM from the start of `data` if present.
pub fn strip_utf8_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(UTF8_BOM).unwrap_or(data)
}

/// Iterator over the records of a headed CSV document.
///
/// The first record names the columns. Records shorter than the header
/// simply lack the trailing columns; values past the last header are
/// dropped.
pub struct CsvRows<R> {
    reader: csv::Reader<R>,
    headers: StringRecord,
}

impl<R: Read> CsvRows<R> {
    pub fn new(input: R) -> Result<Self, PipelineError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input);
        let headers = reader.headers()?.clone();
        Ok(Self { reader, headers })
    }

    /// Rows are numbered by the line their record ends on, so a quoted
    /// field spanning several lines counts each of them.
    fn to_row(&self, record: &StringRecord) -> RawRow {
        let start = record.position().map_or(0, |p| p.line());
        let embedded: u64 = record
            .iter()
            .map(|field| field.matches('\n').count() as u64)
            .sum();
        RawRow::from_pairs(start + embedded, self.headers.iter().zip(record.iter()))
    }
}

impl<R: Read> Iterator for CsvRows<R> {
    type Item = Result<RawRow, PipelineError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut record = StringRecord::new();
        match self.reader.read_record(&mut record) {
            Ok(true) => Some(Ok(self.to_row(&record))),
            Ok(false) => None,
            Err(err) => Some(Err(err.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[u8]) -> Vec<RawRow> {
        CsvRows::new(strip_utf8_bom(data))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap()
    }

    #[test]
    fn rows_are_keyed_by_header() {
        let rows = rows(b"name,capacity\nOak,10\nPine,\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("name"), Some("Oak"));
        assert_eq!(rows[0].get("capacity"), Some("10"));
        assert_eq!(rows[1].get("capacity"), Some(""));
    }

    #[test]
    fn line_numbers_count_the_header() {
        let rows = rows(b"name\nOak\nPine\n");
        assert_eq!(rows[0].line, 2);
        assert_eq!(rows[1].line, 3);
    }

    #[test]
    fn multi_line_records_take_their_last_line() {
        let rows = rows(b"name,notes\nOak,\"first\nsecond\"\nPine,\n");
        assert_eq!(rows[0].get("notes"), Some("first\nsecond"));
        assert_eq!(rows[0].line, 3);
        assert_eq!(rows[1].line, 4);
    }

    #[test]
    fn short_records_lack_trailing_columns() {
        let rows = rows(b"name,capacity,notes\nOak\n");
        assert_eq!(rows[0].get("name"), Some("Oak"));
        assert_eq!(rows[0].get("capacity"), None);
    }

    #[test]
    fn bom_is_stripped() {
        let mut data = UTF8_BOM.to_vec();
        data.extend_from_slice(b"name\nOak\n");
        let rows = rows(&data);
        assert_eq!(rows[0].get("name"), Some("Oak"));
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let rows = rows(b"name,notes\nOak,\"near the lake, north side\"\n");
        assert_eq!(rows[0].get("notes"), Some("near the lake, north side"));
    }

    #[test]
    fn empty_input_has_no_rows() {
        assert!(rows(b"").is_empty());
    }

    #[test]
    fn invalid_utf8_is_an_error() {
        let mut rows = CsvRows::new(&b"name\n\xff\xfe\n"[..]).unwrap();
        assert!(matches!(rows.next(), Some(Err(PipelineError::Csv(_)))));
    }
}
