//! Shared `csv`-crate plumbing: bytes in, `ParsedCsv` out.

use std::io::Read;

use csvshape_core::{
    domain::{ParsedCsv, Row},
    error::{CoreError, CoreResult},
};
use tracing::{debug, trace};

use crate::options::ReadOptions;

/// Parse a whole document.
///
/// Cell *i* of a record is keyed by header *i*. Records shorter than the
/// header line simply lack the trailing keys; cells past the last header are
/// keyed `column_<n>` (1-based) so that structure checks can see them.
pub(crate) fn parse<R: Read>(
    input: R,
    options: &ReadOptions,
    source_name: &str,
) -> CoreResult<ParsedCsv> {
    let mut reader = options.reader_builder().from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| map_csv_error(source_name, e))?
        .iter()
        .map(str::to_owned)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| map_csv_error(source_name, e))?;
        trace!(fields = record.len(), "record read");
        rows.push(to_row(&headers, &record));
    }

    debug!(
        source = source_name,
        headers = headers.len(),
        rows = rows.len(),
        "csv parsed"
    );
    Ok(ParsedCsv::new(headers, rows))
}

fn to_row(headers: &[String], record: &csv::StringRecord) -> Row {
    record
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let key = headers
                .get(i)
                .cloned()
                .unwrap_or_else(|| overflow_key(headers, i + 1));
            (key, cell.to_owned())
        })
        .collect()
}

/// Key for the cell at 1-based `column` past the last header.
///
/// Never equal to a header, so an overflow cell cannot replace a real one.
fn overflow_key(headers: &[String], column: usize) -> String {
    let mut key = format!("column_{column}");
    while headers.contains(&key) {
        key.insert(0, '_');
    }
    key
}

fn map_csv_error(source_name: &str, e: csv::Error) -> CoreError {
    if e.is_io_error() {
        return CoreError::SourceUnavailable {
            source_name: source_name.to_owned(),
            reason: e.to_string(),
        };
    }

    CoreError::MalformedInput {
        source_name: source_name.to_owned(),
        line: e.position().map(|p| p.line()).unwrap_or(0),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(text: &str, options: &ReadOptions) -> ParsedCsv {
        parse(text.as_bytes(), options, "inline").unwrap()
    }

    #[test]
    fn semicolon_document_parses() {
        let opts = ReadOptions::new().with_delimiter(";").unwrap();
        let csv = parse_str("header1;header2;header3\n1;2;3\n4;5;6\n", &opts);

        assert_eq!(csv.headers(), ["header1", "header2", "header3"]);
        assert_eq!(csv.row_count(), 2);
        assert_eq!(csv.rows()[1]["header3"], "6");
    }

    #[test]
    fn short_record_lacks_trailing_keys() {
        let csv = parse_str("a,b,c\n1,2\n", &ReadOptions::default());
        let row = &csv.rows()[0];

        assert_eq!(row.len(), 2);
        assert!(!row.contains_key("c"));
    }

    #[test]
    fn long_record_gains_positional_keys() {
        let csv = parse_str("a,b\n1,2,3,4\n", &ReadOptions::default());
        let row = &csv.rows()[0];

        assert_eq!(row["column_3"], "3");
        assert_eq!(row["column_4"], "4");
    }

    #[test]
    fn overflow_cell_never_overwrites_a_header_named_like_it() {
        let csv = parse_str("column_3,b\nx,y,z\n", &ReadOptions::default());
        let row = &csv.rows()[0];

        assert_eq!(row.len(), 3);
        assert_eq!(row["column_3"], "x");
        assert_eq!(row["_column_3"], "z");

        let mut validator = csvshape_core::domain::Validator::new(&csv);
        validator.validate_data_structure(&["column_3", "b"]);
        assert!(validator.has_errors());
    }

    #[test]
    fn empty_cells_are_kept_as_empty_strings() {
        let csv = parse_str("a,b\n1,\n", &ReadOptions::default());
        assert_eq!(csv.rows()[0]["b"], "");
    }

    #[test]
    fn trim_strips_headers_and_cells() {
        let opts = ReadOptions::new().with_trim(true);
        let csv = parse_str(" a , b \n 1 , 2 \n", &opts);

        assert_eq!(csv.headers(), ["a", "b"]);
        assert_eq!(csv.rows()[0]["b"], "2");
    }

    #[test]
    fn empty_input_has_no_headers_or_rows() {
        let csv = parse_str("", &ReadOptions::default());
        assert!(csv.is_empty());
    }

    #[test]
    fn header_only_input_has_no_rows() {
        let csv = parse_str("a,b\n", &ReadOptions::default());
        assert_eq!(csv.headers().len(), 2);
        assert_eq!(csv.row_count(), 0);
    }

    #[test]
    fn invalid_utf8_is_malformed_input() {
        let bytes: &[u8] = b"a,b\n1,\xff\xfe\n";
        let err = parse(bytes, &ReadOptions::default(), "bad.csv").unwrap_err();

        assert!(matches!(
            err,
            CoreError::MalformedInput { ref source_name, .. } if source_name == "bad.csv"
        ));
    }
}
