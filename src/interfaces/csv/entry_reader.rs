use crate::domain::gl_entry::{EntryType, GlEntry};
use crate::error::{IntacctError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::io::Read;

/// One CSV row: `trtype,amount,glaccountno,classid,costcenter,memo,locationid`.
#[derive(Debug, Deserialize)]
struct EntryRecord {
    trtype: EntryType,
    #[serde(with = "rust_decimal::serde::str")]
    amount: Decimal,
    glaccountno: String,
    classid: String,
    costcenter: String,
    #[serde(default)]
    memo: Option<String>,
    #[serde(default)]
    locationid: Option<String>,
}

impl From<EntryRecord> for GlEntry {
    fn from(record: EntryRecord) -> Self {
        let mut entry = GlEntry::new(
            record.trtype,
            record.amount,
            record.glaccountno,
            record.classid,
            record.costcenter,
        );
        entry.memo = record.memo.filter(|m| !m.is_empty());
        entry.location_id = record.locationid.filter(|l| !l.is_empty());
        entry
    }
}

/// Reads ledger entries from a CSV source.
///
/// Wraps `csv::Reader` and yields one `Result<GlEntry>` per row, so a bad row
/// can be reported without losing the rest.
pub struct EntryReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EntryReader<R> {
    /// Creates a new `EntryReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily reads and converts entries.
    pub fn entries(self) -> impl Iterator<Item = Result<GlEntry>> {
        self.reader
            .into_deserialize::<EntryRecord>()
            .map(|result| result.map(GlEntry::from).map_err(IntacctError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const HEADER: &str = "trtype, amount, glaccountno, classid, costcenter, memo, locationid";

    #[test]
    fn test_reader_valid_stream() {
        let data = format!(
            "{HEADER}\ndebit, 100.00, 6100, SALES, CC-200, Recharge, NY\ncredit, 100.00, 6100, OPS, CC-100, , "
        );
        let reader = EntryReader::new(data.as_bytes());
        let results: Vec<Result<GlEntry>> = reader.entries().collect();

        assert_eq!(results.len(), 2);
        let debit = results[0].as_ref().unwrap();
        assert_eq!(debit.entry_type, EntryType::Debit);
        assert_eq!(debit.amount, dec!(100.00));
        assert_eq!(debit.cost_center, "CC-200");
        assert_eq!(debit.memo.as_deref(), Some("Recharge"));
        assert_eq!(debit.location_id.as_deref(), Some("NY"));

        let credit = results[1].as_ref().unwrap();
        assert_eq!(credit.entry_type, EntryType::Credit);
        assert_eq!(credit.memo, None);
        assert_eq!(credit.location_id, None);
    }

    #[test]
    fn test_reader_accepts_entry_type_spellings() {
        let data = format!(
            "{HEADER}\nDebit, 5.00, 6100, SALES, CC-200, , \nCREDIT, 5.00, 6100, OPS, CC-100, , \n-1, 1.00, 6100, OPS, CC-100, , "
        );
        let types: Vec<EntryType> = EntryReader::new(data.as_bytes())
            .entries()
            .map(|entry| entry.unwrap().entry_type)
            .collect();
        assert_eq!(types, [EntryType::Debit, EntryType::Credit, EntryType::Credit]);
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = format!("{HEADER}\ntransfer, 1.0, 6100, OPS, CC-100, , \ndebit, abc, 6100, OPS, CC-100, , ");
        let reader = EntryReader::new(data.as_bytes());
        let results: Vec<Result<GlEntry>> = reader.entries().collect();

        assert_eq!(results.len(), 2);
        assert!(matches!(results[0], Err(IntacctError::Csv(_))));
        assert!(results[1].is_err());
    }
}
