use super::date::IntacctDate;
use super::gl_entry::{EntryType, GlEntry};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Journal id of the general journal.
pub const GENERAL_JOURNAL: &str = "GJ";

/// Class and cost center one side of an entry pair is booked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation<'a> {
    pub class_id: &'a str,
    pub cost_center: &'a str,
}

impl<'a> Allocation<'a> {
    pub fn new(class_id: &'a str, cost_center: &'a str) -> Self {
        Self {
            class_id,
            cost_center,
        }
    }
}

/// A journal transaction: a group of ledger entries posted together.
///
/// Debits and credits must balance for the service to accept the
/// transaction. Nothing here enforces that; `is_balanced` is available for
/// callers that want to check before sending.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct GlTransaction {
    /// Record key assigned by the service once the transaction exists.
    pub key: Option<String>,
    pub journal_id: String,
    pub date: Option<IntacctDate>,
    pub description: String,
    pub entries: Vec<GlEntry>,
}

impl GlTransaction {
    pub fn new(
        journal_id: impl Into<String>,
        date: IntacctDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            key: None,
            journal_id: journal_id.into(),
            date: Some(date),
            description: description.into(),
            entries: Vec::new(),
        }
    }

    /// A transaction known only by its record key, as returned by a create.
    pub fn from_key(key: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            ..Self::default()
        }
    }

    pub fn add_entry(&mut self, entry: GlEntry) {
        self.entries.push(entry);
    }

    /// Moves `amount` on one account from `source` to `target`: a credit
    /// against the source allocation and a matching debit against the target.
    pub fn add_entry_pair(
        &mut self,
        amount: Decimal,
        account_no: &str,
        memo: Option<&str>,
        source: Allocation<'_>,
        target: Allocation<'_>,
    ) {
        for (entry_type, allocation) in [(EntryType::Credit, source), (EntryType::Debit, target)] {
            let mut entry = GlEntry::new(
                entry_type,
                amount,
                account_no,
                allocation.class_id,
                allocation.cost_center,
            );
            entry.memo = memo.map(str::to_string);
            entry.date = self.date;
            self.entries.push(entry);
        }
    }

    pub fn total_debits(&self) -> Decimal {
        self.total_of(EntryType::Debit)
    }

    pub fn total_credits(&self) -> Decimal {
        self.total_of(EntryType::Credit)
    }

    pub fn is_balanced(&self) -> bool {
        self.total_debits() == self.total_credits()
    }

    fn total_of(&self, entry_type: EntryType) -> Decimal {
        self.entries
            .iter()
            .filter(|e| e.entry_type == entry_type)
            .map(|e| e.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn transaction() -> GlTransaction {
        GlTransaction::new(
            GENERAL_JOURNAL,
            IntacctDate::from_ymd(2025, 6, 30).unwrap(),
            "Month-end allocation",
        )
    }

    #[test]
    fn test_entry_pair_is_balanced() {
        let mut tx = transaction();
        tx.add_entry_pair(
            dec!(100.00),
            "6100",
            Some("Reallocate IT"),
            Allocation::new("OPS", "CC-100"),
            Allocation::new("SALES", "CC-200"),
        );

        assert_eq!(tx.entries.len(), 2);
        assert_eq!(tx.entries[0].entry_type, EntryType::Credit);
        assert_eq!(tx.entries[0].class_id, "OPS");
        assert_eq!(tx.entries[1].entry_type, EntryType::Debit);
        assert_eq!(tx.entries[1].cost_center, "CC-200");
        assert_eq!(tx.entries[1].date, tx.date);
        assert_eq!(tx.entries[1].memo.as_deref(), Some("Reallocate IT"));
        assert!(tx.is_balanced());
        assert_eq!(tx.total_debits(), dec!(100.00));
    }

    #[test]
    fn test_unbalanced_transaction() {
        let mut tx = transaction();
        tx.add_entry(GlEntry::debit(dec!(10), "1000", "CL", "CC"));
        tx.add_entry(GlEntry::credit(dec!(7.5), "2000", "CL", "CC"));

        assert!(!tx.is_balanced());
        assert_eq!(tx.total_debits() - tx.total_credits(), dec!(2.5));
    }

    #[test]
    fn test_empty_transaction_is_trivially_balanced() {
        assert!(transaction().is_balanced());
    }

    #[test]
    fn test_from_key() {
        let tx = GlTransaction::from_key("4412");
        assert_eq!(tx.key.as_deref(), Some("4412"));
        assert!(tx.entries.is_empty());
        assert!(tx.journal_id.is_empty());
    }
}
