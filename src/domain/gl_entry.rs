use super::date::IntacctDate;
use crate::error::IntacctError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Deserializes through [`FromStr`], so CSV, JSON and CLI input accept the
/// same spellings.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum EntryType {
    Debit,
    Credit,
}

impl EntryType {
    /// The `trtype` value the API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Debit => "debit",
            EntryType::Credit => "credit",
        }
    }
}

impl FromStr for EntryType {
    type Err = IntacctError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debit" | "1" => Ok(EntryType::Debit),
            "credit" | "-1" => Ok(EntryType::Credit),
            other => Err(IntacctError::InvalidArgument(format!(
                "unknown entry type '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for EntryType {
    type Error = IntacctError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One debit or credit line of a journal transaction.
///
/// `cost_center` is sent as the entry's department dimension.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct GlEntry {
    pub entry_type: EntryType,
    pub amount: Decimal,
    pub account_no: String,
    pub class_id: String,
    pub cost_center: String,
    pub memo: Option<String>,
    pub location_id: Option<String>,
    pub document: Option<String>,
    pub date: Option<IntacctDate>,
}

impl GlEntry {
    pub fn new(
        entry_type: EntryType,
        amount: Decimal,
        account_no: impl Into<String>,
        class_id: impl Into<String>,
        cost_center: impl Into<String>,
    ) -> Self {
        Self {
            entry_type,
            amount,
            account_no: account_no.into(),
            class_id: class_id.into(),
            cost_center: cost_center.into(),
            memo: None,
            location_id: None,
            document: None,
            date: None,
        }
    }

    pub fn debit(
        amount: Decimal,
        account_no: impl Into<String>,
        class_id: impl Into<String>,
        cost_center: impl Into<String>,
    ) -> Self {
        Self::new(EntryType::Debit, amount, account_no, class_id, cost_center)
    }

    pub fn credit(
        amount: Decimal,
        account_no: impl Into<String>,
        class_id: impl Into<String>,
        cost_center: impl Into<String>,
    ) -> Self {
        Self::new(EntryType::Credit, amount, account_no, class_id, cost_center)
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn with_location(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.document = Some(document.into());
        self
    }

    pub fn with_date(mut self, date: IntacctDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Debits count positive, credits negative.
    pub fn signed_amount(&self) -> Decimal {
        match self.entry_type {
            EntryType::Debit => self.amount,
            EntryType::Credit => -self.amount,
        }
    }
}
