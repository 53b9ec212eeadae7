use crate::application::operation::{AuthenticatedOperation, Operation};
use crate::domain::custom_field::CustomField;
use crate::domain::date::IntacctDate;
use crate::domain::gl_transaction::GlTransaction;
use crate::domain::result::OperationResult;
use crate::domain::session::SessionRef;
use crate::error::{IntacctError, Result};
use crate::interfaces::xml::element::XmlElement;
use crate::interfaces::xml::serialize::{
    FromXmlElement, ToXmlElements, serialize_array, serialize_child, serialize_string,
};

/// Creates a journal transaction in any journal except statistical ones.
///
/// The service rejects transactions whose debits and credits do not balance
/// (error `PL05000053`); that check is left to it. Every entry needs an
/// amount, type, account, class and cost center.
///
/// ```no_run
/// # use std::sync::Arc;
/// # use rust_decimal_macros::dec;
/// # use intacct_gl::application::operations::create_gl_transaction::CreateGlTransactionOperation;
/// # use intacct_gl::domain::date::IntacctDate;
/// # use intacct_gl::domain::gl_transaction::{Allocation, GlTransaction, GENERAL_JOURNAL};
/// # use intacct_gl::domain::session::ApiSession;
/// # fn main() -> intacct_gl::error::Result<()> {
/// let mut tx = GlTransaction::new(GENERAL_JOURNAL, IntacctDate::from_ymd(2025, 6, 30)?, "IT recharge");
/// tx.add_entry_pair(
///     dec!(100.00),
///     "6100",
///     Some("June recharge"),
///     Allocation::new("OPS", "CC-100"),
///     Allocation::new("SALES", "CC-200"),
/// );
/// let session = Arc::new(ApiSession::new("session-id", None));
/// let operation = CreateGlTransactionOperation::new(session, tx)?.with_reference_no("JUN-25");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CreateGlTransactionOperation {
    session: SessionRef,
    transaction: GlTransaction,
    reverse_date: Option<IntacctDate>,
    reference_no: Option<String>,
    source_entity: Option<String>,
    custom_fields: Vec<CustomField>,
}

impl CreateGlTransactionOperation {
    pub fn new(session: SessionRef, transaction: GlTransaction) -> Result<Self> {
        if !session.is_established() {
            return Err(IntacctError::InvalidArgument(
                "session has no credentials".to_string(),
            ));
        }
        if transaction.journal_id.trim().is_empty() {
            return Err(IntacctError::InvalidArgument(
                "transaction has no journal id".to_string(),
            ));
        }

        Ok(Self {
            session,
            transaction,
            reverse_date: None,
            reference_no: None,
            source_entity: None,
            custom_fields: Vec::new(),
        })
    }

    /// Date on which the service posts an automatic reversal.
    pub fn with_reverse_date(mut self, date: IntacctDate) -> Self {
        self.reverse_date = Some(date);
        self
    }

    pub fn with_reference_no(mut self, reference_no: impl Into<String>) -> Self {
        self.reference_no = Some(reference_no.into());
        self
    }

    /// Entity the transaction is recorded against in a multi-entity company.
    pub fn with_source_entity(mut self, source_entity: impl Into<String>) -> Self {
        self.source_entity = Some(source_entity.into());
        self
    }

    pub fn with_custom_fields(mut self, custom_fields: Vec<CustomField>) -> Self {
        self.custom_fields = custom_fields;
        self
    }

    pub fn transaction(&self) -> &GlTransaction {
        &self.transaction
    }

    pub fn reverse_date(&self) -> Option<IntacctDate> {
        self.reverse_date
    }

    pub fn reference_no(&self) -> Option<&str> {
        self.reference_no.as_deref()
    }

    pub fn source_entity(&self) -> Option<&str> {
        self.source_entity.as_deref()
    }

    pub fn custom_fields(&self) -> &[CustomField] {
        &self.custom_fields
    }
}

impl Operation for CreateGlTransactionOperation {
    type Output = GlTransaction;

    fn function_name(&self) -> &'static str {
        "create_gltransaction"
    }

    fn response_element(&self) -> &'static str {
        "key"
    }

    fn function_contents(&self) -> Vec<XmlElement> {
        let mut out = self.transaction.to_xml_elements();
        serialize_child(self.reverse_date.as_ref(), "reversedate", &mut out);
        serialize_string(self.reference_no.as_deref(), "referenceno", &mut out);
        serialize_string(self.source_entity.as_deref(), "sourceentity", &mut out);
        serialize_array(&self.custom_fields, "customfields", "customfield", &mut out);
        out
    }

    fn process_response_data(&self, data: &XmlElement) -> Result<OperationResult<GlTransaction>> {
        let transaction = GlTransaction::from_xml_element(data)?;
        Ok(OperationResult::Success(transaction))
    }
}

impl AuthenticatedOperation for CreateGlTransactionOperation {
    fn session(&self) -> &SessionRef {
        &self.session
    }
}
