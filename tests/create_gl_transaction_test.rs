mod common;

use intacct_gl::application::operation::Operation;
use intacct_gl::application::operations::create_gl_transaction::CreateGlTransactionOperation;
use intacct_gl::domain::custom_field::CustomField;
use intacct_gl::domain::date::IntacctDate;
use intacct_gl::domain::gl_transaction::GlTransaction;
use intacct_gl::domain::session::{ApiSession, SessionRef};
use intacct_gl::error::IntacctError;
use intacct_gl::interfaces::xml::element::{XmlElement, parse_document, write_document};
use intacct_gl::interfaces::xml::serialize::ToXmlElements;
use std::sync::Arc;

#[test]
fn test_construction_requires_session_and_transaction() {
    let blank: SessionRef = Arc::new(ApiSession::new("", None));
    assert!(matches!(
        CreateGlTransactionOperation::new(blank, common::transaction()),
        Err(IntacctError::InvalidArgument(_))
    ));
    assert!(matches!(
        CreateGlTransactionOperation::new(common::session(), GlTransaction::default()),
        Err(IntacctError::InvalidArgument(_))
    ));
    assert!(CreateGlTransactionOperation::new(common::session(), common::transaction()).is_ok());
}

#[test]
fn test_minimal_request_document() {
    let op = CreateGlTransactionOperation::new(common::session(), common::transaction()).unwrap();
    let doc = write_document(&op.to_function_element()).unwrap();

    assert!(doc.contains("<create_gltransaction>"));
    assert!(doc.contains("<journalid>GJ</journalid>"));
    assert!(doc.contains("<description>June IT recharge</description>"));
    assert_eq!(doc.matches("<glentry>").count(), 2);
    assert!(doc.contains("<trtype>credit</trtype>"));
    assert!(doc.contains("<amount>1250.00</amount>"));
    for absent in ["reversedate", "referenceno", "sourceentity", "customfields"] {
        assert!(!doc.contains(absent), "{absent} should be omitted");
    }
}

#[test]
fn test_full_request_document_order() {
    let op = CreateGlTransactionOperation::new(common::session(), common::transaction())
        .unwrap()
        .with_reverse_date(IntacctDate::from_ymd(2025, 7, 1).unwrap())
        .with_reference_no("JUN-25")
        .with_source_entity("US-EAST")
        .with_custom_fields(vec![
            CustomField::new("PROJECT", "Alpha"),
            CustomField::new("APPROVER", "jdoe"),
        ]);
    let doc = write_document(&op.to_function_element()).unwrap();

    let positions: Vec<usize> = [
        "<gltransactionentries>",
        "<reversedate>",
        "<referenceno>JUN-25</referenceno>",
        "<sourceentity>US-EAST</sourceentity>",
        "<customfields>",
    ]
    .iter()
    .map(|tag| doc.find(tag).unwrap_or_else(|| panic!("{tag} missing")))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    for tag in ["<reversedate>", "<referenceno>", "<sourceentity>", "<customfields>"] {
        assert_eq!(doc.matches(tag).count(), 1, "{tag} should appear once");
    }
    assert_eq!(doc.matches("<customfield>").count(), 2);
}

#[test]
fn test_round_trip_through_xml_text() {
    let tx = common::transaction();
    let op = CreateGlTransactionOperation::new(common::session(), tx.clone()).unwrap();

    let echoed = XmlElement::parent("gltransaction", tx.to_xml_elements());
    let text = write_document(&echoed).unwrap();
    let parsed = parse_document(&text).unwrap();

    let result = op.process_response_data(&parsed).unwrap();
    assert!(result.is_success());
    assert_eq!(result.into_value(), Some(tx));
}

#[test]
fn test_round_trip_with_fully_described_entries() {
    let mut tx = common::transaction();
    tx.add_entry(common::full_entry());
    let op = CreateGlTransactionOperation::new(common::session(), tx.clone()).unwrap();

    let doc = write_document(&op.to_function_element()).unwrap();
    let entry = parse_document(&doc)
        .unwrap()
        .required_child("gltransactionentries")
        .unwrap()
        .children_named("glentry")
        .last()
        .cloned()
        .unwrap();
    let names: Vec<&str> = entry.children.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "trtype",
            "amount",
            "glaccountno",
            "document",
            "datecreated",
            "memo",
            "locationid",
            "departmentid",
            "classid",
        ]
    );

    let echoed = XmlElement::parent("gltransaction", tx.to_xml_elements());
    let parsed = parse_document(&write_document(&echoed).unwrap()).unwrap();
    let result = op.process_response_data(&parsed).unwrap();
    assert_eq!(result.into_value(), Some(tx));
}
