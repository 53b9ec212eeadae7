#![allow(dead_code)]

use intacct_gl::domain::date::IntacctDate;
use intacct_gl::domain::gl_entry::GlEntry;
use intacct_gl::domain::gl_transaction::{Allocation, GENERAL_JOURNAL, GlTransaction};
use intacct_gl::domain::session::{ApiSession, SessionRef};
use rand::Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::sync::Arc;

pub fn session() -> SessionRef {
    Arc::new(ApiSession::new("test-session", None))
}

pub fn transaction() -> GlTransaction {
    let mut tx = GlTransaction::new(
        GENERAL_JOURNAL,
        IntacctDate::from_ymd(2025, 6, 30).unwrap(),
        "June IT recharge",
    );
    tx.add_entry_pair(
        dec!(1250.00),
        "6100",
        Some("IT services"),
        Allocation::new("OPS", "CC-100"),
        Allocation::new("SALES", "CC-200"),
    );
    tx
}

/// An entry with every optional field set.
pub fn full_entry() -> GlEntry {
    GlEntry::debit(dec!(42.10), "6200", "SALES", "CC-200")
        .with_document("INV-1007")
        .with_date(IntacctDate::from_ymd(2025, 6, 27).unwrap())
        .with_memo("Courier")
        .with_location("NY")
}

/// A `<response>` whose control and authentication succeeded, wrapping the
/// given `<result>` fragments.
pub fn accepted_response(results: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<response>
  <control>
    <status>success</status>
    <senderid>acme</senderid>
    <controlid>echoed</controlid>
    <uniqueid>false</uniqueid>
    <dtdversion>2.1</dtdversion>
  </control>
  <operation>
    <authentication>
      <status>success</status>
      <userid>xml_user</userid>
      <companyid>ACME</companyid>
    </authentication>
    {}
  </operation>
</response>"#,
        results.join("\n")
    )
}

pub fn key_result(key: &str) -> String {
    format!(
        "<result><status>success</status><function>create_gltransaction</function><key>{key}</key></result>"
    )
}

/// A successful result tagged with `control_id`.
pub fn tagged_key_result(control_id: &str, key: &str) -> String {
    format!(
        "<result><status>success</status><function>create_gltransaction</function><controlid>{control_id}</controlid><key>{key}</key></result>"
    )
}

pub fn failure_result(error_no: &str, description: &str) -> String {
    format!(
        "<result><status>failure</status><function>create_gltransaction</function>\
         <errormessage><error><errorno>{error_no}</errorno><description>{description}</description>\
         <description2/><correction/></error></errormessage></result>"
    )
}

/// Writes `pairs` random balanced entry pairs as an entries CSV.
pub fn generate_entries_csv(path: &Path, pairs: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    let mut rng = rand::thread_rng();

    wtr.write_record([
        "trtype",
        "amount",
        "glaccountno",
        "classid",
        "costcenter",
        "memo",
        "locationid",
    ])?;

    for i in 1..=pairs {
        let amount = Decimal::new(rng.gen_range(1..10_000_000), 2).to_string();
        let account = format!("{}", rng.gen_range(6000..6999));
        let memo = format!("Line {i}");
        wtr.write_record(["credit", &amount, &account, "OPS", "CC-100", &memo, ""])?;
        wtr.write_record(["debit", &amount, &account, "SALES", "CC-200", &memo, ""])?;
    }

    wtr.flush()?;
    Ok(())
}
