//! XML mapping for the domain types, in the shapes the gateway uses.

use super::element::XmlElement;
use super::serialize::{FromXmlElement, ToXmlElements, serialize_child, serialize_string};
use crate::domain::custom_field::CustomField;
use crate::domain::date::IntacctDate;
use crate::domain::gl_entry::{EntryType, GlEntry};
use crate::domain::gl_transaction::GlTransaction;
use crate::domain::result::ErrorDescriptor;
use crate::domain::session::ApiSession;
use crate::error::{IntacctError, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

impl ToXmlElements for IntacctDate {
    fn to_xml_elements(&self) -> Vec<XmlElement> {
        vec![
            XmlElement::leaf("year", self.year().to_string()),
            XmlElement::leaf("month", self.month().to_string()),
            XmlElement::leaf("day", self.day().to_string()),
        ]
    }
}

impl FromXmlElement for IntacctDate {
    fn from_xml_element(element: &XmlElement) -> Result<Self> {
        if element.child("year").is_none() {
            let text = element.text.as_deref().unwrap_or_default();
            return text.parse().map_err(|_| malformed(element, text));
        }
        let year = parse_number(element, "year")?;
        let month = parse_number(element, "month")?;
        let day = parse_number(element, "day")?;
        IntacctDate::from_ymd(year, month, day)
            .map_err(|e| IntacctError::MalformedResponse(e.to_string()))
    }
}

impl ToXmlElements for CustomField {
    fn to_xml_elements(&self) -> Vec<XmlElement> {
        vec![
            XmlElement::leaf("customfieldname", self.name.as_str()),
            XmlElement::leaf("customfieldvalue", self.value.as_str()),
        ]
    }
}

impl FromXmlElement for CustomField {
    fn from_xml_element(element: &XmlElement) -> Result<Self> {
        Ok(CustomField::new(
            element.required_text("customfieldname")?,
            element.child_text("customfieldvalue").unwrap_or_default(),
        ))
    }
}

impl ToXmlElements for GlEntry {
    fn to_xml_elements(&self) -> Vec<XmlElement> {
        let mut out = vec![
            XmlElement::leaf("trtype", self.entry_type.as_str()),
            XmlElement::leaf("amount", self.amount.to_string()),
            XmlElement::leaf("glaccountno", self.account_no.as_str()),
        ];
        serialize_string(self.document.as_deref(), "document", &mut out);
        serialize_child(self.date.as_ref(), "datecreated", &mut out);
        serialize_string(self.memo.as_deref(), "memo", &mut out);
        serialize_string(self.location_id.as_deref(), "locationid", &mut out);
        serialize_string(Some(self.cost_center.as_str()), "departmentid", &mut out);
        serialize_string(Some(self.class_id.as_str()), "classid", &mut out);
        out
    }
}

impl FromXmlElement for GlEntry {
    fn from_xml_element(element: &XmlElement) -> Result<Self> {
        let entry_type = element
            .required_text("trtype")?
            .parse::<EntryType>()
            .map_err(|e| IntacctError::MalformedResponse(e.to_string()))?;
        let amount_text = element.required_text("amount")?;
        let amount = Decimal::from_str(amount_text).map_err(|_| malformed(element, amount_text))?;

        let mut entry = GlEntry::new(
            entry_type,
            amount,
            element.required_text("glaccountno")?,
            element.child_text("classid").unwrap_or_default(),
            element.child_text("departmentid").unwrap_or_default(),
        );
        entry.memo = element.child_text("memo").map(str::to_string);
        entry.location_id = element.child_text("locationid").map(str::to_string);
        entry.document = element.child_text("document").map(str::to_string);
        entry.date = element
            .child("datecreated")
            .map(IntacctDate::from_xml_element)
            .transpose()?;
        Ok(entry)
    }
}

impl ToXmlElements for GlTransaction {
    fn to_xml_elements(&self) -> Vec<XmlElement> {
        let mut out = vec![XmlElement::leaf("journalid", self.journal_id.as_str())];
        serialize_child(self.date.as_ref(), "datecreated", &mut out);
        serialize_string(Some(self.description.as_str()), "description", &mut out);
        let entries = self
            .entries
            .iter()
            .map(|e| XmlElement::parent("glentry", e.to_xml_elements()))
            .collect();
        out.push(XmlElement::parent("gltransactionentries", entries));
        out
    }
}

impl FromXmlElement for GlTransaction {
    /// Accepts the bare `<key>` a create returns, a `<gltransaction>` record,
    /// or a `<data>` list holding exactly one record.
    fn from_xml_element(element: &XmlElement) -> Result<Self> {
        if element.name == "key" {
            let key = element.text.as_deref().unwrap_or_default().trim();
            if key.is_empty() {
                return Err(IntacctError::MalformedResponse("empty <key> element".to_string()));
            }
            return Ok(GlTransaction::from_key(key));
        }

        if element.name == "data" {
            let mut records = element
                .children
                .iter()
                .filter(|c| c.name.eq_ignore_ascii_case("gltransaction"));
            return match (records.next(), records.next()) {
                (Some(record), None) => GlTransaction::from_xml_element(record),
                _ => Err(IntacctError::MalformedResponse(
                    "<data> must hold exactly one <gltransaction>".to_string(),
                )),
            };
        }

        if !element.name.eq_ignore_ascii_case("gltransaction") {
            return Err(IntacctError::MalformedResponse(format!(
                "expected <key> or <gltransaction>, found <{}>",
                element.name
            )));
        }

        let entries = match element.child("gltransactionentries") {
            Some(list) => list
                .children_named("glentry")
                .map(GlEntry::from_xml_element)
                .collect::<Result<Vec<_>>>()?,
            None => Vec::new(),
        };

        Ok(GlTransaction {
            key: element
                .child_text("key")
                .or_else(|| {
                    element
                        .child_ignore_case("recordno")
                        .and_then(|c| c.text.as_deref())
                })
                .map(str::to_string),
            journal_id: element.child_text("journalid").unwrap_or_default().to_string(),
            date: element
                .child("datecreated")
                .map(IntacctDate::from_xml_element)
                .transpose()?,
            description: element.child_text("description").unwrap_or_default().to_string(),
            entries,
        })
    }
}

impl FromXmlElement for ErrorDescriptor {
    fn from_xml_element(element: &XmlElement) -> Result<Self> {
        let text = |name: &str| element.child_text(name).map(str::to_string);
        Ok(ErrorDescriptor {
            error_no: text("errorno"),
            description: text("description"),
            description2: text("description2"),
            correction: text("correction"),
        })
    }
}

impl FromXmlElement for ApiSession {
    fn from_xml_element(element: &XmlElement) -> Result<Self> {
        Ok(ApiSession::new(
            element.required_text("sessionid")?,
            element.child_text("endpoint").map(str::to_string),
        ))
    }
}

/// Reads every `<error>` under an `<errormessage>` element.
pub fn parse_errors(errormessage: &XmlElement) -> Result<Vec<ErrorDescriptor>> {
    errormessage
        .children_named("error")
        .map(ErrorDescriptor::from_xml_element)
        .collect()
}

fn parse_number<T: FromStr>(element: &XmlElement, name: &str) -> Result<T> {
    let text = element.required_text(name)?;
    text.trim().parse().map_err(|_| malformed(element, text))
}

fn malformed(element: &XmlElement, value: &str) -> IntacctError {
    IntacctError::MalformedResponse(format!("<{}> has invalid value '{}'", element.name, value))
}
