use crate::error::{IntacctError, Result};
use quick_xml::{
    Reader, Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};
use std::io::Write;

/// A node of an XML document, owned and detached from any reader.
///
/// Operations build their function contents out of these, and responses are
/// parsed into them before any typed decoding happens.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// An element holding a single text value, e.g. `<journalid>GJ</journalid>`.
    pub fn leaf(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(value.into()),
            ..Self::default()
        }
    }

    /// An element wrapping other elements.
    pub fn parent(name: impl Into<String>, children: Vec<XmlElement>) -> Self {
        Self {
            name: name.into(),
            children,
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Like [`child`](Self::child), ignoring ASCII case. Read responses spell
    /// some fields in upper case (`RECORDNO`).
    pub fn child_ignore_case(&self, name: &str) -> Option<&XmlElement> {
        self.children
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the first direct child with the given name, if it has any.
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(|c| c.text.as_deref())
    }

    pub fn required_child(&self, name: &str) -> Result<&XmlElement> {
        self.child(name).ok_or_else(|| {
            IntacctError::MalformedResponse(format!("<{}> has no <{}> element", self.name, name))
        })
    }

    pub fn required_text(&self, name: &str) -> Result<&str> {
        self.child_text(name).ok_or_else(|| {
            IntacctError::MalformedResponse(format!("<{}> has no <{}> value", self.name, name))
        })
    }
}

/// Renders `root` as a complete UTF-8 document with an XML declaration.
pub fn write_document(root: &XmlElement) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(xml)?;
    write_element(&mut writer, root)?;
    String::from_utf8(writer.into_inner()).map_err(xml)
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.text.is_none() && element.children.is_empty() {
        writer.write_event(Event::Empty(start)).map_err(xml)?;
        return Ok(());
    }

    writer.write_event(Event::Start(start)).map_err(xml)?;
    if let Some(text) = &element.text {
        writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml)?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(xml)?;
    Ok(())
}

/// Parses a document into its root element.
///
/// Whitespace around text is trimmed and namespace prefixes are dropped from
/// element and attribute names. Values are normalized: a value that was only
/// whitespace reads back as absent.
pub fn parse_document(input: &str) -> Result<XmlElement> {
    let mut reader = Reader::from_str(input);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        match reader.read_event().map_err(xml)? {
            Event::Start(start) => stack.push(element_from_start(&start)?),
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| IntacctError::Xml("unbalanced end tag".to_string()))?;
                attach(&mut stack, &mut root, element);
            }
            Event::Text(text) => {
                let value = text.unescape().map_err(xml)?;
                append_text(&mut stack, &value);
            }
            Event::CData(data) => {
                let value = String::from_utf8_lossy(&data.into_inner()).into_owned();
                append_text(&mut stack, &value);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(IntacctError::Xml("document ended inside an element".to_string()));
    }
    root.ok_or_else(|| IntacctError::Xml("document has no root element".to_string()))
}

fn element_from_start(start: &BytesStart<'_>) -> Result<XmlElement> {
    let mut element = XmlElement::new(String::from_utf8_lossy(start.local_name().as_ref()));
    for attribute in start.attributes() {
        let attribute = attribute.map_err(xml)?;
        let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
        let value = attribute.unescape_value().map_err(xml)?.into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        // Anything after the first root is ignored.
        None if root.is_none() => *root = Some(element),
        None => {}
    }
}

fn append_text(stack: &mut [XmlElement], value: &str) {
    if let Some(current) = stack.last_mut() {
        match &mut current.text {
            Some(text) => text.push_str(value),
            None => current.text = Some(value.to_string()),
        }
    }
}

fn xml<E: std::fmt::Display>(e: E) -> IntacctError {
    IntacctError::Xml(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_nested_document() {
        let root = XmlElement::parent(
            "function",
            vec![XmlElement::parent(
                "create_gltransaction",
                vec![XmlElement::leaf("journalid", "GJ")],
            )],
        )
        .with_attribute("controlid", "abc");

        let doc = write_document(&root).unwrap();
        assert!(doc.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(doc.contains("<function controlid=\"abc\">"));
        assert!(doc.contains("<journalid>GJ</journalid>"));
    }

    #[test]
    fn test_write_escapes_text_and_empty_elements() {
        let root = XmlElement::parent(
            "content",
            vec![
                XmlElement::leaf("memo", "Fees & <charges>"),
                XmlElement::new("getAPISession"),
            ],
        );

        let doc = write_document(&root).unwrap();
        assert!(doc.contains("<memo>Fees &amp; &lt;charges&gt;</memo>"));
        assert!(doc.contains("<getAPISession/>"));
    }

    #[test]
    fn test_parse_document_tree() {
        let input = r#"<?xml version="1.0" encoding="UTF-8"?>
            <result>
                <status>success</status>
                <function controlid="f-1">create_gltransaction</function>
                <key> 1234 </key>
                <memo><![CDATA[A & B]]></memo>
                <empty/>
            </result>"#;

        let root = parse_document(input).unwrap();
        assert_eq!(root.name, "result");
        assert_eq!(root.child_text("status"), Some("success"));
        assert_eq!(root.child("function").unwrap().attribute("controlid"), Some("f-1"));
        assert_eq!(root.child_text("key"), Some("1234"));
        assert_eq!(root.child_text("memo"), Some("A & B"));
        assert!(root.child("empty").is_some());
        assert_eq!(root.child_text("empty"), None);
    }

    #[test]
    fn test_parse_unescapes_entities() {
        let root = parse_document("<memo>Fees &amp; charges</memo>").unwrap();
        assert_eq!(root.text.as_deref(), Some("Fees & charges"));
    }

    #[test]
    fn test_parse_normalizes_values() {
        let root = parse_document(
            "<glentry><memo>  Lunch  </memo><description>   </description><RECORDNO>5</RECORDNO></glentry>",
        )
        .unwrap();
        assert_eq!(root.child_text("memo"), Some("Lunch"));
        assert_eq!(root.child_text("description"), None);
        assert_eq!(root.child_ignore_case("recordno").and_then(|c| c.text.as_deref()), Some("5"));
        assert!(root.child("recordno").is_none());
    }

    #[test]
    fn test_parse_rejects_truncated_document() {
        assert!(matches!(
            parse_document("<response><control>"),
            Err(IntacctError::Xml(_))
        ));
        assert!(matches!(parse_document(""), Err(IntacctError::Xml(_))));
    }

    #[test]
    fn test_required_child_reports_missing_element() {
        let root = XmlElement::parent("control", vec![]);
        let err = root.required_text("status").unwrap_err();
        assert!(matches!(err, IntacctError::MalformedResponse(_)));
        assert!(err.to_string().contains("<status>"));
    }
}
