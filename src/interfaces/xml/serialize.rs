use super::element::XmlElement;
use crate::error::Result;

/// Types that render themselves as a list of sibling elements.
pub trait ToXmlElements {
    fn to_xml_elements(&self) -> Vec<XmlElement>;
}

/// Types that can be rebuilt from a single response element.
pub trait FromXmlElement: Sized {
    fn from_xml_element(element: &XmlElement) -> Result<Self>;
}

/// Appends `<name>value</name>` unless the value is absent or blank.
pub fn serialize_string(value: Option<&str>, name: &str, out: &mut Vec<XmlElement>) {
    if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
        out.push(XmlElement::leaf(name, value));
    }
}

/// Appends `<name>...</name>` wrapping the value's own elements, if present.
pub fn serialize_child<T: ToXmlElements>(value: Option<&T>, name: &str, out: &mut Vec<XmlElement>) {
    if let Some(value) = value {
        out.push(XmlElement::parent(name, value.to_xml_elements()));
    }
}

/// Appends `<outer><inner>..</inner>...</outer>`, skipping empty lists entirely.
pub fn serialize_array<T: ToXmlElements>(
    values: &[T],
    outer: &str,
    inner: &str,
    out: &mut Vec<XmlElement>,
) {
    if values.is_empty() {
        return;
    }
    let items = values
        .iter()
        .map(|v| XmlElement::parent(inner, v.to_xml_elements()))
        .collect();
    out.push(XmlElement::parent(outer, items));
}
