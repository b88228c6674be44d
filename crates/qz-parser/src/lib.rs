mod xml;

pub use xml::{
    element_children, inline_text_content, parse_xml_document, XmlDocument, XmlElementNode,
    XmlNode, XmlTextNode,
};
