use qz_core::QuizError;
use qz_parser::XmlElementNode;

pub(crate) fn get_required_non_empty_attr<'a>(
    node: &'a XmlElementNode,
    name: &str,
) -> Result<&'a str, QuizError> {
    let Some(raw) = node.attr(name) else {
        return Err(QuizError::with_span(
            "QZ_XML_ATTR_MISSING",
            format!(
                "Missing required attribute \"{}\" on <{}>.",
                name, node.name
            ),
            node.location.clone(),
        ));
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QuizError::with_span(
            "QZ_XML_ATTR_INVALID",
            format!("Attribute \"{}\" on <{}> cannot be empty.", name, node.name),
            node.location.clone(),
        ));
    }

    Ok(trimmed)
}

pub(crate) fn parse_usize_attr(node: &XmlElementNode, name: &str) -> Result<usize, QuizError> {
    let raw = get_required_non_empty_attr(node, name)?;
    raw.parse::<usize>().map_err(|_| {
        QuizError::with_span(
            "QZ_XML_ATTR_INVALID",
            format!(
                "Attribute \"{}\" on <{}> must be a non-negative integer, got \"{}\".",
                name, node.name, raw
            ),
            node.location.clone(),
        )
    })
}

pub(crate) fn unknown_element(node: &XmlElementNode, parent: &str) -> QuizError {
    QuizError::with_span(
        "QZ_XML_UNKNOWN_ELEMENT",
        format!("<{}> is not allowed inside <{}>.", node.name, parent),
        node.location.clone(),
    )
}
