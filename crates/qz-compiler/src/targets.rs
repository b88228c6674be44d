use std::collections::BTreeMap;

use qz_core::{FrameIndex, QuizError};
use qz_parser::XmlElementNode;

use crate::xml_utils::get_required_non_empty_attr;

/// Frame ids declared in the document, mapped to their frame index.
#[derive(Debug, Clone, Default)]
pub(crate) struct FrameIds {
    by_id: BTreeMap<String, FrameIndex>,
}

impl FrameIds {
    pub(crate) fn collect(frames: &[&XmlElementNode]) -> Result<Self, QuizError> {
        let mut by_id = BTreeMap::new();
        for (frame_index, node) in frames.iter().enumerate() {
            let Some(id) = node.attr("id").map(str::trim) else {
                continue;
            };
            if id.is_empty() || id.parse::<usize>().is_ok() {
                return Err(QuizError::with_span(
                    "QZ_XML_ATTR_INVALID",
                    format!("Frame id \"{}\" must be a non-numeric name.", id),
                    node.location.clone(),
                ));
            }
            if by_id.insert(id.to_string(), frame_index).is_some() {
                return Err(QuizError::with_span(
                    "QZ_XML_DUPLICATE_ID",
                    format!("Frame id \"{}\" is declared more than once.", id),
                    node.location.clone(),
                ));
            }
        }
        Ok(Self { by_id })
    }

    /// Integers are taken as-is, even when no frame exists there yet.
    pub(crate) fn resolve(&self, raw: &str, node: &XmlElementNode) -> Result<FrameIndex, QuizError> {
        if let Ok(index) = raw.parse::<usize>() {
            return Ok(index);
        }
        self.by_id.get(raw).copied().ok_or_else(|| {
            QuizError::with_span(
                "QZ_XML_UNKNOWN_FRAME_ID",
                format!("<{}> refers to unknown frame id \"{}\".", node.name, raw),
                node.location.clone(),
            )
        })
    }

    pub(crate) fn required_target(
        &self,
        node: &XmlElementNode,
        attr: &str,
    ) -> Result<FrameIndex, QuizError> {
        let raw = get_required_non_empty_attr(node, attr)?;
        self.resolve(raw, node)
    }

    pub(crate) fn optional_target(
        &self,
        node: &XmlElementNode,
        attr: &str,
    ) -> Result<Option<FrameIndex>, QuizError> {
        if node.attr(attr).is_none() {
            return Ok(None);
        }
        self.required_target(node, attr).map(Some)
    }
}
