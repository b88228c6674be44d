//! Compiles the `<quiz>` XML authoring format into a [`FrameGraph`].
//!
//! Frame elements (`<statement>`, `<question>`, `<switch>`) receive frame
//! indices in document order. Targets are integers or frame ids; integers are
//! never range-checked, so a quiz can end by pointing past its last frame.

use qz_core::{AnswerValue, FrameIndex, QuizError};
use qz_parser::{element_children, inline_text_content, parse_xml_document, XmlElementNode};
use qz_runtime::{FrameGraph, StatementContent, TextSource};

mod targets;
mod xml_utils;

use targets::FrameIds;
use xml_utils::{parse_usize_attr, unknown_element};

#[derive(Debug, Clone)]
pub struct CompiledQuiz {
    pub graph: FrameGraph,
    pub entry: FrameIndex,
}

pub fn compile_quiz_xml(source: &str) -> Result<CompiledQuiz, QuizError> {
    let document = parse_xml_document(source)?;
    let root = &document.root;
    if root.name != "quiz" {
        return Err(QuizError::with_span(
            "QZ_XML_ROOT",
            format!("Root element must be <quiz>, got <{}>.", root.name),
            root.location.clone(),
        ));
    }

    let frames = element_children(root).collect::<Vec<_>>();
    for node in &frames {
        if !matches!(node.name.as_str(), "statement" | "question" | "switch") {
            return Err(unknown_element(node, "quiz"));
        }
    }
    let ids = FrameIds::collect(&frames)?;

    let mut graph = match root.attr("title") {
        Some(title) => FrameGraph::with_title(title.trim()),
        None => FrameGraph::new(),
    };

    for (frame_index, node) in frames.iter().enumerate() {
        let created = match node.name.as_str() {
            "statement" => compile_statement(&mut graph, node, frame_index, &ids)?,
            "question" => compile_question(&mut graph, node, &ids)?,
            _ => compile_switch(&mut graph, node, &ids)?,
        };
        debug_assert_eq!(created, frame_index);
    }

    let entry = ids.optional_target(root, "entry")?.unwrap_or(0);
    tracing::debug!(
        frames = graph.len(),
        questions = graph.question_count(),
        entry,
        "compiled quiz"
    );
    Ok(CompiledQuiz { graph, entry })
}

fn compile_statement(
    graph: &mut FrameGraph,
    node: &XmlElementNode,
    frame_index: FrameIndex,
    ids: &FrameIds,
) -> Result<FrameIndex, QuizError> {
    let next = ids
        .optional_target(node, "next")?
        .unwrap_or(frame_index + 1);

    let refs = element_children(node).collect::<Vec<_>>();
    if let Some(other) = refs.iter().find(|child| child.name != "ref") {
        return Err(unknown_element(other, "statement"));
    }

    let text = inline_text_content(node);
    let content = match refs.as_slice() {
        [] => StatementContent::Literal(text),
        [reference] if text.is_empty() => statement_reference(reference),
        _ => StatementContent::invalid("statement mixes text and references"),
    };
    Ok(graph.create_statement(content, next))
}

/// Malformed references become placeholder content instead of failing the
/// whole quiz.
fn statement_reference(node: &XmlElementNode) -> StatementContent {
    let pretext = node.attr("pre").unwrap_or_default();
    let posttext = node.attr("post").unwrap_or_default();

    let items = element_children(node).collect::<Vec<_>>();
    if items.iter().any(|item| item.name != "item") {
        return StatementContent::invalid("<ref> may only contain <item> entries");
    }
    let table = items
        .iter()
        .map(|item| inline_text_content(item))
        .collect::<Vec<_>>();

    let index = match node.attr("index").map(|raw| raw.trim().parse::<usize>()) {
        Some(Ok(index)) => Some(index),
        Some(Err(_)) => return StatementContent::invalid("<ref> index is not an integer"),
        None => None,
    };

    match node.attr("source").map(str::trim) {
        Some("answers") => match index {
            Some(index) if table.is_empty() => {
                StatementContent::reference(TextSource::Answers, index, pretext, posttext)
            }
            Some(_) => StatementContent::invalid("answer references cannot carry items"),
            None => StatementContent::invalid("answer references need an index"),
        },
        Some("table") | None if !table.is_empty() => StatementContent::reference(
            TextSource::Table(table),
            index.unwrap_or(0),
            pretext,
            posttext,
        ),
        Some("table") | None => StatementContent::invalid("table reference without items"),
        Some(_) => StatementContent::invalid("unknown reference source"),
    }
}

fn compile_question(
    graph: &mut FrameGraph,
    node: &XmlElementNode,
    ids: &FrameIds,
) -> Result<FrameIndex, QuizError> {
    let prompt = match node.attr("prompt") {
        Some(prompt) => prompt.trim().to_string(),
        None => inline_text_content(node),
    };
    let question = graph.create_question(prompt);

    for child in element_children(node) {
        let label = inline_text_content(child);
        match child.name.as_str() {
            "choice" => {
                let target = ids.required_target(child, "next")?;
                graph.add_choice(question, label, target)?;
            }
            "exclusive" => {
                let target = ids.required_target(child, "next")?;
                graph.add_exclusive_choice(question, label, target)?;
            }
            _ => return Err(unknown_element(child, "question")),
        }
    }
    Ok(question)
}

fn compile_switch(
    graph: &mut FrameGraph,
    node: &XmlElementNode,
    ids: &FrameIds,
) -> Result<FrameIndex, QuizError> {
    if let Some(child) = element_children(node).next() {
        return Err(unknown_element(child, "switch"));
    }

    let slot = parse_usize_attr(node, "slot")?;
    let comparison = match (node.attr("equals"), node.attr("equals-frame")) {
        (Some(text), None) => AnswerValue::Text(text.to_string()),
        (None, Some(_)) => AnswerValue::Frame(parse_usize_attr(node, "equals-frame")?),
        (Some(_), Some(_)) => {
            return Err(QuizError::with_span(
                "QZ_XML_ATTR_INVALID",
                "<switch> takes either \"equals\" or \"equals-frame\", not both.",
                node.location.clone(),
            ))
        }
        (None, None) => {
            return Err(QuizError::with_span(
                "QZ_XML_ATTR_MISSING",
                "<switch> needs an \"equals\" or \"equals-frame\" attribute.",
                node.location.clone(),
            ))
        }
    };
    let if_true = ids.required_target(node, "then")?;
    let if_false = ids.required_target(node, "else")?;
    Ok(graph.create_conditional_switch(slot, comparison, if_true, if_false))
}
