use qz_runtime::{Frame, StatementContent, TextSource};

use crate::{json_string, LoadedQuiz};

/// One line per frame, in index order, after a short header.
pub(crate) fn inspect_lines(quiz: &LoadedQuiz) -> Vec<String> {
    let graph = &quiz.compiled.graph;
    let mut lines = vec![
        format!("TITLE_JSON:{}", json_string(&quiz.title)),
        format!("ENTRY:{}", quiz.compiled.entry),
        format!("FRAMES:{}", graph.len()),
        format!("STATEMENTS:{}", graph.statement_count()),
        format!("QUESTIONS:{}", graph.question_count()),
    ];

    for frame in graph.frames() {
        lines.push(match frame {
            Frame::Statement(statement) => format!(
                "FRAME:{}|statement|next={}|{}",
                statement.frame_index,
                statement.next,
                describe_content(&statement.content)
            ),
            Frame::Question(question) => {
                let targets = question
                    .choices
                    .iter()
                    .map(|choice| choice.target.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                format!(
                    "FRAME:{}|question|slot={}|targets={}|{}",
                    question.frame_index,
                    question.question_index,
                    targets,
                    json_string(&question.prompt)
                )
            }
            Frame::ConditionalSwitch(switch) => format!(
                "FRAME:{}|switch|slot={}|then={}|else={}|{}:{}",
                switch.frame_index,
                switch.slot,
                switch.if_true,
                switch.if_false,
                switch.comparison.type_name(),
                json_string(&switch.comparison.to_string())
            ),
        });
    }
    lines
}

/// Literal text as JSON; references as `ref=<source>[index]` plus their fixed text.
fn describe_content(content: &StatementContent) -> String {
    match content {
        StatementContent::Literal(text) => json_string(text),
        StatementContent::Reference {
            source,
            index,
            pretext,
            posttext,
        } => {
            let source = match source {
                TextSource::Answers => "answers",
                TextSource::Table(_) => "table",
            };
            format!(
                "ref={}[{}]|{}|{}",
                source,
                index,
                json_string(pretext),
                json_string(posttext)
            )
        }
    }
}
