use qz_core::{ChoiceDiscipline, EngineOutput, QuizError};
use qz_runtime::{NavigationEngine, SurfaceEvent, TranscriptSurface};

use crate::{json_string, map_cli_json, BoundaryEvent, BoundaryResult};

/// Summarises where a transcript-backed engine currently stands.
pub(crate) fn collect_boundary(
    engine: &NavigationEngine<TranscriptSurface>,
) -> Result<BoundaryResult, QuizError> {
    let output = engine.current_output()?;
    let texts = current_frame_texts(engine.surface().events());
    let answers_json = serde_json::to_string(engine.answers().slots()).map_err(map_cli_json)?;

    let (event, prompt_text, choices) = match &output {
        EngineOutput::Statement { .. } => (BoundaryEvent::Statement, None, Vec::new()),
        EngineOutput::Question {
            prompt, choices, ..
        } => (
            BoundaryEvent::Question,
            Some(prompt.clone()),
            choices.clone(),
        ),
        EngineOutput::Halted => (BoundaryEvent::Halted, None, Vec::new()),
    };

    Ok(BoundaryResult {
        event,
        frame_index: output.frame_index(),
        texts,
        prompt_text,
        choices,
        answers_json,
        steps: engine.visited_steps(),
    })
}

/// Text rendered since the last teardown, i.e. by the frame on screen.
fn current_frame_texts(events: &[SurfaceEvent]) -> Vec<String> {
    let start = events
        .iter()
        .rposition(|event| *event == SurfaceEvent::Teardown)
        .map_or(0, |position| position + 1);
    events[start..]
        .iter()
        .filter_map(|event| match event {
            SurfaceEvent::Text(text) => Some(text.clone()),
            _ => None,
        })
        .collect()
}

pub(crate) fn emit_boundary(boundary: BoundaryResult) {
    for line in boundary_lines(boundary) {
        println!("{}", line);
    }
}

pub(crate) fn boundary_lines(boundary: BoundaryResult) -> Vec<String> {
    let mut lines = vec!["RESULT:OK".to_string()];
    lines.push(
        match boundary.event {
            BoundaryEvent::Statement => "EVENT:STATEMENT",
            BoundaryEvent::Question => "EVENT:QUESTION",
            BoundaryEvent::Halted => "EVENT:HALTED",
        }
        .to_string(),
    );

    if let Some(frame_index) = boundary.frame_index {
        lines.push(format!("FRAME:{}", frame_index));
    }

    for text in &boundary.texts {
        lines.push(format!("TEXT_JSON:{}", json_string(text)));
    }

    if let Some(prompt) = &boundary.prompt_text {
        lines.push(format!("PROMPT_JSON:{}", json_string(prompt)));
    }

    for item in &boundary.choices {
        let kind = match item.discipline {
            ChoiceDiscipline::Free => "free",
            ChoiceDiscipline::Exclusive => "exclusive",
        };
        lines.push(format!(
            "CHOICE:{}|{}|{}",
            item.index,
            kind,
            json_string(&item.label)
        ));
    }

    lines.push(format!("ANSWERS_JSON:{}", boundary.answers_json));
    lines.push(format!("STEPS:{}", boundary.steps));
    lines
}

#[cfg(test)]
mod boundary_runner_tests {
    use super::*;
    use qz_api::{build_sample_graph, start_engine, StartEngineOptions};

    #[test]
    fn question_boundary_lists_choices_and_prompt() {
        let compiled = build_sample_graph().expect("sample");
        let mut engine = start_engine(
            compiled,
            TranscriptSurface::default(),
            StartEngineOptions::default(),
        )
        .expect("engine");
        engine.dismiss().expect("to question");

        let boundary = collect_boundary(&engine).expect("boundary");
        assert_eq!(boundary.event, BoundaryEvent::Question);
        assert_eq!(boundary.frame_index, Some(1));
        assert_eq!(boundary.choices.len(), 2);
        assert_eq!(boundary.texts, vec!["1) true or false?"]);

        let lines = boundary_lines(boundary);
        assert_eq!(lines[0], "RESULT:OK");
        assert_eq!(lines[1], "EVENT:QUESTION");
        assert!(lines.contains(&"FRAME:1".to_string()));
        assert!(lines.contains(&r#"PROMPT_JSON:"1) true or false?""#.to_string()));
        assert!(lines.contains(&r#"CHOICE:1|free|"false""#.to_string()));
        assert!(lines.contains(&"ANSWERS_JSON:[null,null]".to_string()));
        assert_eq!(lines.last(), Some(&"STEPS:2".to_string()));
    }

    #[test]
    fn halted_boundary_has_no_frame_line() {
        let boundary = BoundaryResult {
            event: BoundaryEvent::Halted,
            frame_index: None,
            texts: vec!["bye".to_string()],
            prompt_text: None,
            choices: Vec::new(),
            answers_json: "[]".to_string(),
            steps: 1,
        };
        let lines = boundary_lines(boundary);
        assert_eq!(
            lines,
            vec![
                "RESULT:OK",
                "EVENT:HALTED",
                r#"TEXT_JSON:"bye""#,
                "ANSWERS_JSON:[]",
                "STEPS:1",
            ]
        );
    }
}
