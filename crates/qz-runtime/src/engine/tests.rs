use qz_core::{AnswerValue, ChoiceDiscipline, EngineOutput, NavigationState, UserAction};

use super::*;
use crate::{SurfaceEvent, TextSource, TranscriptSurface};

fn engine_for(graph: FrameGraph) -> NavigationEngine<TranscriptSurface> {
    NavigationEngine::new(
        graph,
        TranscriptSurface::default(),
        NavigationEngineOptions::default(),
    )
}

fn statement_text(output: &EngineOutput) -> &str {
    match output {
        EngineOutput::Statement { text, .. } => text.as_str(),
        other => panic!("expected statement output, got {:?}", other),
    }
}

#[test]
fn two_statements_halt_after_two_dismissals() {
    let mut graph = FrameGraph::new();
    graph.create_statement("first", 1);
    graph.create_statement("second", 2);
    let mut engine = engine_for(graph);
    assert_eq!(engine.state(), NavigationState::Idle);

    let output = engine.start(0).expect("start should pass");
    assert_eq!(statement_text(&output), "first");
    assert_eq!(engine.state(), NavigationState::Presenting { frame_index: 0 });

    let output = engine.dismiss().expect("dismiss should pass");
    assert_eq!(statement_text(&output), "second");
    assert_eq!(engine.state(), NavigationState::Presenting { frame_index: 1 });

    let output = engine.dismiss().expect("dismiss should pass");
    assert_eq!(output, EngineOutput::Halted);
    assert_eq!(engine.state(), NavigationState::Halted);
    assert_eq!(engine.visited_steps(), 2);
}

#[test]
fn halted_is_terminal() {
    let mut graph = FrameGraph::new();
    graph.create_statement("only", 99);
    let mut engine = engine_for(graph);
    engine.start(0).expect("start");
    engine.dismiss().expect("dismiss into dangling target");

    for action in [UserAction::Dismiss, UserAction::Choose(0), UserAction::Select(0)] {
        let error = engine.apply(action).expect_err("halted engine rejects input");
        assert_eq!(error.code, "ENGINE_HALTED");
    }
    assert_eq!(engine.current_output().expect("output"), EngineOutput::Halted);
    let restart = engine.start(0).expect_err("start only from idle");
    assert_eq!(restart.code, "ENGINE_ALREADY_STARTED");
}

#[test]
fn starting_at_a_missing_frame_halts_without_fault() {
    let mut engine = engine_for(FrameGraph::new());
    let output = engine.start(3).expect("missing entry is not an error");
    assert_eq!(output, EngineOutput::Halted);
    assert!(engine.state().is_halted());
    assert!(engine.surface().events().is_empty());
}

#[test]
fn actions_before_start_are_rejected() {
    let mut graph = FrameGraph::new();
    graph.create_statement("s", 1);
    let mut engine = engine_for(graph);
    let error = engine.dismiss().expect_err("not started");
    assert_eq!(error.code, "ENGINE_NOT_STARTED");
    let error = engine.current_output().expect_err("not started");
    assert_eq!(error.code, "ENGINE_NOT_STARTED");
}

#[test]
fn free_choice_writes_chosen_label_and_activates_its_target() {
    let mut graph = FrameGraph::new();
    let question = graph.create_question("Pick");
    graph.create_statement("picked A", 3);
    graph.create_statement("picked B", 3);
    graph.add_choice(question, "A", 1).expect("add A");
    graph.add_choice(question, "B", 2).expect("add B");
    let mut engine = engine_for(graph);

    let output = engine.start(0).expect("start");
    let EngineOutput::Question { prompt, choices, .. } = output else {
        panic!("expected question");
    };
    assert_eq!(prompt, "Pick");
    assert_eq!(choices.len(), 2);

    let output = engine.choose(1).expect("choose B");
    assert_eq!(statement_text(&output), "picked B");
    assert_eq!(engine.state(), NavigationState::Presenting { frame_index: 2 });
    assert_eq!(engine.answers().get(0), Some(&AnswerValue::from("B")));
    assert_ne!(engine.answers().get(0), Some(&AnswerValue::from("A")));
}

#[test]
fn exclusive_selection_resolves_on_change_and_records_target() {
    let mut graph = FrameGraph::new();
    let question = graph.create_question("Again?");
    graph.create_statement("yes", 9);
    graph.create_statement("no", 9);
    graph.add_exclusive_choice(question, "true", 1).expect("add");
    graph.add_exclusive_choice(question, "false", 2).expect("add");
    let mut engine = engine_for(graph);
    engine.start(question).expect("start");

    let wrong = engine.choose(0).expect_err("exclusive items are selected, not chosen");
    assert_eq!(wrong.code, "ENGINE_CHOICE_DISCIPLINE");
    assert_eq!(engine.state(), NavigationState::Presenting { frame_index: 0 });

    let output = engine.select(1).expect("select false");
    assert_eq!(statement_text(&output), "no");
    assert_eq!(engine.answers().get(0), Some(&AnswerValue::Frame(2)));
}

#[test]
fn bad_choice_index_keeps_presenting() {
    let mut graph = FrameGraph::new();
    let question = graph.create_question("Pick");
    graph.add_choice(question, "A", 1).expect("add");
    let mut engine = engine_for(graph);
    engine.start(0).expect("start");

    let error = engine.choose(5).expect_err("index out of range");
    assert_eq!(error.code, "ENGINE_CHOICE_INDEX");
    let error = engine.dismiss().expect_err("questions have no dismiss");
    assert_eq!(error.code, "ENGINE_NO_PENDING_DISMISS");
    assert_eq!(engine.state(), NavigationState::Presenting { frame_index: 0 });
    assert!(!engine.answers().is_set(0));
}

#[test]
fn statement_rejects_choice_actions() {
    let mut graph = FrameGraph::new();
    graph.create_statement("s", 1);
    let mut engine = engine_for(graph);
    engine.start(0).expect("start");
    let error = engine.choose(0).expect_err("no pending choice");
    assert_eq!(error.code, "ENGINE_NO_PENDING_CHOICE");
}

#[test]
fn empty_question_never_resolves() {
    let mut graph = FrameGraph::new();
    graph.create_question("Nothing to pick");
    let mut engine = engine_for(graph);
    engine.start(0).expect("start");
    for index in 0..3 {
        assert_eq!(
            engine.choose(index).expect_err("no choices").code,
            "ENGINE_CHOICE_INDEX"
        );
        assert_eq!(
            engine.select(index).expect_err("no choices").code,
            "ENGINE_CHOICE_INDEX"
        );
    }
    assert_eq!(engine.state(), NavigationState::Presenting { frame_index: 0 });
}

#[test]
fn switch_chains_without_a_visible_step() {
    let mut graph = FrameGraph::new();
    let question = graph.create_question("Pick");
    let switch = graph.create_conditional_switch(0, "A", 2, 3);
    graph.create_statement("was A", 9);
    graph.create_statement("was not A", 9);
    graph.add_choice(question, "A", switch).expect("add");
    graph.add_choice(question, "B", switch).expect("add");

    let mut engine = engine_for(graph.clone());
    engine.start(0).expect("start");
    let output = engine.choose(0).expect("choose A");
    assert_eq!(statement_text(&output), "was A");
    assert_eq!(engine.visited_steps(), 2);

    let mut engine = engine_for(graph);
    engine.start(0).expect("start");
    let output = engine.choose(1).expect("choose B");
    assert_eq!(statement_text(&output), "was not A");
}

#[test]
fn unset_slot_routes_to_false_branch() {
    let mut graph = FrameGraph::new();
    graph.create_conditional_switch(0, "anything", 1, 2);
    graph.create_statement("true branch", 9);
    graph.create_statement("false branch", 9);
    graph.create_question("never answered");
    let mut engine = engine_for(graph);

    let output = engine.start(0).expect("start");
    assert_eq!(statement_text(&output), "false branch");
    assert_eq!(engine.state(), NavigationState::Presenting { frame_index: 2 });
}

#[test]
fn switch_into_dangling_target_halts() {
    let mut graph = FrameGraph::new();
    graph.create_conditional_switch(0, "x", 40, 41);
    let mut engine = engine_for(graph);
    assert_eq!(engine.start(0).expect("start"), EngineOutput::Halted);
    assert!(engine.state().is_halted());
}

#[test]
fn statement_loop_reenters_entry_frame() {
    let mut graph = FrameGraph::new();
    graph.create_statement("zero", 1);
    graph.create_statement("one", 0);
    let mut engine = engine_for(graph);
    engine.start(0).expect("start");

    for _ in 0..50 {
        engine.dismiss().expect("to frame 1");
        assert_eq!(engine.state(), NavigationState::Presenting { frame_index: 1 });
        let output = engine.dismiss().expect("back to frame 0");
        assert_eq!(statement_text(&output), "zero");
        assert_eq!(engine.state(), NavigationState::Presenting { frame_index: 0 });
    }
    assert_eq!(engine.visited_steps(), 101);
}

#[test]
fn pass_through_cycle_hits_guard() {
    let mut graph = FrameGraph::new();
    graph.create_conditional_switch(0, "x", 1, 1);
    graph.create_conditional_switch(0, "x", 0, 0);
    let mut engine = NavigationEngine::new(
        graph,
        TranscriptSurface::default(),
        NavigationEngineOptions {
            pass_through_limit: Some(16),
        },
    );
    let error = engine.start(0).expect_err("switch cycle should trip the guard");
    assert_eq!(error.code, "ENGINE_PASS_THROUGH_GUARD");
    assert!(engine.state().is_halted());
}

#[test]
fn teardown_precedes_next_presentation() {
    let mut graph = FrameGraph::new();
    graph.create_statement("a", 1);
    graph.create_statement("b", 2);
    let mut engine = engine_for(graph);
    engine.start(0).expect("start");
    engine.dismiss().expect("dismiss");
    engine.dismiss().expect("dismiss");

    assert_eq!(
        engine.surface().events(),
        &[
            SurfaceEvent::Text("a".to_string()),
            SurfaceEvent::DismissAffordance,
            SurfaceEvent::Teardown,
            SurfaceEvent::Text("b".to_string()),
            SurfaceEvent::DismissAffordance,
            SurfaceEvent::Teardown,
        ]
    );
}

#[test]
fn reference_statement_shows_answer_from_later_question() {
    let mut graph = FrameGraph::new();
    let question = graph.create_question("true or false?");
    graph.add_choice(question, "true", 2).expect("add");
    graph.create_statement("unused", 0);
    graph.create_ref_statement("Answer of \"", TextSource::Answers, 0, "\" saved", 3);
    let mut engine = engine_for(graph);

    engine.start(0).expect("start");
    let output = engine.choose(0).expect("choose");
    assert_eq!(statement_text(&output), "Answer of \"true\" saved");
}

#[test]
fn revisiting_a_question_overwrites_its_slot() {
    let mut graph = FrameGraph::new();
    let question = graph.create_question("Pick");
    let back = graph.create_statement("again", question);
    graph.add_choice(question, "first", back).expect("add");
    graph.add_choice(question, "second", back).expect("add");
    let mut engine = engine_for(graph);

    engine.start(question).expect("start");
    engine.choose(0).expect("choose first");
    assert_eq!(engine.answers().get(0), Some(&AnswerValue::from("first")));
    engine.dismiss().expect("loop back");
    engine.choose(1).expect("choose second");
    assert_eq!(engine.answers().get(0), Some(&AnswerValue::from("second")));
    assert_eq!(engine.answers().len(), 1);
}

#[test]
fn reset_returns_to_idle_and_clears_answers() {
    let mut graph = FrameGraph::new();
    let question = graph.create_question("Pick");
    graph.add_choice(question, "A", 0).expect("add");
    let mut engine = engine_for(graph);
    engine.start(0).expect("start");
    engine.choose(0).expect("choose");
    assert!(engine.answers().is_set(0));

    engine.reset();
    assert_eq!(engine.state(), NavigationState::Idle);
    assert!(!engine.answers().is_set(0));
    assert_eq!(engine.visited_steps(), 0);
    assert_eq!(engine.surface().events().last(), Some(&SurfaceEvent::Teardown));
    engine.start(0).expect("start again after reset");
}

#[test]
fn current_output_matches_last_transition() {
    let mut graph = FrameGraph::new();
    let question = graph.create_question("Mixed");
    graph.add_choice(question, "free", 1).expect("add");
    graph.add_exclusive_choice(question, "radio", 1).expect("add");
    let mut engine = engine_for(graph);
    let started = engine.start(0).expect("start");
    assert_eq!(engine.current_output().expect("output"), started);

    let EngineOutput::Question { choices, .. } = started else {
        panic!("expected question");
    };
    assert_eq!(choices[0].discipline, ChoiceDiscipline::Free);
    assert_eq!(choices[1].discipline, ChoiceDiscipline::Exclusive);
}

#[test]
fn headless_engine_runs_without_surface() {
    let mut graph = FrameGraph::new();
    graph.create_statement("quiet", 1);
    let mut engine = NavigationEngine::headless(graph);
    engine.start(0).expect("start");
    assert_eq!(engine.dismiss().expect("dismiss"), EngineOutput::Halted);
}
