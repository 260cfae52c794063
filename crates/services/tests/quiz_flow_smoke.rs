use std::sync::Arc;

use prep_core::Tier;
use prep_core::model::RoleId;
use prep_core::time::fixed_clock;
use services::{QuizCoordinator, QuizPhase, RoleCatalog};

#[test]
fn full_run_from_role_selection_to_summary() {
    let coordinator = QuizCoordinator::new(Arc::new(RoleCatalog::builtin()), fixed_clock());
    let software = RoleId::new("software").unwrap();

    let mut session = coordinator.start_session(&software).unwrap();
    assert_eq!(session.phase(), QuizPhase::InProgress);
    assert_eq!(session.total_questions(), 2);

    // Correct indices for the software set are [1, 1]; answer [1, 0].
    session.select_answer(1).unwrap();
    let first = coordinator.advance(&mut session).unwrap();
    assert!(first.was_correct);
    assert!(!first.is_complete);

    session.select_answer(0).unwrap();
    let last = coordinator.advance(&mut session).unwrap();
    assert!(last.is_complete);

    let summary = last.summary.unwrap();
    assert_eq!(summary.score(), 1);
    assert_eq!(summary.total(), 2);
    assert_eq!(summary.tier(), Tier::NeedsPractice);
    assert_eq!(summary.percent(), 50);
    assert_eq!(summary.role_id(), &software);
}

#[test]
fn exit_then_new_run_matches_first_time_shape() {
    let coordinator = QuizCoordinator::new(Arc::new(RoleCatalog::builtin()), fixed_clock());
    let web = RoleId::new("web").unwrap();

    let mut session = coordinator.start_session(&web).unwrap();
    session.select_answer(1).unwrap();
    coordinator.advance(&mut session).unwrap();
    assert_eq!(session.score(), 1);

    session.exit();
    assert_eq!(session.phase(), QuizPhase::NotStarted);
    assert_eq!(session.selected_role(), None);

    let fresh = coordinator.start_session(&web).unwrap();
    let reused = {
        let mut s = session;
        s.select_role(web.clone()).unwrap();
        s.start(
            coordinator.catalog().questions_for(&web).to_vec(),
            prep_core::time::fixed_now(),
        )
        .unwrap();
        s
    };

    assert_eq!(reused.score(), fresh.score());
    assert_eq!(reused.current_index(), fresh.current_index());
    assert_eq!(reused.phase(), fresh.phase());
    assert_eq!(reused.total_questions(), fresh.total_questions());
    assert_eq!(reused.pending_answer(), fresh.pending_answer());
}

#[test]
fn retake_after_completion_starts_clean() {
    let coordinator = QuizCoordinator::new(Arc::new(RoleCatalog::builtin()), fixed_clock());
    let software = RoleId::new("software").unwrap();

    let mut session = coordinator.start_session(&software).unwrap();
    while !session.is_complete() {
        session.select_answer(1).unwrap();
        coordinator.advance(&mut session).unwrap();
    }
    let perfect = session.result_summary().unwrap();
    assert_eq!(perfect.tier(), Tier::Perfect);
    assert_eq!(perfect.percent(), 100);

    coordinator.retake(&mut session).unwrap();
    assert_eq!(session.phase(), QuizPhase::InProgress);
    assert_eq!(session.score(), 0);
    assert_eq!(session.current_index(), 0);
}
