// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use LifecycleState::*;

#[yare::parameterized(
    start          = { Starting, Running },
    spawn_failed   = { Starting, Exited },
    stop_requested = { Running,  Stopping },
    died           = { Running,  Exited },
    stopped        = { Stopping, Exited },
)]
fn allowed(from: LifecycleState, to: LifecycleState) {
    assert_eq!(from.transition(to), Ok(to));
}

#[yare::parameterized(
    reenter_running  = { Running,  Running },
    reenter_stopping = { Stopping, Stopping },
    back_to_running  = { Stopping, Running },
    skip_to_stopping = { Starting, Stopping },
    revive           = { Exited,   Running },
    exited_again     = { Exited,   Exited },
)]
fn rejected(from: LifecycleState, to: LifecycleState) {
    assert_eq!(from.transition(to), Err(InvalidTransition { from, to }));
}

#[test]
fn only_exited_is_terminal() {
    assert!(Exited.is_terminal());
    assert!(!Stopping.is_terminal());
}

#[test]
fn invalid_transition_message() {
    let err = Exited.transition(Running).unwrap_err();
    assert_eq!(err.to_string(), "invalid lifecycle transition exited -> running");
}

#[test]
fn events_serialize_with_type_tag() {
    let events = vec![
        LifecycleEvent::Starting {
            name: "foo".to_string(),
            log_path: PathBuf::from("/logs/foo.exe-20260101-120000.log"),
        },
        LifecycleEvent::Running { pid: 42 },
        LifecycleEvent::Stopping {
            pid: 42,
            reason: StopReason::Interrupt,
        },
        LifecycleEvent::Exited {
            status: ExitStatus::Exited(0),
            elapsed_ms: 1500,
        },
    ];
    let tags: Vec<String> = events
        .iter()
        .map(|e| serde_json::to_value(e).unwrap()["type"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(tags, vec!["run:starting", "run:running", "run:stopping", "run:exited"]);

    for event in &events {
        let json = serde_json::to_string(event).unwrap();
        let back: LifecycleEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, event);
    }
}

#[test]
fn event_state_matches_variant() {
    assert_eq!(LifecycleEvent::Running { pid: 1 }.state(), Running);
    assert_eq!(
        LifecycleEvent::Stopping { pid: 1, reason: StopReason::User }.state(),
        Stopping
    );
}
