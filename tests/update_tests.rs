use gpui_range_slider::{
    activate, subscriptions_needed, update, DragState, Handle, PointerPosition, Settings,
    SliderEvent, SliderModel, Subscriptions,
};

fn at(x: f64) -> PointerPosition {
    PointerPosition::new(x, 12.0)
}

fn run(model: SliderModel, events: &[SliderEvent]) -> SliderModel {
    events.iter().fold(model, |model, event| update(model, *event))
}

#[test]
fn test_pointer_down_starts_drag_without_moving_values() {
    let model = activate(Settings::default()).unwrap();
    let model = update(model, SliderEvent::PointerDown(Handle::From, at(80.0)));

    assert_eq!(model.drag_state().handle(), Some(Handle::From));
    let track = model.drag_state().track_for(Handle::From).copied().unwrap();
    assert_eq!(track.start, at(80.0));
    assert_eq!(track.current, at(80.0));
    assert_eq!((model.from(), model.to()), (40.0, 60.0));
}

#[test]
fn test_pointer_move_keeps_committed_values() {
    let model = run(
        activate(Settings::default()).unwrap(),
        &[
            SliderEvent::PointerDown(Handle::To, at(120.0)),
            SliderEvent::PointerMove(at(150.0)),
        ],
    );
    assert_eq!(model.to(), 60.0);
    let track = model.drag_state().track_for(Handle::To).copied().unwrap();
    assert_eq!(track.start.x, 120.0);
    assert_eq!(track.current.x, 150.0);
}

#[test]
fn test_pointer_up_commits_and_ends_drag() {
    let model = run(
        activate(Settings::default()).unwrap(),
        &[
            SliderEvent::PointerDown(Handle::To, at(120.0)),
            SliderEvent::PointerMove(at(150.0)),
            SliderEvent::PointerUp(at(150.0)),
        ],
    );
    assert_eq!(model.to(), 75.0);
    assert_eq!(model.from(), 40.0);
    assert_eq!(*model.drag_state(), DragState::Idle);
}

#[test]
fn test_pointer_up_position_is_final() {
    // Release lands further than the last reported move.
    let model = run(
        activate(Settings::default()).unwrap(),
        &[
            SliderEvent::PointerDown(Handle::From, at(80.0)),
            SliderEvent::PointerMove(at(70.0)),
            SliderEvent::PointerUp(at(60.0)),
        ],
    );
    assert_eq!(model.from(), 30.0);
}

#[test]
fn test_zero_distance_drag_round_trip() {
    let p1 = at(80.0);
    let before = activate(Settings::new().with_step_size(3.0).with_range(40.0, 60.0)).unwrap();
    let after = run(
        before.clone(),
        &[SliderEvent::PointerDown(Handle::From, p1), SliderEvent::PointerUp(p1)],
    );
    assert_eq!(after.from(), before.from());
    let after = run(
        before.clone(),
        &[SliderEvent::PointerDown(Handle::To, p1), SliderEvent::PointerUp(p1)],
    );
    assert_eq!(after.to(), before.to());

    let before = activate(Settings::default()).unwrap();
    let after = update(
        update(before.clone(), SliderEvent::PointerDown(Handle::From, p1)),
        SliderEvent::PointerUp(p1),
    );
    assert_eq!(after.from(), before.from());
    assert_eq!(after.to(), before.to());
}

#[test]
fn test_second_pointer_down_is_ignored() {
    let model = run(
        activate(Settings::default()).unwrap(),
        &[
            SliderEvent::PointerDown(Handle::From, at(80.0)),
            SliderEvent::PointerDown(Handle::To, at(120.0)),
            SliderEvent::PointerUp(at(100.0)),
        ],
    );
    assert_eq!(model.from(), 50.0);
    assert_eq!(model.to(), 60.0);
}

#[test]
fn test_events_while_idle_are_no_ops() {
    let model = activate(Settings::default()).unwrap();
    let model = run(
        model,
        &[
            SliderEvent::PointerMove(at(10.0)),
            SliderEvent::PointerUp(at(190.0)),
            SliderEvent::Cancel,
        ],
    );
    assert_eq!((model.from(), model.to()), (40.0, 60.0));
    assert!(!model.drag_state().is_dragging());
}

#[test]
fn test_cancel_discards_drag() {
    let model = run(
        activate(Settings::default()).unwrap(),
        &[
            SliderEvent::PointerDown(Handle::To, at(120.0)),
            SliderEvent::PointerMove(at(180.0)),
            SliderEvent::Cancel,
        ],
    );
    assert_eq!(model.to(), 60.0);
    assert_eq!(*model.drag_state(), DragState::Idle);
}

#[test]
fn test_commit_resolves_against_pre_commit_model() {
    // Handles start together; dragging "to" right must not drag "from" along.
    let model = run(
        activate(Settings::new().with_range(50.0, 50.0)).unwrap(),
        &[
            SliderEvent::PointerDown(Handle::To, at(100.0)),
            SliderEvent::PointerUp(at(120.0)),
        ],
    );
    assert_eq!((model.from(), model.to()), (50.0, 60.0));
}

#[test]
fn test_subscriptions_follow_drag_lifetime() {
    let model = activate(Settings::default()).unwrap();
    assert_eq!(subscriptions_needed(&model), Subscriptions::default());
    assert!(!subscriptions_needed(&model).any());

    let model = update(model, SliderEvent::PointerDown(Handle::From, at(80.0)));
    assert_eq!(
        subscriptions_needed(&model),
        Subscriptions { pointer_move: true, pointer_up: true }
    );

    let model = update(model, SliderEvent::PointerMove(at(90.0)));
    assert!(subscriptions_needed(&model).any());

    let released = update(model.clone(), SliderEvent::PointerUp(at(90.0)));
    assert!(!subscriptions_needed(&released).any());

    let cancelled = update(model, SliderEvent::Cancel);
    assert!(!subscriptions_needed(&cancelled).any());
}
