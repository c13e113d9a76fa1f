use retrace_core::{Point, RecordingSink, RenderCall};
use retrace_recorder::export;
use retrace_recorder::{
    CaptureController, CommandOutcome, DeleteRange, PathStore, RecorderError, SessionCommand,
    Transition,
};

fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

#[test]
fn capture_replay_and_return_to_live() {
    let mut controller = CaptureController::default();
    let mut sink = RecordingSink::new();

    for point in [p(10.0, 10.0), p(20.0, 20.0), p(30.0, 30.0)] {
        controller.tick(&mut sink);
        controller.capture(point);
    }
    assert_eq!(controller.buffer().len(), 3);
    sink.take();

    let outcome = controller
        .apply(SessionCommand::StartReplay, &mut sink)
        .unwrap();
    assert_eq!(
        outcome,
        CommandOutcome::ReplayStarted {
            samples: 3,
            replaced: false
        }
    );

    let transitions: Vec<_> = (0..4)
        .map(|_| controller.tick(&mut sink).transition)
        .collect();
    assert_eq!(
        transitions,
        vec![None, None, None, Some(Transition::ReplayFinished)]
    );

    let calls = sink.take();
    assert_eq!(calls[0], RenderCall::Clear);
    assert_eq!(
        sink_markers(&calls[1..4]),
        vec![p(10.0, 10.0), p(20.0, 20.0), p(30.0, 30.0)]
    );
    assert!(!controller.is_replaying());

    // Live again: the pointer drives the marker.
    controller.capture(p(99.0, 1.0));
    assert_eq!(controller.tick(&mut sink).drawn, Some(p(99.0, 1.0)));
}

#[test]
fn burst_of_moves_between_ticks_records_one_sample_each() {
    let mut controller = CaptureController::default();
    let mut sink = RecordingSink::new();

    let mut elapsed_signals = 0;
    for tick in 0..10 {
        controller.tick(&mut sink);
        for k in 0..(tick % 4) {
            if controller.capture(p(tick as f32, k as f32)) {
                elapsed_signals += 1;
            }
        }
    }

    assert_eq!(controller.buffer().len(), elapsed_signals);
    // Ticks 0, 4 and 8 had no events at all.
    assert_eq!(elapsed_signals, 7);
}

#[test]
fn reset_mid_replay_clears_everything() {
    let mut controller = CaptureController::default();
    let mut sink = RecordingSink::new();
    for point in [p(10.0, 10.0), p(20.0, 20.0), p(30.0, 30.0)] {
        controller.tick(&mut sink);
        controller.capture(point);
    }

    controller.start_replay().unwrap();
    controller.tick(&mut sink);
    controller.apply(SessionCommand::Reset, &mut sink).unwrap();

    assert!(controller.buffer().is_empty());
    assert!(!controller.is_replaying());
    assert!(matches!(
        controller.start_replay(),
        Err(RecorderError::EmptyBufferReplay)
    ));
}

#[test]
fn exported_path_replays_after_import() {
    let mut controller = CaptureController::default();
    let mut sink = RecordingSink::new();
    for point in [p(1.5, 2.0), p(3.0, 4.25)] {
        controller.tick(&mut sink);
        controller.capture(point);
    }

    let text = controller.export().unwrap();
    let imported = export::from_json(&text).unwrap();
    assert_eq!(&imported, controller.buffer());

    let mut other = CaptureController::default();
    other.load(imported);
    other.start_replay().unwrap();
    let replayed: Vec<_> = (0..2).filter_map(|_| other.tick(&mut sink).drawn).collect();
    assert_eq!(replayed, vec![p(1.5, 2.0), p(3.0, 4.25)]);
}

#[test]
fn path_store_tracks_two_paths_side_by_side() {
    let mut store = PathStore::new();
    let left = store.new_path();
    let right = store.new_path();

    for frame in 0..4 {
        store.jump(frame);
        store.push(left, p(frame as f32, 0.0)).unwrap();
        store.jump(frame);
        store.push(right, p(0.0, frame as f32)).unwrap();
    }

    store
        .delete(DeleteRange::all().path(left).from(1).to(2))
        .unwrap();

    store.jump(0);
    let rows: Vec<_> = (0..4).map(|_| store.next_of(&[left, right])).collect();
    assert_eq!(rows[0].as_slice(), &[Some(p(0.0, 0.0)), Some(p(0.0, 0.0))]);
    assert_eq!(rows[1].as_slice(), &[None, Some(p(0.0, 1.0))]);
    assert_eq!(rows[2].as_slice(), &[None, Some(p(0.0, 2.0))]);
    assert_eq!(rows[3].as_slice(), &[Some(p(3.0, 0.0)), Some(p(0.0, 3.0))]);
}

fn sink_markers(calls: &[RenderCall]) -> Vec<Point> {
    calls
        .iter()
        .filter_map(|call| match call {
            RenderCall::Marker { at, .. } => Some(*at),
            RenderCall::Clear => None,
        })
        .collect()
}
