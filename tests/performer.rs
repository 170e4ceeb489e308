use std::sync::Arc;

use pretty_assertions::assert_eq;
use speculoos::prelude::*;
use sprite_animator::{
    asset::{AnimationAsset, FrameId},
    direction::Direction,
    factory::PerformerFactory,
    performer::{CyclePerformer, Oriented, Performer, PerformerKind, WindrosePerformer},
};

mod common;

use common::{create_sink, frames, TestAssets};

#[test]
fn test_tick_before_start_is_ignored() {
    let (recorder, sink) = create_sink();
    let mut performer = CyclePerformer::new(sink);

    performer.tick(0.5);
    assert_that(&performer.is_started()).is_false();
    assert_that(&performer.cycle_elapsed()).is_equal_to(0.0);
    assert_that(&recorder.lock().frames().is_empty()).is_true();
}

#[test]
fn test_start_shows_frame_at_offset() {
    let (recorder, sink) = create_sink();
    let assets = TestAssets::new();
    let mut performer = CyclePerformer::new(sink);

    performer.start(Arc::clone(&assets.idle), 0.6);
    assert_that(&performer.is_started()).is_true();
    assert_that(&performer.current_frame()).is_equal_to(Some(FrameId(2)));
    assert_eq!(recorder.lock().frames(), &[FrameId(2)]);
}

#[test]
fn test_tick_only_emits_frame_changes() {
    let (recorder, sink) = create_sink();
    let assets = TestAssets::new();
    let mut performer = CyclePerformer::new(sink);

    performer.start(Arc::clone(&assets.idle), 0.0);
    for _ in 0..8 {
        performer.tick(0.125);
    }

    // idle is 4 fps: each frame holds for two ticks, then the cycle wraps back to frame 0
    let expected: Vec<FrameId> = frames(0..4).into_iter().chain(frames(0..1)).collect();
    assert_eq!(recorder.lock().frames(), &expected[..]);
    assert!((performer.cycle_elapsed() - 1.0).abs() < common::EPSILON);
}

#[test]
fn test_large_delta_skips_frames() {
    let (recorder, sink) = create_sink();
    let assets = TestAssets::new();
    let mut performer = CyclePerformer::new(sink);

    performer.start(Arc::clone(&assets.idle), 0.0);
    performer.tick(2.6);

    assert_eq!(recorder.lock().frames(), &[FrameId(0), FrameId(2)]);
    assert!((performer.cycle_elapsed() - 2.6).abs() < common::EPSILON);
}

#[test]
fn test_stop_keeps_elapsed_and_is_idempotent() {
    let (_recorder, sink) = create_sink();
    let assets = TestAssets::new();
    let mut performer = CyclePerformer::new(sink);

    performer.start(Arc::clone(&assets.run), 0.1);
    performer.tick(0.2);
    performer.stop();
    performer.stop();

    assert_that(&performer.is_started()).is_false();
    assert!((performer.cycle_elapsed() - 0.3).abs() < common::EPSILON);

    performer.tick(1.0);
    assert!((performer.cycle_elapsed() - 0.3).abs() < common::EPSILON);
}

#[test]
fn test_restart_rebinds_animation() {
    let (recorder, sink) = create_sink();
    let assets = TestAssets::new();
    let mut performer = CyclePerformer::new(sink);

    performer.start(Arc::clone(&assets.idle), 0.0);
    performer.tick(0.9);
    performer.start(Arc::clone(&assets.run), 0.0);

    assert_that(&performer.cycle_elapsed()).is_equal_to(0.0);
    assert_that(&performer.animation().map(|a| a.name().to_string())).is_equal_to(Some("run".to_string()));
    assert_that(&recorder.lock().last()).is_equal_to(Some(FrameId(10)));
}

#[test]
fn test_negative_start_and_delta_are_clamped() {
    let (_recorder, sink) = create_sink();
    let assets = TestAssets::new();
    let mut performer = CyclePerformer::new(sink);

    performer.start(Arc::clone(&assets.idle), -3.0);
    assert_that(&performer.cycle_elapsed()).is_equal_to(0.0);

    performer.tick(-1.0);
    performer.tick(f32::NAN);
    assert_that(&performer.cycle_elapsed()).is_equal_to(0.0);
}

#[test]
fn test_empty_animation_shows_nothing() {
    let (recorder, sink) = create_sink();
    let mut performer = CyclePerformer::new(sink);

    performer.start(Arc::new(AnimationAsset::new("empty", 12.0, [])), 0.0);
    performer.tick(0.5);

    assert_that(&performer.current_frame()).is_none();
    assert_that(&recorder.lock().frames().is_empty()).is_true();
}

#[test]
fn test_cycle_performer_has_no_orientation() {
    let (_recorder, sink) = create_sink();
    let performer: Box<dyn Performer> = Box::new(CyclePerformer::new(sink));

    assert_that(&performer.as_oriented().is_none()).is_true();
    assert_that(&performer.kind()).is_equal_to(PerformerKind::Cycle);
}

#[test]
fn test_windrose_turning_keeps_phase() {
    let (recorder, sink) = create_sink();
    let assets = TestAssets::new();
    let mut performer = WindrosePerformer::new(sink);

    performer.set_orientation(Direction::North);
    performer.start(Arc::clone(&assets.walk), 0.0);
    performer.tick(0.26);
    performer.set_orientation(Direction::East);
    // NorthEast falls back to North, the nearest populated direction on the clockwise-first tie
    performer.set_orientation(Direction::NorthEast);

    assert_eq!(recorder.lock().frames(), &[FrameId(100), FrameId(102), FrameId(112), FrameId(102)]);
    assert_that(&performer.orientation()).is_equal_to(Direction::NorthEast);
}

#[test]
fn test_windrose_orientation_while_stopped_is_silent() {
    let (recorder, sink) = create_sink();
    let assets = TestAssets::new();
    let mut performer = WindrosePerformer::new(sink);

    performer.start(Arc::clone(&assets.walk), 0.0);
    performer.stop();
    performer.set_orientation(Direction::West);

    assert_eq!(recorder.lock().frames(), &[FrameId(120)]);

    performer.start(Arc::clone(&assets.walk), 0.0);
    assert_that(&recorder.lock().last()).is_equal_to(Some(FrameId(130)));
}

#[test]
fn test_windrose_exposes_orientation_facet() {
    let (_recorder, sink) = create_sink();
    let mut performer: Box<dyn Performer> = PerformerKind::Windrose.build(sink);

    performer
        .as_oriented_mut()
        .expect("Windrose performers are oriented")
        .set_orientation(Direction::SouthWest);

    assert_that(&performer.as_oriented().map(|o| o.orientation())).is_equal_to(Some(Direction::SouthWest));
    assert_that(&performer.downcast_ref::<WindrosePerformer>().is_some()).is_true();
    assert_that(&performer.downcast_ref::<CyclePerformer>().is_none()).is_true();
}

#[test]
fn test_factory_creates_one_performer_per_kind() {
    let (_recorder, sink) = create_sink();
    let assets = TestAssets::new();
    let mut factory = PerformerFactory::new(sink);

    assert_that(&factory.get(&assets.idle).kind()).is_equal_to(PerformerKind::Cycle);
    assert_that(&factory.get(&assets.run).kind()).is_equal_to(PerformerKind::Cycle);
    assert_that(&factory.get(&assets.walk).kind()).is_equal_to(PerformerKind::Windrose);
    assert_that(&factory.get(&assets.walk).kind()).is_equal_to(PerformerKind::Windrose);

    assert_that(&factory.performer_count()).is_equal_to(2);
    assert_that(&factory.instances_created()).is_equal_to(2);
}

#[test]
fn test_factory_reuses_instance_state() {
    let (_recorder, sink) = create_sink();
    let assets = TestAssets::new();
    let mut factory = PerformerFactory::new(sink);

    factory.get(&assets.idle).start(Arc::clone(&assets.idle), 0.4);
    let performer = factory.get(&assets.run);
    assert_that(&performer.is_started()).is_true();
    assert!((performer.cycle_elapsed() - 0.4).abs() < common::EPSILON);
}

#[test]
fn test_factory_typed_retrieval() {
    let (_recorder, sink) = create_sink();
    let assets = TestAssets::new();
    let mut factory = PerformerFactory::new(sink);

    assert_that(&factory.get_as::<CyclePerformer>(&assets.idle).is_some()).is_true();
    assert_that(&factory.get_as::<WindrosePerformer>(&assets.idle).is_none()).is_true();
    assert_that(&factory.get_as::<WindrosePerformer>(&assets.walk).is_some()).is_true();
    assert_that(&factory.get_by_kind(PerformerKind::Cycle).is_some()).is_true();
}

#[test]
fn test_factory_stop_all() {
    let (_recorder, sink) = create_sink();
    let assets = TestAssets::new();
    let mut factory = PerformerFactory::new(sink);

    factory.get(&assets.idle).start(Arc::clone(&assets.idle), 0.0);
    factory.get(&assets.walk).start(Arc::clone(&assets.walk), 0.0);
    factory.stop_all();

    assert_that(&factory.get_by_kind(PerformerKind::Cycle).unwrap().is_started()).is_false();
    assert_that(&factory.get_by_kind(PerformerKind::Windrose).unwrap().is_started()).is_false();
}

#[test]
fn test_clock_stays_accurate_over_long_sessions() {
    let (_recorder, sink) = create_sink();
    let assets = TestAssets::new();
    let mut performer = CyclePerformer::new(sink);

    performer.start(Arc::clone(&assets.run), 0.0);
    // One hour at 60 ticks per second
    for _ in 0..216_000 {
        performer.tick(1.0 / 60.0);
    }

    assert!((performer.cycle_elapsed() - 3600.0).abs() < 0.01);
}

#[test]
fn test_small_deltas_still_advance_late_clock() {
    let (_recorder, sink) = create_sink();
    let assets = TestAssets::new();
    let mut performer = CyclePerformer::new(sink);

    let start = 2_000_000.0;
    performer.start(Arc::clone(&assets.run), start);
    for _ in 0..600 {
        performer.tick(1.0 / 60.0);
    }

    assert!((performer.cycle_elapsed() - (start + 10.0)).abs() < 0.5);
}
