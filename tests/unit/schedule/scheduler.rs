use super::*;
use crate::foundation::core::{Length, Size};
use crate::host::sim::{SimHost, SimItem, SimLayout};

fn layout(n: usize) -> SimLayout {
    SimLayout {
        viewport: Size::new(800.0, 1000.0),
        leading_padding: 200.0,
        item_extents: vec![320.0; n],
        cross_extent: 800.0,
    }
}

fn config() -> StackConfig {
    StackConfig::default()
        .with_item_distance(100.0)
        .with_item_scale(0.05)
        .with_item_stack_distance(30.0)
        .with_stack_position(Length::Percent(20.0))
        .with_scale_end_position(Length::Percent(10.0))
        .with_base_scale(0.9)
}

fn attached(n: usize) -> (SimHost, ScrollStack<SimItem>) {
    let mut host = SimHost::new(Axis::Block, layout(n));
    let items = host.items();
    let stack = ScrollStack::attach(&mut host, items, config());
    (host, stack)
}

#[test]
fn attach_inserts_spacing_except_after_last_item() {
    let (host, stack) = attached(3);
    assert_eq!(host.prep(0).unwrap().spacing.unwrap().px, 100.0);
    assert_eq!(host.prep(1).unwrap().spacing.unwrap().px, 100.0);
    assert_eq!(host.prep(2).unwrap().spacing, None);
    assert!(host.prep(0).unwrap().compositor_hints);

    let offsets: Vec<f64> = stack.items().iter().map(|it| it.leading_offset).collect();
    assert_eq!(offsets, vec![200.0, 620.0, 1040.0]);
    let indices: Vec<usize> = stack.items().iter().map(|it| it.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn attach_runs_one_synchronous_pass_and_listens() {
    let (host, stack) = attached(3);
    assert_eq!(host.listener_count(), 1);
    assert_eq!(host.writes().len(), 3);
    assert_eq!(host.pending_frames(), 0);
    assert_eq!(stack.state(), SchedulerState::Idle);
    assert_eq!(stack.cache().len(), 3);
}

#[test]
fn scroll_bursts_coalesce_into_one_frame() {
    let (mut host, mut stack) = attached(3);
    assert!(stack.on_scroll(&mut host));
    for _ in 0..20 {
        assert!(!stack.on_scroll(&mut host));
    }
    assert_eq!(host.pending_frames(), 1);

    let token = host.pump_frame().unwrap();
    assert_eq!(stack.state(), SchedulerState::Scheduled(token));
    let stats = stack.on_frame(&mut host, token).unwrap();
    assert_eq!(stats.items, 3);
    assert_eq!(stack.state(), SchedulerState::Idle);

    // next burst schedules again
    assert!(stack.on_scroll(&mut host));
    assert_eq!(host.pending_frames(), 1);
}

#[test]
fn foreign_frame_does_not_run_or_clear_schedule() {
    let (mut host, mut stack) = attached(2);
    stack.on_scroll(&mut host);
    let mine = host.pump_frame().unwrap();
    assert!(stack.on_frame(&mut host, FrameToken(mine.0 + 99)).is_none());
    assert_eq!(stack.state(), SchedulerState::Scheduled(mine));
    assert!(stack.on_frame(&mut host, mine).is_some());
    assert!(stack.on_frame(&mut host, mine).is_none());
}

#[test]
fn unchanged_scroll_writes_nothing() {
    let (mut host, mut stack) = attached(3);
    host.take_writes();
    for _ in 0..5 {
        stack.on_scroll(&mut host);
        let token = host.pump_frame().unwrap();
        let stats = stack.on_frame(&mut host, token).unwrap();
        assert_eq!(stats.applied, 0);
        assert_eq!(stats.suppressed, 3);
    }
    assert!(host.writes().is_empty());
}

#[test]
fn tiny_scroll_steps_are_suppressed_until_they_add_up() {
    let (mut host, mut stack) = attached(1);
    // item 0: leading 200, pin_start 0, pinned from scroll 0
    host.scroll_to(10.0);
    stack.recompute(&mut host);
    host.take_writes();

    host.scroll_to(10.05);
    assert_eq!(stack.recompute(&mut host).applied, 0);
    host.scroll_to(10.09);
    assert_eq!(stack.recompute(&mut host).applied, 0);
    host.scroll_to(10.2);
    assert_eq!(stack.recompute(&mut host).applied, 1);
    assert_eq!(host.writes()[0].transform.transform.translate, 10.2);
}

#[test]
fn detach_cancels_pending_frame_and_unlistens() {
    let (mut host, mut stack) = attached(3);
    stack.on_scroll(&mut host);
    assert_eq!(host.pending_frames(), 1);

    let items = stack.detach(&mut host);
    assert_eq!(items, vec![SimItem(0), SimItem(1), SimItem(2)]);
    assert_eq!(host.pending_frames(), 0);
    assert_eq!(host.cancelled_frames(), 1);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn reattach_starts_with_an_empty_cache() {
    let (mut host, stack) = attached(2);
    let items = stack.detach(&mut host);
    host.take_writes();

    let stack = ScrollStack::attach(&mut host, items, config());
    assert_eq!(host.writes().len(), 2);
    assert_eq!(host.listener_count(), 1);
    assert_eq!(stack.cache().len(), 2);
}

#[test]
fn missing_geometry_degrades_without_aborting() {
    let (mut host, mut stack) = attached(3);
    host.set_sentinel_present(false);
    host.scroll_to(300.0);
    let stats = stack.recompute(&mut host);
    assert!(stats.missing.end_sentinel);
    assert_eq!(stats.items, 3);
    assert_eq!(stats.applied + stats.suppressed, 3);

    // pin_end collapses to -viewport/2, so every started item reads as released
    let report = stack.report(&host);
    assert!(report.iter().all(|r| r.boundaries.pin_end == -500.0));
    assert_eq!(report[0].phase, Phase::Released);
}

#[test]
fn report_matches_written_transforms() {
    let (mut host, mut stack) = attached(3);
    host.scroll_to(700.0);
    stack.recompute(&mut host);
    for r in stack.report(&host) {
        assert_eq!(stack.cache().get(r.index), Some(r.transform));
    }
}

#[test]
fn recompute_is_history_independent() {
    let (mut a_host, mut a) = attached(4);
    let (mut b_host, mut b) = attached(4);

    for s in [100.0, 900.0, 50.0, 1600.0, 400.0] {
        a_host.scroll_to(s);
        a.recompute(&mut a_host);
    }
    b_host.scroll_to(400.0);
    b.recompute(&mut b_host);

    assert_eq!(a.report(&a_host), b.report(&b_host));
}

#[test]
fn attach_reads_unmeasurable_offsets_as_zero() {
    let mut host = SimHost::new(Axis::Block, layout(3));
    host.set_connected(false);
    let items = host.items();
    let stack = ScrollStack::attach(&mut host, items, config());

    assert!(stack.items().iter().all(|it| it.leading_offset == 0.0));
    // the attach pass still writes every item
    assert_eq!(host.writes().len(), 3);
    assert_eq!(host.listener_count(), 1);
    assert_eq!(stack.cache().len(), 3);
    assert_eq!(stack.state(), SchedulerState::Idle);
}
