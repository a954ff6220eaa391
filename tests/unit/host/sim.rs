use super::*;
use crate::axis::adapter::{Edge, TransformOrigin};
use crate::host::Spacing;

fn layout() -> SimLayout {
    SimLayout {
        viewport: Size::new(1200.0, 600.0),
        leading_padding: 240.0,
        item_extents: vec![450.0, 450.0, 300.0],
        cross_extent: 650.0,
    }
}

#[test]
fn items_are_laid_out_sequentially_along_axis() {
    let host = SimHost::new(Axis::Inline, layout());
    let items = host.items();
    assert_eq!(host.item_offset(&items[0]), Some(Point::new(240.0, 0.0)));
    assert_eq!(host.item_offset(&items[1]), Some(Point::new(690.0, 0.0)));
    assert_eq!(host.end_sentinel_offset(), Some(Point::new(1440.0, 0.0)));
    assert_eq!(host.item_offset(&SimItem(9)), None);
    assert_eq!(host.item_size(0), Size::new(450.0, 650.0));
}

#[test]
fn prepared_spacing_pushes_later_items() {
    let mut host = SimHost::new(Axis::Block, layout());
    let prep = ItemPrep {
        index: 0,
        spacing: Some(Spacing {
            edge: Edge::Bottom,
            px: 150.0,
        }),
        origin: TransformOrigin::TopCenter,
        compositor_hints: true,
    };
    host.prepare_item(&SimItem(0), &prep);
    assert_eq!(host.item_offset(&SimItem(1)), Some(Point::new(0.0, 840.0)));
    assert_eq!(host.prep(0), Some(&prep));
    assert_eq!(host.prep(1), None);
}

#[test]
fn frame_queue_is_fifo_and_cancellable() {
    let mut host = SimHost::new(Axis::Block, layout());
    let a = host.request_frame();
    let b = host.request_frame();
    assert_ne!(a, b);
    host.cancel_frame(a);
    host.cancel_frame(a);
    assert_eq!(host.cancelled_frames(), 1);
    assert_eq!(host.pump_frame(), Some(b));
    assert_eq!(host.pump_frame(), None);
}

#[test]
fn listeners_are_tracked() {
    let mut host = SimHost::new(Axis::Block, layout());
    let a = host.add_scroll_listener();
    let b = host.add_scroll_listener();
    assert_eq!(host.listener_count(), 2);
    host.remove_scroll_listener(a);
    host.remove_scroll_listener(a);
    assert_eq!(host.listener_count(), 1);
    host.remove_scroll_listener(b);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn layout_validation_rejects_bad_sizes() {
    assert!(layout().validate().is_ok());

    let mut bad = layout();
    bad.item_extents[1] = -1.0;
    let err = bad.validate().unwrap_err();
    assert!(err.to_string().contains("itemExtents[1]"));

    let mut bad = layout();
    bad.viewport = Size::new(f64::NAN, 10.0);
    assert!(bad.validate().is_err());
}

#[test]
fn layout_json_uses_camel_case() {
    let l: SimLayout = serde_json::from_str(
        r#"{ "viewport": { "width": 800, "height": 1000 }, "leadingPadding": 200, "itemExtents": [320, 320] }"#,
    )
    .unwrap();
    assert_eq!(l.leading_padding, 200.0);
    assert_eq!(l.item_extents.len(), 2);
    assert_eq!(l.cross_extent, 0.0);
}
