use super::*;
use crate::host::sim::{SimHost, SimLayout};

fn host(axis: Axis) -> SimHost {
    let layout = SimLayout {
        viewport: Size::new(1200.0, 700.0),
        leading_padding: 100.0,
        item_extents: vec![300.0, 300.0],
        cross_extent: 500.0,
    };
    let mut host = SimHost::new(axis, layout);
    host.scroll_to(42.0);
    host
}

#[test]
fn accessors_read_the_matching_component() {
    let b = host(Axis::Block);
    assert_eq!(Axis::Block.scroll_pos(&b), Some(42.0));
    assert_eq!(Axis::Block.viewport_size(&b), Some(700.0));
    assert_eq!(Axis::Block.end_sentinel(&b), Some(700.0));

    let i = host(Axis::Inline);
    assert_eq!(Axis::Inline.scroll_pos(&i), Some(42.0));
    assert_eq!(Axis::Inline.viewport_size(&i), Some(1200.0));
    let items = i.items();
    assert_eq!(Axis::Inline.leading_offset(&i, &items[1]), Some(400.0));
}

#[test]
fn absent_container_yields_none() {
    let mut b = host(Axis::Block);
    b.set_connected(false);
    assert_eq!(Axis::Block.scroll_pos(&b), None);
    assert_eq!(Axis::Block.viewport_size(&b), None);
    let items = b.items();
    assert_eq!(Axis::Block.leading_offset(&b, &items[0]), None);
}

#[test]
fn compose_translates_along_axis_only() {
    let t = StackTransform {
        translate: 25.0,
        scale: 0.8,
    };
    let block = Axis::Block.compose_transform(t);
    let inline = Axis::Inline.compose_transform(t);
    assert_eq!(block.affine * Point::ORIGIN, Point::new(0.0, 25.0));
    assert_eq!(inline.affine * Point::ORIGIN, Point::new(25.0, 0.0));
    assert_eq!(block.transform, t);
    assert_eq!(block.axis, Axis::Block);
}

#[test]
fn edges_and_origins_follow_axis() {
    assert_eq!(Axis::Block.trailing_edge(), Edge::Bottom);
    assert_eq!(Axis::Inline.trailing_edge(), Edge::Right);
    assert_eq!(Axis::Block.transform_origin().as_css(), "top center");
    assert_eq!(Axis::Inline.transform_origin().as_css(), "left center");
    assert_eq!(
        TransformOrigin::TopCenter.pivot(Size::new(10.0, 4.0)),
        Point::new(5.0, 0.0)
    );
}

#[test]
fn axis_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Axis::Inline).unwrap(), "\"inline\"");
    let a: Axis = serde_json::from_str("\"block\"").unwrap();
    assert_eq!(a, Axis::Block);
    assert_eq!(Axis::default(), Axis::Block);
    assert_eq!(Axis::Block.vector(3.0), Vec2::new(0.0, 3.0));
}
