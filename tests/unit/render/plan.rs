use super::*;

fn plan(i: u32) -> FramePlan {
    plan_frame(&SheetConfig::default(), FrameIndex(i))
}

fn rect_of(plan: &FramePlan, part: Part) -> IRect {
    match plan.op(part).map(|op| &op.shape) {
        Some(Shape::Rect(r)) | Some(Shape::Ellipse(r)) => *r,
        other => panic!("{part:?} has no box: {other:?}"),
    }
}

#[test]
fn layers_are_ordered_back_to_front() {
    let parts: Vec<Part> = plan(0).ops.iter().map(|op| op.part).collect();
    assert_eq!(
        parts,
        vec![
            Part::Body,
            Part::Belly,
            Part::Head,
            Part::Face,
            Part::LeftEar,
            Part::RightEar,
            Part::LeftEye,
            Part::RightEye,
            Part::Nose,
            Part::FrontLeg(0),
            Part::FrontLeg(1),
            Part::BackLeg(0),
            Part::BackLeg(1),
            Part::TailSegment(0),
            Part::TailSegment(1),
            Part::TailSegment(2),
            Part::TailSegment(3),
        ]
    );
}

#[test]
fn frame_zero_boxes() {
    let p = plan(0);
    assert_eq!(p.pose, Pose::default());
    assert_eq!(rect_of(&p, Part::Body), IRect::new(7, 12, 25, 24));
    assert_eq!(rect_of(&p, Part::Belly), IRect::new(9, 15, 23, 22));
    assert_eq!(rect_of(&p, Part::Head), IRect::new(10, 6, 22, 18));
    assert_eq!(rect_of(&p, Part::Face), IRect::new(12, 8, 20, 16));
    assert_eq!(rect_of(&p, Part::LeftEye), IRect::new(13, 11, 15, 13));
    assert_eq!(rect_of(&p, Part::RightEye), IRect::new(17, 11, 19, 13));
    assert_eq!(rect_of(&p, Part::FrontLeg(0)), IRect::new(10, 20, 13, 26));
    assert_eq!(rect_of(&p, Part::FrontLeg(1)), IRect::new(19, 20, 22, 26));
    assert_eq!(rect_of(&p, Part::BackLeg(0)), IRect::new(9, 21, 12, 27));
    assert_eq!(rect_of(&p, Part::BackLeg(1)), IRect::new(20, 21, 23, 27));
}

#[test]
fn ears_rise_above_head() {
    let p = plan(0);
    let Some(Shape::Polygon(left)) = p.op(Part::LeftEar).map(|op| &op.shape) else {
        panic!("left ear is not a polygon");
    };
    assert_eq!(
        left,
        &vec![
            Point::new(12.0, 6.0),
            Point::new(14.0, 2.0),
            Point::new(16.0, 6.0)
        ]
    );
    let Some(Shape::Polygon(right)) = p.op(Part::RightEar).map(|op| &op.shape) else {
        panic!("right ear is not a polygon");
    };
    assert_eq!(right[0], Point::new(20.0, 6.0));
    assert_eq!(right[1], Point::new(18.0, 2.0));
}

#[test]
fn tail_segments_interpolate_from_anchor_to_tip() {
    let p = plan(0);
    let origins: Vec<(i32, i32)> = (0..4)
        .map(|i| {
            let r = rect_of(&p, Part::TailSegment(i));
            assert_eq!((r.width(), r.height()), (3, 4));
            (r.x0, r.y0)
        })
        .collect();
    assert_eq!(origins, vec![(25, 16), (27, 14), (29, 13), (31, 12)]);

    let p = plan(4);
    let tip = rect_of(&p, Part::TailSegment(3));
    assert_eq!((tip.x0, tip.y0), (36, 12));
    assert_eq!(rect_of(&p, Part::TailSegment(2)).x0, 32);
}

#[test]
fn legs_swing_with_pose() {
    let p = plan(4);
    assert_eq!(rect_of(&p, Part::FrontLeg(0)).x0, 16 - 6 + 4);
    assert_eq!(rect_of(&p, Part::FrontLeg(1)).x0, 16 + 3 + 4);
    assert_eq!(rect_of(&p, Part::BackLeg(0)).x0, 16 - 7 - 4);
    assert_eq!(rect_of(&p, Part::BackLeg(1)).x0, 16 + 4 - 4);
}

#[test]
fn body_bounce_moves_whole_figure() {
    let p = plan(2);
    assert_eq!(p.pose.body_y_offset, 3);
    assert_eq!(rect_of(&p, Part::Body), IRect::new(7, 15, 25, 27));
    assert_eq!(rect_of(&p, Part::Head), IRect::new(10, 9, 22, 21));
}

#[test]
fn alternate_geometry_is_honoured() {
    let mut cfg = SheetConfig::default();
    cfg.geometry.body_size = (10, 8);
    cfg.geometry.tail_segments = 2;
    let p = plan_frame(&cfg, FrameIndex(0));
    assert_eq!(rect_of(&p, Part::Body), IRect::new(11, 14, 21, 22));
    assert!(p.op(Part::TailSegment(2)).is_none());
    assert_eq!(rect_of(&p, Part::TailSegment(0)).x0, 21);
}

#[test]
fn execute_plan_uses_palette_roles() {
    let cfg = SheetConfig::default();
    let mut canvas = Canvas::new(32, 32);
    execute_plan(&mut canvas, &plan(0), &cfg.palette);
    assert_eq!(canvas.pixel(7, 18), Some(cfg.palette.shadow));
    assert_eq!(canvas.pixel(8, 19), Some(cfg.palette.body));
    assert_eq!(canvas.pixel(16, 12), Some(cfg.palette.accent));
    assert_eq!(canvas.pixel(14, 12), Some(cfg.palette.shadow));
    assert_eq!(canvas.pixel(6, 18), Some(cfg.palette.background));
    assert_eq!(canvas.pixel(0, 0), Some(cfg.palette.background));
}
