use crate::{
    animation::pose::Pose,
    foundation::core::{FrameIndex, IRect, Point},
    foundation::math::trunc_i32,
    render::canvas::Canvas,
    sprite::config::SheetConfig,
    sprite::palette::{ColorRole, Palette},
};

/// Named layer of the cat figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Part {
    Body,
    Belly,
    Head,
    Face,
    LeftEar,
    RightEar,
    LeftEye,
    RightEye,
    Nose,
    FrontLeg(u8),
    BackLeg(u8),
    TailSegment(u32),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    Ellipse(IRect),
    Polygon(Vec<Point>),
    Rect(IRect),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DrawOp {
    pub part: Part,
    pub shape: Shape,
    pub fill: ColorRole,
    pub outline: Option<ColorRole>,
}

/// Ordered draw operations for one frame. Later ops paint over earlier ones.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    pub frame: FrameIndex,
    pub pose: Pose,
    pub ops: Vec<DrawOp>,
}

impl FramePlan {
    pub fn op(&self, part: Part) -> Option<&DrawOp> {
        self.ops.iter().find(|op| op.part == part)
    }
}

fn pt(x: i32, y: i32) -> Point {
    Point::new(f64::from(x), f64::from(y))
}

/// Lay out every part of the cat for `frame`, back to front.
pub fn plan_frame(config: &SheetConfig, frame: FrameIndex) -> FramePlan {
    let g = &config.geometry;
    let pose = Pose::at(frame, config.cycle_length, &config.motion);

    let cx = (config.frame_width / 2) as i32;
    let cy = (config.frame_height / 2) as i32 + pose.body_y_offset;

    let mut ops = Vec::with_capacity(13 + g.tail_segments as usize);
    let mut push = |part, shape, fill, outline| {
        ops.push(DrawOp {
            part,
            shape,
            fill,
            outline,
        })
    };

    let (bw, bh) = g.body_size;
    let body_left = cx - bw / 2;
    let body_top = cy - bh / 2 + g.body_drop;
    let body = IRect::new(body_left, body_top, body_left + bw, body_top + bh);
    push(
        Part::Body,
        Shape::Ellipse(body),
        ColorRole::Body,
        Some(ColorRole::Shadow),
    );
    let bi = g.belly_inset;
    push(
        Part::Belly,
        Shape::Ellipse(body.inset(bi.left, bi.top, bi.right, bi.bottom)),
        ColorRole::Accent,
        None,
    );

    let (hx, hy) = (cx, cy - g.head_rise);
    let head = IRect::around(hx, hy, g.head_radius);
    push(
        Part::Head,
        Shape::Ellipse(head),
        ColorRole::Body,
        Some(ColorRole::Shadow),
    );
    let fi = g.face_inset;
    push(
        Part::Face,
        Shape::Ellipse(head.inset(fi, fi, fi, fi)),
        ColorRole::Accent,
        None,
    );

    let head_top = hy - g.head_radius;
    let apex_y = head_top - g.ear_height;
    for (part, side) in [(Part::LeftEar, -1), (Part::RightEar, 1)] {
        let ear = vec![
            pt(hx + side * g.ear_spread, head_top),
            pt(hx + side * g.ear_apex_dx, apex_y),
            pt(hx, head_top),
        ];
        push(
            part,
            Shape::Polygon(ear),
            ColorRole::Shadow,
            Some(ColorRole::Shadow),
        );
    }

    for (part, (ex, ey)) in [(Part::LeftEye, g.left_eye), (Part::RightEye, g.right_eye)] {
        let (x, y) = (hx + ex, hy + ey);
        push(
            part,
            Shape::Ellipse(IRect::new(x, y, x + g.eye_size, y + g.eye_size)),
            ColorRole::Shadow,
            None,
        );
    }

    let nose = g.nose.iter().map(|&(dx, dy)| pt(hx + dx, hy + dy)).collect();
    push(Part::Nose, Shape::Polygon(nose), ColorRole::Shadow, None);

    let (lw, lh) = g.leg_size;
    let legs: [([i32; 2], i32, i32, fn(u8) -> Part); 2] = [
        (g.front_leg_x, g.front_leg_drop, pose.front_leg_offset, Part::FrontLeg),
        (g.back_leg_x, g.back_leg_drop, pose.back_leg_offset, Part::BackLeg),
    ];
    for (xs, drop, swing, part) in legs {
        let y = cy + drop;
        for (i, dx) in xs.into_iter().enumerate() {
            let x = cx + dx + swing;
            push(
                part(i as u8),
                Shape::Rect(IRect::new(x, y, x + lw, y + lh)),
                ColorRole::Shadow,
                Some(ColorRole::Shadow),
            );
        }
    }

    let anchor = pt(cx + bw / 2, cy);
    let tip = pt(
        cx + bw / 2 + g.tail_reach.0 + pose.tail_angle_offset,
        cy + g.tail_reach.1,
    );
    let (sw, sh) = g.tail_segment_size;
    let last = f64::from(g.tail_segments.saturating_sub(1).max(1));
    for i in 0..g.tail_segments {
        let p = anchor.lerp(tip, f64::from(i) / last);
        let (x, y) = (trunc_i32(p.x), trunc_i32(p.y));
        push(
            Part::TailSegment(i),
            Shape::Rect(IRect::new(x, y, x + sw, y + sh)),
            ColorRole::Body,
            Some(ColorRole::Shadow),
        );
    }

    FramePlan { frame, pose, ops }
}

/// Rasterize `plan` onto `canvas` in order.
pub fn execute_plan(canvas: &mut Canvas, plan: &FramePlan, palette: &Palette) {
    for op in &plan.ops {
        let fill = palette.get(op.fill);
        let outline = op.outline.map(|role| palette.get(role));
        match &op.shape {
            Shape::Ellipse(rect) => canvas.fill_ellipse(*rect, fill, outline),
            Shape::Polygon(points) => canvas.fill_polygon(points, fill, outline),
            Shape::Rect(rect) => canvas.fill_rect(*rect, fill, outline),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
