use super::*;

const CYCLE: u32 = 16;

fn pose(i: u32) -> Pose {
    Pose::at(FrameIndex(i), CYCLE, &MotionParams::default())
}

#[test]
fn frame_zero_is_neutral() {
    assert_eq!(phase_angle(FrameIndex(0), CYCLE), 0.0);
    assert_eq!(pose(0), Pose::default());
}

#[test]
fn quarter_cycle_pushes_legs_apart() {
    assert!((phase_angle(FrameIndex(4), CYCLE) - PI / 2.0).abs() < 1e-12);
    let p = pose(4);
    assert_eq!(p.body_y_offset, 0);
    assert_eq!(p.front_leg_offset, 4);
    assert_eq!(p.back_leg_offset, -4);
    assert_eq!(p.tail_angle_offset, 5);
}

#[test]
fn body_bounce_repeats_every_cycle() {
    for i in 0..CYCLE {
        assert_eq!(
            pose(i).body_y_offset,
            pose(i + CYCLE).body_y_offset,
            "frame {i}"
        );
    }
}

#[test]
fn back_legs_trail_front_legs_by_half_a_cycle() {
    for i in 0..CYCLE {
        assert_eq!(
            pose(i).back_leg_offset,
            pose(i + CYCLE / 2).front_leg_offset,
            "frame {i}"
        );
    }
}

#[test]
fn offsets_stay_within_amplitude() {
    for i in 0..CYCLE {
        let p = pose(i);
        assert!(p.body_y_offset.abs() <= 3);
        assert!(p.front_leg_offset.abs() <= 4);
        assert!(p.back_leg_offset.abs() <= 4);
        assert!(p.tail_angle_offset.abs() <= 8);
    }
}

#[test]
fn truncation_is_not_rounding() {
    // 4 * sin(3pi/8) = 3.695..., rounding would give 4.
    assert_eq!(pose(3).front_leg_offset, 3);
    // 8 * sin(1.5 * 7pi/8) = -6.65..., rounding or flooring would give -7.
    assert_eq!(pose(7).tail_angle_offset, -6);
}
