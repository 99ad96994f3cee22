#![allow(clippy::float_cmp)]

use super::*;

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Clear,
    Save,
    Translate(f64, f64),
    Rotate(f64),
    DrawImage(f64, f64),
    Restore,
}

/// Surface that records every call instead of drawing.
struct RecordingSurface {
    size: (f64, f64),
    image: (f64, f64),
    ops: Vec<Op>,
    fail_draw: bool,
}

impl RecordingSurface {
    fn new(size: (f64, f64), image: (f64, f64)) -> Self {
        Self {
            size,
            image,
            ops: Vec::new(),
            fail_draw: false,
        }
    }

    fn count(&self, wanted: &Op) -> usize {
        self.ops
            .iter()
            .filter(|op| std::mem::discriminant(*op) == std::mem::discriminant(wanted))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        self.size
    }

    fn image_size(&self) -> (f64, f64) {
        self.image
    }

    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn save(&mut self) {
        self.ops.push(Op::Save);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), EnhanceError> {
        self.ops.push(Op::Translate(x, y));
        Ok(())
    }

    fn rotate(&mut self, radians: f64) -> Result<(), EnhanceError> {
        self.ops.push(Op::Rotate(radians));
        Ok(())
    }

    fn draw_image(&mut self, x: f64, y: f64) -> Result<(), EnhanceError> {
        if self.fail_draw {
            return Err(EnhanceError::Dom("drawImage rejected".to_owned()));
        }
        self.ops.push(Op::DrawImage(x, y));
        Ok(())
    }

    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
}

// =============================================================
// RenderState
// =============================================================

#[test]
fn state_starts_at_zero() {
    let state = RenderState::new(0.5);
    assert_eq!(state.rotation_deg(), 0.0);
    assert_eq!(state.speed_deg_per_frame(), 0.5);
}

#[test]
fn angle_after_k_frames_is_k_times_step_mod_360() {
    let mut state = RenderState::new(0.5);
    for k in 1..=2_000_u32 {
        state.advance();
        let expected = (f64::from(k) * 0.5) % 360.0;
        assert_eq!(state.rotation_deg(), expected, "frame {k}");
        assert!((0.0..360.0).contains(&state.rotation_deg()));
    }
}

#[test]
fn angle_wraps_exactly_at_full_turn() {
    let mut state = RenderState::new(0.5);
    for _ in 0..720 {
        state.advance();
    }
    assert_eq!(state.rotation_deg(), 0.0);
}

#[test]
fn large_step_stays_in_range() {
    let mut state = RenderState::new(725.0);
    state.advance();
    assert_eq!(state.rotation_deg(), 5.0);
}

#[test]
fn zero_speed_holds_still() {
    let mut state = RenderState::new(0.0);
    state.advance();
    state.advance();
    assert_eq!(state.rotation_deg(), 0.0);
}

#[test]
fn radians_follow_degrees() {
    let mut state = RenderState::new(90.0);
    state.advance();
    let delta = (state.rotation_rad() - std::f64::consts::FRAC_PI_2).abs();
    assert!(delta < 1e-12);
}

// =============================================================
// draw_frame
// =============================================================

#[test]
fn frame_runs_clear_transform_draw_restore_in_order() {
    let mut state = RenderState::new(0.5);
    let mut surface = RecordingSurface::new((400.0, 300.0), (100.0, 80.0));

    draw_frame(&mut state, &mut surface).expect("frame should draw");

    assert_eq!(
        surface.ops,
        vec![
            Op::Clear,
            Op::Save,
            Op::Translate(200.0, 150.0),
            Op::Rotate(0.0),
            Op::DrawImage(-50.0, -40.0),
            Op::Restore,
        ]
    );
    assert_eq!(state.rotation_deg(), 0.5);
}

#[test]
fn second_frame_rotates_by_one_step() {
    let mut state = RenderState::new(0.5);
    let mut surface = RecordingSurface::new((100.0, 100.0), (10.0, 10.0));
    draw_frame(&mut state, &mut surface).expect("first frame");
    surface.ops.clear();

    draw_frame(&mut state, &mut surface).expect("second frame");

    assert_eq!(surface.ops[3], Op::Rotate(0.5_f64.to_radians()));
}

#[test]
fn failed_draw_still_restores_and_keeps_angle() {
    let mut state = RenderState::new(0.5);
    let mut surface = RecordingSurface::new((100.0, 100.0), (10.0, 10.0));
    surface.fail_draw = true;

    let err = draw_frame(&mut state, &mut surface).unwrap_err();

    assert!(matches!(err, EnhanceError::Dom(_)));
    assert_eq!(surface.ops.last(), Some(&Op::Restore));
    assert_eq!(state.rotation_deg(), 0.0);
}

// =============================================================
// RotationCore
// =============================================================

#[test]
fn one_draw_per_frame() {
    let mut core = RotationCore::new(RecordingSurface::new((100.0, 100.0), (10.0, 10.0)), 0.5);
    for _ in 0..240 {
        core.on_frame().expect("frame should draw");
    }
    assert_eq!(core.frames_drawn(), 240);
    assert_eq!(core.surface().count(&Op::DrawImage(0.0, 0.0)), 240);
    assert_eq!(core.state().rotation_deg(), 120.0);
}

#[test]
fn every_draw_is_preceded_by_a_clear() {
    let mut core = RotationCore::new(RecordingSurface::new((100.0, 100.0), (10.0, 10.0)), 0.5);
    for _ in 0..10 {
        core.on_frame().expect("frame should draw");
    }
    let ops = &core.surface().ops;
    assert_eq!(core.surface().count(&Op::Clear), 10);
    for (i, op) in ops.iter().enumerate() {
        if matches!(op, Op::DrawImage(..)) {
            let last_clear = ops[..i]
                .iter()
                .rposition(|o| *o == Op::Clear)
                .expect("clear before draw");
            let draws_between = ops[last_clear..i]
                .iter()
                .filter(|o| matches!(o, Op::DrawImage(..)))
                .count();
            assert_eq!(draws_between, 0, "draw at {i} reuses an uncleared surface");
        }
    }
}

#[test]
fn failed_frame_is_not_counted() {
    let mut surface = RecordingSurface::new((100.0, 100.0), (10.0, 10.0));
    surface.fail_draw = true;
    let mut core = RotationCore::new(surface, 0.5);
    assert!(core.on_frame().is_err());
    assert_eq!(core.frames_drawn(), 0);
}
