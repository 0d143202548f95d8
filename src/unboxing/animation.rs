//! Unboxing domain: shake keyframes.

/// One full wobble, repeated while the box shakes
pub const SHAKE_CYCLE_SECS: f32 = 0.5;

const SHAKE_ROTATION_DEG: [f32; 7] = [-5.0, 5.0, -5.0, 5.0, -5.0, 5.0, 0.0];
const SHAKE_SCALE: [f32; 7] = [1.0, 1.1, 1.0, 1.1, 1.0, 1.1, 1.0];

pub const HOVER_SCALE: f32 = 1.05;
pub const PRESS_SCALE: f32 = 0.95;

/// Rotation and uniform scale applied to the box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxPose {
    pub rotation_deg: f32,
    pub scale: f32,
}

impl BoxPose {
    pub const IDLE: BoxPose = BoxPose {
        rotation_deg: 0.0,
        scale: 1.0,
    };
}

fn sample(keyframes: &[f32], t: f32) -> f32 {
    let segments = (keyframes.len() - 1) as f32;
    let position = t.clamp(0.0, 1.0) * segments;
    let index = (position.floor() as usize).min(keyframes.len() - 2);
    let fraction = position - index as f32;
    keyframes[index] + (keyframes[index + 1] - keyframes[index]) * fraction
}

/// Pose at `elapsed_secs` into the shake. Keyframes are evenly spaced over
/// one cycle and the cycle repeats.
pub fn shake_pose(elapsed_secs: f32) -> BoxPose {
    let t = elapsed_secs.max(0.0).rem_euclid(SHAKE_CYCLE_SECS) / SHAKE_CYCLE_SECS;
    BoxPose {
        rotation_deg: sample(&SHAKE_ROTATION_DEG, t),
        scale: sample(&SHAKE_SCALE, t),
    }
}
