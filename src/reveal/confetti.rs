//! Reveal domain: confetti bursts from both screen edges.
//!
//! The emitter lives only while the reveal view does. Leaving the view
//! despawns it together with every particle still in flight.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::Rng;

use crate::content::UnboxSettings;
use crate::reveal::components::{ConfettiEmitter, ConfettiParticle};

pub const CONFETTI_COLORS: [Color; 3] = [
    Color::srgb(0.831, 0.141, 0.149), // #D42426
    Color::srgb(0.078, 0.42, 0.227),  // #146B3A
    Color::srgb(1.0, 0.843, 0.0),     // #FFD700
];

pub const SPREAD_DEG: f32 = 55.0;

const ORIGIN_Y_FRACTION: f32 = 0.5;
const START_SPEED: f32 = 1300.0;
const MIN_SPEED_FACTOR: f32 = 0.6;
const GRAVITY: f32 = 1400.0;
const DRAG_PER_SEC: f32 = 2.2;
const MAX_SPIN_DEG_PER_SEC: f32 = 540.0;
const PARTICLE_LIFETIME_SECS: f32 = 2.5;
const PARTICLE_SIZE: Vec2 = Vec2::new(10.0, 6.0);
/// Fraction of the lifetime spent fading out
const FADE_FRACTION: f32 = 0.3;
const FALLBACK_SCREEN: Vec2 = Vec2::new(1280.0, 720.0);

/// Where a burst starts and which way it points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeBurst {
    /// Horizontal origin as a fraction of screen width
    pub origin_x_fraction: f32,
    /// Launch angle, counter-clockwise from the +x axis
    pub angle_deg: f32,
}

pub const LEFT_BURST: EdgeBurst = EdgeBurst {
    origin_x_fraction: 0.0,
    angle_deg: 60.0,
};

pub const RIGHT_BURST: EdgeBurst = EdgeBurst {
    origin_x_fraction: 1.0,
    angle_deg: 120.0,
};

/// Initial state for one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSeed {
    pub position: Vec2,
    pub velocity: Vec2,
    pub spin_deg_per_sec: f32,
    pub color: Color,
}

/// Screen-space velocity for a launch angle. Screen y grows downward, so
/// positive angles point up.
pub fn launch_velocity(angle_deg: f32, speed: f32) -> Vec2 {
    let radians = angle_deg.to_radians();
    Vec2::new(radians.cos(), -radians.sin()) * speed
}

pub fn burst_origin(burst: EdgeBurst, screen: Vec2) -> Vec2 {
    Vec2::new(
        screen.x * burst.origin_x_fraction,
        screen.y * ORIGIN_Y_FRACTION,
    )
}

pub fn burst_seeds<R: Rng + ?Sized>(
    burst: EdgeBurst,
    screen: Vec2,
    count: u32,
    rng: &mut R,
) -> Vec<ParticleSeed> {
    let origin = burst_origin(burst, screen);
    let half_spread = SPREAD_DEG / 2.0;

    (0..count)
        .map(|_| {
            let angle = burst.angle_deg + rng.random_range(-half_spread..=half_spread);
            let speed = START_SPEED * rng.random_range(MIN_SPEED_FACTOR..=1.0);
            ParticleSeed {
                position: origin,
                velocity: launch_velocity(angle, speed),
                spin_deg_per_sec: rng
                    .random_range(-MAX_SPIN_DEG_PER_SEC..=MAX_SPIN_DEG_PER_SEC),
                color: CONFETTI_COLORS[rng.random_range(0..CONFETTI_COLORS.len())],
            }
        })
        .collect()
}

/// Advance one particle by `dt` seconds: gravity, then drag, then motion.
pub fn step_particle(position: Vec2, velocity: Vec2, dt: f32) -> (Vec2, Vec2) {
    let mut velocity = velocity;
    velocity.y += GRAVITY * dt;
    velocity *= (-DRAG_PER_SEC * dt).exp();
    (position + velocity * dt, velocity)
}

/// Opacity for a particle `fraction` of the way through its life
pub fn particle_alpha(fraction: f32) -> f32 {
    let fade_start = 1.0 - FADE_FRACTION;
    if fraction <= fade_start {
        1.0
    } else {
        ((1.0 - fraction) / FADE_FRACTION).clamp(0.0, 1.0)
    }
}

fn spawn_particle(commands: &mut Commands, seed: ParticleSeed) {
    commands.spawn((
        ConfettiParticle {
            position: seed.position,
            velocity: seed.velocity,
            rotation_deg: 0.0,
            spin_deg_per_sec: seed.spin_deg_per_sec,
            color: seed.color,
            lifetime: Timer::from_seconds(PARTICLE_LIFETIME_SECS, TimerMode::Once),
        },
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(seed.position.x),
            top: Val::Px(seed.position.y),
            width: Val::Px(PARTICLE_SIZE.x),
            height: Val::Px(PARTICLE_SIZE.y),
            ..default()
        },
        BackgroundColor(seed.color),
        UiTransform::default(),
        GlobalZIndex(300),
    ));
}

pub(crate) fn start_confetti(mut commands: Commands, settings: Res<UnboxSettings>) {
    commands.spawn(ConfettiEmitter::new(
        settings.confetti_duration(),
        settings.confetti_particles_per_side,
    ));
    debug!(
        "Confetti started for {:.1}s",
        settings.confetti_duration_secs
    );
}

pub(crate) fn emit_confetti(
    mut commands: Commands,
    time: Res<Time>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut emitters: Query<(Entity, &mut ConfettiEmitter)>,
) {
    let screen = windows
        .single()
        .map(|window| Vec2::new(window.width(), window.height()))
        .unwrap_or(FALLBACK_SCREEN);
    let mut rng = rand::rng();

    for (entity, mut emitter) in &mut emitters {
        if emitter.tick(time.delta()) {
            for burst in [LEFT_BURST, RIGHT_BURST] {
                for seed in burst_seeds(burst, screen, emitter.particles_per_side, &mut rng) {
                    spawn_particle(&mut commands, seed);
                }
            }
        }

        if emitter.is_done() {
            commands.entity(entity).despawn();
            debug!("Confetti window finished");
        }
    }
}

pub(crate) fn update_confetti(
    mut commands: Commands,
    time: Res<Time>,
    mut particles: Query<(
        Entity,
        &mut ConfettiParticle,
        &mut Node,
        &mut BackgroundColor,
        &mut UiTransform,
    )>,
) {
    let dt = time.delta_secs();

    for (entity, mut particle, mut node, mut bg_color, mut transform) in &mut particles {
        particle.lifetime.tick(time.delta());
        if particle.lifetime.is_finished() {
            commands.entity(entity).despawn();
            continue;
        }

        let (position, velocity) = step_particle(particle.position, particle.velocity, dt);
        particle.position = position;
        particle.velocity = velocity;
        particle.rotation_deg += particle.spin_deg_per_sec * dt;

        node.left = Val::Px(position.x);
        node.top = Val::Px(position.y);
        transform.rotation = Rot2::degrees(particle.rotation_deg);

        let alpha = particle_alpha(particle.lifetime.fraction());
        *bg_color = BackgroundColor(particle.color.with_alpha(alpha));
    }
}

/// Stop the emitter and clear every particle when the view goes away.
pub(crate) fn cancel_confetti(
    mut commands: Commands,
    emitters: Query<Entity, With<ConfettiEmitter>>,
    particles: Query<Entity, With<ConfettiParticle>>,
) {
    let mut cleared = 0;
    for entity in emitters.iter().chain(particles.iter()) {
        commands.entity(entity).despawn();
        cleared += 1;
    }
    if cleared > 0 {
        debug!("Cleared {} confetti entities", cleared);
    }
}
