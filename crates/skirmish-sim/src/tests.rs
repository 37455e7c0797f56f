//! Tests for the unit core: falloff, hull geometry, turret control,
//! weapon gating and the Sparky tick.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;

use skirmish_core::config::SparkyTuning;
use skirmish_core::constants::*;
use skirmish_core::enums::{FireState, WeaponMode};
use skirmish_core::events::ArenaEvent;
use skirmish_core::input::{InputFrame, InputSnapshot, Key, KeySet};
use skirmish_core::types::{Pose, Rect};

use crate::context::{BulletSpawn, UnitContext};
use crate::unit::falloff::falloff;
use crate::unit::turret::{aim_angle, shortest_delta, Turret};
use crate::unit::weapon::Weapon;
use crate::unit::{hull, Sparky, Unit, UnitFrame};

// ---- Test collaborator ----

struct MockArena {
    input: Option<InputSnapshot>,
    obstacles: Vec<Rect>,
    moves: Vec<(u32, Vec2)>,
    rotations: Vec<(u32, f32)>,
    bullets: Vec<BulletSpawn>,
    events: Vec<ArenaEvent>,
    damage_scale: f32,
    speed_scale: f32,
}

impl MockArena {
    fn new(input: Option<InputSnapshot>) -> Self {
        Self {
            input,
            obstacles: Vec::new(),
            moves: Vec::new(),
            rotations: Vec::new(),
            bullets: Vec::new(),
            events: Vec::new(),
            damage_scale: 1.0,
            speed_scale: 1.0,
        }
    }
}

impl UnitContext for MockArena {
    fn input(&self, _player_id: u32) -> Option<&InputSnapshot> {
        self.input.as_ref()
    }

    fn is_blocked(&self, position: Vec2) -> bool {
        self.obstacles.iter().any(|o| o.contains(position))
    }

    fn propose_move(&mut self, unit_id: u32, position: Vec2) {
        self.moves.push((unit_id, position));
    }

    fn propose_rotate(&mut self, unit_id: u32, rotation: f32) {
        self.rotations.push((unit_id, rotation));
    }

    fn spawn_bullet(&mut self, spawn: BulletSpawn) {
        self.bullets.push(spawn);
    }

    fn damage_scale(&self, _unit_id: u32) -> f32 {
        self.damage_scale
    }

    fn speed_scale(&self, _unit_id: u32) -> f32 {
        self.speed_scale
    }

    fn emit(&mut self, event: ArenaEvent) {
        self.events.push(event);
    }
}

fn controlled(pose: Pose) -> UnitFrame {
    UnitFrame {
        unit_id: 1,
        player_id: Some(7),
        pose,
    }
}

fn input(held: &[Key], fire: bool, cursor: Vec2) -> InputSnapshot {
    InputFrame {
        held: held.iter().copied().collect(),
        fire,
        cursor,
    }
    .latch(KeySet::EMPTY)
}

/// Held keys with no new edges this tick.
fn held_input(held: &[Key], fire: bool, cursor: Vec2) -> InputSnapshot {
    let frame = InputFrame {
        held: held.iter().copied().collect(),
        fire,
        cursor,
    };
    frame.latch(frame.held)
}

// ---- Damage falloff ----

#[test]
fn test_falloff_peaks_at_optimal() {
    assert_eq!(falloff(CANNON_OPTIMAL_RANGE, CANNON_OPTIMAL_RANGE), 1.0);
}

#[test]
fn test_falloff_symmetric() {
    let opt = CANNON_OPTIMAL_RANGE;
    assert_eq!(falloff(0.0, opt), falloff(2.0 * opt, opt));
    // exp(-3) at both ends.
    assert!((falloff(0.0, opt) - (-3.0f32).exp()).abs() < 1e-6);
}

#[test]
fn test_falloff_decreases_away_from_optimal() {
    let opt = CANNON_OPTIMAL_RANGE;
    let mut prev_near = 1.0;
    let mut prev_far = 1.0;
    for i in 1..=40 {
        let offset = i as f32 * 0.1;
        let near = falloff(opt - offset, opt);
        let far = falloff(opt + offset, opt);
        assert!(near < prev_near, "falloff should shrink below optimal");
        assert!(far < prev_far, "falloff should shrink beyond optimal");
        prev_near = near;
        prev_far = far;
    }
}

#[test]
fn test_falloff_finite_for_degenerate_optimal() {
    for optimal in [0.0, -3.0] {
        for distance in [0.0, 1.0, 25.0] {
            let factor = falloff(distance, optimal);
            assert!(factor.is_finite() && (0.0..=1.0).contains(&factor));
        }
    }
}

// ---- Hit-test geometry ----

#[test]
fn test_hull_contains_interior() {
    assert!(hull::contains_local(Vec2::ZERO));
    assert!(hull::contains_local(Vec2::new(0.79, 0.79)));
    assert!(hull::contains_local(Vec2::new(-0.79, -0.99)));
    assert!(hull::contains_local(Vec2::new(0.0, 0.99)));
}

#[test]
fn test_hull_vertices_are_outside() {
    // Comparisons are strict: every vertex lies on a boundary.
    let vertices = [
        Vec2::new(-0.8, -1.0),
        Vec2::new(0.8, -1.0),
        Vec2::new(0.8, 0.8),
        Vec2::new(0.6, 1.0),
        Vec2::new(-0.6, 1.0),
        Vec2::new(-0.8, 0.8),
    ];
    for v in vertices {
        assert!(!hull::contains_local(v), "vertex {v:?} should be outside");
    }
    // Edge midpoint.
    assert!(!hull::contains_local(Vec2::new(0.0, -1.0)));
}

#[test]
fn test_hull_bevel_and_outside_points() {
    // Inside the bounding box but past a front bevel.
    assert!(!hull::contains_local(Vec2::new(0.75, 0.95)));
    assert!(!hull::contains_local(Vec2::new(-0.75, 0.95)));
    // Far outside.
    for p in [
        Vec2::new(2.0, 0.0),
        Vec2::new(-2.0, 0.0),
        Vec2::new(0.0, 1.5),
        Vec2::new(0.0, -1.5),
        Vec2::new(5.0, 5.0),
    ] {
        assert!(!hull::contains_local(p), "{p:?} should be outside");
    }
}

#[test]
fn test_hull_follows_pose() {
    let pose = Pose::new(Vec2::new(5.0, -3.0), FRAC_PI_2);
    let nose = pose.local_to_world(Vec2::new(0.0, 0.9));
    let flank = pose.local_to_world(Vec2::new(0.9, 0.0));
    assert!(hull::contains(&pose, nose));
    assert!(!hull::contains(&pose, flank));
    // Facing +pi/2 puts the nose toward -x.
    assert!(nose.x < pose.position.x);

    let sparky = Sparky::new(SparkyTuning::default());
    assert!(sparky.is_hit(&pose, nose));
    assert!(!sparky.is_hit(&pose, Vec2::ZERO));
}

#[test]
fn test_local_frame_round_trip() {
    let pose = Pose::new(Vec2::new(-7.25, 2.5), 2.1);
    for local in [Vec2::new(0.3, 0.4), Vec2::new(-0.8, 0.8), Vec2::new(0.0, -1.0)] {
        let back = pose.world_to_local(pose.local_to_world(local));
        assert!((back - local).length() < 1e-5);
    }
}

// ---- Turret control ----

#[test]
fn test_shortest_delta_wraps() {
    assert!((shortest_delta(FRAC_PI_2, 0.0) - FRAC_PI_2).abs() < 1e-6);
    // 3.0 -> -3.0 is a short hop across the seam, not most of a turn.
    let delta = shortest_delta(-3.0, 3.0);
    assert!((delta - (2.0 * PI - 6.0)).abs() < 1e-5);
    let delta = shortest_delta(3.0, -3.0);
    assert!((delta + (2.0 * PI - 6.0)).abs() < 1e-5);
    // Whole turns are ignored.
    assert!(shortest_delta(0.5 + 4.0 * PI, 0.5).abs() < 1e-5);
}

#[test]
fn test_aim_angle() {
    // Cursor to the left: the turret's +y must point at -x.
    let angle = aim_angle(Vec2::ZERO, Vec2::new(-5.0, 0.0)).unwrap();
    assert!((angle - FRAC_PI_2).abs() < 1e-6);
    // Straight ahead along +y is angle 0.
    let angle = aim_angle(Vec2::new(1.0, 1.0), Vec2::new(1.0, 4.0)).unwrap();
    assert!(angle.abs() < 1e-6);
    assert_eq!(aim_angle(Vec2::ONE, Vec2::ONE), None);
}

#[test]
fn test_turret_converges_without_overshoot() {
    let tuning = SparkyTuning::default();
    let target = FRAC_PI_2;
    let mut turret = Turret::default();
    let mut settled_at = None;

    for tick in 0..600 {
        let before = shortest_delta(target, turret.rotation).abs();
        turret.step_toward(target, &tuning);
        let after = shortest_delta(target, turret.rotation).abs();

        assert!(after <= before, "tick {tick}: |delta| grew {before} -> {after}");
        assert!(turret.rotation <= target, "tick {tick}: overshot the target");
        assert!(turret.angular_speed <= tuning.turret_max_speed);
        if settled_at.is_none() && after < tuning.turret_settle_angle {
            settled_at = Some(tick);
        }
    }

    let settled_at = settled_at.expect("turret never settled");
    assert!(settled_at < 300, "settled too slowly: {settled_at} ticks");

    // Once settled the turret spins down and stays put.
    assert_eq!(turret.angular_speed, 0.0);
    assert!(shortest_delta(target, turret.rotation).abs() < tuning.turret_settle_angle);
}

#[test]
fn test_turret_ramps_speed() {
    let tuning = SparkyTuning::default();
    let mut turret = Turret::default();
    turret.step_toward(PI * 0.75, &tuning);
    assert!((turret.angular_speed - TURRET_START_ACCEL * DT).abs() < 1e-6);

    for _ in 0..200 {
        turret.step_toward(turret.rotation + 1.0, &tuning);
    }
    assert_eq!(turret.angular_speed, TURRET_MAX_SPEED);
}

#[test]
fn test_degenerate_cursor_holds_turret() {
    let pose = Pose::new(Vec2::new(2.0, 2.0), 0.0);
    let mut sparky = Sparky::new(SparkyTuning::default());
    sparky.turret.rotation = 0.3;
    let mut arena = MockArena::new(Some(input(&[], false, pose.position)));

    for _ in 0..10 {
        sparky.update(&controlled(pose), &mut arena);
    }
    assert_eq!(sparky.turret.rotation, 0.3);
    assert_eq!(sparky.turret.angular_speed, 0.0);
}

#[test]
fn test_sparky_turret_tracks_cursor() {
    let pose = Pose::default();
    let mut sparky = Sparky::new(SparkyTuning::default());
    let mut arena = MockArena::new(Some(input(&[], false, Vec2::new(-5.0, 0.0))));

    for _ in 0..400 {
        sparky.update(&controlled(pose), &mut arena);
    }
    assert!((sparky.turret.rotation - FRAC_PI_2).abs() < TURRET_SETTLE_ANGLE);
}

// ---- Weapon state machine ----

/// Hull placed so the muzzle sits exactly on the origin when the turret
/// faces +y.
fn muzzle_at_origin() -> Pose {
    Pose::new(Vec2::new(0.0, -MUZZLE_OFFSET), 0.0)
}

#[test]
fn test_cannon_shot_at_optimal_range() {
    let tuning = SparkyTuning::default();
    let mut weapon = Weapon::default();
    let cursor = Vec2::new(0.0, CANNON_OPTIMAL_RANGE);

    let shot = weapon
        .try_fire(&muzzle_at_origin(), 0.0, cursor, 1.5, &tuning)
        .expect("cannon should fire when ready");

    assert_eq!(shot.mode, WeaponMode::Cannon);
    assert_eq!(shot.damage, CANNON_BASE_DAMAGE * 1.5);
    assert_eq!(weapon.cooldown_ticks, 2 * TICK_RATE);
    assert_eq!(weapon.heat, HEAT_PER_SHOT);
    assert!((shot.position - Vec2::ZERO).length() < 1e-6);
    assert!((shot.velocity - Vec2::new(0.0, MUZZLE_SPEED)).length() < 1e-4);
    assert!((shot.recoil - Vec2::new(0.0, MUZZLE_SPEED * CANNON_RECOIL_FACTOR)).length() < 1e-5);
}

#[test]
fn test_cannon_off_range_is_weaker_and_slower() {
    let tuning = SparkyTuning::default();
    let mut weapon = Weapon::default();
    let cursor = Vec2::new(0.0, 2.0 * CANNON_OPTIMAL_RANGE);

    let shot = weapon
        .try_fire(&muzzle_at_origin(), 0.0, cursor, 1.0, &tuning)
        .unwrap();
    let factor = falloff(2.0 * CANNON_OPTIMAL_RANGE, CANNON_OPTIMAL_RANGE);
    assert!((shot.damage - CANNON_BASE_DAMAGE * factor).abs() < 1e-5);
    assert!((shot.velocity.length() - MUZZLE_SPEED * factor).abs() < 1e-4);
}

#[test]
fn test_recoil_is_relative_to_hull() {
    let tuning = SparkyTuning::default();
    let mut weapon = Weapon::default();
    // Hull and turret both facing +pi/2: the barrel is straight ahead in
    // hull terms, so recoil pushes along local -y.
    let hull = Pose::new(Vec2::ZERO, FRAC_PI_2);
    let shot = weapon
        .try_fire(&hull, FRAC_PI_2, Vec2::new(-3.0, 0.0), 1.0, &tuning)
        .unwrap();
    assert!(shot.recoil.x.abs() < 1e-5);
    assert!(shot.recoil.y > 0.0);
    // Launch velocity is in world terms: toward -x.
    assert!(shot.velocity.x < 0.0);
}

#[test]
fn test_machine_gun_two_shots() {
    let tuning = SparkyTuning::default();
    let mut weapon = Weapon {
        mode: WeaponMode::MachineGun,
        ..Default::default()
    };
    let hull = muzzle_at_origin();
    let cursor = Vec2::new(0.0, 10.0);

    let first = weapon.try_fire(&hull, 0.0, cursor, 2.0, &tuning).unwrap();
    assert_eq!(first.damage, MACHINE_GUN_DAMAGE * 2.0);
    assert_eq!(first.recoil, Vec2::ZERO);
    assert!((first.velocity.length() - MUZZLE_SPEED * MACHINE_GUN_SPEED_FACTOR).abs() < 1e-4);
    assert_eq!(weapon.cooldown_ticks, MACHINE_GUN_COOLDOWN_TICKS);
    assert_eq!(weapon.heat, 0.0);

    // Still reloading.
    assert!(weapon.try_fire(&hull, 0.0, cursor, 2.0, &tuning).is_none());
    for _ in 0..MACHINE_GUN_COOLDOWN_TICKS {
        weapon.cool_down();
    }

    let second = weapon.try_fire(&hull, 0.0, cursor, 2.0, &tuning).unwrap();
    assert_eq!(second.damage, MACHINE_GUN_DAMAGE * 2.0);
    assert_eq!(weapon.cooldown_ticks, MACHINE_GUN_COOLDOWN_TICKS);
    assert_eq!(weapon.heat, 0.0);
}

#[test]
fn test_fire_state_precedence() {
    let mut weapon = Weapon::default();
    assert_eq!(weapon.fire_state(HEAT_MAX), FireState::Ready);
    weapon.heat = HEAT_MAX;
    assert_eq!(weapon.fire_state(HEAT_MAX), FireState::Overheated);
    weapon.cooldown_ticks = 3;
    assert_eq!(weapon.fire_state(HEAT_MAX), FireState::Reloading);
}

#[test]
fn test_heat_never_exceeds_max() {
    let tuning = SparkyTuning::default();
    let mut weapon = Weapon {
        heat: HEAT_MAX - 1.0,
        ..Default::default()
    };
    weapon
        .try_fire(&Pose::default(), 0.0, Vec2::Y * 5.0, 1.0, &tuning)
        .unwrap();
    assert_eq!(weapon.heat, HEAT_MAX);

    weapon.dissipate(1000.0);
    assert_eq!(weapon.heat, 0.0);
    weapon.cool_down();
    weapon.cooldown_ticks = 0;
    weapon.cool_down();
    assert_eq!(weapon.cooldown_ticks, 0);
}

#[test]
fn test_overheated_never_fires() {
    let tuning = SparkyTuning {
        cannon_cooldown_ticks: 1,
        heat_dissipation_rate: 0.0,
        ..Default::default()
    };
    let mut sparky = Sparky::new(tuning);
    let mut arena = MockArena::new(Some(held_input(&[], true, Vec2::new(0.0, 6.0))));

    for _ in 0..100 {
        let state = sparky.fire_state();
        let shots_before = arena.bullets.len();
        sparky.update(&controlled(Pose::default()), &mut arena);
        if state != FireState::Ready {
            assert_eq!(arena.bullets.len(), shots_before, "fired while {state:?}");
        }
        assert!(sparky.weapon.heat >= 0.0 && sparky.weapon.heat <= tuning.heat_max);
    }

    assert_eq!(arena.bullets.len(), (HEAT_MAX / HEAT_PER_SHOT) as usize);
    assert_eq!(sparky.fire_state(), FireState::Overheated);
}

#[test]
fn test_default_tuning_sustained_fire_stays_below_lockout() {
    let mut sparky = Sparky::new(SparkyTuning::default());
    let mut arena = MockArena::new(Some(held_input(&[], true, Vec2::new(0.0, 6.0))));
    let mut max_heat: f32 = 0.0;

    for _ in 0..60 * TICK_RATE {
        sparky.update(&controlled(Pose::default()), &mut arena);
        max_heat = max_heat.max(sparky.weapon.heat);
        assert_ne!(sparky.fire_state(), FireState::Overheated);
    }

    // One shot per cooldown for the whole minute, heat pinned just under the cap.
    assert_eq!(arena.bullets.len(), 30);
    assert!(max_heat < HEAT_MAX);
    assert!(max_heat > HEAT_MAX - HEAT_PER_SHOT);
}

#[test]
fn test_cooldown_spaces_cannon_shots() {
    let mut sparky = Sparky::new(SparkyTuning::default());
    let mut arena = MockArena::new(Some(held_input(&[], true, Vec2::new(0.0, 6.0))));
    let mut shot_ticks = Vec::new();

    for tick in 0..600u32 {
        let state = sparky.fire_state();
        let shots_before = arena.bullets.len();
        sparky.update(&controlled(Pose::default()), &mut arena);
        if arena.bullets.len() > shots_before {
            assert_eq!(state, FireState::Ready);
            shot_ticks.push(tick);
        }
        assert!(sparky.weapon.heat >= 0.0 && sparky.weapon.heat <= HEAT_MAX);
    }

    assert_eq!(shot_ticks, vec![0, 120, 240, 360, 480]);
}

#[test]
fn test_sparky_cannon_fire_applies_recoil() {
    let mut sparky = Sparky::new(SparkyTuning::default());
    let mut arena = MockArena::new(Some(held_input(&[], true, Vec2::new(0.0, 6.0))));
    arena.damage_scale = 2.0;

    sparky.update(&controlled(muzzle_at_origin()), &mut arena);

    assert_eq!(arena.bullets.len(), 1);
    let bullet = arena.bullets[0];
    assert_eq!(bullet.owner, 1);
    assert!(bullet.damage <= CANNON_BASE_DAMAGE * 2.0);
    // Recoil, then friction, both within the firing tick.
    let expected = -MUZZLE_SPEED * CANNON_RECOIL_FACTOR * SPARKY_FRICTION;
    assert!((sparky.velocity.y - expected).abs() < 1e-5);
    // Cooldown was set and already counted down once this tick.
    assert_eq!(sparky.weapon.cooldown_ticks, CANNON_COOLDOWN_TICKS - 1);
    assert!(arena
        .events
        .iter()
        .any(|e| matches!(e, ArenaEvent::ShotFired { mode: WeaponMode::Cannon, .. })));
}

#[test]
fn test_toggle_on_press_edge_only() {
    let mut sparky = Sparky::new(SparkyTuning::default());
    sparky.weapon.cooldown_ticks = 50;
    sparky.weapon.heat = HEAT_MAX;
    let frame = controlled(Pose::default());

    let mut arena = MockArena::new(Some(input(&[Key::ToggleWeapon], false, Vec2::Y)));
    sparky.update(&frame, &mut arena);
    assert_eq!(sparky.weapon.mode, WeaponMode::MachineGun);

    // Key still held: no new edge, no second flip.
    arena.input = Some(held_input(&[Key::ToggleWeapon], false, Vec2::Y));
    for _ in 0..5 {
        sparky.update(&frame, &mut arena);
    }
    assert_eq!(sparky.weapon.mode, WeaponMode::MachineGun);

    let toggles = arena
        .events
        .iter()
        .filter(|e| matches!(e, ArenaEvent::WeaponToggled { .. }))
        .count();
    assert_eq!(toggles, 1);
}

// ---- Kinematics ----

#[test]
fn test_forward_input_springs_velocity_and_proposes_move() {
    let mut sparky = Sparky::new(SparkyTuning::default());
    let mut arena = MockArena::new(Some(held_input(&[Key::Forward], false, Vec2::Y)));
    let pose = Pose::default();

    sparky.update(&controlled(pose), &mut arena);

    let sprung = SPARKY_MOVE_SPEED * SPARKY_ACCEL_GAIN * DT;
    assert!((sparky.velocity.y - sprung * SPARKY_FRICTION).abs() < 1e-6);
    assert_eq!(arena.moves.len(), 1);
    let (unit_id, position) = arena.moves[0];
    assert_eq!(unit_id, 1);
    // The move uses the pre-friction velocity.
    assert!((position - Vec2::new(0.0, sprung * DT)).length() < 1e-6);
    assert_eq!(arena.rotations, vec![(1, 0.0)]);
}

#[test]
fn test_move_follows_facing() {
    let mut sparky = Sparky::new(SparkyTuning::default());
    let mut arena = MockArena::new(Some(held_input(&[Key::Forward], false, Vec2::Y)));
    let pose = Pose::new(Vec2::ZERO, FRAC_PI_2);

    sparky.update(&controlled(pose), &mut arena);
    let (_, position) = arena.moves[0];
    assert!(position.x < 0.0);
    assert!(position.y.abs() < 1e-6);
}

#[test]
fn test_velocity_approaches_desired_speed() {
    let mut sparky = Sparky::new(SparkyTuning::default());
    let mut arena = MockArena::new(Some(held_input(&[Key::Backward], false, Vec2::Y)));
    arena.speed_scale = 0.5;

    for _ in 0..600 {
        sparky.update(&controlled(Pose::default()), &mut arena);
    }
    // Friction keeps the steady state a little under the target.
    let target = -SPARKY_MOVE_SPEED * 0.5;
    assert!(sparky.velocity.y < 0.0);
    assert!((sparky.velocity.y - target).abs() < 0.1);
}

#[test]
fn test_blocked_move_keeps_velocity() {
    let mut sparky = Sparky::new(SparkyTuning::default());
    let mut arena = MockArena::new(Some(held_input(&[Key::Forward], false, Vec2::Y)));
    arena.obstacles.push(Rect::centered(100.0));

    for _ in 0..30 {
        sparky.update(&controlled(Pose::default()), &mut arena);
    }
    assert!(arena.moves.is_empty());
    assert!(sparky.velocity.y > 0.5, "velocity should still build up");
    // Rotation proposals are unaffected by obstacles.
    assert_eq!(arena.rotations.len(), 30);
}

#[test]
fn test_turn_input_proposes_rotation() {
    let mut sparky = Sparky::new(SparkyTuning::default());
    let mut arena = MockArena::new(Some(held_input(&[Key::TurnLeft], false, Vec2::Y)));
    arena.speed_scale = 2.0;

    sparky.update(&controlled(Pose::new(Vec2::ZERO, 1.0)), &mut arena);
    let (_, rotation) = arena.rotations[0];
    let step = SPARKY_TURN_STEP * SPARKY_TURN_SPEED * 2.0;
    assert!((rotation - (1.0 + step)).abs() < 1e-6);

    arena.input = Some(held_input(&[Key::TurnLeft, Key::TurnRight], false, Vec2::Y));
    sparky.update(&controlled(Pose::new(Vec2::ZERO, 1.0)), &mut arena);
    assert_eq!(arena.rotations[1].1, 1.0);
}

#[test]
fn test_unbound_unit_only_decays() {
    let mut sparky = Sparky::new(SparkyTuning::default());
    sparky.velocity = Vec2::new(0.0, 1.0);
    sparky.weapon.heat = 10.0;
    sparky.weapon.cooldown_ticks = 4;
    let mut arena = MockArena::new(Some(input(&[Key::Forward], true, Vec2::Y)));
    let frame = UnitFrame {
        unit_id: 3,
        player_id: None,
        pose: Pose::default(),
    };

    sparky.update(&frame, &mut arena);

    assert!(arena.moves.is_empty());
    assert!(arena.rotations.is_empty());
    assert!(arena.bullets.is_empty());
    assert!((sparky.velocity.y - SPARKY_FRICTION).abs() < 1e-6);
    assert!((sparky.weapon.heat - (10.0 - HEAT_DISSIPATION_RATE * DT)).abs() < 1e-5);
    assert_eq!(sparky.weapon.cooldown_ticks, 3);
}

#[test]
fn test_missing_input_is_idle() {
    let mut sparky = Sparky::new(SparkyTuning::default());
    let mut arena = MockArena::new(None);
    sparky.update(&controlled(Pose::default()), &mut arena);
    assert!(arena.moves.is_empty());
    assert!(arena.rotations.is_empty());
    assert!(arena.events.is_empty());
}

#[test]
fn test_sparky_identity() {
    let sparky = Sparky::new(SparkyTuning::default());
    assert_eq!(sparky.name(), "Sparky");
    assert_eq!(sparky.author(), "Mini Pekka");
    let status = sparky.status();
    assert_eq!(status.weapon_mode, WeaponMode::Cannon);
    assert_eq!(status.heat, 0.0);
    assert_eq!(status.cooldown_ticks, 0);
    assert_eq!(status.fire_state, FireState::Ready);
}
