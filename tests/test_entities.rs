use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use skystrike::compute::{roll_powerup_drop, spawn_enemy};
use skystrike::entities::{EnemyKind, PowerUpKind};

/// Pins every roll to the bottom of its range.
fn always_rng() -> StepRng {
    StepRng::new(0, 0)
}

/// Pins every roll to the top of its range.
fn never_rng() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

/// Pins the kind roll to roughly 0.3: past the kamikaze band, inside the
/// ace band.
fn mid_rng() -> StepRng {
    StepRng::new(0x4CCC_CCCC, 0)
}

// ── enemy archetypes ──────────────────────────────────────────────────────────

#[test]
fn standard_archetype_stats() {
    let e = spawn_enemy(&mut never_rng(), 2.0);
    assert_eq!(e.kind, EnemyKind::Standard);
    assert_eq!(e.hp, 60.0); // 30 * difficulty
    assert_eq!(e.max_hp, e.hp);
    assert_eq!(e.speed, 6.0); // 3 * difficulty
}

#[test]
fn kamikaze_archetype_stats() {
    let e = spawn_enemy(&mut always_rng(), 2.0);
    assert_eq!(e.kind, EnemyKind::Kamikaze);
    assert_eq!(e.hp, 40.0); // 20 * difficulty
    assert_eq!(e.speed, 8.0); // 4 * difficulty
}

#[test]
fn kamikaze_needs_difficulty_above_1_2() {
    // Same low roll, but the difficulty gate fails: a standard spawns.
    let e = spawn_enemy(&mut always_rng(), 1.0);
    assert_eq!(e.kind, EnemyKind::Standard);
    assert_eq!(e.hp, 30.0);
    assert_eq!(e.speed, 3.0);
}

#[test]
fn ace_archetype_stats() {
    let e = spawn_enemy(&mut mid_rng(), 2.0);
    assert_eq!(e.kind, EnemyKind::Ace);
    assert_eq!(e.hp, 120.0); // 60 * difficulty
    assert_eq!(e.speed, 4.0); // 2 * difficulty
}

#[test]
fn ace_needs_difficulty_above_1_5() {
    let e = spawn_enemy(&mut mid_rng(), 1.4);
    assert_eq!(e.kind, EnemyKind::Standard);
    assert!((e.hp - 42.0).abs() < 1e-3);
    assert!((e.speed - 4.2).abs() < 1e-3);
}

#[test]
fn enemies_spawn_above_the_canvas() {
    let e = spawn_enemy(&mut never_rng(), 1.0);
    assert_eq!(e.rect.y, -60.0);
    assert!((50.0..=750.0).contains(&e.rect.x));
    assert_eq!(e.start_x, e.rect.x);
    assert_eq!(e.rect.w, 50.0);
    assert_eq!(e.rect.h, 50.0);
}

// ── loot rolls ────────────────────────────────────────────────────────────────

#[test]
fn drop_roll_extremes() {
    // Bottom of the range passes the 25% gate and lands on the first
    // weight-table entry; the top of the range never drops.
    assert_eq!(roll_powerup_drop(&mut always_rng()), Some(PowerUpKind::Hp));
    assert_eq!(roll_powerup_drop(&mut never_rng()), None);
}

#[test]
fn drop_table_frequencies() {
    // 25% drop chance, then weights Hp 30 / Triple 25 / Shield 15 /
    // Speed 20 / Bomb 10. Wide bands: every bound is at least 8 sigma
    // from the expectation over 100k rolls.
    let mut rng = StdRng::seed_from_u64(99);
    let mut drops = 0u32;
    let mut counts = [0u32; 5];
    for _ in 0..100_000 {
        if let Some(kind) = roll_powerup_drop(&mut rng) {
            drops += 1;
            let slot = match kind {
                PowerUpKind::Hp => 0,
                PowerUpKind::Triple => 1,
                PowerUpKind::Shield => 2,
                PowerUpKind::Speed => 3,
                PowerUpKind::Bomb => 4,
            };
            counts[slot] += 1;
        }
    }
    assert!((24_000..=26_000).contains(&drops), "drops = {drops}");
    assert_eq!(counts.iter().sum::<u32>(), drops);
    assert!((6_700..=8_300).contains(&counts[0]), "hp = {}", counts[0]);
    assert!((5_500..=7_000).contains(&counts[1]), "triple = {}", counts[1]);
    assert!((3_100..=4_400).contains(&counts[2]), "shield = {}", counts[2]);
    assert!((4_300..=5_700).contains(&counts[3]), "speed = {}", counts[3]);
    assert!((1_900..=3_100).contains(&counts[4]), "bomb = {}", counts[4]);
}
