//! Content domain: tests for the roster, settings parsing and validation.

use std::collections::HashSet;
use std::path::Path;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{
    CHARACTERS, MAX_DURATION_SECS, MAX_PARTICLES_PER_SIDE, SettingsLoadError, UnboxSettings,
    character_by_id, draw_character, load_settings_file, parse_settings, resolve_settings,
    roster_ids, validate_settings,
};

// -----------------------------------------------------------------------------
// Roster tests
// -----------------------------------------------------------------------------

#[test]
fn test_roster_has_the_four_characters() {
    let ids: Vec<&str> = roster_ids().collect();
    assert_eq!(ids, vec!["molly", "dimoo", "labubu", "skullpanda"]);
}

#[test]
fn test_roster_ids_are_unique() {
    let unique: HashSet<&str> = roster_ids().collect();
    assert_eq!(unique.len(), CHARACTERS.len());
}

#[test]
fn test_character_by_id() {
    let labubu = character_by_id("labubu").expect("labubu should exist");
    assert_eq!(labubu.name, "Labubu");
    assert_eq!(labubu.description, "Mischievous but cute!");
    assert!(character_by_id("hirono").is_none());
}

#[test]
fn test_draw_character_always_from_roster() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let drawn = draw_character(&mut rng);
        assert!(character_by_id(drawn.id).is_some());
    }
}

#[test]
fn test_draw_character_covers_whole_roster() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let seen: HashSet<&str> = (0..400).map(|_| draw_character(&mut rng).id).collect();
    assert_eq!(seen.len(), CHARACTERS.len());
}

#[test]
fn test_draw_character_is_roughly_uniform() {
    let mut rng = ChaCha8Rng::seed_from_u64(1234);
    let draws = 8000;
    let mut counts = [0usize; 4];
    for _ in 0..draws {
        let drawn = draw_character(&mut rng);
        let index = CHARACTERS
            .iter()
            .position(|c| c.id == drawn.id)
            .expect("drawn character is in roster");
        counts[index] += 1;
    }

    // Expected 2000 each; allow a generous band.
    for count in counts {
        assert!((1700..=2300).contains(&count), "count {} out of band", count);
    }
}

#[test]
fn test_same_seed_gives_same_draws() {
    let mut a = ChaCha8Rng::seed_from_u64(99);
    let mut b = ChaCha8Rng::seed_from_u64(99);
    for _ in 0..20 {
        assert_eq!(draw_character(&mut a).id, draw_character(&mut b).id);
    }
}

// -----------------------------------------------------------------------------
// Settings parsing tests
// -----------------------------------------------------------------------------

#[test]
fn test_parse_full_settings() {
    let text = r#"(
        background_volume: 0.5,
        effects_volume: 0.8,
        shake_duration_secs: 1.5,
        confetti_duration_secs: 2.0,
        confetti_particles_per_side: 3,
        seed: 17,
    )"#;

    let settings = parse_settings(text, "inline").expect("settings should parse");
    assert_eq!(settings.background_volume, 0.5);
    assert_eq!(settings.effects_volume, 0.8);
    assert_eq!(settings.shake_duration_secs, 1.5);
    assert_eq!(settings.confetti_duration_secs, 2.0);
    assert_eq!(settings.confetti_particles_per_side, 3);
    assert_eq!(settings.seed, Some(17));
}

#[test]
fn test_parse_partial_settings_uses_defaults() {
    let settings = parse_settings("(shake_duration_secs: 0.25)", "inline")
        .expect("partial settings should parse");
    let defaults = UnboxSettings::default();

    assert_eq!(settings.shake_duration_secs, 0.25);
    assert_eq!(settings.background_volume, defaults.background_volume);
    assert_eq!(settings.confetti_duration_secs, defaults.confetti_duration_secs);
    assert!(settings.seed.is_none());
}

#[test]
fn test_parse_invalid_settings_reports_file() {
    let err = parse_settings("(background_volume: \"loud\")", "settings.ron")
        .expect_err("string volume should fail");
    assert_eq!(err.file, "settings.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().contains("settings.ron"));
}

#[test]
fn test_missing_settings_file_is_not_an_error() {
    let loaded = load_settings_file(Path::new("does/not/exist/settings.ron"))
        .expect("missing file is not an error");
    assert!(loaded.is_none());
}

#[test]
fn test_default_durations() {
    let settings = UnboxSettings::default();
    assert_eq!(settings.shake_duration().as_millis(), 1000);
    assert_eq!(settings.confetti_duration().as_millis(), 3000);
    assert_eq!(settings.background_volume, 0.3);
}

// -----------------------------------------------------------------------------
// Validation tests
// -----------------------------------------------------------------------------

#[test]
fn test_valid_settings_have_no_issues() {
    let (settings, issues) = validate_settings(UnboxSettings::default());
    assert!(issues.is_empty());
    assert_eq!(settings, UnboxSettings::default());
}

#[test]
fn test_invalid_fields_are_reset_to_defaults() {
    let settings = UnboxSettings {
        background_volume: 1.5,
        effects_volume: f32::NAN,
        shake_duration_secs: 0.0,
        confetti_duration_secs: -1.0,
        confetti_particles_per_side: 0,
        seed: Some(3),
    };

    let (fixed, issues) = validate_settings(settings);
    let defaults = UnboxSettings::default();

    assert_eq!(issues.len(), 5);
    assert_eq!(fixed.background_volume, defaults.background_volume);
    assert_eq!(fixed.effects_volume, defaults.effects_volume);
    assert_eq!(fixed.shake_duration_secs, defaults.shake_duration_secs);
    assert_eq!(fixed.confetti_duration_secs, defaults.confetti_duration_secs);
    assert_eq!(
        fixed.confetti_particles_per_side,
        defaults.confetti_particles_per_side
    );
    // Valid fields are kept
    assert_eq!(fixed.seed, Some(3));
}

#[test]
fn test_validation_issue_names_the_field() {
    let settings = UnboxSettings {
        shake_duration_secs: -2.0,
        ..UnboxSettings::default()
    };
    let (_, issues) = validate_settings(settings);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "shake_duration_secs");
    assert!(issues[0].to_string().contains("shake_duration_secs"));
}

#[test]
fn test_oversized_values_are_reset_to_defaults() {
    let parsed = parse_settings(
        "(shake_duration_secs: 1e30, confetti_duration_secs: 1e30, confetti_particles_per_side: 4294967295)",
        "settings.ron",
    )
    .expect("oversized values still parse");
    assert_eq!(parsed.confetti_particles_per_side, u32::MAX);

    let (fixed, issues) = validate_settings(parsed);
    let defaults = UnboxSettings::default();

    assert_eq!(issues.len(), 3);
    assert_eq!(fixed.shake_duration_secs, defaults.shake_duration_secs);
    assert_eq!(fixed.confetti_duration_secs, defaults.confetti_duration_secs);
    assert_eq!(
        fixed.confetti_particles_per_side,
        defaults.confetti_particles_per_side
    );
    assert_eq!(fixed.shake_duration().as_millis(), 1000);
}

#[test]
fn test_upper_bounds_are_inclusive() {
    let settings = UnboxSettings {
        shake_duration_secs: MAX_DURATION_SECS,
        confetti_duration_secs: MAX_DURATION_SECS,
        confetti_particles_per_side: MAX_PARTICLES_PER_SIDE,
        ..UnboxSettings::default()
    };
    let (fixed, issues) = validate_settings(settings.clone());
    assert!(issues.is_empty());
    assert_eq!(fixed, settings);

    let (_, issues) = validate_settings(UnboxSettings {
        confetti_particles_per_side: MAX_PARTICLES_PER_SIDE + 1,
        ..UnboxSettings::default()
    });
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].field, "confetti_particles_per_side");
}

#[test]
fn test_unrepresentable_durations_fall_back_without_panicking() {
    let settings = UnboxSettings {
        shake_duration_secs: 1e30,
        confetti_duration_secs: -5.0,
        ..UnboxSettings::default()
    };
    assert_eq!(settings.shake_duration().as_millis(), 1000);
    assert_eq!(settings.confetti_duration().as_millis(), 3000);
}

#[test]
fn test_resolve_settings_falls_back_on_error() {
    let loaded = Err(SettingsLoadError {
        file: "settings.ron".to_string(),
        message: "Parse error: nope".to_string(),
    });
    assert_eq!(resolve_settings(loaded), UnboxSettings::default());
}

#[test]
fn test_resolve_settings_corrects_invalid_values() {
    let loaded = Ok(Some(UnboxSettings {
        effects_volume: 3.0,
        confetti_particles_per_side: 5,
        ..UnboxSettings::default()
    }));
    let settings = resolve_settings(loaded);
    assert_eq!(settings.effects_volume, 1.0);
    assert_eq!(settings.confetti_particles_per_side, 5);
}
