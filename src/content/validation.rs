//! Validation for settings values.

use super::data::UnboxSettings;

/// A settings field that held an unusable value and was reset.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub value: String,
    pub reason: &'static str,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "field '{}' has value {} ({}), default used",
            self.field, self.value, self.reason
        )
    }
}

/// Helper macro for resetting a field that fails a check
macro_rules! check_field {
    ($issues:expr, $settings:expr, $defaults:expr, $field:ident, $valid:expr, $reason:expr) => {
        let value = $settings.$field;
        if !$valid(value) {
            $issues.push(ValidationIssue {
                field: stringify!($field),
                value: format!("{:?}", value),
                reason: $reason,
            });
            $settings.$field = $defaults.$field;
        }
    };
}

fn is_volume(value: f32) -> bool {
    (0.0..=1.0).contains(&value)
}

/// Longest shake or confetti window accepted from settings
pub const MAX_DURATION_SECS: f32 = 60.0;
/// Most confetti particles accepted per edge per frame
pub const MAX_PARTICLES_PER_SIDE: u32 = 50;

fn is_duration(value: f32) -> bool {
    value.is_finite() && value > 0.0 && value <= MAX_DURATION_SECS
}

fn is_particle_count(value: u32) -> bool {
    (1..=MAX_PARTICLES_PER_SIDE).contains(&value)
}

/// Validate settings, replacing each invalid field with its default.
/// Returns the corrected settings and the issues found, empty if all were valid.
pub fn validate_settings(mut settings: UnboxSettings) -> (UnboxSettings, Vec<ValidationIssue>) {
    let defaults = UnboxSettings::default();
    let mut issues = Vec::new();

    check_field!(
        issues,
        settings,
        defaults,
        background_volume,
        is_volume,
        "volume must be within 0.0..=1.0"
    );
    check_field!(
        issues,
        settings,
        defaults,
        effects_volume,
        is_volume,
        "volume must be within 0.0..=1.0"
    );
    check_field!(
        issues,
        settings,
        defaults,
        shake_duration_secs,
        is_duration,
        "duration must be above 0 and at most 60 seconds"
    );
    check_field!(
        issues,
        settings,
        defaults,
        confetti_duration_secs,
        is_duration,
        "duration must be above 0 and at most 60 seconds"
    );
    check_field!(
        issues,
        settings,
        defaults,
        confetti_particles_per_side,
        is_particle_count,
        "particles per side must be within 1..=50"
    );

    (settings, issues)
}
