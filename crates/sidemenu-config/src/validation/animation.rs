//! Animation timing, spring and shadow validation.

use crate::schema::{SideMenuConfig, MAX_ANIMATION_SECS};

use super::helpers::validate_range_f64;

pub(crate) fn validate_animation(errors: &mut Vec<String>, config: &SideMenuConfig) {
    let animation = &config.animation;
    validate_range_f64(
        errors,
        "animation.open_duration",
        animation.open_duration,
        0.0,
        MAX_ANIMATION_SECS,
    );
    validate_range_f64(
        errors,
        "animation.hide_duration",
        animation.hide_duration,
        0.0,
        MAX_ANIMATION_SECS,
    );
    validate_range_f64(
        errors,
        "animation.damping_ratio",
        animation.damping_ratio,
        0.0,
        1.0,
    );
    validate_range_f64(
        errors,
        "animation.initial_spring_velocity",
        animation.initial_spring_velocity,
        0.0,
        10.0,
    );
    validate_range_f64(
        errors,
        "animation.shadow_alpha",
        animation.shadow_alpha,
        0.0,
        1.0,
    );
}
