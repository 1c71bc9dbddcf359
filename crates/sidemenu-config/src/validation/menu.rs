//! Menu geometry and cache key validation.

use crate::schema::{SideMenuConfig, MAX_MENU_WIDTH, MIN_MENU_WIDTH};

use super::helpers::{validate_non_empty, validate_range_f64};

pub(crate) fn validate_menu(errors: &mut Vec<String>, config: &SideMenuConfig) {
    validate_range_f64(
        errors,
        "menu_width",
        config.menu_width,
        MIN_MENU_WIDTH,
        MAX_MENU_WIDTH,
    );
    validate_non_empty(errors, "default_cache_key", &config.default_cache_key);
}
