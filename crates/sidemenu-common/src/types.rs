use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// A 2D velocity or translation, in points (per second for velocities).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Opaque handle to a displayable content unit (a screen or page).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(pub u32);

impl fmt::Display for ContentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "content-{}", self.0)
    }
}

/// One of the two regions managed by the side menu container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    Menu,
    Content,
}

/// Ambient user-interface layout direction of the hosting view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LayoutDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_serialization() {
        let r = Rect {
            x: 0.0,
            y: 0.0,
            width: 1920.0,
            height: 1080.0,
        };
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn content_id_display() {
        let id = ContentId(42);
        assert_eq!(id.to_string(), "content-42");
    }

    #[test]
    fn content_id_hash_and_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(ContentId(1));
        set.insert(ContentId(2));
        set.insert(ContentId(1));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn layout_direction_defaults_to_ltr() {
        assert_eq!(LayoutDirection::default(), LayoutDirection::LeftToRight);
    }

    #[test]
    fn region_variants() {
        for region in [Region::Menu, Region::Content] {
            let json = serde_json::to_string(&region).unwrap();
            let deserialized: Region = serde_json::from_str(&json).unwrap();
            assert_eq!(region, deserialized);
        }
    }
}
