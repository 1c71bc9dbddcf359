pub mod errors;
pub mod events;
pub mod types;

pub use errors::{CacheError, ConfigError, ControllerError, SideMenuError};
pub use events::{EventBus, LifecycleEvent};
pub use types::{ContentId, LayoutDirection, Rect, Region, Vector};

pub type Result<T> = std::result::Result<T, SideMenuError>;
