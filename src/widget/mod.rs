//! Widget system: trait and lifecycle.

pub mod traits;
pub mod lifecycle;

pub use traits::Widget;
pub use lifecycle::{LifecycleEvent, LifecycleTracker, WidgetId};
