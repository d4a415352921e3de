pub mod metadata;
pub mod navigation;
pub mod route;
pub mod transition;

pub use metadata::{DocumentHead, PageMetadata};
pub use navigation::NavigationState;
pub use route::{Route, RoutePath, ViewId};
pub use transition::{ActiveView, Motion, TransitionState, ViewPhase};
