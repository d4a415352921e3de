//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_NAVIGATION_ID: &str = "navigation_id";

// Routing fields
pub const FIELD_PATH: &str = "path";
pub const FIELD_VIEW: &str = "view";
pub const FIELD_FROM_PATH: &str = "from_path";
pub const FIELD_TO_PATH: &str = "to_path";

// Rendering fields
pub const FIELD_DOC_BYTES: &str = "doc_bytes";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_NAVIGATION_STARTED: &str = "navigation_started";
pub const EVENT_NAVIGATION_RETARGETED: &str = "navigation_retargeted";
pub const EVENT_NAVIGATION_COMPLETED: &str = "navigation_completed";
pub const EVENT_ROUTE_FALLBACK: &str = "route_fallback";
pub const EVENT_PAGE_RENDERED: &str = "page_rendered";
