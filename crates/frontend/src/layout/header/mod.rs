pub mod header;

pub use header::{is_nav_active, Header};
