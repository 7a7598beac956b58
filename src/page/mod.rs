//! Page assembly: routing and the page wrapper.

mod route;
mod wrapper;

pub use route::{PageRoute, permalink};
pub use wrapper::PageWrapper;
