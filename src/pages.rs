//! Page generation modules for different view types
//!
//! The export site has an index page and one page per chapter; `render
//! --page` uses the standalone preview page.

pub mod chapter;
pub mod index;
pub mod preview;
