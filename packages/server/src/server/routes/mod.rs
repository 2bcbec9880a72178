// HTTP routes
pub mod health;
pub mod pricing;
pub mod questions;
pub mod scrape;

pub use health::*;
pub use pricing::*;
pub use questions::*;
pub use scrape::*;
