// Company Quiz API - Core
//
// Turns a company's public website into multiple-choice quiz questions:
// content extraction, prompt construction, model calls and response
// validation, plus package pricing.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
