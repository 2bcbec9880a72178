//! Quiz domain actions
//!
//! Actions are async functions called directly from route handlers.

mod generate_questions;

pub use generate_questions::{generate_for_company, generate_questions};
