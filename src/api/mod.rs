//! Provider Access
//!
//! Wire-level types and the blocking HTTP client for TheCocktailDB
//! JSON API v1. Front ends run these calls on worker threads and ship
//! the decoded results back over a channel.

pub mod client;
pub mod model;

pub use client::{DrinkClient, FetchConfig};
pub use model::{ApiDrink, CategoryEntry};
