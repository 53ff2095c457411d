//! Built-in regional rule sets.
//!
//! - `NorthAmerica`: sentiment, punctuation, emoji and length thresholds
//! - `Europe`: binned word count, length, emoji and hashtag signals

mod europe;
mod north_america;

pub use europe::Europe;
pub use north_america::NorthAmerica;
