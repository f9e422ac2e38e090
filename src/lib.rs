//! Fluent string assembly.
//!
//! A [`Builder`] accumulates text fragments through chained calls and joins them, separator-free,
//! when [`build`](Builder::build) is called. Convenience operations cover quoting, bracket
//! wrapping, and common single characters; the absent value ([`None`]) is accepted everywhere an
//! appendable value is and contributes nothing.
//!
//! ```rust
//! use sbb::sbb;
//!
//! let line = sbb("GET").w().sq("/health").w().parentheses(200).build();
//! assert_eq!(line, "GET '/health' (200)");
//! ```
//!
//! Builders are plain owned values: share one across threads and you get what you asked for, but
//! one builder per unit of work is cheap and always correct.

#[macro_use]
extern crate static_assertions;

mod builder;
mod fragment;

pub use builder::{sbb, Builder};
pub use fragment::ToFragment;
