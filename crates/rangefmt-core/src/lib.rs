//! Runtime formatting engine for container adaptors and other sequences.
//!
//! The crate reimplements the formatting contract of the C++
//! `std::format` family for adapted containers: a replacement-field
//! walker ([`vformat`]), a category-driven format-spec tokenizer, a
//! nested-spec delegator that splits a sequence field's spec at the
//! second `:`, per-category renderers, and a swappable numeric locale.
//!
//! ```
//! use rangefmt_core::{Queue, values, vformat};
//!
//! let q: Queue<char> = "Hello".chars().collect();
//! assert_eq!(vformat("{}", &values![q]).unwrap(), "['H', 'e', 'l', 'l', 'o']");
//! assert_eq!(vformat("{::}", &values![q]).unwrap(), "[H, e, l, l, o]");
//! assert_eq!(vformat("{:s}", &values![q]).unwrap(), "Hello");
//! ```

pub mod adapt;
pub mod engine;
pub mod error;
pub mod handle;
pub mod locale;
mod range;
mod render;
pub mod spec;
pub mod value;

pub use adapt::{PriorityQueue, Queue, SeqRef, Sequence, Stack};
pub use engine::{format, vformat};
pub use error::FormatError;
pub use handle::{HandleFormat, HandleState};
pub use locale::NumericLocale;
pub use spec::{Align, OptValue, Sign, Spec, SpecKind, parse_spec};
pub use value::{Ptr, ToValue, Value};
