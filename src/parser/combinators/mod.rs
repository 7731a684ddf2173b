//! Concrete parser types returned by the [`ParserExt`](crate::parser::ParserExt)
//! combinators.
//!
//! Each one stores the parser it wraps plus whatever functions the combinator
//! needs; none of them allocate. Most code never names these types directly.

mod context;
mod contramap;
mod ensure;
mod filter;
mod flat_map;
mod map;
mod map_err;
mod nullable;
mod repeated;

pub use context::{AddContext, Context};
pub use contramap::Contramap;
pub use ensure::Ensure;
pub use filter::Filter;
pub use flat_map::FlatMap;
pub use map::Map;
pub use map_err::MapErr;
pub use nullable::{AllowNulls, NotNull};
pub use repeated::Repeated;
