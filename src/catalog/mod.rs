//! Institution catalog: typed model, strict loader, and substring filter.
//!
//! `load` turns catalog text into a `Catalog` once per process; callers then
//! use `Catalog::search` (or `filter` on an already-resolved category) for
//! every query change. Nothing here performs I/O.

pub mod filter;
pub mod identity;
pub mod loader;
pub mod model;

pub use filter::filter;
pub use identity::CategoryKey;
pub use loader::load;
pub use model::{Catalog, Category, Institution};
