//! `dataproc` is a keyed, thread-pool-backed data processing engine.
//!
//! A [`engine::Processor`] holds named sequences of items in a concurrent
//! [`storage::DataStore`], transforms them elementwise on a bounded
//! [`pool::WorkerPool`], and persists them as line-oriented text files.
//!
//! ```rust
//! use dataproc::prelude::*;
//!
//! # fn main() -> Result<(), EngineError> {
//! let processor = Processor::new(4)?;
//! processor.load_data("k", vec![1, 2, 3]);
//! processor.map_data("k", |x| x * 10)?;
//! assert_eq!(processor.get_data()["k"], vec![10, 20, 30]);
//!
//! // A failing item leaves the stored sequence untouched
//! let result = processor.transform_data("k", |x| {
//!     if *x == 20 { Err("rejected") } else { Ok(*x) }
//! });
//! assert!(matches!(result, Err(EngineError::Processing(ref f)) if f.position == 1));
//! assert_eq!(processor.get_data()["k"], vec![10, 20, 30]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`domain`]: `DataSet` views, key states, processing failures
//! - [`storage`]: the keyed store trait and its DashMap-backed implementation
//! - [`pool`]: worker pools (rayon-backed and inline)
//! - [`engine`]: the `Processor` and its configuration
//! - [`io`]: line-oriented record writer and reader
//! - [`app`]: command-line front end

pub mod app;
pub mod domain;
pub mod engine;
pub mod io;
pub mod pool;
pub mod prelude;
pub mod storage;
