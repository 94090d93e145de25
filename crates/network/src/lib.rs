#![forbid(unsafe_code)]
#![deny(missing_docs, unused_must_use)]

//! A small sigmoid feed-forward network trained by online backpropagation.
//!
//! Layout (important files):
//! - `dense.rs` — dense layer (`Dense::random` + `forward`)
//! - `net.rs` — `Network`: layer stack, read-only `predict`
//! - `train.rs` — `Backprop` iteration driver and `train_until` convergence loop

mod dense;
mod net;
mod train;

pub use dense::Dense;
pub use net::{sigmoid, Network};
pub use train::{train_until, Backprop, TrainConfig, TrainError, TrainSummary};
