//! Position-graph expansion: move generation over a closed 13-value board
//! codec, plus a disk-backed breadth-first frontier walk that packs every
//! reachable position's move table and enqueues its unseen successors.

pub mod codec;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod queue;
pub mod rules;
pub mod seed;
pub mod store;

pub use codec::{Blob, Board, Cell, Coord, Identifier, Kind, Move, Side};
pub use config::Config;
pub use driver::run_to_completion;
pub use error::PositionGraphError;
pub use queue::Queues;
pub use store::Store;
