//! Randomized operations over a LuckyGroup roster.
//!
//! Provides a single-winner lottery with a timed reveal and optional
//! exclusion of past winners, a grouping engine that partitions a shuffled
//! roster by group size or group count, and CSV/JSON export of the groups.
//! Every random choice goes through a caller-supplied [`rand::Rng`], so a
//! seeded `StdRng` makes results reproducible.

pub mod config;
pub mod error;
pub mod export;
pub mod grouping;
pub mod lottery;
pub mod random;

pub use config::{DrawTiming, GroupingConfig, LotteryConfig};
pub use error::{DrawError, DrawResult};
pub use grouping::{Group, GroupMethod, Partition, partition};
pub use lottery::{DrawEvent, DrawHistory, DrawPhase, Lottery};
pub use random::{pick, shuffle, shuffled};
