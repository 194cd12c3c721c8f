//! Decision strategies.
//!
//! ## Overview
//!
//! - **Trait**: `Strategy`, the stay/leave capability the engine polls
//! - **Encoding**: `features::encode`, the 9-scalar observation vector
//! - **Policies**: `LinearStrategy` (logistic over features, mutable),
//!   `FixedStrategy` and `TurnLimitStrategy` for baselines and tests
//!
//! ## Usage
//!
//! ```
//! use incan_gold::agent::{LinearStrategy, Strategy};
//! use incan_gold::core::GameRng;
//!
//! let mut rng = GameRng::new(1);
//! let parent = LinearStrategy::random(&mut rng);
//! let child = parent.spawn(0.1, &mut rng);
//! assert_eq!(child.name(), "linear");
//! ```

pub mod features;
pub mod linear;
pub mod scripted;
pub mod strategy;

pub use features::{encode, FEATURE_COUNT, FEATURE_NAMES};
pub use linear::{LinearStrategy, DEFAULT_VARIABILITY};
pub use scripted::{FixedStrategy, TurnLimitStrategy};
pub use strategy::Strategy;
