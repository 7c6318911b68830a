//! Core shop logic - pure, deterministic, and testable
//!
//! This crate contains the rules of the milk-tea shop: how a drink's recipe is
//! derived, how an answer is checked and scored, how customers are generated,
//! and how players, ratings, achievements and the leaderboard evolve.
//! It performs **no I/O**. Input, output, time, randomness and persistence are
//! reached through the collaborator traits in [`ports`].
//!
//! # Module Structure
//!
//! - [`order`]: recipe derivation, answer checking, time-based scoring
//! - [`customer`]: customers and daily queue generation
//! - [`player`]: player profile and the 1-5 star rating
//! - [`leaderboard`]: username → score table
//! - [`achievements`]: unlock rules evaluated at day end
//! - [`report`]: per-day tally
//! - [`rng`]: seedable LCG implementing [`ports::RandomSource`]
//! - [`ports`]: input, display, clock, random and storage traits
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use tui_barista_core::{credit_points, Order};
//!
//! let mut order = Order::new("Taro Milk Tea");
//! assert_eq!(order.ingredients(), &["Tea", "Milk", "Taro"]);
//!
//! let correct = order.check("taro, milk, tea");
//! order.complete(correct, Duration::from_millis(3200));
//! assert_eq!(order.score(), 150);
//!
//! // VIPs pay one and a half times, truncated.
//! assert_eq!(credit_points(order.score(), true), 225);
//! ```

pub mod achievements;
pub mod customer;
pub mod error;
pub mod leaderboard;
pub mod order;
pub mod player;
pub mod ports;
pub mod report;
pub mod rng;

pub use tui_barista_types as types;

// Re-export commonly used types for convenience
pub use achievements::{check_achievements, Achievement};
pub use customer::{generate_customer, generate_customers, Customer};
pub use error::StoreError;
pub use leaderboard::Leaderboard;
pub use order::{check_correctness, credit_points, derive_ingredients, score, Order, OrderOutcome};
pub use player::{rating, Player};
pub use ports::{Clock, DisplaySink, InputSource, LeaderboardStore, PlayerStore, RandomSource};
pub use report::DayReport;
pub use rng::SimpleRng;
