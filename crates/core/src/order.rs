//! Order module - recipe derivation, answer checking and order scoring
//!
//! Scoring rules:
//! - A wrong (or blank) answer scores 0 regardless of time.
//! - A correct answer received in under 5 seconds scores 150.
//! - A correct answer received at exactly 5 seconds or later scores 100.
//! - VIP customers multiply a correct order's score by 1.5, truncating.

use std::time::Duration;

use crate::types::{FAST_ORDER_POINTS, FAST_ORDER_SECS, ORDER_POINTS, VIP_MULTIPLIER};

/// Every drink starts from these.
pub const BASE_INGREDIENTS: [&str; 2] = ["Tea", "Milk"];

/// Drink-name token → extra ingredient, in display order.
///
/// Tokens are matched case-sensitively as substrings of the drink name and
/// each one is checked independently.
pub const INGREDIENT_TOKENS: [(&str, &str); 5] = [
    ("Taro", "Taro"),
    ("Matcha", "Matcha"),
    ("Strawberry", "Strawberry"),
    ("Sugar", "Brown Sugar"),
    ("Boba", "Tapioca"),
];

/// Derive the recipe for a drink.
///
/// Pure function of the name: the same name always yields the same list.
pub fn derive_ingredients(drink_name: &str) -> Vec<&'static str> {
    let mut ingredients = BASE_INGREDIENTS.to_vec();
    ingredients.extend(
        INGREDIENT_TOKENS
            .iter()
            .filter(|(token, _)| drink_name.contains(token))
            .map(|&(_, ingredient)| ingredient),
    );
    ingredients
}

/// Check a free-text, comma-separated answer against a recipe.
///
/// Each provided token is trimmed and lowercased. The answer is correct when
/// every required ingredient (lowercased) is a substring of at least one
/// provided token. Order and extra tokens are ignored. Blank input is wrong.
pub fn check_correctness<S: AsRef<str>>(required: &[S], input: &str) -> bool {
    if input.trim().is_empty() {
        return false;
    }

    let provided: Vec<String> = input
        .split(',')
        .map(|part| part.trim().to_lowercase())
        .collect();

    required.iter().all(|req| {
        let req = req.as_ref().to_lowercase();
        provided.iter().any(|p| p.contains(&req))
    })
}

/// Base score for an order.
///
/// Exactly `FAST_ORDER_SECS` falls on the slow side.
pub fn score(correct: bool, elapsed_secs: f64) -> u32 {
    if !correct {
        return 0;
    }
    if elapsed_secs < FAST_ORDER_SECS {
        FAST_ORDER_POINTS
    } else {
        ORDER_POINTS
    }
}

/// Points credited to the tally for an order's base score.
pub fn credit_points(points: u32, is_vip: bool) -> u32 {
    if is_vip {
        (f64::from(points) * VIP_MULTIPLIER) as u32
    } else {
        points
    }
}

/// Result recorded when an order is completed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderOutcome {
    pub correct: bool,
    pub elapsed: Duration,
}

/// A single drink order, owned by its customer.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    drink_name: String,
    ingredients: Vec<&'static str>,
    outcome: Option<OrderOutcome>,
}

impl Order {
    pub fn new(drink_name: impl Into<String>) -> Self {
        let drink_name = drink_name.into();
        let ingredients = derive_ingredients(&drink_name);
        Self {
            drink_name,
            ingredients,
            outcome: None,
        }
    }

    pub fn drink_name(&self) -> &str {
        &self.drink_name
    }

    pub fn ingredients(&self) -> &[&'static str] {
        &self.ingredients
    }

    /// Recipe formatted for display ("Tea, Milk, Taro").
    pub fn recipe(&self) -> String {
        self.ingredients.join(", ")
    }

    pub fn check(&self, input: &str) -> bool {
        check_correctness(&self.ingredients, input)
    }

    /// Record the outcome. Only the first call has any effect.
    ///
    /// Returns `false` if the order was already completed.
    pub fn complete(&mut self, correct: bool, elapsed: Duration) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        self.outcome = Some(OrderOutcome { correct, elapsed });
        true
    }

    pub fn outcome(&self) -> Option<OrderOutcome> {
        self.outcome
    }

    pub fn is_resolved(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn was_correct(&self) -> bool {
        self.outcome.is_some_and(|o| o.correct)
    }

    /// Base score; 0 while unresolved.
    pub fn score(&self) -> u32 {
        self.outcome
            .map_or(0, |o| score(o.correct, o.elapsed.as_secs_f64()))
    }
}
