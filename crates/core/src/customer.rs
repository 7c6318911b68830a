//! Customer generation.

use std::collections::VecDeque;

use crate::order::Order;
use crate::ports::RandomSource;
use crate::types::{CUSTOMER_NAMES, DRINK_MENU};

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    name: String,
    vip: bool,
    order: Order,
}

impl Customer {
    pub fn new(name: impl Into<String>, vip: bool, order: Order) -> Self {
        Self {
            name: name.into(),
            vip,
            order,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_vip(&self) -> bool {
        self.vip
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn order_mut(&mut self) -> &mut Order {
        &mut self.order
    }

    pub fn greeting(&self) -> &'static str {
        if self.vip {
            "I expect perfection."
        } else {
            "Hi! Can I get a drink?"
        }
    }

    /// Name with a `[VIP]` tag when applicable.
    pub fn display_name(&self) -> String {
        if self.vip {
            format!("{} [VIP]", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Draw one customer: VIP roll, then name, then drink.
pub fn generate_customer(rng: &mut dyn RandomSource, vip_probability: f64) -> Customer {
    let vip = rng.uniform() < vip_probability;
    let name = CUSTOMER_NAMES[rng.int_below(CUSTOMER_NAMES.len()) % CUSTOMER_NAMES.len()];
    let drink = DRINK_MENU[rng.int_below(DRINK_MENU.len()) % DRINK_MENU.len()];
    Customer::new(name, vip, Order::new(drink))
}

/// Draw a day's queue of `count` independent customers in arrival order.
pub fn generate_customers(
    rng: &mut dyn RandomSource,
    count: usize,
    vip_probability: f64,
) -> VecDeque<Customer> {
    (0..count)
        .map(|_| generate_customer(rng, vip_probability))
        .collect()
}
