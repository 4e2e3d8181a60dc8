//! Domain services

pub mod cost_estimator;
pub mod gram_pricing;

pub use cost_estimator::{
    duration_hours, estimate_cost, estimate_cost_with_policy, RoundingPolicy,
};
pub use gram_pricing::{estimate_print_hours, estimated_mass_grams, flat_price};
