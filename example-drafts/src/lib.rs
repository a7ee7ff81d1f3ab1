pub mod customer_satisfaction;
pub mod team_pulse;

pub use customer_satisfaction::customer_satisfaction;
pub use team_pulse::{team_pulse, team_pulse_with_foreign_type};
