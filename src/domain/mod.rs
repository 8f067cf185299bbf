// Domain layer - Core metadata model and reconciliation rules

pub mod errors;
pub mod model;
pub mod rules;
