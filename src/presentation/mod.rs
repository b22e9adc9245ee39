/// Chart data models
pub mod chart;
/// Coin models
pub mod coin;
