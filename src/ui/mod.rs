//! Terminal presentation layer
//!
//! Renderers are pure functions of state and theme; `Dashboard` turns user
//! intents into state changes and follow-up effects.

/// Coin card grid
pub mod cards;
/// Text price chart
pub mod chart;
/// Intent handling and screen composition
pub mod dashboard;
/// Detail view of a single coin
pub mod detail;
/// Number and label formatting
pub mod format;
/// Theme context
pub mod theme;
