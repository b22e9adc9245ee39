/// Market data service interface
pub mod market;
