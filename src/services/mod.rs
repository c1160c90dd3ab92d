pub mod balance_formatter;
pub mod chain_priority;
pub mod converter;
pub mod price_service;
pub mod summation;
