pub mod api_response;
pub mod balance;
pub mod conversion;
pub mod price;
pub mod summation;
