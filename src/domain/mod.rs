pub mod currency;
pub mod error;
pub mod inputs;
pub mod results;
pub mod scenario;
