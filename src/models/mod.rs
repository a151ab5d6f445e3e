pub mod date_range;
pub mod payment;
pub mod sales;

pub use date_range::*;
pub use payment::*;
pub use sales::*;
