pub mod booking;
pub mod service;
pub mod slot;

pub use booking::*;
pub use service::*;
pub use slot::*;
