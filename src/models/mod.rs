pub mod booking;
pub mod worker;

pub use booking::{Booking, BookingRequest, CustomerDetails};
pub use worker::{default_workers, SortKey, Worker};
