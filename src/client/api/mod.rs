pub mod helper;
pub mod hotel;

pub use hotel::{get_current_hotel, get_hotel_directory};
