pub mod directory;
pub mod home;
pub mod not_found;

pub use directory::{Attractions, Dining, DirectoryPage, Services, Transportation};
pub use home::Home;
pub use not_found::NotFound;
