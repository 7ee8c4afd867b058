pub mod breadcrumb;
pub mod header;
pub mod layout;
pub mod markdown;
pub mod page;

pub use breadcrumb::{Breadcrumb, BreadcrumbItem};
pub use header::Header;
pub use layout::Layout;
pub use markdown::Markdown;
pub use page::{ErrorPage, LoadingPage, Page};
