//! Request extractors shared by controllers.

pub mod tenant;
