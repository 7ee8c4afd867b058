pub const SITE_NAME: &str = "Guest Directory";
