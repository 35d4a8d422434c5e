pub const SITE_NAME: &str = "Quizer";
