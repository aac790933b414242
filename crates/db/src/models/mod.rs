//! Entity models.

pub mod video;
