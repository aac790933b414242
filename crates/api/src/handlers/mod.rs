pub mod testing;
pub mod video;
