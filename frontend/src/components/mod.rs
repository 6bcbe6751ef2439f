pub mod micro;
pub mod particles;
