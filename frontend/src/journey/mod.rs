pub mod controller;
pub mod phases;
pub mod view;

pub use view::Journey;
