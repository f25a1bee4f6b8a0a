pub mod fish;
pub use fish::*;

pub mod memory;
pub use memory::*;

pub mod robot;
pub use robot::*;

pub mod strategy;
pub use strategy::*;
