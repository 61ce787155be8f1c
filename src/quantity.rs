#[macro_use]
mod macros;

pub mod fuel;
pub mod percentage;
pub mod power;
