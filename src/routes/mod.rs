mod health;
mod register;

pub use health::*;
pub use register::*;
