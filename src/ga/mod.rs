pub mod controller;
pub mod fitness;
pub mod initializer;
pub mod operators;
