pub mod account;
pub mod company;
pub mod generation;
