pub mod catalog;
pub mod review;
pub mod system;
