pub mod dispatcher;
pub mod generator;
pub mod inference;
pub mod prompt;
