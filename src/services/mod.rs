pub mod payload_builder;
pub mod response_parser;
pub mod validator;

pub use payload_builder::PayloadBuilder;
pub use validator::Validator;
