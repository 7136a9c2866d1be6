pub mod text;
pub mod time_parser;
