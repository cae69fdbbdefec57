pub mod api;
pub mod limit;
pub mod parse;
pub mod track;
