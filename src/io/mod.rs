pub mod reader;

pub use reader::open_source;
