pub mod engine;
pub mod render;
pub mod response;
pub mod url;
