pub mod backend;
pub mod surface;
pub mod svg;
