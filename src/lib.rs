
pub mod numeric;
pub mod interval;
pub mod error;
pub mod bbox;
pub mod shapes;
pub mod compound;
pub mod visitor;
pub mod sampler;
pub mod scene;
pub mod json_structs;
pub mod json_parser;

pub mod prelude;
