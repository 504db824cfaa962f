pub mod convert;
pub mod element;
pub mod error;
pub mod mesh;
pub mod read;
pub mod utils;
pub mod write;

pub use convert::{
    convert, convert_streams, ConversionSummary, TetgenInputs, TetgenPaths, DEFAULT_BASENAME,
};
pub use element::{Element, ElementCounts, ElementKind};
pub use error::{ConvertError, Result};
pub use mesh::TetraMesh;
pub use read::{parse_tetra, parse_tetra_header, read_tetra, read_tetra_header, TetgenReader};
pub use utils::format_float;
pub use write::TetraWriter;
