pub mod document;
pub mod emit;
pub mod error;
pub mod jsonc;
pub mod naming;
pub mod openxr;
pub mod parser;
pub mod pipeline;
pub mod topology;
pub mod writer;

pub use actiongen_types as types;

pub use emit::generate;
pub use error::{Error, GenerateError, ParseError};
pub use naming::{CamelCase, NamingConvention, NamingStyle, PascalCase, SnakeCase};
pub use parser::parse;
pub use pipeline::{generate_file, generate_header, output_path, read_header, GeneratorOptions};
