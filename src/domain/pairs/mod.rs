pub mod encoding;
pub mod error;
pub mod model;
pub mod parser;
pub mod service;

pub use encoding::detect_and_decode;
pub use error::PairParseError;
pub use model::{PairDraft, PairsResponse};
pub use parser::{parse_delimited, parse_json, parse_lines};
pub use service::{PairService, UploadKind};
