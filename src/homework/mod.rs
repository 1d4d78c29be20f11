pub mod parser;
pub mod types;
pub mod validator;
pub mod verdict;

pub use parser::parse_status;
pub use types::*;
pub use validator::validate_response;
pub use verdict::verdict_for;
