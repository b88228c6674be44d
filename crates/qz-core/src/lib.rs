pub mod error;
pub mod types;
pub mod value;

pub use error::QuizError;
pub use types::*;
pub use value::*;
