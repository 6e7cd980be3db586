pub mod error;
pub mod traits;
pub mod types;

pub use error::SolveError;
pub use traits::{RecognitionRequest, Recognizer};
pub use types::{ImagePayload, SolveRequest, SolveResult};
