pub mod input;
pub mod subject;
pub mod threshold;
pub mod verdict;

pub use input::{check_answer_text, InputRejection};
pub use subject::Subject;
pub use threshold::ThresholdConfig;
pub use verdict::{MatchMethod, ValidationResult};
