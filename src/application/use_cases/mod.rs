mod ask_question;
mod backoff;

pub use ask_question::*;
pub use backoff::*;
