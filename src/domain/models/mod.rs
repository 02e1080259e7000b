mod answer;
mod query;

pub use answer::*;
pub use query::*;
