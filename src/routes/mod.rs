mod greetings;
mod health_check;
mod integer_param;

pub use greetings::*;
pub use health_check::*;
pub use integer_param::*;
