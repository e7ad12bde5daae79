use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

impl GreetingResponse {
    pub fn hello() -> Self {
        Self {
            message: "Hello Andresinho".to_string(),
        }
    }

    pub fn love() -> Self {
        Self {
            message: format!("I Love Andresinho {}%", 100 + 1),
        }
    }

    pub fn plus_hundred(x: BigInt) -> Self {
        Self {
            message: format!("hello {}", x + BigInt::from(100)),
        }
    }
}
