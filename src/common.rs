use serde::{Deserialize, Serialize};

// 公共响应结构：{"msg": ...}
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Message<T = String> {
    pub msg: T,
}

impl Message {
    pub fn text(msg: &str) -> Self {
        Self {
            msg: msg.to_string(),
        }
    }
}

// 公共响应结构：{"error": ...}
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ErrorMessage {
    pub error: String,
}

impl ErrorMessage {
    pub fn text(error: &str) -> Self {
        Self {
            error: error.to_string(),
        }
    }
}
