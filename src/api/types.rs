// API 类型定义模块
// 报名 API 的请求/响应类型

use serde::{Deserialize, Serialize};

/// 报名和退选操作的成功响应
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// 携带可读原因的错误响应
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
