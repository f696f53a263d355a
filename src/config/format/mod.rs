//! 文件格式解析

pub mod dotenv;
