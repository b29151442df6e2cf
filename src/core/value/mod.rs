//! Value 模块 - 表格与几何值类型
//!
//! - 单元值类型 (`types.rs`)
//! - 比较逻辑 (`comparison.rs`)
//! - 地理空间类型 (`geography.rs`)
//! - 数据集类型 (`dataset.rs`)

pub mod comparison;
pub mod dataset;
pub mod geography;
pub mod types;

pub use dataset::*;
pub use geography::*;
pub use types::*;
