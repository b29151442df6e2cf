//! esframe - 搜索引擎结果的 DataFrame 后处理与 geo_shape 序列化
//!
//! - `query::post_processing`：查询构建阶段记录、结果物化后重放的排序/截取动作
//! - `geo`：几何值到 geo_shape 文档的转换，以及可选几何能力下的表/列检测

pub mod config;
pub mod core;
pub mod geo;
pub mod query;
pub mod utils;

pub use crate::core::{DataFrame, FrameError, FrameResult, Geometry, Series, Value};
