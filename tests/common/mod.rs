//! 集成测试共享工具模块
//!
//! 提供测试数据构造函数，供所有集成测试使用

#![allow(dead_code)]

pub mod data_fixtures;
