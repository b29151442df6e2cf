//! 数据集类型模块
//!
//! 本模块定义了物化后的查询结果表 `DataFrame` 以及单列视图 `Series`。
//! 表按行存储，每行带一个整数索引标签。

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::types::Value;
use crate::core::error::{FrameError, FrameResult};

/// 行索引标签
pub type IndexLabel = i64;

/// 单列视图
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub index: Vec<IndexLabel>,
    pub values: Vec<Value>,
}

impl Series {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        let index = (0..values.len() as IndexLabel).collect();
        Self {
            name: name.into(),
            index,
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// 物化结果表
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataFrame {
    col_names: Vec<String>,
    index: Vec<IndexLabel>,
    rows: Vec<Vec<Value>>,
}

impl DataFrame {
    pub fn new(col_names: Vec<String>) -> Self {
        Self {
            col_names,
            index: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// 以 0..n 作为索引构造
    pub fn from_rows(col_names: Vec<String>, rows: Vec<Vec<Value>>) -> FrameResult<Self> {
        let index = (0..rows.len() as IndexLabel).collect();
        Self::with_index(index, col_names, rows)
    }

    pub fn with_index(
        index: Vec<IndexLabel>,
        col_names: Vec<String>,
        rows: Vec<Vec<Value>>,
    ) -> FrameResult<Self> {
        if index.len() != rows.len() {
            return Err(FrameError::invalid_argument(format!(
                "索引长度 {} 与行数 {} 不一致",
                index.len(),
                rows.len()
            )));
        }
        if let Some(bad) = rows.iter().find(|row| row.len() != col_names.len()) {
            return Err(FrameError::invalid_argument(format!(
                "行宽 {} 与列数 {} 不一致",
                bad.len(),
                col_names.len()
            )));
        }
        Ok(Self {
            col_names,
            index,
            rows,
        })
    }

    /// 追加一行，索引标签取当前最大标签加一
    pub fn push_row(&mut self, row: Vec<Value>) -> FrameResult<()> {
        if row.len() != self.col_names.len() {
            return Err(FrameError::invalid_argument(format!(
                "行宽 {} 与列数 {} 不一致",
                row.len(),
                self.col_names.len()
            )));
        }
        let label = self.index.iter().max().map_or(0, |max| max + 1);
        self.index.push(label);
        self.rows.push(row);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn col_names(&self) -> &[String] {
        &self.col_names
    }

    pub fn index(&self) -> &[IndexLabel] {
        &self.index
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.col_names.iter().position(|c| c == name)
    }

    pub fn column(&self, name: &str) -> Option<Series> {
        let pos = self.column_position(name)?;
        Some(Series {
            name: name.to_string(),
            index: self.index.clone(),
            values: self.rows.iter().map(|row| row[pos].clone()).collect(),
        })
    }

    pub fn columns(&self) -> impl Iterator<Item = Series> + '_ {
        self.col_names
            .iter()
            .filter_map(move |name| self.column(name))
    }

    /// 按行号顺序重新挑选行
    fn take(&self, positions: impl IntoIterator<Item = usize>) -> Self {
        let mut index = Vec::new();
        let mut rows = Vec::new();
        for pos in positions {
            index.push(self.index[pos]);
            rows.push(self.rows[pos].clone());
        }
        Self {
            col_names: self.col_names.clone(),
            index,
            rows,
        }
    }

    /// 按索引升序排序（稳定排序）
    pub fn sort_index(&self) -> Self {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by_key(|&pos| self.index[pos]);
        self.take(order)
    }

    /// 前 `n` 行
    pub fn head(&self, n: usize) -> Self {
        self.take(0..n.min(self.len()))
    }

    /// 后 `n` 行，保持原有相对顺序
    pub fn tail(&self, n: usize) -> Self {
        let start = self.len().saturating_sub(n);
        self.take(start..self.len())
    }

    /// 按列值排序，缺失值总是排在最后
    pub fn sort_values(&self, field: &str, ascending: bool) -> FrameResult<Self> {
        let col = self
            .column_position(field)
            .ok_or_else(|| FrameError::ColumnNotFound(field.to_string()))?;

        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| {
            let (va, vb) = (&self.rows[a][col], &self.rows[b][col]);
            match (va.is_missing(), vb.is_missing()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => {
                    let cmp = sort_cmp(va, vb);
                    if ascending {
                        cmp
                    } else {
                        cmp.reverse()
                    }
                }
            }
        });
        Ok(self.take(order))
    }
}

/// 排序使用的全序：先按类别，再按类别内的值
fn sort_cmp(a: &Value, b: &Value) -> Ordering {
    fn rank(v: &Value) -> u8 {
        match v {
            Value::Bool(_) => 0,
            Value::Int(_) | Value::Float(_) => 1,
            Value::String(_) => 2,
            Value::Geography(_) => 3,
            Value::Null => 4,
        }
    }

    rank(a)
        .cmp(&rank(b))
        .then_with(|| a.compare(b).unwrap_or(Ordering::Equal))
}
