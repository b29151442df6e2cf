//! 地理空间支持
//!
//! 几何能力是可选的：`geo` feature 关闭或配置禁用时，检测函数一律返回 false，
//! 不报错。能力在进程内只解析一次，之后只读。

#[cfg(feature = "geo")]
pub mod access;
#[cfg(feature = "geo")]
pub mod shape;

#[cfg(feature = "geo")]
pub use access::GeometryAccess;
#[cfg(feature = "geo")]
pub use shape::{shape_to_es, Coordinates, GeoShapeDocument};

use std::sync::OnceLock;

use log::{info, warn};

use crate::config::Config;
use crate::core::{DataFrame, Series, Value};

static GEO_CAPABILITY: OnceLock<GeoCapability> = OnceLock::new();

/// 几何能力标志
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoCapability {
    Available,
    Unavailable,
}

impl GeoCapability {
    /// 仅由编译期 feature 决定
    pub fn compiled() -> Self {
        if cfg!(feature = "geo") {
            GeoCapability::Available
        } else {
            GeoCapability::Unavailable
        }
    }

    pub fn from_config(config: &Config) -> Self {
        if config.geo_enabled {
            Self::compiled()
        } else {
            GeoCapability::Unavailable
        }
    }

    /// 进程级能力；未调用 [`init`] 时按编译期 feature 解析
    pub fn current() -> Self {
        *GEO_CAPABILITY.get_or_init(Self::compiled)
    }

    pub fn is_available(&self) -> bool {
        matches!(self, GeoCapability::Available)
    }

    /// 至少有一个非空值，且所有非空值都是几何值
    pub fn is_geo_series(&self, series: &Series) -> bool {
        if !self.is_available() {
            return false;
        }
        let mut non_null = series.values.iter().filter(|v| !v.is_null()).peekable();
        non_null.peek().is_some() && non_null.all(|v| matches!(v, Value::Geography(_)))
    }

    /// 任一列为几何列
    pub fn is_geo_dataframe(&self, dataframe: &DataFrame) -> bool {
        self.is_available() && dataframe.columns().any(|col| self.is_geo_series(&col))
    }
}

/// 启动时固定几何能力
///
/// 能力已被解析过时保持原值并记录警告
pub fn init(config: &Config) -> GeoCapability {
    let requested = GeoCapability::from_config(config);
    let resolved = *GEO_CAPABILITY.get_or_init(|| requested);
    if resolved != requested {
        warn!("几何能力已固定为 {:?}，忽略配置 {:?}", resolved, requested);
    } else {
        info!("几何能力: {:?}", resolved);
    }
    resolved
}

/// 判断表是否为几何表
pub fn is_geo_dataframe(dataframe: &DataFrame) -> bool {
    GeoCapability::current().is_geo_dataframe(dataframe)
}

/// 判断列是否为几何列
pub fn is_geo_series(series: &Series) -> bool {
    GeoCapability::current().is_geo_series(series)
}
