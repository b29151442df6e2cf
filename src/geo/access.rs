//! 几何访问接口
//!
//! 序列化只通过这组访问器读取几何值：类别标签、坐标序列、外环/内环、成员。
//! 类别由 `kind()` 明确给出，不依赖具体类型层次。

use crate::core::{Coordinate, Geometry, GeometryKind, LineString, Polygon, Value};

pub trait GeometryAccess {
    /// 几何类别，`None` 表示不受支持的类型
    fn kind(&self) -> Option<GeometryKind>;

    /// 实际类型名，用于错误信息
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// 点和线的坐标序列；`None` 表示该类型不提供坐标
    fn coords(&self) -> Option<&[Coordinate]> {
        None
    }

    fn exterior(&self) -> Option<&LineString> {
        None
    }

    fn interiors(&self) -> &[LineString] {
        &[]
    }

    /// 多部件和集合的成员，按原顺序；`None` 表示该类型不提供成员
    fn members(&self) -> Option<Vec<&dyn GeometryAccess>> {
        None
    }
}

impl GeometryAccess for Coordinate {
    fn kind(&self) -> Option<GeometryKind> {
        Some(GeometryKind::Point)
    }

    fn coords(&self) -> Option<&[Coordinate]> {
        Some(std::slice::from_ref(self))
    }
}

impl GeometryAccess for LineString {
    fn kind(&self) -> Option<GeometryKind> {
        Some(GeometryKind::LineString)
    }

    fn coords(&self) -> Option<&[Coordinate]> {
        Some(&self.coordinates)
    }
}

impl GeometryAccess for Polygon {
    fn kind(&self) -> Option<GeometryKind> {
        Some(GeometryKind::Polygon)
    }

    fn exterior(&self) -> Option<&LineString> {
        Some(&self.exterior)
    }

    fn interiors(&self) -> &[LineString] {
        &self.interiors
    }
}

fn as_members<T: GeometryAccess>(items: &[T]) -> Vec<&dyn GeometryAccess> {
    items.iter().map(|item| item as &dyn GeometryAccess).collect()
}

impl GeometryAccess for Geometry {
    fn kind(&self) -> Option<GeometryKind> {
        Some(Geometry::kind(self))
    }

    fn coords(&self) -> Option<&[Coordinate]> {
        match self {
            Geometry::Point(c) => Some(std::slice::from_ref(c)),
            Geometry::LineString(ls) => Some(&ls.coordinates),
            _ => None,
        }
    }

    fn exterior(&self) -> Option<&LineString> {
        match self {
            Geometry::Polygon(poly) => Some(&poly.exterior),
            _ => None,
        }
    }

    fn interiors(&self) -> &[LineString] {
        match self {
            Geometry::Polygon(poly) => &poly.interiors,
            _ => &[],
        }
    }

    fn members(&self) -> Option<Vec<&dyn GeometryAccess>> {
        match self {
            Geometry::MultiPoint(points) => Some(as_members(points)),
            Geometry::MultiLineString(lines) => Some(as_members(lines)),
            Geometry::MultiPolygon(polys) => Some(as_members(polys)),
            Geometry::GeometryCollection(geoms) => Some(as_members(geoms)),
            _ => None,
        }
    }
}

/// 单元值：几何值委托给内部几何，其余值均不受支持
impl GeometryAccess for Value {
    fn kind(&self) -> Option<GeometryKind> {
        self.as_geography().map(Geometry::kind)
    }

    fn type_name(&self) -> &str {
        Value::type_name(self)
    }

    fn coords(&self) -> Option<&[Coordinate]> {
        self.as_geography().and_then(|geo| geo.coords())
    }

    fn exterior(&self) -> Option<&LineString> {
        self.as_geography().and_then(|geo| geo.exterior())
    }

    fn interiors(&self) -> &[LineString] {
        match self.as_geography() {
            Some(geo) => geo.interiors(),
            None => &[],
        }
    }

    fn members(&self) -> Option<Vec<&dyn GeometryAccess>> {
        self.as_geography().and_then(|geo| geo.members())
    }
}
