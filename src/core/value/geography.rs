//! 地理空间类型模块
//!
//! 本模块定义了点、线、多边形及其多部件/集合形式的几何值。
//! 几何值是一棵树：坐标 -> 环 -> 多边形 -> 多部件 / 集合。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 几何形状类别
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GeometryKind {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl GeometryKind {
    pub const ALL: [GeometryKind; 7] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::Polygon,
        GeometryKind::MultiPoint,
        GeometryKind::MultiLineString,
        GeometryKind::MultiPolygon,
        GeometryKind::GeometryCollection,
    ];

    /// 搜索引擎 geo_shape 字段使用的小写类型名
    pub fn es_type(&self) -> &'static str {
        match self {
            GeometryKind::Point => "point",
            GeometryKind::LineString => "linestring",
            GeometryKind::Polygon => "polygon",
            GeometryKind::MultiPoint => "multipoint",
            GeometryKind::MultiLineString => "multilinestring",
            GeometryKind::MultiPolygon => "multipolygon",
            GeometryKind::GeometryCollection => "geometrycollection",
        }
    }

    pub fn is_multi_part(&self) -> bool {
        matches!(
            self,
            GeometryKind::MultiPoint
                | GeometryKind::MultiLineString
                | GeometryKind::MultiPolygon
                | GeometryKind::GeometryCollection
        )
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.es_type())
    }
}

/// 地理坐标（2D 或 3D 定长数值元组）
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// 按顺序返回各分量
    pub fn ordinates(&self) -> Vec<f64> {
        match self.z {
            Some(z) => vec![self.x, self.y, z],
            None => vec![self.x, self.y],
        }
    }

    fn as_wkt(&self) -> String {
        match self.z {
            Some(z) => format!("{} {} {}", self.x, self.y, z),
            None => format!("{} {}", self.x, self.y),
        }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Coordinate::new(x, y)
    }
}

impl From<(f64, f64, f64)> for Coordinate {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Coordinate::with_z(x, y, z)
    }
}

/// 线，也用作多边形的环
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LineString {
    pub coordinates: Vec<Coordinate>,
}

impl LineString {
    pub fn new() -> Self {
        Self {
            coordinates: Vec::new(),
        }
    }

    pub fn add_point(&mut self, coord: Coordinate) {
        self.coordinates.push(coord);
    }

    /// 首尾坐标相同即为闭合环
    pub fn is_closed(&self) -> bool {
        match (self.coordinates.first(), self.coordinates.last()) {
            (Some(first), Some(last)) => self.coordinates.len() > 1 && first == last,
            _ => false,
        }
    }

    fn wkt_body(&self) -> String {
        let coords: Vec<String> = self.coordinates.iter().map(Coordinate::as_wkt).collect();
        format!("({})", coords.join(", "))
    }
}

impl<C: Into<Coordinate>> FromIterator<C> for LineString {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            coordinates: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// 多边形：一个外环加零个或多个内环（洞）
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Polygon {
    pub exterior: LineString,
    pub interiors: Vec<LineString>,
}

impl Polygon {
    pub fn new(exterior: LineString) -> Self {
        Self {
            exterior,
            interiors: Vec::new(),
        }
    }

    pub fn with_holes(exterior: LineString, interiors: Vec<LineString>) -> Self {
        Self { exterior, interiors }
    }

    pub fn add_hole(&mut self, ring: LineString) {
        self.interiors.push(ring);
    }

    fn wkt_body(&self) -> String {
        let rings: Vec<String> = std::iter::once(&self.exterior)
            .chain(self.interiors.iter())
            .map(LineString::wkt_body)
            .collect();
        format!("({})", rings.join(", "))
    }
}

/// 几何值
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Geometry {
    Point(Coordinate),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(Vec<Coordinate>),
    MultiLineString(Vec<LineString>),
    MultiPolygon(Vec<Polygon>),
    GeometryCollection(Vec<Geometry>),
}

impl Geometry {
    pub fn point(x: f64, y: f64) -> Self {
        Geometry::Point(Coordinate::new(x, y))
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryKind::GeometryCollection,
        }
    }

    /// 转换为 WKT 格式，用于日志和调试输出
    pub fn as_wkt(&self) -> String {
        match self {
            Geometry::Point(c) => format!("POINT ({})", c.as_wkt()),
            Geometry::LineString(ls) => format!("LINESTRING {}", ls.wkt_body()),
            Geometry::Polygon(poly) => format!("POLYGON {}", poly.wkt_body()),
            Geometry::MultiPoint(points) => {
                let parts: Vec<String> =
                    points.iter().map(|c| format!("({})", c.as_wkt())).collect();
                format!("MULTIPOINT ({})", parts.join(", "))
            }
            Geometry::MultiLineString(lines) => {
                let parts: Vec<String> = lines.iter().map(LineString::wkt_body).collect();
                format!("MULTILINESTRING ({})", parts.join(", "))
            }
            Geometry::MultiPolygon(polys) => {
                let parts: Vec<String> = polys.iter().map(Polygon::wkt_body).collect();
                format!("MULTIPOLYGON ({})", parts.join(", "))
            }
            Geometry::GeometryCollection(geoms) => {
                let parts: Vec<String> = geoms.iter().map(Geometry::as_wkt).collect();
                format!("GEOMETRYCOLLECTION ({})", parts.join(", "))
            }
        }
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_wkt())
    }
}
