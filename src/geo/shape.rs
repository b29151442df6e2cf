//! geo_shape 文档序列化
//!
//! 将几何值转换为搜索引擎 geo_shape 字段可直接索引的文档：
//! `{"type": ..., "coordinates": [...]}`，集合则为 `{"type": "geometrycollection", "geometries": [...]}`。
//! 纯函数，无 I/O，输出只取决于输入。

use log::debug;
use serde::Serialize;
use serde_json::{json, Value as JsonValue};

use super::access::GeometryAccess;
use crate::core::error::{FrameError, FrameResult};
use crate::core::{Coordinate, GeometryKind};

/// 嵌套坐标数组
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Coordinates {
    Scalar(f64),
    Nested(Vec<Coordinates>),
}

impl Coordinates {
    /// 非有限数值输出为 `null`
    pub fn to_json(&self) -> JsonValue {
        match self {
            Coordinates::Scalar(v) => JsonValue::from(*v),
            Coordinates::Nested(items) => {
                JsonValue::Array(items.iter().map(Coordinates::to_json).collect())
            }
        }
    }

    /// 嵌套层数，标量为 0
    pub fn depth(&self) -> usize {
        match self {
            Coordinates::Scalar(_) => 0,
            Coordinates::Nested(items) => 1 + items.first().map_or(0, Coordinates::depth),
        }
    }
}

impl From<&Coordinate> for Coordinates {
    fn from(coord: &Coordinate) -> Self {
        Coordinates::Nested(
            coord
                .ordinates()
                .into_iter()
                .map(Coordinates::Scalar)
                .collect(),
        )
    }
}

/// geo_shape 文档
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GeoShapeDocument {
    Shape {
        #[serde(rename = "type")]
        es_type: &'static str,
        coordinates: Coordinates,
    },
    Collection {
        #[serde(rename = "type")]
        es_type: &'static str,
        geometries: Vec<GeoShapeDocument>,
    },
}

impl GeoShapeDocument {
    pub fn es_type(&self) -> &'static str {
        match *self {
            GeoShapeDocument::Shape { es_type, .. }
            | GeoShapeDocument::Collection { es_type, .. } => es_type,
        }
    }

    pub fn to_json(&self) -> JsonValue {
        match self {
            GeoShapeDocument::Shape {
                es_type,
                coordinates,
            } => json!({ "type": es_type, "coordinates": coordinates.to_json() }),
            GeoShapeDocument::Collection {
                es_type,
                geometries,
            } => json!({
                "type": es_type,
                "geometries": geometries.iter().map(GeoShapeDocument::to_json).collect::<Vec<_>>()
            }),
        }
    }
}

fn resolve_kind(shape: &dyn GeometryAccess) -> FrameResult<GeometryKind> {
    shape
        .kind()
        .ok_or_else(|| FrameError::unsupported_type(shape.type_name()))
}

/// 声明了类别却缺少该类别必需的访问器
fn missing_part(shape: &dyn GeometryAccess, kind: GeometryKind, part: &str) -> FrameError {
    FrameError::invalid_argument(format!(
        "几何类型 '{}' 声明为 {}，但未提供{}",
        shape.type_name(),
        kind,
        part
    ))
}

fn members_of(
    shape: &dyn GeometryAccess,
    kind: GeometryKind,
) -> FrameResult<Vec<&dyn GeometryAccess>> {
    shape.members().ok_or_else(|| missing_part(shape, kind, "成员"))
}

/// 将几何值序列化为 geo_shape 文档
///
/// 不受支持的类型返回 `UnsupportedType`，错误信息包含实际类型名
pub fn shape_to_es(shape: &dyn GeometryAccess) -> FrameResult<GeoShapeDocument> {
    let kind = resolve_kind(shape)?;
    debug!("序列化几何值: {}", kind);

    if kind == GeometryKind::GeometryCollection {
        let geometries = members_of(shape, kind)?
            .into_iter()
            .map(shape_to_es)
            .collect::<FrameResult<Vec<_>>>()?;
        return Ok(GeoShapeDocument::Collection {
            es_type: kind.es_type(),
            geometries,
        });
    }

    Ok(GeoShapeDocument::Shape {
        es_type: kind.es_type(),
        coordinates: shape_to_coords(shape, kind)?,
    })
}

fn ring_to_coords(coords: &[Coordinate]) -> Coordinates {
    Coordinates::Nested(coords.iter().map(Coordinates::from).collect())
}

fn shape_to_coords(shape: &dyn GeometryAccess, kind: GeometryKind) -> FrameResult<Coordinates> {
    if kind.is_multi_part() {
        let members = members_of(shape, kind)?
            .into_iter()
            .map(|member| shape_to_coords(member, resolve_kind(member)?))
            .collect::<FrameResult<Vec<_>>>()?;
        return Ok(Coordinates::Nested(members));
    }

    if kind == GeometryKind::Polygon {
        // 外环在前，内环按原顺序跟随
        let exterior = shape
            .exterior()
            .ok_or_else(|| missing_part(shape, kind, "外环"))?;
        let rings = std::iter::once(ring_to_coords(&exterior.coordinates))
            .chain(shape.interiors().iter().map(|hole| ring_to_coords(&hole.coordinates)))
            .collect();
        return Ok(Coordinates::Nested(rings));
    }

    let coords = shape
        .coords()
        .ok_or_else(|| missing_part(shape, kind, "坐标"))?;
    match (kind, coords) {
        (GeometryKind::Point, [coord]) => Ok(Coordinates::from(coord)),
        _ => Ok(ring_to_coords(coords)),
    }
}
