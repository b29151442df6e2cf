//! 测试数据构造

use esframe::core::{Coordinate, DataFrame, Geometry, LineString, Polygon, Value};

/// 构造带乱序索引的测试表
///
/// | index | name | price |
/// |-------|------|-------|
/// | 4     | d    | 12.5  |
/// | 1     | a    | 3     |
/// | 3     | c    | null  |
/// | 0     | e    | 7     |
/// | 2     | b    | 3     |
pub fn shuffled_frame() -> DataFrame {
    DataFrame::with_index(
        vec![4, 1, 3, 0, 2],
        vec!["name".to_string(), "price".to_string()],
        vec![
            vec![Value::from("d"), Value::Float(12.5)],
            vec![Value::from("a"), Value::Int(3)],
            vec![Value::from("c"), Value::Null],
            vec![Value::from("e"), Value::Int(7)],
            vec![Value::from("b"), Value::Int(3)],
        ],
    )
    .expect("构造测试表失败")
}

pub fn ring(points: &[(f64, f64)]) -> LineString {
    points.iter().copied().collect()
}

pub fn unit_square() -> LineString {
    ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)])
}

pub fn polygon_with_hole() -> Polygon {
    Polygon::with_holes(
        ring(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 0.0)]),
        vec![ring(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)])],
    )
}

/// 各列类型混合的几何表
pub fn geo_frame() -> DataFrame {
    DataFrame::from_rows(
        vec!["city".to_string(), "location".to_string()],
        vec![
            vec![Value::from("Amsterdam"), Value::from(Geometry::point(4.9, 52.37))],
            vec![
                Value::from("Berlin"),
                Value::from(Geometry::Point(Coordinate::new(13.4, 52.52))),
            ],
        ],
    )
    .expect("构造测试表失败")
}
