//! 几何能力被配置禁用时的降级行为
//!
//! 能力在进程内只解析一次，因此单独放在一个测试二进制中

use esframe::config::Config;
use esframe::core::{DataFrame, Geometry, Value};
use esframe::geo::{self, GeoCapability};

#[test]
fn test_disabled_capability_degrades_to_false() {
    let config = Config {
        geo_enabled: false,
        ..Config::default()
    };
    assert_eq!(geo::init(&config), GeoCapability::Unavailable);
    assert_eq!(GeoCapability::current(), GeoCapability::Unavailable);

    // 之后的初始化不会改变已固定的能力
    assert_eq!(geo::init(&Config::default()), GeoCapability::Unavailable);

    let df = DataFrame::from_rows(
        vec!["location".to_string()],
        vec![vec![Value::from(Geometry::point(1.0, 2.0))]],
    )
    .expect("构造测试表失败");
    assert!(!geo::is_geo_dataframe(&df));
    let column = df.column("location").expect("列应存在");
    assert!(!geo::is_geo_series(&column));
}
