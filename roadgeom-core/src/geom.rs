//! Projection and distance primitives consumed by the segment model.

use std::f64::consts::FRAC_PI_2;

use geo::{Distance, Haversine, Point};

/// Projects a raw stored coordinate (spherical-mercator degrees) to a
/// longitude/latitude point in degrees.
pub fn to_lat_lon(raw: [f64; 2]) -> Point<f64> {
    let lon = raw[0];
    let lat = (2.0 * raw[1].to_radians().exp().atan() - FRAC_PI_2).to_degrees();
    Point::new(lon, lat)
}

/// Great-circle distance between two lon/lat points, in meters.
pub fn distance_m(a: Point<f64>, b: Point<f64>) -> f64 {
    Haversine.distance(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_origin_to_origin() {
        let p = to_lat_lon([0.0, 0.0]);
        assert_eq!(p.x(), 0.0);
        assert!(p.y().abs() < 1e-12);
    }

    #[test]
    fn projects_mercator_y_to_latitude() {
        // ln(tan(pi/4 + 30deg)) in degrees maps back to 60 degrees north.
        let p = to_lat_lon([25.0, 75.456_108_8]);
        assert_eq!(p.x(), 25.0);
        assert!((p.y() - 60.0).abs() < 1e-6);
    }

    #[test]
    fn one_degree_of_longitude_at_equator() {
        let d = distance_m(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert!((d - 111_195.0).abs() < 150.0, "got {d}");
    }
}
