//! Built-in sample zones, used when the configuration does not supply any

use super::zone::{Report, Zone};
use crate::geometry::Coordinate;

fn ring(points: &[[f64; 2]]) -> Vec<Coordinate> {
    points.iter().copied().map(Coordinate::from).collect()
}

fn report(kind: &str, max_height: &str, density: &str) -> Report {
    let mut report = Report::new();
    report.insert("type".to_string(), kind.to_string());
    report.insert("maxHeight".to_string(), max_height.to_string());
    report.insert("density".to_string(), density.to_string());
    report
}

pub fn builtin_zones() -> Vec<Zone> {
    vec![
        Zone::new(
            "zone1",
            "Commercial Zone",
            "#ff5733",
            &ring(&[
                [72.8695, 19.3700],
                [72.8680, 19.3685],
                [72.8692, 19.3668],
                [72.8725, 19.3663],
                [72.8728, 19.3685],
            ]),
            report("Commercial", "50m", "High"),
        ),
        Zone::new(
            "zone2",
            "Residential Zone",
            "#ff5733",
            &ring(&[
                [72.8785, 19.3665],
                [72.8768, 19.3648],
                [72.8772, 19.3625],
                [72.8810, 19.3623],
                [72.8815, 19.3650],
            ]),
            report("Residential", "10m", "Low"),
        ),
        Zone::new(
            "zone3",
            "Agricultural Zone",
            "#ffcc00",
            &ring(&[
                [72.8740, 19.3620],
                [72.8722, 19.3602],
                [72.8748, 19.3585],
                [72.8765, 19.3583],
                [72.8768, 19.3610],
            ]),
            report("Agricultural", "5m", "Medium"),
        ),
        Zone::new(
            "zone4",
            "Industrial Zone",
            "#3366ff",
            &ring(&[
                [72.8805, 19.3720],
                [72.8788, 19.3695],
                [72.8792, 19.3678],
                [72.8835, 19.3673],
                [72.8840, 19.3705],
            ]),
            report("Industrial", "80m", "Very High"),
        ),
    ]
}
