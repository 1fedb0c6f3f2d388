use crate::error::NetworkResult;
use crate::network::builder::NetworkBuilder;
use crate::network::graph::RoadGraph;

/// Default source city for traversals and single-source reports
pub const DEFAULT_SOURCE: &str = "Київ";

/// Road distances (km) between Ukrainian regional centres.
///
/// Rows may repeat a road from the other endpoint; the Житомир-Луцьк road is
/// declared twice with different distances and the later row (390) wins.
pub const UKRAINE_ROADS: &[(&str, &[(&str, f64)])] = &[
    (
        "Київ",
        &[
            ("Чернігів", 145.0),
            ("Житомир", 132.0),
            ("Черкаси", 198.0),
            ("Полтава", 345.0),
        ],
    ),
    (
        "Чернігів",
        &[("Київ", 145.0), ("Суми", 230.0), ("Черкаси", 180.0)],
    ),
    (
        "Житомир",
        &[("Київ", 132.0), ("Рівне", 245.0), ("Вінниця", 310.0)],
    ),
    (
        "Черкаси",
        &[("Київ", 198.0), ("Кропивницький", 250.0), ("Чернігів", 180.0)],
    ),
    (
        "Полтава",
        &[("Київ", 345.0), ("Харків", 290.0), ("Суми", 220.0)],
    ),
    (
        "Суми",
        &[("Чернігів", 230.0), ("Харків", 150.0), ("Полтава", 220.0)],
    ),
    (
        "Рівне",
        &[("Луцьк", 270.0), ("Житомир", 245.0), ("Тернопіль", 315.0)],
    ),
    (
        "Вінниця",
        &[("Житомир", 310.0), ("Хмельницький", 180.0), ("Чернівці", 420.0)],
    ),
    (
        "Кропивницький",
        &[("Черкаси", 250.0), ("Миколаїв", 160.0), ("Дніпро", 310.0)],
    ),
    (
        "Харків",
        &[("Суми", 150.0), ("Полтава", 290.0), ("Дніпро", 345.0)],
    ),
    (
        "Луцьк",
        &[("Рівне", 270.0), ("Житомир", 390.0), ("Тернопіль", 340.0)],
    ),
    (
        "Хмельницький",
        &[("Вінниця", 180.0), ("Тернопіль", 120.0), ("Чернівці", 220.0)],
    ),
    (
        "Чернівці",
        &[
            ("Львів", 385.0),
            ("Івано-Франківськ", 250.0),
            ("Хмельницький", 220.0),
        ],
    ),
    (
        "Тернопіль",
        &[("Луцьк", 340.0), ("Рівне", 315.0), ("Хмельницький", 120.0)],
    ),
];

/// Build the built-in Ukrainian road network
pub fn ukraine() -> NetworkResult<RoadGraph> {
    NetworkBuilder::from_adjacency(
        UKRAINE_ROADS
            .iter()
            .map(|(city, connections)| (*city, connections.iter().copied())),
    )
}
