//! Bundled example graphs
//!
//! Each dataset is a small real-world scenario with labelled vertices. They
//! are built in memory on request; nothing is read from disk.

use std::collections::BTreeMap;

use graphwalk_core::error::{GraphError, Result};
use graphwalk_core::graph::{Graph, VertexId};

/// A named example graph with vertex labels
#[derive(Debug, Clone)]
pub struct Dataset {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Unit of the edge weights, for human output
    pub unit: &'static str,
    pub graph: Graph,
    labels: BTreeMap<VertexId, &'static str>,
}

impl Dataset {
    fn new(
        name: &'static str,
        title: &'static str,
        description: &'static str,
        unit: &'static str,
        graph: Graph,
        labels: &[&'static str],
    ) -> Self {
        let labels = labels
            .iter()
            .enumerate()
            .map(|(vertex, label)| (vertex as VertexId, *label))
            .collect();
        Self {
            name,
            title,
            description,
            unit,
            graph,
            labels,
        }
    }

    pub fn label(&self, vertex: VertexId) -> Option<&'static str> {
        self.labels.get(&vertex).copied()
    }

    /// `"3 (Hospital)"`, or just `"3"` for unlabelled vertices
    pub fn describe(&self, vertex: VertexId) -> String {
        match self.label(vertex) {
            Some(label) => format!("{} ({})", vertex, label),
            None => vertex.to_string(),
        }
    }

    /// Error unless `vertex` belongs to the graph
    pub fn require_vertex(&self, vertex: VertexId) -> Result<()> {
        if self.graph.contains(vertex) {
            Ok(())
        } else {
            Err(GraphError::VertexNotFound { vertex })
        }
    }
}

/// Names accepted by [`load`], in listing order
pub const NAMES: &[&str] = &[
    "city-map",
    "computer-network",
    "social-network",
    "dependencies",
    "game-map",
    "currency",
    "power-grid",
];

/// Build the dataset called `name`
pub fn load(name: &str) -> Result<Dataset> {
    let dataset = match name {
        "city-map" => city_map(),
        "computer-network" => computer_network(),
        "social-network" => social_network(),
        "dependencies" => dependencies(),
        "game-map" => game_map(),
        "currency" => currency(),
        "power-grid" => power_grid(),
        other => return Err(GraphError::not_found("dataset", other)),
    };
    tracing::debug!(
        dataset = dataset.name,
        vertices = dataset.graph.vertex_count(),
        directed = dataset.graph.is_directed(),
        "dataset_loaded"
    );
    Ok(dataset)
}

/// Every bundled dataset
pub fn all() -> Result<Vec<Dataset>> {
    NAMES.iter().map(|name| load(name)).collect()
}

fn city_map() -> Dataset {
    let graph = Graph::from_edges(
        false,
        [
            (0, 1, 2.5),
            (0, 2, 3.0),
            (0, 3, 1.8),
            (0, 18, 0.5),
            (1, 10, 1.2),
            (1, 16, 0.8),
            (1, 13, 1.5),
            (2, 9, 0.6),
            (2, 12, 2.0),
            (2, 8, 1.5),
            (3, 14, 0.4),
            (3, 11, 2.2),
            (4, 6, 3.5),
            (4, 17, 1.0),
            (4, 7, 2.8),
            (5, 11, 1.5),
            (5, 15, 2.0),
            (5, 0, 12.0),
            (6, 15, 1.8),
            (6, 10, 2.5),
            (7, 8, 0.7),
            (7, 16, 1.3),
            (8, 9, 0.5),
            (9, 12, 1.8),
            (10, 11, 0.9),
            (11, 19, 1.1),
            (12, 13, 0.8),
            (13, 14, 0.6),
            (14, 18, 1.0),
            (15, 19, 2.3),
            (16, 17, 1.4),
            (17, 18, 1.6),
            (18, 19, 0.7),
        ],
    );
    Dataset::new(
        "city-map",
        "City map",
        "Distances between 20 points of interest in a city",
        "km",
        graph,
        &[
            "Downtown",
            "Mall",
            "University",
            "Hospital",
            "Park",
            "Airport",
            "Stadium",
            "Theater",
            "Museum",
            "Library",
            "Restaurant",
            "Hotel",
            "School",
            "Market",
            "Pharmacy",
            "Gas Station",
            "Cinema",
            "Gym",
            "Bank",
            "Post Office",
        ],
    )
}

fn computer_network() -> Dataset {
    let graph = Graph::from_edges(
        true,
        [
            (0, 1, 10.0),
            (0, 2, 15.0),
            (0, 3, 12.0),
            (1, 4, 5.0),
            (1, 5, 8.0),
            (2, 6, 6.0),
            (2, 7, 7.0),
            (3, 8, 9.0),
            (3, 9, 11.0),
            (4, 10, 3.0),
            (5, 11, 4.0),
            (6, 12, 2.0),
            (7, 13, 5.0),
            (8, 14, 6.0),
            (9, 15, 4.0),
            (1, 2, 20.0),
            (2, 3, 18.0),
            (4, 6, 15.0),
            (5, 7, 14.0),
            (10, 12, 25.0),
        ],
    );
    Dataset::new(
        "computer-network",
        "Computer network",
        "Latency between servers, from the core router down to edge hosts",
        "ms",
        graph,
        &[
            "Core", "Region-1", "Region-2", "Region-3", "Edge-1a", "Edge-1b", "Edge-2a",
            "Edge-2b", "Edge-3a", "Edge-3b", "Host-1", "Host-2", "Host-3", "Host-4", "Host-5",
            "Host-6",
        ],
    )
}

fn social_network() -> Dataset {
    let friendships = [
        (0, 1),
        (0, 2),
        (1, 3),
        (2, 3),
        (3, 4),
        (5, 6),
        (5, 7),
        (6, 8),
        (7, 8),
        (8, 9),
        (10, 11),
        (10, 12),
        (11, 13),
        (12, 13),
        (13, 14),
        (15, 16),
        (15, 17),
        (16, 18),
        (17, 18),
        (18, 19),
        (4, 5),
        (9, 10),
        (14, 15),
        (19, 0),
        (2, 7),
        (6, 11),
        (12, 16),
    ];
    let graph = Graph::from_edges(false, friendships.map(|(a, b)| (a, b, 1.0)));
    Dataset::new(
        "social-network",
        "Social network",
        "Friendships between 20 people; BFS finds degrees of separation",
        "hops",
        graph,
        &[
            "Alice", "Bruno", "Carlos", "Diana", "Eduardo", "Fernanda", "Gabriel", "Helena",
            "Igor", "Julia", "Lucas", "Maria", "Nicolas", "Olivia", "Pedro", "Quesia", "Rafael",
            "Sofia", "Thiago", "Vitoria",
        ],
    )
}

fn dependencies() -> Dataset {
    let requires = [
        (0, 1),
        (0, 2),
        (1, 3),
        (1, 4),
        (2, 5),
        (2, 4),
        (3, 6),
        (5, 4),
        (5, 7),
        (6, 8),
        (7, 4),
        (9, 10),
        (10, 11),
        (11, 12),
        (12, 13),
        (13, 14),
        (14, 15),
        (15, 16),
        (16, 17),
        (17, 9),
    ];
    let graph = Graph::from_edges(true, requires.map(|(a, b)| (a, b, 1.0)));
    Dataset::new(
        "dependencies",
        "Package dependencies",
        "Package requirements; packages 9 to 17 form a circular dependency",
        "links",
        graph,
        &[
            "app", "web-framework", "database", "http-client", "logger", "conn-pool", "ssl",
            "thread-mgr", "crypto", "pkg-a", "pkg-b", "pkg-c", "pkg-d", "pkg-e", "pkg-f",
            "pkg-g", "pkg-h", "pkg-i",
        ],
    )
}

fn game_map() -> Dataset {
    let graph = Graph::from_edges(
        false,
        [
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 3, 3.0),
            (0, 4, 5.0),
            (4, 5, 5.0),
            (5, 6, 5.0),
            (6, 7, 3.0),
            (1, 8, 10.0),
            (8, 9, 10.0),
            (9, 10, 10.0),
            (10, 11, 5.0),
            (3, 12, 15.0),
            (12, 13, 15.0),
            (13, 14, 15.0),
            (7, 11, 3.0),
            (11, 14, 5.0),
            (6, 11, 5.0),
            (5, 8, 10.0),
            (14, 15, 3.0),
            (15, 16, 1.0),
            (16, 17, 3.0),
            (17, 0, 5.0),
        ],
    );
    Dataset::new(
        "game-map",
        "Game map",
        "Travel cost between regions by terrain (road 1, forest 5, mountain 10, swamp 15)",
        "turns",
        graph,
        &[
            "Village",
            "Town",
            "Harbor",
            "Lighthouse",
            "Forest-1",
            "Forest-2",
            "Glade",
            "Camp",
            "Foothills",
            "Mountain Pass",
            "Summit",
            "Valley",
            "Swamp-1",
            "Swamp-2",
            "Ruins",
            "Temple",
            "Portal",
            "Castle",
        ],
    )
}

fn currency() -> Dataset {
    let rates = [
        (0, 1, 0.85),
        (0, 2, 5.30),
        (0, 3, 0.75),
        (0, 4, 110.5),
        (1, 0, 1.18),
        (1, 2, 6.24),
        (1, 3, 0.88),
        (1, 4, 130.2),
        (2, 0, 0.189),
        (2, 1, 0.160),
        (2, 3, 0.142),
        (2, 4, 20.85),
        (3, 0, 1.33),
        (3, 1, 1.14),
        (3, 2, 7.05),
        (3, 4, 147.0),
        (4, 0, 0.00905),
        (4, 1, 0.00768),
        (4, 2, 0.0480),
        (4, 3, 0.00680),
        (0, 5, 0.92),
        (5, 0, 1.09),
        (0, 6, 1.35),
        (6, 0, 0.74),
        (0, 7, 1.27),
        (7, 0, 0.79),
        (0, 8, 7.85),
        (8, 0, 0.127),
        (0, 9, 10.5),
        (9, 0, 0.095),
        (0, 10, 0.91),
        (10, 0, 1.10),
        (0, 11, 16.8),
        (11, 0, 0.060),
        (0, 12, 4.32),
        (12, 0, 0.231),
        (0, 13, 1.41),
        (13, 0, 0.709),
        (0, 14, 82.5),
        (14, 0, 0.012),
        (0, 15, 3.67),
        (15, 0, 0.272),
        (5, 6, 1.47),
        (6, 7, 0.94),
        (7, 5, 0.73),
    ];
    // converting along a path multiplies rates, so -ln(rate) turns a
    // profitable loop into a negative cycle
    let graph = Graph::from_edges(true, rates.map(|(a, b, rate)| (a, b, -f64::ln(rate))));
    Dataset::new(
        "currency",
        "Currency market",
        "Exchange rates as -ln(rate); a negative cycle is an arbitrage opportunity",
        "-ln(rate)",
        graph,
        &[
            "USD", "EUR", "BRL", "GBP", "JPY", "CHF", "AUD", "CAD", "HKD", "SEK", "SGD", "MXN",
            "PLN", "NZD", "INR", "AED",
        ],
    )
}

fn power_grid() -> Dataset {
    let graph = Graph::from_edges(
        false,
        [
            (0, 1, 12.0),
            (0, 2, 15.0),
            (1, 2, 8.0),
            (1, 3, 20.0),
            (2, 3, 18.0),
            (3, 4, 25.0),
            (3, 5, 30.0),
            (4, 5, 22.0),
            (4, 6, 28.0),
            (5, 6, 24.0),
            (6, 7, 35.0),
            (6, 8, 40.0),
            (7, 8, 32.0),
            (7, 9, 38.0),
            (8, 9, 36.0),
            (0, 4, 45.0),
            (1, 5, 42.0),
            (2, 6, 48.0),
            (3, 7, 50.0),
            (5, 9, 44.0),
            (9, 10, 30.0),
            (10, 11, 26.0),
            (11, 12, 28.0),
            (12, 13, 33.0),
            (13, 14, 29.0),
            (14, 15, 31.0),
            (15, 16, 27.0),
            (16, 17, 34.0),
            (17, 0, 55.0),
            (10, 6, 37.0),
            (12, 8, 41.0),
        ],
    );
    Dataset::new(
        "power-grid",
        "Power grid",
        "Cost of laying cable between towns; the MST is the cheapest full grid",
        "k$",
        graph,
        &[
            "Capital",
            "City-A",
            "City-B",
            "City-C",
            "City-D",
            "City-E",
            "City-F",
            "Village-G",
            "Village-H",
            "Village-I",
            "District-J",
            "District-K",
            "Hamlet-L",
            "Hamlet-M",
            "Farm-N",
            "Ranch-O",
            "Homestead-P",
            "Outpost-Q",
        ],
    )
}
