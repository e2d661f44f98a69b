//! Driving directions over a road map, found by A* with straight-line distances as estimates.
use pathgraph::{algorithm::*, graph::*, GraphError};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    fn reversed(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
        }
    }

    fn full_name(self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
        }
    }
}

#[derive(Debug, Clone)]
struct Location {
    name: String,
    x: f64,
    y: f64,
}

impl Location {
    fn dist(&self, other: &Location) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone)]
struct Road {
    name: String,
    direction: Direction,
    length: f64,
}

#[derive(Debug, Default)]
struct RoadMap {
    graph: LabeledGraph<Location, Road>,
    sites: HashMap<String, VertexId>,
}

impl RoadMap {
    fn location(&mut self, name: &str, x: f64, y: f64) -> &mut Self {
        let v = self.graph.add_labeled_vertex(Location {
            name: name.to_string(),
            x,
            y,
        });
        self.sites.insert(name.to_string(), v);
        self
    }

    /// A road in both ways, the way back heading to the opposite direction.
    fn road(&mut self, from: &str, name: &str, length: f64, dir: Direction, to: &str) -> &mut Self {
        let (u, v) = (self.sites[from], self.sites[to]);
        let road = Road {
            name: name.to_string(),
            direction: dir,
            length,
        };
        let back = Road {
            direction: dir.reversed(),
            ..road.clone()
        };
        self.graph.add_labeled_edge(u, v, road).unwrap();
        self.graph.add_labeled_edge(v, u, back).unwrap();
        self
    }

    fn route(&self, from: VertexId, to: VertexId) -> Result<Vec<VertexId>, GraphError> {
        let graph = &self.graph;
        let dest = graph.vertex_label(&to).ok_or(GraphError::VertexNotFound(to))?;
        let cost = AStar {
            weight: |u: VertexId, v: VertexId| {
                graph
                    .edge_label(&u, &v)
                    .map(|r| r.length)
                    .unwrap_or(f64::INFINITY)
            },
            heuristic: |v: VertexId| {
                graph
                    .vertex_label(&v)
                    .map(|l| l.dist(dest))
                    .unwrap_or(0.0)
            },
        };
        let mut plan = ShortestPaths::with_destination(graph, cost, from, to)?;
        Ok(plan.path_to_destination())
    }

    /// Numbered directions through `stops`, merging adjacent segments on the same road and direction.
    fn trip(&self, stops: &[&str]) -> Vec<String> {
        let mut lines = vec![];
        let mut seq = 1;
        for leg in stops.windows(2) {
            let (from, to) = (self.sites[leg[0]], self.sites[leg[1]]);
            let path = self.route(from, to).unwrap();
            if path.is_empty() {
                lines.push(format!("No route from {} to {}.", leg[0], leg[1]));
                continue;
            }
            let mut segments: Vec<(Road, VertexId)> = vec![];
            for hop in path.windows(2) {
                let road = self.graph.edge_label(&hop[0], &hop[1]).unwrap();
                match segments.last_mut() {
                    Some((last, end))
                        if last.name == road.name && last.direction == road.direction =>
                    {
                        last.length += road.length;
                        *end = hop[1];
                    }
                    _ => segments.push((road.clone(), hop[1])),
                }
            }
            let n = segments.len();
            for (i, (road, end)) in segments.into_iter().enumerate() {
                let mut line = format!(
                    "{}. Take {} {} for {:.1} miles",
                    seq,
                    road.name,
                    road.direction.full_name(),
                    road.length
                );
                if i + 1 == n {
                    let site = self.graph.vertex_label(&end).unwrap();
                    line += &format!(" to {}", site.name);
                }
                line.push('.');
                lines.push(line);
                seq += 1;
            }
        }
        lines
    }
}

fn bay_area() -> RoadMap {
    let mut map = RoadMap::default();
    map.location("Berkeley", 0.0, 0.0)
        .location("Emeryville", 1.0, 0.0)
        .location("Oakland", 2.0, 0.0)
        .location("Piedmont", 2.0, 1.0)
        .location("Tilden", 0.0, 2.0)
        .location("Farallon", 30.0, 30.0);
    map.road("Berkeley", "Shattuck", 1.0, Direction::East, "Emeryville")
        .road("Emeryville", "Shattuck", 1.0, Direction::East, "Oakland")
        .road("Oakland", "Grand", 1.0, Direction::North, "Piedmont")
        .road("Berkeley", "Grizzly_Peak", 3.0, Direction::North, "Tilden")
        .road("Tilden", "Skyline", 2.5, Direction::East, "Piedmont");
    map
}

#[test]
fn merged_directions() {
    let map = bay_area();
    assert_eq!(
        map.trip(&["Berkeley", "Piedmont"]),
        vec![
            "1. Take Shattuck east for 2.0 miles.",
            "2. Take Grand north for 1.0 miles to Piedmont.",
        ]
    );
    assert_eq!(
        map.trip(&["Piedmont", "Berkeley"]),
        vec![
            "1. Take Grand south for 1.0 miles.",
            "2. Take Shattuck west for 2.0 miles to Berkeley.",
        ]
    );
}

#[test]
fn numbering_continues_across_stops() {
    let map = bay_area();
    assert_eq!(
        map.trip(&["Berkeley", "Piedmont", "Tilden"]),
        vec![
            "1. Take Shattuck east for 2.0 miles.",
            "2. Take Grand north for 1.0 miles to Piedmont.",
            "3. Take Skyline west for 2.5 miles to Tilden.",
        ]
    );
}

#[test]
fn route_agrees_with_dijkstra() {
    let map = bay_area();
    let graph = &map.graph;
    let weight = |u: VertexId, v: VertexId| {
        graph
            .edge_label(&u, &v)
            .map(|r| r.length)
            .unwrap_or(f64::INFINITY)
    };
    for (from, to) in [("Tilden", "Oakland"), ("Emeryville", "Tilden"), ("Piedmont", "Emeryville")] {
        let (u, v) = (map.sites[from], map.sites[to]);
        let mut dijkstra = ShortestPaths::new(graph, weight, u).unwrap();
        assert_eq!(map.route(u, v).unwrap(), dijkstra.path_to(v));
    }
}

#[test]
fn no_route() {
    let map = bay_area();
    assert_eq!(
        map.trip(&["Berkeley", "Farallon"]),
        vec!["No route from Berkeley to Farallon."]
    );
    assert_eq!(map.route(map.sites["Berkeley"], map.sites["Berkeley"]).unwrap().len(), 1);
    let ghost = VertexId::new(99);
    assert_eq!(
        map.route(ghost, map.sites["Berkeley"]),
        Err(GraphError::VertexNotFound(ghost))
    );
}
