use road_graph::{prelude::*, GeographicPoint, LocationMap, LocationSet};

fn point(lat: f64, lon: f64) -> GeographicPoint {
	GeographicPoint::new(lat, lon)
}

// A --1-- B --1-- C
// |               |
// 6               1
// |               |
// D ------2------ E
fn grid_graph() -> MapGraph {
	let (a, b, c) = (point(0.0, 0.0), point(0.0, 1.0), point(0.0, 2.0));
	let (d, e) = (point(1.0, 0.0), point(1.0, 2.0));

	let mut graph = MapGraph::new();
	for p in [a, b, c, d, e] {
		assert!(graph.add_vertex(p));
	}
	for (from, to, name, length) in [
		(a, b, "First", 1.0),
		(b, c, "First", 1.0),
		(c, e, "Third", 1.0),
		(a, d, "Second", 6.0),
		(d, e, "Fourth", 2.0),
	] {
		graph.add_edge(from, to, name, "residential", length).unwrap();
		graph.add_edge(to, from, name, "residential", length).unwrap();
	}
	graph
}

/// a plain best-first search driven by the Node API, used to check that the pieces fit together
fn best_first<O: SearchOrder>(
	graph: &MapGraph,
	start: GeographicPoint,
	goal: GeographicPoint,
) -> Option<f64> {
	let goal_node = graph.node(goal)?;
	let mut best = LocationMap::new();
	let mut done = LocationSet::new();
	let mut open = NodeQueue::<O>::new();

	let start_node = graph.node(start)?;
	open.push(start_node.with_costs(0.0, start_node.compute_predicted_cost(goal_node, 0.0)));
	best.insert(start, 0.0);

	while let Some(current) = open.pop() {
		if current == *goal_node {
			return Some(current.cost());
		}
		if !done.insert(current.key()) {
			continue;
		}
		for neighbor in graph.neighbors(current.location())? {
			let cost = current.try_compute_cost(neighbor)?;
			if best.get(&neighbor.key()).map_or(true, |&prev| cost < prev) {
				best.insert(neighbor.key(), cost);
				let predicted = neighbor.compute_predicted_cost(goal_node, cost);
				open.push(neighbor.with_costs(cost, predicted));
			}
		}
	}
	None
}

#[test]
fn uniform_cost_search() {
	let graph = grid_graph();
	assert_eq!(
		best_first::<ByCost>(&graph, point(0.0, 0.0), point(1.0, 0.0)),
		Some(5.0)
	);
	assert_eq!(
		best_first::<ByCost>(&graph, point(0.0, 0.0), point(0.0, 0.0)),
		Some(0.0)
	);
}

#[test]
fn a_star_search() {
	let graph = grid_graph();
	assert_eq!(
		best_first::<ByPredictedCost>(&graph, point(0.0, 0.0), point(1.0, 0.0)),
		Some(5.0)
	);
	assert_eq!(
		best_first::<ByPredictedCost>(&graph, point(1.0, 2.0), point(0.0, 1.0)),
		Some(2.0)
	);
}

#[test]
fn unreachable_goal() {
	let mut graph = grid_graph();
	let island = point(9.0, 9.0);
	graph.add_vertex(island);
	assert_eq!(best_first::<ByCost>(&graph, point(0.0, 0.0), island), None);
}

#[test]
fn graph_nodes_keep_their_costs() {
	let graph = grid_graph();
	best_first::<ByCost>(&graph, point(0.0, 0.0), point(1.0, 2.0));
	assert!(graph.iter().all(|node| node.cost() == 0.0));
}

#[test]
fn wrappers_see_graph_edges() {
	let mut graph = grid_graph();
	let (a, e) = (point(0.0, 0.0), point(1.0, 2.0));
	let wrapper = graph.node(a).unwrap().with_cost(2.0);
	assert_eq!(wrapper.neighbors().len(), 2);

	graph.add_edge(a, e, "Shortcut", "primary", 0.5).unwrap();
	assert_eq!(wrapper.neighbors().len(), 3);
	assert_eq!(wrapper.compute_cost(graph.node(e).unwrap()), 2.5);
}

#[test]
fn display() {
	let graph = grid_graph();
	let node = graph.node(point(0.0, 1.0)).unwrap();
	assert_eq!(
		&format!("{}", node),
		"[NODE at location (Lat: 0, Lon: 1) intersects streets: First]"
	);
	let node = graph.node(point(0.0, 0.0)).unwrap();
	assert_eq!(&node.road_names_as_string(), "(First, Second)");
}
