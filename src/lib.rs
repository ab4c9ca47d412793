/*!
`lgraphs` is a graph data structure & algorithms library for **l**abelled graphs: every vertex
and every edge carries a payload of a user-chosen type.

# Representation

Vertices and edges are addressed through opaque handles, [`Vertex`] and [`Edge`]. A handle
remembers the graph that issued it and a generation counter, so using it on another graph, or
after its element was removed, fails with a [`GraphError`](error::GraphError) instead of
silently touching an unrelated element.

Graphs are either **directed** or **undirected**; the choice is made at construction time
(see [`GraphNew`](ops::GraphNew)). Parallel edges are rejected, self-loops are allowed.

### Available Representations

See the [`repr`] module for details on the storage backends:

- [`EdgeListGraph`](crate::repr::EdgeListGraph): vertex and edge lists only,
- [`AdjacencyMatrixGraph`](crate::repr::AdjacencyMatrixGraph): `O(1)` edge lookup at `O(n^2)` space,
- [`AdjacencyMapGraph`](crate::repr::AdjacencyMapGraph): per-vertex hash maps of incident edges.

All three implement the same traits from [`ops`] and behave identically; they only differ in
the cost of each operation.

# Usage

There are *4* core submodules you probably want to interact with:
- [`prelude`] includes the handles, the basic graph operation traits and all representations,
- [`algo`] includes algorithm traits that are implemented on graphs itself: BFS/DFS
  (`graph.breadth_first_search(v)`), minimum spanning trees (`graph.kruskal()`) and
  shortest paths (`graph.dijkstra(v)`),
- [`pq`] includes the binary-heap priority queues used by the algorithms,
- [`utils`] includes the union-find forest [`UpTreeDisjointSetForest`](utils::UpTreeDisjointSetForest) and other helpers.

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use lgraphs::{prelude::*, algo::*};

let mut graph = AdjacencyMapGraph::new_directed();
let berlin = graph.insert_vertex("Berlin");
let hamburg = graph.insert_vertex("Hamburg");
let road = graph.insert_edge(berlin, hamburg, 289u32).unwrap();

assert_eq!(graph.opposite(berlin, road).unwrap(), hamburg);
assert_eq!(graph.dijkstra(berlin).unwrap().cost(hamburg), Some(289));
assert!(!graph.dijkstra(hamburg).unwrap().is_reachable(berlin));
```

# Logging

Algorithms emit [`tracing`](https://docs.rs/tracing) events: a `debug` summary when they finish
and `trace` events for individual steps. Install any subscriber to see them.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod ops;
pub mod pq;
pub mod repr;
pub(crate) mod testing;
pub mod utils;
pub mod vertex;

pub use edge::Edge;
pub use vertex::Vertex;

/// `lgraphs::prelude` includes the handles, all basic graph operation traits, the error types
/// as well as all implemented representations.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{ForestError, GraphError, QueueError},
        ops::*,
        pq::{HeapAdaptablePriorityQueue, HeapPriorityQueue, PriorityQueue},
        repr::*,
        vertex::*,
    };
}
