/*!
# Graph Algorithms

Algorithms are provided as extension traits with blanket implementations over
[`Incidence`], so every representation gets them for free:
```rust
use lgraphs::{prelude::*, algo::*};

let mut graph = AdjacencyMapGraph::new_undirected();
let [a, b, c] = ["a", "b", "c"].map(|x| graph.insert_vertex(x));
graph.insert_edge(a, b, 2u32).unwrap();
graph.insert_edge(b, c, 3).unwrap();
graph.insert_edge(a, c, 7).unwrap();

assert_eq!(graph.breadth_first_search(a).unwrap().len(), 3);
assert_eq!(graph.kruskal().unwrap().len(), 2);
assert_eq!(graph.dijkstra(a).unwrap().cost(c), Some(5));
```

- [`Traversal`]: breadth-first and depth-first search,
- [`MinimumSpanningTree`]: Kruskal and Prim-Jarnik (requires [`Weighted`] edges),
- [`ShortestPath`]: Dijkstra and shortest-path trees (requires [`Weighted`] edges).
*/

mod mst;
mod shortest_path;
mod traversal;

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::{error::*, pq::*, prelude::*, utils::*};

pub use mst::*;
pub use shortest_path::*;
pub use traversal::*;

/// Queue key of Prim-Jarnik and Dijkstra. `Unknown` orders after every `Known` value,
/// including `Known(W::max_value())`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Tentative<W> {
    Known(W),
    Unknown,
}
