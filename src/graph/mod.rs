mod edge;
pub use edge::MapEdge;

mod node;
pub use node::{EdgeSet, MapNode, SearchCosts};

mod node_list;
pub(crate) use node_list::NodeList;
