pub mod load_graph;
