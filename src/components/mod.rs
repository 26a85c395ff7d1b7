pub mod controls;
pub mod risk_graph;
