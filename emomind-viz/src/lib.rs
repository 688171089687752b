//! Visualization for the EmoMind mood machine.
//!
//! Renders the controller's introspection surface (`all_states`,
//! `transition_edges`, `state`) as a Graphviz DOT digraph with the
//! current node highlighted. No assumption about the final rendering
//! format beyond DOT source.

pub mod color;
pub mod dot;

pub use dot::render_mood_graph;
