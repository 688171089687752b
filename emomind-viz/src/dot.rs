//! Graphviz DOT rendering of the mood graph.

use std::fmt::Write;

use emomind_core::MoodController;

/// Render the full mood graph as Graphviz DOT source.
///
/// Every state becomes a node (current one filled lightblue), and every
/// transition edge — the complete graph, self-loops included — becomes a
/// directed edge. Consumes only the controller's introspection surface.
pub fn render_mood_graph(fsm: &MoodController) -> String {
    let current = fsm.state();
    let mut dot = String::new();

    dot.push_str("digraph mood {\n");
    dot.push_str("    rankdir=LR;\n");

    for mood in fsm.all_states() {
        if mood == current {
            let _ = writeln!(
                dot,
                "    {} [style=filled, color=lightblue];",
                mood.name()
            );
        } else {
            let _ = writeln!(dot, "    {};", mood.name());
        }
    }

    for (src, dst) in fsm.transition_edges() {
        let _ = writeln!(dot, "    {} -> {} [arrowhead=vee];", src.name(), dst.name());
    }

    dot.push_str("}\n");
    dot
}
