use common::numeric::is_whole;
use common::types::WeightedCycle;
use std::time::Duration;

/// Renders a cycle length: whole values without a fractional part, anything
/// else with one decimal place.
pub fn format_length(length: f64) -> String {
    if is_whole(length) {
        format!("{:.0}", length)
    } else {
        format!("{:.1}", length)
    }
}

pub fn summary_line(length: f64) -> String {
    format!("The length of the shortest cycle is: {}", format_length(length))
}

/// `Cycle: 0 -> 1 -> 2 -> 0`
pub fn path_line(cycle: &WeightedCycle) -> String {
    let vertices: Vec<String> = cycle.vertices().iter().map(|v| v.to_string()).collect();
    format!("Cycle: {}", vertices.join(" -> "))
}

/// Wall time since start-up, labelled.
pub fn elapsed_line(elapsed: Duration) -> String {
    format!("Elapsed: {} ms", elapsed.as_millis())
}
