//! Text rendering of solver output

/// Render a path as `(A -> B -> ... -> terminal)`
/// `path` holds node indices from the source, excluding the terminal node.
/// An empty path renders as an empty string: the node is either the source or unreachable.
/// Indices without a label are skipped.
pub fn format_path(path: &[usize], labels: &[char], terminal_label: char) -> String {

    let steps: Vec<String> = path.iter()
        .filter_map(|&index| labels.get(index))
        .map(char::to_string)
        .collect();

    if steps.is_empty() {
        return String::new();
    }
    format!("({} -> {terminal_label})", steps.join(" -> "))
}
