/// Reconstruct the path leading to `target` by walking predecessor links back to the source
/// Returns node indices ordered from the source, excluding `target` itself
/// parents: immediate predecessor of each node, None for the source and unreached nodes
pub(crate) fn predecessor_path(parents: &[Option<usize>], target: usize) -> Vec<usize> {

    let mut path = Vec::new();
    let mut current = parents.get(target).copied().flatten();

    // Trace back towards the source - a valid tree never needs more than len steps
    while let Some(index) = current {
        if path.len() >= parents.len() {
            break;
        }
        path.push(index);
        current = parents.get(index).copied().flatten();
    }

    path.reverse();
    path
}
