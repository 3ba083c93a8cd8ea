//! Largest strongly connected set of a count matrix.

use nalgebra::DMatrix;
use tracing::debug;

use crate::matrix::CountModel;

/// Returns the largest strongly connected set of states, as sorted internal
/// indices into the count matrix.
///
/// Two states belong to the same set when each is reachable from the other
/// along edges `i -> j` with `counts[i][j] > 0`. Among the strongly
/// connected components the one with the most states wins; ties are broken
/// by total count mass inside the component.
pub fn largest_connected_set(counts: &DMatrix<f64>) -> Vec<usize> {
    let n = counts.nrows();
    if n == 0 {
        return Vec::new();
    }

    let mut adjacency = vec![Vec::new(); n];
    let mut reverse = vec![Vec::new(); n];
    for i in 0..n {
        for j in 0..n {
            if counts[(i, j)] > 0.0 {
                adjacency[i].push(j);
                reverse[j].push(i);
            }
        }
    }

    let components = strongly_connected_components(&adjacency, &reverse);

    let mut best: Option<(usize, f64, &Vec<usize>)> = None;
    for component in &components {
        let mass: f64 = component
            .iter()
            .map(|&i| component.iter().map(|&j| counts[(i, j)]).sum::<f64>())
            .sum();
        let candidate = (component.len(), mass, component);
        let better = match best {
            None => true,
            Some((len, m, _)) => {
                component.len() > len || (component.len() == len && mass > m)
            }
        };
        if better {
            best = Some(candidate);
        }
    }

    let mut set = best.map(|(_, _, c)| c.clone()).unwrap_or_default();
    set.sort_unstable();
    set
}

/// Restricts a count model to its largest strongly connected set.
///
/// The returned model's `state_symbols` map back to the original labels of
/// the retained states. An all-zero matrix degenerates to single-state
/// components; the caller decides whether a single surviving state is
/// usable (it carries no non-stationary process).
pub fn restrict_to_largest_connected(model: &CountModel) -> CountModel {
    let set = largest_connected_set(model.counts());
    debug!(
        lagtime = model.lagtime(),
        n_states = model.n_states(),
        n_connected = set.len(),
        "restricted to largest connected set"
    );
    model.submodel(&set)
}

/// Kosaraju's algorithm, iterative in both passes.
fn strongly_connected_components(
    adjacency: &[Vec<usize>],
    reverse: &[Vec<usize>],
) -> Vec<Vec<usize>> {
    let n = adjacency.len();

    // Pass 1: record nodes in order of DFS completion.
    let mut visited = vec![false; n];
    let mut finish_order = Vec::with_capacity(n);
    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
        while let Some(frame) = stack.last_mut() {
            let (node, child) = *frame;
            if child < adjacency[node].len() {
                frame.1 += 1;
                let next = adjacency[node][child];
                if !visited[next] {
                    visited[next] = true;
                    stack.push((next, 0));
                }
            } else {
                finish_order.push(node);
                stack.pop();
            }
        }
    }

    // Pass 2: DFS the reversed graph in reverse finish order.
    let mut assigned = vec![false; n];
    let mut components = Vec::new();
    for &start in finish_order.iter().rev() {
        if assigned[start] {
            continue;
        }
        assigned[start] = true;
        let mut component = vec![start];
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            for &next in &reverse[node] {
                if !assigned[next] {
                    assigned[next] = true;
                    component.push(next);
                    stack.push(next);
                }
            }
        }
        components.push(component);
    }

    components
}
