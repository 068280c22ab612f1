/// Calls `callback` with every non-empty combination of the indices `0..n`,
/// smallest sizes first and lexicographic within a size.
pub fn for_each_subset<F>(n: usize, mut callback: F)
where
    F: FnMut(&[usize]),
{
    let mut current = Vec::with_capacity(n);
    for k in 1..=n {
        generate_combinations_recursive(n, k, 0, &mut current, &mut callback);
    }
}

pub fn generate_combinations_recursive<F>(
    n: usize,
    k: usize,
    start: usize,
    current: &mut Vec<usize>,
    callback: &mut F,
) where
    F: FnMut(&[usize]),
{
    if current.len() == k {
        callback(current);
        return;
    }

    // Not enough indices left to fill the combination.
    if n - start < k - current.len() {
        return;
    }

    for i in start..n {
        current.push(i);
        generate_combinations_recursive(n, k, i + 1, current, callback);
        current.pop();
    }
}
