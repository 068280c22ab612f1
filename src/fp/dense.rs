use ndarray::ArrayView2;

/// Converts a binary transaction matrix (one row per transaction, non-zero
/// columns are the items present) into column-index transactions.
pub fn transactions_from_dense(transactions: ArrayView2<i32>) -> Vec<Vec<usize>> {
    transactions
        .outer_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &value)| value != 0)
                .map(|(item, _)| item)
                .collect()
        })
        .collect()
}
