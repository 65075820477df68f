//! Longest increasing subsequence, used to minimize move edits
//!
//! Retained nodes that form an increasing run of old positions keep their
//! relative order and need no move edit; everything outside the run moves.

/// Return the positions (indices into `seq`) of one longest strictly
/// increasing subsequence of `seq`.
pub fn longest_increasing_subsequence(seq: &[usize]) -> Vec<usize> {
    if seq.is_empty() {
        return Vec::new();
    }

    // tails[k] = index into seq of the smallest tail of any increasing
    // subsequence of length k + 1
    let mut tails: Vec<usize> = Vec::with_capacity(seq.len());
    let mut parent: Vec<Option<usize>> = vec![None; seq.len()];

    for (i, &value) in seq.iter().enumerate() {
        let pos = tails.partition_point(|&t| seq[t] < value);
        if pos > 0 {
            parent[i] = Some(tails[pos - 1]);
        }
        if pos == tails.len() {
            tails.push(i);
        } else {
            tails[pos] = i;
        }
    }

    let mut result = Vec::with_capacity(tails.len());
    let mut cursor = tails.last().copied();
    while let Some(i) = cursor {
        result.push(i);
        cursor = parent[i];
    }
    result.reverse();
    result
}
