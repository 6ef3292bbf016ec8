/// Length of the longest strictly increasing subsequence.
pub fn longest_increasing(nums: &[i64]) -> usize {
    let mut len = vec![1usize; nums.len()];
    for i in 0..nums.len() {
        for j in 0..i {
            if nums[j] < nums[i] {
                len[i] = len[i].max(len[j] + 1);
            }
        }
    }
    len.into_iter().max().unwrap_or(0)
}

/// Fewest wires to remove so that no two of the remaining `(a, b)` wires cross.
pub fn crossing_wires(wires: &[(i64, i64)]) -> usize {
    let mut sorted = wires.to_vec();
    sorted.sort_by_key(|&(a, _)| a);
    let ends: Vec<i64> = sorted.iter().map(|&(_, b)| b).collect();
    wires.len() - longest_increasing(&ends)
}

/// Largest sum of a non-empty contiguous run, `None` for empty input.
pub fn max_subarray(nums: &[i64]) -> Option<i64> {
    let (&first, rest) = nums.split_first()?;
    let mut ending_here = first;
    let mut best = first;
    for &n in rest {
        ending_here = (ending_here + n).max(n);
        best = best.max(ending_here);
    }
    Some(best)
}
