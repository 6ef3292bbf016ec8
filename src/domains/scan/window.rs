/// Largest sum over any `k` consecutive values, sliding a running window.
/// `None` when `k` is zero or longer than the input.
pub fn window_sum_max(nums: &[i64], k: usize) -> Option<i64> {
    if k == 0 || k > nums.len() {
        return None;
    }
    let mut window: i64 = nums[..k].iter().sum();
    let mut best = window;
    for i in k..nums.len() {
        window += nums[i] - nums[i - k];
        best = best.max(window);
    }
    Some(best)
}

/// Same answer as [`window_sum_max`], computed from a prefix-sum table.
pub fn window_sum_max_prefix(nums: &[i64], k: usize) -> Option<i64> {
    if k == 0 || k > nums.len() {
        return None;
    }
    let mut prefix = vec![0i64; nums.len() + 1];
    for (i, n) in nums.iter().enumerate() {
        prefix[i + 1] = prefix[i] + n;
    }
    (0..=nums.len() - k).map(|i| prefix[i + k] - prefix[i]).max()
}
