/// Maximum pay from consultations `(duration, pay)` offered on days `1..=n`.
/// A consultation started on `day` occupies it and the following
/// `duration - 1` days and must finish by day `n`.
pub fn consultation_schedule(jobs: &[(usize, u64)]) -> u64 {
    let n = jobs.len();
    // best[day]: most that can be earned from `day` to the end
    let mut best = vec![0u64; n + 2];

    for day in (1..=n).rev() {
        let (duration, pay) = jobs[day - 1];
        best[day] = best[day + 1];
        if day + duration <= n + 1 {
            best[day] = best[day].max(best[day + duration] + pay);
        }
    }

    best[1]
}

/// 0/1 knapsack over `(weight, value)` items.
pub fn knapsack(items: &[(usize, u64)], capacity: usize) -> u64 {
    let mut best = vec![0u64; capacity + 1];
    for &(weight, value) in items {
        if weight > capacity {
            continue;
        }
        // Descending so each item is used at most once
        for room in (weight..=capacity).rev() {
            best[room] = best[room].max(best[room - weight] + value);
        }
    }
    best[capacity]
}
