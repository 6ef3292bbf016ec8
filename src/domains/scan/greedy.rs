/// Wood collected cutting one tree per day, each tree `(height, growth)`
/// regrowing from zero. Slow growers are cut first so fast growers keep growing.
pub fn tree_harvest(trees: &[(u64, u64)]) -> u64 {
    let mut by_growth = trees.to_vec();
    by_growth.sort_by_key(|&(_, growth)| growth);
    by_growth
        .iter()
        .enumerate()
        .map(|(day, &(height, growth))| height + growth * day as u64)
        .sum()
}

/// Area of the smallest roof over pillars `(x, height)` (width one each)
/// that never dips between two pillars.
pub fn warehouse_roof(pillars: &[(i64, i64)]) -> i64 {
    if pillars.is_empty() {
        return 0;
    }
    let mut sorted = pillars.to_vec();
    sorted.sort_by_key(|&(x, _)| x);

    // First pillar of maximum height
    let mut peak = 0;
    for (i, &(_, h)) in sorted.iter().enumerate() {
        if h > sorted[peak].1 {
            peak = i;
        }
    }

    let mut area = sorted[peak].1;

    let mut height = sorted[0].1;
    for i in 1..=peak {
        area += height * (sorted[i].0 - sorted[i - 1].0);
        height = height.max(sorted[i].1);
    }

    let last = sorted.len() - 1;
    height = sorted[last].1;
    for i in (peak..last).rev() {
        area += height * (sorted[i + 1].0 - sorted[i].0);
        height = height.max(sorted[i].1);
    }

    area
}

/// Whether `n` is a sum of distinct powers of three (zero is not).
/// Subtracts each power at most once, largest first.
pub fn ternary_sum(mut n: u64) -> bool {
    if n == 0 {
        return false;
    }
    let mut power = 1u64;
    while power <= n / 3 {
        power *= 3;
    }
    loop {
        if n >= power {
            n -= power;
        }
        if power == 1 {
            break;
        }
        power /= 3;
    }
    n == 0
}
