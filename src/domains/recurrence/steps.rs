/// Best score climbing stairs one or two at a time, never stepping on three
/// consecutive stairs and always ending on the last one.
pub fn staircase(scores: &[i64]) -> i64 {
    let n = scores.len();
    if n == 0 {
        return 0;
    }
    // 1-indexed to keep the recurrence readable
    let s = |i: usize| scores[i - 1];
    let mut best = vec![0i64; n + 1];

    best[1] = s(1);
    if n >= 2 {
        best[2] = s(1) + s(2);
    }
    if n >= 3 {
        best[3] = (s(1) + s(3)).max(s(2) + s(3));
    }
    for i in 4..=n {
        best[i] = (best[i - 2] + s(i)).max(best[i - 3] + s(i - 1) + s(i));
    }

    best[n]
}

/// Most wine drunk from a row of glasses without drinking three in a row.
pub fn wine_tasting(amounts: &[i64]) -> i64 {
    let n = amounts.len();
    if n == 0 {
        return 0;
    }
    let a = |i: usize| amounts[i - 1];
    let mut best = vec![0i64; n + 1];

    best[1] = a(1);
    if n >= 2 {
        best[2] = a(1) + a(2);
    }
    if n >= 3 {
        best[3] = (a(1) + a(2)).max(a(1) + a(3)).max(a(2) + a(3));
    }
    for i in 4..=n {
        let drink = (best[i - 2] + a(i)).max(best[i - 3] + a(i - 1) + a(i));
        best[i] = drink.max(best[i - 1]);
    }

    best[n]
}

/// Cheapest way to paint a street where neighbouring houses differ in colour.
pub fn house_painting(costs: &[[u64; 3]]) -> u64 {
    let Some(first) = costs.first() else { return 0 };
    let mut prev = *first;
    for row in &costs[1..] {
        prev = [
            prev[1].min(prev[2]) + row[0],
            prev[0].min(prev[2]) + row[1],
            prev[0].min(prev[1]) + row[2],
        ];
    }
    prev.into_iter().min().unwrap_or(0)
}

/// Fewest perfect squares that sum to `n`.
pub fn square_sum_terms(n: usize) -> usize {
    let mut terms: Vec<usize> = (0..=n).collect();
    for i in 1..=n {
        let mut k = 1;
        while k * k <= i {
            terms[i] = terms[i].min(terms[i - k * k] + 1);
            k += 1;
        }
    }
    terms[n]
}

/// Number of ordered ways to write `n` as a sum of 1, 2 and 3.
pub fn one_two_three(n: usize) -> u64 {
    let mut ways = vec![0u64; n + 1];
    ways[0] = 1;
    for i in 1..=n {
        let total: u64 = (1..=3).filter(|&step| step <= i).map(|step| ways[i - step]).sum();
        ways[i] = total;
    }
    ways[n]
}
