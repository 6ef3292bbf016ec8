use crate::application::catalog::Solution;
use crate::application::input::Tokens;
use crate::common::{DomainError, DomainResult};
use crate::domains::recurrence;

pub fn consultation(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let days: usize = tokens.next("day count")?;
    let jobs = tokens.pairs::<usize, u64>(days, "duration and pay")?;
    Ok(Solution::answer(recurrence::consultation_schedule(&jobs)))
}

pub fn staircase(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.next("stair count")?;
    let scores = tokens.take::<i64>(n, "stair score")?;
    Ok(Solution::answer(recurrence::staircase(&scores)))
}

pub fn wine_tasting(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.next("glass count")?;
    let amounts = tokens.take::<i64>(n, "glass amount")?;
    Ok(Solution::answer(recurrence::wine_tasting(&amounts)))
}

pub fn house_painting(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.next("house count")?;
    let mut costs = Vec::with_capacity(n);
    for _ in 0..n {
        let row = tokens.take::<u64>(3, "paint cost")?;
        costs.push([row[0], row[1], row[2]]);
    }
    Ok(Solution::answer(recurrence::house_painting(&costs)))
}

pub fn knapsack(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.next("item count")?;
    let capacity: usize = tokens.next("capacity")?;
    let items = tokens.pairs::<usize, u64>(n, "weight and value")?;
    Ok(Solution::answer(recurrence::knapsack(&items, capacity)))
}

pub fn longest_increasing(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.next("length")?;
    let nums = tokens.take::<i64>(n, "sequence value")?;
    Ok(Solution::answer(recurrence::longest_increasing(&nums)))
}

pub fn crossing_wires(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.next("wire count")?;
    let wires = tokens.pairs::<i64, i64>(n, "wire endpoint")?;
    Ok(Solution::answer(recurrence::crossing_wires(&wires)))
}

pub fn max_subarray(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let n: usize = tokens.next("length")?;
    let nums = tokens.take::<i64>(n, "sequence value")?;
    let best = recurrence::max_subarray(&nums)
        .ok_or_else(|| DomainError::invalid_input("sequence must not be empty"))?;
    Ok(Solution::answer(best))
}

pub fn square_sum(input: &str) -> DomainResult<Solution> {
    let n: usize = Tokens::new(input).next("target")?;
    Ok(Solution::answer(recurrence::square_sum_terms(n)))
}

/// Several test cases, one answer per line.
pub fn one_two_three(input: &str) -> DomainResult<Solution> {
    let mut tokens = Tokens::new(input);
    let cases: usize = tokens.next("case count")?;
    let answers = tokens
        .take::<usize>(cases, "target")?
        .into_iter()
        .map(|n| recurrence::one_two_three(n).to_string())
        .collect::<Vec<_>>();
    Ok(Solution::answer(answers.join("\n")))
}
