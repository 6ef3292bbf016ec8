/// Largest whole amount every one of `people` can be poured from the given
/// kettles, where pours never combine leftovers from different kettles.
/// Returns 0 when not even a single unit each is possible.
pub fn even_pour(volumes: &[u64], people: u64) -> u64 {
    let Some(&largest) = volumes.iter().max() else { return 0 };
    let servings = |share: u64| volumes.iter().map(|v| v / share).sum::<u64>();

    let (mut low, mut high) = (1u64, largest);
    while low <= high {
        let mid = low + (high - low) / 2;
        if servings(mid) >= people {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }
    high
}
