use gridflow::domains::grid::Grid;
use gridflow::domains::scan::*;

#[test]
fn test_window_sum_max() {
    let temps = [3, -2, -4, -9, 0, 3, 7, 13, 8, -3];
    assert_eq!(window_sum_max(&temps, 2), Some(21));
    assert_eq!(window_sum_max(&temps, 5), Some(31));
    assert_eq!(window_sum_max(&temps, 0), None);
    assert_eq!(window_sum_max(&temps, 11), None);
}

#[test]
fn test_window_sum_prefix_agrees_with_sliding() {
    let temps = [3, -2, -4, -9, 0, 3, 7, 13, 8, -3];
    for k in 1..=temps.len() {
        assert_eq!(window_sum_max_prefix(&temps, k), window_sum_max(&temps, k), "k = {}", k);
    }
}

#[test]
fn test_hoof_paper_scissors() {
    let games: Vec<Gesture> = ["P", "P", "H", "P", "S"]
        .into_iter()
        .map(|g| Gesture::parse(g).unwrap())
        .collect();
    assert_eq!(hoof_paper_scissors(&games), 4);
    assert_eq!(hoof_paper_scissors(&[]), 0);
}

#[test]
fn test_gesture_rejects_unknown_token() {
    assert!(Gesture::parse("R").is_err());
}

#[test]
fn test_even_pour() {
    assert_eq!(even_pour(&[702, 429], 3), 351);
    assert_eq!(even_pour(&[3, 2, 1], 10), 0);
    assert_eq!(even_pour(&[], 1), 0);
    assert_eq!(even_pour(&[10], 1), 10);
}

#[test]
fn test_tree_harvest() {
    let trees = [(1, 2), (3, 7), (2, 3), (4, 4), (6, 1)];
    assert_eq!(tree_harvest(&trees), 64);
}

#[test]
fn test_warehouse_roof() {
    let pillars = [(2, 4), (11, 4), (15, 8), (4, 6), (5, 3), (8, 10), (13, 6)];
    assert_eq!(warehouse_roof(&pillars), 98);
    assert_eq!(warehouse_roof(&[(4, 7)]), 7);
    assert_eq!(warehouse_roof(&[(1, 5), (3, 5)]), 15);
    assert_eq!(warehouse_roof(&[]), 0);
}

#[test]
fn test_ternary_sum() {
    let expected = [
        (0, false),
        (1, true),
        (2, false),
        (4, true),
        (12, true),
        (13, true),
        (14, false),
        (40, true),
        (41, false),
    ];
    for (n, yes) in expected {
        assert_eq!(ternary_sum(n), yes, "n = {}", n);
    }
}

#[test]
fn test_candy_count() {
    let lines = [".>o<.", "..v..", "..o..", "..^.."];
    let grid = Grid::parse_chars(4, 5, lines, Ok).unwrap();
    assert_eq!(candy_count(&grid), 2);

    let grid = Grid::parse_chars(3, 3, [">o<", "vvv", "..."], Ok).unwrap();
    assert_eq!(candy_count(&grid), 1);
}

#[test]
fn test_colored_paper() {
    assert_eq!(colored_paper(&[(3, 7), (15, 7), (5, 2)]), 260);
    assert_eq!(colored_paper(&[(0, 0), (0, 0)]), 100);
    assert_eq!(colored_paper(&[]), 0);
}

#[test]
fn test_colored_paper_clips_to_canvas() {
    assert_eq!(colored_paper(&[(CANVAS_SIDE - 5, CANVAS_SIDE - 5)]), 25);
}
