use crate::expression::Expression;
use crate::solver::{Explorer, Mask, NumbersSolver, Solution, SolverConfig, SolverError, StateKey};
use crate::utils::UtilsError;

fn solve(numbers: &[u64], target: u64) -> Solution {
    NumbersSolver::new()
        .solve(numbers, target)
        .unwrap_or(Solution::NotFound)
}

fn sorted(mut values: Vec<u64>) -> Vec<u64> {
    values.sort_unstable();
    values
}

/// Found, evaluates to target, uses each input exactly once, and re-parses to the same tree
fn assert_witness(numbers: &[u64], target: u64, solution: &Solution) {
    let expr = solution.expression();
    assert!(expr.is_some(), "expected a solution for {:?} -> {}", numbers, target);
    if let Some(expr) = expr {
        assert_eq!(expr.evaluate(), Ok(target), "{} != {}", expr, target);
        assert_eq!(sorted(expr.numbers()), sorted(numbers.to_vec()));
        assert_eq!(expr.operations(), numbers.len().saturating_sub(1));
        assert_eq!(expr.to_string().parse::<Expression>().as_ref(), Ok(expr));
    }
}

fn permutations(values: &[u64]) -> Vec<Vec<u64>> {
    if values.len() <= 1 {
        return vec![values.to_vec()];
    }
    let mut out = Vec::new();
    for i in 0..values.len() {
        let mut rest = values.to_vec();
        let head = rest.remove(i);
        for mut tail in permutations(&rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

#[test]
fn test_single_number() {
    let solution = solve(&[5], 5);
    assert_eq!(solution.expression().map(|e| e.to_string()), Some("5".to_string()));
    assert_eq!(solve(&[5], 4), Solution::NotFound);
    assert_eq!(solve(&[0], 0).expression().map(|e| e.to_string()), Some("0".to_string()));
}

#[test]
fn test_two_numbers_addition() {
    let solution = solve(&[2, 3], 5);
    assert_eq!(solution.expression().map(|e| e.to_string()), Some("(2+3)".to_string()));
}

#[test]
fn test_two_numbers_swapped_subtraction() {
    let solution = solve(&[2, 3], 1);
    assert_eq!(solution.expression().map(|e| e.to_string()), Some("(3-2)".to_string()));
}

#[test]
fn test_two_numbers_unreachable() {
    assert_eq!(solve(&[2, 3], 7), Solution::NotFound);
}

#[test]
fn test_three_numbers() {
    let solution = solve(&[1, 2, 3], 6);
    assert_witness(&[1, 2, 3], 6, &solution);
}

#[test]
fn test_division_by_zero_is_skipped() {
    let solution = solve(&[4, 0], 4);
    assert_witness(&[4, 0], 4, &solution);
    assert!(solve(&[4, 0], 0).is_found());
}

#[test]
fn test_swapped_division() {
    let solution = solve(&[3, 12], 4);
    assert_eq!(solution.expression().map(|e| e.to_string()), Some("(12/3)".to_string()));
}

#[test]
fn test_every_number_must_be_used() {
    // 5 alone is a reachable state, but it leaves 3 unused
    assert_eq!(solve(&[5, 3], 5), Solution::NotFound);
    assert!(solve(&[5, 0], 5).is_found());
}

#[test]
fn test_empty_input_is_not_found() {
    assert_eq!(solve(&[], 0), Solution::NotFound);
    assert_eq!(solve(&[], 1), Solution::NotFound);
}

#[test]
fn test_four_numbers() {
    for (numbers, target) in [
        (vec![1, 2, 3, 4], 24),
        (vec![1, 1, 1, 1], 4),
        (vec![2, 2, 2], 6),
        (vec![1, 3, 4, 6], 13),
        (vec![25, 50, 75, 100], 1),
    ] {
        let solution = solve(&numbers, target);
        assert_witness(&numbers, target, &solution);
    }
}

#[test]
fn test_unreachable_targets() {
    assert_eq!(solve(&[1, 1, 1], 4), Solution::NotFound);
    assert_eq!(solve(&[2, 2, 2], 7), Solution::NotFound);
    assert_eq!(solve(&[1, 2, 3, 4], 37), Solution::NotFound);
}

#[test]
fn test_order_does_not_change_verdict() {
    for perm in permutations(&[1, 2, 3, 4]) {
        let solution = solve(&perm, 24);
        assert_witness(&perm, 24, &solution);
        assert_eq!(solve(&perm, 37), Solution::NotFound);
    }
    for perm in permutations(&[2, 3]) {
        assert!(solve(&perm, 1).is_found());
        assert!(!solve(&perm, 7).is_found());
    }
}

#[test]
fn test_solving_is_deterministic() {
    let first = solve(&[3, 7, 8, 9], 20);
    let second = solve(&[3, 7, 8, 9], 20);
    assert_eq!(first.is_found(), second.is_found());
    assert_eq!(first, second);
    if first.is_found() {
        assert_witness(&[3, 7, 8, 9], 20, &first);
    }
}

#[test]
fn test_parent_records_are_consistent() {
    let numbers = [2, 3, 7, 11];
    let explorer = Explorer::new(&numbers, 100_000);
    assert!(explorer.is_ok());
    if let Ok(mut explorer) = explorer {
        assert_eq!(explorer.run(), None);

        for key in explorer.discovered() {
            assert!(!key.mask().is_empty());
            match explorer.parent(key) {
                None => {
                    assert_eq!(key.mask().len(), 1);
                }
                Some(parent) => {
                    assert!(parent.left.mask().is_disjoint(parent.right.mask()));
                    assert_eq!(parent.left.mask().union(parent.right.mask()), key.mask());
                    assert_eq!(
                        parent.op.apply(parent.left.value(), parent.right.value()),
                        Some(key.value())
                    );
                    assert!(explorer.contains(&parent.left));
                    assert!(explorer.contains(&parent.right));
                }
            }
        }

        let stats = explorer.stats();
        assert_eq!(stats.discovered, explorer.discovered().len());
        assert_eq!(stats.expanded, stats.discovered);
        assert!(stats.combinations > 0);
    }
}

#[test]
fn test_leaves_render_as_numbers() {
    let explorer = Explorer::new(&[8, 9], 17);
    assert!(explorer.is_ok());
    if let Ok(explorer) = explorer {
        assert_eq!(explorer.render(StateKey::leaf(1, 9)), Some("9".to_string()));
        assert_eq!(explorer.render(StateKey::leaf(0, 9)), None);
        assert!(!explorer.is_reached());
        assert_eq!(explorer.target(), StateKey::new(17, Mask::full(2)));
    }
}

#[test]
fn test_step_reaches_target_incrementally() {
    let explorer = Explorer::new(&[2, 3], 6);
    assert!(explorer.is_ok());
    if let Ok(mut explorer) = explorer {
        assert!(!explorer.is_reached());
        assert!(explorer.step());
        assert!(explorer.is_reached());
        assert_eq!(explorer.render(explorer.target()), Some("(2*3)".to_string()));
    }
}

#[test]
fn test_too_many_numbers() {
    let solver = NumbersSolver::with_config(SolverConfig::with_max_numbers(3));
    assert_eq!(solver.config().max_numbers, 3);
    assert_eq!(
        solver.solve(&[1, 2, 3, 4], 10),
        Err(SolverError::InvalidInput(UtilsError::TooManyNumbers {
            count: 4,
            max: 3
        }))
    );
}

#[test]
fn test_magnitude_overflow() {
    let solver = NumbersSolver::new();
    assert_eq!(
        solver.solve(&[u64::MAX, 2], 1),
        Err(SolverError::InvalidInput(UtilsError::MagnitudeOverflow))
    );
    assert!(Explorer::new(&[1 << 33, 1 << 33], 0).is_err());
}

#[test]
fn test_solve_all_keeps_target_order() {
    let solver = NumbersSolver::new();
    let results = solver.solve_all(&[1, 2, 3], &[6, 0, 100, 9]);
    assert!(results.is_ok());
    if let Ok(solutions) = results {
        assert_eq!(solutions.len(), 4);
        assert_witness(&[1, 2, 3], 6, &solutions[0]);
        assert_witness(&[1, 2, 3], 0, &solutions[1]);
        assert_eq!(solutions[2], Solution::NotFound);
        assert_witness(&[1, 2, 3], 9, &solutions[3]);
    }
}
