use gridsearch_core::layout::{Layout, EXPLORED_MARK, SOLUTION_MARK};
use gridsearch_core::{Algorithm, Outcome, Problem, Searcher};

const TINY: &str = "\
%%%%%%%%
%P   G %
% %%%% %
%      %
%%%% %o%
%%%%%%%%
";

#[test]
fn layout_problem_matches_map() {
    let layout = Layout::parse(TINY).unwrap();
    let p = layout.problem();
    assert_eq!(p.initial(), (2, 2));
    assert!(p.is_goal(&(5, 7)));
    assert!(p.obstacles.contains(&(2, 6)), "ghosts are obstacles");
    assert!(!p.is_open((1, 1)));
    assert!(p.is_open((2, 3)));
}

#[test]
fn every_algorithm_runs_on_layout() {
    let layout = Layout::parse(TINY).unwrap();
    let p = layout.problem();
    for algorithm in Algorithm::ALL {
        let res = Searcher::new(&p).run(algorithm).unwrap();
        match res.outcome {
            Outcome::Succeeded(_) => assert_eq!(res.states().unwrap().last().copied(), Some(layout.goal)),
            Outcome::Halted(_) => assert_eq!(algorithm, Algorithm::HillClimbing),
            Outcome::Failed(f) => panic!("{algorithm} failed: {f:?}"),
        }
    }
}

#[test]
fn annotated_map_keeps_shape_and_markers() {
    let layout = Layout::parse(TINY).unwrap();
    let p = layout.problem();
    let res = Searcher::new(&p).run(Algorithm::AStar).unwrap();
    let solution = res.solution().unwrap();
    let out = layout.render(res.explored.iter(), solution.iter());

    assert_eq!(out.lines().count(), TINY.lines().count());
    for (a, b) in out.lines().zip(TINY.lines()) {
        assert_eq!(a.len(), b.len());
    }
    assert!(out.contains('P'));
    assert!(out.contains('o'));
    assert!(out.contains('G'));
    // path length minus the goal cell, which keeps its marker
    let stars = out.chars().filter(|c| *c == SOLUTION_MARK).count();
    assert_eq!(stars, solution.len() - 1);
    assert!(out.chars().filter(|c| *c == EXPLORED_MARK).count() <= res.explored.len());
    // walls untouched
    assert_eq!(out.chars().filter(|c| *c == '%').count(), TINY.chars().filter(|c| *c == '%').count());
}
