#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use csp_solver::branching::value_selection::InDomainOrder;
use csp_solver::branching::value_selection::LeastConstrainingValue;
use csp_solver::branching::variable_selection::InputOrder;
use csp_solver::branching::variable_selection::MaxDegree;
use csp_solver::branching::variable_selection::MinimumRemainingValues;
use csp_solver::branching::variable_selection::RandomSelector;
use csp_solver::branching::variable_selection::VariableSelector;
use csp_solver::branching::Brancher;
use csp_solver::branching::IndependentVariableValueBrancher;
use csp_solver::branching::SelectionContext;
use csp_solver::constraints;
use csp_solver::containers::HashSet;
use csp_solver::options::PropagatorKind;
use csp_solver::options::SolverOptions;
use csp_solver::propagators::propagate;
use csp_solver::propagators::ForwardCheckingPropagator;
use csp_solver::propagators::GeneralisedArcConsistencyPropagator;
use csp_solver::puzzles::futoshiki::Futoshiki;
use csp_solver::puzzles::futoshiki::Inequality;
use csp_solver::results::SatisfactionResult;
use csp_solver::results::Solution;
use csp_solver::termination::Indefinite;
use csp_solver::Csp;
use csp_solver::Solver;
use rand::rngs::SmallRng;
use rand::SeedableRng;

const ALL_PROPAGATORS: [PropagatorKind; 3] = [
    PropagatorKind::Backtracking,
    PropagatorKind::ForwardChecking,
    PropagatorKind::GeneralisedArcConsistency,
];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn solver_with(propagator: PropagatorKind) -> Solver {
    Solver::with_options(SolverOptions {
        propagator,
        ..Default::default()
    })
}

fn all_solutions(
    csp: &mut Csp,
    propagator: PropagatorKind,
    brancher: &mut impl Brancher,
) -> HashSet<Solution> {
    let mut solver = solver_with(propagator);
    let result = solver.satisfy_all(csp, brancher, &mut Indefinite);
    assert!(result.complete);

    let num_solutions = result.solutions.len();
    let solutions = result.solutions.into_iter().collect::<HashSet<_>>();
    assert_eq!(num_solutions, solutions.len(), "a solution was reported twice");
    solutions
}

fn four_queens() -> Csp {
    let mut csp = Csp::new("4-queens");
    let queens = (0..4)
        .map(|row| csp.new_variable(format!("q{row}"), vec![0, 1, 2, 3]).unwrap())
        .collect::<Vec<_>>();

    for first in 0..4 {
        for second in first + 1..4 {
            let distance = (second - first) as i32;
            let constraint = constraints::from_predicate(
                &csp,
                format!("q{first}~q{second}"),
                vec![queens[first], queens[second]],
                |values| values[0] != values[1] && (values[0] - values[1]).abs() != distance,
            );
            let _ = csp.add_constraint(constraint).unwrap();
        }
    }

    csp
}

fn assert_untouched(csp: &Csp) {
    for variable in csp.get_all_vars() {
        let variable = csp.variable(variable);
        assert!(!variable.is_assigned());
        assert_eq!(
            variable.cur_domain().collect::<Vec<_>>(),
            variable.domain().to_vec()
        );
    }
}

#[test]
fn forward_checking_narrows_the_last_cell_of_a_row() {
    init_logging();
    let mut model = Futoshiki::new(3).binary_model().unwrap();
    let csp = &mut model.csp;
    let cells = &model.cells;

    csp.assign(cells[0][0], 1);
    let first = propagate(&mut ForwardCheckingPropagator, csp, Some(cells[0][0]));
    assert!(first.is_consistent());

    csp.assign(cells[0][1], 2);
    let second = propagate(&mut ForwardCheckingPropagator, csp, Some(cells[0][1]));
    assert!(second.is_consistent());

    assert_eq!(csp.variable(cells[0][2]).cur_domain().collect::<Vec<_>>(), vec![3]);

    second.undo(csp);
    csp.unassign(cells[0][1]);
    first.undo(csp);
    csp.unassign(cells[0][0]);
    assert_untouched(csp);
}

#[test]
fn over_constrained_grid_is_unsatisfiable_for_every_propagator() {
    init_logging();
    let mut csp = Csp::new("over-constrained");
    let cells = (0..4)
        .map(|index| csp.new_variable(format!("c{index}"), vec![1]).unwrap())
        .collect::<Vec<_>>();
    // Two rows (0, 1), (2, 3) and two columns (0, 2), (1, 3)
    for (first, second) in [(0, 1), (2, 3), (0, 2), (1, 3)] {
        let constraint = constraints::not_equals(&csp, cells[first], cells[second]);
        let _ = csp.add_constraint(constraint).unwrap();
    }

    for propagator in ALL_PROPAGATORS {
        let mut solver = solver_with(propagator);
        let mut brancher = solver.default_brancher();
        let result = solver.satisfy(&mut csp, &mut brancher, &mut Indefinite);

        assert_eq!(result, SatisfactionResult::Unsatisfiable, "{propagator}");
        assert!(solver.statistics().num_conflicts >= 1, "{propagator}");
        assert_untouched(&csp);
    }
}

#[test]
fn unconstrained_variables_give_every_combination() {
    init_logging();
    let mut csp = Csp::new("unconstrained");
    let x = csp.new_variable("x", vec![1, 2]).unwrap();
    let y = csp.new_variable("y", vec![1, 2]).unwrap();

    let record = propagate(
        &mut GeneralisedArcConsistencyPropagator::default(),
        &mut csp,
        None,
    );
    assert!(record.is_consistent());
    assert!(record.prunings.is_empty());

    let mut brancher = Solver::default().default_brancher();
    let solutions = all_solutions(
        &mut csp,
        PropagatorKind::GeneralisedArcConsistency,
        &mut brancher,
    );

    let combinations = solutions
        .iter()
        .map(|solution| (solution.get_value(x), solution.get_value(y)))
        .collect::<HashSet<_>>();
    assert_eq!(
        combinations,
        [(1, 1), (1, 2), (2, 1), (2, 2)]
            .into_iter()
            .collect::<HashSet<_>>()
    );
}

#[test]
fn propagators_find_the_same_solutions() {
    init_logging();
    let mut csp = four_queens();

    let solution_sets = ALL_PROPAGATORS.map(|propagator| {
        let mut brancher = Solver::default().default_brancher();
        all_solutions(&mut csp, propagator, &mut brancher)
    });

    assert_eq!(solution_sets[0].len(), 2);
    assert_eq!(solution_sets[0], solution_sets[1]);
    assert_eq!(solution_sets[1], solution_sets[2]);
    for solution in &solution_sets[0] {
        assert!(solution.satisfies(&csp));
    }
    assert_untouched(&csp);
}

#[test]
fn stronger_propagation_explores_fewer_nodes() {
    let mut model = Futoshiki::new(4)
        .with_given(0, 0, 1)
        .with_inequality(1, 1, Inequality::LessThan)
        .binary_model()
        .unwrap();

    // With a static variable order every node visited by a stronger propagator is also visited by
    // a weaker one
    let decisions = ALL_PROPAGATORS.map(|propagator| {
        let mut solver = solver_with(propagator);
        let mut brancher = IndependentVariableValueBrancher::new(InputOrder, InDomainOrder);
        let _ = solver.satisfy_all(&mut model.csp, &mut brancher, &mut Indefinite);
        solver.statistics().num_decisions
    });

    assert!(decisions[0] >= decisions[1]);
    assert!(decisions[1] >= decisions[2]);
}

#[test]
fn branching_strategies_find_the_same_solutions() {
    init_logging();
    let mut model = Futoshiki::new(3)
        .with_inequality(0, 0, Inequality::GreaterThan)
        .nary_model()
        .unwrap();
    let csp = &mut model.csp;

    let expected = all_solutions(
        csp,
        PropagatorKind::Backtracking,
        &mut IndependentVariableValueBrancher::new(InputOrder, InDomainOrder),
    );
    // Half of the 12 Latin squares have cell(0,0) > cell(0,1)
    assert_eq!(expected.len(), 6);

    for propagator in ALL_PROPAGATORS {
        let mut max_degree =
            IndependentVariableValueBrancher::new(MaxDegree::default(), LeastConstrainingValue);
        assert_eq!(all_solutions(csp, propagator, &mut max_degree), expected);

        let mut random = IndependentVariableValueBrancher::new(RandomSelector, InDomainOrder);
        assert_eq!(all_solutions(csp, propagator, &mut random), expected);
    }
}

#[test]
fn no_value_is_pruned_twice_in_one_call() {
    let mut model = Futoshiki::new(4)
        .with_given(0, 0, 2)
        .with_given(3, 3, 1)
        .with_inequality(1, 0, Inequality::LessThan)
        .with_inequality(1, 1, Inequality::LessThan)
        .with_inequality(1, 2, Inequality::LessThan)
        .binary_model()
        .unwrap();
    let csp = &mut model.csp;

    let record = propagate(&mut GeneralisedArcConsistencyPropagator::default(), csp, None);
    assert!(record.is_consistent());

    let unique = record.prunings.iter().collect::<HashSet<_>>();
    assert_eq!(unique.len(), record.prunings.len());
    for pruning in &record.prunings {
        assert!(csp.variable(pruning.variable).in_domain(pruning.value));
        assert!(!csp.variable(pruning.variable).in_cur_domain(pruning.value));
    }
    // The increasing row forces 1, 2, 3, 4 in row 1
    for (column, value) in [1, 2, 3, 4].into_iter().enumerate() {
        let cell = model.cells[1][column];
        assert_eq!(csp.variable(cell).cur_domain().collect::<Vec<_>>(), vec![value]);
    }

    record.undo(csp);
    assert_untouched(csp);
}

#[test]
fn minimum_remaining_values_is_deterministic() {
    let mut model = Futoshiki::new(4).binary_model().unwrap();
    let csp = &mut model.csp;
    csp.prune_value(model.cells[2][1], 4);
    csp.prune_value(model.cells[3][0], 4);
    let mut random = SmallRng::seed_from_u64(3);

    let mut selector = MinimumRemainingValues::new();
    let selections = (0..5)
        .map(|_| selector.select_variable(&mut SelectionContext::new(csp, &mut random)))
        .collect::<Vec<_>>();

    assert!(selections
        .iter()
        .all(|&selected| selected == Some(model.cells[2][1])));
}

#[test]
fn has_support_is_idempotent() {
    let mut csp = four_queens();
    let q0 = csp.variable_by_name("q0").unwrap();
    let q1 = csp.variable_by_name("q1").unwrap();
    csp.prune_value(q1, 2);
    let constraint = csp.get_cons_with_var(q0)[0];

    for value in 0..4 {
        let first = csp.has_support(constraint, q0, value);
        assert_eq!(first, csp.has_support(constraint, q0, value));
        assert_eq!(first, csp.has_support(constraint, q0, value));
    }
    // q0 = 0 is only supported by q1 = 2 and q1 = 3
    assert!(csp.has_support(constraint, q0, 0));
    csp.prune_value(q1, 3);
    assert!(!csp.has_support(constraint, q0, 0));
}
