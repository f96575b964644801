use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2033, day = 24, tags = ["macro-test", "words"])]
struct WordSolver;

impl AocParser for WordSolver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.split_whitespace().collect())
    }
}

impl PartSolver<1> for WordSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for WordSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .iter()
            .max_by_key(|word| word.len())
            .map(|word| word.to_string())
            .ok_or_else(|| SolveError::NoSolution("no words".into()))
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2033, day = 23)]
struct UntaggedSolver;

impl AocParser for UntaggedSolver {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl PartSolver<1> for UntaggedSolver {
    fn solve(_shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok("untagged".to_string())
    }
}

#[test]
fn test_plugin_submitted_with_tags() {
    let plugin = aoc_solver::inventory::iter::<aoc_solver::SolverPlugin>()
        .find(|p| p.year == 2033 && p.day == 24)
        .expect("plugin should be submitted");
    assert_eq!(plugin.tags, &["macro-test", "words"]);
    assert_eq!(plugin.solver.parts(), 2);
}

#[test]
fn test_untagged_plugin_has_empty_tags() {
    let plugin = aoc_solver::inventory::iter::<aoc_solver::SolverPlugin>()
        .find(|p| p.year == 2033 && p.day == 23)
        .expect("plugin should be submitted");
    assert!(plugin.tags.is_empty());
}

#[test]
fn test_registered_plugin_solves_through_registry() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("plugins should not collide")
        .build();

    let mut solver = registry
        .create_solver(2033, 24, "tiny enormous mid")
        .expect("solver was registered");
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "enormous");

    let mut untagged = registry.create_solver(2033, 23, "").unwrap();
    assert_eq!(untagged.solve(1).unwrap().answer, "untagged");
}
