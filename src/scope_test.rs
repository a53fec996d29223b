use super::*;

fn set_of(types: &[&str]) -> HashSet<String> {
    types.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_commit_type_scoped_title() {
    assert_eq!(commit_type("feat(ui): add x"), "feat");
}

#[test]
fn test_commit_type_unscoped_title() {
    assert_eq!(commit_type("chore: y"), "chore");
}

#[test]
fn test_commit_type_without_delimiter() {
    assert_eq!(commit_type("no-delimiter-text"), "no-delimiter-text");
}

#[test]
fn test_commit_type_scope_without_colon() {
    assert_eq!(commit_type("fix(core) missing colon"), "fix");
}

#[test]
fn test_commit_type_does_not_trim_whitespace() {
    assert_eq!(commit_type(" feat : spaced"), " feat ");
}

#[test]
fn test_should_run_always_when_not_restricted() {
    let excluded = set_of(&["feat"]);
    assert!(should_run(false, "feat", &excluded));
    assert!(should_run(false, "chore", &excluded));
}

#[test]
fn test_should_run_skips_excluded_category() {
    let excluded = set_of(&["feat", "chore"]);
    assert!(!should_run(true, "feat", &excluded));
    assert!(!should_run(true, "chore", &excluded));
}

#[test]
fn test_should_run_permits_visible_category() {
    let excluded = set_of(&["chore"]);
    assert!(should_run(true, "feat", &excluded));
}

#[test]
fn test_should_run_with_empty_exclusions() {
    let excluded = HashSet::new();
    assert!(should_run(true, "anything", &excluded));
}
