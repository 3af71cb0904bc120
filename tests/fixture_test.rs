use todoview::entities::partition;
use todoview::fixture::{fixture, Fixture};

fn texts(tasks: &[&todoview::Task]) -> Vec<String> {
    tasks.iter().map(|t| t.text.clone()).collect()
}

#[test]
fn test_fixture_lists() {
    let data = fixture();
    let names: Vec<&str> = data.sidebar_lists.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["My Day", "Important", "Planned", "All", "Completed", "Tasks"]);

    let custom: Vec<(&str, u32)> = data.custom_lists.iter().map(|l| (l.name.as_str(), l.count)).collect();
    assert_eq!(custom, vec![("Work Projects", 3), ("Personal", 2)]);
}

#[test]
fn test_fixture_selection() {
    let data = fixture();
    assert_eq!(data.current_list().map(|l| l.name.as_str()), Some("My Day"));
    assert_eq!(
        data.selected_task().map(|t| t.text.as_str()),
        Some("Review quarterly reports")
    );
    assert_eq!(data.list_date.to_string(), "2025-06-09");
}

#[test]
fn test_fixture_is_shared() {
    assert!(std::ptr::eq(fixture(), fixture()));
}

#[test]
fn test_fixture_partition() {
    let data = Fixture::builtin();
    let split = partition(&data.tasks);

    assert_eq!(
        texts(&split.completed),
        vec!["Update project documentation", "Send weekly status report"]
    );
    assert_eq!(
        texts(&split.pending),
        vec![
            "Review quarterly reports",
            "Call client about project update",
            "Prepare presentation slides",
            "Team meeting at 3 PM",
        ]
    );
}

#[test]
fn test_counts_are_not_derived_from_tasks() {
    // "All" claims 8 items while the fixture holds 6 tasks
    let data = fixture();
    let all = data.sidebar_lists.iter().find(|l| l.name == "All").unwrap();
    assert_eq!(all.count, 8);
    assert_eq!(data.tasks.len(), 6);
}
