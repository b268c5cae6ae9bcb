//! Regression coverage for the filter engine.

use super::*;
use crate::domain::{
    ChallengeId, ForumPostId, Member, ProjectId, UserId, UserRole,
};
use chrono::{TimeDelta, TimeZone};
use rstest::{fixture, rstest};

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

fn member(id: &str, name: &str) -> Member {
    Member {
        id: UserId::new(id).expect("valid id"),
        name: name.to_owned(),
        avatar: None,
        role: UserRole::Resident,
    }
}

fn project(
    id: &str,
    title: &str,
    category: ProjectCategory,
    status: ProjectStatus,
    tags: &[&str],
) -> Project {
    Project {
        id: ProjectId::new(id).expect("valid id"),
        title: title.to_owned(),
        description: format!("Proposal {id} for the neighbourhood."),
        category,
        author: member("1", "Maria Silva"),
        votes: 0,
        status,
        participants: Vec::new(),
        tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
        created_at: at(20, 0),
        updated_at: at(20, 0),
        required_points: None,
    }
}

#[fixture]
fn projects() -> Vec<Project> {
    vec![
        project(
            "1",
            "Central Square Revitalisation",
            ProjectCategory::Infrastructure,
            ProjectStatus::Proposed,
            &["square", "family"],
        ),
        project(
            "2",
            "Community Recycling Programme",
            ProjectCategory::Environment,
            ProjectStatus::Approved,
            &["recycling", "Education"],
        ),
        project(
            "3",
            "School Community Garden",
            ProjectCategory::Education,
            ProjectStatus::InProgress,
            &["garden"],
        ),
    ]
}

fn ids<T>(filtered: &Filtered<T>, id: impl Fn(&T) -> &str) -> Vec<String> {
    filtered.items().iter().map(|item| id(item).to_owned()).collect()
}

fn project_ids(filtered: &Filtered<Project>) -> Vec<String> {
    ids(filtered, |p| p.id.as_ref())
}

#[rstest]
fn default_project_filter_passes_everything(projects: Vec<Project>) {
    let filtered = ProjectFilter::default().apply(&projects);
    assert_eq!(project_ids(&filtered), vec!["1", "2", "3"]);
}

#[rstest]
#[case("COMMUNITY", vec!["2", "3"])]
#[case("neighbourhood", vec!["1", "2", "3"])]
#[case("education", vec!["2"])]
#[case("garden", vec!["3"])]
#[case("skate park", vec![])]
fn project_search_spans_title_description_and_tags(
    projects: Vec<Project>,
    #[case] term: &str,
    #[case] expected: Vec<&str>,
) {
    let filter = ProjectFilter {
        search: SearchTerm::new(term),
        ..ProjectFilter::default()
    };
    let filtered = filter.apply(&projects);
    assert_eq!(project_ids(&filtered), expected);
}

#[rstest]
fn missing_term_yields_empty_result(projects: Vec<Project>) {
    let filter = ProjectFilter {
        search: SearchTerm::new("zeppelin"),
        ..ProjectFilter::default()
    };
    let filtered = filter.apply(&projects);
    assert!(filtered.is_empty());
    assert_eq!(filtered.len(), 0);
}

#[rstest]
fn category_all_keeps_search_applied(projects: Vec<Project>) {
    let filter = ProjectFilter {
        search: SearchTerm::new("community"),
        category: "all".parse().expect("wildcard"),
        status: TagFilter::All,
    };
    assert_eq!(project_ids(&filter.apply(&projects)), vec!["2", "3"]);
}

#[rstest]
fn criteria_compose_with_and(projects: Vec<Project>) {
    let filter = ProjectFilter {
        search: SearchTerm::new("community"),
        category: TagFilter::Only(ProjectCategory::Education),
        status: TagFilter::Only(ProjectStatus::InProgress),
    };
    assert_eq!(project_ids(&filter.apply(&projects)), vec!["3"]);

    let contradictory = ProjectFilter {
        status: TagFilter::Only(ProjectStatus::Completed),
        ..filter
    };
    assert!(contradictory.apply(&projects).is_empty());
}

#[rstest]
#[case("", TagFilter::All)]
#[case("all", TagFilter::All)]
#[case("health", TagFilter::Only(ProjectCategory::Health))]
fn tag_filter_parses(#[case] raw: &str, #[case] expected: TagFilter<ProjectCategory>) {
    assert_eq!(raw.parse::<TagFilter<ProjectCategory>>(), Ok(expected));
}

#[test]
fn tag_filter_rejects_unknown_tags() {
    let err = "parks"
        .parse::<TagFilter<ProjectCategory>>()
        .expect_err("unknown category");
    assert_eq!(err.vocabulary(), "project category");
}

fn challenge(
    id: &str,
    kind: ChallengeType,
    deadline: Option<DateTime<Utc>>,
    active: bool,
) -> Challenge {
    Challenge {
        id: ChallengeId::new(id).expect("valid id"),
        title: format!("Challenge {id}"),
        description: "Do something good.".to_owned(),
        kind,
        points: 100,
        deadline,
        requirements: Vec::new(),
        completed_by: Vec::new(),
        created_at: at(1, 0),
        is_active: active,
    }
}

#[fixture]
fn now() -> DateTime<Utc> {
    at(27, 12)
}

#[fixture]
fn challenges(now: DateTime<Utc>) -> Vec<Challenge> {
    vec![
        challenge("soon", ChallengeType::Team, Some(now + TimeDelta::days(5)), true),
        challenge("later", ChallengeType::Individual, Some(now + TimeDelta::days(10)), true),
        challenge("open", ChallengeType::Individual, None, true),
        challenge("past", ChallengeType::Community, Some(now - TimeDelta::days(1)), true),
        challenge("paused", ChallengeType::Team, Some(now + TimeDelta::days(3)), false),
    ]
}

fn challenge_ids(filtered: &Filtered<Challenge>) -> Vec<String> {
    ids(filtered, |c| c.id.as_ref())
}

#[rstest]
#[case(ChallengeWindow::All, vec!["soon", "later", "open", "past", "paused"])]
#[case(ChallengeWindow::Active, vec!["soon", "later", "open"])]
#[case(ChallengeWindow::EndingSoon, vec!["soon", "paused"])]
#[case(ChallengeWindow::Completed, vec!["past", "paused"])]
fn challenge_windows(
    challenges: Vec<Challenge>,
    now: DateTime<Utc>,
    #[case] window: ChallengeWindow,
    #[case] expected: Vec<&str>,
) {
    let filter = ChallengeFilter {
        kind: TagFilter::All,
        window,
    };
    assert_eq!(challenge_ids(&filter.apply(&challenges, now)), expected);
}

#[rstest]
fn challenge_type_and_window_compose(challenges: Vec<Challenge>, now: DateTime<Utc>) {
    let filter = ChallengeFilter {
        kind: TagFilter::Only(ChallengeType::Team),
        window: ChallengeWindow::Active,
    };
    assert_eq!(challenge_ids(&filter.apply(&challenges, now)), vec!["soon"]);
}

#[rstest]
#[case("", ChallengeWindow::All)]
#[case("all", ChallengeWindow::All)]
#[case("active", ChallengeWindow::Active)]
#[case("ending_soon", ChallengeWindow::EndingSoon)]
#[case("completed", ChallengeWindow::Completed)]
fn window_parses(#[case] raw: &str, #[case] expected: ChallengeWindow) {
    assert_eq!(raw.parse::<ChallengeWindow>(), Ok(expected));
}

#[test]
fn window_rejects_unknown_values() {
    assert!("tomorrow".parse::<ChallengeWindow>().is_err());
}

fn post(
    id: &str,
    author: &str,
    category: ForumCategory,
    pinned: bool,
    created: DateTime<Utc>,
) -> ForumPost {
    ForumPost {
        id: ForumPostId::new(id).expect("valid id"),
        title: format!("Thread {id}"),
        content: "Let us talk about the bus timetable.".to_owned(),
        category,
        author: member(id, author),
        replies: Vec::new(),
        likes: 0,
        is_pinned: pinned,
        tags: vec!["transport".to_owned()],
        created_at: created,
        updated_at: created,
    }
}

#[fixture]
fn posts() -> Vec<ForumPost> {
    vec![
        post("old-pinned", "Green City NGO", ForumCategory::Announcements, true, at(1, 0)),
        post("newest", "João Santos", ForumCategory::General, false, at(26, 0)),
        post("new-pinned", "Maria Silva", ForumCategory::Announcements, true, at(25, 0)),
        post("older", "Maria Silva", ForumCategory::Help, false, at(10, 0)),
    ]
}

fn post_ids(filtered: &Filtered<ForumPost>) -> Vec<String> {
    ids(filtered, |p| p.id.as_ref())
}

#[rstest]
fn pinned_threads_sort_first_then_newest(posts: Vec<ForumPost>) {
    let filtered = ForumFilter::default().apply(&posts);
    assert_eq!(
        post_ids(&filtered),
        vec!["new-pinned", "old-pinned", "newest", "older"]
    );
}

#[rstest]
fn forum_search_matches_author_name(posts: Vec<ForumPost>) {
    let filter = ForumFilter {
        search: SearchTerm::new("maria"),
        category: TagFilter::All,
    };
    assert_eq!(post_ids(&filter.apply(&posts)), vec!["new-pinned", "older"]);
}

#[rstest]
fn forum_category_filter(posts: Vec<ForumPost>) {
    let filter = ForumFilter {
        search: SearchTerm::default(),
        category: TagFilter::Only(ForumCategory::Announcements),
    };
    assert_eq!(post_ids(&filter.apply(&posts)), vec!["new-pinned", "old-pinned"]);
}

#[test]
fn search_term_is_case_insensitive() {
    let term = SearchTerm::new("BuS");
    assert!(term.matches("Night bus routes"));
    assert!(!term.matches("Tram"));
    assert!(SearchTerm::new("").matches("anything"));
}
