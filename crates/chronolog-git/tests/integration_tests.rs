//! Integration tests for chronolog-git
//!
//! Each test builds a throwaway repository with git2 so results do not
//! depend on the checkout the tests run from.

use git2::{Oid, Repository, RepositoryInitOptions, Signature, Time};
use similar_asserts::assert_eq;
use tempfile::TempDir;

use chronolog_core::{ChangelogConfig, RepositoryProvider, Tag, generate_changelog};
use chronolog_git::{GitError, GitRepo};

// 2026-01-01 00:00:00 UTC
const BASE: i64 = 1_767_225_600;

fn init_repo() -> (TempDir, Repository) {
    let dir = TempDir::new().expect("temp dir");
    let mut opts = RepositoryInitOptions::new();
    opts.initial_head("main");
    let repo = Repository::init_opts(dir.path(), &opts).expect("init repo");
    (dir, repo)
}

fn signature(seconds: i64, offset_minutes: i32) -> Signature<'static> {
    Signature::new(
        "A Tester",
        "tester@example.com",
        &Time::new(seconds, offset_minutes),
    )
    .expect("signature")
}

fn add_commit(repo: &Repository, message: &str, seconds: i64) -> Oid {
    let sig = signature(seconds, 0);
    let tree_id = {
        let mut index = repo.index().expect("index");
        index.write_tree().expect("write tree")
    };
    let tree = repo.find_tree(tree_id).expect("find tree");
    let parent = repo.head().ok().and_then(|head| head.peel_to_commit().ok());
    let parents: Vec<&git2::Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .expect("commit")
}

fn tag_annotated(repo: &Repository, name: &str, oid: Oid, seconds: i64, offset_minutes: i32) {
    let object = repo.find_object(oid, None).expect("find object");
    let tagger = signature(seconds, offset_minutes);
    repo.tag(name, &object, &tagger, &format!("release {name}"), false)
        .expect("annotated tag");
}

fn tag_lightweight(repo: &Repository, name: &str, oid: Oid) {
    let object = repo.find_object(oid, None).expect("find object");
    repo.tag_lightweight(name, &object, false)
        .expect("lightweight tag");
}

#[test]
fn test_open_and_discover() {
    let (dir, _repo) = init_repo();
    assert!(GitRepo::open(dir.path()).is_ok());
    assert!(GitRepo::discover(dir.path()).is_ok());
}

#[test]
fn test_open_nonexistent_repository() {
    let err = GitRepo::open("/nonexistent/path/12345")
        .err()
        .expect("open must fail");
    match err {
        GitError::RepositoryNotFound { path } => assert!(path.contains("nonexistent")),
        other => panic!("expected RepositoryNotFound, got {other:?}"),
    }
}

#[test]
fn test_commits_newest_first() {
    let (dir, repo) = init_repo();
    add_commit(&repo, "First", BASE);
    add_commit(&repo, "Second", BASE + 100);
    add_commit(&repo, "Third", BASE + 200);

    let git = GitRepo::open(dir.path()).expect("open");
    let subjects: Vec<String> = git
        .commits()
        .expect("walk")
        .map(|c| c.expect("commit").subject().to_string())
        .collect();

    assert_eq!(subjects, vec!["Third", "Second", "First"]);
}

#[test]
fn test_walk_is_restartable() {
    let (dir, repo) = init_repo();
    add_commit(&repo, "First", BASE);
    add_commit(&repo, "Second", BASE + 100);

    let git = GitRepo::open(dir.path()).expect("open");
    let first: Vec<String> = git
        .commits()
        .expect("walk")
        .map(|c| c.expect("commit").id)
        .collect();
    let second: Vec<String> = git
        .commits()
        .expect("walk")
        .map(|c| c.expect("commit").id)
        .collect();

    assert_eq!(first, second);
}

#[test]
fn test_branch_name() {
    let (dir, repo) = init_repo();
    add_commit(&repo, "First", BASE);

    let git = GitRepo::open(dir.path()).expect("open");
    assert_eq!(git.current_branch().expect("branch"), "main");
}

#[test]
fn test_head_is_latest_commit() {
    let (dir, repo) = init_repo();
    add_commit(&repo, "First", BASE);
    let tip = add_commit(&repo, "Second", BASE + 100);

    let git = GitRepo::open(dir.path()).expect("open");
    let head = git.head().expect("head");
    assert_eq!(head.id, tip.to_string());
    assert_eq!(head.subject(), "Second");
}

#[test]
fn test_tag_list_covers_annotated_and_lightweight() {
    let (dir, repo) = init_repo();
    let c1 = add_commit(&repo, "First", BASE);
    let c2 = add_commit(&repo, "Second", BASE + 100);
    tag_annotated(&repo, "v1.0", c1, BASE + 50, 0);
    tag_lightweight(&repo, "v2.0", c2);

    let git = GitRepo::open(dir.path()).expect("open");
    let mut tags = git.tag_list().expect("tags");
    tags.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(
        tags,
        vec![
            Tag::new("v1.0", c1.to_string()),
            Tag::new("v2.0", c2.to_string()),
        ]
    );
}

#[test]
fn test_resolve_annotated_tag_uses_tagger_date_and_timezone() {
    let (dir, repo) = init_repo();
    let c1 = add_commit(&repo, "First", BASE);
    // Tagger at +01:30
    tag_annotated(&repo, "v1.0", c1, BASE + 86_400, 90);

    let git = GitRepo::open(dir.path()).expect("open");
    let resolved = git.resolve(&Tag::new("v1.0", c1.to_string())).expect("resolve");

    assert_eq!(resolved.date.timestamp(), BASE + 86_400);
    assert_eq!(resolved.date.offset().local_minus_utc(), 90 * 60);
}

#[test]
fn test_resolve_lightweight_tag_falls_back_to_commit_date() {
    let (dir, repo) = init_repo();
    let c1 = add_commit(&repo, "First", BASE);
    tag_lightweight(&repo, "v1.0", c1);

    let git = GitRepo::open(dir.path()).expect("open");
    let resolved = git.resolve(&Tag::new("v1.0", c1.to_string())).expect("resolve");

    assert_eq!(resolved.date.timestamp(), BASE);
}

#[test]
fn test_resolve_missing_tag_fails() {
    let (dir, repo) = init_repo();
    let c1 = add_commit(&repo, "First", BASE);

    let git = GitRepo::open(dir.path()).expect("open");
    let result = git.resolve(&Tag::new("v9.9", c1.to_string()));
    assert!(matches!(result, Err(GitError::InvalidReference { .. })));
}

#[test]
fn test_merge_commit_has_two_parents() {
    let (dir, repo) = init_repo();
    let c1 = add_commit(&repo, "First", BASE);
    let c1_commit = repo.find_commit(c1).expect("find c1");
    repo.branch("side", &c1_commit, false).expect("branch");

    let sig = signature(BASE + 50, 0);
    let tree_id = {
        let mut index = repo.index().expect("index");
        index.write_tree().expect("write tree")
    };
    let tree = repo.find_tree(tree_id).expect("find tree");
    let s1 = repo
        .commit(Some("refs/heads/side"), &sig, &sig, "Side work", &tree, &[&c1_commit])
        .expect("side commit");

    let c2 = add_commit(&repo, "Second", BASE + 100);
    let merge_sig = signature(BASE + 200, 0);
    repo.commit(
        Some("HEAD"),
        &merge_sig,
        &merge_sig,
        "Merge side into main",
        &tree,
        &[
            &repo.find_commit(c2).expect("find c2"),
            &repo.find_commit(s1).expect("find s1"),
        ],
    )
    .expect("merge commit");

    let git = GitRepo::open(dir.path()).expect("open");
    let head = git.head().expect("head");
    assert_eq!(head.parents.len(), 2);
    assert!(head.is_merge());
}

#[test]
fn test_generate_changelog_from_real_repository() {
    let (dir, repo) = init_repo();
    add_commit(&repo, "First change", BASE);
    let c2 = add_commit(&repo, "Version bump to 1.0.0", BASE + 100);
    add_commit(&repo, "Third change", BASE + 200);
    // 2026-01-02, tagger at +01:00
    tag_annotated(&repo, "v1.0", c2, BASE + 86_400, 60);

    let git = GitRepo::open(dir.path()).expect("open");
    let mut sink = Vec::new();
    let latest =
        generate_changelog(&ChangelogConfig::default(), &git, &mut sink).expect("generate");

    let output = String::from_utf8(sink).expect("utf-8 output");
    assert_eq!(
        output,
        "Changelog\n=========\n\
         Commits on branch \"main\"\n\n\
         \x20* Third change\n\
         \nVersion v1.0 - 01/02/2026\n\n\
         \x20* Version bump to 1.0.0\n\
         \x20* First change\n"
    );
    assert_eq!(latest.map(|t| t.name), Some("v1.0".to_string()));
}

#[test]
fn test_provider_trait_surface() {
    let (dir, repo) = init_repo();
    let c1 = add_commit(&repo, "First", BASE);
    tag_lightweight(&repo, "v1.0", c1);

    let git = GitRepo::open(dir.path()).expect("open");
    let provider: &dyn RepositoryProvider = &git;

    assert_eq!(provider.branch_name().expect("branch"), "main");
    assert_eq!(provider.head_commit().expect("head").id, c1.to_string());
    assert_eq!(provider.tags().expect("tags").len(), 1);
    let commits: Vec<_> = provider.walk().expect("walk").collect();
    assert_eq!(commits.len(), 1);
}
