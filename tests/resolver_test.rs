//! Tests for layered task→model resolution

use std::fs;
use std::path::PathBuf;

use rstest::{fixture, rstest};
use tempfile::TempDir;

use llm_manager::application::{ApplicationError, Origin, Resolver};
use llm_manager::config::ConfigPaths;
use llm_manager::domain::{DefaultTable, DomainError};
use llm_manager::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[fixture]
fn temp() -> TempDir {
    TempDir::new().expect("create temp dir")
}

/// Paths inside `dir` whether or not the files exist yet.
fn paths_in(dir: &TempDir) -> ConfigPaths {
    ConfigPaths::new(dir.path().join("user.conf"), dir.path().join("system.conf"))
}

fn write_user(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("user.conf");
    fs::write(&path, content).expect("write user conf");
    path
}

fn write_system(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("system.conf");
    fs::write(&path, content).expect("write system conf");
    path
}

#[rstest]
fn given_task_in_both_files_when_resolving_then_user_value_wins(temp: TempDir) {
    // Arrange
    write_user(&temp, "chat=user-model\n");
    write_system(&temp, "chat=system-model\n");
    let resolver = Resolver::new(paths_in(&temp), DefaultTable::default());

    // Act
    let resolution = resolver.resolve("chat").unwrap();

    // Assert
    assert_eq!(resolution.model, "user-model");
    assert_eq!(resolution.origin, Origin::User);
}

#[rstest]
fn given_task_only_in_system_file_when_resolving_then_system_value_used(temp: TempDir) {
    // Arrange
    write_user(&temp, "other=x\n");
    write_system(&temp, "chat=system-model\n");
    let resolver = Resolver::new(paths_in(&temp), DefaultTable::default());

    // Act
    let resolution = resolver.resolve("chat").unwrap();

    // Assert
    assert_eq!(resolution.model, "system-model");
    assert_eq!(resolution.origin, Origin::System);
}

#[rstest]
fn given_task_in_no_file_when_resolving_then_builtin_default_used(temp: TempDir) {
    // Arrange - neither file exists
    let resolver = Resolver::new(paths_in(&temp), DefaultTable::default());

    // Act
    let resolution = resolver.resolve("text-generation").unwrap();

    // Assert
    assert_eq!(resolution.model, "gemma2:2b");
    assert_eq!(resolution.origin, Origin::Builtin);
}

#[rstest]
fn given_unknown_task_when_resolving_then_task_not_found(temp: TempDir) {
    // Arrange
    let resolver = Resolver::new(paths_in(&temp), DefaultTable::default());

    // Act
    let err = resolver.resolve("no-such-task").unwrap_err();

    // Assert
    assert!(matches!(
        err,
        ApplicationError::TaskNotFound { ref task } if task == "no-such-task"
    ));
    assert_eq!(err.to_string(), "task 'no-such-task' is not set");
}

#[rstest]
fn given_empty_default_table_when_resolving_then_files_still_consulted(temp: TempDir) {
    // Arrange
    write_system(&temp, "chat=system-model\n");
    let resolver = Resolver::new(paths_in(&temp), DefaultTable::empty());

    // Act / Assert
    assert_eq!(resolver.resolve("chat").unwrap().model, "system-model");
    assert!(resolver.resolve("text-generation").is_err());
}

#[rstest]
fn given_malformed_user_file_when_resolving_then_parse_error(temp: TempDir) {
    // Arrange
    write_user(&temp, "not-a-valid-line\n");
    write_system(&temp, "chat=system-model\n");
    let resolver = Resolver::new(paths_in(&temp), DefaultTable::default());

    // Act
    let err = resolver.resolve("chat").unwrap_err();

    // Assert - malformed content aborts, no partial resolution
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::MalformedLine { line: 1, .. })
    ));
}

#[rstest]
fn given_malformed_system_file_when_resolving_then_error_even_if_user_defines_task(temp: TempDir) {
    // Arrange
    write_user(&temp, "chat=user-model\n");
    write_system(&temp, "broken line without equals\n");
    let resolver = Resolver::new(paths_in(&temp), DefaultTable::default());

    // Act / Assert
    assert!(resolver.resolve("chat").is_err());
}

#[rstest]
fn given_external_edit_between_calls_when_resolving_then_fresh_value_returned(temp: TempDir) {
    // Arrange
    write_user(&temp, "chat=before\n");
    let resolver = Resolver::new(paths_in(&temp), DefaultTable::default());
    assert_eq!(resolver.resolve("chat").unwrap().model, "before");

    // Act - simulate an edit by another process
    write_user(&temp, "chat=after\n");

    // Assert - no caching across calls
    assert_eq!(resolver.resolve("chat").unwrap().model, "after");
}

#[rstest]
fn given_directory_at_config_path_when_resolving_then_treated_as_empty(temp: TempDir) {
    // Arrange
    fs::create_dir(temp.path().join("user.conf")).unwrap();
    let resolver = Resolver::new(paths_in(&temp), DefaultTable::default());

    // Act / Assert
    assert_eq!(resolver.resolve("chat").unwrap().origin, Origin::Builtin);
}

#[rstest]
fn given_unreadable_user_file_when_resolving_then_layer_counts_as_empty(temp: TempDir) {
    // Arrange - invalid UTF-8 makes the read fail regardless of privileges
    fs::write(temp.path().join("user.conf"), [0xff, 0xfe, 0x00, 0x01]).unwrap();
    write_system(&temp, "chat=system-model\n");
    let resolver = Resolver::new(paths_in(&temp), DefaultTable::default());

    // Act
    let resolution = resolver.resolve("chat").unwrap();

    // Assert - warning on stderr, resolution falls through to the next layer
    assert_eq!(resolution.model, "system-model");
    assert_eq!(resolution.origin, Origin::System);
}

#[rstest]
fn given_empty_task_when_resolving_then_rejected(temp: TempDir) {
    // Arrange
    let resolver = Resolver::new(paths_in(&temp), DefaultTable::default());

    // Act / Assert
    assert!(matches!(
        resolver.resolve("").unwrap_err(),
        ApplicationError::Domain(DomainError::InvalidTask(_))
    ));
}

#[rstest]
fn given_entries_in_both_files_when_merging_then_user_overrides_system(temp: TempDir) {
    // Arrange
    write_user(&temp, "chat=user-model\nvision=llava:7b\n");
    write_system(&temp, "chat=system-model\ntranslation=mixtral:8x7b\n");
    let resolver = Resolver::new(paths_in(&temp), DefaultTable::default());

    // Act
    let merged = resolver.merged().unwrap();

    // Assert - defaults are not part of the listing
    assert_eq!(merged.len(), 3);
    assert_eq!(merged.get("chat"), Some(&"user-model".to_string()));
    assert_eq!(merged.get("vision"), Some(&"llava:7b".to_string()));
    assert_eq!(merged.get("translation"), Some(&"mixtral:8x7b".to_string()));
}

#[rstest]
fn given_no_files_when_merging_then_empty_map(temp: TempDir) {
    // Arrange
    let resolver = Resolver::new(paths_in(&temp), DefaultTable::default());

    // Act / Assert
    assert!(resolver.merged().unwrap().is_empty());
}
