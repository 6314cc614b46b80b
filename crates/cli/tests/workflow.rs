// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod common;
use common::*;

#[test]
fn student_raises_admin_resolves() {
    let temp = campus();
    let id = create_issue(&temp, "alice", "hostel", "Fan broken");

    stix_as(&temp, "alice")
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("[Pending] {id}: Fan broken")))
        .stdout(predicate::str::contains("[All (1)]  Pending (1)"));

    stix_as(&temp, "root")
        .args(["status", &id, "in_progress"])
        .assert()
        .success()
        .stdout("Issue status updated successfully\n");

    stix_as(&temp, "root")
        .args(["comment", &id, "Technician assigned."])
        .assert()
        .success()
        .stdout("Comment added successfully\n");

    stix_as(&temp, "alice")
        .args(["show", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("In Progress"))
        .stdout(predicate::str::contains("Reported by: Alice Doe"))
        .stdout(predicate::str::contains("Comments (1):"))
        .stdout(predicate::str::contains("Staff Admin [Admin]"));

    stix_as(&temp, "root")
        .args(["status", &id, "resolved"])
        .assert()
        .success();

    stix_as(&temp, "root")
        .arg("admin")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Total Issues: 1  Pending: 0  In Progress: 0  Resolved Today: 1",
        ));
}

#[test]
fn dashboard_filters_and_tabs() {
    let temp = campus();
    create_issue(&temp, "alice", "hostel", "Fan broken");
    let wifi = create_issue(&temp, "alice", "technical", "Wifi down");

    stix_as(&temp, "alice")
        .args(["dashboard", "-c", "technical"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Filters: category=technical"))
        .stdout(predicate::str::contains("Wifi down"))
        .stdout(predicate::str::contains("Fan broken").not());

    stix_as(&temp, "root")
        .args(["status", &wifi, "resolved"])
        .assert()
        .success();

    stix_as(&temp, "alice")
        .args(["dashboard", "--tab", "resolved"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[Resolved (1)]"))
        .stdout(predicate::str::contains("Wifi down"))
        .stdout(predicate::str::contains("Fan broken").not());
}

#[test]
fn students_only_see_their_own_issues() {
    let temp = campus();
    add_user(&temp, "bob", "Bob Roe");
    create_issue(&temp, "alice", "hostel", "Alice's fan");
    create_issue(&temp, "bob", "hostel", "Bob's fan");

    stix_as(&temp, "bob")
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob's fan"))
        .stdout(predicate::str::contains("Alice's fan").not());
}

#[test]
fn admin_status_filter() {
    let temp = campus();
    let fan = create_issue(&temp, "alice", "hostel", "Fan broken");
    create_issue(&temp, "alice", "hr", "Leave form");

    stix_as(&temp, "root")
        .args(["status", &fan, "closed"])
        .assert()
        .success();

    stix_as(&temp, "root")
        .args(["admin", "-s", "closed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Fan broken"))
        .stdout(predicate::str::contains("Leave form").not());

    stix_as(&temp, "root")
        .args(["admin", "-s", "under_review"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No issues found with the selected filters.",
        ));
}

#[test]
fn show_missing_issue_placeholder() {
    let temp = campus();

    stix_as(&temp, "alice")
        .args(["show", "test-00000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Issue not found"));
}

#[test]
fn blank_comment_rejected() {
    let temp = campus();
    let id = create_issue(&temp, "alice", "hostel", "Fan broken");

    stix_as(&temp, "alice")
        .args(["comment", &id, "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Comment cannot be empty"));
}

#[test]
fn log_records_activity() {
    let temp = campus();
    let id = create_issue(&temp, "alice", "hostel", "Fan broken");
    stix_as(&temp, "root")
        .args(["status", &id, "under_review"])
        .assert()
        .success();
    stix_as(&temp, "alice")
        .args(["comment", &id, "Thanks"])
        .assert()
        .success();

    stix_as(&temp, "alice")
        .args(["log", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice created"))
        .stdout(predicate::str::contains("root status pending -> under_review"))
        .stdout(predicate::str::contains("alice commented \"Thanks\""));
}
