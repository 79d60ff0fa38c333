//! Shared fixtures for navrail integration tests
//!
//! The sample menu mirrors the hiring/HR rail the engine was built for,
//! in both TOML form (for CLI tests) and built form (for library tests).

#![allow(dead_code)]

use navrail::{MenuNode, MenuTree};

pub const SAMPLE_MENU_TOML: &str = r#"
[[item]]
key = "sub1"
label = "Hiring"
access = [2]

[[item.children]]
key = "6"
label = "CV pool"
to = "/hiring-cv-pool"
access = [2]

[[item.children]]
key = "7"
label = "Job Posting"
to = "/hiring-job-posting"
access = [2]

[[item.children]]
key = "8"
label = "Review CV"
to = "/hiring-review-cv"
access = [2]

[[item]]
key = "sub2"
label = "HR"
access = [2, 3, 5]

[[item.children]]
key = "9"
label = "Dashboard"
to = "/hiring-dashboard"
access = [2]

[[item.children]]
key = "10"
label = "Employee Skill Matrix"
to = "/hiring-skillmatrix"
access = [2]

[[item.children]]
key = "11"
label = "Onboarding"
to = "/onboarding"
access = [2, 3, 5]

[[item.children]]
key = "12"
label = "Offboarding"
to = "/offboarding"
access = [2, 3, 5]

[[item.children]]
key = "13"
label = "Active Members"

[[item.children]]
key = "sub3"
label = "Report"

[[item.children.children]]
key = "14"
label = "Option 14"

[[item.children.children]]
key = "15"
label = "Option 15"

[[item.children]]
key = "sub4"
label = "Leave Tracker"

[[item.children.children]]
key = "16"
label = "Option 16"

[[item.children.children]]
key = "17"
label = "Option 17"

[[item.children]]
key = "sub5"
label = "Biometric"

[[item.children.children]]
key = "18"
label = "Option 18"

[[item.children.children]]
key = "19"
label = "Option 19"
"#;

pub fn sample_tree() -> MenuTree {
    MenuTree::new(vec![
        MenuNode::group(
            "sub1",
            "Hiring",
            vec![
                MenuNode::leaf("6", "CV pool")
                    .with_target("/hiring-cv-pool")
                    .with_access([2]),
                MenuNode::leaf("7", "Job Posting")
                    .with_target("/hiring-job-posting")
                    .with_access([2]),
                MenuNode::leaf("8", "Review CV")
                    .with_target("/hiring-review-cv")
                    .with_access([2]),
            ],
        )
        .with_access([2]),
        MenuNode::group(
            "sub2",
            "HR",
            vec![
                MenuNode::leaf("9", "Dashboard")
                    .with_target("/hiring-dashboard")
                    .with_access([2]),
                MenuNode::leaf("10", "Employee Skill Matrix")
                    .with_target("/hiring-skillmatrix")
                    .with_access([2]),
                MenuNode::leaf("11", "Onboarding")
                    .with_target("/onboarding")
                    .with_access([2, 3, 5]),
                MenuNode::leaf("12", "Offboarding")
                    .with_target("/offboarding")
                    .with_access([2, 3, 5]),
                MenuNode::leaf("13", "Active Members"),
                MenuNode::group(
                    "sub3",
                    "Report",
                    vec![
                        MenuNode::leaf("14", "Option 14"),
                        MenuNode::leaf("15", "Option 15"),
                    ],
                ),
                MenuNode::group(
                    "sub4",
                    "Leave Tracker",
                    vec![
                        MenuNode::leaf("16", "Option 16"),
                        MenuNode::leaf("17", "Option 17"),
                    ],
                ),
                MenuNode::group(
                    "sub5",
                    "Biometric",
                    vec![
                        MenuNode::leaf("18", "Option 18"),
                        MenuNode::leaf("19", "Option 19"),
                    ],
                ),
            ],
        )
        .with_access([2, 3, 5]),
    ])
    .unwrap()
}
