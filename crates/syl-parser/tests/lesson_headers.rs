//! Header extraction over script files on disk, in the layout of the
//! curated lesson collection.

use std::path::Path;

use chrono::{Datelike, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use syl_parser::{ParseError, discover, parse_file};
use tempfile::TempDir;

const QML: &str = r#"
# -*- coding: utf-8 -*-
"""
Quantum Machine Learning (QML) Interactive Lesson

This script provides an introduction to the exciting field of Quantum Machine
Learning. We'll explore the basic concepts and build a simple quantum classifier.

Author: Gemini
Date: 2025-08-24
"""

# #############################################################################
# # Part 1: Introduction to Quantum Machine Learning                       #
# #############################################################################

# ---
# Key QML Concepts You'll Encounter:
# ---

# #############################################################################
# # Part 2: Setup and Data Generation                                      #
# #############################################################################

import pennylane as qml

# #############################################################################
# # Part 3: Building the Quantum Classifier                                #
# #############################################################################
"#;

const SAAS: &str = r#"# -*- coding: utf-8 -*-
"""
SaaS Data Analyst Script for Stress Analysis

This script generates key performance indicators (KPIs) and visualizations that
would be valuable for a business dashboard focused on student well-being.

Author: Gemini
Date: 2025-08-24
"""

#############################################################################
# Part 1: Introduction to SaaS Data Analysis                             #
#############################################################################
"#;

fn write(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).unwrap();
}

#[rstest]
#[case(QML, "Quantum Machine Learning (QML) Interactive Lesson", 3)]
#[case(SAAS, "SaaS Data Analyst Script for Stress Analysis", 1)]
fn collection_headers_parse(#[case] source: &str, #[case] title: &str, #[case] sections: usize) {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "lesson.py", source);

    let header = parse_file(&temp.path().join("lesson.py")).unwrap();
    assert_eq!(header.title, title);
    assert_eq!(header.author.as_deref(), Some("Gemini"));
    let date = header.date.unwrap();
    assert_eq!((date.year(), date.month(), date.day()), (2025, 8, 24));
    assert!(date <= Utc::now());
    assert_eq!(header.sections.len(), sections);
    assert!(header.summary.unwrap().starts_with("This script "));
}

#[test]
fn discovered_scripts_parse_in_path_order() {
    let temp = TempDir::new().unwrap();
    let lessons = temp.path().join("lessons");
    std::fs::create_dir(&lessons).unwrap();
    write(&lessons, "saas_dashboard_analysis.py", SAAS);
    write(&lessons, "qml_interactive_lesson.py", QML);
    write(&lessons, "README.md", "# Lessons\n");

    let titles: Vec<String> = discover(&[&lessons])
        .unwrap()
        .iter()
        .map(|path| parse_file(path).unwrap().title)
        .collect();
    assert_eq!(
        titles,
        vec![
            "Quantum Machine Learning (QML) Interactive Lesson",
            "SaaS Data Analyst Script for Stress Analysis",
        ]
    );
}

#[test]
fn unreadable_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = parse_file(&temp.path().join("missing.py")).unwrap_err();
    assert!(matches!(err, ParseError::Io { .. }));
}
