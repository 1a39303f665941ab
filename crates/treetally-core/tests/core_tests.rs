use treetally_core::{
    Classifier, GENERIC_CATEGORY, Node, NodeKind, ProjectConfig, ScanWarning, Totals, WarningKind,
};

#[test]
fn test_nested_tree_shape() {
    let file = Node::file("proj/src/main.ts", "main.ts", 64, ".ts", 12);
    let src = Node::directory("proj/src", "src", 4096, vec![file]);
    let readme = Node::file("proj/README.md", "README.md", 20, ".md", 3);
    let root = Node::directory("proj", "proj", 4096, vec![src, readme]);

    assert!(root.is_dir());
    let children = root.children().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].name.as_str(), "src");
    assert_eq!(children[1].name.as_str(), "README.md");

    // File and directory attribute sets never overlap.
    for child in children {
        match &child.kind {
            NodeKind::File { .. } => {
                assert!(child.children().is_none());
                assert!(child.extension().is_some());
                assert!(child.line_count().is_some());
            }
            NodeKind::Directory { .. } => {
                assert!(child.children().is_some());
                assert!(child.extension().is_none());
                assert!(child.line_count().is_none());
            }
        }
    }
}

#[test]
fn test_logical_paths_are_slash_joined() {
    let file = Node::file("proj/src/main.ts", "main.ts", 64, ".ts", 12);
    assert_eq!(file.path.as_str(), "proj/src/main.ts");
    assert_eq!(file.name.as_str(), "main.ts");
}

#[test]
fn test_config_from_json() {
    let config: ProjectConfig = serde_json::from_str(
        r#"{
            "name": "Projeto Teste",
            "path": "/data/project",
            "git": "git@example.com:team/project.git",
            "ignore": ["node_modules", ".git"],
            "categories": { ".rs": "rust" }
        }"#,
    )
    .unwrap();

    assert_eq!(config.name, "Projeto Teste");
    assert!(config.is_ignored("node_modules"));
    assert!(!config.is_ignored("src"));
    // The git field is carried but nothing reads it beyond this.
    assert!(!config.git.is_empty());
    assert_eq!(config.categories.get(".rs").map(String::as_str), Some("rust"));
}

#[test]
fn test_config_from_minimal_json() {
    let config: ProjectConfig = serde_json::from_str(r#"{ "path": "." }"#).unwrap();
    assert_eq!(config.name, "project");
    assert!(config.git.is_empty());
    assert!(config.ignore.is_empty());
    assert!(config.categories.is_empty());
}

#[test]
fn test_classifier_is_total() {
    let classifier = Classifier::new();
    for input in ["", ".", ".ts", "ts", ".TAR.GZ", "no-dot", ".🦀", ".a very long extension"] {
        // Every input classifies to something; unmapped ones to the generic category.
        let category = classifier.classify(input);
        assert!(!category.is_empty());
    }
    assert_eq!(classifier.classify(".unknown"), GENERIC_CATEGORY);
}

#[test]
fn test_classifier_rules_from_config() {
    let config: ProjectConfig = serde_json::from_str(
        r#"{ "path": ".", "categories": { ".php": "typescript" } }"#,
    )
    .unwrap();

    // A config rule can restore the legacy mapping for .php.
    let classifier = Classifier::with_rules(&config.categories);
    assert_eq!(classifier.classify(".php"), "typescript");
}

#[test]
fn test_totals_scenario() {
    let classifier = Classifier::new();
    let mut totals = Totals::new();

    totals.record_directory(4096);
    totals.record_file(&classifier, ".ts", 2, 2);

    assert_eq!(totals.total_files, 1);
    assert_eq!(totals.total_directories, 1);
    assert_eq!(totals.total_lines, 2);
    assert_eq!(totals.total_size, 4098);

    let entry = totals.extension_count(".ts").unwrap();
    assert_eq!(entry.display_name, "typescript");
    assert_eq!(entry.extension.as_str(), ".ts");
    assert_eq!(entry.count, 1);
}

#[test]
fn test_warnings_serialize() {
    let warning = ScanWarning::new(
        "/tmp/sock",
        "not a file or directory: /tmp/sock",
        WarningKind::UnsupportedKind,
    );
    let json = serde_json::to_string(&warning).unwrap();
    let back: ScanWarning = serde_json::from_str(&json).unwrap();
    assert_eq!(back.kind, WarningKind::UnsupportedKind);
    assert_eq!(back.path, std::path::PathBuf::from("/tmp/sock"));
}
