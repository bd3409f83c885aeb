/// Integration tests for the application layer
mod test_utilities;

use repo_sbom::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use test_utilities::mocks::*;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// Two repositories: a Python service and an npm frontend with a lock file
fn sample_workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(
        &root.join("api/requirements.txt"),
        "flask==2.0.1\nrequests>=2.25\n# pinned for py3.8\nnumpy==1.21.0\n",
    );
    write(
        &root.join("web/package.json"),
        r#"{"name": "web", "dependencies": {"react": "^18.2.0", "left-pad": "1.3.0"}}"#,
    );
    write(
        &root.join("web/package-lock.json"),
        r#"{
  "lockfileVersion": 1,
  "dependencies": {
    "left-pad": {"version": "1.3.0"},
    "react": {"version": "18.2.0"},
    "loose-envify": {"version": "1.4.0"}
  }
}"#,
    );
    write(
        &root.join("web/node_modules/react/package.json"),
        r#"{"dependencies": {"loose-envify": "^1.1.0"}}"#,
    );
    dir
}

fn use_case(
    filter: DirectoryFilter,
    resolver: MockRevisionResolver,
    reporter: MockProgressReporter,
) -> GenerateSbomUseCase<
    FileSystemDiscoverer,
    FileSystemReader,
    MockRevisionResolver,
    MockProgressReporter,
> {
    GenerateSbomUseCase::new(
        FileSystemDiscoverer::new(filter),
        FileSystemReader::new(),
        resolver,
        reporter,
    )
}

#[test]
fn test_generate_sbom_happy_path() {
    let workspace = sample_workspace();
    let root = workspace.path();
    let reporter = MockProgressReporter::new();
    let resolver = MockRevisionResolver::new().with_revision(root.join("web"), "9f8e7d6c");
    let filter = DirectoryFilter::new(vec!["node_modules".to_string()]).unwrap();

    let response = use_case(filter, resolver, reporter.clone())
        .execute(SbomRequest::new(root.to_path_buf()))
        .unwrap();

    assert_eq!(response.repository_count, 2);
    let rows: Vec<(&str, &str, Ecosystem, Relationship)> = response
        .records
        .iter()
        .map(|r| (r.name(), r.version(), r.ecosystem(), r.relationship()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("flask", "2.0.1", Ecosystem::Pip, Relationship::Direct),
            ("numpy", "1.21.0", Ecosystem::Pip, Relationship::Direct),
            ("react", "^18.2.0", Ecosystem::Npm, Relationship::Direct),
            ("left-pad", "1.3.0", Ecosystem::Npm, Relationship::Direct),
            ("left-pad", "1.3.0", Ecosystem::Npm, Relationship::Indirect),
            ("react", "18.2.0", Ecosystem::Npm, Relationship::Indirect),
            ("loose-envify", "1.4.0", Ecosystem::Npm, Relationship::Indirect),
        ]
    );

    assert_eq!(
        response.records[0].source_file(),
        root.join("api/requirements.txt").as_path()
    );
    assert!(response.records[..2].iter().all(|r| r.revision().is_none()));
    assert!(response.records[2..]
        .iter()
        .all(|r| r.revision().map(Revision::as_str) == Some("9f8e7d6c")));

    // One missing-revision warning for api, nothing else
    let warnings = reporter.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("No Git commit found"));
    assert!(reporter
        .get_messages()
        .iter()
        .any(|m| m == "Completed: ✅ Collected 7 dependency record(s) from 2 repositorie(s)"));
}

#[test]
fn test_generate_sbom_without_exclusions_visits_node_modules() {
    let workspace = sample_workspace();
    let root = workspace.path();

    let response = use_case(
        DirectoryFilter::default(),
        MockRevisionResolver::new(),
        MockProgressReporter::new(),
    )
    .execute(SbomRequest::new(root.to_path_buf()))
    .unwrap();

    assert_eq!(response.repository_count, 3);
    let last = response.records.last().unwrap();
    assert_eq!(last.name(), "loose-envify");
    assert_eq!(last.version(), "^1.1.0");
    assert_eq!(last.relationship(), Relationship::Direct);
}

#[test]
fn test_generate_sbom_no_repositories() {
    let dir = TempDir::new().unwrap();
    write(&dir.path().join("docs/README.md"), "# docs\n");
    write(
        &dir.path().join("orphan/package-lock.json"),
        r#"{"dependencies": {"a": {"version": "1.0.0"}}}"#,
    );

    let result = use_case(
        DirectoryFilter::default(),
        MockRevisionResolver::new(),
        MockProgressReporter::new(),
    )
    .execute(SbomRequest::new(dir.path().to_path_buf()));

    let err = result.unwrap_err();
    assert_eq!(ExitCode::for_error(&err), ExitCode::NoRepositories);
}

#[test]
fn test_generate_sbom_malformed_manifest_is_skipped() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(&root.join("broken/package.json"), "{ this is not json");
    write(&root.join("ok/requirements.txt"), "django==4.2.1\n");
    let reporter = MockProgressReporter::new();

    let response = use_case(
        DirectoryFilter::default(),
        MockRevisionResolver::new()
            .with_revision(root.join("broken"), "aaaa")
            .with_revision(root.join("ok"), "bbbb"),
        reporter.clone(),
    )
    .execute(SbomRequest::new(root.to_path_buf()))
    .unwrap();

    assert_eq!(response.repository_count, 2);
    assert_eq!(response.records.len(), 1);
    assert_eq!(response.records[0].name(), "django");
    let warnings = reporter.warnings();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("Invalid JSON"));
}

#[test]
fn test_generate_sbom_outputs_agree() {
    let workspace = sample_workspace();
    let root = workspace.path();
    let filter = DirectoryFilter::new(vec!["node_modules".to_string()]).unwrap();

    let response = use_case(filter, MockRevisionResolver::new(), MockProgressReporter::new())
        .execute(SbomRequest::new(root.to_path_buf()))
        .unwrap();
    let model = SbomReadModelBuilder::build(&response.records);

    let csv = FormatterFactory::create(OutputFormat::Csv)
        .format(&model)
        .unwrap();
    let json = FormatterFactory::create(OutputFormat::Json)
        .format(&model)
        .unwrap();

    let csv_names: Vec<&str> = csv
        .split("\r\n")
        .skip(1)
        .filter(|line| !line.is_empty())
        .map(|line| line.split(',').next().unwrap())
        .collect();
    let json_value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let json_names: Vec<&str> = json_value
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap())
        .collect();

    assert_eq!(csv_names.len(), response.records.len());
    assert_eq!(csv_names, json_names);
}

#[cfg(unix)]
#[test]
fn test_generate_sbom_follows_symlinked_manifest() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(&root.join("shared/pins.txt"), "flask==2.0.1\n");
    fs::create_dir_all(root.join("app")).unwrap();
    std::os::unix::fs::symlink(
        root.join("shared/pins.txt"),
        root.join("app/requirements.txt"),
    )
    .unwrap();
    let reporter = MockProgressReporter::new();

    let response = use_case(
        DirectoryFilter::default(),
        MockRevisionResolver::new().with_revision(root.join("app"), "cafe"),
        reporter.clone(),
    )
    .execute(SbomRequest::new(root.to_path_buf()))
    .unwrap();

    assert_eq!(response.repository_count, 1);
    assert_eq!(response.records.len(), 1);
    assert_eq!(response.records[0].name(), "flask");
    assert_eq!(
        response.records[0].source_file(),
        root.join("app/requirements.txt").as_path()
    );
    assert!(reporter.warnings().is_empty());
}
