//! End-to-end integration test for the vertical slice
//!
//! Exercises the complete flow: source corpus -> expansion per flag set
//! -> frontmatter cleaning -> sidecar -> install -> conflict check.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use cmdkit_content::{ExpandOptions, expand, frontmatter};
use cmdkit_fs::Scope;
use cmdkit_gen::{GenerateRequest, check, generate};
use cmdkit_meta::{BUILTIN_VARIANTS, Variant};
use tempfile::TempDir;

/// Write a small but realistic source corpus: two commands, shared
/// fragments, one skill.
fn setup_source(root: &Path) -> PathBuf {
    let source = root.join("source");
    fs::create_dir_all(source.join("fragments")).unwrap();
    fs::write(
        source.join("fragments/beads-tracking.md"),
        "Track follow-ups as beads.",
    )
    .unwrap();
    fs::write(
        source.join("fragments/list-tracking.md"),
        "Track follow-ups in a list.",
    )
    .unwrap();
    fs::write(source.join("fragments/gh-fallback.md"), "Use plain git.").unwrap();

    fs::write(
        source.join("commit.md"),
        concat!(
            "---\n",
            "description: Commit staged changes\n",
            "_category: git\n",
            "_order: 1\n",
            "_requested-tools:\n",
            "  - Bash\n",
            "---\n\n",
            "<!-- cmdkit:include path=\"fragments/beads-tracking.md\" featureFlag=\"beads\" elsePath=\"fragments/list-tracking.md\" -->\n",
            "placeholder\n",
            "<!-- /cmdkit:include -->\n\n",
            "Commit: $ARGUMENTS\n",
        ),
    )
    .unwrap();
    fs::write(
        source.join("red.md"),
        concat!(
            "---\n",
            "description: Write a failing test\n",
            "_category: testing\n",
            "_order: 1\n",
            "---\n\n",
            "<!-- cmdkit:include path=\"fragments/gh-fallback.md\" unlessFlags=\"gh-cli,gh-mcp\" -->\n",
            "placeholder\n",
            "<!-- /cmdkit:include -->\n\n",
            "Red: $ARGUMENTS\n",
        ),
    )
    .unwrap();

    let skill = source.join("skills/tdd");
    fs::create_dir_all(&skill).unwrap();
    fs::write(
        skill.join("SKILL.md"),
        "---\nname: tdd\ndescription: Red-green-refactor\n---\n\nSkill body\n",
    )
    .unwrap();

    source
}

/// Build both variants the way `cmdkit build` does, through the library
/// primitives.
fn build_variants(source: &Path, out: &Path) {
    let catalog = cmdkit_meta::scan(source).unwrap();

    for spec in BUILTIN_VARIANTS {
        let flags: HashSet<String> = spec.flags.iter().map(|s| s.to_string()).collect();
        let options = ExpandOptions {
            flags: &flags,
            base_dir: source,
        };
        let variant_dir = out.join(spec.name);

        for filename in cmdkit_fs::list_markdown_files(source).unwrap() {
            let raw = cmdkit_fs::read_text(&source.join(&filename)).unwrap();
            let published = frontmatter::clean(&expand(&raw, &options).unwrap());
            cmdkit_fs::write_text(&variant_dir.join(&filename), &published).unwrap();
        }

        let manifest = cmdkit_fs::read_text(&source.join("skills/tdd/SKILL.md")).unwrap();
        cmdkit_fs::write_text(
            &variant_dir.join("skills/tdd/SKILL.md"),
            &frontmatter::clean(&expand(&manifest, &options).unwrap()),
        )
        .unwrap();

        cmdkit_meta::write_sidecar(&variant_dir, &catalog).unwrap();
    }
}

#[test]
fn test_full_flow_build_install_check() {
    let temp = TempDir::new().unwrap();
    let source = setup_source(temp.path());
    let variants_root = temp.path().join("variants");
    build_variants(&source, &variants_root);

    // Flag gating is baked into the built variants.
    let with = fs::read_to_string(variants_root.join("with-beads/commit.md")).unwrap();
    assert!(with.contains("Track follow-ups as beads."));
    let without = fs::read_to_string(variants_root.join("without-beads/commit.md")).unwrap();
    assert!(without.contains("Track follow-ups in a list."));

    // Internal fields are stripped; description survives.
    assert!(!with.contains("_category"));
    assert!(with.contains("description: Commit staged changes"));

    // No gh flag is active, so red.md keeps its unlessFlags fragment.
    let red = fs::read_to_string(variants_root.join("with-beads/red.md")).unwrap();
    assert!(red.contains("Use plain git."));

    // Install the with-beads variant.
    let variant = Variant::open(&variants_root, "with-beads").unwrap();
    let dest = temp.path().join("dest");
    let cwd = temp.path().join("project");
    fs::create_dir_all(&cwd).unwrap();

    let mut request = GenerateRequest::new(&variant, cwd.clone());
    request.destination = Some(dest.clone());
    request.allowed_tools = Some(vec!["Bash".to_string(), "Read".to_string()]);
    let result = generate(&request).unwrap();

    assert!(result.success);
    assert_eq!(result.files_written, 3);
    assert_eq!(result.variant, "with-beads");

    // Tool injection used the sidecar's requested list.
    let installed = fs::read_to_string(dest.join("commit.md")).unwrap();
    assert!(installed.contains("allowed-tools: Bash\n"));
    assert!(installed.contains("$ARGUMENTS"));

    // Skills landed under the fixed layout.
    assert!(dest.join("skills/tdd/SKILL.md").is_file());

    // A second conflict check reports everything identical.
    let mut recheck = GenerateRequest::new(&variant, cwd);
    recheck.destination = Some(dest);
    recheck.allowed_tools = Some(vec!["Bash".to_string(), "Read".to_string()]);
    let entries = check(&recheck).unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|e| e.identical));
}

#[test]
fn test_subset_then_prefix_scenario() {
    let temp = TempDir::new().unwrap();
    let source = setup_source(temp.path());
    let variants_root = temp.path().join("variants");
    build_variants(&source, &variants_root);

    let variant = Variant::open(&variants_root, "without-beads").unwrap();
    let dest = temp.path().join("dest");
    let cwd = temp.path().join("project");
    fs::create_dir_all(&cwd).unwrap();

    // commands=['commit.md'] yields exactly one output file.
    let mut first = GenerateRequest::new(&variant, cwd.clone());
    first.destination = Some(dest.clone());
    first.commands = Some(vec!["commit.md".to_string()]);
    first.skills = Some(Vec::new());
    assert_eq!(generate(&first).unwrap().files_written, 1);
    let original = fs::read_to_string(dest.join("commit.md")).unwrap();

    // Re-running with a prefix adds my-commit.md, original untouched.
    let mut second = GenerateRequest::new(&variant, cwd);
    second.destination = Some(dest.clone());
    second.commands = Some(vec!["commit.md".to_string()]);
    second.skills = Some(Vec::new());
    second.prefix = "my-".to_string();
    generate(&second).unwrap();

    assert!(dest.join("my-commit.md").is_file());
    assert_eq!(
        fs::read_to_string(dest.join("commit.md")).unwrap(),
        original
    );
}

#[test]
fn test_scope_privacy_end_to_end() {
    let temp = TempDir::new().unwrap();
    let source = setup_source(temp.path());
    let variants_root = temp.path().join("variants");
    build_variants(&source, &variants_root);

    let variant = Variant::open(&variants_root, "without-beads").unwrap();
    let cwd = temp.path().join("project");
    fs::create_dir_all(&cwd).unwrap();
    fs::write(
        cwd.join("AGENTS.md"),
        "<!-- cmdkit:instructions -->\nProject-only guidance.\n<!-- /cmdkit:instructions -->\n",
    )
    .unwrap();

    // Project scope (explicit destination stands in for the directory)
    // gets the customization appended.
    let project_dest = temp.path().join("project-dest");
    let mut project = GenerateRequest::new(&variant, cwd.clone());
    project.destination = Some(project_dest.clone());
    project.scope = Some(Scope::Project);
    let result = generate(&project).unwrap();
    assert!(result.template_injected);
    assert!(
        fs::read_to_string(project_dest.join("commit.md"))
            .unwrap()
            .contains("Project-only guidance.")
    );

    // User scope never receives it, even with the same cwd.
    let user_dest = temp.path().join("user-dest");
    let mut user = GenerateRequest::new(&variant, cwd);
    user.destination = Some(user_dest.clone());
    user.scope = Some(Scope::User);
    let result = generate(&user).unwrap();
    assert!(!result.template_injected);
    assert!(
        !fs::read_to_string(user_dest.join("commit.md"))
            .unwrap()
            .contains("Project-only guidance.")
    );
}

#[test]
fn test_template_change_surfaces_as_conflict() {
    let temp = TempDir::new().unwrap();
    let source = setup_source(temp.path());
    let variants_root = temp.path().join("variants");
    build_variants(&source, &variants_root);

    let variant = Variant::open(&variants_root, "without-beads").unwrap();
    let dest = temp.path().join("dest");
    let cwd = temp.path().join("project");
    fs::create_dir_all(&cwd).unwrap();

    let mut request = GenerateRequest::new(&variant, cwd.clone());
    request.destination = Some(dest.clone());
    request.scope = Some(Scope::Project);
    generate(&request).unwrap();

    // New customization content means the next check differs.
    fs::write(
        cwd.join("AGENTS.md"),
        "<!-- cmdkit:instructions commands=\"commit\" -->\nNew rule.\n<!-- /cmdkit:instructions -->\n",
    )
    .unwrap();

    let mut recheck = GenerateRequest::new(&variant, cwd);
    recheck.destination = Some(dest);
    recheck.scope = Some(Scope::Project);
    let entries = check(&recheck).unwrap();

    let commit = entries.iter().find(|e| e.filename == "commit.md").unwrap();
    assert!(!commit.identical);
    assert!(commit.proposed.contains("New rule."));
    let red = entries.iter().find(|e| e.filename == "red.md").unwrap();
    assert!(red.identical);
}
