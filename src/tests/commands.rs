use super::{run, COMMANDS};
use crate::config::Config;
use crate::host::{BufferEditor, Editor, Position};
use crate::imports::section::IMPORTS_HEADER;
use std::fs;

fn test_config() -> Config {
    Config {
        import_extensions: vec!["js".to_string()],
        promisify_fs: true,
    }
}

#[test]
fn test_registry_names_are_unique_and_sorted() {
    let names: Vec<&str> = COMMANDS.iter().map(|spec| spec.name).collect();
    let mut sorted = names.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(names, sorted);
}

#[test]
fn test_unknown_command_notifies() {
    let mut editor = BufferEditor::new("foo();\n");
    let result = run(&mut editor, &test_config(), "frobnicate", "");
    assert!(result.is_err());
    assert_eq!(editor.notifications(), ["unknown command 'frobnicate'"]);
    assert_eq!(editor.text(), "foo();\n");
}

#[test]
fn test_doc_curline_banners_the_cursor_line() {
    let mut editor = BufferEditor::new("const x = 1;\nfoo();\n").with_path("src/app.js");
    run(&mut editor, &test_config(), "doc-curline", "").unwrap();
    assert_eq!(
        editor.text(),
        "//\n//--------------//\n// const x = 1; //\n//--------------//\n\nfoo();\n"
    );
    // Cursor lands on the blank line after the banner.
    assert_eq!(editor.cursor(), Position { row: 4, column: 0 });
}

#[test]
fn test_doc_import_emits_the_locatable_header() {
    let mut editor = BufferEditor::new("placeholder\nfoo();\n").with_path("src/app.js");
    run(&mut editor, &test_config(), "doc-import", "").unwrap();
    assert_eq!(editor.text(), format!("{IMPORTS_HEADER}foo();\n"));
}

#[test]
fn test_doc_main_uses_the_fixed_title() {
    let mut editor = BufferEditor::new("\n").with_path("src/app.js");
    run(&mut editor, &test_config(), "doc-main", "").unwrap();
    assert_eq!(editor.text(), "//\n//------//\n// Main //\n//------//\n\n");
}

#[test]
fn test_banner_leader_comes_from_the_extension() {
    let mut editor = BufferEditor::new("select 1;\n")
        .with_path("schema/init.sql")
        .with_cursor(Position { row: 0, column: 0 });
    run(&mut editor, &test_config(), "doc-curline", "").unwrap();
    assert_eq!(
        editor.text(),
        "---------------\n-- select 1; --\n---------------\n\n"
    );
}

#[test]
fn test_banner_sniffs_a_hash_bang_when_no_extension() {
    let mut editor = BufferEditor::new("#!/bin/bash\necho hi\n")
        .with_path("scripts/deploy")
        .with_cursor(Position { row: 1, column: 0 });
    run(&mut editor, &test_config(), "doc-curline", "").unwrap();
    assert_eq!(
        editor.text(),
        "#!/bin/bash\n#---------#\n# echo hi #\n#---------#\n\n"
    );
}

#[test]
fn test_banner_rejects_an_uncovered_extension() {
    let mut editor = BufferEditor::new("x = 1\n").with_path("tool.py");
    let result = run(&mut editor, &test_config(), "doc-curline", "");
    assert!(result.is_err());
    assert_eq!(
        editor.notifications(),
        ["unable to document current file - extension 'py' is not covered"]
    );
}

#[test]
fn test_banner_needs_a_file_path() {
    let mut editor = BufferEditor::new("x\n");
    let result = run(&mut editor, &test_config(), "doc-curline", "");
    assert!(result.is_err());
    assert_eq!(
        editor.notifications(),
        ["the current buffer has no file path"]
    );
}

#[test]
fn test_to_kebab_case_converts_the_selection() {
    let mut editor = BufferEditor::new("const fooBarBaz = 1;\n").with_selection(
        Position { row: 0, column: 6 },
        Position { row: 0, column: 15 },
    );
    run(&mut editor, &test_config(), "to-kebab-case", "").unwrap();
    assert_eq!(editor.text(), "const foo-bar-baz = 1;\n");
    assert_eq!(editor.cursor(), Position { row: 0, column: 17 });
}

#[test]
fn test_to_camel_case_converts_the_selection() {
    let mut editor = BufferEditor::new("run-command-with-args\n").with_selection(
        Position { row: 0, column: 0 },
        Position { row: 0, column: 21 },
    );
    run(&mut editor, &test_config(), "to-camel-case", "").unwrap();
    assert_eq!(editor.text(), "runCommandWithArgs\n");
}

#[test]
fn test_case_conversion_needs_a_selection() {
    let mut editor = BufferEditor::new("fooBar\n");
    let result = run(&mut editor, &test_config(), "to-camel-case", "");
    assert!(result.is_err());
    assert_eq!(editor.notifications(), ["nothing is selected"]);
    assert_eq!(editor.text(), "fooBar\n");
}

#[test]
fn test_sort_lines_sorts_the_selected_rows() {
    let mut editor = BufferEditor::new("c\nb\na\nd\n").with_selection(
        Position { row: 0, column: 0 },
        Position { row: 2, column: 1 },
    );
    run(&mut editor, &test_config(), "sort-lines", "").unwrap();
    assert_eq!(editor.text(), "a\nb\nc\nd\n");
    assert_eq!(editor.cursor(), Position { row: 0, column: 0 });
}

#[test]
fn test_log_snippet() {
    let mut editor = BufferEditor::new("");
    run(&mut editor, &test_config(), "log", "foo").unwrap();
    assert_eq!(editor.text(), "console.log('foo: ' + foo);");
}

#[test]
fn test_jlog_snippet() {
    let mut editor = BufferEditor::new("");
    run(&mut editor, &test_config(), "jlog", "foo").unwrap();
    assert_eq!(
        editor.text(),
        "console.log('foo: ' + JSON.stringify(foo, null, 2));"
    );
}

#[test]
fn test_tee_snippet() {
    let mut editor = BufferEditor::new("");
    run(&mut editor, &test_config(), "tee", "foo").unwrap();
    assert_eq!(
        editor.text(),
        "foo => console.log('foo: ' + JSON.stringify(foo, null, 2)) || foo"
    );
}

#[test]
fn test_snippets_replace_the_selection() {
    let mut editor = BufferEditor::new("old\n").with_selection(
        Position { row: 0, column: 0 },
        Position { row: 0, column: 3 },
    );
    run(&mut editor, &test_config(), "log", "x").unwrap();
    assert_eq!(editor.text(), "console.log('x: ' + x);\n");
}

#[test]
fn test_snippets_need_a_variable_name() {
    let mut editor = BufferEditor::new("");
    let result = run(&mut editor, &test_config(), "log", " ");
    assert!(result.is_err());
    assert_eq!(editor.notifications(), ["string must be non-empty"]);
}

#[test]
fn test_export_named_regenerates_the_index() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.js"), "export default 1\n").unwrap();
    fs::write(dir.path().join("b-c.vue"), "<template/>\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored\n").unwrap();
    fs::write(dir.path().join("index.js"), "").unwrap();

    let mut editor = BufferEditor::new("").with_path(dir.path().join("index.js"));
    run(&mut editor, &test_config(), "export-named", "").unwrap();
    assert_eq!(
        editor.text(),
        "import a from './a'\nimport bC from './b-c'\n\nexport {\n  a,\n  bC,\n}\n"
    );
}

#[test]
fn test_export_default_regenerates_the_index() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.js"), "export default 1\n").unwrap();
    fs::write(dir.path().join("index.js"), "").unwrap();

    let mut editor = BufferEditor::new("").with_path(dir.path().join("index.js"));
    run(&mut editor, &test_config(), "export-default", "").unwrap();
    assert_eq!(editor.text(), "import a from './a'\n\nexport default {\n  a,\n}\n");
}

#[test]
fn test_export_only_runs_in_an_index_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("other.js"), "").unwrap();

    let mut editor = BufferEditor::new("").with_path(dir.path().join("other.js"));
    let result = run(&mut editor, &test_config(), "export-named", "");
    assert!(result.is_err());
    assert_eq!(
        editor.notifications(),
        ["this command only works in an index.js file"]
    );
}
