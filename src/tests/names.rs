use super::NameRules;

#[test]
fn test_aliases_win_over_everything() {
    let rules = NameRules::default();
    assert_eq!(rules.variable_name("lodash"), "_");
    assert_eq!(rules.variable_name("vue"), "Vue");
    assert_eq!(rules.variable_name("koa-router"), "KoaRouter");
}

#[test]
fn test_webpack_plugins_drop_the_webpack_infix() {
    let rules = NameRules::default();
    assert_eq!(rules.variable_name("html-webpack-plugin"), "HtmlPlugin");
    assert_eq!(rules.variable_name("copy-webpack-plugin"), "CopyPlugin");
}

#[test]
fn test_constructors_are_pascal_cased() {
    let rules = NameRules::default();
    assert_eq!(rules.variable_name("memory-fs"), "MemoryFs");
    assert_eq!(rules.variable_name("vue-router"), "VueRouter");
}

#[test]
fn test_plain_packages_are_camel_cased() {
    let rules = NameRules::default();
    assert_eq!(rules.variable_name("dedent"), "dedent");
    assert_eq!(rules.variable_name("run-command-with-args"), "runCommandWithArgs");
}

#[test]
fn test_paths_name_from_the_last_segment() {
    let rules = NameRules::default();
    assert_eq!(rules.variable_name("lodash/fp"), "fp");
    assert_eq!(rules.variable_name("./helper-functions"), "helperFunctions");
    assert_eq!(rules.variable_name("../shared/date-utils"), "dateUtils");
}

#[test]
fn test_promisified_lookup() {
    let rules = NameRules::default();
    assert!(rules.is_promisified("fs"));
    assert!(!rules.is_promisified("path"));
}
