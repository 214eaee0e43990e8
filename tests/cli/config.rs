use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_config_file_changes_patterns_and_format() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".i18nsyncrc.json",
        r#"{
            "attribute": "data-t",
            "translateMethod": "t",
            "namespace": "app",
            "indent": 2,
            "scriptExtensions": [".js", ".mjs"]
        }"#,
    )?;
    test.write_file("index.html", r#"<p data-t="title"></p><p data-i18n="ignored"></p>"#)?;
    test.write_file("main.mjs", r#"i18n.t("menu.open"); i18n.translate("ignored");"#)?;

    let output = test.run(&["index.html", "main.mjs", "-t", "en.json"])?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert_snapshot!(test.read_file("en.json")?, @r#"
    {
      "app": {
        "menu": {
          "open": ""
        },
        "title": ""
      }
    }
    "#);

    Ok(())
}

#[test]
fn test_config_found_in_parent_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nsyncrc.json", r#"{"namespace": "web"}"#)?;
    test.write_file("site/index.html", r#"<p data-i18n="x"></p>"#)?;

    let mut cmd = test.command();
    cmd.current_dir(test.root().join("site"));
    let output = cmd.args(["index.html", "-t", "en.json"]).output()?;

    assert!(output.status.success());
    assert_eq!(
        test.read_file("site/en.json")?,
        "{\n    \"web\": {\n        \"x\": \"\"\n    }\n}\n"
    );

    Ok(())
}

#[test]
fn test_namespace_flag_overrides_config() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nsyncrc.json", r#"{"namespace": "web"}"#)?;
    test.write_file("index.html", r#"<p data-i18n="x"></p>"#)?;

    let output = test.run(&["index.html", "-t", "en.json", "--namespace", "cli"])?;

    assert_eq!(output.code, Some(0));
    assert!(test.read_file("en.json")?.contains("\"cli\""));

    Ok(())
}

#[test]
fn test_explicit_config_path() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("tools/i18n.json", r#"{"translateMethod": "tr"}"#)?;
    test.write_file("app.ts", r#"this.tr('hello');"#)?;

    let output = test.run(&["app.ts", "-t", "en.json", "--config", "tools/i18n.json"])?;

    assert_eq!(output.code, Some(0), "stderr: {}", output.stderr);
    assert!(test.read_file("en.json")?.contains("\"hello\": \"\""));

    Ok(())
}

#[test]
fn test_invalid_config_is_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nsyncrc.json", r#"{"namespace": "a.b"}"#)?;
    test.write_file("index.html", "")?;

    let output = test.run(&["index.html"])?;

    assert_eq!(output.code, Some(2));
    let root = test.root().display().to_string();
    assert_snapshot!(output.stderr.replace(&root, "/PROJECT"), @r#"Error: Invalid config file: /PROJECT/.i18nsyncrc.json: 'namespace' must not contain '.': "a.b""#);

    Ok(())
}
