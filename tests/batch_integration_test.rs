use calculator::core::ConfigProvider;
use calculator::{BatchRunner, CalcError, OutputFormat, TomlConfig};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_batch_from_files_with_toml_config() {
    let temp_dir = TempDir::new().unwrap();

    let config_path = temp_dir.path().join("calculator.toml");
    fs::write(
        &config_path,
        r#"
[output]
precision = 2
format = "csv"

[batch]
delimiter = ";"
"#,
    )
    .unwrap();

    let input_path = temp_dir.path().join("ops.csv");
    fs::write(
        &input_path,
        "op;a;b\nadd;2;3\nsubtract;-2;3\n*;0;5\n/;1;3\ndivide;5;0\n",
    )
    .unwrap();

    let config = TomlConfig::from_file(&config_path).unwrap();
    assert_eq!(config.output_format(), OutputFormat::Csv);

    let output_path = temp_dir.path().join("report.csv");
    let runner = BatchRunner::new(config).unwrap();
    let report = runner
        .run(
            fs::File::open(&input_path).unwrap(),
            fs::File::create(&output_path).unwrap(),
        )
        .unwrap();

    assert_eq!(report.evaluations.len(), 5);
    assert_eq!(report.succeeded(), 4);
    assert_eq!(report.failed(), 1);

    let output = fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "row;op;a;b;result;error");
    assert!(lines[1].starts_with("1;add;2.0;3.0;5.00;"));
    assert!(lines[2].starts_with("2;subtract;-2.0;3.0;-5.00;"));
    assert!(lines[3].starts_with("3;multiply;0.0;5.0;0.00;"));
    assert!(lines[4].starts_with("4;divide;1.0;3.0;0.33;"));
    assert!(lines[5].contains("cannot divide 5 by zero"));
}

#[test]
fn test_batch_without_headers_in_text_format() {
    let config = TomlConfig::from_toml_str("[batch]\nhas_headers = false\n").unwrap();
    let runner = BatchRunner::new(config).unwrap();

    let mut out = Vec::new();
    let report = runner.run("+,2,3\n-,5,3\n".as_bytes(), &mut out).unwrap();

    assert!(report.is_clean());
    assert_eq!(String::from_utf8(out).unwrap(), "2 + 3 = 5\n5 - 3 = 2\n");
}

#[test]
fn test_batch_stops_on_first_error_when_configured() {
    let config = TomlConfig::from_toml_str("[batch]\ncontinue_on_error = false\n").unwrap();
    let runner = BatchRunner::new(config).unwrap();

    let mut out = Vec::new();
    let err = runner
        .run("op,a,b\nadd,1,1\nmodulo,4,2\n".as_bytes(), &mut out)
        .unwrap_err();

    assert!(matches!(err, CalcError::RowError { row: 2, .. }));
    assert_eq!(err.exit_code(), 2);
    assert!(out.is_empty());
}

#[test]
fn test_missing_config_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = TomlConfig::from_file(temp_dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, CalcError::IoError(_)));
}
