use anyhow::Result;
use tempfile::TempDir;
use treatment_navigator::utils::validation::Validate;
use treatment_navigator::{BatchConfig, BatchPipeline, LocalStorage, NavigatorEngine};

const CASES: &str = "\
case_id;tumor_type;tumor_subtype;tumor_stage;tumor_grade;er_status;pr_status;her2_status;lymph_node_status;genetic_risk
P-001;In-situ;Ductal;0;1;+;+;-;cN0;
P-002;Invasive;Lobular;4;3;-;-;-;pN2;None
P-003;Invasive;Ductal;2;1;Positive;Positive;Positive;cN1;
P-004;Invasive;Ductal;3;2;+;+;-;cN9;low
";

fn write_config(dir: &TempDir, formats: &str, extra: &str) -> Result<BatchConfig> {
    let base = dir.path().to_str().unwrap().replace('\\', "/");
    std::fs::write(dir.path().join("cases.csv"), CASES)?;

    let config_content = format!(
        r#"
[batch]
name = "integration"
description = "semicolon separated cases"

[source]
input_path = "{base}/cases.csv"
delimiter = ";"

[load]
output_path = "{base}/out"
output_formats = {formats}
{extra}
"#
    );

    let config_path = dir.path().join("navigator.toml");
    std::fs::write(&config_path, config_content)?;
    let config = BatchConfig::from_file(&config_path)?;
    config.validate()?;
    Ok(config)
}

#[tokio::test]
async fn test_end_to_end_batch_to_csv_and_json() -> Result<()> {
    let dir = TempDir::new()?;
    let config = write_config(
        &dir,
        r#"["csv", "json"]"#,
        "[evaluation]\ninclude_side_effects = true\n",
    )?;

    let storage = LocalStorage::new(dir.path().join("out"));
    let engine = NavigatorEngine::new(BatchPipeline::new(storage, config));
    let output_path = engine.run().await?;
    assert!(output_path.ends_with("{plans.csv,plans.json}"));

    let csv_out = std::fs::read_to_string(dir.path().join("out/plans.csv"))?;
    let mut reader = csv::Reader::from_reader(csv_out.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().collect::<std::result::Result<_, _>>()?;
    assert_eq!(rows.len(), 4);

    assert_eq!(&rows[1][0], "P-002");
    assert_eq!(&rows[1][1], "planned");
    assert_eq!(
        &rows[1][2],
        "Systemic therapies to control spread and improve quality of life. | Options include chemotherapy and immunotherapy."
    );
    assert!(rows[1][3].contains("Neuropathy"));
    assert!(rows[1][3].contains("Skin reactions"));

    assert_eq!(&rows[3][1], "rejected");
    assert_eq!(&rows[3][2], "");
    assert!(rows[3][4].starts_with("Invalid lymph node status: cn9."));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("out/plans.json"))?)?;
    assert_eq!(json["total"], 4);
    assert_eq!(json["planned"], 3);
    assert_eq!(json["rejected"], 1);
    assert_eq!(json["side_effects_included"], true);
    assert!(json["generated_at"].is_string());
    assert_eq!(
        json["outcomes"][2]["plan"]["treatment"][1],
        "Combination of hormone therapy, HER2-targeted therapy (e.g., Trastuzumab), and chemotherapy."
    );
    assert!(json["outcomes"][3].get("plan").is_none());

    Ok(())
}

#[tokio::test]
async fn test_side_effects_absent_unless_requested() -> Result<()> {
    let dir = TempDir::new()?;
    let config = write_config(&dir, r#"["json"]"#, "")?;

    let storage = LocalStorage::new(dir.path().join("out"));
    NavigatorEngine::new(BatchPipeline::new(storage, config)).run().await?;

    assert!(!dir.path().join("out/plans.csv").exists());
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(dir.path().join("out/plans.json"))?)?;
    assert!(json["outcomes"][0]["plan"].get("side_effects").is_none());

    Ok(())
}

#[tokio::test]
async fn test_stop_on_invalid_fails_the_run() -> Result<()> {
    let dir = TempDir::new()?;
    let config = write_config(&dir, r#"["csv"]"#, "[evaluation]\nstop_on_invalid = true\n")?;

    let storage = LocalStorage::new(dir.path().join("out"));
    let err = NavigatorEngine::new(BatchPipeline::new(storage, config))
        .run()
        .await
        .unwrap_err();

    assert!(err.to_string().contains("P-004"));
    assert!(!dir.path().join("out/plans.csv").exists());
    Ok(())
}
