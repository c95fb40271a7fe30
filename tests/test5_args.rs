use clap::Parser;
use std::fs;
use tempfile::TempDir;

use rusty_golf_handicap::args::Args;
use rusty_golf_handicap::model::PickupPolicy;

#[test]
fn test5_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse_from(["rusty-golf-handicap", "-n", "golf.db"])?;
    assert_eq!(args.pickup_strokes_over_par, 3);
    assert_eq!(args.bind_address, "0.0.0.0:8081");
    assert!(!args.verbose);

    let clean = args.into_clean_args()?;
    assert_eq!(clean.pickup_policy, PickupPolicy::default());
    assert!(clean.combined_sql_script.is_empty());
    Ok(())
}

#[test]
fn test5_pickup_range() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse_from([
        "rusty-golf-handicap",
        "-n",
        "golf.db",
        "--pickup-strokes-over-par",
        "10",
    ])?;
    assert_eq!(args.into_clean_args()?.pickup_policy.strokes_over_par, 10);

    for value in ["11", "-1", "three"] {
        let result = Args::try_parse_from([
            "rusty-golf-handicap",
            "-n",
            "golf.db",
            "--pickup-strokes-over-par",
            value,
        ]);
        assert!(result.is_err(), "{value}");
    }
    Ok(())
}

#[test]
fn test5_blank_db_name_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::try_parse_from(["rusty-golf-handicap", "-n", "  "])?;
    assert!(args.into_clean_args().is_err());

    assert!(Args::try_parse_from(["rusty-golf-handicap"]).is_err());
    Ok(())
}

#[test]
fn test5_startup_scripts_are_combined_in_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let first = dir.path().join("01_schema.sql");
    let second = dir.path().join("02_data.sql");
    fs::write(&first, "CREATE TABLE a (id INTEGER);")?;
    fs::write(&second, "INSERT INTO a VALUES (1);")?;

    let scripts = format!("{};{}", first.display(), second.display());
    let args = Args::try_parse_from([
        "rusty-golf-handicap",
        "-n",
        "golf.db",
        "--db-startup-script",
        scripts.as_str(),
    ])?;
    let clean = args.into_clean_args()?;
    assert_eq!(
        clean.combined_sql_script,
        "CREATE TABLE a (id INTEGER);\nINSERT INTO a VALUES (1);\n"
    );
    Ok(())
}

#[test]
fn test5_unreadable_startup_script() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let missing = dir.path().join("missing.sql");
    let scripts = missing.display().to_string();

    let args = Args::try_parse_from([
        "rusty-golf-handicap",
        "-n",
        "golf.db",
        "--db-startup-script",
        scripts.as_str(),
    ])?;
    let err = args.into_clean_args().err().ok_or("missing script should fail")?;
    assert!(err.contains("missing.sql"), "{err}");
    Ok(())
}
