use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use pawflow::host::Recorder;
use pawflow::{Api, Paw, Serializer};

use crate::config::Config;

mod config;

fn main() -> Result<()> {
    env_logger::init();
    let config = Config::parse();
    run(&config)
}

fn run(config: &Config) -> Result<()> {
    let api: Api = read_json(&config.input).context("read api description")?;
    let serializer = match &config.serializer_config {
        None => Paw::default(),
        Some(path) => Paw::new(read_json(path).context("read serializer config")?),
    };

    let mut host = Recorder::default();
    serializer.serialize(&mut host, &api)?;

    match &config.output {
        None => write_recording(&host, std::io::stdout().lock(), config.compact),
        Some(path) => {
            info!("Writing recording to {}", path.display());
            let file = File::create(path).context("create output file")?;
            write_recording(&host, BufWriter::new(file), config.compact)
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

fn write_recording(host: &Recorder, mut writer: impl Write, compact: bool) -> Result<()> {
    if compact {
        serde_json::to_writer(&mut writer, host)?;
    } else {
        serde_json::to_writer_pretty(&mut writer, host)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use anyhow::Result;
    use serde_json::Value;

    use crate::config::Config;
    use crate::run;

    const API: &str = r#"{
        "info": { "title": "Petstore" },
        "store": {
            "endpoint": {
                "prod": { "protocol": ["https:"], "hostname": "pets.io" }
            }
        },
        "resources": [
            {
                "name": "pets",
                "path": "/pets/{petId}",
                "methods": {
                    "get": { "endpoints": [{ "uuid": "prod" }] }
                }
            }
        ]
    }"#;

    fn config(input: PathBuf, output: PathBuf) -> Config {
        Config {
            input,
            serializer_config: None,
            output: Some(output),
            compact: true,
        }
    }

    #[test]
    fn writes_recording() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("api.json");
        let output = dir.path().join("out.json");
        fs::write(&input, API)?;

        run(&config(input, output.clone()))?;

        let recording: Value = serde_json::from_str(&fs::read_to_string(output)?)?;
        assert_eq!(recording["domains"][0]["name"], "Petstore");
        assert_eq!(recording["groups"][0]["name"], "pets");
        assert_eq!(recording["requests"][0]["method"], "GET");
        assert_eq!(recording["requests"][0]["name"], "/pets/{petId}");
        Ok(())
    }

    #[test]
    fn applies_serializer_config() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("api.json");
        let serializer_config = dir.path().join("config.json");
        let output = dir.path().join("out.json");
        fs::write(&input, API.replace(r#""name": "pets","#, ""))?;
        fs::write(&serializer_config, r#"{ "default_group_name": "unnamed" }"#)?;

        let mut config = config(input, output.clone());
        config.serializer_config = Some(serializer_config);
        run(&config)?;

        let recording: Value = serde_json::from_str(&fs::read_to_string(output)?)?;
        assert_eq!(recording["groups"][0]["name"], "unnamed");
        Ok(())
    }

    #[test]
    fn missing_input_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&config(
            dir.path().join("missing.json"),
            dir.path().join("out.json"),
        ));
        assert!(result.is_err());
    }
}
