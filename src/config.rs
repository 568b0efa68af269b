use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use image::ImageFormat;
use json::JsonValue;

use crate::{
    error::{Result, TonepunkerError},
    transform::filters::Filter,
    utils::image::OutputFormat,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessConfig {
    pub filter: Filter,
    /// Output format tag, the detected input format when `None`.
    pub format: Option<String>,
    /// Size of the global worker pool, 0 keeps rayon's default.
    pub threads: usize,
}

impl ProcessConfig {
    pub fn new(filter: Filter) -> Self {
        Self {
            filter,
            format: None,
            threads: 0,
        }
    }

    /// Layer command line values over an optional config file.
    ///
    /// A filter has to come from one of the two.
    pub fn with_overrides(
        base: Option<ProcessConfig>,
        filter: Option<Filter>,
        format: Option<String>,
        threads: Option<usize>,
    ) -> Result<ProcessConfig> {
        let mut config = match (base, filter) {
            (Some(mut base), filter) => {
                if let Some(filter) = filter {
                    base.filter = filter;
                }
                base
            }
            (None, Some(filter)) => ProcessConfig::new(filter),
            (None, None) => return config_error("a filter type is required"),
        };
        if format.is_some() {
            config.format = format;
        }
        if let Some(threads) = threads {
            config.threads = threads;
        }
        Ok(config)
    }

    /// Pick the output container and the extension used for naming.
    ///
    /// An explicit tag wins and keeps its spelling (`jpg` stays `jpg`),
    /// otherwise the detected input format is reused.
    pub fn resolve_format(&self, detected: Option<ImageFormat>) -> Result<(OutputFormat, String)> {
        match (&self.format, detected) {
            (Some(tag), _) => Ok((tag.parse()?, tag.clone())),
            (None, Some(detected)) => {
                let format = OutputFormat::try_from(detected)?;
                Ok((format, format.extension().to_string()))
            }
            (None, None) => Err(TonepunkerError::UnsupportedFormat(String::from("unknown"))),
        }
    }

    fn to_config(json_string: &str) -> Result<ProcessConfig> {
        let json = json::parse(json_string)?;

        let filter: Filter = match json["filter"].as_str() {
            Some(name) => name.parse()?,
            None => return config_error("Couldn't parse filter"),
        };

        let format = if json["format"].is_null() {
            None
        } else {
            match json["format"].as_str() {
                Some(tag) => Some(tag.to_string()),
                None => return config_error("Couldn't parse format"),
            }
        };

        let threads = if json["threads"].is_null() {
            0
        } else {
            match json["threads"].as_usize() {
                Some(val) => val,
                None => return config_error("Couldn't parse threads"),
            }
        };

        Ok(ProcessConfig {
            filter,
            format,
            threads,
        })
    }

    fn to_json(&self) -> String {
        let mut data = JsonValue::new_object();

        data["filter"] = self.filter.name().into();
        data["format"] = match &self.format {
            Some(tag) => tag.as_str().into(),
            None => JsonValue::Null,
        };
        data["threads"] = self.threads.into();

        data.to_string()
    }

    pub fn read_config<P: AsRef<Path>>(path: P) -> Result<ProcessConfig> {
        let mut file = File::open(path)?;
        let mut json_string = String::new();
        file.read_to_string(&mut json_string)?;

        ProcessConfig::to_config(&json_string)
    }

    pub fn write_config<P: AsRef<Path>>(&self, path: P) -> Result {
        let string = self.to_json();
        let mut file = File::create(path)?;
        file.write_all(string.as_bytes())?;
        Ok(())
    }
}

fn config_error<T>(msg: &str) -> Result<T> {
    Err(TonepunkerError::Config(String::from(msg)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config =
            ProcessConfig::to_config(r#"{"filter": "sepia", "format": "png", "threads": 4}"#)
                .unwrap();
        assert_eq!(
            config,
            ProcessConfig {
                filter: Filter::Sepia,
                format: Some(String::from("png")),
                threads: 4,
            }
        );
    }

    #[test]
    fn test_parse_defaults() {
        let config = ProcessConfig::to_config(r#"{"filter": "invert"}"#).unwrap();
        assert_eq!(config, ProcessConfig::new(Filter::Invert));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            ProcessConfig::to_config(r#"{"format": "png"}"#),
            Err(TonepunkerError::Config(_))
        ));
        assert!(matches!(
            ProcessConfig::to_config(r#"{"filter": "blur"}"#),
            Err(TonepunkerError::UnknownFilter(_))
        ));
        assert!(matches!(
            ProcessConfig::to_config(r#"{"filter": "sepia", "threads": "many"}"#),
            Err(TonepunkerError::Config(_))
        ));
        assert!(matches!(
            ProcessConfig::to_config("{filter"),
            Err(TonepunkerError::Json(_))
        ));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = ProcessConfig {
            filter: Filter::Grayscale,
            format: Some(String::from("jpg")),
            threads: 2,
        };

        config.write_config(&path).unwrap();
        assert_eq!(ProcessConfig::read_config(&path).unwrap(), config);
    }

    #[test]
    fn test_overrides() {
        let base = ProcessConfig {
            filter: Filter::Sepia,
            format: Some(String::from("png")),
            threads: 3,
        };

        let config = ProcessConfig::with_overrides(Some(base.clone()), None, None, None).unwrap();
        assert_eq!(config, base);

        let config = ProcessConfig::with_overrides(
            Some(base),
            Some(Filter::Invert),
            Some(String::from("jpeg")),
            Some(0),
        )
        .unwrap();
        assert_eq!(config.filter, Filter::Invert);
        assert_eq!(config.format.as_deref(), Some("jpeg"));
        assert_eq!(config.threads, 0);

        assert!(matches!(
            ProcessConfig::with_overrides(None, None, None, None),
            Err(TonepunkerError::Config(_))
        ));
    }

    #[test]
    fn test_resolve_format() {
        let mut config = ProcessConfig::new(Filter::Sepia);
        assert_eq!(
            config.resolve_format(Some(ImageFormat::Png)).unwrap(),
            (OutputFormat::Png, String::from("png"))
        );
        assert!(matches!(
            config.resolve_format(Some(ImageFormat::Gif)),
            Err(TonepunkerError::UnsupportedFormat(_))
        ));

        config.format = Some(String::from("jpg"));
        assert_eq!(
            config.resolve_format(Some(ImageFormat::Png)).unwrap(),
            (OutputFormat::Jpeg, String::from("jpg"))
        );

        config.format = Some(String::from("bmp"));
        assert!(matches!(
            config.resolve_format(None),
            Err(TonepunkerError::UnsupportedFormat(_))
        ));
    }
}
