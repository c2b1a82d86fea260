use std::collections::HashSet;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::FilterOption;
use crate::error::HyfiError;

/// Accepted shape of a JSON option entry
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawOption {
    Plain(String),
    Labeled {
        value: String,
        #[serde(default)]
        label: Option<String>,
    },
}

/// Read option lists from stdin or a file
pub struct OptionsReader;

impl OptionsReader {
    /// Read options from a file path, or from stdin when `path` is `None`
    pub fn read_options(path: Option<&Path>) -> Result<Vec<FilterOption>, HyfiError> {
        let contents = match path {
            Some(file_path) => {
                let mut file = File::open(file_path)?;
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                contents
            }
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            }
        };

        #[cfg(debug_assertions)]
        log::debug!("Read {} bytes of option input", contents.len());

        parse_options(&contents)
    }
}

/// Parse an option list from text
///
/// Input starting with `[` is parsed as a JSON array of strings or
/// `{"value": .., "label": ..}` objects. Anything else is read line by line,
/// where `value<TAB>label` splits the identifier from its label.
pub fn parse_options(contents: &str) -> Result<Vec<FilterOption>, HyfiError> {
    let options = if contents.trim_start().starts_with('[') {
        parse_json(contents)?
    } else {
        parse_lines(contents)
    };

    let mut seen = HashSet::new();
    for option in &options {
        if !seen.insert(option.value.as_str()) {
            return Err(HyfiError::DuplicateOption(option.value.clone()));
        }
    }

    Ok(options)
}

fn parse_json(contents: &str) -> Result<Vec<FilterOption>, HyfiError> {
    let entries: Vec<Value> =
        serde_json::from_str(contents).map_err(|e| HyfiError::InvalidJson(e.to_string()))?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let raw: RawOption =
                serde_json::from_value(entry).map_err(|e| HyfiError::InvalidOption {
                    index,
                    reason: e.to_string(),
                })?;
            Ok(match raw {
                RawOption::Plain(value) => FilterOption::plain(value),
                RawOption::Labeled { value, label } => {
                    let label = label.unwrap_or_else(|| value.clone());
                    FilterOption::new(value, label)
                }
            })
        })
        .collect()
}

fn parse_lines(contents: &str) -> Vec<FilterOption> {
    contents
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.trim().is_empty())
        .map(|line| match line.split_once('\t') {
            Some((value, label)) if !label.trim().is_empty() => {
                FilterOption::new(value.trim(), label.trim())
            }
            Some((value, _)) => FilterOption::plain(value.trim()),
            None => FilterOption::plain(line.trim()),
        })
        .collect()
}
