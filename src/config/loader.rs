//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the template
//! catalogue and statutory ceilings from YAML files.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CompensationTemplate, StatutoryConfig};

/// Loads and provides access to the compensation template catalogue.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── statutory.yaml       # PF and ESIC wage ceilings
/// └── templates/
///     ├── template_1.yaml  # One compensation template per file
///     └── template_2.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_breakup::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// let template = loader.get_template("Template 1")?;
/// println!("Earning components: {}", template.earning_components.len());
/// # Ok::<(), salary_breakup::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    statutory: StatutoryConfig,
    templates: Vec<CompensationTemplate>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails if `statutory.yaml` or the `templates` directory is missing,
    /// if any file contains invalid YAML, or if two templates share a name.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statutory = Self::load_yaml::<StatutoryConfig>(&path.join("statutory.yaml"))?;
        let templates = Self::load_templates(&path.join("templates"))?;

        Self::from_parts(statutory, templates)
    }

    /// Builds a catalogue from in-memory parts.
    ///
    /// Templates are ordered by name. Duplicate names are rejected.
    pub fn from_parts(
        statutory: StatutoryConfig,
        templates: Vec<CompensationTemplate>,
    ) -> EngineResult<Self> {
        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.name.as_str()) {
                return Err(EngineError::DuplicateTemplate {
                    name: template.name.clone(),
                });
            }
        }

        let mut templates = templates;
        templates.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(Self {
            statutory,
            templates,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all template files from the templates directory.
    fn load_templates(templates_dir: &Path) -> EngineResult<Vec<CompensationTemplate>> {
        let dir_str = templates_dir.display().to_string();

        let entries = fs::read_dir(templates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut templates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                templates.push(Self::load_yaml::<CompensationTemplate>(&path)?);
            }
        }

        if templates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no template files found)", dir_str),
            });
        }

        Ok(templates)
    }

    /// Returns the statutory ceilings.
    pub fn statutory(&self) -> &StatutoryConfig {
        &self.statutory
    }

    /// Returns every template in catalogue order.
    pub fn templates(&self) -> &[CompensationTemplate] {
        &self.templates
    }

    /// Returns the names of every template in catalogue order.
    pub fn template_names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }

    /// Gets a template by its exact name.
    ///
    /// Returns `TemplateNotFound` if no template has that name.
    pub fn get_template(&self, name: &str) -> EngineResult<&CompensationTemplate> {
        self.templates
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| EngineError::TemplateNotFound {
                name: name.to_string(),
            })
    }
}
