use crate::adapters::data_sources::{Api, Database, StaticSource};
use crate::core::registry::CapabilityRegistry;
use crate::domain::model::ShapeSpec;
use crate::domain::ports::{DataSource, Shape};
use crate::utils::error::{Result, SolidError};
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub scenario: ScenarioMeta,
    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
    #[serde(default)]
    pub sources: SourcesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesConfig {
    #[serde(default)]
    pub database: bool,
    #[serde(default)]
    pub api: bool,
    pub custom: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

fn escape_toml_basic(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04X}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

impl ScenarioConfig {
    /// 從 TOML 檔案載入情境
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析情境，先處理環境變數替換
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SolidError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CUSTOM_DATA})。未設定的變數保留原文。
    ///
    /// 值會先做 TOML basic string 跳脫，所以引號或反斜線不能改變檔案結構；
    /// 數字等不含特殊字元的值不受影響。
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                match std::env::var(var_name) {
                    Ok(value) => escape_toml_basic(&value),
                    Err(_) => format!("${{{}}}", var_name),
                }
            })
            .into_owned()
    }

    pub fn build_shapes(&self) -> Result<Vec<Box<dyn Shape>>> {
        self.shapes.iter().map(ShapeSpec::build).collect()
    }

    /// Configured sources in a fixed order: database, api, custom.
    pub fn build_sources(&self) -> Vec<(String, Arc<dyn DataSource>)> {
        let mut sources: Vec<(String, Arc<dyn DataSource>)> = Vec::new();
        if self.sources.database {
            sources.push(("database".to_string(), Arc::new(Database)));
        }
        if self.sources.api {
            sources.push(("api".to_string(), Arc::new(Api)));
        }
        if let Some(payload) = &self.sources.custom {
            sources.push(("custom".to_string(), Arc::new(StaticSource::new(payload.clone()))));
        }
        sources
    }

    /// Builds a registry holding the default devices plus this scenario's
    /// shapes and sources.
    pub fn build_registry(&self) -> Result<CapabilityRegistry> {
        let mut registry = CapabilityRegistry::with_defaults();
        for shape in self.build_shapes()? {
            registry.add_shape(shape);
        }
        for (name, source) in self.build_sources() {
            registry.register_data_source(name, source);
        }
        Ok(registry)
    }
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        // 名稱與圖形清單都不能為空，且每個圖形都必須能建構
        validate_non_empty_string("scenario.name", &self.scenario.name)?;
        validate_non_empty_list("shapes", &self.shapes)?;
        for shape in &self.shapes {
            shape.build()?;
        }
        Ok(())
    }
}
