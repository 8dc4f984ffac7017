use serde::Deserialize;
use std::env;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Shown in the page banner
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CatalogBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    pub backend: CatalogBackend,
    #[serde(default)]
    pub seed: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
        }
    }
}

fn default_max_connections() -> u32 { 5 }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        Self::from_builder(Self::layered(Path::new("config"), &run_mode, Self::environment()))
    }

    /// Environment overrides, eg. `DEPOT__SERVER__PORT=8080`
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix("DEPOT")
            .separator("__")
            .try_parsing(true)
    }

    /// `default` → `{run_mode}` → `local` files under `dir`, then `env`
    pub fn layered(
        dir: &Path,
        run_mode: &str,
        env: config::Environment,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        let file = |name: &str| config::File::with_name(&dir.join(name).to_string_lossy());

        config::Config::builder()
            .add_source(file("default"))
            // Per-environment overrides, optional
            .add_source(file(run_mode).required(false))
            // Local overrides, not checked in
            .add_source(file("local").required(false))
            .add_source(env)
    }

    pub fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.catalog.backend == CatalogBackend::Postgres && self.database.url.is_none() {
            return Err(config::ConfigError::Message(
                "catalog.backend = \"postgres\" requires database.url".to_string(),
            ));
        }
        if self.database.max_connections == 0 {
            return Err(config::ConfigError::Message(
                "database.max_connections must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
