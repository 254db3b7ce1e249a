use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::dict::vocabulary::VocabError;

/// Source of vocabulary configuration: which extension language tables to
/// merge over the built-in one. Loaded once at startup, no reload path.
pub trait Configuration {
    fn ext_tables(&self) -> Vec<String>;
}

/// Configuration read from a YAML file:
///
/// ```yaml
/// ext_tables:
///   - /etc/langseg/constructed.yml
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct YamlConfiguration {
    #[serde(default)]
    ext_tables: Vec<String>,
}

impl YamlConfiguration {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, VocabError> {
        let file = File::open(path)?;
        let cfg = serde_yaml::from_reader(BufReader::new(file))?;
        Ok(cfg)
    }
}

impl Configuration for YamlConfiguration {
    fn ext_tables(&self) -> Vec<String> {
        self.ext_tables.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn yaml_configuration_parses() {
        let cfg: YamlConfiguration =
            serde_yaml::from_str("ext_tables:\n  - /tmp/extra.yml\n").unwrap();
        assert_eq!(cfg.ext_tables(), vec!["/tmp/extra.yml".to_string()]);
    }

    #[test]
    fn ext_tables_default_to_empty() {
        let cfg: YamlConfiguration = serde_yaml::from_str("{}").unwrap();
        assert!(cfg.ext_tables().is_empty());
    }

    #[test]
    fn vocabulary_honors_configuration() {
        use crate::dict::vocabulary::Vocabulary;

        let table = std::env::temp_dir().join(format!("langseg-cfg-{}.yml", std::process::id()));
        std::fs::write(&table, "tlh: Klingon\n").unwrap();

        struct OneTable(String);
        impl Configuration for OneTable {
            fn ext_tables(&self) -> Vec<String> {
                vec![self.0.clone()]
            }
        }

        let cfg = OneTable(table.display().to_string());
        let vocab = Vocabulary::with_config(&cfg).unwrap();
        assert!(vocab.contains("klingon"));
        assert!(vocab.contains("english"));

        std::fs::remove_file(&table).ok();
    }
}
