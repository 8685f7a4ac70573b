use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// User additions to the built-in instrument→account tables, keyed by
/// format key. Lets people register their own cards without rebuilding:
///
/// ```json
/// { "alipay": { "花呗": "蚂蚁花呗" }, "wechat": {} }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountOverrides {
    #[serde(default)]
    pub wechat: HashMap<String, String>,
    #[serde(default)]
    pub alipay: HashMap<String, String>,
}

impl AccountOverrides {
    pub fn for_format(&self, key: &str) -> HashMap<String, String> {
        match key {
            "wechat" => self.wechat.clone(),
            "alipay" => self.alipay.clone(),
            _ => HashMap::new(),
        }
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("firefly-prep")
}

fn accounts_path() -> PathBuf {
    config_dir().join("accounts.json")
}

/// Missing or malformed file just means no overrides.
pub fn load_overrides() -> AccountOverrides {
    let path = accounts_path();
    if path.exists() {
        let content = std::fs::read_to_string(&path).unwrap_or_default();
        serde_json::from_str(&content).unwrap_or_default()
    } else {
        AccountOverrides::default()
    }
}
