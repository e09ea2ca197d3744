// Local ledger cache deduplicating retried submissions.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

/// Durable map of request identifier -> transaction signature.
///
/// Consulted before every send so a retried attempt whose predecessor
/// actually committed cannot transfer twice. An absent file is an empty log.
pub struct SubmissionLog {
    path: PathBuf,
}

impl SubmissionLog {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    fn load(&self) -> anyhow::Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read submission log {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("submission log {} is not valid JSON", self.path.display()))
    }

    /// Signature recorded for `request_id`, if this record already went out.
    pub fn lookup(&self, request_id: &str) -> anyhow::Result<Option<String>> {
        Ok(self.load()?.get(request_id).cloned())
    }

    /// Records a confirmed submission.
    pub fn record(&self, request_id: &str, signature: &str) -> anyhow::Result<()> {
        let mut entries = self.load()?;
        entries.insert(request_id.to_string(), signature.to_string());
        let raw = serde_json::to_string(&entries)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write submission log {}", self.path.display()))
    }
}
