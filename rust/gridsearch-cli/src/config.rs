use std::env;
use std::path::PathBuf;

use crate::Args;

pub const DEFAULT_LAYOUT_DIR: &str = "layouts";
pub const DEFAULT_OUT_DIR: &str = "solutions";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub layout_dir: PathBuf,
    pub out_dir: PathBuf,
    pub max_expansions: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self { layout_dir: DEFAULT_LAYOUT_DIR.into(), out_dir: DEFAULT_OUT_DIR.into(), max_expansions: None }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Build from any key lookup; unparsable numbers fall back to the default.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(get: F) -> Self {
        let layout_dir = get("GRIDSEARCH_LAYOUT_DIR").map(PathBuf::from).unwrap_or_else(|| DEFAULT_LAYOUT_DIR.into());
        let out_dir = get("GRIDSEARCH_OUT_DIR").map(PathBuf::from).unwrap_or_else(|| DEFAULT_OUT_DIR.into());
        let max_expansions = get("GRIDSEARCH_MAX_EXPANSIONS").and_then(|s| s.trim().parse::<u64>().ok());
        Self { layout_dir, out_dir, max_expansions }
    }

    /// Command-line flags win over environment values.
    pub fn merge_args(mut self, args: &Args) -> Self {
        if let Some(d) = &args.layout_dir { self.layout_dir = d.clone(); }
        if let Some(d) = &args.out_dir { self.out_dir = d.clone(); }
        if args.max_expansions.is_some() { self.max_expansions = args.max_expansions; }
        self
    }
}
