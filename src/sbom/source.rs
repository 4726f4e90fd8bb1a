//! Classification of module source addresses.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Default host of registry addresses without an explicit hostname.
pub const DEFAULT_REGISTRY_HOST: &str = "registry.terraform.io";

/// `[<hostname>/]<namespace>/<name>/<provider>[//<subdir>]`
static REGISTRY_ADDRESS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?P<host>[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)+(?::\d+)?)/)?(?P<namespace>[A-Za-z0-9][A-Za-z0-9_-]*)/(?P<name>[A-Za-z0-9][A-Za-z0-9_-]*)/(?P<provider>[a-z0-9]+)(?://.*)?$",
    )
    .unwrap()
});

/// Where a module source points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    /// Relative path into the same repository.
    Local,
    /// Module registry address.
    Registry {
        hostname: String,
        namespace: String,
        name: String,
        provider: String,
    },
    Git,
    GitHub,
    Bitbucket,
    Mercurial,
    Http,
    S3,
    Gcs,
    Unknown,
}

impl SourceKind {
    /// Classify a source string.
    pub fn classify(source: &str) -> Self {
        let source = source.trim();

        if source.starts_with("./") || source.starts_with("../") {
            return Self::Local;
        }

        // Forced getters
        if source.starts_with("git::") || source.starts_with("git@") {
            return Self::Git;
        }
        if source.starts_with("hg::") {
            return Self::Mercurial;
        }
        if source.starts_with("s3::") || source.contains(".s3.amazonaws.com/") {
            return Self::S3;
        }
        if source.starts_with("gcs::") || source.starts_with("www.googleapis.com/storage/") {
            return Self::Gcs;
        }

        if source.starts_with("github.com/") {
            return Self::GitHub;
        }
        if source.starts_with("bitbucket.org/") {
            return Self::Bitbucket;
        }
        if source.starts_with("http://") || source.starts_with("https://") {
            return Self::Http;
        }

        if let Some(caps) = REGISTRY_ADDRESS.captures(source) {
            return Self::Registry {
                hostname: caps
                    .name("host")
                    .map_or(DEFAULT_REGISTRY_HOST, |m| m.as_str())
                    .to_string(),
                namespace: caps["namespace"].to_string(),
                name: caps["name"].to_string(),
                provider: caps["provider"].to_string(),
            };
        }

        Self::Unknown
    }

    /// Short lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Registry { .. } => "registry",
            Self::Git => "git",
            Self::GitHub => "github",
            Self::Bitbucket => "bitbucket",
            Self::Mercurial => "mercurial",
            Self::Http => "http",
            Self::S3 => "s3",
            Self::Gcs => "gcs",
            Self::Unknown => "unknown",
        }
    }

    /// Sources fetched from a version control system.
    pub fn is_vcs(&self) -> bool {
        matches!(
            self,
            Self::Git | Self::GitHub | Self::Bitbucket | Self::Mercurial
        )
    }

    /// Sources fetched as an archive.
    pub fn is_archive(&self) -> bool {
        matches!(self, Self::Http | Self::S3 | Self::Gcs)
    }

    /// Namespace of a registry address.
    pub fn registry_namespace(&self) -> Option<&str> {
        match self {
            Self::Registry { namespace, .. } => Some(namespace),
            _ => None,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
