use url::Url;

/// The slice of the remote storage provider's namespace this deployment
/// serves images from. Locators outside it are rejected before any
/// network call is made.
#[derive(Debug, Clone)]
pub struct StorageNamespace {
    public_base: String,
}

impl StorageNamespace {
    pub fn new(public_base: &str) -> Result<Self, url::ParseError> {
        Url::parse(public_base)?;
        Ok(Self {
            public_base: public_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn contains(&self, locator: &str) -> bool {
        self.object_path(locator).is_some()
    }

    /// Resolves the object path a locator points at, or None when the
    /// locator lives outside this namespace.
    pub fn object_path(&self, locator: &str) -> Option<String> {
        let rest = locator.strip_prefix(&self.public_base)?;
        let path = rest.trim_start_matches('/');
        if path.is_empty() {
            return None;
        }
        Some(path.to_string())
    }

    /// Builds the public locator for an object path, the inverse of
    /// [`Self::object_path`].
    pub fn locator_for(&self, object_path: &str) -> String {
        format!("{}/{}", self.public_base, object_path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn namespace() -> StorageNamespace {
        StorageNamespace::new("https://cdn.example.com/assets/").unwrap()
    }

    #[test]
    fn should_reject_public_base_that_is_not_a_url() {
        assert!(StorageNamespace::new("not a url").is_err());
    }

    #[test]
    fn should_resolve_object_path_inside_namespace() {
        let path = namespace().object_path("https://cdn.example.com/assets/products/a.png");
        assert_eq!(path.as_deref(), Some("products/a.png"));
    }

    #[test]
    fn should_reject_locator_from_another_host() {
        assert!(!namespace().contains("https://elsewhere.example.com/assets/a.png"));
    }

    #[test]
    fn should_reject_bare_namespace_root() {
        assert!(!namespace().contains("https://cdn.example.com/assets/"));
    }

    #[test]
    fn should_round_trip_locator_and_object_path() {
        let ns = namespace();
        let locator = ns.locator_for("products/a.png");
        assert_eq!(locator, "https://cdn.example.com/assets/products/a.png");
        assert_eq!(ns.object_path(&locator).as_deref(), Some("products/a.png"));
    }
}
