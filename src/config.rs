/// Archive of the upstream template's default branch.
pub const TEMPLATE_URL: &str = "https://codeload.github.com/go-jimu/template/zip/refs/heads/master";
/// Module path baked into every template file.
pub const PLACEHOLDER: &str = "github.com/go-jimu/template";
/// Top-level directory produced by extracting the template archive.
pub const EXTRACT_DIR: &str = "template-master";
pub const DOCKERFILE_NAME: &str = "Dockerfile";
/// Binary name used by the template's Dockerfile.
pub const BINARY_PLACEHOLDER: &str = "template";

/// Constant configuration for a scaffolding run.
///
/// Built once at startup and passed by reference; nothing mutates it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ScaffoldConfig {
    pub template_url: String,
    pub placeholder: String,
    pub extract_dir: String,
    pub dockerfile_name: String,
    pub binary_placeholder: String,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            template_url: TEMPLATE_URL.to_owned(),
            placeholder: PLACEHOLDER.to_owned(),
            extract_dir: EXTRACT_DIR.to_owned(),
            dockerfile_name: DOCKERFILE_NAME.to_owned(),
            binary_placeholder: BINARY_PLACEHOLDER.to_owned(),
        }
    }
}
