//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r#"# Harbor Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "Harbor"
# width = 1024           # 200-8192
# height = 768           # 200-8192

[webview]
# assets_dir = "assets"  # relative to the working directory
# entry = "index.html"   # relative to assets_dir
# scripts = true         # required
# devtools = false
# user_agent = "Harbor/0.1.0"

[navigation]
# "substring": any URL containing file:// stays in the view
# "scheme":    only URLs whose scheme is file stay in the view
# policy = "substring"

[logging]
# level = "info"         # trace, debug, info, warn, error
"#
}
