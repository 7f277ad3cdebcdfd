//! Carthage command line construction

/// Environment variable Carthage reads the GitHub API token from
pub const GITHUB_TOKEN_ENV: &str = "GITHUB_ACCESS_TOKEN";

/// Environment variable xcodebuild reads an extra xcconfig file from
pub const XCCONFIG_FILE_ENV: &str = "XCODE_XCCONFIG_FILE";

/// Arguments and environment for one Carthage invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarthageCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl CarthageCommand {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject the GitHub token, unless it is empty
    pub fn github_token(mut self, token: &str) -> Self {
        if !token.is_empty() {
            self.envs
                .push((GITHUB_TOKEN_ENV.to_string(), token.to_string()));
        }
        self
    }

    /// Inject the xcconfig file path, unless it is empty
    pub fn xcconfig_file(mut self, path: &str) -> Self {
        if !path.is_empty() {
            self.envs
                .push((XCCONFIG_FILE_ENV.to_string(), path.to_string()));
        }
        self
    }

    /// Append arguments
    pub fn append<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn envs(&self) -> &[(String, String)] {
        &self.envs
    }

    /// Shell-quoted command line for logs. Environment values are left out.
    pub fn printable(&self, program: &str) -> String {
        shell_words::join(std::iter::once(program).chain(self.args.iter().map(String::as_str)))
    }
}
