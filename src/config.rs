use std::fmt;

pub const SERVER_ENV: &str = "FB_SERVER";
pub const DEFAULT_ADDRESS: &str = "localhost:50051";

/// Address of the battlegrounds server, as given by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerAddress(String);

impl ServerAddress {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Picks the address from, in order: the environment override, the first
    /// command-line argument, the built-in default. Empty values are skipped.
    pub fn resolve(env_override: Option<String>, first_arg: Option<String>) -> Self {
        env_override
            .filter(|s| !s.trim().is_empty())
            .or_else(|| first_arg.filter(|s| !s.trim().is_empty()))
            .map_or_else(|| Self::new(DEFAULT_ADDRESS), Self::new)
    }

    pub fn from_process() -> Self {
        Self::resolve(std::env::var(SERVER_ENV).ok(), std::env::args().nth(1))
    }

    /// Transport URI; a bare `host:port` is dialed over plaintext HTTP/2.
    pub fn uri(&self) -> String {
        if self.0.starts_with("http://") || self.0.starts_with("https://") {
            self.0.clone()
        } else {
            format!("http://{}", self.0)
        }
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_owned())
    }

    #[test]
    fn env_wins_over_argument() {
        let addr = ServerAddress::resolve(some("env:1"), some("arg:2"));
        assert_eq!(addr, ServerAddress::new("env:1"));
    }

    #[test]
    fn argument_used_without_env() {
        assert_eq!(ServerAddress::resolve(None, some("arg:2")).to_string(), "arg:2");
        assert_eq!(ServerAddress::resolve(some(""), some("arg:2")).to_string(), "arg:2");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(ServerAddress::resolve(None, None).to_string(), DEFAULT_ADDRESS);
        assert_eq!(ServerAddress::resolve(some(" "), some("")).to_string(), DEFAULT_ADDRESS);
    }

    #[test]
    fn uri_adds_scheme_once() {
        assert_eq!(ServerAddress::new("localhost:50051").uri(), "http://localhost:50051");
        assert_eq!(ServerAddress::new("https://fb.example:443").uri(), "https://fb.example:443");
    }
}
