use std::collections::HashMap;
use std::ffi::OsString;
use std::fs;
use std::io::{Error, ErrorKind};
use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_PORT: u16 = 7071;
pub const DEFAULT_TRIGGER_ROUTE: &str = "/api/test-function";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: IpAddr,
    pub port: u16,
    pub trigger_route: String,
}

impl Config {
    /// Loads settings from an optional `.env` file, with the process
    /// environment taking precedence over values from the file.
    pub fn from_env_file(path: &str) -> Result<Self, Error> {
        Self::from_file_with_env(path, std::env::vars_os())
    }

    pub fn from_file_with_env<I>(path: &str, env_vars: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let file_vars = match load_dotenv(path) {
            Ok(vars) => vars,
            Err(e) if e.kind() == ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e),
        };

        Self::from_sources(file_vars, env_vars)
    }

    /// Environment entries override file entries. Entries that are not
    /// valid UTF-8 are skipped.
    pub fn from_sources<I>(
        mut file_vars: HashMap<String, String>,
        env_vars: I,
    ) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        file_vars.extend(env_vars.into_iter().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }));

        Self::from_vars(&file_vars)
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, Error> {
        // The Functions host hands its custom handler a port of its choosing
        let port = match vars
            .get("FUNCTIONS_CUSTOMHANDLER_PORT")
            .or_else(|| vars.get("PORT"))
        {
            Some(value) => value.parse().map_err(|_| {
                Error::new(ErrorKind::InvalidInput, format!("invalid port: {value}"))
            })?,
            None => DEFAULT_PORT,
        };

        let bind_address = match vars.get("BIND_ADDRESS") {
            Some(value) => value.parse().map_err(|_| {
                Error::new(
                    ErrorKind::InvalidInput,
                    format!("invalid bind address: {value}"),
                )
            })?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let trigger_route = vars
            .get("TRIGGER_ROUTE")
            .cloned()
            .unwrap_or_else(|| DEFAULT_TRIGGER_ROUTE.to_string());

        // `/` is taken by the ping route
        if !trigger_route.starts_with('/') || trigger_route == "/" {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("TRIGGER_ROUTE must be a path below `/`: {trigger_route}"),
            ));
        }

        if !is_literal_path(&trigger_route) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("TRIGGER_ROUTE must be a literal path: {trigger_route}"),
            ));
        }

        Ok(Config {
            bind_address,
            port,
            trigger_route,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.port)
    }
}

// axum rejects `:`/`*` segment prefixes and treats braces as captures
fn is_literal_path(route: &str) -> bool {
    !route.contains(['{', '}'])
        && route
            .split('/')
            .all(|segment| !segment.starts_with([':', '*']))
}

fn load_dotenv(path: &str) -> Result<HashMap<String, String>, Error> {
    let mut vars: HashMap<String, String> = HashMap::new();
    let content = fs::read_to_string(path)?;

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('#') || line.is_empty() {
            continue;
        }

        if let Some((key, value)) = line.split_once('=') {
            vars.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    Ok(vars)
}
