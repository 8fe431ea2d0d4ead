use std::fmt;
use std::fmt::{Display, Formatter};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::str::FromStr;
use std::time::Duration;
use crate::core::library::{LibraryError, LibraryResult};

// Identifiable defines common traits that can be shared by stored records
pub trait Identifiable: Sync + Send {
    fn id(&self) -> i64;
}

pub const DEFAULT_CATALOG_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 3000));
pub const DEFAULT_BORROWING_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 8000));
pub const DEFAULT_CATALOG_URL: &str = "http://localhost:3000";
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 5;

// AvailabilityVia selects where the borrowing service learns whether a book may be borrowed.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum AvailabilityVia {
    Catalog,
    Fixed,
}

impl FromStr for AvailabilityVia {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "catalog" => Ok(AvailabilityVia::Catalog),
            "fixed" => Ok(AvailabilityVia::Fixed),
            other => Err(LibraryError::validation(
                format!("unknown AVAILABILITY_SOURCE {}, expected catalog or fixed", other).as_str(), None)),
        }
    }
}

impl Display for AvailabilityVia {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            AvailabilityVia::Catalog => write!(f, "catalog"),
            AvailabilityVia::Fixed => write!(f, "fixed"),
        }
    }
}

// Configuration abstracts config options for a single service process
#[derive(Debug, PartialEq, Clone)]
pub struct Configuration {
    pub service_name: String,
    pub bind_addr: SocketAddr,
    pub availability: AvailabilityVia,
    pub catalog_url: String,
    pub catalog_timeout: Duration,
}

impl Configuration {
    pub fn new(service_name: &str, bind_addr: SocketAddr) -> Self {
        Configuration {
            service_name: service_name.to_string(),
            bind_addr,
            availability: AvailabilityVia::Catalog,
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            catalog_timeout: Duration::from_secs(DEFAULT_CATALOG_TIMEOUT_SECS),
        }
    }

    pub fn catalog() -> Self {
        Self::new("catalog", DEFAULT_CATALOG_ADDR)
    }

    pub fn borrowing() -> Self {
        Self::new("borrowing", DEFAULT_BORROWING_ADDR)
    }

    /// Overrides the defaults from process environment variables.
    pub fn from_env(self) -> LibraryResult<Self> {
        self.with_vars(|name| std::env::var(name).ok())
    }

    /// Overrides the defaults with the variables `lookup` knows about:
    /// `CATALOG_ADDR`/`BORROWING_ADDR`, `AVAILABILITY_SOURCE`, `CATALOG_SERVICE_URL`
    /// and `CATALOG_TIMEOUT_SECS`.
    pub fn with_vars<F>(mut self, lookup: F) -> LibraryResult<Self>
        where F: Fn(&str) -> Option<String> {
        let addr_var = format!("{}_ADDR", self.service_name.to_uppercase());
        if let Some(addr) = lookup(addr_var.as_str()) {
            self.bind_addr = addr.parse().map_err(|_| LibraryError::validation(
                format!("invalid {} {}", addr_var, addr).as_str(), None))?;
        }
        if let Some(source) = lookup("AVAILABILITY_SOURCE") {
            self.availability = source.parse()?;
        }
        if let Some(url) = lookup("CATALOG_SERVICE_URL") {
            self.catalog_url = url.trim_end_matches('/').to_string();
        }
        if let Some(secs) = lookup("CATALOG_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|_| LibraryError::validation(
                format!("invalid CATALOG_TIMEOUT_SECS {}", secs).as_str(), None))?;
            self.catalog_timeout = Duration::from_secs(secs);
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;
    use crate::core::domain::{AvailabilityVia, Configuration, DEFAULT_BORROWING_ADDR, DEFAULT_CATALOG_ADDR, DEFAULT_CATALOG_URL};

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::catalog();
        assert_eq!("catalog", config.service_name.as_str());
        assert_eq!(DEFAULT_CATALOG_ADDR, config.bind_addr);
        assert_eq!("0.0.0.0:3000", config.bind_addr.to_string());
        assert_eq!(AvailabilityVia::Catalog, config.availability);
        assert_eq!(DEFAULT_CATALOG_URL, config.catalog_url.as_str());
        assert_eq!(Duration::from_secs(5), config.catalog_timeout);
        assert_eq!("0.0.0.0:8000", Configuration::borrowing().bind_addr.to_string());
        assert_eq!(DEFAULT_BORROWING_ADDR, Configuration::borrowing().bind_addr);
    }

    #[tokio::test]
    async fn test_should_override_from_vars() {
        let env = vars(&[
            ("BORROWING_ADDR", "127.0.0.1:9100"),
            ("CATALOG_ADDR", "127.0.0.1:9200"),
            ("AVAILABILITY_SOURCE", "fixed"),
            ("CATALOG_SERVICE_URL", "http://catalog:3000/"),
            ("CATALOG_TIMEOUT_SECS", "2"),
        ]);
        let config = Configuration::borrowing().with_vars(|k| env.get(k).cloned()).expect("should load config");
        assert_eq!("127.0.0.1:9100", config.bind_addr.to_string());
        assert_eq!(AvailabilityVia::Fixed, config.availability);
        assert_eq!("http://catalog:3000", config.catalog_url.as_str());
        assert_eq!(Duration::from_secs(2), config.catalog_timeout);
    }

    #[tokio::test]
    async fn test_should_reject_invalid_vars() {
        let env = vars(&[("CATALOG_ADDR", "not-an-address")]);
        assert!(Configuration::catalog().with_vars(|k| env.get(k).cloned()).is_err());

        let env = vars(&[("AVAILABILITY_SOURCE", "carrier-pigeon")]);
        assert!(Configuration::borrowing().with_vars(|k| env.get(k).cloned()).is_err());

        let env = vars(&[("CATALOG_TIMEOUT_SECS", "soon")]);
        assert!(Configuration::borrowing().with_vars(|k| env.get(k).cloned()).is_err());
    }

    #[tokio::test]
    async fn test_should_parse_availability_via() {
        for via in [AvailabilityVia::Catalog, AvailabilityVia::Fixed] {
            assert_eq!(via, via.to_string().parse::<AvailabilityVia>().expect("should parse"));
        }
        assert_eq!(AvailabilityVia::Fixed, " FIXED ".parse::<AvailabilityVia>().expect("should parse"));
        assert!("dns".parse::<AvailabilityVia>().is_err());
    }
}
