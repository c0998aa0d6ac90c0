use crate::error::Error;
use crate::host_store::HostRecord;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone)]
pub(super) struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, Debug, Clone)]
pub(super) struct LoginResult {
    pub token: String,
}

#[derive(Deserialize, Debug, Clone)]
pub(super) struct AddHostRequest {
    pub host: Option<String>,
    pub ip: Option<String>,
}

impl AddHostRequest {
    /// Returns the record to add, or [`Error::MissingField`] naming the first absent field.
    pub fn record(self) -> Result<HostRecord, Error> {
        let host = required(self.host, "host")?;
        let ip = required(self.ip, "ip")?;
        Ok(HostRecord { host, ip })
    }
}

#[derive(Deserialize, Debug, Clone)]
pub(super) struct DeleteHostRequest {
    pub host: Option<String>,
}

impl DeleteHostRequest {
    pub fn host(self) -> Result<String, Error> {
        required(self.host, "host")
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, Error> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(Error::MissingField(field))
}

#[derive(Serialize, Debug, Clone)]
pub(super) struct ListHostsResult {
    pub success: bool,
    pub hosts: Vec<HostRecord>,
}

#[derive(Serialize, Debug, Clone)]
pub(super) struct AddHostResult {
    pub success: bool,
    pub message: &'static str,
    pub host: String,
    pub ip: String,
}

#[derive(Serialize, Debug, Clone)]
pub(super) struct DeleteHostResult {
    pub success: bool,
    pub message: &'static str,
    pub host: String,
}

/// Check that `host` fits in a single `<ip> <hostname>` store line: no spaces, tabs or line
/// breaks.
pub fn valid_hostname(host: &str) -> bool {
    !host.chars().any(char::is_whitespace)
}

/// Check that `ip` is a plausible dotted IPv4 address: every `.` separated part must be an
/// integer from 0 to 255.
///
/// The number of parts is not checked, so `1.2.3` and `1.2.3.4.5` pass. Existing clients
/// depend on this, so it is kept as is.
pub fn valid_ipv4(ip: &str) -> bool {
    ip.split('.')
        .all(|octet| octet.parse::<i64>().is_ok_and(|n| (0..=255).contains(&n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ipv4() {
        for ip in ["192.168.1.1", "0.0.0.0", "255.255.255.255", "10.0.0.01"] {
            assert!(valid_ipv4(ip), "{ip} should be accepted");
        }
    }

    #[test]
    fn test_valid_ipv4_octet_count_unchecked() {
        for ip in ["1.2.3", "1.2.3.4.5", "7"] {
            assert!(valid_ipv4(ip), "{ip} should be accepted");
        }
    }

    #[test]
    fn test_invalid_ipv4() {
        for ip in [
            "256.1.1.1",
            "-1.2.3.4",
            "a.b.c.d",
            "1.2.3.x",
            "1..2.3",
            "1.2.3.4.",
            " 1.2.3.4",
            "",
        ] {
            assert!(!valid_ipv4(ip), "{ip:?} should be rejected");
        }
    }

    #[test]
    fn test_valid_hostname() {
        assert!(valid_hostname("nas.lan"));
        assert!(valid_hostname("printer-2"));
        for host in ["a b", "x\n10.0.0.9 injected.lan", "tab\there", "cr\r"] {
            assert!(!valid_hostname(host), "{host:?} should be rejected");
        }
    }

    #[test]
    fn test_add_request_required_fields() {
        let req: AddHostRequest = serde_json::from_str(r#"{"ip": "10.0.0.1"}"#).unwrap();
        assert!(matches!(req.record(), Err(Error::MissingField("host"))));

        let req: AddHostRequest = serde_json::from_str(r#"{"host": "nas.lan", "ip": ""}"#).unwrap();
        assert!(matches!(req.record(), Err(Error::MissingField("ip"))));

        // host is reported first when both are missing.
        let req: AddHostRequest = serde_json::from_str("{}").unwrap();
        assert!(matches!(req.record(), Err(Error::MissingField("host"))));

        let req: AddHostRequest =
            serde_json::from_str(r#"{"host": "nas.lan", "ip": "10.0.0.1"}"#).unwrap();
        assert_eq!(req.record().unwrap(), HostRecord::new("nas.lan", "10.0.0.1"));
    }

    #[test]
    fn test_delete_request_required_fields() {
        let req: DeleteHostRequest = serde_json::from_str(r#"{"host": ""}"#).unwrap();
        assert!(matches!(req.host(), Err(Error::MissingField("host"))));

        let req: DeleteHostRequest = serde_json::from_str(r#"{"host": "nas.lan"}"#).unwrap();
        assert_eq!(req.host().unwrap(), "nas.lan");
    }
}
