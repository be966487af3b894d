//! The network connection profile: organizations and the CAs that serve them.
use crate::error::network_config::NetworkConfigError;
use crate::error::network_config::NetworkConfigError::{
    CertificateAuthorityNotFound, EmptyMspId, InvalidOrganizationName, LoadNetworkConfigFailed,
    NoCertificateAuthority, ParseNetworkConfigFailed,
};
use crate::error::network_config::OrganizationConfigError;
use crate::error::network_config::OrganizationConfigError::OrganizationNotFound;
use crate::identity::names::validate_name;
use crate::json::load_json_file;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use url::Url;

/// Read-only lookup of per-organization metadata.
pub trait OrganizationConfig: Send + Sync {
    fn organization(&self, organization: &str)
        -> Result<OrganizationInfo, OrganizationConfigError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrganizationInfo {
    /// Display name.
    pub name: String,
    pub msp_id: String,
    pub certificate_authorities: Vec<String>,
}

/// Connection parameters a CA client is created from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaInfo {
    pub name: String,
    pub url: Url,
    pub ca_name: Option<String>,
    pub tls_ca_certs: Option<TlsCaCerts>,
    pub verify_tls: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    #[serde(default)]
    pub name: Option<String>,

    pub organizations: BTreeMap<String, OrganizationEntry>,

    #[serde(default)]
    pub certificate_authorities: BTreeMap<String, CertificateAuthorityEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationEntry {
    /// Defaults to the key the organization is listed under.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(rename = "mspid")]
    pub msp_id: String,

    #[serde(default)]
    pub certificate_authorities: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateAuthorityEntry {
    pub url: Url,

    #[serde(default)]
    pub ca_name: Option<String>,

    #[serde(default, rename = "tlsCACerts")]
    pub tls_ca_certs: Option<TlsCaCerts>,

    #[serde(default)]
    pub http_options: HttpOptions,
}

/// Trusted roots for the CA's TLS endpoint, inline or as a file.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlsCaCerts {
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default)]
    pub pem: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HttpOptions {
    #[serde(default = "default_verify")]
    pub verify: bool,
}

fn default_verify() -> bool {
    true
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            verify: default_verify(),
        }
    }
}

impl NetworkConfig {
    /// Loads a profile from disk. Relative `tlsCACerts` paths are resolved
    /// against the directory containing the profile.
    pub fn from_file(path: &Path) -> Result<Self, NetworkConfigError> {
        let mut config: NetworkConfig = load_json_file(path).map_err(LoadNetworkConfigFailed)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_paths(base);
        }
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, NetworkConfigError> {
        let config: NetworkConfig = serde_json::from_str(json).map_err(ParseNetworkConfigFailed)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), NetworkConfigError> {
        for (key, org) in &self.organizations {
            validate_name(key).map_err(|err| InvalidOrganizationName(key.clone(), err))?;
            if org.msp_id.trim().is_empty() {
                return Err(EmptyMspId(key.clone()));
            }
        }
        Ok(())
    }

    fn resolve_relative_paths(&mut self, base: &Path) {
        for ca in self.certificate_authorities.values_mut() {
            if let Some(path) = ca.tls_ca_certs.as_mut().and_then(|t| t.path.as_mut()) {
                if path.is_relative() {
                    *path = base.join(&*path);
                }
            }
        }
    }

    /// Connection parameters of the first CA listed by `organization`.
    pub fn ca_info(&self, organization: &str) -> Result<CaInfo, NetworkConfigError> {
        let info = self.organization(organization)?;
        let ca_key = info
            .certificate_authorities
            .first()
            .ok_or_else(|| NoCertificateAuthority(organization.to_string()))?;
        let ca = self.certificate_authorities.get(ca_key).ok_or_else(|| {
            CertificateAuthorityNotFound(organization.to_string(), ca_key.clone())
        })?;
        Ok(CaInfo {
            name: ca_key.clone(),
            url: ca.url.clone(),
            ca_name: ca.ca_name.clone(),
            tls_ca_certs: ca.tls_ca_certs.clone(),
            verify_tls: ca.http_options.verify,
        })
    }
}

impl OrganizationConfig for NetworkConfig {
    fn organization(
        &self,
        organization: &str,
    ) -> Result<OrganizationInfo, OrganizationConfigError> {
        let entry = self
            .organizations
            .get(organization)
            .ok_or_else(|| OrganizationNotFound(organization.to_string()))?;
        Ok(OrganizationInfo {
            name: entry
                .name
                .clone()
                .unwrap_or_else(|| organization.to_string()),
            msp_id: entry.msp_id.clone(),
            certificate_authorities: entry.certificate_authorities.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#"{
        "name": "basic-network",
        "organizations": {
            "Org1": {
                "name": "Org1",
                "mspid": "Org1MSP",
                "certificateAuthorities": ["ca.org1.example.com"]
            },
            "Org2": {
                "mspid": "Org2MSP"
            },
            "Org3": {
                "mspid": "Org3MSP",
                "certificateAuthorities": ["ca.org3.example.com"]
            }
        },
        "certificateAuthorities": {
            "ca.org1.example.com": {
                "url": "https://localhost:7054",
                "caName": "ca-org1",
                "tlsCACerts": { "path": "crypto/ca.crt" },
                "httpOptions": { "verify": false }
            }
        }
    }"#;

    #[test]
    fn organization_lookup() {
        let config = NetworkConfig::from_json(PROFILE).unwrap();
        let org1 = config.organization("Org1").unwrap();
        assert_eq!(org1.msp_id, "Org1MSP");
        assert_eq!(org1.certificate_authorities, vec!["ca.org1.example.com"]);

        let org2 = config.organization("Org2").unwrap();
        assert_eq!(org2.name, "Org2");
        assert!(org2.certificate_authorities.is_empty());
    }

    #[test]
    fn unknown_organization() {
        let config = NetworkConfig::from_json(PROFILE).unwrap();
        assert!(matches!(
            config.organization("Org9"),
            Err(OrganizationNotFound(org)) if org == "Org9"
        ));
    }

    #[test]
    fn ca_info_for_organization() {
        let config = NetworkConfig::from_json(PROFILE).unwrap();
        let ca = config.ca_info("Org1").unwrap();
        assert_eq!(ca.name, "ca.org1.example.com");
        assert_eq!(ca.url.as_str(), "https://localhost:7054/");
        assert_eq!(ca.ca_name.as_deref(), Some("ca-org1"));
        assert!(!ca.verify_tls);
    }

    #[test]
    fn ca_info_errors() {
        let config = NetworkConfig::from_json(PROFILE).unwrap();
        assert!(matches!(
            config.ca_info("Org2"),
            Err(NoCertificateAuthority(_))
        ));
        assert!(matches!(
            config.ca_info("Org3"),
            Err(CertificateAuthorityNotFound(_, ca)) if ca == "ca.org3.example.com"
        ));
        assert!(matches!(
            config.ca_info("Org9"),
            Err(NetworkConfigError::OrganizationConfig(OrganizationNotFound(_)))
        ));
    }

    #[test]
    fn rejects_invalid_profiles() {
        let bad_url = r#"{"organizations": {}, "certificateAuthorities": {
            "ca": { "url": "not a url" } }}"#;
        assert!(matches!(
            NetworkConfig::from_json(bad_url),
            Err(ParseNetworkConfigFailed(_))
        ));

        let empty_msp = r#"{"organizations": { "Org1": { "mspid": " " } }}"#;
        assert!(matches!(
            NetworkConfig::from_json(empty_msp),
            Err(EmptyMspId(_))
        ));

        let bad_org = r#"{"organizations": { "../Org1": { "mspid": "Org1MSP" } }}"#;
        assert!(matches!(
            NetworkConfig::from_json(bad_org),
            Err(InvalidOrganizationName(..))
        ));
    }

    #[test]
    fn from_file_resolves_tls_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connection.json");
        std::fs::write(&path, PROFILE).unwrap();

        let config = NetworkConfig::from_file(&path).unwrap();
        let tls = config.ca_info("Org1").unwrap().tls_ca_certs.unwrap();
        assert_eq!(tls.path, Some(dir.path().join("crypto/ca.crt")));
    }

    #[test]
    fn from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            NetworkConfig::from_file(&dir.path().join("missing.json")),
            Err(LoadNetworkConfigFailed(_))
        ));
    }
}
