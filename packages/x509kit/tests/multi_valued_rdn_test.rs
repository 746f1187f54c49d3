//! Canonical names for certificates whose RDNs hold several attributes

use std::str::FromStr;

use der::{Decode, Encode};
use rcgen::{CertificateParams, DistinguishedName, DnType, KeyPair};
use x509_cert::Certificate;
use x509_cert::name::Name;
use x509kit::{X509Kit, canonical_issuer, canonical_subject};

/// Self-signed rcgen certificate with its subject replaced by `subject`
///
/// The signature no longer matches, which extraction does not check.
fn certificate_with_subject(subject: &str) -> Vec<u8> {
    let mut issuer = DistinguishedName::new();
    issuer.push(DnType::CommonName, "Issuer CA");
    issuer.push(DnType::OrganizationName, "Acme");

    let mut params = CertificateParams::new(vec!["host.acme.test".to_string()])
        .expect("Failed to create certificate parameters");
    params.distinguished_name = issuer;

    let key_pair = KeyPair::generate().expect("Failed to generate key pair");
    let generated = params
        .self_signed(&key_pair)
        .expect("Failed to create self-signed certificate");

    let mut cert = Certificate::from_der(generated.der()).expect("rcgen DER should decode");
    cert.tbs_certificate.subject = Name::from_str(subject).expect("subject should parse");
    cert.to_der().expect("certificate should re-encode")
}

#[test]
fn test_multi_valued_rdn_attributes_become_separate_keys() -> Result<(), x509kit::Error> {
    let der = certificate_with_subject("CN=Host+OU=Ops,O=Acme");
    let cert = X509Kit::certificate().parse_der(&der)?;

    assert_eq!(cert.subject_dn.len(), 3);
    assert!(cert.subject_dn.to_rfc4514_string().contains('+'));

    assert_eq!(canonical_subject(&cert)?, "cn=host,o=acme,ou=ops");
    assert_eq!(canonical_issuer(&cert)?, "cn=issuer ca,o=acme");
    Ok(())
}

#[test]
fn test_canonical_subject_matches_flat_dn_text() -> Result<(), x509kit::Error> {
    let der = certificate_with_subject("CN=Host+OU=Ops,O=Acme");
    let cert = X509Kit::certificate().parse_der(&der)?;

    assert_eq!(
        canonical_subject(&cert)?,
        X509Kit::dn().normalize("OU=ops, O=ACME, CN=host")?
    );
    Ok(())
}

#[test]
fn test_plus_inside_a_value_is_kept() -> Result<(), x509kit::Error> {
    let der = certificate_with_subject("CN=a\\+b,O=Acme");
    let cert = X509Kit::certificate().parse_der(&der)?;

    assert_eq!(cert.subject_dn.get("CN"), Some("a+b"));
    assert_eq!(canonical_subject(&cert)?, "cn=a+b,o=acme");
    Ok(())
}

#[test]
fn test_comma_inside_a_value_is_rejected() {
    let der = certificate_with_subject("O=Acme\\, Inc.,CN=host");
    let cert = X509Kit::certificate()
        .parse_der(&der)
        .expect("certificate should parse");

    let err = canonical_subject(&cert).expect_err("comma cannot be carried by the canonical form");
    assert!(err.is_malformed_dn());
    assert!(err.reason().contains("','"));
}
