//! Domain operations façade for CentralNic (RRPproxy)
//!
//! Each lifecycle operation is a thin protocol mapping over the API client:
//! translate the platform's domain/contact model into the registrar's flat
//! parameter namespace, issue one command (two when a contact submission
//! comes first), and interpret the envelope.
//!
//! Contacts are upserted: RRPproxy has no separate update command, so every
//! operation that needs a contact re-submits the full contact and receives a
//! (possibly new) id. Nothing is cached between calls.

use crate::api::{self, CentralNicApi, Envelope};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use registrar_core::traits::HttpTransport;
use registrar_core::{
    AdapterDescriptor, Contact, Domain, Error, FieldKind, FormField, RegistrarAdapter, Result,
};
use serde_json::Value;
use std::sync::Arc;

/// CentralNic (RRPproxy) registrar adapter
#[derive(Debug)]
pub struct CentralNicAdapter {
    api: CentralNicApi,
}

impl CentralNicAdapter {
    /// Create a new adapter
    ///
    /// # Errors
    ///
    /// `Error::Config` when either credential is empty; construction fails
    /// before any operation can start.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        sandbox: bool,
        transport: Arc<dyn HttpTransport>,
    ) -> Result<Self> {
        let username = username.into();
        let password = password.into();

        if username.is_empty() {
            return Err(Error::config(
                "The CentralNic registrar is not fully configured: missing API username",
            ));
        }
        if password.is_empty() {
            return Err(Error::config(
                "The CentralNic registrar is not fully configured: missing API password",
            ));
        }

        Ok(Self {
            api: CentralNicApi::new(username, password, sandbox, transport),
        })
    }

    /// Submit the domain's contact and return the registrar-assigned id
    ///
    /// RRPproxy rejects an empty state, so an absent state is sent as the
    /// "NA" sentinel. The returned id is not cached; callers re-submit on
    /// every operation that needs one.
    async fn upsert_contact(&self, contact: &Contact) -> Result<Option<String>> {
        let state = contact
            .state
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("NA");

        let params = vec![
            ("firstname", contact.first_name.clone()),
            ("lastname", contact.last_name.clone()),
            ("street0", contact.address1.clone()),
            ("city", contact.city.clone()),
            ("zip", contact.zip.clone()),
            ("state", state.to_string()),
            ("country", contact.country.clone()),
            ("email", contact.email.clone()),
            ("phone", contact.phone()),
            ("type", "person".to_string()),
        ];

        let res = self.api.call("AddContact", params).await?;
        Ok(contact_id(res.get("contact")))
    }

    /// The domain's contact, required before any operation that submits one
    fn registrant(domain: &Domain) -> Result<&Contact> {
        domain
            .contact
            .as_ref()
            .ok_or_else(|| Error::invalid_input(format!("domain {} has no contact", domain.name)))
    }
}

#[async_trait]
impl RegistrarAdapter for CentralNicAdapter {
    async fn is_domain_available(&self, domain: &Domain) -> Result<bool> {
        let res = self
            .api
            .call("CheckDomain", vec![("domain", domain.name.clone())])
            .await?;

        // `status` is keyed by domain name for this command
        let available = res
            .get("status")
            .and_then(|status| status.get(&domain.name))
            .and_then(Value::as_str)
            == Some("available");
        Ok(available)
    }

    async fn can_be_transferred(&self, domain: &Domain) -> Result<bool> {
        let res = self
            .api
            .call("CheckDomainTransfer", vec![("domain", domain.name.clone())])
            .await?;

        // unlike CheckDomain, `status` is a bare string here
        Ok(res.get("status").and_then(Value::as_str) == Some("transferable"))
    }

    async fn register_domain(&self, domain: &Domain) -> Result<bool> {
        let contact = Self::registrant(domain)?;
        let contact_id = self.upsert_contact(contact).await?.unwrap_or_default();

        let mut params = vec![
            ("domain", domain.name.clone()),
            ("period", format!("{}Y", domain.registration_period)),
            ("ownercontact0", contact_id.clone()),
            ("admincontact0", contact_id.clone()),
            ("techcontact0", contact_id.clone()),
            ("billingcontact0", contact_id),
        ];

        // Non-empty nameservers are re-indexed 0..k-1 by their position in
        // the filtered sequence. ModifyDomain keeps original slot indices
        // instead; the two commands are intentionally different.
        for (i, ns) in domain.nameservers_present().enumerate() {
            params.push((nameserver_key(i), ns.to_string()));
        }

        let res = self.api.call("AddDomain", params).await?;
        Ok(envelope_ok(&res))
    }

    async fn renew_domain(&self, domain: &Domain) -> Result<bool> {
        let res = self
            .api
            .call(
                "RenewDomain",
                vec![
                    ("domain", domain.name.clone()),
                    ("period", format!("{}Y", domain.renewal_period)),
                ],
            )
            .await?;
        Ok(envelope_ok(&res))
    }

    async fn modify_ns(&self, domain: &Domain) -> Result<bool> {
        let mut params = vec![("domain", domain.name.clone())];

        // Sparse by original slot index: only non-empty slots are emitted,
        // keeping their 0..=3 position, so gaps can appear.
        for slot in 0..registrar_core::NAMESERVER_SLOTS {
            if let Some(ns) = domain.nameserver(slot) {
                params.push((nameserver_key(slot), ns.to_string()));
            }
        }

        let res = self.api.call("ModifyDomain", params).await?;
        Ok(envelope_ok(&res))
    }

    async fn modify_contact(&self, domain: &Domain) -> Result<bool> {
        let contact = Self::registrant(domain)?;
        let contact_id = self.upsert_contact(contact).await?.unwrap_or_default();

        let res = self
            .api
            .call(
                "ModifyDomain",
                vec![
                    ("domain", domain.name.clone()),
                    ("ownercontact0", contact_id.clone()),
                    ("admincontact0", contact_id.clone()),
                    ("techcontact0", contact_id.clone()),
                    ("billingcontact0", contact_id),
                ],
            )
            .await?;
        Ok(envelope_ok(&res))
    }

    async fn domain_details(&self, domain: &mut Domain) -> Result<()> {
        let res = self
            .api
            .call("StatusDomain", vec![("domain", domain.name.clone())])
            .await?;

        if let Some(raw) = res.get("expiration").and_then(Value::as_str) {
            match parse_expiration(raw) {
                Some(timestamp) => domain.expiration_time = Some(timestamp),
                None => tracing::warn!(
                    domain = %domain.name,
                    expiration = raw,
                    "unparseable expiration date in StatusDomain response"
                ),
            }
        }

        Ok(())
    }

    async fn transfer_domain(&self, domain: &Domain) -> Result<bool> {
        let contact = Self::registrant(domain)?;
        let contact_id = self.upsert_contact(contact).await?.unwrap_or_default();

        let res = self
            .api
            .call(
                "TransferDomain",
                vec![
                    ("domain", domain.name.clone()),
                    ("auth", domain.epp_code.clone().unwrap_or_default()),
                    ("ownercontact0", contact_id),
                ],
            )
            .await?;
        Ok(envelope_ok(&res))
    }

    async fn auth_code(&self, domain: &Domain) -> Result<Option<String>> {
        let res = self
            .api
            .call("GetAuthCodeDomain", vec![("domain", domain.name.clone())])
            .await?;
        Ok(res
            .get("authcode")
            .and_then(Value::as_str)
            .map(str::to_string))
    }

    async fn lock(&self, domain: &Domain) -> Result<bool> {
        let res = self
            .api
            .call(
                "SetDomainLock",
                vec![("domain", domain.name.clone()), ("lock", "1".to_string())],
            )
            .await?;
        Ok(envelope_ok(&res))
    }

    async fn unlock(&self, domain: &Domain) -> Result<bool> {
        let res = self
            .api
            .call(
                "SetDomainLock",
                vec![("domain", domain.name.clone()), ("lock", "0".to_string())],
            )
            .await?;
        Ok(envelope_ok(&res))
    }

    async fn enable_privacy_protection(&self, domain: &Domain) -> Result<bool> {
        let res = self
            .api
            .call(
                "ModifyDomain",
                vec![
                    ("domain", domain.name.clone()),
                    ("idprotection", "1".to_string()),
                ],
            )
            .await?;
        Ok(envelope_ok(&res))
    }

    async fn disable_privacy_protection(&self, domain: &Domain) -> Result<bool> {
        let res = self
            .api
            .call(
                "ModifyDomain",
                vec![
                    ("domain", domain.name.clone()),
                    ("idprotection", "0".to_string()),
                ],
            )
            .await?;
        Ok(envelope_ok(&res))
    }

    async fn delete_domain(&self, _domain: &Domain) -> Result<bool> {
        // No network call is issued; the registrar has no delete command.
        Err(Error::unsupported(
            "CentralNic does not support registrar-side domain deletion",
        ))
    }

    fn adapter_name(&self) -> &'static str {
        "centralnic"
    }

    fn descriptor(&self) -> AdapterDescriptor {
        AdapterDescriptor {
            label: "CentralNic (RRPproxy)",
            form: vec![
                FormField {
                    name: "username",
                    kind: FieldKind::Text,
                    label: "CentralNic Username",
                    description: "Your RRPproxy account username",
                },
                FormField {
                    name: "password",
                    kind: FieldKind::Password,
                    label: "CentralNic Password",
                    description: "Your RRPproxy account password",
                },
                FormField {
                    name: "sandbox",
                    kind: FieldKind::Checkbox,
                    label: "Use Sandbox Environment",
                    description: "Enable the OT&E (testing) system",
                },
            ],
        }
    }
}

/// Envelope check mirroring the success condition `call` already enforced;
/// kept so boolean operations read as the contract they implement
fn envelope_ok(envelope: &Envelope) -> bool {
    api::code_is_success(envelope.get("code"))
}

fn nameserver_key(index: usize) -> &'static str {
    // Slot count is fixed at four; register re-indexing also stays below it.
    match index {
        0 => "nameserver0",
        1 => "nameserver1",
        2 => "nameserver2",
        _ => "nameserver3",
    }
}

/// Normalize the upserted contact id, which arrives as a string or a number
fn contact_id(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Parse a registrar expiration date into epoch seconds
///
/// Accepts `%Y-%m-%d %H:%M:%S`, RFC 3339, and a bare `%Y-%m-%d` (taken as
/// UTC midnight).
fn parse_expiration(raw: &str) -> Option<i64> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc().timestamp());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp());
    }
    None
}
