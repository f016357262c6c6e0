//! Platform-owned domain and contact value objects
//!
//! These types are owned and mutated by the calling platform. Adapters only
//! read them, with one exception: `Domain::expiration_time` is written by the
//! details lookup.

use serde::{Deserialize, Serialize};

/// Number of nameserver slots a domain carries
pub const NAMESERVER_SLOTS: usize = 4;

/// A domain as seen by the registrar adapters
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Domain {
    /// Fully qualified domain name (e.g. "example.com")
    pub name: String,

    /// Up to four optional nameserver hostnames, by slot position.
    /// An empty string is treated the same as an unset slot.
    #[serde(default)]
    pub nameservers: [Option<String>; NAMESERVER_SLOTS],

    /// Registration period in years
    #[serde(default = "default_period")]
    pub registration_period: u32,

    /// Renewal period in years
    #[serde(default = "default_period")]
    pub renewal_period: u32,

    /// EPP/auth transfer code, when transferring the domain in
    #[serde(default)]
    pub epp_code: Option<String>,

    /// Registrant contact; used for the admin/tech/billing roles as well
    #[serde(default)]
    pub contact: Option<Contact>,

    /// Expiration time as epoch seconds; written only by the details lookup
    #[serde(default)]
    pub expiration_time: Option<i64>,
}

impl Domain {
    /// Create a new domain with one-year registration and renewal periods
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            registration_period: default_period(),
            renewal_period: default_period(),
            ..Self::default()
        }
    }

    /// Set a nameserver slot (0..=3)
    pub fn with_nameserver(mut self, slot: usize, hostname: impl Into<String>) -> Self {
        if slot < NAMESERVER_SLOTS {
            self.nameservers[slot] = Some(hostname.into());
        }
        self
    }

    /// Set all four nameserver slots at once
    pub fn with_nameservers(mut self, nameservers: [Option<String>; NAMESERVER_SLOTS]) -> Self {
        self.nameservers = nameservers;
        self
    }

    /// Set the registration period in years
    pub fn with_registration_period(mut self, years: u32) -> Self {
        self.registration_period = years;
        self
    }

    /// Set the renewal period in years
    pub fn with_renewal_period(mut self, years: u32) -> Self {
        self.renewal_period = years;
        self
    }

    /// Set the EPP/auth transfer code
    pub fn with_epp_code(mut self, code: impl Into<String>) -> Self {
        self.epp_code = Some(code.into());
        self
    }

    /// Set the registrant contact
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contact = Some(contact);
        self
    }

    /// Get the nameserver in a slot, treating empty strings as unset
    pub fn nameserver(&self, slot: usize) -> Option<&str> {
        self.nameservers
            .get(slot)
            .and_then(|ns| ns.as_deref())
            .filter(|ns| !ns.is_empty())
    }

    /// Iterate the non-empty nameservers in slot order
    pub fn nameservers_present(&self) -> impl Iterator<Item = &str> {
        (0..NAMESERVER_SLOTS).filter_map(|slot| self.nameserver(slot))
    }
}

fn default_period() -> u32 {
    1
}

/// A registrar contact (registrant, admin, tech and billing roles)
///
/// The contact has no identity of its own on the platform side; registrars
/// that assign contact ids return them per submission and the adapter never
/// caches them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    /// First address line
    pub address1: String,
    pub city: String,
    pub zip: String,
    /// State or province; registrars that reject an empty state receive a
    /// sentinel value instead
    #[serde(default)]
    pub state: Option<String>,
    pub country: String,
    pub email: String,
    /// Phone country code, without the leading "+"
    pub tel_cc: String,
    /// Local phone number
    pub tel: String,
}

impl Contact {
    /// Full phone number in the `+{cc}.{number}` wire form
    pub fn phone(&self) -> String {
        format!("+{}.{}", self.tel_cc, self.tel)
    }
}
