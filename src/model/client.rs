//! Client account profile

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountType {
    Free,
    Pro,
    Enterprise,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AccountType::Free => "Free",
            AccountType::Pro => "Pro",
            AccountType::Enterprise => "Enterprise",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pincode: String,
}

impl Address {
    /// Single-line form used by the profile screen
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {}, {} - {}",
            self.street, self.city, self.state, self.country, self.pincode
        )
    }
}

/// Profile fields the client may change, in editor order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    Email,
    Phone,
    Company,
    Street,
    City,
    State,
    Pincode,
    Country,
    Gstin,
    Pan,
}

impl ProfileField {
    pub const ALL: [ProfileField; 11] = [
        ProfileField::Name,
        ProfileField::Email,
        ProfileField::Phone,
        ProfileField::Company,
        ProfileField::Street,
        ProfileField::City,
        ProfileField::State,
        ProfileField::Pincode,
        ProfileField::Country,
        ProfileField::Gstin,
        ProfileField::Pan,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Name => "Full Name",
            ProfileField::Email => "Email Address",
            ProfileField::Phone => "Phone Number",
            ProfileField::Company => "Company Name",
            ProfileField::Street => "Address",
            ProfileField::City => "City",
            ProfileField::State => "State",
            ProfileField::Pincode => "Pincode",
            ProfileField::Country => "Country",
            ProfileField::Gstin => "GSTIN",
            ProfileField::Pan => "PAN",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClientInfo {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub registration_date: String,
    pub account_type: AccountType,
    pub api_keys_count: usize,
    pub total_api_calls: u64,
    pub wallet_balance: f64,
    pub address: Address,
    pub gstin: Option<String>,
    pub pan: Option<String>,
}

impl ClientInfo {
    /// Label/value pairs in display order. Missing tax ids render as "N/A".
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Client ID", self.id.clone()),
            ("Name", self.name.clone()),
            ("Email", self.email.clone()),
            ("Phone", self.phone.clone()),
            ("Company", self.company.clone()),
            ("Registered", self.registration_date.clone()),
            ("Account Type", self.account_type.to_string()),
            ("API Keys", self.api_keys_count.to_string()),
            ("Total API Calls", self.total_api_calls.to_string()),
            ("Wallet Balance", format!("${:.2}", self.wallet_balance)),
            ("Address", self.address.one_line()),
            ("GSTIN", self.gstin.clone().unwrap_or_else(|| "N/A".to_string())),
            ("PAN", self.pan.clone().unwrap_or_else(|| "N/A".to_string())),
        ]
    }

    /// Current text of an editable field. Missing tax ids are empty.
    pub fn profile_value(&self, field: ProfileField) -> String {
        match field {
            ProfileField::Name => self.name.clone(),
            ProfileField::Email => self.email.clone(),
            ProfileField::Phone => self.phone.clone(),
            ProfileField::Company => self.company.clone(),
            ProfileField::Street => self.address.street.clone(),
            ProfileField::City => self.address.city.clone(),
            ProfileField::State => self.address.state.clone(),
            ProfileField::Pincode => self.address.pincode.clone(),
            ProfileField::Country => self.address.country.clone(),
            ProfileField::Gstin => self.gstin.clone().unwrap_or_default(),
            ProfileField::Pan => self.pan.clone().unwrap_or_default(),
        }
    }

    /// Editable values in `ProfileField::ALL` order
    pub fn profile_values(&self) -> Vec<String> {
        ProfileField::ALL
            .iter()
            .map(|f| self.profile_value(*f))
            .collect()
    }

    /// Overwrite one field. A blank tax id clears it.
    pub fn set_profile_value(&mut self, field: ProfileField, value: &str) {
        let value = value.trim().to_string();
        let optional = |v: String| (!v.is_empty()).then_some(v);
        match field {
            ProfileField::Name => self.name = value,
            ProfileField::Email => self.email = value,
            ProfileField::Phone => self.phone = value,
            ProfileField::Company => self.company = value,
            ProfileField::Street => self.address.street = value,
            ProfileField::City => self.address.city = value,
            ProfileField::State => self.address.state = value,
            ProfileField::Pincode => self.address.pincode = value,
            ProfileField::Country => self.address.country = value,
            ProfileField::Gstin => self.gstin = optional(value),
            ProfileField::Pan => self.pan = optional(value),
        }
    }

    /// Apply a full set of edited values, paired with `ProfileField::ALL`
    pub fn apply_profile(&mut self, values: &[String]) {
        for (field, value) in ProfileField::ALL.iter().zip(values) {
            self.set_profile_value(*field, value);
        }
    }
}

/// The signed-in client
pub fn sample_client() -> ClientInfo {
    ClientInfo {
        id: "1".to_string(),
        name: "Jane Doe".to_string(),
        email: "jane.doe@example.com".to_string(),
        phone: "+91 98765 43210".to_string(),
        company: "Tech Solutions Pvt Ltd".to_string(),
        registration_date: "2024-01-15".to_string(),
        account_type: AccountType::Pro,
        api_keys_count: 3,
        total_api_calls: 45230,
        wallet_balance: super::payment::CURRENT_BALANCE,
        address: Address {
            street: "123 Business Park, Sector 5".to_string(),
            city: "New Delhi".to_string(),
            state: "Delhi".to_string(),
            country: "India".to_string(),
            pincode: "110001".to_string(),
        },
        gstin: Some("07AABCU9603R1ZM".to_string()),
        pan: Some("AABCU9603R".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_format_balance_and_address() {
        let fields = sample_client().fields();
        let lookup = |label: &str| {
            fields
                .iter()
                .find(|(l, _)| *l == label)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(lookup("Wallet Balance"), "$98.50");
        assert_eq!(lookup("Account Type"), "Pro");
        assert_eq!(
            lookup("Address"),
            "123 Business Park, Sector 5, New Delhi, Delhi, India - 110001"
        );
    }

    #[test]
    fn test_profile_values_follow_field_order() {
        let client = sample_client();
        let values = client.profile_values();
        assert_eq!(values.len(), ProfileField::ALL.len());
        assert_eq!(values[0], "Jane Doe");
        assert_eq!(values[4], "123 Business Park, Sector 5");
        assert_eq!(values[10], "AABCU9603R");
    }

    #[test]
    fn test_apply_profile_updates_fields() {
        let mut client = sample_client();
        let mut values = client.profile_values();
        values[0] = "  Jane Smith ".to_string();
        values[5] = "Gurugram".to_string();
        values[9] = String::new();
        client.apply_profile(&values);

        assert_eq!(client.name, "Jane Smith");
        assert_eq!(client.address.city, "Gurugram");
        assert_eq!(client.gstin, None);
        assert_eq!(client.pan.as_deref(), Some("AABCU9603R"));
        // Fields outside the editor are untouched
        assert_eq!(client.account_type, AccountType::Pro);
    }

    #[test]
    fn test_missing_tax_ids() {
        let mut client = sample_client();
        client.gstin = None;
        client.pan = None;
        let fields = client.fields();
        assert!(fields.contains(&("GSTIN", "N/A".to_string())));
        assert!(fields.contains(&("PAN", "N/A".to_string())));
    }
}
