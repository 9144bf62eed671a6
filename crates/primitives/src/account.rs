//! Customer accounts

use crate::options::ACCOUNT_MANAGERS;
use serde::{Deserialize, Serialize};
use wewin_core::{FieldSpec, Record, RecordKey, RecordKind, Schema};

/// A customer account with its internal manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    /// Row key
    pub key: RecordKey,
    /// Customer name
    pub account_name: String,
    /// Manager from [`ACCOUNT_MANAGERS`]
    pub internal_account_manager: String,
    /// Contact email
    pub account_email: String,
    /// Contact phone
    pub account_phone: String,
}

static ACCOUNT_SCHEMA: Schema = Schema {
    name: "account",
    fields: &[
        FieldSpec::text("accountName", "Account Name").required("Please input account name!"),
        FieldSpec::select("internalAccountManager", "Account Manager", ACCOUNT_MANAGERS)
            .required("Please select account manager!"),
        FieldSpec::email("accountEmail", "Account Email")
            .required("Please input account email!")
            .invalid("Please enter a valid email!"),
        FieldSpec::phone("accountPhone", "Account Phone").required("Please input account phone!"),
    ],
};

impl Record for Account {
    const KIND: RecordKind = RecordKind::Account;

    fn key(&self) -> &RecordKey {
        &self.key
    }

    fn schema() -> &'static Schema {
        &ACCOUNT_SCHEMA
    }
}

fn account(key: &str, name: &str, manager: &str, email: &str, phone: &str) -> Account {
    Account {
        key: RecordKey::new(key),
        account_name: name.to_string(),
        internal_account_manager: manager.to_string(),
        account_email: email.to_string(),
        account_phone: phone.to_string(),
    }
}

/// Seed rows for the accounts screen
pub fn sample_accounts() -> Vec<Account> {
    vec![
        account("1", "Rajesh sharma", "Aarav Guar", "sharma.rajesh@yahoo.com", "94085 72135"),
        account("2", "Atul Trajan", "Aarav Guar", "atulsharma001@gmail.com", "78452 98562"),
        account("3", "Farhan Ansari", "Aarav Guar", "ansari007faran@gmail.com", "62584 21456"),
        account("4", "Harsh Jain", "Guari Khan", "jainharsh1981@gmail.com", "90004 45269"),
        account("5", "Gopal krishna Ayer", "Ramesh Yadav", "gopalayer1909@gmail.com", "70004 54698"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use wewin_core::FieldSet;

    #[test]
    fn test_samples_are_valid() {
        for a in sample_accounts() {
            assert!(Account::schema().validate(&a.to_fields().unwrap()).is_ok(), "{:?}", a);
        }
    }

    #[test]
    fn test_bad_email_message() {
        let fields = sample_accounts()[0]
            .to_fields()
            .unwrap()
            .with("accountEmail", "not-an-email");
        let err = Account::schema().validate(&fields).unwrap_err();
        assert_eq!(
            err.validation_errors().unwrap().message_for("accountEmail"),
            Some("Please enter a valid email!")
        );
    }

    #[test]
    fn test_manager_must_come_from_list() {
        let fields = FieldSet::new()
            .with("accountName", "Acme")
            .with("internalAccountManager", "Nobody")
            .with("accountEmail", "ops@acme.in")
            .with("accountPhone", "1");
        assert!(Account::schema().validate(&fields).is_err());
    }

    #[test]
    fn test_field_names_are_camel_case() {
        let fields = sample_accounts()[3].to_fields().unwrap();
        assert_eq!(fields.get("internalAccountManager"), Some("Guari Khan"));
        assert_eq!(fields.get("accountPhone"), Some("90004 45269"));
        assert_eq!(fields.len(), 4);
    }
}
