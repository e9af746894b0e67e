use plaid_api::types::{AccountsResponse, ApiError, EmailType, PhoneNumberType};
use rust_decimal::Decimal;
use serde_json::Value;

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[test]
fn deserialize_accounts_full() {
    let json = load_fixture("accounts.json");
    let resp: AccountsResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.accounts.len(), 2);
    assert_eq!(resp.request_id, "qk5Bxes3gDfv4F2");

    let checking = &resp.accounts[0];
    assert_eq!(checking.account_id, "BxBXxLj1m4HMXBm9WZZmCWVbPjX16EHwv99vp");
    assert_eq!(checking.account_type, "depository");
    assert_eq!(checking.subtype.as_deref(), Some("checking"));
    assert_eq!(checking.mask.as_deref(), Some("0000"));
    assert_eq!(checking.balances.available, Some(Decimal::new(100, 0)));
    assert_eq!(checking.balances.current, Some(Decimal::new(11094, 2)));
    assert_eq!(checking.balances.limit, None);
    assert_eq!(checking.balances.currency(), Some("USD"));
    assert!(checking.owners.is_none());
    assert!(checking.owners().is_empty());

    let credit = &resp.accounts[1];
    assert_eq!(credit.balances.available, None);
    assert_eq!(credit.balances.limit, Some(Decimal::new(2000, 0)));

    assert_eq!(resp.item.institution_id.as_deref(), Some("ins_3"));
    assert_eq!(resp.item.billed_products.len(), 4);
    assert!(resp.item.error.is_none());
    assert!(resp.item.consented_products.is_empty());
}

#[test]
fn deserialize_accounts_minimal_defaults_optional_fields() {
    let json = load_fixture("accounts_minimal.json");
    let resp: AccountsResponse = serde_json::from_str(&json).unwrap();
    assert!(resp.accounts.is_empty());
    assert_eq!(resp.request_id, "req1");
    assert!(resp.item.institution_id.is_none());
    assert!(resp.item.webhook.is_none());
    assert!(resp.item.available_products.is_empty());
}

#[test]
fn deserialize_owners() {
    let json = load_fixture("balance_with_owners.json");
    let resp: AccountsResponse = serde_json::from_str(&json).unwrap();
    let account = &resp.accounts[0];
    assert!(account.official_name.is_none());
    assert!(account.balances.last_updated_datetime.is_some());

    let owners = account.owners();
    assert_eq!(owners.len(), 1);
    let owner = &owners[0];
    assert_eq!(owner.names, vec!["Alberta Bobbeth Charleson"]);
    assert_eq!(owner.addresses.len(), 2);
    assert_eq!(
        owner.primary_address().map(|a| a.data.street.as_str()),
        Some("2992 Cameron Road")
    );
    assert_eq!(owner.addresses[1].data.postal_code.as_deref(), Some("93405-2255"));
    assert_eq!(owner.emails[0].email_type, Some(EmailType::Primary));
    assert_eq!(owner.emails[1].email_type, Some(EmailType::Other));
    assert_eq!(owner.phone_numbers[1].phone_type, Some(PhoneNumberType::Mobile1));
    assert!(owner.primary_phone_number().is_none());
}

#[test]
fn deserialize_api_error() {
    let json = load_fixture("error_invalid_token.json");
    let err: ApiError = serde_json::from_str(&json).unwrap();
    assert_eq!(err.error_type, "INVALID_INPUT");
    assert_eq!(err.error_code, "INVALID_ACCESS_TOKEN");
    assert_eq!(err.request_id.as_deref(), Some("m8MDnv9okwxFNBV"));
    assert!(err.suggested_action.is_none());
    assert!(err.extra.is_empty());
}

/// Drops `null` members and empty arrays (both decode to "absent") and turns
/// every number into a fixed-precision string so `100` and `100.0` compare equal.
fn normalize(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.iter()
                .filter(|(_, v)| !is_absent(v))
                .map(|(k, v)| (k.clone(), normalize(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Value::Number(n) => Value::String(format!("{:.6}", n.as_f64().unwrap())),
        other => other.clone(),
    }
}

fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

#[test]
fn reencoding_preserves_present_fields() {
    for fixture in [
        "accounts.json",
        "accounts_minimal.json",
        "balance_with_owners.json",
        "identity_unknown_types.json",
    ] {
        let json = load_fixture(fixture);
        let original: Value = serde_json::from_str(&json).unwrap();
        let decoded: AccountsResponse = serde_json::from_str(&json).unwrap();
        let reencoded = serde_json::to_value(&decoded).unwrap();
        assert_eq!(normalize(&original), normalize(&reencoded), "{fixture}");
    }
}

#[test]
fn unknown_contact_type_survives_reencoding() {
    let json = load_fixture("identity_unknown_types.json");
    let decoded: AccountsResponse = serde_json::from_str(&json).unwrap();
    let owner = &decoded.accounts[0].owners()[0];
    assert_eq!(
        owner.phone_numbers[0].phone_type,
        Some(PhoneNumberType::Unknown("pager".to_string()))
    );
    assert_eq!(
        owner.emails[0].email_type,
        Some(EmailType::Unknown("work".to_string()))
    );

    let reencoded = serde_json::to_value(&decoded).unwrap();
    let phones = &reencoded["accounts"][0]["owners"][0]["phone_numbers"];
    assert_eq!(phones[0]["type"], "pager");
    assert_eq!(phones[1]["type"], "mobile");
    assert_eq!(reencoded["accounts"][0]["owners"][0]["emails"][0]["type"], "work");
}

#[test]
fn deserialize_malformed_json_returns_error() {
    let bad_json = r#"{"accounts": not valid json}"#;
    let result = serde_json::from_str::<AccountsResponse>(bad_json);
    assert!(result.is_err());
}

#[test]
fn deserialize_missing_required_fields_returns_error() {
    let json = r#"{"accounts": [], "request_id": "r"}"#;
    let result = serde_json::from_str::<AccountsResponse>(json);
    assert!(result.is_err());
}
