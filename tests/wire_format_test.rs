//! Wire format of the ABI records
//!
//! Verifies the JSON shapes the core expects:
//! 1. Every sum-type constructor writes exactly its documented `type` tag
//! 2. Unset optional fields are omitted, never written as null
//! 3. Populated records survive a serialize/parse round trip

use abi_model::abi::*;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn keys() -> KeyPair {
    KeyPair::new(
        "134c67910aa0bd4410e0b62379d517af13df99ba04764bca06e0ba86c736b80a",
        "ddf87be7c470ea26811e5ef86391cb97d79afb35098753c2f990c2b0aef5223d",
    )
}

fn tag_of(value: &Value) -> &str {
    value["type"].as_str().expect("record has a type tag")
}

#[test]
fn test_signer_tags() {
    let cases = [
        (Signer::none(), "None"),
        (Signer::external("pk"), "External"),
        (Signer::keys(keys()), "Keys"),
        (Signer::signing_box(SigningBoxHandle(7)), "SigningBox"),
    ];

    for (signer, expected) in cases {
        let value = serde_json::to_value(&signer).unwrap();
        assert_eq!(tag_of(&value), expected);
        assert_eq!(signer.tag(), expected);
    }
}

#[test]
fn test_signer_keys_shape() {
    let value = serde_json::to_value(Signer::keys(keys())).unwrap();

    assert_eq!(
        value,
        json!({
            "type": "Keys",
            "keys": {
                "public": "134c67910aa0bd4410e0b62379d517af13df99ba04764bca06e0ba86c736b80a",
                "secret": "ddf87be7c470ea26811e5ef86391cb97d79afb35098753c2f990c2b0aef5223d"
            }
        })
    );
    assert_eq!(value.as_object().unwrap().len(), 2);
}

#[test]
fn test_signer_other_shapes() {
    assert_eq!(
        serde_json::to_value(Signer::none()).unwrap(),
        json!({"type": "None"})
    );
    assert_eq!(
        serde_json::to_value(Signer::external("abcd")).unwrap(),
        json!({"type": "External", "public_key": "abcd"})
    );
    assert_eq!(
        serde_json::to_value(Signer::signing_box(SigningBoxHandle(7))).unwrap(),
        json!({"type": "SigningBox", "handle": 7})
    );
}

#[test]
fn test_abi_json_shape() {
    let text = r#"{"ABI version":2,"functions":[]}"#;
    let value = serde_json::to_value(Abi::json(text)).unwrap();
    assert_eq!(value, json!({"type": "Json", "value": text}));
}

#[test]
fn test_abi_tags() {
    let contract = AbiContract {
        abi_version: Some(2),
        ..Default::default()
    };
    let cases = [
        (Abi::contract(contract.clone()), "Contract"),
        (Abi::json("{}"), "Json"),
        (Abi::handle(AbiHandle(1)), "Handle"),
        (Abi::serialized(contract), "Serialized"),
    ];

    for (abi, expected) in cases {
        let value = serde_json::to_value(&abi).unwrap();
        assert_eq!(tag_of(&value), expected);
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}

#[test]
fn test_state_init_and_message_source_tags() {
    let params = ParamsOfEncodeMessage::new(Abi::handle(AbiHandle(1)), Signer::none());
    let sources = [
        (
            StateInitSource::message(MessageSource::encoded("te6cc", None)),
            "Message",
        ),
        (StateInitSource::state_init("code", "data", None), "StateInit"),
        (StateInitSource::tvc("tvc", None, None), "Tvc"),
    ];
    for (source, expected) in sources {
        let value = serde_json::to_value(&source).unwrap();
        assert_eq!(tag_of(&value), expected);
        assert_eq!(source.tag(), expected);
    }

    let messages = [
        (MessageSource::encoded("te6cc", None), "Encoded"),
        (MessageSource::encoding_params(params), "EncodingParams"),
    ];
    for (source, expected) in messages {
        let value = serde_json::to_value(&source).unwrap();
        assert_eq!(tag_of(&value), expected);
        assert_eq!(source.tag(), expected);
    }
}

#[test]
fn test_encode_message_omits_unset_fields() {
    let params = ParamsOfEncodeMessage::new(Abi::handle(AbiHandle(4)), Signer::external("pk"))
        .with_address("0:8a6bc2d0b7e8a1b5d1ec0f3b3c0c0a19e2a1d6a3bd1a8ec1d8cd2b0d45b6b7d3")
        .with_call_set(CallSet::new("getCounter"));

    assert_eq!(
        serde_json::to_value(&params).unwrap(),
        json!({
            "abi": {"type": "Handle", "value": 4},
            "address": "0:8a6bc2d0b7e8a1b5d1ec0f3b3c0c0a19e2a1d6a3bd1a8ec1d8cd2b0d45b6b7d3",
            "call_set": {"function_name": "getCounter"},
            "signer": {"type": "External", "public_key": "pk"}
        })
    );
}

#[test]
fn test_deploy_message_round_trip() {
    let params = ParamsOfEncodeMessage::new(Abi::json("{}"), Signer::keys(keys()))
        .with_deploy_set(
            DeploySet::new("te6ccgECFgEAA")
                .with_workchain(-1)
                .with_initial_data(json!({"owner": "0x01"}))
                .with_initial_pubkey("aa"),
        )
        .with_call_set(
            CallSet::new("constructor")
                .with_header(FunctionHeader {
                    expire: Some(1_700_000_060),
                    time: Some(1_700_000_000_000),
                    pubkey: None,
                })
                .with_input(json!({"limits": [1, 2, 3]})),
        )
        .with_try_index(2);

    let wire = serde_json::to_string(&params).unwrap();
    let parsed: ParamsOfEncodeMessage = serde_json::from_str(&wire).unwrap();
    assert_eq!(parsed, params);

    // serializing the parsed value again gives the same bytes
    assert_eq!(serde_json::to_string(&parsed).unwrap(), wire);
}

#[test]
fn test_encode_account_round_trip_with_large_numbers() {
    let init_params = StateInitParams {
        abi: Abi::json("{}"),
        value: json!({"m_owner": "0x1"}),
    };
    let params = ParamsOfEncodeAccount {
        balance: Some(LargeUint::parse("340282366920938463463374607431768211456").unwrap()),
        last_trans_lt: Some(LargeUint::parse("0x1000000000000000").unwrap()),
        last_paid: Some(1_700_000_000),
        boc_cache: Some(BocCacheType::pinned("account")),
        ..ParamsOfEncodeAccount::new(StateInitSource::tvc(
            "te6ccgEC",
            Some("aa".to_string()),
            Some(init_params),
        ))
    };

    let value = serde_json::to_value(&params).unwrap();
    assert_eq!(value["balance"], json!("340282366920938463463374607431768211456"));
    assert_eq!(value["last_trans_lt"], json!("1152921504606846976"));
    assert_eq!(value["boc_cache"], json!({"type": "Pinned", "pin": "account"}));

    let parsed: ParamsOfEncodeAccount = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, params);
}

#[test]
fn test_state_init_from_encoding_params_round_trip() {
    let inner = ParamsOfEncodeMessage::new(Abi::json("{}"), Signer::none())
        .with_deploy_set(DeploySet::new("te6cc"))
        .with_call_set(CallSet::new("constructor").with_input(json!({})));
    let params = ParamsOfEncodeAccount::new(StateInitSource::message(
        MessageSource::encoding_params(inner),
    ));

    let value = serde_json::to_value(&params).unwrap();
    assert_eq!(
        value,
        json!({
            "state_init": {
                "type": "Message",
                "source": {
                    "type": "EncodingParams",
                    "abi": {"type": "Json", "value": "{}"},
                    "deploy_set": {"tvc": "te6cc", "workchain_id": 0},
                    "call_set": {"function_name": "constructor", "input": {}},
                    "signer": {"type": "None"}
                }
            }
        })
    );

    let parsed: ParamsOfEncodeAccount = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, params);
}

#[test]
fn test_contract_abi_round_trip() {
    let contract = AbiContract {
        abi_version: Some(2),
        version: Some("2.3".to_string()),
        header: vec!["time".to_string(), "expire".to_string()],
        functions: vec![AbiFunction {
            name: "submit".to_string(),
            inputs: vec![AbiParam::tuple(
                "order",
                vec![AbiParam::new("price", "uint128"), AbiParam::new("qty", "uint64")],
            )],
            outputs: vec![AbiParam::new("id", "uint64")],
            id: Some(FunctionId::from(0x0bad_cafe)),
        }],
        events: vec![AbiEvent {
            name: "Submitted".to_string(),
            inputs: vec![AbiParam::new("id", "uint64")],
            id: None,
        }],
        data: vec![AbiData {
            key: LargeUint::from(1u64),
            name: "owner".to_string(),
            param_type: "uint256".to_string(),
            components: vec![],
        }],
    };

    let value = serde_json::to_value(Abi::contract(contract.clone())).unwrap();
    assert_eq!(value["value"]["ABI version"], json!(2));
    assert_eq!(value["value"]["functions"][0]["id"], json!("0xbadcafe"));

    let parsed: Abi = serde_json::from_value(value).unwrap();
    assert_eq!(parsed.as_contract(), Some(&contract));
}

#[test]
fn test_unknown_tag_rejected() {
    assert!(serde_json::from_value::<Signer>(json!({"type": "Ledger"})).is_err());
    assert!(serde_json::from_value::<Abi>(json!({"type": "Yaml", "value": ""})).is_err());
    assert!(serde_json::from_value::<StateInitSource>(json!({"code": "", "data": ""})).is_err());
}

#[test]
fn test_decoded_body_without_value() {
    let decoded: DecodedMessageBody =
        serde_json::from_value(json!({"body_type": "Event", "name": "Ping"})).unwrap();

    assert_eq!(decoded.body_type, MessageBodyType::Event);
    assert!(decoded.value.is_none());
    assert_eq!(
        serde_json::to_value(&decoded).unwrap(),
        json!({"body_type": "Event", "name": "Ping"})
    );
}
