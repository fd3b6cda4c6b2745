//! End-to-end tests for the action proxy
//!
//! Every test binds a proxy to `testActionName` under `netsh unittest` and
//! checks the rendered command line, the number of executions, and the
//! processed result.

use rnetsh::runner::test_support::{FailingHarness, RecordingHarness};
use rnetsh::{
    ActionError, ActionProxy, Annotated, Arg, BooleanStyle, CommandEnum, CustomProcessor,
    HarnessError, MethodSpec, ParamSpec, ParseError, ProcessorBinding, Record, Response, ToArg,
};

const ACTION: &str = "testActionName";
const PREFIX: &str = "netsh unittest";

#[derive(Debug, PartialEq)]
struct SimpleResponseObject {
    text: String,
}

impl Response for SimpleResponseObject {
    fn from_record(record: &Record) -> Result<Self, ParseError> {
        Ok(Self {
            text: record.text(),
        })
    }
}

#[derive(Debug, PartialEq)]
struct MultiResponseObject {
    name: String,
}

impl Response for MultiResponseObject {
    fn from_record(record: &Record) -> Result<Self, ParseError> {
        Ok(Self {
            name: record.require("Name")?.to_string(),
        })
    }
}

#[derive(strum::AsRefStr, Clone, Copy)]
enum TestEnum {
    Value1,
    Value2,
}

impl CommandEnum for TestEnum {}

#[derive(strum::AsRefStr, Clone, Copy)]
enum DecoratedEnum {
    #[strum(serialize = "value1")]
    Value1,
    #[strum(serialize = "value2")]
    Value2,
}

impl CommandEnum for DecoratedEnum {}

fn custom_single(_raw: &str) -> Result<String, ParseError> {
    Ok("CustomResponseProcessor".to_string())
}

fn custom_multi(_raw: &str) -> Result<Vec<String>, ParseError> {
    Ok(vec!["CustomMultiResponseProcessor".to_string()])
}

fn ten_records(_raw: &str) -> Result<Vec<Record>, ParseError> {
    Ok(vec![Record::default(); 10])
}

fn overridden_single(raw: &str) -> Result<SimpleResponseObject, ParseError> {
    Ok(SimpleResponseObject {
        text: format!("overridden: {raw}"),
    })
}

fn never_single(_raw: &str) -> Result<String, ParseError> {
    Err(ParseError::new("not reached", ""))
}

const SIMPLE_METHOD: MethodSpec<()> = MethodSpec::new("SimpleMethod", &[]);
const SIMPLE_RESPONSE_METHOD: MethodSpec<SimpleResponseObject> =
    MethodSpec::new("SimpleResponseMethod", &[]);
const GENERIC_RESPONSE_METHOD: MethodSpec<Annotated<SimpleResponseObject>> =
    MethodSpec::new("GenericResponseMethod", &[]);
const MULTI_RESPONSE_METHOD: MethodSpec<Vec<MultiResponseObject>> =
    MethodSpec::new("MultiResponseMethod", &[]);
const GENERIC_MULTI_RESPONSE_METHOD: MethodSpec<Vec<Annotated<SimpleResponseObject>>> =
    MethodSpec::new("GenericMultiResponseMethod", &[]);
const METHOD_WITH_NULL: MethodSpec<()> =
    MethodSpec::new("MethodWithNull", &[ParamSpec::new("testInt")]);
const METHOD_WITH_ENUM: MethodSpec<()> =
    MethodSpec::new("MethodWithEnum", &[ParamSpec::new("testEnum")]);
const METHOD_WITH_DECORATED_ENUM: MethodSpec<()> =
    MethodSpec::new("MethodWithDecoratedEnum", &[ParamSpec::new("testEnum")]);
const METHOD_WITH_BOOLEAN_TYPE_YES_NO: MethodSpec<()> = MethodSpec::new(
    "MethodWithBooleanTypeYesNo",
    &[
        ParamSpec::new("testBooleanYesNo").style(BooleanStyle::YesNo),
        ParamSpec::new("testBooleanEnabledDisabled").style(BooleanStyle::EnabledDisabled),
        ParamSpec::new("testBooleanTrueFalse").style(BooleanStyle::TrueFalse),
    ],
);
const METHOD_WITH_NAME_DECORATION: MethodSpec<()> =
    MethodSpec::new("MethodWithNameDecoration", &[]).rename("test");
const METHOD_WITH_PARAMETER_NAME_DECORATION: MethodSpec<()> = MethodSpec::new(
    "MethodWithParameterNameDecoration",
    &[ParamSpec::new("parameter").rename("test")],
);
const METHOD_WITH_CUSTOM_RESPONSE_PROCESSOR: MethodSpec<String> =
    MethodSpec::new("MethodWithCustomResponseProcessor", &[])
        .processor(CustomProcessor::new("CustomResponseProcessor").single(custom_single));
const METHOD_WITH_CUSTOM_MULTI_RESPONSE_PROCESSOR: MethodSpec<Vec<String>> =
    MethodSpec::new("MethodWithCustomMultiResponseProcessor", &[]).processor(
        CustomProcessor::new("CustomMultiResponseProcessor").multi(custom_multi),
    );
const METHOD_WITH_OVERRIDDEN_RESPONSE_PROCESSOR: MethodSpec<SimpleResponseObject> =
    MethodSpec::new("MethodWithOverriddenResponseProcessor", &[]).processor(
        CustomProcessor::new("OverriddenResponseProcessor").single(overridden_single),
    );
const METHOD_WITH_OVERRIDDEN_MULTI_RESPONSE_PROCESSOR: MethodSpec<Vec<Record>> =
    MethodSpec::new("MethodWithOverriddenMultiResponseProcessor", &[])
        .processor(CustomProcessor::new("TenRecordProcessor").multi(ten_records));
const METHOD_WITH_OVERZEALOUS_RESPONSE_PROCESSOR: MethodSpec<String> = MethodSpec::new(
    "MethodWithOverzealousResponseProcessor",
    &[],
)
.processor(
    CustomProcessor::new("OverzealousResponseProcessor")
        .single(custom_single)
        .multi(custom_single),
);
const METHOD_WITH_INVALID_RESPONSE_PROCESSOR: MethodSpec<String> =
    MethodSpec::new("MethodWithInvalidResponseProcessor", &[])
        .processor(CustomProcessor::new("InvalidResponseProcessor"));
const METHOD_WITH_MISMATCHED_RESPONSE_PROCESSOR: MethodSpec<Vec<String>> =
    MethodSpec::new("MethodWithMismatchedResponseProcessor", &[]).processor(
        CustomProcessor::new("SingleOnlyProcessor").single(custom_multi),
    );

fn proxy(harness: &RecordingHarness) -> ActionProxy<&RecordingHarness> {
    ActionProxy::create(ACTION, PREFIX, harness)
}

#[test]
fn test_operates_on_simple_method() {
    let harness = RecordingHarness::new();
    proxy(&harness).invoke(&SIMPLE_METHOD, &[]).unwrap();
    assert_eq!(
        harness.last_command().as_deref(),
        Some("netsh unittest testActionName SimpleMethod")
    );
}

#[test]
fn test_calls_execution_harness_once() {
    let harness = RecordingHarness::new();
    let proxy = ActionProxy::create("test", PREFIX, &harness);
    proxy.invoke(&SIMPLE_METHOD, &[]).unwrap();
    assert_eq!(harness.call_count(), 1);
}

#[test]
fn test_single_response_uses_whole_output() {
    let harness = RecordingHarness::responding("line one\n\nline two\n");
    let response = proxy(&harness)
        .invoke(&SIMPLE_RESPONSE_METHOD, &[])
        .unwrap();
    assert_eq!(response.text, "line one\nline two");
}

#[test]
fn test_single_response_from_empty_output() {
    let harness = RecordingHarness::new();
    let response = proxy(&harness)
        .invoke(&SIMPLE_RESPONSE_METHOD, &[])
        .unwrap();
    assert_eq!(response.text, "");
}

#[test]
fn test_generic_single_response() {
    let harness = RecordingHarness::responding("Name: alpha\nState: on\n");
    let proxy = proxy(&harness);

    assert_eq!(
        proxy.binding(&GENERIC_RESPONSE_METHOD).unwrap(),
        ProcessorBinding::SingleGeneric
    );
    let response = proxy.invoke(&GENERIC_RESPONSE_METHOD, &[]).unwrap();
    assert_eq!(response.value.text, "Name: alpha\nState: on");
    assert_eq!(response.fields.len(), 2);
}

#[test]
fn test_multi_response_in_order() {
    let harness = RecordingHarness::responding("Name: alpha\n\nName: beta\n---\n\nName: gamma\n");
    let proxy = proxy(&harness);

    assert_eq!(
        proxy.binding(&MULTI_RESPONSE_METHOD).unwrap(),
        ProcessorBinding::MultiDefault
    );
    let names: Vec<String> = proxy
        .invoke(&MULTI_RESPONSE_METHOD, &[])
        .unwrap()
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, ["alpha", "beta", "gamma"]);
}

#[test]
fn test_multi_response_from_empty_output() {
    let harness = RecordingHarness::new();
    let response = proxy(&harness).invoke(&MULTI_RESPONSE_METHOD, &[]).unwrap();
    assert!(response.is_empty());
}

#[test]
fn test_generic_multi_response() {
    let harness = RecordingHarness::responding("a: 1\n\nb: 2\n");
    let proxy = proxy(&harness);

    assert_eq!(
        proxy.binding(&GENERIC_MULTI_RESPONSE_METHOD).unwrap(),
        ProcessorBinding::MultiGeneric
    );
    let response = proxy.invoke(&GENERIC_MULTI_RESPONSE_METHOD, &[]).unwrap();
    assert_eq!(response.len(), 2);
    assert_eq!(response[1].value.text, "b: 2");
}

fn ten_rule_blocks() -> String {
    (0..10)
        .map(|i| format!("Name: r{i}\nEnabled: Yes\n----------\n"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_ten_records_of_raw_text_yield_ten_items() {
    let harness = RecordingHarness::responding(ten_rule_blocks());
    let proxy = proxy(&harness);

    let concrete = proxy.invoke(&MULTI_RESPONSE_METHOD, &[]).unwrap();
    assert_eq!(concrete.len(), 10);
    assert_eq!(concrete[0].name, "r0");
    assert_eq!(concrete[9].name, "r9");

    let generic = proxy.invoke(&GENERIC_MULTI_RESPONSE_METHOD, &[]).unwrap();
    assert_eq!(generic.len(), 10);
    assert!(generic[9].fields.contains(&("Name".to_string(), "r9".to_string())));
    assert_eq!(harness.call_count(), 2);
}

#[test]
fn test_parse_failure_returns_no_partial_result() {
    let harness = RecordingHarness::responding("Name: alpha\n\nState: on\n");
    let err = proxy(&harness)
        .invoke(&MULTI_RESPONSE_METHOD, &[])
        .unwrap_err();
    match err {
        ActionError::Parse {
            method, fragment, ..
        } => {
            assert_eq!(method, "MultiResponseMethod");
            assert_eq!(fragment, "State: on");
        }
        other => panic!("Expected parse error, got {other:?}"),
    }
}

#[test]
fn test_supports_null_parameters() {
    let harness = RecordingHarness::new();
    let proxy = proxy(&harness);

    proxy
        .invoke(&METHOD_WITH_NULL, &[None::<i32>.to_arg()])
        .unwrap();
    assert_eq!(
        harness.last_command().as_deref(),
        Some("netsh unittest testActionName MethodWithNull")
    );

    proxy.invoke(&METHOD_WITH_NULL, &[Some(1_i32).to_arg()]).unwrap();
    assert_eq!(
        harness.last_command().as_deref(),
        Some("netsh unittest testActionName MethodWithNull testInt=1")
    );

    proxy
        .invoke(&METHOD_WITH_NULL, &[None::<i32>.to_arg()])
        .unwrap();
    assert_eq!(
        harness.last_command().as_deref(),
        Some("netsh unittest testActionName MethodWithNull")
    );
}

#[test]
fn test_supports_enumeration_parameters() {
    let harness = RecordingHarness::new();
    let proxy = proxy(&harness);

    proxy
        .invoke(&METHOD_WITH_ENUM, &[TestEnum::Value1.to_arg()])
        .unwrap();
    assert_eq!(
        harness.last_command().as_deref(),
        Some("netsh unittest testActionName MethodWithEnum testEnum=Value1")
    );
    proxy
        .invoke(&METHOD_WITH_ENUM, &[TestEnum::Value2.to_arg()])
        .unwrap();
    assert_eq!(
        harness.last_command().as_deref(),
        Some("netsh unittest testActionName MethodWithEnum testEnum=Value2")
    );
}

#[test]
fn test_supports_decorated_enumerations() {
    let harness = RecordingHarness::new();
    let proxy = proxy(&harness);

    proxy
        .invoke(&METHOD_WITH_DECORATED_ENUM, &[DecoratedEnum::Value1.to_arg()])
        .unwrap();
    assert_eq!(
        harness.last_command().as_deref(),
        Some("netsh unittest testActionName MethodWithDecoratedEnum testEnum=value1")
    );
    proxy
        .invoke(&METHOD_WITH_DECORATED_ENUM, &[DecoratedEnum::Value2.to_arg()])
        .unwrap();
    assert_eq!(
        harness.last_command().as_deref(),
        Some("netsh unittest testActionName MethodWithDecoratedEnum testEnum=value2")
    );
}

#[test]
fn test_supports_boolean_styles() {
    let harness = RecordingHarness::new();
    let proxy = proxy(&harness);

    proxy
        .invoke(
            &METHOD_WITH_BOOLEAN_TYPE_YES_NO,
            &[true.to_arg(), false.to_arg(), true.to_arg()],
        )
        .unwrap();
    assert_eq!(
        harness.last_command().as_deref(),
        Some(
            "netsh unittest testActionName MethodWithBooleanTypeYesNo testBooleanYesNo=yes testBooleanEnabledDisabled=disabled testBooleanTrueFalse=true"
        )
    );

    proxy
        .invoke(
            &METHOD_WITH_BOOLEAN_TYPE_YES_NO,
            &[false.to_arg(), true.to_arg(), false.to_arg()],
        )
        .unwrap();
    assert_eq!(
        harness.last_command().as_deref(),
        Some(
            "netsh unittest testActionName MethodWithBooleanTypeYesNo testBooleanYesNo=no testBooleanEnabledDisabled=enabled testBooleanTrueFalse=false"
        )
    );
}

#[test]
fn test_supports_method_name_decoration() {
    let harness = RecordingHarness::new();
    proxy(&harness)
        .invoke(&METHOD_WITH_NAME_DECORATION, &[])
        .unwrap();
    assert_eq!(
        harness.last_command().as_deref(),
        Some("netsh unittest testActionName test")
    );
}

#[test]
fn test_supports_parameter_name_decoration() {
    let harness = RecordingHarness::new();
    proxy(&harness)
        .invoke(
            &METHOD_WITH_PARAMETER_NAME_DECORATION,
            &["myParameterTest".to_arg()],
        )
        .unwrap();
    assert_eq!(
        harness.last_command().as_deref(),
        Some("netsh unittest testActionName MethodWithParameterNameDecoration test=myParameterTest")
    );
}

#[test]
fn test_calls_custom_response_processor() {
    let harness = RecordingHarness::responding("ignored");
    let result = proxy(&harness)
        .invoke(&METHOD_WITH_CUSTOM_RESPONSE_PROCESSOR, &[])
        .unwrap();
    assert_eq!(result, "CustomResponseProcessor");
}

#[test]
fn test_calls_custom_multi_response_processor() {
    let harness = RecordingHarness::new();
    let result = proxy(&harness)
        .invoke(&METHOD_WITH_CUSTOM_MULTI_RESPONSE_PROCESSOR, &[])
        .unwrap();
    assert_eq!(result.first().map(String::as_str), Some("CustomMultiResponseProcessor"));
}

#[test]
fn test_custom_processor_overrides_default() {
    let harness = RecordingHarness::responding("Name: alpha");
    let proxy = proxy(&harness);

    assert_eq!(
        proxy
            .binding(&METHOD_WITH_OVERRIDDEN_RESPONSE_PROCESSOR)
            .unwrap(),
        ProcessorBinding::SingleCustom
    );
    let result = proxy
        .invoke(&METHOD_WITH_OVERRIDDEN_RESPONSE_PROCESSOR, &[])
        .unwrap();
    assert_eq!(result.text, "overridden: Name: alpha");
}

#[test]
fn test_custom_multi_processor_overrides_default() {
    let harness = RecordingHarness::responding("Name: alpha");
    let result = proxy(&harness)
        .invoke(&METHOD_WITH_OVERRIDDEN_MULTI_RESPONSE_PROCESSOR, &[])
        .unwrap();
    assert_eq!(result.len(), 10);
}

#[test]
fn test_processor_with_both_conversions_fails() {
    let harness = RecordingHarness::new();
    let err = proxy(&harness)
        .invoke(&METHOD_WITH_OVERZEALOUS_RESPONSE_PROCESSOR, &[])
        .unwrap_err();

    match &err {
        ActionError::AmbiguousProcessor { method, processor } => {
            assert_eq!(method, "MethodWithOverzealousResponseProcessor");
            assert_eq!(processor, "OverzealousResponseProcessor");
        }
        other => panic!("Expected ambiguous processor, got {other:?}"),
    }
    assert!(err.is_configuration_error());
    assert_eq!(harness.call_count(), 0);
}

#[test]
fn test_processor_with_neither_conversion_fails() {
    let harness = RecordingHarness::new();
    let err = proxy(&harness)
        .invoke(&METHOD_WITH_INVALID_RESPONSE_PROCESSOR, &[])
        .unwrap_err();
    assert!(matches!(
        err,
        ActionError::UnsatisfiableProcessor { ref method, .. }
            if method == "MethodWithInvalidResponseProcessor"
    ));
}

#[test]
fn test_processor_of_other_shape_fails() {
    let harness = RecordingHarness::new();
    let err = proxy(&harness)
        .invoke(&METHOD_WITH_MISMATCHED_RESPONSE_PROCESSOR, &[])
        .unwrap_err();
    assert!(matches!(err, ActionError::UnsatisfiableProcessor { .. }));
}

#[test]
fn test_configuration_error_does_not_affect_other_methods() {
    let harness = RecordingHarness::responding("CustomResponse");
    let proxy = proxy(&harness);

    assert!(
        proxy
            .invoke(&METHOD_WITH_OVERZEALOUS_RESPONSE_PROCESSOR, &[])
            .is_err()
    );
    assert!(
        proxy
            .invoke(&METHOD_WITH_OVERZEALOUS_RESPONSE_PROCESSOR, &[])
            .is_err()
    );
    assert_eq!(
        proxy
            .invoke(&METHOD_WITH_CUSTOM_RESPONSE_PROCESSOR, &[])
            .unwrap(),
        "CustomResponseProcessor"
    );
    assert_eq!(harness.call_count(), 1);
}

#[test]
fn test_custom_processor_on_unit_method_is_ignored() {
    const UNIT_WITH_PROCESSOR: MethodSpec<()> = MethodSpec::new("UnitMethod", &[])
        .processor(CustomProcessor::new("UnitProcessor"));

    let harness = RecordingHarness::new();
    let proxy = proxy(&harness);
    assert_eq!(
        proxy.binding(&UNIT_WITH_PROCESSOR).unwrap(),
        ProcessorBinding::None
    );
    proxy.invoke(&UNIT_WITH_PROCESSOR, &[]).unwrap();
    assert_eq!(harness.call_count(), 1);
}

#[test]
fn test_custom_single_conversion_error_is_parse_error() {
    const FAILING: MethodSpec<String> = MethodSpec::new("Failing", &[])
        .processor(CustomProcessor::new("NeverProcessor").single(never_single));

    let harness = RecordingHarness::new();
    let err = proxy(&harness).invoke(&FAILING, &[]).unwrap_err();
    assert!(matches!(
        err,
        ActionError::Parse { ref reason, .. } if reason == "not reached"
    ));
}

#[test]
fn test_argument_count_mismatch_is_rejected() {
    let harness = RecordingHarness::new();
    let err = proxy(&harness)
        .invoke(&METHOD_WITH_NULL, &[Arg::Absent, Arg::Absent])
        .unwrap_err();
    assert!(matches!(
        err,
        ActionError::ArgumentCount {
            expected: 1,
            actual: 2,
            ..
        }
    ));
    assert_eq!(harness.call_count(), 0);
}

#[test]
fn test_harness_failure_propagates_unchanged() {
    let harness =
        FailingHarness::new("The requested operation requires elevation (Run as administrator).");
    let proxy = ActionProxy::create(ACTION, PREFIX, harness);
    let err = proxy.invoke(&SIMPLE_METHOD, &[]).unwrap_err();

    assert!(matches!(err, ActionError::Execution(HarnessError::Custom(_))));
    assert_eq!(
        err.to_string(),
        "The requested operation requires elevation (Run as administrator)."
    );
}

#[test]
fn test_proxy_is_shareable_across_threads() {
    let harness = RecordingHarness::responding("Name: alpha");
    let proxy = ActionProxy::create(ACTION, PREFIX, harness);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let response = proxy.invoke(&MULTI_RESPONSE_METHOD, &[]).unwrap();
                assert_eq!(response.len(), 1);
            });
        }
    });

    assert_eq!(proxy.harness().call_count(), 4);
}
