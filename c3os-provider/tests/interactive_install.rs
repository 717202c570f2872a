use std::collections::HashSet;
use std::thread;

use c3os_provider::identity::{ConnectionData, FixedIdentity, MeshIdentityGenerator};
use c3os_provider::kernel::PluginFactory;
use c3os_provider::primitives::{Event, EventResponse, EventType};
use c3os_provider::prompts::{
    PromptDescriptor, PromptEncoder, PromptError, PromptListBuilder, PromptMode, PromptResult,
};
use c3os_provider::{InteractiveInstall, provider_factory};
use serde_json::Value;

fn run(factory: &PluginFactory, name: &EventType, input: &str) -> Value {
    let mut output = Vec::new();
    factory
        .run(name, input.as_bytes(), &mut output)
        .expect("plugin exchange");
    serde_json::from_slice(&output).expect("response document")
}

fn interactive_install_input() -> String {
    serde_json::to_string(&Event::new(EventType::INTERACTIVE_INSTALL)).expect("event")
}

#[test]
fn bus_receives_prompt_list() {
    let factory = provider_factory(MeshIdentityGenerator::default());
    let response = run(
        &factory,
        &EventType::INTERACTIVE_INSTALL,
        &interactive_install_input(),
    );

    assert_eq!(response["state"], "");
    assert_eq!(response["error"], "");

    let prompts: Vec<Value> =
        serde_json::from_str(response["data"].as_str().expect("data string")).expect("prompts");
    assert_eq!(prompts.len(), 2);

    assert_eq!(prompts[0]["YAMLSection"], "c3os.network_token");
    assert_eq!(prompts[0]["AskFirst"], true);
    assert_eq!(
        prompts[0]["AskPrompt"],
        "Do you want to setup a full mesh-support?"
    );
    let token = prompts[0]["IfEmpty"].as_str().expect("token");
    let connection = ConnectionData::from_token(token).expect("token decodes");
    assert!(!connection.room_name.is_empty());

    assert_eq!(prompts[1]["YAMLSection"], "k3s.enabled");
    assert_eq!(prompts[1]["Bool"], true);
    assert_eq!(prompts[1]["Prompt"], "Do you want to enable k3s?");
    assert!(prompts[1].get("AskPrompt").is_none());
}

#[test]
fn other_events_get_empty_envelope() {
    let factory = provider_factory(FixedIdentity::new("dG9rZW4="));
    let input = serde_json::to_string(&Event::new(EventType::BOOTSTRAP)).expect("event");

    let response = run(&factory, &EventType::BOOTSTRAP, &input);

    assert_eq!(
        response,
        serde_json::json!({"state": "", "data": "", "error": ""})
    );
}

struct RejectingEncoder;

impl PromptEncoder for RejectingEncoder {
    fn encode(&self, _prompts: &[PromptDescriptor]) -> PromptResult<String> {
        Err(PromptError::serialization("unsupported value"))
    }
}

#[test]
fn encoder_fault_travels_in_the_envelope() {
    let builder = PromptListBuilder::new(FixedIdentity::new("dG9rZW4=")).with_encoder(RejectingEncoder);
    let factory = PluginFactory::new().with_handler(
        EventType::INTERACTIVE_INSTALL,
        InteractiveInstall::from_builder(builder),
    );

    let response = run(
        &factory,
        &EventType::INTERACTIVE_INSTALL,
        &interactive_install_input(),
    );

    assert_eq!(response["data"], "");
    assert_eq!(response["state"], "");
    let error = response["error"].as_str().expect("error");
    assert!(error.starts_with("Failed marshalling JSON input:"));
    assert!(error.contains("unsupported value"));
}

#[test]
fn concurrent_invocations_are_independent() {
    let factory = provider_factory(MeshIdentityGenerator::default());

    let responses: Vec<EventResponse> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    factory.dispatch(
                        &EventType::INTERACTIVE_INSTALL,
                        Event::new(EventType::INTERACTIVE_INSTALL),
                    )
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().expect("worker"))
            .collect()
    });

    let mut tokens = HashSet::new();
    for response in &responses {
        assert!(!response.errored());
        let prompts: Vec<PromptDescriptor> = response.unmarshal().expect("prompts");
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[1].mode(), PromptMode::Boolean);
        tokens.insert(prompts[0].if_empty_value().expect("token").to_owned());
    }
    assert_eq!(tokens.len(), responses.len());
}
