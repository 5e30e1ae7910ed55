//! Scripted fake providers for engine and client tests.

#![allow(dead_code)]

use async_trait::async_trait;
use inkbound_core::GenerationConfig;
use inkbound_error::{GenerationError, GenerationErrorKind, ImageError, ImageErrorKind, InkboundResult};
use inkbound_interface::{ImageProvider, TextProvider};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Text provider that replays a fixed script of responses, one per call.
pub struct ScriptedText {
    responses: Mutex<VecDeque<InkboundResult<String>>>,
    calls: AtomicUsize,
}

impl ScriptedText {
    pub fn new(responses: Vec<InkboundResult<String>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for ScriptedText {
    async fn generate(&self, _prompt: &str, _config: &GenerationConfig) -> InkboundResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("script exhausted after {} calls", self.calls()))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-test-model"
    }
}

pub fn api_failure(msg: &str) -> InkboundResult<String> {
    Err(GenerationError::new(GenerationErrorKind::ApiRequest(msg.to_string())).into())
}

/// Image provider that either always succeeds with a fixed payload or
/// always fails, recording every prompt it is asked to render.
pub struct ScriptedImages {
    name: &'static str,
    payload: Option<Vec<u8>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedImages {
    pub fn succeeding(name: &'static str, payload: Vec<u8>) -> Self {
        Self {
            name,
            payload: Some(payload),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(name: &'static str) -> Self {
        Self {
            name,
            payload: None,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl ImageProvider for ScriptedImages {
    async fn generate(&self, prompt: &str) -> InkboundResult<Vec<u8>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match &self.payload {
            Some(data) => Ok(data.clone()),
            None => Err(ImageError::new(ImageErrorKind::Transport("down".to_string())).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        self.name
    }
}

pub const SCENE: &str =
    "The harbor bell rings twice as the smuggler's skiff noses out of the fog toward the pier.";
pub const ENDING_SCENE: &str =
    "The skiff slips past the customs lights one last time, and the smuggler finally rests.";
pub const CHOICES: &str =
    "CHOICE_1: Signal the lighthouse keeper with the lantern\nCHOICE_2: Cut the engine and drift in silent";
pub const BREAKDOWN: &str = "PANEL_1:\nVISUAL: Fog over the harbor\nACTION: The skiff glides in\nCAMERA: wide shot\nEMOTION: tense\nDIALOGUE: none\nPANEL_2:\nVISUAL: The pier\nACTION: A figure waits\nCAMERA: close-up\nEMOTION: wary\nDIALOGUE: \"You're late.\"";

pub fn ok(s: &str) -> InkboundResult<String> {
    Ok(s.to_string())
}
