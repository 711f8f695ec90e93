#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::{to_bytes, Body, Bytes};
use axum::http::{Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;
use uuid::Uuid;

use uploadai::{
    ChatCompletionRequest, CompletionProvider, DomainError, Prompt, PromptRepository,
    TranscriptionProvider, TranscriptionRequest, Video, VideoRepository,
};
use uploadai_server::adapters::LocalAudioStore;
use uploadai_server::application::{CompletionService, PromptService, VideoService};
use uploadai_server::{build_router, AppState};

// ============================================
// In-memory repositories
// ============================================

#[derive(Default)]
pub struct InMemoryPromptRepository {
    prompts: Mutex<Vec<Prompt>>,
}

#[async_trait]
impl PromptRepository for InMemoryPromptRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prompt>, DomainError> {
        let prompts = self.prompts.lock().unwrap();
        Ok(prompts.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Prompt>, DomainError> {
        let mut prompts = self.prompts.lock().unwrap().clone();
        prompts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(prompts)
    }

    async fn save(&self, prompt: &Prompt) -> Result<Prompt, DomainError> {
        let mut prompts = self.prompts.lock().unwrap();
        match prompts.iter_mut().find(|p| p.id == prompt.id) {
            Some(existing) => *existing = prompt.clone(),
            None => prompts.push(prompt.clone()),
        }
        Ok(prompt.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Prompt>, DomainError> {
        let mut prompts = self.prompts.lock().unwrap();
        let index = prompts.iter().position(|p| p.id == id);
        Ok(index.map(|i| prompts.remove(i)))
    }
}

#[derive(Default)]
pub struct InMemoryVideoRepository {
    videos: Mutex<HashMap<Uuid, Video>>,
}

impl InMemoryVideoRepository {
    pub fn insert(&self, video: Video) {
        self.videos.lock().unwrap().insert(video.id, video);
    }

    pub fn get(&self, id: Uuid) -> Option<Video> {
        self.videos.lock().unwrap().get(&id).cloned()
    }

    pub fn len(&self) -> usize {
        self.videos.lock().unwrap().len()
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Video>, DomainError> {
        Ok(self.get(id))
    }

    async fn create(&self, video: &Video) -> Result<Video, DomainError> {
        self.insert(video.clone());
        Ok(video.clone())
    }

    async fn save_transcription(
        &self,
        id: Uuid,
        transcription: &str,
    ) -> Result<Video, DomainError> {
        let mut videos = self.videos.lock().unwrap();
        let video = videos
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Video", id))?;
        if video.transcription.is_none() {
            video.transcription = Some(transcription.to_string());
        }
        Ok(video.clone())
    }
}

// ============================================
// Provider doubles
// ============================================

/// Returns a fixed text and counts calls
pub struct CountingTranscriber {
    text: String,
    delay: Duration,
    calls: AtomicUsize,
    requests: Mutex<Vec<TranscriptionRequest>>,
}

impl CountingTranscriber {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<TranscriptionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TranscriptionProvider for CountingTranscriber {
    async fn transcribe(&self, request: TranscriptionRequest) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.text.clone())
    }

    fn model_id(&self) -> &str {
        "mock-whisper"
    }
}

/// Records every completion request and echoes the message back
#[derive(Default)]
pub struct RecordingLlm {
    calls: Mutex<Vec<ChatCompletionRequest>>,
}

impl RecordingLlm {
    pub fn calls(&self) -> Vec<ChatCompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for RecordingLlm {
    async fn complete(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<serde_json::Value, DomainError> {
        let content = format!("echo: {}", request.message);
        self.calls.lock().unwrap().push(request);

        Ok(serde_json::json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": content },
                "finish_reason": "stop"
            }]
        }))
    }

    fn model_id(&self) -> &str {
        "mock-gpt"
    }
}

// ============================================
// Test application
// ============================================

pub struct TestApp {
    pub router: Router,
    pub prompts: Arc<InMemoryPromptRepository>,
    pub videos: Arc<InMemoryVideoRepository>,
    pub transcriber: Arc<CountingTranscriber>,
    pub llm: Arc<RecordingLlm>,
    pub upload_dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_transcriber(CountingTranscriber::new("olá mundo"))
    }

    pub fn with_transcriber(transcriber: CountingTranscriber) -> Self {
        Self::build(Arc::new(transcriber), Arc::new(RecordingLlm::default()))
    }

    pub fn with_llm(llm: Arc<dyn CompletionProvider>) -> (Router, Arc<InMemoryVideoRepository>) {
        let videos = Arc::new(InMemoryVideoRepository::default());
        let upload_dir = TempDir::new().unwrap();
        let state = AppState {
            prompt_service: Arc::new(PromptService::new(Arc::new(
                InMemoryPromptRepository::default(),
            ))),
            video_service: Arc::new(VideoService::new(
                videos.clone(),
                Arc::new(LocalAudioStore::new(upload_dir.path()).unwrap()),
                Arc::new(CountingTranscriber::new("unused")),
            )),
            completion_service: Arc::new(CompletionService::new(videos.clone(), llm)),
        };
        (build_router(state), videos)
    }

    fn build(transcriber: Arc<CountingTranscriber>, llm: Arc<RecordingLlm>) -> Self {
        let prompts = Arc::new(InMemoryPromptRepository::default());
        let videos = Arc::new(InMemoryVideoRepository::default());
        let upload_dir = TempDir::new().unwrap();
        let store = Arc::new(LocalAudioStore::new(upload_dir.path()).unwrap());

        let state = AppState {
            prompt_service: Arc::new(PromptService::new(prompts.clone())),
            video_service: Arc::new(VideoService::new(
                videos.clone(),
                store,
                transcriber.clone(),
            )),
            completion_service: Arc::new(CompletionService::new(videos.clone(), llm.clone())),
        };

        Self {
            router: build_router(state),
            prompts,
            videos,
            transcriber,
            llm,
            upload_dir,
        }
    }

    /// Seed a video whose audio file exists on disk
    pub fn seed_video(&self, transcription: Option<&str>) -> Video {
        let id = Uuid::new_v4();
        let path = self.upload_dir.path().join(format!("{id}.mp3"));
        std::fs::write(&path, b"ID3 fake audio").unwrap();

        let mut video = Video::new(id, "lecture.mp3".to_string(), path.display().to_string());
        video.transcription = transcription.map(str::to_string);
        self.videos.insert(video.clone());
        video
    }

    /// Files in the upload directory, temp files included
    pub fn stored_files(&self) -> usize {
        std::fs::read_dir(self.upload_dir.path()).unwrap().count()
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Bytes) {
        send(&self.router, request).await
    }
}

// ============================================
// Request helpers
// ============================================

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

const BOUNDARY: &str = "uploadai-test-boundary";

pub fn multipart_request(file_name: &str, content: &[u8]) -> Request<Body> {
    multipart_body(file_part(file_name, content))
}

/// A plain form field followed by the file part
pub fn multipart_request_with_leading_field(file_name: &str, content: &[u8]) -> Request<Body> {
    let mut body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"title\"\r\n\r\nMy lecture\r\n"
    )
    .into_bytes();
    body.extend(file_part(file_name, content));
    multipart_body(body)
}

/// Only plain form fields, no file
pub fn multipart_request_without_file() -> Request<Body> {
    let body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"title\"\r\n\r\nMy lecture\r\n--{BOUNDARY}--\r\n"
    );
    multipart_body(body.into_bytes())
}

fn file_part(file_name: &str, content: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(content.len() + 256);
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: audio/mpeg\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn empty_multipart_request() -> Request<Body> {
    multipart_body(format!("--{BOUNDARY}--\r\n").into_bytes())
}

fn multipart_body(body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/videos/upload")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub fn json(body: &Bytes) -> serde_json::Value {
    serde_json::from_slice(body).unwrap()
}
