use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use hunter_core::Catalog;
use hunter_core::model::{ChallengeId, Progress};
use services::ProgressStore;
use storage::repository::InMemoryRepository;
use storage::{ProgressRepository, StorageError};

use crate::context::{UiApp, build_app_context};
use crate::views::GameView;

use super::game::{GameActions, GameTestHandles};

struct TestApp {
    catalog: Arc<Catalog>,
    progress_store: ProgressStore,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn progress_store(&self) -> ProgressStore {
        self.progress_store.clone()
    }
}

/// In-memory repository whose writes take `delay` to complete.
struct SlowRepository {
    inner: InMemoryRepository,
    delay: Duration,
}

#[async_trait]
impl ProgressRepository for SlowRepository {
    async fn get_progress(&self) -> Result<Option<Progress>, StorageError> {
        self.inner.get_progress().await
    }

    async fn save_progress(&self, progress: &Progress) -> Result<(), StorageError> {
        tokio::time::sleep(self.delay).await;
        self.inner.save_progress(progress).await
    }

    async fn clear_progress(&self) -> Result<(), StorageError> {
        tokio::time::sleep(self.delay).await;
        self.inner.clear_progress().await
    }
}

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    handles: GameTestHandles,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn GameHarness(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { GameView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub store: ProgressStore,
    pub catalog: Arc<Catalog>,
    pub handles: GameTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until `needle` shows up in the rendered HTML or the attempts run out.
    pub async fn drive_until(&mut self, needle: &str) -> String {
        for _ in 0..80 {
            self.drive_async().await;
            let html = self.render();
            if html.contains(needle) {
                return html;
            }
        }
        self.render()
    }

    /// Keep driving for at least `duration` of wall-clock time.
    pub async fn drive_for(&mut self, duration: Duration) -> String {
        let deadline = tokio::time::Instant::now() + duration;
        while tokio::time::Instant::now() < deadline {
            self.drive_async().await;
        }
        self.render()
    }

    pub fn actions(&self) -> GameActions {
        self.handles.actions()
    }

    /// Invoke a view callback inside the dom's runtime, then flush the render.
    pub fn call<T: 'static>(&mut self, callback: Callback<T>, value: T) {
        self.dom.in_runtime(|| callback.call(value));
        drive_dom(&mut self.dom);
    }

    /// Open challenge `index` from the menu and replace its draft with `text`.
    pub async fn play(&mut self, index: usize, text: &str) {
        let id = self.catalog.as_slice()[index].id().clone();
        let actions = self.actions();
        self.call(actions.select, id);
        self.call(actions.input, text.to_string());
        self.drive_async().await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_view_harness(completed: &[&str], score: u32) -> ViewHarness {
    setup_view_harness_with_delay(completed, score, Duration::ZERO).await
}

pub async fn setup_view_harness_with_delay(
    completed: &[&str],
    score: u32,
    write_delay: Duration,
) -> ViewHarness {
    let catalog = Arc::new(Catalog::builtin().expect("builtin catalog").clone());
    let repo = Arc::new(SlowRepository {
        inner: InMemoryRepository::new(),
        delay: write_delay,
    });
    if !completed.is_empty() || score > 0 {
        let progress =
            Progress::from_persisted(score, completed.iter().copied().map(ChallengeId::from));
        repo.inner.save_progress(&progress).await.expect("seed progress");
    }
    let store = ProgressStore::new(repo);

    let app = Arc::new(TestApp {
        catalog: Arc::clone(&catalog),
        progress_store: store.clone(),
    });
    let handles = GameTestHandles::default();
    let dom = VirtualDom::new_with_props(
        GameHarness,
        HarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness {
        dom,
        store,
        catalog,
        handles,
    };
    harness.rebuild();
    harness
}

#[tokio::test]
async fn game_view_opens_on_the_menu() {
    let mut harness = setup_view_harness(&[], 0).await;
    let html = harness.drive_until("Select Your Mission").await;

    assert!(html.contains("Select Your Mission"));
    assert!(html.contains("Missing Semicolon"));
    assert!(html.contains("Syntax Challenge"));
    assert!(html.contains("Start"));
    assert!(html.contains("Locked"));
    assert!(html.contains("0 points"));
}

#[tokio::test]
async fn game_view_reflects_saved_progress() {
    let mut harness = setup_view_harness(&["1", "2"], 125).await;
    let html = harness.drive_until("125 points").await;

    assert!(html.contains("125 points"));
    assert!(html.contains("2 bugs fixed"));
    assert!(html.contains("Replay"));
    assert_eq!(harness.store.load().await.score(), 125);
}

#[tokio::test]
async fn fix_shows_banner_then_modal_after_delay() {
    let mut harness = setup_view_harness(&[], 0).await;
    harness.drive_until("Select Your Mission").await;
    let fix = harness.catalog.as_slice()[0].correct_code().to_string();
    harness.play(0, &fix).await;

    let submit = harness.actions().submit;
    harness.call(submit, ());
    let html = harness.render();
    assert!(html.contains("Bug Fixed!"));
    assert!(html.contains("50 points"));
    assert!(!html.contains("Bug Eliminated"));

    let html = harness.drive_until("Bug Eliminated").await;
    assert!(html.contains("Bug Eliminated"));
    assert!(html.contains("+50 Points Earned"));
    assert!(html.contains("Next Challenge"));
    assert_eq!(harness.store.load().await.score(), 50);
}

#[tokio::test]
async fn leaving_while_the_save_is_pending_stays_on_the_menu() {
    let mut harness = setup_view_harness_with_delay(&[], 0, Duration::from_millis(300)).await;
    harness.drive_until("Select Your Mission").await;
    let fix = harness.catalog.as_slice()[0].correct_code().to_string();
    harness.play(0, &fix).await;

    let actions = harness.actions();
    harness.call(actions.submit, ());
    harness.call(actions.menu, ());

    let html = harness.drive_for(Duration::from_millis(2000)).await;
    assert!(html.contains("Select Your Mission"));
    assert!(!html.contains("Bug Eliminated"));
    assert!(!html.contains("Run Code"));
    assert!(html.contains("50 points"));
    assert_eq!(harness.store.load().await.score(), 50);
}

#[tokio::test]
async fn failure_banner_clears_after_delay() {
    let mut harness = setup_view_harness(&[], 0).await;
    harness.drive_until("Select Your Mission").await;
    harness.play(0, "still broken").await;

    let submit = harness.actions().submit;
    harness.call(submit, ());
    assert!(harness.render().contains("Bug Still Present"));

    let html = harness.drive_for(Duration::from_millis(2400)).await;
    assert!(!html.contains("Bug Still Present"));
    assert!(html.contains("Run Code"));
    assert_eq!(harness.store.load().await.score(), 0);
}

#[tokio::test]
async fn reset_returns_to_a_fresh_menu() {
    let mut harness = setup_view_harness(&["1", "2"], 125).await;
    harness.drive_until("125 points").await;

    let reset = harness.actions().reset;
    harness.call(reset, ());
    let html = harness.drive_until("0 points").await;
    assert!(html.contains("0 points"));
    assert!(!html.contains("Replay"));
    assert_eq!(harness.store.load().await, Progress::default());
}

#[tokio::test]
async fn last_fix_shows_the_trophy_without_next() {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let last = catalog.len() - 1;
    let earlier: Vec<String> = catalog.as_slice()[..last]
        .iter()
        .map(|challenge| challenge.id().to_string())
        .collect();
    let earlier: Vec<&str> = earlier.iter().map(String::as_str).collect();
    let mut harness = setup_view_harness(&earlier, 0).await;
    harness.drive_until("Select Your Mission").await;
    let fix = catalog.as_slice()[last].correct_code().to_string();
    harness.play(last, &fix).await;

    let submit = harness.actions().submit;
    harness.call(submit, ());
    let html = harness.drive_until("Bug Eliminated").await;
    assert!(html.contains("All Challenges Complete!"));
    assert!(!html.contains("Next Challenge"));
}
