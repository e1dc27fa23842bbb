use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{QuizPlanner, QuizService};
use spell_core::model::{WordBank, WordEntry};
use storage::repository::InMemoryStore;

use crate::context::{UiApp, build_app_context};
use crate::views::quiz::{QuizIntent, QuizTestHandles};
use crate::views::QuizScreen;

#[derive(Clone)]
struct TestApp {
    quiz: Arc<QuizService>,
}

impl UiApp for TestApp {
    fn quiz(&self) -> Arc<QuizService> {
        Arc::clone(&self.quiz)
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    show_errors: bool,
    handles: QuizTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { QuizScreen { show_errors: props.show_errors } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub quiz: Arc<QuizService>,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Send `intent` through the screen's own dispatcher.
    pub fn send(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
    }

    /// Let spawned intent tasks and the snapshot subscription catch up.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Answer the active question, correctly or with its first misspelling.
    pub async fn answer(&mut self, correct: bool) {
        let question = self.quiz.snapshot().question.expect("active question");
        let entry = self
            .quiz
            .bank()
            .get(&question.word)
            .expect("word in bank")
            .clone();
        let choice = if correct {
            entry.spelling().to_string()
        } else {
            entry.misspellings()[0].clone()
        };
        assert!(self.quiz.select_answer(&choice).await);
        self.quiz.advance().await.expect("scored");
        self.drive_async().await;
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn small_bank() -> WordBank {
    WordBank::new(vec![
        WordEntry::new("necessary", ["neccessary", "necessery"]).unwrap(),
        WordEntry::new("weird", ["wierd"]).unwrap(),
        WordEntry::new("rhythm", ["rythm", "rhythym"]).unwrap(),
    ])
    .unwrap()
}

pub async fn setup_view_harness(show_errors: bool) -> ViewHarness {
    let quiz = Arc::new(
        QuizService::load(
            Arc::new(small_bank()),
            Arc::new(InMemoryStore::new()),
            QuizPlanner::seeded(7),
        )
        .await,
    );
    let app = Arc::new(TestApp {
        quiz: Arc::clone(&quiz),
    });

    let handles = QuizTestHandles::default();
    let dom = VirtualDom::new_with_props(
        QuizHarness,
        QuizHarnessProps {
            app,
            show_errors,
            handles: handles.clone(),
        },
    );

    let mut harness = ViewHarness { dom, quiz, handles };
    harness.rebuild();
    harness
}
